pub use self::{bird::*, pipe::*, sensors::*};

mod bird;
pub mod consts;
mod pipe;
mod sensors;
