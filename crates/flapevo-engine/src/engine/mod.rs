//! Course generation and world stepping.
//!
//! - [`Course`] - seeded, scrolling sequence of pipes
//! - [`CourseSeed`] - seed for deterministic pipe generation
//! - [`World`] - advances a set of birds through the course one tick at a time
//!
//! # Tick Order
//!
//! 1. The caller reads [`World::sense`] for each living bird and flaps as it sees fit
//! 2. [`World::step`] scrolls the course, credits distance and score to living
//!    birds, integrates gravity and resolves collisions
//!
//! A bird that dies keeps the distance and score it had accumulated.

pub use self::{course::*, world::*};

mod course;
mod world;
