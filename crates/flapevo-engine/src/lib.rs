//! Headless scrolling-obstacle environment.
//!
//! The crate simulates the world the evolved agents live in: a course of
//! pipes scrolling from right to left, birds falling under gravity, and the
//! collision rules that end a bird's run. It knows nothing about decision
//! models; a caller reads [`Sensors`] for each bird, decides whether to
//! [`Bird::flap`], and then advances the [`World`] by one tick.
//!
//! ```
//! use flapevo_engine::{Bird, World};
//!
//! let mut rng = rand::rng();
//! let mut world = World::new();
//! let mut birds = vec![Bird::spawn(&mut rng), Bird::spawn(&mut rng)];
//!
//! world.reset();
//! while birds.iter().any(Bird::is_alive) && world.ticks() < 1000 {
//!     for bird in birds.iter_mut().filter(|b| b.is_alive()) {
//!         if world.sense(bird).gap_bottom < 50.0 {
//!             bird.flap();
//!         }
//!     }
//!     world.step(&mut birds);
//! }
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
