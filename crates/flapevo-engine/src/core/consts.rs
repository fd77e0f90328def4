//! World geometry and physics constants.
//!
//! All positions are in screen units. `x` grows to the right, `y` grows
//! downward, so an upward impulse is a negative velocity.

/// Width of the visible world.
pub const SCREEN_WIDTH: f64 = 1200.0;

/// Height of the visible world. A bird leaving `[0, SCREEN_HEIGHT]` dies.
pub const SCREEN_HEIGHT: f64 = 800.0;

/// Horizontal extent of a pipe.
pub const PIPE_WIDTH: f64 = 80.0;

/// Vertical size of the opening between the upper and lower pipe.
pub const PIPE_GAP: f64 = 200.0;

/// Horizontal spacing between the left edges of consecutive pipes.
pub const PIPE_DISTANCE: f64 = 400.0;

/// Distance the course scrolls per tick.
pub const PIPE_SPEED: f64 = 4.0;

/// Left edge of the first pipe of a fresh course.
pub const FIRST_PIPE_X: f64 = SCREEN_WIDTH * 0.33;

/// Side length of a bird's square hitbox.
pub const BIRD_SIZE: f64 = 40.0;

/// Downward acceleration applied every tick.
pub const GRAVITY: f64 = 0.5;

/// Vertical velocity set by a flap.
pub const FLAP_VELOCITY: f64 = -8.0;
