use rand::Rng;

use super::consts::{BIRD_SIZE, FLAP_VELOCITY, GRAVITY, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Physical runtime state of one bird.
///
/// A bird only moves vertically; the course scrolls past it. Besides its
/// position and velocity it carries the two fitness signals the world
/// maintains for it:
///
/// - **distance traveled** - grows by the scroll speed every tick the bird
///   is alive (continuous signal)
/// - **score** - number of pipes passed while alive (discrete signal)
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    y: f64,
    velocity: f64,
    alive: bool,
    distance_traveled: f64,
    score: usize,
}

impl Bird {
    /// Creates a bird at a random spawn point.
    ///
    /// The horizontal position is uniform in `[W/20, W/5]`, the vertical
    /// position uniform in `[H/4, H/2]` and the initial velocity uniform in
    /// `[-2, 2]`. Counters start at zero and the bird is alive.
    pub fn spawn<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            x: rng.random_range(SCREEN_WIDTH / 20.0..=SCREEN_WIDTH / 5.0),
            y: rng.random_range(SCREEN_HEIGHT / 4.0..=SCREEN_HEIGHT / 2.0),
            velocity: rng.random_range(-2.0..=2.0),
            alive: true,
            distance_traveled: 0.0,
            score: 0,
        }
    }

    /// Creates a living bird at an exact position with zero velocity.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            alive: true,
            distance_traveled: 0.0,
            score: 0,
        }
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub const fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Total distance scrolled while this bird was alive.
    #[must_use]
    pub const fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Number of pipes passed while this bird was alive.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Sets the vertical velocity to the upward flap impulse.
    pub const fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    pub const fn kill(&mut self) {
        self.alive = false;
    }

    /// Credits `dx` of scrolled distance. Dead birds keep their distance.
    pub fn advance(&mut self, dx: f64) {
        if self.alive {
            self.distance_traveled += dx;
        }
    }

    pub(crate) const fn set_score(&mut self, score: usize) {
        if self.alive {
            self.score = score;
        }
    }

    /// Integrates gravity for one tick and kills the bird when its hitbox
    /// leaves the screen vertically.
    pub(crate) fn fall(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        if self.y < 0.0 || self.y + BIRD_SIZE > SCREEN_HEIGHT {
            self.alive = false;
        }
    }
}
