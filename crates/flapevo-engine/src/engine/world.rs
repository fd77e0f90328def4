use crate::core::{
    Bird, Pipe, Sensors,
    consts::{FIRST_PIPE_X, PIPE_DISTANCE, PIPE_SPEED, PIPE_WIDTH},
};

use super::{Course, CourseSeed};

/// The obstacle environment shared by every bird of one episode.
///
/// The world owns the course and the total scrolled distance. Birds are owned
/// by the caller and passed to [`Self::step`] each tick.
#[derive(Debug, Clone)]
pub struct World {
    course: Course,
    distance: f64,
    first_pipe_edge: f64,
    score: usize,
    ticks: usize,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with a randomly seeded course.
    #[must_use]
    pub fn new() -> Self {
        Self::from_course(Course::new())
    }

    /// Creates a world whose pipes are fully determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: CourseSeed) -> Self {
        Self::from_course(Course::with_seed(seed))
    }

    fn from_course(course: Course) -> Self {
        Self {
            course,
            distance: 0.0,
            first_pipe_edge: FIRST_PIPE_X + PIPE_WIDTH,
            score: 0,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Distance scrolled since the last reset.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Number of pipes passed since the last reset.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Ticks stepped since the last reset.
    #[must_use]
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Starts a new episode: clears the course, lays out the first screen of
    /// pipes and zeroes the counters.
    ///
    /// The course generator is not reseeded, so consecutive episodes see
    /// different (but still seed-determined) pipes.
    pub fn reset(&mut self) {
        self.course.clear();
        self.course.refill();
        self.first_pipe_edge = self
            .course
            .pipes()
            .next()
            .map_or(FIRST_PIPE_X + PIPE_WIDTH, Pipe::right);
        self.distance = 0.0;
        self.score = 0;
        self.ticks = 0;
    }

    /// Reads the sensors of `bird` against the current course.
    #[must_use]
    pub fn sense(&self, bird: &Bird) -> Sensors {
        Sensors::read(bird, self.course.closest(bird.x()))
    }

    /// Advances the world by one tick.
    ///
    /// Living birds are credited [`PIPE_SPEED`] of distance and the current
    /// score, then fall under gravity. A bird that leaves the screen or
    /// touches a pipe dies.
    pub fn step<'a, I>(&mut self, birds: I)
    where
        I: IntoIterator<Item = &'a mut Bird>,
    {
        self.ticks += 1;
        self.distance += PIPE_SPEED;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let passed = ((self.distance - self.first_pipe_edge + FIRST_PIPE_X) / PIPE_DISTANCE)
            .floor()
            .max(0.0) as usize;
        self.score = passed;

        self.course.refill();
        self.course.scroll(PIPE_SPEED);

        for bird in birds.into_iter().filter(|bird| bird.is_alive()) {
            bird.set_score(self.score);
            bird.advance(PIPE_SPEED);
            bird.fall();
            if self.course.pipes().any(|pipe| pipe.collides_with(bird)) {
                bird.kill();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::consts::{FLAP_VELOCITY, SCREEN_HEIGHT};

    use super::*;

    fn seeded() -> World {
        let mut world = World::with_seed(CourseSeed::from_bytes([7; 16]));
        world.reset();
        world
    }

    #[test]
    fn test_reset_lays_out_course() {
        let world = seeded();
        assert!(!world.course().is_empty());
        assert_eq!(world.distance(), 0.0);
        assert_eq!(world.score(), 0);
        assert_eq!(world.ticks(), 0);
    }

    #[test]
    fn test_step_credits_living_birds_only() {
        let mut world = seeded();
        let mut dead = Bird::at(100.0, 300.0);
        dead.kill();
        let mut birds = vec![Bird::at(100.0, 300.0), dead];
        world.step(&mut birds);

        assert_eq!(world.ticks(), 1);
        assert_eq!(world.distance(), PIPE_SPEED);
        assert_eq!(birds[0].distance_traveled(), PIPE_SPEED);
        assert_eq!(birds[1].distance_traveled(), 0.0);
    }

    #[test]
    fn test_unflapping_bird_eventually_dies() {
        let mut world = seeded();
        let mut birds = vec![Bird::at(100.0, SCREEN_HEIGHT / 2.0)];
        while birds[0].is_alive() {
            world.step(&mut birds);
            assert!(world.ticks() < 1000);
        }
        assert!(birds[0].distance_traveled() > 0.0);
    }

    #[test]
    fn test_score_counts_passed_pipes() {
        let mut world = seeded();
        let mut birds: Vec<Bird> = Vec::new();
        let ticks_per_pipe = PIPE_DISTANCE / PIPE_SPEED;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ticks = (ticks_per_pipe * 3.0) as usize + 100;
        for _ in 0..ticks {
            world.step(&mut birds);
        }
        assert!(world.score() >= 3);
    }

    #[test]
    fn test_sense_matches_course_lookup() {
        let world = seeded();
        let mut bird = Bird::at(100.0, 300.0);
        let sensors = world.sense(&bird);
        let first = world.course().pipes().next().unwrap();
        assert_eq!(sensors.ahead, first.left() - bird.x());
        assert_eq!(sensors.gap_top, bird.y() - first.gap_top());

        bird.flap();
        assert_eq!(bird.velocity(), FLAP_VELOCITY);
    }
}
