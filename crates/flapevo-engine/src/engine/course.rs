use std::{collections::VecDeque, fmt::Write as _};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{
    Pipe,
    consts::{FIRST_PIPE_X, PIPE_DISTANCE, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH},
};

/// The scrolling sequence of pipes.
///
/// Pipes are kept ordered by their left edge. The course spawns new pipes at
/// the right edge of the screen as the existing ones scroll away, and drops
/// pipes that have left the screen on the left.
///
/// Gap heights are drawn from a course-local generator, so two courses built
/// from the same [`CourseSeed`] produce the same obstacles.
#[derive(Debug, Clone)]
pub struct Course {
    rng: Pcg32,
    pipes: VecDeque<Pipe>,
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic pipe generation.
///
/// Serialized as a 32-character hex string.
///
/// ```
/// use flapevo_engine::{Course, CourseSeed};
/// use rand::Rng as _;
///
/// let seed: CourseSeed = rand::rng().random();
/// let mut a = Course::with_seed(seed);
/// let mut b = Course::with_seed(seed);
/// a.refill();
/// b.refill();
/// assert!(a.pipes().eq(b.pipes()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSeed([u8; 16]);

impl CourseSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl Serialize for CourseSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        for byte in self.0 {
            write!(&mut hex_str, "{byte:02x}").map_err(serde::ser::Error::custom)?;
        }
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for CourseSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for CourseSeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(format!(
                "invalid seed: expected 32 hex characters, got {}",
                s.len()
            ));
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|e| format!("invalid seed: {s} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Distribution<CourseSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CourseSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        CourseSeed(seed)
    }
}

impl Course {
    /// Creates an empty course with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic pipes.
    #[must_use]
    pub fn with_seed(seed: CourseSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
            pipes: VecDeque::new(),
        }
    }

    /// Pipes currently on the course, ordered left to right.
    pub fn pipes(&self) -> impl ExactSizeIterator<Item = &Pipe> + '_ {
        self.pipes.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Removes every pipe. The generator keeps its state.
    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    /// Brings the pipe sequence up to date with the visible screen.
    ///
    /// An empty course starts with a pipe at [`FIRST_PIPE_X`]. Then the
    /// front pipe is dropped once it has fully left the screen, and new pipes
    /// are appended [`PIPE_DISTANCE`] apart while they would start on screen.
    pub fn refill(&mut self) {
        if self.pipes.is_empty() {
            let pipe = self.spawn_pipe(FIRST_PIPE_X);
            self.pipes.push_back(pipe);
        }
        loop {
            let Some(front) = self.pipes.front() else {
                break;
            };
            if front.right() < 0.0 {
                self.pipes.pop_front();
                continue;
            }
            let Some(back) = self.pipes.back() else {
                break;
            };
            let left = back.left() + PIPE_DISTANCE;
            if left > SCREEN_WIDTH {
                break;
            }
            let pipe = self.spawn_pipe(left);
            self.pipes.push_back(pipe);
        }
    }

    /// Moves every pipe `dx` to the left.
    pub fn scroll(&mut self, dx: f64) {
        for pipe in &mut self.pipes {
            pipe.scroll(dx);
        }
    }

    /// Finds the pipes relevant to a bird at horizontal position `x`.
    ///
    /// Returns `(current, next)`: `current` is the pipe whose span contains
    /// `x`, if any; `next` is the pipe the bird is heading for. When the bird
    /// is inside the last pipe, both refer to that pipe. Returns
    /// `(None, None)` only for an empty course.
    #[must_use]
    pub fn closest(&self, x: f64) -> (Option<&Pipe>, Option<&Pipe>) {
        let (Some(first), Some(last)) = (self.pipes.front(), self.pipes.back()) else {
            return (None, None);
        };
        if self.pipes.len() == 1 || x < first.left() {
            return (None, Some(first));
        }

        for (current, next) in self.pipes.iter().zip(self.pipes.iter().skip(1)) {
            if (current.left()..next.left()).contains(&x) {
                if x >= current.right() {
                    return (None, Some(next));
                }
                return (Some(current), Some(next));
            }
        }

        if x >= last.left() {
            if x >= last.right() {
                return (None, Some(last));
            }
            return (Some(last), Some(last));
        }
        (None, Some(first))
    }

    fn spawn_pipe(&mut self, left: f64) -> Pipe {
        let gap_top = self
            .rng
            .random_range(SCREEN_HEIGHT * 0.1..=SCREEN_HEIGHT * 0.9 - PIPE_GAP);
        Pipe::new(left, PIPE_WIDTH, gap_top, gap_top + PIPE_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Course {
        Course::with_seed(CourseSeed::from_bytes([42; 16]))
    }

    #[test]
    fn test_refill_fills_screen() {
        let mut course = seeded();
        course.refill();
        let lefts: Vec<f64> = course.pipes().map(Pipe::left).collect();
        assert_eq!(
            lefts,
            vec![
                FIRST_PIPE_X,
                FIRST_PIPE_X + PIPE_DISTANCE,
                FIRST_PIPE_X + PIPE_DISTANCE + PIPE_DISTANCE,
            ]
        );
        for pipe in course.pipes() {
            assert!(pipe.gap_top() >= SCREEN_HEIGHT * 0.1);
            assert!(pipe.gap_bottom() <= SCREEN_HEIGHT * 0.9);
            assert!((pipe.gap_bottom() - pipe.gap_top() - PIPE_GAP).abs() < 1e-9);
        }
    }

    #[test]
    fn test_refill_drops_offscreen_and_appends() {
        let mut course = seeded();
        course.refill();
        course.scroll(FIRST_PIPE_X + PIPE_WIDTH + 1.0);
        course.refill();
        let first = course.pipes().next().unwrap();
        assert!(first.right() >= 0.0);
        let last = course.pipes().last().unwrap();
        assert!(last.left() + PIPE_DISTANCE > SCREEN_WIDTH);
        assert!(
            course
                .pipes()
                .zip(course.pipes().skip(1))
                .all(|(a, b)| (b.left() - a.left() - PIPE_DISTANCE).abs() < 1e-9)
        );
    }

    #[test]
    fn test_same_seed_same_pipes() {
        let mut a = seeded();
        let mut b = seeded();
        for _ in 0..200 {
            a.refill();
            b.refill();
            a.scroll(4.0);
            b.scroll(4.0);
        }
        assert!(a.pipes().eq(b.pipes()));
    }

    #[test]
    fn test_closest_lookup() {
        let mut course = seeded();
        assert_eq!(course.closest(100.0), (None, None));

        course.refill();
        let pipes: Vec<Pipe> = course.pipes().copied().collect();
        let [p0, p1, p2] = [&pipes[0], &pipes[1], &pipes[2]];

        // before the first pipe
        assert_eq!(course.closest(100.0), (None, Some(p0)));
        // inside the first pipe
        assert_eq!(course.closest(p0.left() + 1.0), (Some(p0), Some(p1)));
        // between two pipes
        assert_eq!(course.closest(p0.right() + 1.0), (None, Some(p1)));
        assert_eq!(course.closest(p1.left() + 1.0), (Some(p1), Some(p2)));
        // inside the last pipe
        assert_eq!(course.closest(p2.left() + 1.0), (Some(p2), Some(p2)));
        // past the last pipe
        assert_eq!(course.closest(p2.right() + 1.0), (None, Some(p2)));
    }

    #[test]
    fn test_single_pipe_is_next() {
        let mut course = seeded();
        let pipe = course.spawn_pipe(500.0);
        course.pipes.push_back(pipe);
        assert_eq!(course.closest(600.0), (None, Some(&pipe)));
    }

    mod course_seed_serialization {
        use super::*;

        #[test]
        fn test_roundtrip_random_seed() {
            let seed: CourseSeed = rand::rng().random();
            let serialized = serde_json::to_string(&seed).unwrap();
            let deserialized: CourseSeed = serde_json::from_str(&serialized).unwrap();
            assert_eq!(seed, deserialized);
        }

        #[test]
        fn test_format_is_32_char_hex_string() {
            let seed = CourseSeed::from_bytes([
                0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c,
                0x0d, 0x0e, 0xff,
            ]);
            let serialized = serde_json::to_string(&seed).unwrap();
            assert_eq!(serialized, "\"000102030405060708090a0b0c0d0eff\"");
        }

        #[test]
        fn test_rejects_wrong_length() {
            let result: Result<CourseSeed, _> = serde_json::from_str("\"abcd\"");
            assert!(result.is_err());
            assert!("zz".repeat(16).parse::<CourseSeed>().is_err());
        }
    }
}
