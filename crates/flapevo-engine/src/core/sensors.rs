use super::{
    Bird, Pipe,
    consts::{SCREEN_HEIGHT, SCREEN_WIDTH},
};

/// What a bird perceives of the course on one tick.
///
/// All three readings are signed distances in screen units:
///
/// - `gap_top` - how far below the upper edge of the nearest opening the bird is
/// - `ahead` - horizontal distance to the left edge of the next pipe
/// - `gap_bottom` - how far above the lower edge of the nearest opening the bird is
///
/// A bird safely inside an opening reads positive values for both gap edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensors {
    pub gap_top: f64,
    pub ahead: f64,
    pub gap_bottom: f64,
}

impl Sensors {
    /// Readings used before any pipe exists.
    pub const EMPTY: Self = Self {
        gap_top: SCREEN_HEIGHT / 2.0,
        ahead: SCREEN_WIDTH,
        gap_bottom: SCREEN_HEIGHT / 2.0,
    };

    /// Measures the bird against the `(current, next)` pipes returned by
    /// [`Course::closest`](crate::Course::closest).
    ///
    /// The gap readings use the pipe the bird is currently inside, or the
    /// next one when it is between pipes. Without a next pipe the horizontal
    /// reading falls back to the screen width.
    #[must_use]
    pub fn read(bird: &Bird, (current, next): (Option<&Pipe>, Option<&Pipe>)) -> Self {
        let Some(measured) = current.or(next) else {
            return Self::EMPTY;
        };
        Self {
            gap_top: bird.y() - measured.gap_top(),
            ahead: next.map_or(SCREEN_WIDTH, |pipe| pipe.left() - bird.x()),
            gap_bottom: measured.gap_bottom() - bird.y(),
        }
    }

    /// Readings in model input order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.gap_top, self.ahead, self.gap_bottom]
    }
}
