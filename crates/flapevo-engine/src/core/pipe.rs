use super::{Bird, consts::BIRD_SIZE};

/// An upper and a lower pipe sharing one horizontal span, with an opening
/// between `gap_top` and `gap_bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    left: f64,
    width: f64,
    gap_top: f64,
    gap_bottom: f64,
}

impl Pipe {
    #[must_use]
    pub const fn new(left: f64, width: f64, gap_top: f64, gap_bottom: f64) -> Self {
        Self {
            left,
            width,
            gap_top,
            gap_bottom,
        }
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Upper edge of the opening.
    #[must_use]
    pub const fn gap_top(&self) -> f64 {
        self.gap_top
    }

    /// Lower edge of the opening.
    #[must_use]
    pub const fn gap_bottom(&self) -> f64 {
        self.gap_bottom
    }

    pub(crate) fn scroll(&mut self, dx: f64) {
        self.left -= dx;
    }

    /// Returns `true` if the bird's hitbox touches the pipe.
    ///
    /// The bird collides when either horizontal edge of its hitbox lies within
    /// the pipe's span and the hitbox is not entirely inside the opening.
    #[must_use]
    pub fn collides_with(&self, bird: &Bird) -> bool {
        let span = self.left..=self.right();
        if !span.contains(&bird.x()) && !span.contains(&(bird.x() + BIRD_SIZE)) {
            return false;
        }
        let opening = self.gap_top..=self.gap_bottom;
        !(opening.contains(&bird.y()) && opening.contains(&(bird.y() + BIRD_SIZE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe() -> Pipe {
        Pipe::new(200.0, 80.0, 300.0, 500.0)
    }

    #[test]
    fn test_no_collision_outside_span() {
        assert!(!pipe().collides_with(&Bird::at(100.0, 0.0)));
        assert!(!pipe().collides_with(&Bird::at(281.0, 0.0)));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        assert!(!pipe().collides_with(&Bird::at(220.0, 300.0)));
        assert!(!pipe().collides_with(&Bird::at(220.0, 460.0)));
    }

    #[test]
    fn test_collision_with_pipe_body() {
        assert!(pipe().collides_with(&Bird::at(220.0, 290.0)));
        assert!(pipe().collides_with(&Bird::at(220.0, 470.0)));
        // leading edge entering the span
        assert!(pipe().collides_with(&Bird::at(170.0, 100.0)));
    }

    #[test]
    fn test_scroll_moves_left() {
        let mut p = pipe();
        p.scroll(4.0);
        assert_eq!(p.left(), 196.0);
        assert_eq!(p.right(), 276.0);
    }
}
