//! Host hit-testing seam.

/// A position in label coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Build a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate into a frame whose origin sits at `origin`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "hit testing works in floating-point layout coordinates"
    )]
    pub fn relative_to(self, origin: Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Maps a point in text coordinates to a character offset.
///
/// Implemented by the host's text layout engine. Offsets are UTF-16 code
/// units into the label text.
pub trait TextLayout {
    /// Character offset under `point`, or `None` when the point misses the
    /// text entirely.
    fn offset_at(&self, point: Point) -> Option<usize>;
}
