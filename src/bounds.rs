/// Pixel range occupied by a segment on the strip, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBounds {
    pub start: usize,
    pub end: usize,
}

impl SegmentBounds {
    pub const fn new(start: usize, count: usize) -> Self {
        Self {
            start,
            end: start + count,
        }
    }

    /// Get the number of LEDs in the segment
    pub const fn count(self) -> usize {
        self.end - self.start
    }

    /// Check if the segment lies within a strip of `led_count` pixels
    pub const fn fits(self, led_count: usize) -> bool {
        self.end <= led_count
    }

    /// Check if two segments share at least one pixel
    pub const fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
