/// Inclusive byte range requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Largest end offset a backend is asked for. One below `u64::MAX` so
    /// `end + 1` never overflows in adapters computing exclusive bounds.
    pub const MAX_END: u64 = u64::MAX - 1;

    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// The whole object, from offset 0 to the largest representable offset
    pub fn full() -> Self {
        Self {
            start: 0,
            end: Self::MAX_END,
        }
    }

    pub fn is_full(&self) -> bool {
        self.start == 0 && self.end == Self::MAX_END
    }

    /// Clamp to an object of `len` bytes, returning a `start..end` slice range
    pub fn clamp_to(&self, len: usize) -> std::ops::Range<usize> {
        let len_u64 = len as u64;
        let start = self.start.min(len_u64);
        let end = self.end.saturating_add(1).min(len_u64).max(start);
        start as usize..end as usize
    }
}
