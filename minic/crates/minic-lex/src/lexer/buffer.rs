//! Capped working buffer for literals under construction.

/// Text buffer that stops growing at a fixed capacity.
///
/// Pushing past the capacity drops the byte and marks the buffer as
/// overflowed, so the caller can keep consuming the construct and report the
/// overflow once at the end.
pub(crate) struct BoundedBuffer {
    text: String,
    len: usize,
    capacity: usize,
    overflowed: bool,
}

impl BoundedBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity.min(64)),
            len: 0,
            capacity,
            overflowed: false,
        }
    }

    /// Appends a source byte as a single-byte character.
    pub(crate) fn push(&mut self, b: u8) {
        if self.len < self.capacity {
            self.text.push(char::from(b));
            self.len += 1;
        } else {
            self.overflowed = true;
        }
    }

    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
