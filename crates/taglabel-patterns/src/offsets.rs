//! UTF-16 offset helpers.
//!
//! Regex engines report byte offsets into UTF-8 text, while host text-layout
//! engines index characters in UTF-16 code units. Matches are reported in
//! the latter so tap offsets can be compared against them directly.

/// Count the UTF-16 code units needed to encode `text`.
///
/// # Examples
/// ```
/// use taglabel_patterns::utf16_len;
/// assert_eq!(utf16_len("abc"), 3);
/// assert_eq!(utf16_len("👋"), 2);
/// ```
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Translates byte offsets into UTF-16 offsets for a single string.
///
/// Offsets are expected in ascending order, which is how regex matches are
/// produced. Moving backwards restarts the scan from the beginning.
#[derive(Debug, Clone)]
pub struct Utf16Cursor<'a> {
    text: &'a str,
    byte: usize,
    unit: usize,
}

impl<'a> Utf16Cursor<'a> {
    /// Create a cursor positioned at the start of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            unit: 0,
        }
    }

    /// Advance to `byte` and return the matching UTF-16 offset.
    ///
    /// Offsets that do not fall on a character boundary leave the cursor
    /// where it was.
    ///
    /// # Examples
    /// ```
    /// use taglabel_patterns::Utf16Cursor;
    /// let mut cursor = Utf16Cursor::new("👋 #hi");
    /// assert_eq!(cursor.advance_to(4), 2);
    /// assert_eq!(cursor.advance_to(8), 6);
    /// ```
    pub fn advance_to(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.unit = 0;
        }
        if let Some(segment) = self.text.get(self.byte..byte) {
            self.unit += utf16_len(segment);
            self.byte = byte;
        }
        self.unit
    }
}
