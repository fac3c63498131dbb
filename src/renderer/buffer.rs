//! Append-only output accumulator with aligned writes

use crate::parser::Align;

/// Output buffer for one expansion. Owned by a single driver invocation;
/// its contents become the final string only on full success.
#[derive(Debug, Default)]
pub struct Buffer {
    out: String,
}

impl Buffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Buffer::default()
    }

    /// Append raw text
    pub fn write_str(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Append a single character
    pub fn write_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Append `text` padded to a minimum width with `fill`
    ///
    /// Width is a minimum, never a maximum: text at least `width` wide is
    /// written verbatim, as is any text when `align` is `None`. Pad-sign
    /// alignment peels a leading `-` or `+` and right-aligns the rest
    /// against the reduced width. Centering measures the left pad against
    /// half the field, so odd leftovers accumulate on the right.
    pub fn write_aligned(&mut self, text: &str, align: Option<Align>, width: i64, fill: Option<char>) {
        let fill = fill.unwrap_or(' ');
        let length = text.chars().count() as i64;
        let align = match align {
            Some(align) if length < width => align,
            _ => {
                self.out.push_str(text);
                return;
            }
        };
        match align {
            Align::Right => {
                self.write_padding(width - length, fill);
                self.out.push_str(text);
            }
            Align::Left => {
                self.out.push_str(text);
                self.write_padding(width - length, fill);
            }
            Align::Center => {
                let before = (width / 2 - length).max(0);
                self.write_padding(before, fill);
                self.out.push_str(text);
                self.write_padding(width - length - before, fill);
            }
            Align::PadSign => match text.chars().next() {
                Some(sign @ ('-' | '+')) => {
                    self.out.push(sign);
                    self.write_aligned(&text[1..], Some(Align::Right), width - 1, Some(fill));
                }
                _ => {
                    self.write_padding(width - length, fill);
                    self.out.push_str(text);
                }
            },
        }
    }

    fn write_padding(&mut self, count: i64, fill: char) {
        for _ in 0..count.max(0) {
            self.out.push(fill);
        }
    }

    /// Consume the buffer, yielding the accumulated output
    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(text: &str, align: Option<Align>, width: i64, fill: Option<char>) -> String {
        let mut buf = Buffer::new();
        buf.write_aligned(text, align, width, fill);
        buf.into_string()
    }

    #[test]
    fn test_no_alignment_writes_verbatim() {
        assert_eq!(aligned("ab", None, 10, None), "ab");
    }

    #[test]
    fn test_width_is_a_minimum_not_a_maximum() {
        assert_eq!(aligned("abcdef", Some(Align::Right), 4, None), "abcdef");
        assert_eq!(aligned("ab", Some(Align::Right), 2, None), "ab");
    }

    #[test]
    fn test_right_align() {
        assert_eq!(aligned("42", Some(Align::Right), 10, None), "        42");
    }

    #[test]
    fn test_left_align() {
        assert_eq!(aligned("42", Some(Align::Left), 5, None), "42   ");
    }

    #[test]
    fn test_center_align() {
        // Left pad is measured against half the field; leftovers go right.
        assert_eq!(aligned("ab", Some(Align::Center), 6, None), " ab   ");
        assert_eq!(aligned("a", Some(Align::Center), 6, None), "  a   ");
    }

    #[test]
    fn test_custom_fill() {
        assert_eq!(aligned("7", Some(Align::Right), 3, Some('*')), "**7");
        assert_eq!(aligned("7", Some(Align::Center), 3, Some('.')), "7..");
    }

    #[test]
    fn test_pad_sign_peels_minus() {
        assert_eq!(aligned("-42", Some(Align::PadSign), 6, Some('0')), "-00042");
    }

    #[test]
    fn test_pad_sign_peels_plus() {
        assert_eq!(aligned("+42", Some(Align::PadSign), 6, None), "+   42");
    }

    #[test]
    fn test_pad_sign_without_sign_right_aligns() {
        assert_eq!(aligned("42", Some(Align::PadSign), 5, Some('0')), "00042");
    }

    #[test]
    fn test_sign_never_preceded_by_fill() {
        let out = aligned("-7", Some(Align::PadSign), 8, Some('0'));
        assert!(out.starts_with('-'));
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn test_write_str_appends() {
        let mut buf = Buffer::new();
        buf.write_str("a");
        buf.write_char('b');
        buf.write_aligned("c", Some(Align::Right), 2, None);
        assert_eq!(buf.into_string(), "ab c");
    }
}
