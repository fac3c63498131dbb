//! Parsed form of a field's format specification

/// Alignment direction for field padding
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    /// `<` — pad on the right
    Left,
    /// `>` — pad on the left
    Right,
    /// `=` — pad between the sign and the digits
    PadSign,
    /// `^` — pad on both sides
    Center,
}

/// Sign display mode for numeric values
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    /// No sign flag given: `-` only on negatives
    Default,
    /// Explicit `-` flag: recorded, behaves like [`Sign::Default`]
    Minus,
    /// `+` — always show a sign
    Plus,
    /// ` ` — space for non-negative, `-` for negative
    Space,
}

/// Conversion kind selected by the trailing verb letter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verb {
    /// No verb letter: the value's natural rendering
    Default,
    /// `b` — binary integer
    Binary,
    /// `o` — octal integer
    Octal,
    /// `x` — lowercase hexadecimal
    HexLower,
    /// `X` — uppercase hexadecimal
    HexUpper,
    /// `d` — decimal integer
    Decimal,
    /// `e` — lowercase scientific notation
    SciLower,
    /// `E` — uppercase scientific notation
    SciUpper,
    /// `f` — fixed-point
    FixedLower,
    /// `F` — fixed-point, uppercase `INF`/`NAN`
    FixedUpper,
    /// `g` — shortest float rendering
    GeneralLower,
    /// `G` — shortest float rendering, uppercased
    GeneralUpper,
    /// `r` — debug/repr rendering
    Repr,
    /// `t` — type name
    TypeName,
    /// `s` — plain string rendering
    Str,
}

impl Verb {
    /// The verb letter as written in a spec, for error messages
    pub fn letter(self) -> char {
        match self {
            Verb::Default => 'v',
            Verb::Binary => 'b',
            Verb::Octal => 'o',
            Verb::HexLower => 'x',
            Verb::HexUpper => 'X',
            Verb::Decimal => 'd',
            Verb::SciLower => 'e',
            Verb::SciUpper => 'E',
            Verb::FixedLower => 'f',
            Verb::FixedUpper => 'F',
            Verb::GeneralLower => 'g',
            Verb::GeneralUpper => 'G',
            Verb::Repr => 'r',
            Verb::TypeName => 't',
            Verb::Str => 's',
        }
    }

    /// Base prefix emitted when the radix flag is set, if this verb has one
    pub fn radix_prefix(self) -> Option<&'static str> {
        match self {
            Verb::Binary => Some("0b"),
            Verb::Octal => Some("0o"),
            Verb::HexLower => Some("0x"),
            Verb::HexUpper => Some("0X"),
            _ => None,
        }
    }

    /// Verbs that render integers in a numeral base
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Verb::Binary | Verb::Octal | Verb::HexLower | Verb::HexUpper | Verb::Decimal
        )
    }

    /// Verbs that render through the floating-point formatter
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Verb::SciLower
                | Verb::SciUpper
                | Verb::FixedLower
                | Verb::FixedUpper
                | Verb::GeneralLower
                | Verb::GeneralUpper
        )
    }

    /// Uppercase variants rewrite `e`/`inf`/`nan` to upper case
    pub fn is_uppercase(self) -> bool {
        matches!(self, Verb::SciUpper | Verb::FixedUpper | Verb::GeneralUpper)
    }
}

/// Parsed result of one format specification, created fresh per field and
/// consumed once by the renderer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Padding character; `None` resolves to a space at write time
    pub fill: Option<char>,
    /// Alignment; `None` writes the text verbatim regardless of width
    pub align: Option<Align>,
    /// Sign display mode
    pub sign: Sign,
    /// Emit a base prefix (`0b`, `0o`, `0x`, `0X`)
    pub show_radix: bool,
    /// Minimum field width; never a maximum
    pub min_width: Option<usize>,
    /// Decimal places for floats, zero-extension for integers, maximum
    /// length for strings
    pub precision: Option<usize>,
    /// Conversion kind
    pub verb: Verb,
    /// `%` verb: scale by 100 as a string transform and append `%`
    pub percent: bool,
}

impl Default for Directive {
    fn default() -> Self {
        Directive {
            fill: None,
            align: None,
            sign: Sign::Default,
            show_radix: false,
            min_width: None,
            precision: None,
            verb: Verb::Default,
            percent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let d = Directive::default();
        assert_eq!(d.align, None);
        assert_eq!(d.sign, Sign::Default);
        assert_eq!(d.verb, Verb::Default);
        assert!(!d.show_radix);
        assert!(!d.percent);
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(Verb::Binary.radix_prefix(), Some("0b"));
        assert_eq!(Verb::Octal.radix_prefix(), Some("0o"));
        assert_eq!(Verb::HexLower.radix_prefix(), Some("0x"));
        assert_eq!(Verb::HexUpper.radix_prefix(), Some("0X"));
        assert_eq!(Verb::Decimal.radix_prefix(), None);
        assert_eq!(Verb::FixedLower.radix_prefix(), None);
    }

    #[test]
    fn test_verb_classes() {
        assert!(Verb::Binary.is_integer());
        assert!(!Verb::Binary.is_float());
        assert!(Verb::SciUpper.is_float());
        assert!(Verb::SciUpper.is_uppercase());
        assert!(!Verb::SciLower.is_uppercase());
        assert!(!Verb::Repr.is_integer());
    }
}
