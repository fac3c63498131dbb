//! Flag state machine for format specifications
//!
//! Grammar: `[[fill]align][sign]['#'][0][width]['.'precision][verb]`,
//! consumed strictly left to right through ordered stages. Each stage
//! either takes its token or is skipped; no stage ever backtracks.

use crate::error::SpecError;

use super::ast::{Align, Directive, Sign, Verb};

fn align_for(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '=' => Some(Align::PadSign),
        '^' => Some(Align::Center),
        _ => None,
    }
}

/// Parse a format specification into a [`Directive`]
///
/// Any input left over once the verb stage has run is an error naming the
/// offending specification string.
///
/// # Examples
///
/// ```
/// use pyfmt::parser::{parse_spec, Align, Verb};
///
/// let d = parse_spec(">10").unwrap();
/// assert_eq!(d.align, Some(Align::Right));
/// assert_eq!(d.min_width, Some(10));
///
/// let d = parse_spec("*^20.5f").unwrap();
/// assert_eq!(d.fill, Some('*'));
/// assert_eq!(d.align, Some(Align::Center));
/// assert_eq!(d.precision, Some(5));
/// assert_eq!(d.verb, Verb::FixedLower);
/// ```
pub fn parse_spec(spec: &str) -> Result<Directive, SpecError> {
    let mut directive = Directive::default();
    if spec.is_empty() {
        return Ok(directive);
    }

    let chars: Vec<char> = spec.chars().collect();
    let mut pos = 0;

    // Fill and alignment. The second character decides: if it is an
    // alignment token, the first character is the fill.
    if chars.len() >= 2 {
        if let Some(align) = align_for(chars[1]) {
            directive.fill = Some(chars[0]);
            directive.align = Some(align);
            pos = 2;
        }
    }
    if pos == 0 {
        if let Some(align) = align_for(chars[0]) {
            directive.align = Some(align);
            pos = 1;
        }
    }

    // Sign. '-' is the default behavior; recorded but inert.
    if pos < chars.len() {
        match chars[pos] {
            '+' => {
                directive.sign = Sign::Plus;
                pos += 1;
            }
            '-' => {
                directive.sign = Sign::Minus;
                pos += 1;
            }
            ' ' => {
                directive.sign = Sign::Space;
                pos += 1;
            }
            _ => {}
        }
    }

    // Radix marker.
    if pos < chars.len() && chars[pos] == '#' {
        directive.show_radix = true;
        pos += 1;
    }

    // Zero-pad. Explicit fill and alignment from the first stage win.
    if pos < chars.len() && chars[pos] == '0' {
        if directive.fill.is_none() {
            directive.fill = Some('0');
        }
        if directive.align.is_none() {
            directive.align = Some(Align::PadSign);
        }
        pos += 1;
    }

    // Width: maximal digit run.
    let width_start = pos;
    while pos < chars.len() && chars[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos > width_start {
        let width: String = chars[width_start..pos].iter().collect();
        // Width feeds signed 64-bit arithmetic in the writer; values that
        // only fit in usize are rejected here.
        let parsed = width
            .parse::<usize>()
            .ok()
            .filter(|&w| i64::try_from(w).is_ok())
            .ok_or(SpecError::InvalidWidth { width })?;
        directive.min_width = Some(parsed);
    }

    // Precision: '.' then a maximal digit run. A bare '.' is precision 0.
    if pos < chars.len() && chars[pos] == '.' {
        pos += 1;
        let prec_start = pos;
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos > prec_start {
            let precision: String = chars[prec_start..pos].iter().collect();
            directive.precision = Some(
                precision
                    .parse()
                    .map_err(|_| SpecError::InvalidPrecision { precision })?,
            );
        } else {
            directive.precision = Some(0);
        }
    }

    // Verb: a single trailing letter.
    if pos < chars.len() {
        let verb = match chars[pos] {
            'b' => Some(Verb::Binary),
            'o' => Some(Verb::Octal),
            'x' => Some(Verb::HexLower),
            'X' => Some(Verb::HexUpper),
            'e' => Some(Verb::SciLower),
            'E' => Some(Verb::SciUpper),
            'f' => Some(Verb::FixedLower),
            'F' => Some(Verb::FixedUpper),
            'g' => Some(Verb::GeneralLower),
            'G' => Some(Verb::GeneralUpper),
            'r' => Some(Verb::Repr),
            't' => Some(Verb::TypeName),
            's' => Some(Verb::Str),
            'd' => {
                // Radix markers are meaningless for decimal.
                directive.show_radix = false;
                Some(Verb::Decimal)
            }
            '%' => {
                directive.percent = true;
                Some(Verb::FixedLower)
            }
            _ => None,
        };
        if let Some(verb) = verb {
            directive.verb = verb;
            pos += 1;
        }
    }

    if pos < chars.len() {
        return Err(SpecError::Trailing {
            spec: spec.to_string(),
        });
    }

    Ok(directive)
}
