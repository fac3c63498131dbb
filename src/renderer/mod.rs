//! Value renderer: applies one directive to one value
//!
//! The order of operations here is load-bearing: percent widens the
//! precision before any digits are produced, the radix prefix is placed
//! after the sign, the percent shift runs on the final digit string, and
//! sign extraction happens last so padding never lands in front of a
//! sign.

use crate::error::RenderError;
use crate::parser::{Align, Directive, Sign, Verb};
use crate::value::Value;

pub mod buffer;
mod percent;

pub use buffer::Buffer;

/// Render `value` under `directive`, appending to `out`
pub fn render(value: &Value, directive: &Directive, out: &mut Buffer) -> Result<(), RenderError> {
    // Percent reserves two extra digits for the decimal shift; the
    // unset-precision default is 8 before the transform trims it back.
    let precision = if directive.percent {
        Some(directive.precision.map_or(8, |p| p + 2))
    } else {
        directive.precision
    };

    let mut text = base_text(value, directive, precision)?;

    if directive.percent {
        text = percent::shift_percent(&text)?;
    }

    let mut width = directive.min_width.map_or(0, |w| w as i64);

    // For left and pad-after-sign alignment the sign character must land
    // in front of any padding, so it is written out here and the
    // remaining width shrinks by one.
    if matches!(directive.align, Some(Align::Left | Align::PadSign)) {
        if let Some(first @ ('-' | '+' | ' ')) = text.chars().next() {
            out.write_char(first);
            text.remove(0);
            width -= 1;
        }
    }

    if directive.show_radix
        && directive.align == Some(Align::PadSign)
        && directive.verb.radix_prefix().is_some()
        && text.len() >= 2
    {
        // Keep the two prefix characters out of the padding as well:
        // `-0b0101`, never `-000b101`.
        out.write_str(&text[..2]);
        out.write_aligned(&text[2..], directive.align, width - 2, directive.fill);
    } else {
        out.write_aligned(&text, directive.align, width, directive.fill);
    }
    Ok(())
}

/// Sign characters ahead of the digits: `-` for negatives, otherwise
/// whatever the sign mode asks for
fn sign_prefix(negative: bool, sign: Sign) -> &'static str {
    if negative {
        "-"
    } else {
        match sign {
            Sign::Plus => "+",
            Sign::Space => " ",
            Sign::Default | Sign::Minus => "",
        }
    }
}

/// Produce the unaligned text for a field: sign, radix prefix, digits
fn base_text(
    value: &Value,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, RenderError> {
    match directive.verb {
        Verb::Repr => return Ok(value.repr()),
        Verb::TypeName => return Ok(value.type_name().to_string()),
        _ => {}
    }

    match value {
        Value::Int(n) => int_text(*n, value.type_name(), directive, precision),
        // Integer verbs see a char as its Unicode scalar value.
        Value::Char(c) if directive.verb.is_integer() => {
            int_text(i64::from(u32::from(*c)), value.type_name(), directive, precision)
        }
        Value::Float(f) => float_text(*f, value.type_name(), directive, precision),
        // Strings, bools, and remaining chars share the plain-text path.
        Value::Str(_) | Value::Bool(_) | Value::Char(_) => str_text(
            &value.display_text(),
            value.type_name(),
            directive,
            precision,
        ),
    }
}

fn int_text(
    n: i64,
    type_name: &'static str,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, RenderError> {
    if directive.verb.is_float() {
        return float_text(n as f64, type_name, directive, precision);
    }

    let negative = n < 0;
    let magnitude = n.unsigned_abs();
    let mut digits = match directive.verb {
        Verb::Binary => format!("{magnitude:b}"),
        Verb::Octal => format!("{magnitude:o}"),
        Verb::HexLower => format!("{magnitude:x}"),
        Verb::HexUpper => format!("{magnitude:X}"),
        Verb::Default | Verb::Decimal | Verb::Str => magnitude.to_string(),
        verb => {
            return Err(RenderError::UnsupportedVerb {
                verb: verb.letter(),
                type_name,
            })
        }
    };

    // Precision zero-extends integer digits.
    if let Some(p) = precision {
        if digits.len() < p {
            digits = format!("{}{}", "0".repeat(p - digits.len()), digits);
        }
    }

    let prefix = if directive.show_radix {
        directive.verb.radix_prefix().unwrap_or("")
    } else {
        ""
    };
    Ok(format!(
        "{}{}{}",
        sign_prefix(negative, directive.sign),
        prefix,
        digits
    ))
}

fn float_text(
    f: f64,
    type_name: &'static str,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, RenderError> {
    let negative = f.is_sign_negative() && !f.is_nan();
    let magnitude = f.abs();

    let digits = match directive.verb {
        Verb::FixedLower | Verb::FixedUpper => {
            let p = precision.unwrap_or(6);
            format!("{magnitude:.p$}")
        }
        Verb::SciLower | Verb::SciUpper => match precision {
            Some(p) => format!("{magnitude:.p$e}"),
            None => format!("{magnitude:e}"),
        },
        Verb::GeneralLower | Verb::GeneralUpper => general_text(magnitude, precision),
        Verb::Default | Verb::Str => match precision {
            Some(p) => format!("{magnitude:.p$}"),
            None => magnitude.to_string(),
        },
        verb => {
            return Err(RenderError::UnsupportedVerb {
                verb: verb.letter(),
                type_name,
            })
        }
    };

    let text = format!("{}{}", sign_prefix(negative, directive.sign), digits);
    if directive.verb.is_uppercase() {
        Ok(text.to_uppercase())
    } else {
        Ok(text)
    }
}

/// Shortest rendering for the `g`/`G` verbs: with a precision, fixed-point
/// with trailing zeros trimmed; without, the value's shortest decimal form
fn general_text(magnitude: f64, precision: Option<usize>) -> String {
    match precision {
        None => magnitude.to_string(),
        Some(p) => {
            let s = format!("{magnitude:.p$}");
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
    }
}

fn str_text(
    s: &str,
    type_name: &'static str,
    directive: &Directive,
    precision: Option<usize>,
) -> Result<String, RenderError> {
    match directive.verb {
        Verb::Default | Verb::Str => {}
        verb => {
            return Err(RenderError::UnsupportedVerb {
                verb: verb.letter(),
                type_name,
            })
        }
    }
    // Precision is a maximum length for text, counted in characters.
    Ok(match precision {
        Some(p) if s.chars().count() > p => s.chars().take(p).collect(),
        _ => s.to_string(),
    })
}
