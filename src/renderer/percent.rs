//! String-level percent transform
//!
//! Shifts the decimal point of already-rendered fixed-point text two
//! places right and appends `%`. Working on the string instead of
//! multiplying the float by 100 keeps binary rounding error out of the
//! output.

use crate::error::RenderError;

/// Shift `text` two decimal places right and append `%`
///
/// The renderer guarantees at least two fractional digits by widening the
/// precision before formatting; text without a fractional part is either
/// integral (gains `00%`) or non-numeric like `inf` (gains a bare `%`).
/// A leading sign survives the shift.
pub(crate) fn shift_percent(text: &str) -> Result<String, RenderError> {
    let (sign, unsigned) = match text.chars().next() {
        Some(c @ ('-' | '+' | ' ')) => (&text[..c.len_utf8()], &text[c.len_utf8()..]),
        _ => ("", text),
    };

    let Some((int_part, frac)) = unsigned.split_once('.') else {
        return Ok(if unsigned.parse::<i64>().is_ok() {
            format!("{text}00%")
        } else {
            format!("{text}%")
        });
    };

    let int_value: i64 = int_part.parse().map_err(|_| RenderError::Percent {
        text: text.to_string(),
    })?;
    let shifted = frac.get(..2).ok_or_else(|| RenderError::Percent {
        text: text.to_string(),
    })?;
    let rest = &frac[2..];
    let suffix = if rest.is_empty() {
        String::new()
    } else {
        format!(".{rest}")
    };

    if int_value == 0 {
        // The integer part folds away; drop one leading zero from the
        // shifted digits when there is one.
        if let Some(stripped) = shifted.strip_prefix('0') {
            Ok(format!("{sign}{stripped}{suffix}%"))
        } else {
            Ok(format!("{sign}{shifted}{suffix}%"))
        }
    } else {
        Ok(format!("{sign}{int_part}{shifted}{suffix}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_with_two_digits() {
        assert_eq!(shift_percent("0.50").unwrap(), "50%");
    }

    #[test]
    fn test_small_value_keeps_fraction() {
        // 0.005 at precision 2 renders as 0.0050 before the shift.
        assert_eq!(shift_percent("0.0050").unwrap(), "0.50%");
    }

    #[test]
    fn test_default_precision_shift() {
        assert_eq!(shift_percent("0.50000000").unwrap(), "50.000000%");
    }

    #[test]
    fn test_negative_sign_survives() {
        assert_eq!(shift_percent("-0.25000000").unwrap(), "-25.000000%");
    }

    #[test]
    fn test_plus_sign_survives() {
        assert_eq!(shift_percent("+0.50").unwrap(), "+50%");
    }

    #[test]
    fn test_space_sign_survives() {
        assert_eq!(shift_percent(" 0.50").unwrap(), " 50%");
    }

    #[test]
    fn test_value_above_one() {
        assert_eq!(shift_percent("1.5000").unwrap(), "150.00%");
        assert_eq!(shift_percent("12.50000000").unwrap(), "1250.000000%");
    }

    #[test]
    fn test_integral_text_gains_double_zero() {
        assert_eq!(shift_percent("3").unwrap(), "300%");
    }

    #[test]
    fn test_non_numeric_text_gains_percent_only() {
        assert_eq!(shift_percent("inf").unwrap(), "inf%");
        assert_eq!(shift_percent("NaN").unwrap(), "NaN%");
    }

    #[test]
    fn test_unparsable_prefix_is_error() {
        assert!(matches!(
            shift_percent("x.50"),
            Err(RenderError::Percent { .. })
        ));
    }
}
