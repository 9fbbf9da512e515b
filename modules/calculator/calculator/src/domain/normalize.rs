//! Normalization of operand text.
//!
//! Turns free-form numeric text into a canonical decimal string matching
//! `-?\d+(\.\d+)?`. Both `,` and `.` are accepted as the decimal separator,
//! spaces act as group separators and an optional leading `-` marks a
//! negative number.
//!
//! Under [`Validation::Strict`] the raw text is first checked structurally and
//! rejected as a whole when malformed. Under [`Validation::Lenient`] every
//! character that is not a digit or a separator is silently dropped.

use calculator_sdk::Validation;

/// The operand text cannot be read as a number.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid number format")]
pub struct InvalidNumber;

/// Normalize `raw` into a canonical decimal string.
///
/// Empty input and input that collapses to nothing (`"-"`, `"."`, `"-."`)
/// normalize to `"0"`.
///
/// # Errors
///
/// Returns [`InvalidNumber`] under strict validation when the text is
/// malformed or carries more fraction digits than allowed.
///
/// # Examples
///
/// ```
/// use calculator::domain::normalize::normalize;
/// use calculator_sdk::Validation;
///
/// let strict = Validation::Strict { max_fraction_digits: 6 };
/// assert_eq!(normalize("1,5", strict).unwrap(), "1.5");
/// assert_eq!(normalize(" -1 234.5 ", strict).unwrap(), "-1234.5");
/// assert!(normalize("abc", strict).is_err());
/// assert_eq!(normalize("abc", Validation::Lenient).unwrap(), "0");
/// ```
pub fn normalize(raw: &str, validation: Validation) -> Result<String, InvalidNumber> {
    if raw.is_empty() {
        return Ok("0".to_owned());
    }

    let max_fraction_digits = match validation {
        Validation::Strict {
            max_fraction_digits,
        } => {
            if !is_well_formed(raw, max_fraction_digits) {
                return Err(InvalidNumber);
            }
            Some(max_fraction_digits)
        }
        Validation::Lenient => None,
    };

    let unified = raw.trim().replace(',', ".");
    let (negative, body) = match unified.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, unified.as_str()),
    };

    let kept: String = body
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if kept.is_empty() || kept == "." {
        return Ok("0".to_owned());
    }

    // Only the first point is a decimal point; later ones are dropped.
    let (integer, fraction) = match kept.split_once('.') {
        Some((integer, rest)) => (integer, rest.replace('.', "")),
        None => (kept.as_str(), String::new()),
    };

    if max_fraction_digits.is_some_and(|max| fraction.len() > max) {
        return Err(InvalidNumber);
    }

    let mut canonical = String::with_capacity(kept.len() + 2);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        canonical.push('.');
        canonical.push_str(&fraction);
    }
    Ok(canonical)
}

/// Structural pre-validation of the raw text.
fn is_well_formed(raw: &str, max_fraction_digits: usize) -> bool {
    let trimmed = raw.trim();
    if count(trimmed, '.') > 1 || count(trimmed, ',') > 1 || count(trimmed, '-') > 1 {
        return false;
    }
    if trimmed.contains('-') && !trimmed.starts_with('-') {
        return false;
    }

    let unified = trimmed.replace(',', ".");
    let mut parts = unified.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return false;
    }

    let integer_digits: String = integer.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    if !is_digits(&integer_digits) {
        return false;
    }
    if let Some(fraction) = fraction
        && (fraction.chars().count() > max_fraction_digits || !is_digits(fraction))
    {
        return false;
    }

    if raw.contains("  ") {
        return false;
    }
    raw.chars()
        .filter(|c| *c != ' ')
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
}

fn count(text: &str, needle: char) -> usize {
    text.chars().filter(|c| *c == needle).count()
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
