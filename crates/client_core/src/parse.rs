//! Numeric parse step applied to form fields before a payload is built.
//!
//! `Lenient` follows browser `parseFloat`/`parseInt`: leading whitespace is
//! skipped and the longest numeric prefix wins, so `"5abc"` reads as 5. Input
//! with no numeric prefix becomes `None` and is sent as `null`. `Strict`
//! requires the whole trimmed field to be consumed.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberMode {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid number in {field}: {raw:?}")]
pub struct InvalidNumber {
    pub field: &'static str,
    pub raw: String,
}

impl NumberMode {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    pub fn float(self, field: &'static str, raw: &str) -> Result<Option<f64>, InvalidNumber> {
        let (value, complete) = float_prefix(raw);
        let value = value.filter(|v| v.is_finite());
        self.accept(field, raw, value, complete)
    }

    pub fn integer(self, field: &'static str, raw: &str) -> Result<Option<i64>, InvalidNumber> {
        let (value, complete) = integer_prefix(raw);
        self.accept(field, raw, value, complete)
    }

    fn accept<T>(
        self,
        field: &'static str,
        raw: &str,
        value: Option<T>,
        complete: bool,
    ) -> Result<Option<T>, InvalidNumber> {
        match self {
            Self::Lenient => Ok(value),
            Self::Strict if value.is_some() && complete => Ok(value),
            Self::Strict => Err(InvalidNumber {
                field,
                raw: raw.to_string(),
            }),
        }
    }
}

fn trim_leading(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_trailing_blank(rest: &str) -> bool {
    rest.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// Returns the parsed prefix and whether nothing but whitespace followed it.
pub fn float_prefix(raw: &str) -> (Option<f64>, bool) {
    let input = trim_leading(raw);
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if input[end..].starts_with("Infinity") {
        end += "Infinity".len();
        let negative = input.starts_with('-');
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return (Some(value), is_trailing_blank(&input[end..]));
    }

    let int_digits = count_digits(&bytes[end..], 10);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..], 10);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return (None, false);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..], 10);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value = input[..end].parse::<f64>().ok();
    (value, is_trailing_blank(&input[end..]))
}

/// Integer counterpart of [`float_prefix`]. A `0x` prefix switches to base 16.
/// Values outside the `i64` range are treated as unparseable.
pub fn integer_prefix(raw: &str) -> (Option<i64>, bool) {
    let input = trim_leading(raw);
    let mut rest = input;
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let mut radix = 10;
    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        radix = 16;
        rest = stripped;
    }

    let digits = count_digits(rest.as_bytes(), radix);
    if digits == 0 {
        return (None, false);
    }

    let signed = if negative {
        format!("-{}", &rest[..digits])
    } else {
        rest[..digits].to_string()
    };
    let value = i64::from_str_radix(&signed, radix).ok();
    (value, is_trailing_blank(&rest[digits..]))
}

fn count_digits(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|b| (**b as char).is_digit(radix))
        .count()
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
