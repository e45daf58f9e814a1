use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("No amount found in {0:?}")]
    MissingAmount(String),
    #[error("Failed to parse amount: {0:?}")]
    InvalidNumber(String),
}

// Uppercase only: the page renders magnitude suffixes uppercase, and a
// lowercase trailing letter must fall through to the numeric parse (and fail
// there) instead of being scaled.
fn suffix_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'K' => Some(1e3),
        'M' => Some(1e6),
        'B' => Some(1e9),
        _ => None,
    }
}

/// Converts a displayed amount such as `$2.62K` or `$1,234.56` into its
/// numeric value. The leading `$` and thousands separators are decoration; a
/// trailing K/M/B scales the number by 1e3/1e6/1e9.
pub fn parse_display_amount(display: &str) -> Result<f64, AmountParseError> {
    let amount = display.trim();
    let amount = amount.strip_prefix('$').unwrap_or(amount);
    let amount = amount.replace(',', "");

    if amount.is_empty() {
        return Err(AmountParseError::MissingAmount(display.to_owned()));
    }

    let (number, multiplier) = match amount.chars().last().and_then(suffix_multiplier) {
        Some(multiplier) => (&amount[..amount.len() - 1], multiplier),
        None => (amount.as_str(), 1.0),
    };

    number
        .parse::<f64>()
        .map(|value| value * multiplier)
        .map_err(|_| AmountParseError::InvalidNumber(display.to_owned()))
}
