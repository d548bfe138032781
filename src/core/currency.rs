use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for CHF amounts
pub const MONEY_SCALE: u32 = 2;

/// Currency code appended by [`format_chf`]
pub const CURRENCY_CODE: &str = "CHF";

/// Thousands separator used by the fr-CH locale (U+202F NARROW NO-BREAK SPACE)
const THOUSANDS_SEPARATOR: char = '\u{202f}';

/// Separator between the amount and the currency code (U+00A0 NO-BREAK SPACE)
const CURRENCY_SEPARATOR: char = '\u{a0}';

/// Separator between a percentage and the percent sign (U+202F)
const PERCENT_SEPARATOR: char = '\u{202f}';

/// Rounds a monetary value to 2 decimal places, half-up.
///
/// Every derived amount in the pricing engine goes through this function
/// independently, so aggregates may drift by a cent against single-point rounding.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount the way fr-CH renders CHF: `1 234.50 CHF`
/// (narrow no-break space for thousands, no-break space before the code).
pub fn format_chf(amount: Decimal) -> String {
    let rounded = round2(amount);
    let body = format!("{:.width$}", rounded.abs(), width = MONEY_SCALE as usize);
    let (integer, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{}{}.{}{}{}",
        sign,
        group_thousands(integer),
        fraction,
        CURRENCY_SEPARATOR,
        CURRENCY_CODE
    )
}

/// Formats a rate expressed as a fraction (`0.055`) as a one-decimal
/// percentage with a decimal comma: `5,5 %`.
pub fn format_percentage(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.1}", percent.abs());
    let (integer, fraction) = body.split_once('.').unwrap_or((body.as_str(), "0"));

    let sign = if percent.is_sign_negative() && !percent.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{}{},{}{}%",
        sign,
        group_thousands(integer),
        fraction,
        PERCENT_SEPARATOR
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + len / 3 * 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}
