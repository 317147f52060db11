//! Input auto-formatters and amount presentation helpers.

use finbti_domain::Money;

const MAX_DATE_DIGITS: usize = 8;
const MASK: &str = "****";
const VISIBLE_ACCOUNT_TAIL: usize = 2;
const CENTURY_PREFIX: &str = "20";

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Money) -> String;

    /// Like [`CurrencyFormatter::format_amount`] but always carries a sign.
    fn format_signed(&self, amount: Money) -> String {
        let body = self.format_amount(amount.saturating_abs());
        match amount.signum() {
            1 => format!("+{body}"),
            -1 => format!("-{body}"),
            _ => body,
        }
    }
}

/// Korean won: `1,000원`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WonFormatter;

impl CurrencyFormatter for WonFormatter {
    fn format_amount(&self, amount: Money) -> String {
        format_won(amount)
    }
}

/// Any other ISO code: `1,000 USD`.
#[derive(Debug, Clone)]
pub struct CodeFormatter {
    pub code: String,
}

impl CurrencyFormatter for CodeFormatter {
    fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", group_thousands(amount), self.code)
    }
}

/// Picks the formatter for a configured currency code.
pub fn currency_formatter(code: &str) -> Box<dyn CurrencyFormatter> {
    if code.eq_ignore_ascii_case("KRW") {
        Box::new(WonFormatter)
    } else {
        Box::new(CodeFormatter {
            code: code.to_ascii_uppercase(),
        })
    }
}

/// Progressively inserts `-` separators while a date is typed:
/// `2025` → `2025`, `20250` → `2025-0`, `2025031` → `2025-03-1`.
pub fn format_date_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DATE_DIGITS)
        .collect();
    match digits.len() {
        0..=4 => digits,
        5..=6 => format!("{}-{}", &digits[..4], &digits[4..]),
        _ => format!("{}-{}-{}", &digits[..4], &digits[4..6], &digits[6..]),
    }
}

/// Strips everything but digits and inserts thousands separators.
pub fn format_amount_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return "0".to_string();
    }
    insert_commas(significant)
}

/// Reads the digits of a formatted amount back into a number. Empty input is 0.
pub fn parse_amount_to_number(text: &str) -> Money {
    text.chars()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0, |acc: Money, digit| {
            acc.saturating_mul(10).saturating_add(Money::from(digit))
        })
}

/// `123-456-7890` → `123-456-****90`. Other shapes are returned unchanged.
pub fn mask_account_number(account_number: &str) -> String {
    let segments: Vec<&str> = account_number.split('-').collect();
    match segments.as_slice() {
        [first, second, third] => {
            let tail: String = {
                let chars: Vec<char> = third.chars().collect();
                let start = chars.len().saturating_sub(VISIBLE_ACCOUNT_TAIL);
                chars[start..].iter().collect()
            };
            format!("{first}-{second}-{MASK}{tail}")
        }
        _ => account_number.to_string(),
    }
}

/// `25-03-10` → `2025-03-10`. Assumes the 21st century; other shapes pass through.
pub fn expand_two_digit_year(date: &str) -> String {
    let bytes = date.as_bytes();
    let shaped = bytes.len() == 8
        && bytes[2] == b'-'
        && bytes[5] == b'-'
        && [0, 1, 3, 4, 6, 7]
            .iter()
            .all(|&idx| bytes[idx].is_ascii_digit());
    if shaped {
        format!("{CENTURY_PREFIX}{date}")
    } else {
        date.to_string()
    }
}

/// `-12345` → `-12,345`.
pub fn group_thousands(amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = insert_commas(&digits);
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_won(amount: Money) -> String {
    format!("{}원", group_thousands(amount))
}

pub fn format_signed_won(amount: Money) -> String {
    WonFormatter.format_signed(amount)
}

fn insert_commas(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_grows_with_digit_count() {
        assert_eq!(format_date_input(""), "");
        assert_eq!(format_date_input("202"), "202");
        assert_eq!(format_date_input("2025"), "2025");
        assert_eq!(format_date_input("20250"), "2025-0");
        assert_eq!(format_date_input("202503"), "2025-03");
        assert_eq!(format_date_input("2025031"), "2025-03-1");
        assert_eq!(format_date_input("20250310"), "2025-03-10");
        assert_eq!(format_date_input("2025-03-10999"), "2025-03-10");
    }

    #[test]
    fn amount_input_groups_and_strips() {
        assert_eq!(format_amount_input(""), "");
        assert_eq!(format_amount_input("abc"), "");
        assert_eq!(format_amount_input("000"), "0");
        assert_eq!(format_amount_input("1000"), "1,000");
        assert_eq!(format_amount_input("1,234,567원"), "1,234,567");
        assert_eq!(format_amount_input("00123"), "123");
    }

    #[test]
    fn amount_round_trips_through_formatting() {
        for raw in ["0", "7", "007", "999", "1000", "123456789", "100000000000"] {
            let formatted = format_amount_input(raw);
            let expected: Money = raw.parse().expect("digit string");
            assert_eq!(parse_amount_to_number(&formatted), expected, "raw {raw}");
        }
    }

    #[test]
    fn parse_saturates_instead_of_overflowing() {
        assert_eq!(parse_amount_to_number(""), 0);
        assert_eq!(parse_amount_to_number("99999999999999999999999"), Money::MAX);
    }

    #[test]
    fn masks_three_segment_account_numbers_only() {
        assert_eq!(mask_account_number("123-456-7890"), "123-456-****90");
        assert_eq!(mask_account_number("12-34-5"), "12-34-****5");
        assert_eq!(mask_account_number("1234567890"), "1234567890");
        assert_eq!(mask_account_number("1-2-3-4"), "1-2-3-4");
    }

    #[test]
    fn expands_two_digit_years() {
        assert_eq!(expand_two_digit_year("25-03-10"), "2025-03-10");
        assert_eq!(expand_two_digit_year("2025-03-10"), "2025-03-10");
        assert_eq!(expand_two_digit_year("25/03/10"), "25/03/10");
    }

    #[test]
    fn won_formatting_carries_sign() {
        assert_eq!(format_won(1000), "1,000원");
        assert_eq!(format_won(-1234567), "-1,234,567원");
        assert_eq!(format_signed_won(1000), "+1,000원");
        assert_eq!(format_signed_won(-400), "-400원");
        assert_eq!(format_signed_won(0), "0원");
    }

    #[test]
    fn formatter_follows_currency_code() {
        assert_eq!(currency_formatter("krw").format_amount(5000), "5,000원");
        assert_eq!(currency_formatter("usd").format_signed(-5000), "-5,000 USD");
    }
}
