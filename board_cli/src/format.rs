//! Text formatting for terminal output.

use board_core::Moq;

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234.5` → `$1,234.50`
pub fn usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// `2607` → `2,607`
pub fn count(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// `Sheets(2607)` → `2,607 sheets`; unreachable → `N/A`
pub fn moq(result: Moq) -> String {
    match result.sheets() {
        Some(n) => format!("{} sheets", count(n)),
        None => result.to_string(),
    }
}
