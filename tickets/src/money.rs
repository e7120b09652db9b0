//! Lira amounts formatted the way the shop prints them (`₺6.200`).

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;

/// Format whole lira with `.` thousands grouping.
#[must_use]
pub fn format_lira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₺');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
