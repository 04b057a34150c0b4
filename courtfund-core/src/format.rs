use chrono::{DateTime, NaiveDateTime};

pub fn cents_to_usd(cents: u64) -> f64 {
    cents as f64 / 100.0
}

/// Whole-dollar display with thousands grouping: 13000000 -> "$13,000,000".
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let dollars = amount.abs().round() as u64;
    let grouped = group_thousands(dollars);
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Two-decimal display used for individual payment rows.
pub fn format_usd_cents(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let grouped = group_thousands(total_cents / 100);
    let fraction = total_cents % 100;
    if negative {
        format!("-${grouped}.{fraction:02}")
    } else {
        format!("${grouped}.{fraction:02}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a server timestamp as `DD.MM.YYYY HH:MM` for table display.
///
/// The backends emit both RFC 3339 and bare ISO timestamps; anything else
/// comes back unchanged rather than failing a whole render.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_dollars_are_grouped() {
        assert_eq!(format_usd(13_000_000.0), "$13,000,000");
        assert_eq!(format_usd(1_000.0), "$1,000");
        assert_eq!(format_usd(999.0), "$999");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn fractions_round_to_whole_dollars() {
        assert_eq!(format_usd(1234.56), "$1,235");
        assert_eq!(format_usd(-50.0), "-$50");
    }

    #[test]
    fn cents_variant_keeps_two_decimals() {
        assert_eq!(format_usd_cents(1234.5), "$1,234.50");
        assert_eq!(format_usd_cents(0.05), "$0.05");
        assert_eq!(format_usd_cents(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn cents_convert_to_dollars() {
        assert_eq!(cents_to_usd(5000), 50.0);
        assert_eq!(cents_to_usd(1), 0.01);
    }

    #[test]
    fn timestamps_parse_both_server_shapes() {
        assert_eq!(
            format_timestamp("2026-03-01T14:30:00+00:00"),
            "01.03.2026 14:30"
        );
        assert_eq!(
            format_timestamp("2026-03-01T14:30:00.123456"),
            "01.03.2026 14:30"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
