use chrono::{DateTime, Utc};

/// Avatar initials: first letter of up to two words, upper-cased.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// `Jan 05, 2025`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y %H:%M").to_string()
}

/// Placeholder for empty optional fields.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials("Grace"), "G");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn dates_render_month_day_year() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 13, 7, 0).unwrap();
        assert_eq!(format_date(&at), "Jan 05, 2025");
        assert_eq!(format_timestamp(&at), "Jan 05, 2025 13:07");
    }

    #[test]
    fn empty_optionals_render_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("Dhaka")), "Dhaka");
        assert_eq!(yes_no(true), "Yes");
    }
}
