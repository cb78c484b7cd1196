use chrono::{Datelike, Local, NaiveDate};

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Journal date format: `YYYY-M-D`, no zero padding
pub fn format_journal_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Parse a journal date. Zero-padded months and days are accepted too.
pub fn parse_journal_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `clap` value parser for `--date`
pub fn parse_date_arg(text: &str) -> Result<NaiveDate, String> {
    parse_journal_date(text).ok_or_else(|| format!("expected a date like 2025-6-12, got \"{}\"", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(format_journal_date(date), "2025-6-2");

        let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(format_journal_date(date), "2025-11-30");
    }

    #[test]
    fn test_parse_padded_and_unpadded() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 2);
        assert_eq!(parse_journal_date("2025-6-2"), expected);
        assert_eq!(parse_journal_date("2025-06-02"), expected);
        assert_eq!(parse_journal_date(" 2025-6-2 "), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_journal_date("2025-13-1"), None);
        assert_eq!(parse_journal_date("2025-6"), None);
        assert_eq!(parse_journal_date("today"), None);
        assert_eq!(parse_journal_date("2025-2-30"), None);
    }

    #[test]
    fn test_parse_date_arg_message() {
        let err = parse_date_arg("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
    }
}
