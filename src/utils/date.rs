use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--from` / `--to` bound.
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match input {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(s).map(Some).ok_or_else(|| s.to_string()),
    }
}
