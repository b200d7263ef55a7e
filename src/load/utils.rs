/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a whole-number cell. Spreadsheets routinely hand back counts as
/// floats, so `"2021.0"` is accepted; `"20.5"` and `"abc"` are not.
pub fn parse_whole_number(raw: &str) -> Option<i64> {
    let s = clean_str(raw);
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// A row with nothing but empty cells, e.g. a trailing line in a CSV export.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}
