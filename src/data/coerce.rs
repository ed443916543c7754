// ---------------------------------------------------------------------------
// Scalar coercion: free-form dataset text → numbers
// ---------------------------------------------------------------------------

/// Parse a currency-ish string into a price.
///
/// Every character that is not an ASCII digit, `.` or `-` is stripped before
/// parsing, so `"$1,234.50"` yields `1234.50`. Anything the float parser
/// rejects after cleaning (including the empty string) falls back to `0.0` —
/// malformed prices never abort a run.
///
/// Embedded minus signs are kept literally rather than validated for
/// position: `"1-2"` cleans to `"1-2"`, which the float parser rejects, so
/// it deterministically yields `0.0`.
pub fn parse_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Parse a base-10 integer from the front of a string.
///
/// Leading whitespace and a single leading sign are permitted; parsing stops
/// at the first non-digit, so `"4 bedrooms"` yields `4` and `"4.5"` yields
/// `4`. An empty digit run (or overflow) yields `default`.
pub fn parse_number(text: &str, default: i64) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return default;
    }
    match rest[..digits_len].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) => default,
    }
}
