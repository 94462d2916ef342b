//! Lenient integer parsing for path parameters and port values.
//!
//! Reads optional leading whitespace, an optional sign, then the leading run
//! of ASCII digits and ignores whatever follows: `"8080abc"` is 8080,
//! `"3000.5"` is 3000, `"abc"` is nothing.

/// Parse the leading integer of `raw`, if it has one.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Overlong digit runs clamp.
    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
