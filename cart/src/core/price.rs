//! Tolerant price parsing for vendor-authored text
//!
//! Vendor price text is free-form ("Price: 13,000", "13000", "₩13,000 won"),
//! so parsing never fails: anything without a leading integer is worth 0.

/// Parse a non-negative integer price out of free-form text
///
/// Keeps only ASCII digits and periods, so grouping commas and any
/// labels fall away, then reads the integer before the first period.
/// Missing, malformed or overflowing input yields `0`.
pub fn parse_price(raw: &str) -> u64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let integer_part = cleaned.split('.').next().unwrap_or_default();
    integer_part.parse::<u64>().unwrap_or(0)
}
