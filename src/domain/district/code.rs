//! District code sequence.
//!
//! Codes have the shape `district-<n>`. The next code is derived from the
//! most recently assigned one; anything that does not match the pattern
//! restarts the sequence at `district-1`.

const CODE_PREFIX: &str = "district-";

/// Parses the numeric suffix of a district code.
///
/// Returns `None` when the value does not match `district-<digits>`.
pub fn parse_code_number(code: &str) -> Option<u64> {
    let suffix = code.strip_prefix(CODE_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Computes the next code in the sequence from the last stored one.
///
/// An exhausted counter restarts the sequence rather than overflow.
pub fn next_code(last_code: Option<&str>) -> String {
    let next = last_code
        .and_then(parse_code_number)
        .and_then(|n| n.checked_add(1))
        .unwrap_or(1);
    format!("{}{}", CODE_PREFIX, next)
}
