//! API key obfuscation for the login call
//!
//! ZIA does not accept the raw API key. The login body carries a timestamp
//! and a scrambled key derived from it: the last six digits of the millisecond
//! timestamp select characters from the key, then the same digits shifted
//! right by one (zero padded back to six) select characters offset by two.

use crate::error::{Result, ZiaError};

/// Minimum key length the digit lookups can address (max index is 9 + 2)
const MIN_KEY_LENGTH: usize = 12;

/// Obfuscate an API key against the given millisecond timestamp.
///
/// Returns the timestamp unchanged together with the scrambled key, the two
/// values the `/authenticatedSession` body needs.
pub fn obfuscate_api_key(api_key: &str, now_ms: i64) -> Result<(i64, String)> {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() < MIN_KEY_LENGTH {
        return Err(ZiaError::Config(format!(
            "API key must be at least {} characters long, got {}",
            MIN_KEY_LENGTH,
            chars.len()
        )));
    }

    let low = format!("{:06}", now_ms.rem_euclid(1_000_000));
    let shifted = format!("{:06}", low.parse::<i64>().map_err(|e| {
        ZiaError::Config(format!("timestamp digits not numeric: {}", e))
    })? >> 1);

    let mut key = String::with_capacity(12);
    for digit in low.chars() {
        let idx = digit.to_digit(10).unwrap_or(0) as usize;
        key.push(chars[idx]);
    }
    for digit in shifted.chars() {
        let idx = digit.to_digit(10).unwrap_or(0) as usize;
        key.push(chars[idx + 2]);
    }

    Ok((now_ms, key))
}

/// Current time in epoch milliseconds, as the login call expects
pub(crate) fn login_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
