//! Time-ordered record identifiers.

use std::{
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

static LAST_MILLIS: Mutex<u64> = Mutex::new(0);

/// Mint a record identifier from the current time.
///
/// The Unix timestamp in milliseconds is base-62 encoded least-significant
/// digit first and prefixed with `i`. A last-value guard bumps the
/// timestamp when two mints land in the same millisecond, so successive
/// identifiers are always distinct.
pub fn mint() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let mut last = LAST_MILLIS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let millis = now.max(*last + 1);
    *last = millis;
    drop(last);

    encode(millis)
}

fn encode(mut value: u64) -> String {
    let mut id = String::from("i");
    while value != 0 {
        id.push(ALPHABET[(value % 62) as usize] as char);
        value /= 62;
    }
    id
}
