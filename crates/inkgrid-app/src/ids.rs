//! Artwork identifier generation

use inkgrid_core::prelude::*;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Generate a new artwork identifier.
///
/// Prefers a random UUID drawn from the operating system's secure source.
/// If that source is unavailable, falls back to the base-36 epoch
/// milliseconds followed by a base-36 random suffix.
pub fn generate_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(e) => {
            warn!("Secure random source unavailable, using fallback id: {}", e);
            fallback_id(inkgrid_core::now_millis(), rand::thread_rng().gen())
        }
    }
}

/// Timestamp-plus-random identifier.
pub fn fallback_id(now_millis: i64, random: u64) -> String {
    format!(
        "{}{}",
        to_base36(now_millis.unsigned_abs()),
        to_base36(random)
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
