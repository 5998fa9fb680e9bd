//! Parity hash codes
//!
//! Reproduces the 32-bit hash code of the value bit for bit: the attribute
//! hash is the 31-polynomial over UTF-16 code units, folded into a 5381 seed.

const SEED: i32 = 5381;

/// 31-polynomial hash over the UTF-16 code units of `s`, wrapping on overflow
pub(crate) fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Mix the hash of the single `text` attribute into the seed
pub(crate) fn value_hash(text: &str) -> i32 {
    let h = SEED;
    h.wrapping_add((h << 5).wrapping_add(string_hash(text)))
}
