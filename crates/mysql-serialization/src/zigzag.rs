//! Zigzag mapping between signed values and the unsigned magnitudes that
//! travel on the wire: `0, -1, 1, -2, 2, ...` map to `0, 1, 2, 3, 4, ...`.

/// Recovers a signed value from its zigzag magnitude.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ ((value & 1) as i64).wrapping_neg()
}

/// Maps a signed value to its zigzag magnitude.
#[inline]
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}
