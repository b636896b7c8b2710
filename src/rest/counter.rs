//! Reassembly of 64-bit counters the appliance splits into two halves.
//!
//! Byte counters are reported both as a single number and as a
//! `*_hi`/`*_lo` pair of 32-bit words. The pair is authoritative.

/// Combines the high and low 32-bit words of a split counter.
///
/// # Example
///
/// ```rust
/// use stingray_api::rest::combine_counter;
///
/// assert_eq!(combine_counter(1, 0), 1 << 32);
/// assert_eq!(combine_counter(0, u32::MAX), 4_294_967_295);
/// ```
#[must_use]
pub fn combine_counter(hi: u32, lo: u32) -> u64 {
    (u64::from(hi) << 32) | u64::from(lo)
}

/// Returns the combined value when both halves were reported.
pub(crate) fn reassemble(hi: Option<u32>, lo: Option<u32>) -> Option<u64> {
    Some(combine_counter(hi?, lo?))
}
