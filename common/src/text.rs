//! Bounded text helpers.
//!
//! Every string the watchface keeps lives in a fixed-capacity
//! `heapless::String`. Oversized input is truncated on a char boundary rather
//! than rejected.

use core::fmt::Write;

use heapless::String;

/// Copy `src` into a new bounded string, dropping whatever does not fit.
pub fn truncated<const N: usize>(src: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in src.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Format a signed integer into a bounded string.
pub fn int_label<const N: usize>(value: i32) -> String<N> {
    let mut out: String<N> = String::new();
    let _ = write!(out, "{value}");
    out
}
