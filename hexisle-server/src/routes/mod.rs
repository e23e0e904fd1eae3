//! HTTP route handlers

pub mod game;
pub mod map;
pub mod status;
pub mod ws;

/// Accept a map dimension only inside the documented range, otherwise use
/// the configured default
pub(crate) fn valid_dimension(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if (30..=50000).contains(&v) => v as usize,
        _ => default,
    }
}
