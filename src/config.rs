use log::Level;

/// Scroll multipliers for the three backdrop layers: orb A, orb B, grid.
pub const PARALLAX_RATES: [f64; 3] = [0.18, 0.10, 0.06];

/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "is-visible";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
