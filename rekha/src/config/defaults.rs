//! Default value functions for serde deserialization.

use std::f64::consts::{FRAC_PI_2, PI};

pub fn max_rounds() -> usize {
    20
}

pub fn convergence_tolerance() -> f64 {
    PI / 180.0
}

pub fn nudge() -> f64 {
    0.01
}

pub fn max_nudges() -> usize {
    4
}

pub fn unconstrained_limit() -> f64 {
    0.99 * FRAC_PI_2
}

pub fn max_sweeps() -> usize {
    100
}

pub fn enabled() -> bool {
    true
}

pub fn guideline_min_points() -> usize {
    6
}

pub fn guideline_density() -> f64 {
    2.0
}

pub fn spread_spacing() -> f64 {
    10.0
}
