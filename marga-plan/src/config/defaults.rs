//! Default value functions for serde deserialization.

use crate::world::{ROBOT_LENGTH_CM, ROBOT_WIDTH_CM};

pub fn enabled() -> bool {
    true
}

pub fn robot_length() -> f64 {
    ROBOT_LENGTH_CM
}

pub fn robot_width() -> f64 {
    ROBOT_WIDTH_CM
}

pub fn ball_radius() -> f64 {
    10.0
}

pub fn robot_radius() -> f64 {
    20.0
}

pub fn corridor_fractions() -> Vec<f64> {
    vec![0.0, 0.25, 0.5, 0.75, 1.0, 1.2]
}

pub fn corridor_tolerance() -> f64 {
    0.001
}

pub fn sector_count() -> usize {
    62
}

pub fn heuristic_iterations() -> usize {
    5
}

pub fn max_depth() -> usize {
    10
}

pub fn recursive_margin() -> f64 {
    5.0
}

pub fn region_radius() -> f64 {
    5.0
}

pub fn tangent_pair_margin() -> f64 {
    10.0
}
