//! Default value functions for serde deserialization.

pub fn window_width() -> u32 {
    720
}

pub fn window_height() -> u32 {
    480
}

pub fn viewport_cols() -> u32 {
    15
}

pub fn viewport_rows() -> u32 {
    11
}

pub fn min_score() -> f32 {
    0.0
}
