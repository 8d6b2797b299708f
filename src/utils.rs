//! Group of useful computations

/// Nearest-integer image of a box-fraction coordinate, with the half-integer
/// rounded up so the result always lies in [-0.5, 0.5)
pub fn min_image(coord: f64) -> f64 {
    coord - (coord + 0.5).floor()
}

pub fn norm_squared(vec: &[f64; 3]) -> f64 {
    vec[0] * vec[0] + vec[1] * vec[1] + vec[2] * vec[2]
}
