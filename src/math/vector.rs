//! Vector algebra helpers on top of nalgebra

use crate::error::{FilterError, Result};
use nalgebra::{DVector, Matrix2, Rotation2, Vector2, Vector3};
use std::cmp::Ordering;

/// A point in the plane
pub type Point2 = Vector2<f64>;

/// A point in space
pub type Point3 = Vector3<f64>;

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(FilterError::shape(
            format!("{} elements", a.len()),
            format!("{} elements", b.len()),
        ));
    }
    Ok(())
}

/// Euclidean distance between two points of equal dimension
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt())
}

/// Manhattan (taxicab) distance between two points of equal dimension
pub fn manhattan_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
}

/// Sum of absolute components
pub fn manhattan_norm(v: &DVector<f64>) -> f64 {
    v.lp_norm(1)
}

/// Order two vectors by their Euclidean length
pub fn cmp_by_length(a: &DVector<f64>, b: &DVector<f64>) -> Result<Ordering> {
    if a.len() != b.len() {
        return Err(FilterError::shape(
            format!("{} elements", a.len()),
            format!("{} elements", b.len()),
        ));
    }
    Ok(a.norm().total_cmp(&b.norm()))
}

/// Counter-clockwise rotation by `rads`
pub fn rotation_matrix(rads: f64) -> Matrix2<f64> {
    *Rotation2::new(rads).matrix()
}

pub fn rotate(v: &Point2, rads: f64) -> Point2 {
    rotation_matrix(rads) * v
}

/// Truncate each component towards zero
pub fn as_int_tuple2(v: &Point2) -> (i64, i64) {
    (v.x as i64, v.y as i64)
}

pub fn as_int_tuple3(v: &Point3) -> (i64, i64, i64) {
    (v.x as i64, v.y as i64, v.z as i64)
}

/// Clamp `v` into `[min, max]`
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(v))
}

/// Clamp every component of `v` into `[min, max]`
pub fn clamp_all(v: &DVector<f64>, min: f64, max: f64) -> DVector<f64> {
    v.map(|x| clamp(x, min, max))
}
