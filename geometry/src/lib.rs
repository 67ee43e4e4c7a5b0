#![deny(clippy::all)]

pub mod coord2d;

/// Data type used for coordinates
pub type Coordinate = i32;
