//! # Swim Kinematics
//!
//! Carangiform body-wave kinematics (Borazjani & Sotiropoulos) and arclength
//! estimation of the undulating centerline.

pub mod arclength;
pub mod centerline;
pub mod constants;
pub mod error;
pub mod field;
pub mod grid;
pub mod params;

pub use arclength::*;
pub use centerline::*;
pub use error::{KinematicsError, Result};
pub use field::*;
pub use grid::*;
pub use params::*;
