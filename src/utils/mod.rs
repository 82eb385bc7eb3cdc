//! Utility functions for time handling and color conversion

pub mod color;
pub mod datetime;
