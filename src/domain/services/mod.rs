//! Pure domain services.

pub mod dimension_calculator;

pub use dimension_calculator::DimensionCalculator;
