pub mod cartesian;
pub mod error;
