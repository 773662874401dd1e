pub mod error;
pub mod plan;
pub mod usage;
pub mod views;
