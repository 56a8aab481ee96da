pub mod chart;
pub mod colour;
pub mod config;
pub mod foodsafe;
pub mod photo;

pub use chart::{ChartGlaze, ChartVariant, GridRounding, TempRange};
pub use foodsafe::Foodsafe;
pub use photo::{PhotoError, PhotoSettings};
