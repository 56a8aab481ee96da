pub mod chart;
pub mod glaze;
pub mod health;
pub mod photo;
pub mod variant;
