pub mod glaze;
pub mod shared;
pub mod variant;
