pub mod glaze;
pub mod glaze_variant;
