//! Persistence gateway for glazes and their variants.
//!
//! Every read and write of the catalog tables goes through [`GlazeService`],
//! which validates input before opening a transaction and keeps the
//! "every glaze has at least one variant" invariant.

mod error;
mod service;
mod validate;

pub use error::CatalogError;
pub use service::GlazeService;
pub use validate::MAX_NAME_LEN;
