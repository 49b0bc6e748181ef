//! sf-core: stable foundation for sankeyflow.
//!
//! Contains:
//! - ids (stable compact IDs for topology objects)
//! - numeric (Real + balance tolerance + float helpers)
//! - params (named numeric parameter set)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use ids::*;
pub use numeric::*;
pub use params::Parameters;
