//! Core definitions (error types and the packed verse location), relied upon by all
//! verse-* crates.

pub mod error;
pub mod location;
pub mod macros;
pub mod result;

pub use location::Location;
pub use result::Result;
