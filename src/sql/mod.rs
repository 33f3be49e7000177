//! Safe SQL builder: fixed identifiers, filter values only as bound parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
