//! Startup configuration: database connection parameters and server options.

pub mod settings;
pub mod validator;

pub use settings::*;
pub use validator::*;
