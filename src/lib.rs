pub mod config;
pub mod decoder;
pub mod error;
pub mod interpolate;
pub mod pipeline;
pub mod serde_helpers;
pub mod shares;

pub use config::*;
pub use decoder::*;
pub use error::*;
pub use interpolate::*;
pub use pipeline::*;
pub use shares::*;
