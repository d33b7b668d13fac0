pub mod assets;
pub mod config;
pub mod data;
pub mod error;

pub use assets::*;
pub use config::*;
pub use data::*;
pub use error::*;
