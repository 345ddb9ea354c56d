// Thumbor URL builder library

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod signing;

// Re-export commonly used types
pub use builder::{create_thumbor, Thumbor};
pub use config::ThumborClientOptions;
pub use error::ThumborError;
pub use params::{
    Dimension, FitInType, HorizontalPosition, Parameters, VerticalPosition, WindowSizeAndPosition,
};
pub use signing::{sign, verify_signature};
