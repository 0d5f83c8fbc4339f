pub mod errors;
pub mod types;

pub use errors::{ConfigError, HomedeckError};
pub use types::Rect;

pub type Result<T> = std::result::Result<T, HomedeckError>;
