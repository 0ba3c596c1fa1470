pub mod disease;
pub mod enums;
pub mod message;
pub mod severity;

pub use disease::*;
pub use message::*;
pub use severity::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
