// Re-export all model types for ease of use

pub mod contact;

// Re-export commonly used types
pub use contact::*;
