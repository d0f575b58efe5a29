pub mod error;
pub mod mood;
