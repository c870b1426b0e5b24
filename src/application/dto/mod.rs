//! # Data Transfer Objects
//!
//! ユースケースの入出力

pub mod media_types;
pub mod resource_response;

pub use media_types::VendorMediaTypes;
pub use resource_response::{ResourceBody, ResourceResponse, ResourceStatus};
