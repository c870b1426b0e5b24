//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod content_negotiator;

pub use content_negotiator::ContentNegotiator;
