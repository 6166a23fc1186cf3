//! Remote sources and configuration for marquee.
//!
//! Wraps the OMDb movie API, the ZenQuotes API and poster downloads, and
//! loads the layered configuration that points at them.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod omdb;
pub mod poster;
pub mod quotes;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use omdb::{Lookup, OmdbClient};
pub use poster::Poster;
pub use quotes::QuotesClient;
