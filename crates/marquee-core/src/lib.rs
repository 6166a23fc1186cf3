//! Core domain model for marquee.
//!
//! This crate defines the movie and quote records, the flat-file stores
//! that persist them, the derived genre index, mood-based quote
//! selection, theme palettes and the text blocks shown to the user.
//! Nothing here touches the network.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod display;
pub mod error;
pub mod genre;
pub mod model;
pub mod quote;
pub mod store;
pub mod theme;

pub use error::{Error, Result};
pub use model::{Mood, MovieRecord, Quote};
pub use store::{AppendOutcome, QuoteFavorites, RecordStore, StoreContents};
pub use theme::ThemeMode;
