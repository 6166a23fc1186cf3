pub mod config;
pub mod movie;
pub mod quote;
