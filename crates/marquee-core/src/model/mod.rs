pub mod mood;
pub mod movie;
pub mod quote;

pub use mood::Mood;
pub use movie::MovieRecord;
pub use quote::Quote;
