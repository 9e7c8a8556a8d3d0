//! Core business logic: feed parsing, conversion and formatting

pub mod config;
pub mod conversion;
pub mod currency;
pub mod feed;
pub mod log;
pub mod sheet;

// Re-export main types for cleaner imports
pub use conversion::{convert, convert_amount};
pub use feed::FeedProvider;
pub use sheet::{ExchangeRow, ExchangeSheet, parse};
