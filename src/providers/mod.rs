pub mod cnb_provider;

pub use cnb_provider::CnbFeedProvider;
