//! Terminal presentation of the exchange sheet and the conversion form

pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;
