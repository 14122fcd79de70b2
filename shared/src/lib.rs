//! Shared library for the calorie tracker Lambda functions.
//!
//! This crate provides configuration, the Airtable client and the response
//! helpers used by the API Gateway handler.

pub mod airtable;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use airtable::AirtableClient;
pub use clock::{Clock, DateKey, FixedClock, LocalClock};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{CalorieResult, ErrorBody, Record, RecordSet};
