//! QuoteBook Library
//!
//! Core library for the QuoteBook desktop application.

pub mod app;
pub mod quotes;
pub mod storage;
pub mod sync;
pub mod types;
pub mod ui;
