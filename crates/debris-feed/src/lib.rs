//! External data source adapter: near-earth-object feed client, its
//! configuration, and the archived fallback list.
//!
//! The simulation never sees a feed error. `fetch_with_fallback` turns any
//! failure into `FeedOutcome::Fallback`.

pub mod client;
pub mod config;
pub mod fallback;
pub mod parse;

pub use client::{fetch_with_fallback, FeedError, NeoFeedClient, NeoWsClient};
pub use config::{FeedConfig, FeedConfigError};

#[cfg(test)]
mod tests;
