//! Tag feed client for kbump
//!
//! Fetches per-repository Atom feeds over HTTP and turns their entries into
//! [`kbump_core::FeedEntry`] values for the bump pipeline.
//!
//! # Example
//!
//! ```no_run
//! use kbump_core::types::FeedConfig;
//! use kbump_feed::AtomFeedClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AtomFeedClient::new(&FeedConfig::default())?;
//!     let entries = client.fetch_entries("library/nginx").await?;
//!
//!     println!("{} published tags", entries.len());
//!
//!     Ok(())
//! }
//! ```

pub mod atom;

pub use atom::{parse_feed, AtomFeedClient};
