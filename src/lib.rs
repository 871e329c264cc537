//! Generate Anki cards for LeetCode problems.
//!
//! A [`Session`] resolves problem references (ids, id ranges, titles and
//! collection URLs) to slugs, then appends one CSV row per problem to the card
//! file.

pub mod card;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod fetcher;
pub mod queries;
pub mod resolver;
pub mod schema;
pub mod session;
#[cfg(test)]
mod testing;

pub use card::Card;
pub use config::Settings;
pub use errors::{Error, Result};
pub use session::{RunSummary, Session};
