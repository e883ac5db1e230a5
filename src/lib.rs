//! Explainable candidate-to-job matching.
//!
//! Given a [`model::UserProfile`] and a [`model::Job`], the
//! [`scoring::MatchEngine`] computes five independent sub-scores (skills,
//! experience, location, salary, preferences), combines them with fixed
//! weights into a 0-100 score, attaches a confidence label, reasoning and
//! tags, and [`feed::rank_feed`] orders the results.
//!
//! The engine performs no I/O. Time enters only through the `now` argument.

pub mod config;
pub mod explain;
pub mod feed;
pub mod geo;
pub mod logging;
pub mod matching;
pub mod model;
pub mod output;
pub mod scoring;

pub use feed::{rank_feed, rank_feed_with_tolerance};
pub use geo::{DistanceProvider, NoDistance};
pub use model::{Job, JobMatch, UserProfile};
pub use scoring::{MatchEngine, ScoringConfig};
