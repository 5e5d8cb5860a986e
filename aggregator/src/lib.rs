//! The newsgrep aggregator: a three-tier concurrent ingestion pipeline
//! (feed list, feeds, articles) that populates a shared token index, and
//! the interactive query loop that reads it afterwards.
//!
//! Each tier fans out into spawned workers and joins them all before
//! completing. Three counting gates bound the fan-out: at most 8 feeds being
//! parsed, at most 64 articles being fetched process-wide, and at most 12
//! concurrent fetches against any single origin server. Any one fetch or
//! parse may fail without aborting the run; only a failed feed list is
//! fatal.

pub mod limiter;
pub mod pipeline;
pub mod query;
pub mod source;
