//! Deterministic mock of a paginated trade-data query API.
//!
//! The benchmark harness installs one scenario configuration, then
//! replays queries against it. Same inputs always yield the same
//! sequence of responses, so client behavior (retry, backoff,
//! dedup, pagination completeness) can be graded deterministically.
//!
//! RULES:
//!   - Nothing here reads a platform RNG or the wall clock.
//!   - Base row content depends only on scenario id + query fields.
//!     Drift may reorder the full set; duplicates and totals may
//!     mutate the returned page; nothing else changes.
//!   - All session mutation happens behind MockEngine's &mut self.

pub mod catalog;
pub mod config;
pub mod drift_injector;
pub mod duplicate_injector;
pub mod engine;
pub mod error;
pub mod fault_trigger;
pub mod fixtures;
pub mod paging;
pub mod row;
pub mod rows;
pub mod seed;
pub mod session;
pub mod totals_injector;
pub mod types;
