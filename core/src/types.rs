//! Shared primitive types used across the simulator.

/// The canonical scenario identifier, as supplied by the harness.
pub type ScenarioId = String;

/// Position of a query call in the session's request sequence.
/// Increments once per call, including calls that fail.
pub type RequestSeq = u64;
