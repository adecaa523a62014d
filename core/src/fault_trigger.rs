//! One-shot transient fault firing.
//!
//! A fault spec lists request-sequence positions; landing on a
//! listed position fires a simulated transient error exactly once.
//! The fired set keys on the raw counter, so a retry (which always
//! advances the counter) can never re-trigger the same occurrence.

use std::collections::HashSet;

use crate::config::{FaultMode, FaultSpec};
use crate::error::{SimError, SimResult};
use crate::types::RequestSeq;

/// Status class of a trigger-style fault; the fired-set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    RateLimit,
    ServerError,
}

/// Fire the configured transient fault if `request` is a listed
/// occurrence that has not fired yet. The fired set grows
/// monotonically and is never pruned.
pub fn maybe_fail(
    fault: &FaultSpec,
    fired: &mut HashSet<(FaultKind, RequestSeq)>,
    request: RequestSeq,
) -> SimResult<()> {
    let (kind, fail_on) = match &fault.mode {
        FaultMode::RateLimit { fail_on } => (FaultKind::RateLimit, fail_on),
        FaultMode::ServerError { fail_on } => (FaultKind::ServerError, fail_on),
        _ => return Ok(()),
    };
    if !fail_on.contains(&request) {
        return Ok(());
    }
    if !fired.insert((kind, request)) {
        // Already fired for this occurrence.
        return Ok(());
    }
    log::debug!("fault fired: {kind:?} at request {request}");
    match kind {
        FaultKind::RateLimit => Err(SimError::RateLimited { request }),
        FaultKind::ServerError => Err(SimError::ServerFault { request }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_listed_occurrence() {
        let fault = FaultSpec::of(FaultMode::RateLimit { fail_on: vec![2, 4] });
        let mut fired = HashSet::new();

        assert!(maybe_fail(&fault, &mut fired, 1).is_ok());
        assert!(matches!(
            maybe_fail(&fault, &mut fired, 2),
            Err(SimError::RateLimited { request: 2 })
        ));
        // Same counter value again: the occurrence is spent.
        assert!(maybe_fail(&fault, &mut fired, 2).is_ok());
        assert!(maybe_fail(&fault, &mut fired, 3).is_ok());
        assert!(matches!(
            maybe_fail(&fault, &mut fired, 4),
            Err(SimError::RateLimited { request: 4 })
        ));
        assert_eq!(fired.len(), 2);
    }

    #[test]
    fn non_trigger_modes_never_fail() {
        let mut fired = HashSet::new();
        for mode in [FaultMode::None, FaultMode::PageDrift, FaultMode::TotalsTrap] {
            let fault = FaultSpec::of(mode);
            for request in 1..=5 {
                assert!(maybe_fail(&fault, &mut fired, request).is_ok());
            }
        }
        assert!(fired.is_empty());
    }

    #[test]
    fn server_error_uses_its_own_kind() {
        let fault = FaultSpec::of(FaultMode::ServerError { fail_on: vec![1] });
        let mut fired = HashSet::new();
        let err = maybe_fail(&fault, &mut fired, 1).unwrap_err();
        assert!(matches!(err, SimError::ServerFault { request: 1 }));
        assert_eq!(err.status(), 500);
        assert!(fired.contains(&(FaultKind::ServerError, 1)));
    }
}
