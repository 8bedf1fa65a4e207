//! Flag-or-fallback input resolution
//!
//! Orchestration tasks accept optional CLI flags for most addresses and
//! selectors; whatever is omitted is filled in from the chain config tables
//! or the deployment record store. These helpers keep that merge logic in
//! one place so each task reads the same way.

use crate::Result;

/// Returns the explicit value when given, otherwise consults the fallback.
///
/// The fallback is only evaluated when the explicit value is absent, so
/// lookups that can fail (record-store reads, chain-config resolution) are
/// skipped entirely when the operator passed a flag.
pub fn resolve_or<T>(explicit: Option<T>, fallback: impl FnOnce() -> Result<T>) -> Result<T> {
    match explicit {
        Some(value) => Ok(value),
        None => fallback(),
    }
}
