// Typed errors for the core engines.
//
// The orchestration layer (main.rs) uses anyhow; the library keeps its own
// failure modes as concrete types so callers can match on them. Everything
// data-dependent ("nothing found", degraded segmentation) resolves to a
// sentinel value instead of an error. Only genuine input problems surface.

use thiserror::Error;

/// Validation failures for the core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The question or self-introduction was blank. Distinct from
    /// "no match found", which is a successful answer with a sentinel body.
    #[error("input text is empty")]
    EmptyInput,
}

/// Raised when bytes decode under none of the candidate encodings.
///
/// The decode chain (UTF-8, then GBK) is tried in order before this is
/// returned; it is never retried further up the stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("text could not be decoded as UTF-8 or GBK")]
pub struct DecodeError;
