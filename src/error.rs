//! The simulation core has exactly three kinds of failure (spec §7):
//! invalid arguments (clamped/mapped, never propagated), out-of-memory at
//! construction (the one case surfaced as a `Result`), and programming-error
//! invariant breaches (aborts/panics, not recoverable).

use thiserror::Error;

/// The only fallible entry point this crate exposes. Invalid coordinates and
/// unknown species are handled by clamping/mapping, not by this type.
#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("failed to allocate a {width}x{height} grid")]
    OutOfMemory { width: u32, height: u32 },
}
