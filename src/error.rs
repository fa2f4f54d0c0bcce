//! Error taxonomy shared by every codec in this crate.
//!
//! Mirrors spec.md §7 exactly: each failure mode the spec names has its own
//! variant so callers can match on *why* an operation failed rather than
//! parsing a message string.

use thiserror::Error;

/// The single error type returned by every fallible operation in this
/// crate.
#[derive(Debug, Error)]
pub enum Error {
    /// `select(k)` called with `k` outside `[0, n)`.
    #[error("index {index} out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// `next_geq`/`next_leq` called with a value outside the stored
    /// `[min, max]` range on the side that has no answer.
    #[error("value {value} is out of the stored universe [{min}, {max}]")]
    OutOfUniverse { value: u64, min: u64, max: u64 },

    /// `rank` (on `UPEF`/`MLEF`, which require existence) called with a
    /// value that is within `[min, max]` but not actually stored.
    #[error("value {0} is not present in the sequence")]
    NotPresent(u64),

    /// Construction-time rejection: empty input, non-monotone input,
    /// `b == 0`, or `depth == 0`.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Deserialization detected truncation, a wrong kind tag, or
    /// inconsistent counts.
    #[error("malformed serialized blob: {0}")]
    MalformedBlob(String),

    /// `to_file`/`from_file` propagate the underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
