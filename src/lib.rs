//! Quasi-succinct Elias-Fano encoding of monotone non-decreasing sequences
//! of `u64`.
//!
//! Three codecs are provided, from simplest to most structured:
//!
//! - [`EliasFano`]: the core single-level codec (upper/lower split with a
//!   negated-unary bucket histogram).
//! - [`UniformlyPartitionedEliasFano`]: chunks the sequence into fixed-size
//!   blocks, each with its own, usually much narrower, residual universe.
//! - [`MultiLevelEliasFano`]: recursively partitions by shared high-order
//!   prefixes for sequences with strong locality.
//!
//! All three expose `select`/`rank`-style queries, a lazy `matches` scan for
//! masked lookups, and a self-describing binary serialization.

#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_doc_comments)]

mod bitvec;
mod ef;
mod error;
mod mlef;
mod upef;
mod varint;

pub use ef::{EfIter, EliasFano, MatchIter};
pub use error::Error;
pub use mlef::{MlefSplit, MultiLevelEliasFano};
pub use upef::UniformlyPartitionedEliasFano;

/// Re-exports the crate's three codecs under short names for glob import.
pub mod prelude {
    pub use crate::{EliasFano, Error, MultiLevelEliasFano, UniformlyPartitionedEliasFano};
}
