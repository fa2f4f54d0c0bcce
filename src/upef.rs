//! Uniformly-partitioned Elias-Fano (`UPEF`): split the sequence into
//! fixed-size chunks, store chunk anchors in one `EliasFano` and each
//! chunk's residuals (element minus anchor) in its own, smaller one. The
//! residual universe is usually far smaller than the whole sequence's,
//! so each chunk's `ell` shrinks accordingly.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::ef::EliasFano;
use crate::error::Error;
use crate::varint;

pub(crate) const KIND: u64 = 2;

/// A two-level Elias-Fano codec partitioned into chunks of `b` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformlyPartitionedEliasFano {
    b: usize,
    n: usize,
    anchors: EliasFano,
    chunks: Vec<EliasFano>,
}

impl UniformlyPartitionedEliasFano {
    /// Partitions `sorted` into chunks of `b` elements (the last chunk may
    /// be shorter) and builds one `EliasFano` per anchor/residual stream.
    pub fn new(sorted: &[u64], b: usize) -> Result<Self, Error> {
        if b == 0 {
            return Err(Error::InvalidInput("chunk size b must be nonzero"));
        }
        if sorted.is_empty() {
            return Err(Error::InvalidInput("sequence must not be empty"));
        }
        if !sorted.windows(2).all(|w| w[0] <= w[1]) {
            return Err(Error::InvalidInput(
                "sequence must be sorted in non-decreasing order",
            ));
        }

        let n = sorted.len();
        let mut anchor_values = Vec::with_capacity(n.div_ceil(b));
        let mut chunks = Vec::with_capacity(n.div_ceil(b));
        for chunk in sorted.chunks(b) {
            let anchor = chunk[0];
            anchor_values.push(anchor);
            let residuals: Vec<u64> = chunk.iter().map(|&x| x - anchor).collect();
            chunks.push(EliasFano::new(&residuals)?);
        }
        let anchors = EliasFano::new(&anchor_values)?;

        log::debug!("UPEF::new n={n} b={b} chunks={}", chunks.len());

        Ok(Self { b, n, anchors, chunks })
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Reconstructs the `i`-th (0-based) stored element in O(1).
    pub fn select(&self, i: usize) -> Result<u64, Error> {
        if i >= self.n {
            return Err(Error::IndexOutOfRange { index: i, len: self.n });
        }
        let j = i / self.b;
        let k = i % self.b;
        let anchor = self.anchors.select(j)?;
        Ok(anchor + self.chunks[j].select(k)?)
    }

    /// The index of `x`, or `NotPresent`/`OutOfUniverse` if it isn't
    /// stored.
    pub fn rank(&self, x: u64) -> Result<usize, Error> {
        let min = self.select(0).expect("UPEF is never empty");
        let max = self.select(self.n - 1).expect("UPEF is never empty");
        if x < min || x > max {
            return Err(Error::OutOfUniverse { value: x, min, max });
        }
        // x is within [min, max], so this can only fail if x sits below the
        // first anchor, which the bounds check above already rules out.
        let anchor_value = self.anchors.next_leq(x).expect("x is within range");
        let j = self.anchors.rank(anchor_value).start;
        let residual = x - anchor_value;
        let local = self.chunks[j].rank(residual);
        if local.is_empty() {
            return Err(Error::NotPresent(x));
        }
        Ok(j * self.b + local.start)
    }

    /// All stored values matching `(y & ignore) == (value & ignore)`, in
    /// ascending order. `UPEF` has no clean upper/lower split to recurse on
    /// (the anchor/residual boundary doesn't align with arbitrary bit
    /// masks), so this scans every chunk directly.
    pub fn matches(&self, value: u64, ignore: u64) -> impl Iterator<Item = u64> + '_ {
        self.chunks.iter().enumerate().flat_map(move |(j, chunk)| {
            let anchor = self.anchors.select(j).unwrap_or(0);
            chunk
                .iter()
                .map(move |r| anchor + r)
                .filter(move |&y| (y & ignore) == (value & ignore))
        })
    }

    /// Sum of the anchor and residual structures' bit lengths.
    pub fn bit_length(&self) -> u64 {
        self.anchors.bit_length() + self.chunks.iter().map(|c| c.bit_length()).sum::<u64>()
    }

    /// Serializes to a self-describing, non-normative extension of
    /// spec.md's blob layout (kind tag `2`; see DESIGN.md: the composite
    /// `UPEF` format is explicitly out of scope for conformance).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        varint::write(&mut out, KIND);
        varint::write(&mut out, self.b as u64);
        varint::write(&mut out, self.n as u64);
        let anchors_bytes = self.anchors.to_bytes();
        varint::write(&mut out, anchors_bytes.len() as u64);
        out.extend_from_slice(&anchors_bytes);
        varint::write(&mut out, self.chunks.len() as u64);
        for chunk in &self.chunks {
            let bytes = chunk.to_bytes();
            varint::write(&mut out, bytes.len() as u64);
            out.extend_from_slice(&bytes);
        }
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut pos = 0;
        let kind = varint::read(bytes, &mut pos)?;
        if kind != KIND {
            return Err(Error::MalformedBlob(format!("expected UPEF kind {KIND}, got {kind}")));
        }
        let b = varint::read(bytes, &mut pos)? as usize;
        let n = varint::read(bytes, &mut pos)? as usize;
        let anchors_len = varint::read(bytes, &mut pos)? as usize;
        let anchors_bytes = varint::take_bytes(bytes, &mut pos, anchors_len)?;
        let anchors = EliasFano::from_bytes(anchors_bytes)?;
        let num_chunks = varint::read(bytes, &mut pos)? as usize;
        let mut chunks = Vec::with_capacity(num_chunks);
        for _ in 0..num_chunks {
            let len = varint::read(bytes, &mut pos)? as usize;
            let chunk_bytes = varint::take_bytes(bytes, &mut pos, len)?;
            chunks.push(EliasFano::from_bytes(chunk_bytes)?);
        }
        if anchors.len() != num_chunks {
            return Err(Error::MalformedBlob(
                "anchor count does not match chunk count".into(),
            ));
        }
        Ok(Self { b, n, anchors, chunks })
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut f = File::create(path)?;
        f.write_all(&self.to_bytes())?;
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut f = File::open(path)?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }
}
