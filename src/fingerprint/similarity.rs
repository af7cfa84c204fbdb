use bitvec::prelude::{BitSlice, BitVec, Lsb0};
use serde::{Deserialize, Serialize};

use crate::fingerprint::walker::ShortestPathWalker;

pub const DEFAULT_FP_BITS: usize = 2048;

/// Fixed-width bit fingerprint, folded from a path-token set. Suitable for
/// Tanimoto ranking and substructure prescreening; the byte layout is stable
/// so the bits can be stored in an index and compared later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFingerprint(pub BitVec<u8, Lsb0>);

impl BitFingerprint {
    pub fn as_bitslice(&self) -> &BitSlice<u8, Lsb0> {
        self.0.as_bitslice()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_raw_slice()
    }

    /// Tanimoto similarity: |a AND b| / |a OR b|. Two all-zero fingerprints
    /// count as identical.
    pub fn tanimoto(&self, other: &BitFingerprint) -> f64 {
        let and_count = (self.0.clone() & other.0.as_bitslice()).count_ones();
        let or_count = (self.0.clone() | other.0.as_bitslice()).count_ones();
        if or_count == 0 {
            return 1.0;
        }
        and_count as f64 / or_count as f64
    }
}

/// Fold a token set into an `nbits`-wide fingerprint. Each token sets one
/// bit, chosen by FNV-1a over its bytes, so the result is independent of
/// iteration order.
pub fn fold_fingerprint<'a, I>(tokens: I, nbits: usize) -> BitFingerprint
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bits = BitVec::<u8, Lsb0>::repeat(false, nbits);
    for token in tokens {
        bits.set(fnv1a(token.as_bytes()) as usize % nbits, true);
    }
    BitFingerprint(bits)
}

/// Every bit of the substructure fingerprint must also be set in the
/// superstructure fingerprint; a cheap prescreen before full matching.
pub fn substructure_screen_fp(
    substructure_fp: &BitSlice<u8, Lsb0>,
    superstructure_fp: &BitSlice<u8, Lsb0>,
) -> bool {
    let and_match = substructure_fp.to_bitvec() & superstructure_fp;
    and_match == substructure_fp
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Token set plus folded bits for one molecule, in the shape an external
/// indexer stores per document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintRecord {
    pub tokens: Vec<String>,
    pub fingerprint: Vec<u8>,
}

impl FingerprintRecord {
    pub fn from_walker(walker: &ShortestPathWalker, nbits: usize) -> Self {
        let mut tokens: Vec<String> = walker.paths().iter().cloned().collect();
        tokens.sort();
        let bits = fold_fingerprint(tokens.iter().map(String::as_str), nbits);
        FingerprintRecord {
            tokens,
            fingerprint: bits.as_bytes().to_vec(),
        }
    }

    pub fn to_json(&self) -> eyre::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
