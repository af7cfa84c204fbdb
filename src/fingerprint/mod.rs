pub mod canon;
pub mod encode;
pub mod paths;
pub mod similarity;
pub mod walker;

pub use canon::{Canonicalizer, SimpleCanonicalizer};
pub use encode::encode_path;
pub use paths::shortest_path;
pub use similarity::{
    fold_fingerprint, substructure_screen_fp, BitFingerprint, FingerprintRecord, DEFAULT_FP_BITS,
};
pub use walker::ShortestPathWalker;
