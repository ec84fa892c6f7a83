//! Parallel reduction of per-path contributions.
//!
//! # Architecture
//!
//! ```text
//!  contributions 0 .. N-1  (ContributionSource, read by index)
//!  ├── block 0   [0, B)        Welford push, sequential
//!  ├── block 1   [B, 2B)       Welford push, sequential
//!  ├── ...
//!  └── block k   [kB, N)       last block may be short
//!
//!  blocks combined by recursive halving of the block range:
//!
//!            merge
//!           /     \
//!       merge     merge        rayon::join at every level
//!       /  \      /  \
//!     b0   b1   b2   b3
//! ```
//!
//! The tree shape is a function of `(N, B)` only, so the aggregate is
//! reproducible bit-for-bit on any thread pool for a fixed block size `B`.
//! Different block sizes may differ in the last bits.

mod moments;
mod pairwise;
mod source;

pub use moments::Moments;
pub use pairwise::{PairwiseReducer, DEFAULT_BLOCK_SIZE};
pub use source::ContributionSource;
