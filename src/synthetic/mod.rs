//! Synthetic label generation.
//!
//! Builds ground-truth label sequences from a class distribution and
//! derives noisy predictions by overwriting a random subset of positions.
//!
//! # Quick Start
//!
//! ```
//! use label_shift::synthetic::{ClassDistribution, NoiseInjector};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dist = ClassDistribution::new(vec![100, 100, 100, 100, 100]);
//! let y_true = dist.generate_labels();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let y_pred = NoiseInjector::new(100, 5).inject(&y_true, &mut rng).unwrap();
//! assert_eq!(y_pred.len(), 500);
//! ```
//!
//! The random source is always passed in, so a seeded generator makes every
//! draw reproducible.

mod labels;
mod noise;

pub use labels::ClassDistribution;
pub use noise::{NoiseInjector, NoisyLabels};
