//! # Data module
//!
//! Source series for training:
//! - Synthetic noisy periodic signal
//! - Contiguous train/test split
//!
//! ## Example
//!
//! ```rust
//! use windowed_series::data::{train_test_split, SignalConfig, SignalGenerator};
//!
//! let series = SignalGenerator::new(SignalConfig::new(1000, 60.0).seed(42))
//!     .generate()
//!     .unwrap();
//!
//! let split = train_test_split(&series.time, &series.signal, 0.8).unwrap();
//! assert_eq!(split.y_train.shape(), &[800, 1]);
//! ```

mod split;
mod synthetic;

pub use split::{
    as_feature_matrix, train_test_split, SplitConfig, TrainTestSplit, DEFAULT_TRAIN_RATIO,
};
pub use synthetic::{
    clean_signal, synthetic_data, time_grid, SignalConfig, SignalGenerator, SyntheticSeries,
    DEFAULT_FINAL_TIME, DEFAULT_NOISE_STD, DEFAULT_NUM_SAMPLES,
};
