//! # Windowed Series
//!
//! Synthetic noisy periodic time series reshaped into sliding windows for
//! sequence-to-sequence (encoder-decoder) training.
//!
//! ## Modules
//!
//! - `data` - Synthetic signal and train/test split
//! - `preprocessing` - Sliding-window tensors and the end-to-end pipeline
//! - `utils` - Configuration and logging
//! - `error` - Error type shared by the crate
//!
//! ## Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use windowed_series::prelude::*;
//!
//! fn main() -> windowed_series::Result<()> {
//!     // 1. Generate the series
//!     let mut rng = StdRng::seed_from_u64(42);
//!     let series = synthetic_data(&mut rng, 2000, 80.0 * std::f64::consts::PI)?;
//!
//!     // 2. Split 80% / 20%
//!     let split = train_test_split(&series.time, &series.signal, 0.8)?;
//!
//!     // 3. 80 steps in, 20 steps out, a new window every 5 steps
//!     let config = WindowConfig::new(80, 20).with_stride(5);
//!     let train = windowed_dataset(&split.y_train, &config)?;
//!
//!     assert_eq!(train.inputs().shape(), &[80, 301, 1]);
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod preprocessing;
pub mod utils;

// Re-exports for convenience
pub use data::{
    as_feature_matrix, synthetic_data, train_test_split, SignalConfig, SignalGenerator,
    SplitConfig, SyntheticSeries, TrainTestSplit,
};
pub use error::{Error, Result};
pub use preprocessing::{
    prepare_datasets, prepare_datasets_with, windowed_dataset, PreparedData, WindowConfig,
    WindowSample, WindowedDataset,
};
pub use utils::Config;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::data::{
        as_feature_matrix, synthetic_data, train_test_split, SignalConfig, SignalGenerator,
        SyntheticSeries, TrainTestSplit,
    };
    pub use crate::error::{Error, Result};
    pub use crate::preprocessing::{
        prepare_datasets, windowed_dataset, PreparedData, WindowConfig, WindowedDataset,
    };
    pub use crate::utils::Config;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
