//! # Preprocessing module
//!
//! Turns a feature matrix into tensors for encoder-decoder training:
//! - Sliding input/target windows with a configurable stride
//! - The generate → split → window pipeline
//!
//! ## Example
//!
//! ```rust
//! use ndarray::Array2;
//! use windowed_series::preprocessing::{windowed_dataset, WindowConfig};
//!
//! let y = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
//!
//! // 2 samples in, 2 samples out, a new window every 3 steps
//! let config = WindowConfig::new(2, 2).with_stride(3);
//! let ds = windowed_dataset(&y, &config).unwrap();
//!
//! assert_eq!(ds.num_samples(), 3);
//! ```

mod pipeline;
mod windowing;

pub use pipeline::{prepare_datasets, prepare_datasets_with, prepare_from_series, PreparedData};
pub use windowing::{windowed_dataset, WindowConfig, WindowSample, WindowedDataset};
