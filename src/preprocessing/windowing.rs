//! Sliding-window tensors for sequence-to-sequence models
//!
//! A feature matrix of shape `(L, C)` is cut into overlapping windows along the
//! time axis, independently per channel. Window `i` reads its input from
//! `[stride·i, stride·i + input_window)` and its target from the
//! `output_window` samples immediately after.
//!
//! Tensors are laid out time-first: inputs are `(input_window, num_samples, C)`
//! and targets are `(output_window, num_samples, C)`.

use ndarray::{s, Array1, Array2, Array3, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Window geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of samples given to the model
    pub input_window: usize,
    /// Number of future samples to predict
    pub output_window: usize,
    /// Step between consecutive window starts
    pub stride: usize,
    /// Number of feature channels; must match the matrix being windowed
    pub num_features: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            input_window: 5,
            output_window: 1,
            stride: 1,
            num_features: 1,
        }
    }
}

impl WindowConfig {
    /// Create a single-channel configuration with stride 1
    ///
    /// # Arguments
    ///
    /// * `input_window` - Samples per input window
    /// * `output_window` - Samples per target window
    pub fn new(input_window: usize, output_window: usize) -> Self {
        Self {
            input_window,
            output_window,
            ..Default::default()
        }
    }

    /// Set the stride
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Set the number of feature channels
    pub fn with_num_features(mut self, num_features: usize) -> Self {
        self.num_features = num_features;
        self
    }

    /// Samples covered by a single input/target pair
    pub fn span(&self) -> usize {
        self.input_window + self.output_window
    }

    /// Check that every length is positive
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("input_window", self.input_window),
            ("output_window", self.output_window),
            ("stride", self.stride),
            ("num_features", self.num_features),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(Error::InvalidParameter(format!("{} must be at least 1", name)));
            }
        }
        Ok(())
    }

    /// Number of window placements in a series of `len` samples:
    /// `floor((len - input_window - output_window) / stride) + 1`.
    ///
    /// # Errors
    ///
    /// `Error::WindowExceedsSeries` when a single window does not fit.
    pub fn num_samples(&self, len: usize) -> Result<usize> {
        self.validate()?;
        let required = self.span();
        if required > len {
            return Err(Error::WindowExceedsSeries {
                required,
                available: len,
            });
        }
        Ok((len - required) / self.stride + 1)
    }

    /// Offset of the first input sample of window `index`
    pub fn input_start(&self, index: usize) -> usize {
        self.stride * index
    }

    /// Offset of the first target sample of window `index`
    pub fn output_start(&self, index: usize) -> usize {
        self.stride * index + self.input_window
    }
}

/// One window of one channel, tagged with its input start offset
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSample {
    pub start: usize,
    pub input: Array1<f64>,
    pub target: Array1<f64>,
}

/// Input and target tensors produced by [`windowed_dataset`]
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedDataset {
    inputs: Array3<f64>,
    targets: Array3<f64>,
    config: WindowConfig,
}

impl WindowedDataset {
    /// Inputs, shape `(input_window, num_samples, num_features)`
    pub fn inputs(&self) -> &Array3<f64> {
        &self.inputs
    }

    /// Targets, shape `(output_window, num_samples, num_features)`
    pub fn targets(&self) -> &Array3<f64> {
        &self.targets
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn num_samples(&self) -> usize {
        self.inputs.len_of(Axis(1))
    }

    pub fn num_features(&self) -> usize {
        self.inputs.len_of(Axis(2))
    }

    pub fn input_window(&self) -> usize {
        self.inputs.len_of(Axis(0))
    }

    pub fn output_window(&self) -> usize {
        self.targets.len_of(Axis(0))
    }

    /// Consume into `(X, Y)`
    pub fn into_parts(self) -> (Array3<f64>, Array3<f64>) {
        (self.inputs, self.targets)
    }

    /// Window `index` of `channel`, or `None` if either is out of range
    pub fn sample(&self, index: usize, channel: usize) -> Option<WindowSample> {
        if index >= self.num_samples() || channel >= self.num_features() {
            return None;
        }
        Some(WindowSample {
            start: self.config.input_start(index),
            input: self.inputs.slice(s![.., index, channel]).to_owned(),
            target: self.targets.slice(s![.., index, channel]).to_owned(),
        })
    }

    /// Split along the sample axis into batches of at most `batch_size` windows
    pub fn batches(&self, batch_size: usize) -> Result<Vec<(Array3<f64>, Array3<f64>)>> {
        if batch_size == 0 {
            return Err(Error::InvalidParameter(
                "batch_size must be at least 1".to_string(),
            ));
        }

        let batches = self
            .inputs
            .axis_chunks_iter(Axis(1), batch_size)
            .zip(self.targets.axis_chunks_iter(Axis(1), batch_size))
            .map(|(x, y)| (x.to_owned(), y.to_owned()))
            .collect();

        Ok(batches)
    }
}

/// Cut `y` (shape `(L, C)`) into input and target windows.
///
/// Both tensors are zero-initialised and then fully overwritten, so every
/// element holds a sample of `y`.
///
/// # Errors
///
/// All checks run before anything is allocated:
/// - `Error::InvalidParameter` if any window length, the stride or `num_features` is zero
/// - `Error::ShapeMismatch` if `num_features` differs from the number of columns of `y`
/// - `Error::WindowExceedsSeries` if `input_window + output_window > L`
///
/// # Example
///
/// ```rust
/// use ndarray::Array2;
/// use windowed_series::{windowed_dataset, WindowConfig};
///
/// let y = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
/// let ds = windowed_dataset(&y, &WindowConfig::new(3, 1)).unwrap();
///
/// assert_eq!(ds.inputs().shape(), &[3, 7, 1]);
/// assert_eq!(ds.targets()[[0, 6, 0]], 9.0);
/// ```
pub fn windowed_dataset(y: &Array2<f64>, config: &WindowConfig) -> Result<WindowedDataset> {
    config.validate()?;
    if y.ncols() != config.num_features {
        return Err(Error::ShapeMismatch {
            expected: config.num_features,
            actual: y.ncols(),
        });
    }

    let len = y.nrows();
    let num_samples = config.num_samples(len)?;
    let num_features = config.num_features;

    debug!(
        len,
        input_window = config.input_window,
        output_window = config.output_window,
        stride = config.stride,
        num_samples,
        num_features,
        "building windowed dataset"
    );

    let mut inputs = Array3::zeros((config.input_window, num_samples, num_features));
    let mut targets = Array3::zeros((config.output_window, num_samples, num_features));

    for f in 0..num_features {
        let channel = y.column(f);
        for i in 0..num_samples {
            let start = config.input_start(i);
            inputs
                .slice_mut(s![.., i, f])
                .assign(&channel.slice(s![start..start + config.input_window]));

            let start = config.output_start(i);
            targets
                .slice_mut(s![.., i, f])
                .assign(&channel.slice(s![start..start + config.output_window]));
        }
    }

    Ok(WindowedDataset {
        inputs,
        targets,
        config: config.clone(),
    })
}
