//! End-to-end preparation: generate, split, window

use rand::Rng;
use tracing::info;

use super::windowing::{windowed_dataset, WindowedDataset};
use crate::data::{train_test_split, SignalGenerator, SyntheticSeries, TrainTestSplit};
use crate::error::Result;
use crate::utils::Config;

/// Everything produced by one pipeline run
#[derive(Debug, Clone)]
pub struct PreparedData {
    /// Full generated series
    pub series: SyntheticSeries,
    /// Contiguous train/test split of the series
    pub split: TrainTestSplit,
    /// Windows over the training prefix
    pub train: WindowedDataset,
    /// Windows over the test suffix
    pub test: WindowedDataset,
}

/// Run the pipeline, seeding from `config.signal.seed` when set
pub fn prepare_datasets(config: &Config) -> Result<PreparedData> {
    config.validate()?;
    let series = SignalGenerator::new(config.signal.clone()).generate()?;
    prepare_from_series(series, config)
}

/// Run the pipeline drawing noise from `rng`
pub fn prepare_datasets_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &Config,
) -> Result<PreparedData> {
    config.validate()?;
    let series = SignalGenerator::new(config.signal.clone()).generate_with(rng)?;
    prepare_from_series(series, config)
}

/// Split and window an existing series
pub fn prepare_from_series(series: SyntheticSeries, config: &Config) -> Result<PreparedData> {
    let split = train_test_split(&series.time, &series.signal, config.split.train_ratio)?;

    let train = windowed_dataset(&split.y_train, &config.window)?;
    let test = windowed_dataset(&split.y_test, &config.window)?;

    info!(
        samples = series.len(),
        train_windows = train.num_samples(),
        test_windows = test.num_samples(),
        "prepared windowed datasets"
    );

    Ok(PreparedData {
        series,
        split,
        train,
        test,
    })
}
