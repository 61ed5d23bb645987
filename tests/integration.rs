//! Integration tests for Windowed Series

use approx::assert_relative_eq;
use ndarray::{s, Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use windowed_series::data::clean_signal;
use windowed_series::prelude::*;

#[test]
fn test_full_pipeline() {
    let mut rng = StdRng::seed_from_u64(2024);
    let series = synthetic_data(&mut rng, 2000, 80.0 * std::f64::consts::PI).unwrap();

    assert_eq!(series.time.len(), 2000);
    assert_relative_eq!(series.time[1999], 80.0 * std::f64::consts::PI);

    let split = train_test_split(&series.time, &series.signal, 0.8).unwrap();
    assert_eq!(split.y_train.shape(), &[1600, 1]);
    assert_eq!(split.y_test.shape(), &[400, 1]);

    let config = WindowConfig::new(80, 20).with_stride(5);
    let train = windowed_dataset(&split.y_train, &config).unwrap();
    let test = windowed_dataset(&split.y_test, &config).unwrap();

    // (1600 - 100) / 5 + 1 and (400 - 100) / 5 + 1
    assert_eq!(train.inputs().shape(), &[80, 301, 1]);
    assert_eq!(train.targets().shape(), &[20, 301, 1]);
    assert_eq!(test.inputs().shape(), &[80, 61, 1]);
    assert_eq!(test.targets().shape(), &[20, 61, 1]);

    // target of window i starts right after its input
    for i in [0, 150, 300] {
        let start = 5 * i;
        assert_eq!(
            train.targets().slice(s![.., i, 0]),
            split.y_train.slice(s![start + 80..start + 100, 0])
        );
    }
}

#[test]
fn test_pipeline_from_config() {
    let config = Config {
        signal: SignalConfig::new(300, 25.0).seed(3),
        window: WindowConfig::new(10, 5).with_stride(2),
        ..Default::default()
    };

    let data = prepare_datasets(&config).unwrap();
    assert_eq!(data.split.t_train.len(), 240);
    assert_eq!(data.train.num_samples(), (240 - 15) / 2 + 1);
    assert_eq!(data.test.num_samples(), (60 - 15) / 2 + 1);

    let again = prepare_datasets(&config).unwrap();
    assert_eq!(data.train, again.train);
    assert_eq!(data.test, again.test);
}

#[test]
fn test_clean_signal_windows() {
    let series = SignalGenerator::new(SignalConfig::new(64, 6.3).noise_std(0.0))
        .generate()
        .unwrap();
    let y = as_feature_matrix(&series.signal);
    let ds = windowed_dataset(&y, &WindowConfig::new(4, 4).with_stride(4)).unwrap();

    assert_eq!(ds.num_samples(), 15);
    for i in 0..ds.num_samples() {
        for k in 0..4 {
            let t = series.time[4 * i + 4 + k];
            assert_relative_eq!(ds.targets()[[k, i, 0]], clean_signal(t), epsilon = 1e-12);
        }
    }
}

#[test]
fn test_two_channel_series() {
    let mut rng = StdRng::seed_from_u64(8);
    let a = synthetic_data(&mut rng, 50, 10.0).unwrap();
    let b = synthetic_data(&mut rng, 50, 10.0).unwrap();

    let mut y = Array2::zeros((50, 2));
    y.column_mut(0).assign(&a.signal);
    y.column_mut(1).assign(&b.signal);

    let config = WindowConfig::new(6, 2).with_stride(3).with_num_features(2);
    let ds = windowed_dataset(&y, &config).unwrap();

    assert_eq!(ds.inputs().shape(), &[6, 15, 2]);
    let last = ds.sample(14, 1).unwrap();
    assert_eq!(last.start, 42);
    assert_eq!(last.input, b.signal.slice(s![42..48]).to_owned());
    assert_eq!(last.target, b.signal.slice(s![48..50]).to_owned());

    let single = WindowConfig::new(6, 2);
    assert!(matches!(
        windowed_dataset(&y, &single),
        Err(Error::ShapeMismatch { .. })
    ));
}

#[test]
fn test_degenerate_inputs_fail_fast() {
    let t = Array1::from_shape_fn(10, |i| i as f64);
    let y = t.clone();

    assert!(matches!(
        train_test_split(&t, &y, -0.5),
        Err(Error::InvalidSplit(_))
    ));

    let split = train_test_split(&t, &y, 0.3).unwrap();
    assert!(matches!(
        windowed_dataset(&split.y_train, &WindowConfig::new(3, 1)),
        Err(Error::WindowExceedsSeries {
            required: 4,
            available: 3
        })
    ));
}
