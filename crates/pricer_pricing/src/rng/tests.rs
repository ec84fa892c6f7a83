//! Tests for per-path random streams.

use super::*;

fn sample_moments(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

#[test]
fn test_same_seed_same_path_is_reproducible() {
    for method in [NormalMethod::Ziggurat, NormalMethod::BoxMuller] {
        let mut a = PricerRng::for_path(99, 5);
        let mut b = PricerRng::for_path(99, 5);
        for _ in 0..16 {
            assert_eq!(a.gen_normal(method), b.gen_normal(method));
        }
    }
}

#[test]
fn test_factory_matches_direct_construction() {
    let streams = PathStreams::new(2024);
    for index in [0_u64, 1, 17, 1 << 20] {
        let mut from_factory = streams.stream(index);
        let mut direct = PricerRng::for_path(2024, index);
        assert_eq!(from_factory.stream(), index);
        assert_eq!(from_factory.seed(), 2024);
        for _ in 0..8 {
            assert_eq!(from_factory.gen_uniform(), direct.gen_uniform());
        }
    }
}

#[test]
fn test_stream_zero_matches_from_seed() {
    let mut a = PricerRng::from_seed(7);
    let mut b = PricerRng::for_path(7, 0);
    assert_eq!(a.gen_uniform(), b.gen_uniform());
}

#[test]
fn test_distinct_paths_diverge() {
    let streams = PathStreams::new(1234);
    let first: Vec<f64> = (0..64).map(|i| streams.stream(i).gen_uniform()).collect();
    let mut sorted = first.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    assert_eq!(sorted.len(), first.len());
}

#[test]
fn test_distinct_seeds_diverge() {
    let mut a = PricerRng::for_path(1, 0);
    let mut b = PricerRng::for_path(2, 0);
    assert_ne!(a.gen_uniform(), b.gen_uniform());
}

#[test]
fn test_uniform_range() {
    let mut rng = PricerRng::from_seed(42);
    for _ in 0..10_000 {
        let u = rng.gen_uniform();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn test_normal_moments_both_methods() {
    for method in [NormalMethod::Ziggurat, NormalMethod::BoxMuller] {
        let mut rng = PricerRng::from_seed(12345);
        let mut buffer = vec![0.0; 100_000];
        rng.fill_normal(&mut buffer, method);

        assert!(buffer.iter().all(|z| z.is_finite()));
        let (mean, var) = sample_moments(&buffer);
        assert!(mean.abs() < 0.02, "{}: mean {}", method, mean);
        assert!((var - 1.0).abs() < 0.03, "{}: variance {}", method, var);
    }
}

#[test]
fn test_first_draws_across_paths_are_uncorrelated() {
    let streams = PathStreams::new(31337);
    let n = 10_000_u64;
    let xs: Vec<f64> = (0..n)
        .map(|i| streams.stream(i).gen_normal(NormalMethod::Ziggurat))
        .collect();
    let ys: Vec<f64> = (0..n)
        .map(|i| streams.stream(i + n).gen_normal(NormalMethod::Ziggurat))
        .collect();

    let (mx, vx) = sample_moments(&xs);
    let (my, vy) = sample_moments(&ys);
    let cov = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f64>()
        / (n as f64 - 1.0);
    let corr = cov / (vx * vy).sqrt();
    assert!(corr.abs() < 0.05, "correlation {}", corr);

    // Cross-path sample of first draws is itself standard normal
    assert!(mx.abs() < 0.06);
    assert!((vx - 1.0).abs() < 0.08);
}

#[test]
fn test_normal_method_parsing() {
    assert_eq!("ziggurat".parse::<NormalMethod>().unwrap(), NormalMethod::Ziggurat);
    assert_eq!("Box-Muller".parse::<NormalMethod>().unwrap(), NormalMethod::BoxMuller);
    assert_eq!("box_muller".parse::<NormalMethod>().unwrap(), NormalMethod::BoxMuller);
    assert!("polar".parse::<NormalMethod>().is_err());
}

#[test]
fn test_normal_method_display_round_trips() {
    for method in [NormalMethod::Ziggurat, NormalMethod::BoxMuller] {
        assert_eq!(method.to_string().parse::<NormalMethod>().unwrap(), method);
    }
    assert_eq!(NormalMethod::default(), NormalMethod::Ziggurat);
}
