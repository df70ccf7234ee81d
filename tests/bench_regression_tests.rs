use perfgate::{
    AnalysisConfig, BenchmarkMap, BenchmarkResult, NOTABLE_CHANGE_PERCENT, RegressionAnalyzer,
    Severity, analyze,
    bench_regression::change_percent,
};

const MS: f64 = 1_000_000.0;

fn map(entries: &[(&str, f64)]) -> BenchmarkMap {
    entries
        .iter()
        .map(|(name, ms)| (name.to_string(), BenchmarkResult::new(*name, ms * MS)))
        .collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_regression_example_from_two_benchmarks() {
    let current = map(&[("bench_a", 120.0), ("bench_b", 10.0)]);
    let baseline = map(&[("bench_a", 100.0), ("bench_b", 10.0)]);
    let results = analyze(&current, &baseline, &AnalysisConfig::default());
    assert_eq!(results.len(), 1);
    let a = &results[0];
    assert_eq!(a.benchmark_name, "bench_a");
    assert!(close(a.change_percent, 20.0));
    assert!(a.is_regression);
    assert!(!a.is_improvement);
    assert_eq!(a.severity, Severity::Minor);
    assert!(close(a.current_time_ms, 120.0));
    assert!(close(a.baseline_time_ms, 100.0));
    assert_eq!(a.change_description(), "20.0% slower");
}

#[test]
fn test_large_improvement_is_severe_by_magnitude() {
    let current = map(&[("bench_c", 40.0)]);
    let baseline = map(&[("bench_c", 100.0)]);
    let results = analyze(&current, &baseline, &AnalysisConfig::default());
    assert_eq!(results.len(), 1);
    let c = &results[0];
    assert!(close(c.change_percent, -60.0));
    assert!(c.is_improvement);
    assert!(!c.is_regression);
    assert_eq!(c.severity, Severity::Severe);
    assert!(!c.is_severe_regression());
    assert_eq!(c.change_description(), "60.0% faster");
}

#[test]
fn test_zero_baseline_is_skipped() {
    let current = map(&[("zero", 5.0), ("normal", 20.0)]);
    let baseline = map(&[("zero", 0.0), ("normal", 10.0)]);
    let results = analyze(&current, &baseline, &AnalysisConfig::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].benchmark_name, "normal");
}

#[test]
fn test_names_on_one_side_only_are_ignored() {
    let current = map(&[("new_bench", 50.0), ("shared", 30.0)]);
    let baseline = map(&[("removed_bench", 10.0), ("shared", 10.0)]);
    let results = analyze(&current, &baseline, &AnalysisConfig::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].benchmark_name, "shared");
}

#[test]
fn test_empty_baseline_yields_no_results() {
    let current = map(&[("a", 1.0), ("b", 2.0)]);
    let results = analyze(&current, &BenchmarkMap::new(), &AnalysisConfig::default());
    assert!(results.is_empty());
}

#[test]
fn test_notable_floor_keeps_small_moves() {
    let current = map(&[("creep", 107.0), ("noise", 104.0)]);
    let baseline = map(&[("creep", 100.0), ("noise", 100.0)]);
    let results = analyze(&current, &baseline, &AnalysisConfig::default());
    assert_eq!(results.len(), 1);
    let creep = &results[0];
    assert_eq!(creep.benchmark_name, "creep");
    assert!(creep.change_percent > NOTABLE_CHANGE_PERCENT);
    assert!(!creep.is_regression && !creep.is_improvement);
    assert_eq!(creep.change_description(), "+7.0% change");
}

#[test]
fn test_notable_floor_does_not_scale_with_thresholds() {
    let config = AnalysisConfig::default()
        .with_regression_threshold(80.0)
        .with_improvement_threshold(80.0);
    let current = map(&[("creep", 106.0)]);
    let baseline = map(&[("creep", 100.0)]);
    assert_eq!(analyze(&current, &baseline, &config).len(), 1);
}

#[test]
fn test_severity_tiers() {
    let config = AnalysisConfig::default();
    assert_eq!(Severity::classify(20.0, &config), Severity::Minor);
    assert_eq!(Severity::classify(30.0, &config), Severity::Minor);
    assert_eq!(Severity::classify(30.5, &config), Severity::Moderate);
    assert_eq!(Severity::classify(-45.0, &config), Severity::Moderate);
    assert_eq!(Severity::classify(50.0, &config), Severity::Moderate);
    assert_eq!(Severity::classify(50.1, &config), Severity::Severe);
    assert_eq!(Severity::classify(-75.0, &config), Severity::Severe);
}

#[test]
fn test_threshold_boundaries_are_exclusive() {
    let analyzer = RegressionAnalyzer::new(AnalysisConfig::default());
    let baseline = BenchmarkResult::new("b", 100.0);
    let at_regression = analyzer
        .compare(&BenchmarkResult::new("b", 115.0), &baseline)
        .expect("compared");
    assert!(!at_regression.is_regression);
    let at_improvement = analyzer
        .compare(&BenchmarkResult::new("b", 90.0), &baseline)
        .expect("compared");
    assert!(!at_improvement.is_improvement);
}

#[test]
fn test_results_ranked_by_absolute_change() {
    let current = map(&[("a", 112.0), ("b", 30.0), ("c", 180.0), ("d", 92.0)]);
    let baseline = map(&[("a", 100.0), ("b", 100.0), ("c", 100.0), ("d", 100.0)]);
    let names: Vec<String> = analyze(&current, &baseline, &AnalysisConfig::default())
        .into_iter()
        .map(|r| r.benchmark_name)
        .collect();
    assert_eq!(names, vec!["c", "b", "a", "d"]);
}

#[test]
fn test_change_percent_formula() {
    assert_eq!(change_percent(150.0, 100.0), 50.0);
    assert_eq!(change_percent(50.0, 100.0), -50.0);
    assert_eq!(change_percent(100.0, 100.0), 0.0);
}

#[test]
fn test_moderate_regression_under_tight_thresholds() {
    let config = AnalysisConfig::default()
        .with_regression_threshold(5.0)
        .with_severe_threshold(90.0);
    let current = map(&[("m", 125.0)]);
    let baseline = map(&[("m", 100.0)]);
    let results = RegressionAnalyzer::new(config).analyze(&current, &baseline);
    assert_eq!(results[0].severity, Severity::Moderate);
    assert!(results[0].is_regression);
}
