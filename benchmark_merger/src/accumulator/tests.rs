//!
//! Tests for the measurement accumulator.
//!

#![cfg(test)]

use crate::accumulator::perf_test::PerfTest;
use crate::accumulator::Accumulator;
use crate::input::record::Record;
use crate::strategy::key::Key;
use crate::warning::Warning;

fn record(real_time: f64, cpu_time: f64, time_unit: &str) -> Record {
    Record {
        run_name: "unused".to_owned(),
        real_time,
        cpu_time,
        time_unit: time_unit.to_owned(),
    }
}

fn find<'a>(accumulator: &'a Accumulator, suite: &str, test: &str) -> Option<&'a PerfTest> {
    accumulator
        .suites()
        .iter()
        .find(|candidate| candidate.name == suite)
        .and_then(|suite| suite.tests.iter().find(|candidate| candidate.name == test))
}

#[test]
fn repeated_key_accumulates_samples() {
    let mut accumulator = Accumulator::default();
    for index in 0..5 {
        let warning = accumulator.push(
            Key::new("bench", "Fixture/Case1"),
            &record(index as f64, (index * 2) as f64, "ns"),
        );
        assert_eq!(warning, None);
    }

    let test = find(&accumulator, "bench", "Fixture/Case1").expect("Always exists");
    assert_eq!(test.name, "Fixture/Case1");
    assert_eq!(test.unit, "ns");
    assert_eq!(test.real_time, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(test.cpu_time, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn first_seen_order_is_kept() {
    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("zeta", "b"), &record(1.0, 1.0, "ns"));
    accumulator.push(Key::new("alpha", "z"), &record(1.0, 1.0, "ns"));
    accumulator.push(Key::new("zeta", "a"), &record(1.0, 1.0, "ns"));
    accumulator.push(Key::new("alpha", "y"), &record(1.0, 1.0, "ns"));
    accumulator.push(Key::new("zeta", "b"), &record(2.0, 2.0, "ns"));

    let suites: Vec<_> = accumulator
        .suites()
        .iter()
        .map(|suite| {
            (
                suite.name.as_str(),
                suite
                    .tests
                    .iter()
                    .map(|test| test.name.as_str())
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    assert_eq!(
        suites,
        vec![("zeta", vec!["b", "a"]), ("alpha", vec!["z", "y"])]
    );
}

#[test]
fn same_test_in_different_suites_is_separate() {
    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("first", "case"), &record(1.0, 1.0, "ns"));
    accumulator.push(Key::new("second", "case"), &record(2.0, 2.0, "ns"));

    assert_eq!(accumulator.suites().len(), 2);
    assert_eq!(
        find(&accumulator, "second", "case").map(|test| test.real_time.clone()),
        Some(vec![2.0])
    );
}

#[test]
fn unit_mismatch_is_reported_and_kept() {
    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("bench", "case"), &record(10.0, 10.0, "ns"));
    let warning = accumulator.push(Key::new("bench", "case"), &record(1.0, 1.0, "us"));

    assert_eq!(
        warning,
        Some(Warning::UnitMismatch {
            suite: "bench".to_owned(),
            test: "case".to_owned(),
            expected: "ns".to_owned(),
            found: "us".to_owned(),
        })
    );
    let test = find(&accumulator, "bench", "case").expect("Always exists");
    assert_eq!(test.unit, "ns");
    assert_eq!(test.real_time, vec![10.0, 1.0]);
}

#[test]
fn empty_by_default() {
    assert!(Accumulator::default().suites().is_empty());
}
