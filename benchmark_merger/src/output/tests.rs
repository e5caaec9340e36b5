//!
//! Tests for the output assembly.
//!

#![cfg(test)]

use crate::accumulator::Accumulator;
use crate::input::record::Record;
use crate::output::policy::Policy;
use crate::output::Output;
use crate::strategy::key::Key;

fn record(real_time: f64, cpu_time: f64) -> Record {
    Record {
        run_name: "unused".to_owned(),
        real_time,
        cpu_time,
        time_unit: "ms".to_owned(),
    }
}

#[test]
fn every_test_has_both_series() {
    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("bench", "first"), &record(1.0, 0.5));
    accumulator.push(Key::new("bench", "second"), &record(2.0, 1.5));
    accumulator.push(Key::new("bench", "first"), &record(3.0, 2.5));

    let output = Output::from(accumulator);
    assert_eq!(output.test_suites.len(), 1);
    let suite = &output.test_suites[0];
    assert_eq!(suite.name, "bench");
    assert_eq!(suite.tests.len(), 2);

    let first = &suite.tests[0];
    assert_eq!(first.name, "first");
    assert_eq!(first.data_points.len(), 2);
    assert_eq!(first.data_points[0].name, "real_time");
    assert_eq!(first.data_points[0].values, vec![1.0, 3.0]);
    assert_eq!(first.data_points[0].unit, "ms");
    assert_eq!(first.data_points[1].name, "cpu_time");
    assert_eq!(first.data_points[1].values, vec![0.5, 2.5]);
    for data_point in first.data_points.iter() {
        assert_eq!(data_point.policy, Policy::TIMING);
    }
}

#[test]
fn serializes_policy_fields() {
    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("Fixture", "Case1"), &record(10.0, 9.0));

    let json = serde_json::to_value(Output::from(accumulator)).expect("Always valid");
    assert_eq!(
        json,
        serde_json::json!({
            "testSuites": [ {
                "name": "Fixture",
                "tests": [ {
                    "name": "Case1",
                    "dataPoints": [ {
                        "name": "real_time",
                        "values": [ 10.0 ],
                        "unit": "ms",
                        "aggregationPolicy": "median",
                        "diffPolicy": "relativeDifference",
                        "regressionPolicy": "lessIsBetter",
                        "regressionArgument": 20
                    }, {
                        "name": "cpu_time",
                        "values": [ 9.0 ],
                        "unit": "ms",
                        "aggregationPolicy": "median",
                        "diffPolicy": "relativeDifference",
                        "regressionPolicy": "lessIsBetter",
                        "regressionArgument": 20
                    } ]
                } ]
            } ]
        })
    );
}

#[test]
fn empty_accumulator_gives_no_suites() {
    let json = Output::from(Accumulator::default())
        .to_json()
        .expect("Always valid");
    let output: Output = serde_json::from_str(json.as_str()).expect("Always valid");
    assert!(output.test_suites.is_empty());
}

#[test]
fn writes_to_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let path = directory.path().join("merged.json");

    let mut accumulator = Accumulator::default();
    accumulator.push(Key::new("bench", "case"), &record(1.0, 1.0));
    let output = Output::from(accumulator);
    output.write_to_file(path.as_path()).expect("Always valid");

    let text = std::fs::read_to_string(path).expect("Always valid");
    let read: Output = serde_json::from_str(text.as_str()).expect("Always valid");
    assert_eq!(read, output);
}
