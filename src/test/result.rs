use super::{procs, textbook};
use crate::sim::simulate;

#[test]
fn averages_match_textbook_values() {
    let result = simulate(&textbook()).expect("valid input");
    assert!((result.average_waiting() - 6.5).abs() < 1e-9);
    assert!((result.average_turnaround() - 13.0).abs() < 1e-9);
}

#[test]
fn cpu_utilization_accounts_for_idle_gaps() {
    let result = simulate(&procs(&[("A", 0, 2), ("B", 5, 3)])).expect("valid input");
    assert_eq!(result.busy_ticks(), 5);
    assert!((result.cpu_utilization() - 0.625).abs() < 1e-9);

    let result = simulate(&textbook()).expect("valid input");
    assert!((result.cpu_utilization() - 1.0).abs() < 1e-9);
    assert!(result.idle_gaps().is_empty());
}

#[test]
fn results_keep_input_order_and_unknown_ids_are_absent() {
    let result = simulate(&procs(&[("b", 0, 5), ("a", 0, 1)])).expect("valid input");
    let ids: Vec<&str> = result.results().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert!(result.result("missing").is_none());
}

#[test]
fn simulation_result_serializes_slices_and_results() {
    let result = simulate(&procs(&[("P1", 0, 2)])).expect("valid input");
    let v: serde_json::Value = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(v["elapsed"], 2);
    assert_eq!(v["slices"][0]["id"], "P1");
    assert_eq!(v["slices"][0]["start"], 0);
    assert_eq!(v["slices"][0]["end"], 2);
    assert_eq!(v["results"][0]["waiting"], 0);
    assert_eq!(v["results"][0]["turnaround"], 2);
}
