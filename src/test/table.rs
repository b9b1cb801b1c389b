use super::textbook;
use crate::report::{render_process, render_summary, render_table};
use crate::sim::simulate;

#[test]
fn table_lists_processes_in_input_order() {
    let result = simulate(&textbook()).expect("valid input");
    let table = render_table(&result);
    let rows: Vec<Vec<&str>> = table
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();

    assert_eq!(rows[0], ["PID", "Arrival", "Burst", "CT", "TAT", "WT"]);
    assert_eq!(rows[1], ["P1", "0", "8", "17", "17", "9"]);
    assert_eq!(rows[2], ["P2", "1", "4", "5", "4", "0"]);
    assert_eq!(rows[3], ["P3", "2", "9", "26", "24", "15"]);
    assert_eq!(rows[4], ["P4", "3", "5", "10", "7", "2"]);
    assert_eq!(rows.len(), 5);
}

#[test]
fn summary_prints_averages_with_two_decimals() {
    let result = simulate(&textbook()).expect("valid input");
    let summary = render_summary(&result);
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("Average Waiting Time: 6.50 | Average Turnaround Time: 13.00")
    );
    assert_eq!(lines.next(), Some("CPU Utilization: 100.00%"));
}

#[test]
fn single_process_lookup() {
    let result = simulate(&textbook()).expect("valid input");
    assert_eq!(
        render_process(&result, "P2").as_deref(),
        Some("P2 -> Turnaround Time: 4 | Waiting Time: 0\n")
    );
    assert!(render_process(&result, "P7").is_none());
}
