use super::{procs, textbook};
use crate::report::{GanttSegment, IDLE_LABEL, render_gantt, segments};
use crate::sim::simulate;

#[test]
fn gantt_renders_blocks_with_aligned_time_axis() {
    let result = simulate(&textbook()).expect("valid input");
    assert_eq!(
        render_gantt(&result),
        "| P1 | P2 | P4 | P1 | P3 |\n0    1    5    10   17   26\n"
    );
}

#[test]
fn gantt_fills_idle_gaps() {
    let result = simulate(&procs(&[("A", 0, 2), ("B", 5, 3)])).expect("valid input");

    assert_eq!(
        segments(&result),
        vec![
            GanttSegment {
                label: "A".to_string(),
                start: 0,
                end: 2,
                idle: false,
            },
            GanttSegment {
                label: IDLE_LABEL.to_string(),
                start: 2,
                end: 5,
                idle: true,
            },
            GanttSegment {
                label: "B".to_string(),
                start: 5,
                end: 8,
                idle: false,
            },
        ]
    );
    assert_eq!(render_gantt(&result), "| A | Idle | B |\n0   2      5   8\n");
}

#[test]
fn gantt_does_not_pad_before_first_arrival() {
    let result = simulate(&procs(&[("P1", 4, 1)])).expect("valid input");
    assert_eq!(render_gantt(&result), "| P1 |\n4    5\n");
}

#[test]
fn gantt_aligns_axis_for_non_ascii_labels() {
    let result = simulate(&procs(&[("进程1", 0, 2), ("B", 2, 1)])).expect("valid input");
    assert_eq!(render_gantt(&result), "| 进程1 | B |\n0     2   3\n");
}
