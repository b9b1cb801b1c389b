mod gantt;
mod result;
mod table;

use crate::sim::Process;

pub(crate) fn procs(list: &[(&str, i64, i64)]) -> Vec<Process> {
    list.iter()
        .map(|&(id, arrival, burst)| Process::new(id, arrival, burst))
        .collect()
}

pub(crate) fn textbook() -> Vec<Process> {
    procs(&[("P1", 0, 8), ("P2", 1, 4), ("P3", 2, 9), ("P4", 3, 5)])
}
