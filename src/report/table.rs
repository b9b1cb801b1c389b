//! 每个进程的统计表与平均值

use crate::sim::SimulationResult;

const HEADERS: [&str; 6] = ["PID", "Arrival", "Burst", "CT", "TAT", "WT"];

/// 表格按输入顺序列出每个进程：到达、burst、完成（CT）、周转（TAT）、等待（WT）。
pub fn render_table(result: &SimulationResult) -> String {
    let id_w = result
        .results()
        .iter()
        .map(|r| r.id.len())
        .max()
        .unwrap_or(0)
        .max(HEADERS[0].len());

    let mut out = format!(
        "{:<id_w$}  {:>7}  {:>5}  {:>4}  {:>4}  {:>4}\n",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3], HEADERS[4], HEADERS[5]
    );
    for r in result.results() {
        out.push_str(&format!(
            "{:<id_w$}  {:>7}  {:>5}  {:>4}  {:>4}  {:>4}\n",
            r.id, r.arrival, r.burst, r.completion, r.turnaround, r.waiting
        ));
    }
    out
}

pub fn render_summary(result: &SimulationResult) -> String {
    format!(
        "Average Waiting Time: {:.2} | Average Turnaround Time: {:.2}\nCPU Utilization: {:.2}%\n",
        result.average_waiting(),
        result.average_turnaround(),
        result.cpu_utilization() * 100.0
    )
}

/// 单个进程的周转与等待时间；标识不存在时返回 `None`。
pub fn render_process(result: &SimulationResult, id: &str) -> Option<String> {
    let r = result.result(id)?;
    Some(format!(
        "{} -> Turnaround Time: {} | Waiting Time: {}\n",
        r.id, r.turnaround, r.waiting
    ))
}
