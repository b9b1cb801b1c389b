//! 仿真输出
//!
//! 时间线（Gantt 片段）、每个进程的统计量，以及由它们派生的汇总指标。
//! 所有结构都在一次仿真结束时一次性构造，之后只读。

use super::process::Ticks;
use serde::{Deserialize, Serialize};

/// 一段连续执行：进程在 `[start, end)` 内独占 CPU。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    pub id: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl ExecutionSlice {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// 单个进程的完成时间、周转时间与等待时间。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub completion: Ticks,
    /// completion - arrival
    pub turnaround: Ticks,
    /// turnaround - burst
    pub waiting: Ticks,
}

impl ProcessResult {
    pub(crate) fn new(id: String, arrival: Ticks, burst: Ticks, completion: Ticks) -> Self {
        let turnaround = completion - arrival;
        Self {
            id,
            arrival,
            burst,
            completion,
            turnaround,
            waiting: turnaround - burst,
        }
    }
}

/// 一次仿真的完整结果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    slices: Vec<ExecutionSlice>,
    /// 按输入顺序排列
    results: Vec<ProcessResult>,
    elapsed: Ticks,
}

impl SimulationResult {
    pub(crate) fn new(slices: Vec<ExecutionSlice>, results: Vec<ProcessResult>) -> Self {
        let elapsed = results.iter().map(|r| r.completion).max().unwrap_or(0);
        Self {
            slices,
            results,
            elapsed,
        }
    }

    /// 按时间排序的执行片段（Gantt 图）
    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    /// 每个进程的结果，顺序与输入一致
    pub fn results(&self) -> &[ProcessResult] {
        &self.results
    }

    /// 按标识查找单个进程的结果
    pub fn result(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// 总耗时：最晚的完成时间
    pub fn elapsed(&self) -> Ticks {
        self.elapsed
    }

    /// 第一个片段的起点，即最早的到达时间
    pub fn start(&self) -> Ticks {
        self.slices.first().map(|s| s.start).unwrap_or(0)
    }

    /// 相邻片段之间 CPU 空闲的区间 `[start, end)`。
    pub fn idle_gaps(&self) -> Vec<(Ticks, Ticks)> {
        self.slices
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| (w[0].end, w[1].start))
            .collect()
    }

    pub fn busy_ticks(&self) -> Ticks {
        self.slices.iter().map(ExecutionSlice::duration).sum()
    }

    /// 从首个到达到全部完成这段时间内的 CPU 利用率（0.0..=1.0）
    pub fn cpu_utilization(&self) -> f64 {
        let span = self.elapsed - self.start();
        if span <= 0 {
            return 0.0;
        }
        self.busy_ticks() as f64 / span as f64
    }

    pub fn average_waiting(&self) -> f64 {
        mean(self.results.iter().map(|r| r.waiting))
    }

    pub fn average_turnaround(&self) -> f64 {
        mean(self.results.iter().map(|r| r.turnaround))
    }
}

fn mean(values: impl Iterator<Item = Ticks>) -> f64 {
    let (sum, n) = values.fold((0i128, 0usize), |(s, n), v| (s + v as i128, n + 1));
    if n == 0 {
        return 0.0;
    }
    sum as f64 / n as f64
}
