//! 文本 Gantt 图
//!
//! 相邻片段之间的空闲区间以 `Idle` 块补齐，时间刻度对齐到每个块的左边框：
//!
//! ```text
//! | P1 | P2 | P4 | P1 | P3 |
//! 0    1    5    10   17   26
//! ```

use crate::sim::{SimulationResult, Ticks};

pub const IDLE_LABEL: &str = "Idle";

/// Gantt 图中的一个块：某个进程的执行片段，或一段空闲。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttSegment {
    pub label: String,
    pub start: Ticks,
    pub end: Ticks,
    pub idle: bool,
}

/// 按时间顺序列出所有块，空闲区间插在相邻片段之间。
pub fn segments(result: &SimulationResult) -> Vec<GanttSegment> {
    let mut out = Vec::with_capacity(result.slices().len());
    let mut prev_end: Option<Ticks> = None;
    for slice in result.slices() {
        if let Some(end) = prev_end {
            if slice.start > end {
                out.push(GanttSegment {
                    label: IDLE_LABEL.to_string(),
                    start: end,
                    end: slice.start,
                    idle: true,
                });
            }
        }
        out.push(GanttSegment {
            label: slice.id.clone(),
            start: slice.start,
            end: slice.end,
            idle: false,
        });
        prev_end = Some(slice.end);
    }
    out
}

pub fn render_gantt(result: &SimulationResult) -> String {
    let segs = segments(result);
    let Some(last) = segs.last() else {
        return String::new();
    };

    let mut bar = String::from("|");
    let mut axis = String::new();
    for seg in &segs {
        let start = seg.start.to_string();
        let width = seg.label.chars().count().max(start.len()) + 2;
        bar.push_str(&format!("{:^width$}|", seg.label));
        axis.push_str(&format!("{:<pad$}", start, pad = width + 1));
    }
    axis.push_str(&last.end.to_string());

    format!("{bar}\n{axis}\n")
}
