//! 文本呈现
//!
//! 把 `SimulationResult` 渲染成终端可读的 Gantt 图和统计表。只读取结果，不做任何计算之外的副作用。

mod gantt;
mod table;

pub use gantt::{GanttSegment, IDLE_LABEL, render_gantt, segments};
pub use table::{render_process, render_summary, render_table};
