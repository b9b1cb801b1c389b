//! 进程与时间类型
//!
//! 定义仿真输入（进程）以及离散时钟的时间单位。

use serde::{Deserialize, Serialize};

/// 离散仿真时间（tick）。使用有符号整数，以便在校验阶段识别负的到达时间。
pub type Ticks = i64;

/// 待调度的进程：标识、到达时间、所需 CPU 时间（burst）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
}

impl Process {
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }
}

/// 单个进程在一次仿真中的生命周期状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    NotArrived,
    Ready,
    Running,
    Completed,
}
