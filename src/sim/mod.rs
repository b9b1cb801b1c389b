//! 仿真核心模块
//!
//! 此模块包含单 CPU 调度仿真的核心组件：进程输入、单位步进引擎、输入校验与仿真结果。

// 子模块声明
mod engine;
mod error;
mod process;
mod result;

// 重新导出公共接口
pub use engine::{Engine, MAX_TOTAL_BURST, simulate, validate};
pub use error::InvalidInputError;
pub use process::{Process, ProcessState, Ticks};
pub use result::{ExecutionSlice, ProcessResult, SimulationResult};
