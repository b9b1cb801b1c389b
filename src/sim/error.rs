//! 输入校验错误

use super::engine::MAX_TOTAL_BURST;
use super::process::Ticks;
use thiserror::Error;

/// 仿真开始前的输入校验失败；出错时不会产生任何部分结果。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("no processes to schedule")]
    Empty,
    #[error("process #{index} has an empty identifier")]
    EmptyId { index: usize },
    #[error("duplicate process identifier `{id}`")]
    DuplicateId { id: String },
    #[error("process `{id}` has non-positive burst time {burst}")]
    NonPositiveBurst { id: String, burst: Ticks },
    #[error("process `{id}` has negative arrival time {arrival}")]
    NegativeArrival { id: String, arrival: Ticks },
    #[error("simulation horizon overflows the clock (latest arrival plus total burst)")]
    HorizonOverflow,
    #[error("total burst time {total} exceeds the limit of {} ticks", MAX_TOTAL_BURST)]
    BurstTooLarge { total: Ticks },
}
