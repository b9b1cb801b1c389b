//! 调度策略
//!
//! 单位步进循环在每个 tick 调用一次选择策略，从就绪集合中挑出下一 tick 运行的进程。
//! 策略是纯函数：只看就绪集合与当前时钟，不持有可变状态。

use crate::sim::Ticks;

mod srtf;

pub use srtf::Srtf;

/// 就绪集合中一个进程的只读视图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyProcess<'a> {
    /// 在输入中的位置，同时作为标识的全序
    pub index: usize,
    pub id: &'a str,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
}

/// 选择策略抽象
pub trait SelectionPolicy {
    fn name(&self) -> &'static str;

    /// 从非空的 `ready` 中选出一个进程，返回它的 `index`。
    fn select(&self, ready: &[ReadyProcess<'_>], now: Ticks) -> usize;
}
