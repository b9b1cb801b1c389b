//! SRTF（Shortest Remaining Time First）
//!
//! 剩余时间最短者优先；相同时比较到达时间，再比较输入顺序。

use super::{ReadyProcess, SelectionPolicy};
use crate::sim::Ticks;

#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SelectionPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn select(&self, ready: &[ReadyProcess<'_>], _now: Ticks) -> usize {
        ready
            .iter()
            .min_by_key(|p| (p.remaining, p.arrival, p.index))
            .map(|p| p.index)
            .expect("ready set is never empty")
    }
}
