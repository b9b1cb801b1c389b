//! 单位步进仿真引擎
//!
//! 每个 tick 重新计算就绪集合并调用选择策略，因此任意时刻到达的更短进程都能在到达的那个
//! tick 抢占当前进程。没有进程就绪时，时钟直接跳到下一次到达，空闲区间不产生片段。

use super::error::InvalidInputError;
use super::process::{Process, ProcessState, Ticks};
use super::result::{ExecutionSlice, ProcessResult, SimulationResult};
use crate::sched::{ReadyProcess, SelectionPolicy, Srtf};
use std::collections::HashSet;
use tracing::{debug, trace};

/// 所有进程 burst 之和的上限。引擎逐 tick 推进，运行时间与总 burst 成正比。
pub const MAX_TOTAL_BURST: Ticks = 10_000_000;

/// 用默认策略（SRTF）运行一次仿真。
pub fn simulate(processes: &[Process]) -> Result<SimulationResult, InvalidInputError> {
    Engine::new(Srtf).run(processes)
}

/// 仿真引擎：只持有选择策略，每次 `run` 都从零开始，不在调用之间共享状态。
#[derive(Debug, Clone, Default)]
pub struct Engine<P: SelectionPolicy> {
    policy: P,
}

impl<P: SelectionPolicy> Engine<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// 校验输入并运行到所有进程完成。
    #[tracing::instrument(skip(self, processes), fields(policy = self.policy.name(), processes = processes.len()))]
    pub fn run(&self, processes: &[Process]) -> Result<SimulationResult, InvalidInputError> {
        validate(processes)?;

        let n = processes.len();
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst).collect();
        let mut states = vec![ProcessState::NotArrived; n];
        let mut completion: Vec<Ticks> = vec![0; n];
        let mut slices = Vec::new();
        // 当前未闭合的片段：(进程下标, 起始时间)
        let mut open: Option<(usize, Ticks)> = None;
        let mut completed = 0;
        let mut now = processes.iter().map(|p| p.arrival).min().unwrap_or(0);

        debug!(start = now, "开始仿真");

        while completed < n {
            for (i, p) in processes.iter().enumerate() {
                if states[i] == ProcessState::NotArrived && p.arrival <= now {
                    states[i] = ProcessState::Ready;
                    trace!(now, id = %p.id, "进程到达");
                }
            }

            let ready: Vec<ReadyProcess<'_>> = processes
                .iter()
                .enumerate()
                .filter(|(i, _)| matches!(states[*i], ProcessState::Ready | ProcessState::Running))
                .map(|(i, p)| ReadyProcess {
                    index: i,
                    id: &p.id,
                    arrival: p.arrival,
                    burst: p.burst,
                    remaining: remaining[i],
                })
                .collect();

            if ready.is_empty() {
                close_slice(&mut slices, &mut open, processes, now);
                let next = processes
                    .iter()
                    .zip(&states)
                    .filter(|(_, s)| **s == ProcessState::NotArrived)
                    .map(|(p, _)| p.arrival)
                    .min()
                    .expect("unfinished process must be waiting to arrive");
                debug!(from = now, to = next, "CPU 空闲，跳到下一次到达");
                now = next;
                continue;
            }

            let sel = self.policy.select(&ready, now);
            debug_assert!(ready.iter().any(|p| p.index == sel), "policy picked a process that is not ready");

            match open {
                Some((cur, _)) if cur == sel => {}
                Some((cur, _)) => {
                    if states[cur] == ProcessState::Running {
                        states[cur] = ProcessState::Ready;
                        debug!(
                            now,
                            preempted = %processes[cur].id,
                            by = %processes[sel].id,
                            remaining = remaining[cur],
                            "抢占"
                        );
                    }
                    close_slice(&mut slices, &mut open, processes, now);
                    open = Some((sel, now));
                }
                None => open = Some((sel, now)),
            }

            states[sel] = ProcessState::Running;
            trace!(now, id = %processes[sel].id, remaining = remaining[sel], "运行一个 tick");
            remaining[sel] -= 1;
            now += 1;

            if remaining[sel] == 0 {
                states[sel] = ProcessState::Completed;
                completion[sel] = now;
                completed += 1;
                debug!(now, id = %processes[sel].id, "进程完成");
            }
        }
        close_slice(&mut slices, &mut open, processes, now);

        let results = processes
            .iter()
            .zip(completion)
            .map(|(p, ct)| ProcessResult::new(p.id.clone(), p.arrival, p.burst, ct))
            .collect();

        debug!(end = now, slices = slices.len(), "仿真完成");
        Ok(SimulationResult::new(slices, results))
    }
}

fn close_slice(
    slices: &mut Vec<ExecutionSlice>,
    open: &mut Option<(usize, Ticks)>,
    processes: &[Process],
    now: Ticks,
) {
    if let Some((i, start)) = open.take() {
        slices.push(ExecutionSlice {
            id: processes[i].id.clone(),
            start,
            end: now,
        });
    }
}

/// 仿真前的输入校验；任何一项失败都不会开始仿真。
pub fn validate(processes: &[Process]) -> Result<(), InvalidInputError> {
    if processes.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    let mut total_burst: Ticks = 0;
    let mut latest_arrival: Ticks = 0;
    for (index, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            return Err(InvalidInputError::EmptyId { index });
        }
        if !seen.insert(p.id.as_str()) {
            return Err(InvalidInputError::DuplicateId { id: p.id.clone() });
        }
        if p.burst <= 0 {
            return Err(InvalidInputError::NonPositiveBurst {
                id: p.id.clone(),
                burst: p.burst,
            });
        }
        if p.arrival < 0 {
            return Err(InvalidInputError::NegativeArrival {
                id: p.id.clone(),
                arrival: p.arrival,
            });
        }
        total_burst = total_burst
            .checked_add(p.burst)
            .ok_or(InvalidInputError::HorizonOverflow)?;
        latest_arrival = latest_arrival.max(p.arrival);
    }
    if total_burst > MAX_TOTAL_BURST {
        return Err(InvalidInputError::BurstTooLarge { total: total_burst });
    }
    latest_arrival
        .checked_add(total_burst)
        .ok_or(InvalidInputError::HorizonOverflow)?;
    Ok(())
}
