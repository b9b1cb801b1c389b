//! 输入采集
//!
//! 两种来源：命令行的 `id:arrival:burst` 三元组，以及 JSON 工作负载文件。
//! 这里只负责解析，语义校验（重复标识、非正 burst 等）由 `sim::validate` 完成。

use crate::sim::{Process, Ticks};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<WorkloadMeta>,
    pub processes: Vec<Process>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl WorkloadSpec {
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            meta: None,
            processes,
        }
    }

    /// 对文件里的每个标识应用与命令行相同的规范化。
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
            .into_iter()
            .map(|p| Process {
                id: normalize_id(&p.id),
                ..p
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseProcessError {
    #[error("expected `id:arrival:burst`, got `{0}`")]
    Malformed(String),
    #[error("{field} must be an integer, got `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}

/// 纯数字的标识自动加上 `P` 前缀（`3` -> `P3`），其余原样保留（去掉首尾空白）。
pub fn normalize_id(raw: &str) -> String {
    let id = raw.trim();
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        format!("P{id}")
    } else {
        id.to_string()
    }
}

fn parse_ticks(field: &'static str, raw: &str) -> Result<Ticks, ParseProcessError> {
    raw.trim()
        .parse()
        .map_err(|_| ParseProcessError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for Process {
    type Err = ParseProcessError;

    /// 从右往左切分，标识本身可以包含 `:`。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(burst), Some(arrival), Some(id)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseProcessError::Malformed(s.to_string()));
        };
        Ok(Process {
            id: normalize_id(id),
            arrival: parse_ticks("arrival", arrival)?,
            burst: parse_ticks("burst", burst)?,
        })
    }
}
