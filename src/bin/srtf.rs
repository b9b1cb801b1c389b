//! SRTF 调度仿真命令行
//!
//! `srtf run P1:0:8 P2:1:4 ...` 打印文本 Gantt 图与统计表。

use clap::{Parser, Subcommand};
use srtf_sim::report::{render_gantt, render_process, render_summary, render_table};
use serde::Serialize;
use srtf_sim::sched::{SelectionPolicy, Srtf};
use srtf_sim::sim::{Engine, InvalidInputError, Process, ProcessResult, SimulationResult};
use srtf_sim::workload::{WorkloadSpec, normalize_id};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "srtf", about = "Shortest Remaining Time First CPU scheduling simulator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a set of processes and print the Gantt chart and per-process table
    Run {
        /// Processes as `id:arrival:burst` (numeric ids become `P<n>`)
        processes: Vec<Process>,

        /// Path to a workload.json with a `processes` list; combined with positional processes
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the simulation result as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Also print turnaround and waiting time of a single process (numeric ids become `P<n>`);
        /// with `--json` it is added as a `process` field
        #[arg(long)]
        process: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    Input(#[from] InvalidInputError),
    #[error("unknown process `{0}`")]
    UnknownProcess(String),
}

/// `--json` 输出：完整结果，外加可选的单进程查询
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a SimulationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    process: Option<&'a ProcessResult>,
}

fn load_workload(path: &Path) -> Result<Vec<Process>, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let workload: WorkloadSpec = serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        schema_version = workload.schema_version,
        processes = workload.processes.len(),
        "loaded workload"
    );
    Ok(workload.into_processes())
}

fn run(args: Args) -> Result<String, CliError> {
    let Command::Run {
        processes: cli_processes,
        file,
        json,
        process,
    } = args.command;

    let mut processes = match &file {
        Some(path) => load_workload(path)?,
        None => Vec::new(),
    };
    processes.extend(cli_processes);

    let engine = Engine::new(Srtf);
    let result = engine.run(&processes)?;
    info!(
        policy = engine.policy().name(),
        processes = processes.len(),
        slices = result.slices().len(),
        elapsed = result.elapsed(),
        "simulation finished"
    );

    let process = match process {
        Some(raw) => {
            let id = normalize_id(&raw);
            match result.result(&id) {
                Some(r) => Some(r),
                None => return Err(CliError::UnknownProcess(id)),
            }
        }
        None => None,
    };

    let out = if json {
        let report = JsonReport {
            result: &result,
            process,
        };
        let mut s = serde_json::to_string_pretty(&report)?;
        s.push('\n');
        s
    } else {
        let mut s = format!(
            "Gantt Chart\n{}\n{}\n{}",
            render_gantt(&result),
            render_table(&result),
            render_summary(&result)
        );
        if let Some(r) = process {
            s.push_str(&render_process(&result, &r.id).unwrap_or_default());
        }
        s
    };
    Ok(out)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
