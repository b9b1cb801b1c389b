pub mod report;
pub mod sched;
pub mod sim;
pub mod workload;

pub use sim::{InvalidInputError, Process, SimulationResult, simulate};

#[cfg(test)]
mod test;
