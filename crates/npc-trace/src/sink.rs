//! Trace sinks — where rows go.

use std::fs::File;
use std::path::Path;

use crate::row::{AgentStateRow, TransitionRow};
use crate::TraceResult;

/// Destination for trace rows.
///
/// Implementations must tolerate interleaved state and transition writes;
/// ordering within each stream follows call order.
pub trait TraceSink {
    fn record_state(&mut self, row: &AgentStateRow) -> TraceResult<()>;
    fn record_transition(&mut self, row: &TransitionRow) -> TraceResult<()>;

    /// Push buffered rows to durable storage.
    fn flush(&mut self) -> TraceResult<()>;
}

/// Writes two CSV files into a directory: `agent_states.csv` and
/// `transitions.csv`, each with a header row.
pub struct CsvTraceWriter {
    states:      csv::Writer<File>,
    transitions: csv::Writer<File>,
}

impl CsvTraceWriter {
    pub const STATES_FILE: &'static str = "agent_states.csv";
    pub const TRANSITIONS_FILE: &'static str = "transitions.csv";

    /// Create (or truncate) both files under `dir`.
    pub fn create(dir: &Path) -> TraceResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            states:      csv::Writer::from_path(dir.join(Self::STATES_FILE))?,
            transitions: csv::Writer::from_path(dir.join(Self::TRANSITIONS_FILE))?,
        })
    }
}

impl TraceSink for CsvTraceWriter {
    fn record_state(&mut self, row: &AgentStateRow) -> TraceResult<()> {
        self.states.serialize(row)?;
        Ok(())
    }

    fn record_transition(&mut self, row: &TransitionRow) -> TraceResult<()> {
        self.transitions.serialize(row)?;
        Ok(())
    }

    fn flush(&mut self) -> TraceResult<()> {
        self.states.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}

/// Sink that buffers rows in memory, for tests and ad-hoc inspection.
#[derive(Default)]
pub struct MemoryTraceSink {
    pub states:      Vec<AgentStateRow>,
    pub transitions: Vec<TransitionRow>,
}

impl MemoryTraceSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for MemoryTraceSink {
    fn record_state(&mut self, row: &AgentStateRow) -> TraceResult<()> {
        self.states.push(row.clone());
        Ok(())
    }

    fn record_transition(&mut self, row: &TransitionRow) -> TraceResult<()> {
        self.transitions.push(row.clone());
        Ok(())
    }

    fn flush(&mut self) -> TraceResult<()> {
        Ok(())
    }
}
