//! Bridge from simulation callbacks to a trace sink.

use npc_behavior::Transition;
use npc_core::{AgentId, Tick};
use npc_sim::{AgentSample, SimObserver};

use crate::row::{AgentStateRow, TransitionRow};
use crate::sink::TraceSink;
use crate::{TraceError, TraceResult};

/// A [`SimObserver`] that streams snapshots and transitions into a sink.
///
/// Observer hooks cannot return errors, so the first write failure is
/// stored and all later writes are skipped; [`finish`][Self::finish]
/// surfaces it.  A failed trace never aborts the simulation itself.
pub struct TraceObserver<S: TraceSink> {
    sink:  S,
    error: Option<TraceError>,
}

impl<S: TraceSink> TraceObserver<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, error: None }
    }

    /// Flush the sink and report the first error seen during the run, if
    /// any.  Returns the sink for inspection.
    pub fn finish(mut self) -> TraceResult<S> {
        match self.error.take() {
            Some(err) => Err(err),
            None => {
                self.sink.flush()?;
                Ok(self.sink)
            }
        }
    }

    fn record(&mut self, attempt: impl FnOnce(&mut S) -> TraceResult<()>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = attempt(&mut self.sink) {
            tracing::error!(error = %err, "trace write failed, dropping further rows");
            self.error = Some(err);
        }
    }
}

impl<S: TraceSink> SimObserver for TraceObserver<S> {
    fn on_transition(&mut self, tick: Tick, agent: AgentId, transition: Transition) {
        let row = TransitionRow::new(tick, agent, transition);
        self.record(|sink| sink.record_transition(&row));
    }

    fn on_snapshot(&mut self, tick: Tick, samples: &[AgentSample]) {
        for sample in samples {
            let row = AgentStateRow::from_sample(tick, sample);
            self.record(|sink| sink.record_state(&row));
        }
    }

    fn on_sim_end(&mut self, _tick: Tick) {
        self.record(|sink| sink.flush());
    }
}
