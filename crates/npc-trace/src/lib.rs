//! `npc-trace` — trace output for simulation runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `AgentStateRow`, `TransitionRow` — flat CSV rows       |
//! | [`sink`]     | `TraceSink` trait, `CsvTraceWriter`, `MemoryTraceSink` |
//! | [`observer`] | `TraceObserver` — `SimObserver` → sink bridge          |
//! | [`error`]    | `TraceError`, `TraceResult<T>`                         |

pub mod error;
pub mod observer;
pub mod row;
pub mod sink;


pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{AgentStateRow, TransitionRow};
pub use sink::{CsvTraceWriter, MemoryTraceSink, TraceSink};
