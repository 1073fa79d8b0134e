//! Command implementations

pub mod evaluate;
pub mod inspect;
pub mod replay;
pub mod simulate;
pub mod take;

pub use evaluate::{evaluate_answers, parse_answers};
pub use inspect::{BandSummary, SampleSummary, summarize};
pub use replay::{ReplayResult, replay_record};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use take::run_take;
