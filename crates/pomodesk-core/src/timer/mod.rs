mod engine;
mod phase;

pub use engine::{EngineState, PomodoroEngine};
pub use phase::{PomodoroPhase, LONG_BREAK_INTERVAL};
