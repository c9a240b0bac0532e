//! Out-of-process recommendation scorer

mod process;

pub use process::ProcessScorer;
