//! CLI command implementations for Octacore.

pub(crate) mod batch;
pub(crate) mod info;
pub(crate) mod run;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use octacore::{SafetyTier, WinCondition};

/// Output format for the `run` and `batch` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Win condition selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum WinConditionArg {
    /// First player to eliminate the opponent wins.
    Elimination,
    /// Majority of cells at the turn limit wins.
    TurnLimit,
}

impl From<WinConditionArg> for WinCondition {
    fn from(arg: WinConditionArg) -> Self {
        match arg {
            WinConditionArg::Elimination => WinCondition::Elimination,
            WinConditionArg::TurnLimit => WinCondition::TurnLimitMajority,
        }
    }
}

/// Safety tier selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SafetyArg {
    /// Validate up front, no change tracking.
    Validate,
    /// Snapshot-based undo log.
    LightUndo,
    /// Reversible command log.
    FullRollback,
}

impl From<SafetyArg> for SafetyTier {
    fn from(arg: SafetyArg) -> Self {
        match arg {
            SafetyArg::Validate => SafetyTier::ValidateOnly,
            SafetyArg::LightUndo => SafetyTier::LightUndo,
            SafetyArg::FullRollback => SafetyTier::FullRollback,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<octacore::GameError> for CliError {
    fn from(e: octacore::GameError) -> Self {
        Self::new(e.to_string())
    }
}

/// Resolve an optional seed, deriving one from the clock when absent.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().wrapping_mul(1_000_000_007) ^ u64::from(d.subsec_nanos()))
            .unwrap_or(42)
    })
}
