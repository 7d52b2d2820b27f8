//! Transactional safety strategies for move application.
//!
//! Every cell mutation the engine performs is routed through the active
//! [`SafetyStrategy`] as a [`CellCommand`]. The three tiers share the
//! command's `apply` path, so a successful move produces bit-identical
//! board state no matter which tier is active; they differ only in what
//! they remember and therefore in what they can restore after a failure.

use std::fmt;

use crate::game::{CellId, CellState, Direction, GameBoard, SafetyTier};

/// A single reversible mutation of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCommand {
    /// Assign ownership of a cell, remembering the prior state.
    Capture {
        /// Target cell.
        id: CellId,
        /// State before the capture.
        prior: CellState,
        /// State after the capture.
        state: CellState,
    },
    /// Add charge to a cell.
    AddCharge {
        /// Target cell.
        id: CellId,
        /// Charge added.
        amount: u32,
    },
    /// Zero a cell's charge, remembering the prior amount.
    Discharge {
        /// Target cell.
        id: CellId,
        /// Charge before the discharge.
        prior: u32,
    },
}

impl CellCommand {
    /// Apply this mutation to the board.
    pub fn apply(self, board: &mut dyn GameBoard) {
        match self {
            CellCommand::Capture { id, state, .. } => board.cell_mut(id).state = state,
            CellCommand::AddCharge { id, amount } => board.cell_mut(id).charge += amount,
            CellCommand::Discharge { id, .. } => board.cell_mut(id).charge = 0,
        }
    }

    /// Reverse this mutation exactly.
    pub fn undo(self, board: &mut dyn GameBoard) {
        match self {
            CellCommand::Capture { id, prior, .. } => board.cell_mut(id).state = prior,
            CellCommand::AddCharge { id, amount } => board.cell_mut(id).charge -= amount,
            CellCommand::Discharge { id, prior } => board.cell_mut(id).charge = prior,
        }
    }
}

/// Strategy contract shared by the three safety tiers.
///
/// The engine calls [`begin`](SafetyStrategy::begin) at the start of each
/// move, routes every mutation through [`apply`](SafetyStrategy::apply),
/// and calls [`rollback`](SafetyStrategy::rollback) if the move fails.
pub trait SafetyStrategy: fmt::Debug + Send + Sync {
    /// The tier this strategy implements.
    fn tier(&self) -> SafetyTier;

    /// Discard tracking state from any previous move.
    fn begin(&mut self);

    /// Apply one mutation, recording whatever the tier needs for undo.
    fn apply(&mut self, board: &mut dyn GameBoard, command: CellCommand);

    /// Undo everything applied since the last `begin`, as far as the tier
    /// guarantees.
    fn rollback(&mut self, board: &mut dyn GameBoard);
}

/// Build the strategy object for a tier.
#[must_use]
pub fn strategy_for(tier: SafetyTier) -> Box<dyn SafetyStrategy> {
    match tier {
        SafetyTier::ValidateOnly => Box::new(ValidateOnly),
        SafetyTier::LightUndo => Box::new(LightUndo::default()),
        SafetyTier::FullRollback => Box::new(FullRollback::default()),
    }
}

/// No tracking. Rollback is a no-op; after a mid-move failure the board
/// state is undefined. This is the cheapest tier and the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOnly;

impl SafetyStrategy for ValidateOnly {
    fn tier(&self) -> SafetyTier {
        SafetyTier::ValidateOnly
    }

    fn begin(&mut self) {}

    fn apply(&mut self, board: &mut dyn GameBoard, command: CellCommand) {
        command.apply(board);
    }

    fn rollback(&mut self, _board: &mut dyn GameBoard) {}
}

/// Full pre-mutation state of one cell, recorded by [`LightUndo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSnapshot {
    id: CellId,
    state: CellState,
    charge: u32,
    orientation: Direction,
}

impl CellSnapshot {
    fn of(board: &dyn GameBoard, id: CellId) -> Self {
        let cell = board.cell(id);
        Self {
            id,
            state: cell.state,
            charge: cell.charge,
            orientation: cell.orientation,
        }
    }

    fn restore(self, board: &mut dyn GameBoard) {
        let cell = board.cell_mut(self.id);
        cell.state = self.state;
        cell.charge = self.charge;
        cell.orientation = self.orientation;
    }
}

/// Snapshot-based undo log.
///
/// Before each mutation the touched cell's state, charge, and orientation
/// are appended to an ordered log; on failure the log is replayed in
/// strict reverse order, leaving the board bit-identical to its pre-move
/// state.
#[derive(Debug, Clone, Default)]
pub struct LightUndo {
    log: Vec<CellSnapshot>,
}

impl SafetyStrategy for LightUndo {
    fn tier(&self) -> SafetyTier {
        SafetyTier::LightUndo
    }

    fn begin(&mut self) {
        self.log.clear();
    }

    fn apply(&mut self, board: &mut dyn GameBoard, command: CellCommand) {
        let id = match command {
            CellCommand::Capture { id, .. }
            | CellCommand::AddCharge { id, .. }
            | CellCommand::Discharge { id, .. } => id,
        };
        self.log.push(CellSnapshot::of(board, id));
        command.apply(board);
    }

    fn rollback(&mut self, board: &mut dyn GameBoard) {
        while let Some(snapshot) = self.log.pop() {
            snapshot.restore(board);
        }
    }
}

/// Command-log rollback.
///
/// Every mutation is kept as an executed command; on failure exactly the
/// applied prefix is undone in reverse. Equivalent guarantee to
/// [`LightUndo`], with a log that is also usable for history or replay.
#[derive(Debug, Clone, Default)]
pub struct FullRollback {
    log: Vec<CellCommand>,
    applied: usize,
}

impl FullRollback {
    /// Commands executed since the last `begin`, in application order.
    #[must_use]
    pub fn commands(&self) -> &[CellCommand] {
        &self.log[..self.applied]
    }
}

impl SafetyStrategy for FullRollback {
    fn tier(&self) -> SafetyTier {
        SafetyTier::FullRollback
    }

    fn begin(&mut self) {
        self.log.clear();
        self.applied = 0;
    }

    fn apply(&mut self, board: &mut dyn GameBoard, command: CellCommand) {
        self.log.push(command);
        command.apply(board);
        self.applied += 1;
    }

    fn rollback(&mut self, board: &mut dyn GameBoard) {
        while self.applied > 0 {
            self.applied -= 1;
            self.log[self.applied].undo(board);
        }
        self.log.clear();
    }
}
