//! Value types shared by the search algorithms.

use std::time::Duration;

use crate::moves::chess_move::Move;
use crate::search::board_scoring::NO_MOVES_SCORE;

/// Which side of the minimax tree a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The side to move at the root.
    Maximizer,
    Minimizer,
}

impl Role {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Converts a side-to-move-relative evaluation into the maximizer's view.
    #[inline]
    pub const fn orient(self, side_relative: i32) -> i32 {
        match self {
            Role::Maximizer => side_relative,
            Role::Minimizer => -side_relative,
        }
    }
}

/// Score of a node whose side to move has no legal moves: a loss for that side.
#[inline]
pub const fn no_moves_score(role: Role) -> i32 {
    role.orient(-NO_MOVES_SCORE)
}

/// Alpha-beta bounds, always from the maximizer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    pub const FULL: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };

    /// No further sibling can change the parent's result.
    #[inline]
    pub const fn is_closed(self) -> bool {
        self.beta <= self.alpha
    }

    /// Folds a child score into the bound owned by `role`. Only ever tightens.
    #[inline]
    pub fn tighten(&mut self, role: Role, score: i32) {
        match role {
            Role::Maximizer => self.alpha = self.alpha.max(score),
            Role::Minimizer => self.beta = self.beta.min(score),
        }
    }
}

/// Work counters; merged at every join of the parallel search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every position visited, the root included.
    pub nodes: u64,
    /// Positions scored by the evaluator.
    pub leaves: u64,
    /// Nodes whose remaining siblings were pruned.
    pub cutoffs: u64,
    /// Child tasks handed to the worker pool.
    pub tasks: u64,
}

impl SearchStats {
    #[inline]
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.tasks += other.tasks;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the root has no legal moves.
    pub best_move: Option<Move>,
    /// Score of `best_move` from the root side's point of view.
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Root move selection: strictly better replaces, ties keep the earlier move.
#[derive(Debug, Clone, Copy)]
pub struct RootBest {
    pub best_move: Option<Move>,
    pub score: i32,
}

impl Default for RootBest {
    fn default() -> Self {
        Self {
            best_move: None,
            score: i32::MIN,
        }
    }
}

impl RootBest {
    #[inline]
    pub fn offer(&mut self, mv: Move, score: i32) {
        if self.best_move.is_none() || score > self.score {
            self.best_move = Some(mv);
            self.score = score;
        }
    }
}
