//! Runtime search configuration, adjustable through UCI `setoption`.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    Minimax,
    ParallelMinimax,
    AlphaBeta,
    ParallelAlphaBeta,
}

/// How sibling tasks above the sequential cutoff share pruning bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSharing {
    /// Each forked child gets the parent's window; bounds fold after the join.
    FoldAtJoin,
    /// Siblings tighten a mutex-guarded window as they finish.
    Eager,
}

impl SearchAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Minimax => "Minimax",
            SearchAlgorithm::ParallelMinimax => "ParallelMinimax",
            SearchAlgorithm::AlphaBeta => "AlphaBeta",
            SearchAlgorithm::ParallelAlphaBeta => "ParallelAlphaBeta",
        }
    }
}

impl BoundSharing {
    pub const fn name(self) -> &'static str {
        match self {
            BoundSharing::FoldAtJoin => "FoldAtJoin",
            BoundSharing::Eager => "Eager",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BoundSharing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(SearchAlgorithm::Minimax),
            "parallelminimax" => Ok(SearchAlgorithm::ParallelMinimax),
            "alphabeta" => Ok(SearchAlgorithm::AlphaBeta),
            "parallelalphabeta" | "parallel" => Ok(SearchAlgorithm::ParallelAlphaBeta),
            _ => Err(invalid_value("Algorithm", s)),
        }
    }
}

impl FromStr for BoundSharing {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "foldatjoin" | "fold" => Ok(BoundSharing::FoldAtJoin),
            "eager" => Ok(BoundSharing::Eager),
            _ => Err(invalid_value("BoundSharing", s)),
        }
    }
}

pub const MAX_SEARCH_DEPTH: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub algorithm: SearchAlgorithm,
    /// Plies below the root. Zero is treated as one.
    pub depth: u8,
    /// Remaining depth at or below which the parallel search stays sequential.
    pub sequential_cutoff: u8,
    /// Worker threads; zero uses rayon's default.
    pub threads: usize,
    pub bound_sharing: BoundSharing,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::ParallelAlphaBeta,
            depth: 4,
            sequential_cutoff: 2,
            threads: 0,
            bound_sharing: BoundSharing::FoldAtJoin,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    #[inline]
    pub const fn effective_depth(&self) -> u8 {
        if self.depth == 0 {
            1
        } else {
            self.depth
        }
    }

    /// Applies one named option. Names are matched case-insensitively.
    pub fn apply_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                self.depth = parse_in_range("Depth", value, 1, MAX_SEARCH_DEPTH)?;
            }
            "threads" => {
                self.threads = value
                    .parse::<usize>()
                    .map_err(|_| invalid_value("Threads", value))?;
            }
            "sequentialcutoff" => {
                self.sequential_cutoff = parse_in_range("SequentialCutoff", value, 0, MAX_SEARCH_DEPTH)?;
            }
            "algorithm" => self.algorithm = value.parse()?,
            "boundsharing" => self.bound_sharing = value.parse()?,
            _ => return Err(ChessError::UnknownOption(name.trim().to_owned())),
        }
        Ok(())
    }
}

fn parse_in_range(name: &str, value: &str, min: u8, max: u8) -> ChessResult<u8> {
    value
        .parse::<u8>()
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| invalid_value(name, value))
}

fn invalid_value(name: &str, value: &str) -> ChessError {
    ChessError::InvalidOptionValue {
        name: name.to_owned(),
        value: value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.algorithm, SearchAlgorithm::ParallelAlphaBeta);
        assert_eq!(config.depth, 4);
        assert_eq!(config.sequential_cutoff, 2);
        assert_eq!(config.threads, 0);
        assert_eq!(config.bound_sharing, BoundSharing::FoldAtJoin);
    }

    #[test]
    fn zero_depth_is_clamped() {
        assert_eq!(SearchConfig::with_depth(0).effective_depth(), 1);
        assert_eq!(SearchConfig::with_depth(3).effective_depth(), 3);
    }

    #[test]
    fn options_apply_case_insensitively() {
        let mut config = SearchConfig::default();
        config.apply_option("depth", "6").expect("valid depth");
        config.apply_option("Threads", "3").expect("valid threads");
        config.apply_option("SequentialCutoff", "1").expect("valid cutoff");
        config.apply_option("Algorithm", "alphabeta").expect("valid algorithm");
        config.apply_option("BoundSharing", "Eager").expect("valid sharing");
        assert_eq!(config.depth, 6);
        assert_eq!(config.threads, 3);
        assert_eq!(config.sequential_cutoff, 1);
        assert_eq!(config.algorithm, SearchAlgorithm::AlphaBeta);
        assert_eq!(config.bound_sharing, BoundSharing::Eager);
    }

    #[test]
    fn bad_options_are_rejected_without_changes() {
        let mut config = SearchConfig::default();
        assert_eq!(
            config.apply_option("Depth", "0"),
            Err(ChessError::InvalidOptionValue {
                name: "Depth".to_owned(),
                value: "0".to_owned()
            })
        );
        assert!(config.apply_option("Algorithm", "mcts").is_err());
        assert_eq!(
            config.apply_option("Hash", "64"),
            Err(ChessError::UnknownOption("Hash".to_owned()))
        );
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn names_round_trip() {
        for algorithm in [
            SearchAlgorithm::Minimax,
            SearchAlgorithm::ParallelMinimax,
            SearchAlgorithm::AlphaBeta,
            SearchAlgorithm::ParallelAlphaBeta,
        ] {
            assert_eq!(algorithm.to_string().parse::<SearchAlgorithm>(), Ok(algorithm));
        }
        for sharing in [BoundSharing::FoldAtJoin, BoundSharing::Eager] {
            assert_eq!(sharing.to_string().parse::<BoundSharing>(), Ok(sharing));
        }
    }
}
