//! Fixed-depth engine backed by a private rayon pool.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Position;
use crate::search::board_scoring::MaterialScorer;
use crate::search::search_config::{SearchConfig, MAX_SEARCH_DEPTH};
use crate::search::search_root::run_search;
use crate::search::search_types::SearchOutcome;

pub struct FixedDepthEngine {
    config: SearchConfig,
    pool: ThreadPool,
    scorer: MaterialScorer,
}

impl FixedDepthEngine {
    pub fn new(config: SearchConfig) -> ChessResult<Self> {
        Ok(Self {
            pool: build_pool(config.threads)?,
            config,
            scorer: MaterialScorer,
        })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Worker threads in the engine's pool.
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs one search on the engine's pool, optionally at a different depth.
    pub fn search(&self, position: &Position, depth: Option<u8>) -> SearchOutcome {
        let config = SearchConfig {
            depth: depth.unwrap_or(self.config.depth),
            ..self.config
        };
        self.pool.install(|| run_search(position, &config, &self.scorer))
    }
}

fn build_pool(threads: usize) -> ChessResult<ThreadPool> {
    // Zero lets rayon pick its default.
    let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
    debug!(threads = pool.current_num_threads(), "search pool ready");
    Ok(pool)
}

impl Engine for FixedDepthEngine {
    fn name(&self) -> &str {
        "BitFork Chess"
    }

    fn author(&self) -> &str {
        "bitfork_chess developers"
    }

    fn uci_options(&self) -> Vec<String> {
        let defaults = SearchConfig::default();
        vec![
            format!(
                "option name Depth type spin default {} min 1 max {MAX_SEARCH_DEPTH}",
                defaults.depth
            ),
            format!(
                "option name Threads type spin default {} min 0 max 256",
                defaults.threads
            ),
            format!(
                "option name SequentialCutoff type spin default {} min 0 max {MAX_SEARCH_DEPTH}",
                defaults.sequential_cutoff
            ),
            format!(
                "option name Algorithm type combo default {} var Minimax var ParallelMinimax var AlphaBeta var ParallelAlphaBeta",
                defaults.algorithm
            ),
            format!(
                "option name BoundSharing type combo default {} var FoldAtJoin var Eager",
                defaults.bound_sharing
            ),
        ]
    }

    fn new_game(&mut self) {
        debug!("new game");
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        let mut next = self.config;
        next.apply_option(name, value)?;
        if next.threads != self.config.threads {
            self.pool = build_pool(next.threads)?;
        }
        info!(option = name, value, "option set");
        self.config = next;
        Ok(())
    }

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput> {
        let outcome = self.search(position, params.depth);
        let elapsed_ms = outcome.elapsed.as_millis() as u64;
        let nps = outcome.stats.nodes * 1000 / elapsed_ms.max(1);

        let mut info_line = format!(
            "info depth {} score cp {} nodes {} time {} nps {}",
            outcome.depth, outcome.score, outcome.stats.nodes, elapsed_ms, nps
        );
        if let Some(mv) = outcome.best_move {
            info_line.push_str(&format!(" pv {mv}"));
        }

        Ok(EngineOutput {
            best_move: outcome.best_move,
            info_lines: vec![
                info_line,
                format!(
                    "info string algorithm {} cutoff {} sharing {} threads {} tasks {} cutoffs {}",
                    self.config.algorithm,
                    self.config.sequential_cutoff,
                    self.config.bound_sharing,
                    self.threads(),
                    outcome.stats.tasks,
                    outcome.stats.cutoffs
                ),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessError;
    use crate::search::search_config::SearchAlgorithm;

    fn engine() -> FixedDepthEngine {
        FixedDepthEngine::new(SearchConfig {
            depth: 2,
            threads: 2,
            ..SearchConfig::default()
        })
        .expect("pool should build")
    }

    #[test]
    fn pool_honours_thread_option() {
        let mut engine = engine();
        assert_eq!(engine.threads(), 2);
        engine.set_option("Threads", "3").expect("valid thread count");
        assert_eq!(engine.threads(), 3);
        assert_eq!(engine.config().threads, 3);
    }

    #[test]
    fn rejected_option_keeps_config() {
        let mut engine = engine();
        let before = *engine.config();
        assert!(matches!(
            engine.set_option("Algorithm", "random"),
            Err(ChessError::InvalidOptionValue { .. })
        ));
        assert_eq!(*engine.config(), before);
    }

    #[test]
    fn chooses_capture_and_reports_info() {
        let mut engine = engine();
        let position = Position::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("valid FEN");
        let output = engine
            .choose_move(&position, &GoParams::default())
            .expect("search runs");
        assert_eq!(output.best_move.map(|mv| mv.to_string()), Some("f1e2".to_owned()));
        assert!(output.info_lines[0].starts_with("info depth 2 score cp "));
        assert!(output.info_lines[0].ends_with(" pv f1e2"));
    }

    #[test]
    fn go_depth_overrides_config_and_algorithms_agree() {
        let mut engine = engine();
        let position = Position::new_game().make_move(crate::moves::chess_move::Move::normal(12, 28));
        let parallel = engine.search(&position, Some(3));
        assert_eq!(parallel.depth, 3);

        engine.set_option("Algorithm", "Minimax").expect("valid algorithm");
        assert_eq!(engine.config().algorithm, SearchAlgorithm::Minimax);
        let reference = engine.search(&position, Some(3));
        assert_eq!(parallel.best_move, reference.best_move);
        assert_eq!(parallel.score, reference.score);
    }

    #[test]
    fn lists_every_uci_option() {
        let options = engine().uci_options();
        for name in ["Depth", "Threads", "SequentialCutoff", "Algorithm", "BoundSharing"] {
            assert!(options.iter().any(|line| line.contains(&format!("name {name} "))));
        }
    }
}
