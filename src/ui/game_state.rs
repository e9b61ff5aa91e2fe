//! Game state management for the checkers GUI

use crate::rules::{check_outcome_with_blocking, legal_targets, GameOutcome};
use crate::{AIEngine, Board, Move, MoveResult, Pos, SearchStats, Side, DEFAULT_DEPTH};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Deepest search the GUI lets the user pick
pub const MAX_AI_DEPTH: i8 = 8;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player (red) vs AI (blue)
    PvE,
    /// Player vs Player (hotseat)
    PvP {
        show_suggestions: bool,
    },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state.
///
/// Holds the live board plus everything the front-end needs on top of it:
/// the current selection, move history and the background search.
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub selected: Option<Pos>,
    pub game_over: Option<GameOutcome>,
    pub last_move: Option<Move>,
    pub move_history: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    /// Search totals for this game
    pub session_stats: SearchStats,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    // AI engine configuration
    ai_depth: i8,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            selected: None,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            session_stats: SearchStats::new(),
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            ai_depth: DEFAULT_DEPTH,
        }
    }

    /// Start over with the same mode and depth
    pub fn reset(&mut self) {
        let depth = self.ai_depth;
        *self = Self::new(self.mode);
        self.ai_depth = depth;
    }

    pub fn current_turn(&self) -> Side {
        self.board.turn()
    }

    pub fn ai_depth(&self) -> i8 {
        self.ai_depth
    }

    pub fn set_ai_depth(&mut self, depth: i8) {
        self.ai_depth = depth.clamp(1, MAX_AI_DEPTH);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE => self.current_turn() == Side::Player,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE => self.current_turn() == Side::Ai,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Squares the selected piece can move to
    pub fn target_squares(&self) -> Vec<Pos> {
        self.selected
            .map(|from| legal_targets(&self.board, from))
            .unwrap_or_default()
    }

    /// Handle a click on a board square.
    ///
    /// Clicking one of the mover's pieces selects it (clicking it again
    /// clears the selection); with a piece selected, clicking elsewhere
    /// tries to move there.
    pub fn click(&mut self, pos: Pos) -> Result<(), String> {
        self.check_can_play()?;

        let owns_piece = self.board.get(pos).side() == Some(self.current_turn());
        match self.selected {
            Some(from) if from == pos => {
                self.selected = None;
                Ok(())
            }
            _ if owns_piece => {
                self.selected = Some(pos);
                self.message = None;
                Ok(())
            }
            Some(from) => self.try_move(Move::new(from, pos)),
            None => Err("Select one of your pieces first".to_string()),
        }
    }

    /// Attempt a human move
    pub fn try_move(&mut self, mv: Move) -> Result<(), String> {
        self.check_can_play()?;

        if self.board.get(mv.from).side() != Some(self.current_turn()) {
            return Err("That is not your piece".to_string());
        }

        if !self.board.is_legal(mv) {
            return Err(format!("Illegal move {mv}"));
        }

        self.execute_move(mv);
        Ok(())
    }

    fn check_can_play(&self) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        if !self.board.make_move(mv) {
            self.message = Some(format!("Rejected move {mv}"));
            return;
        }

        // Record move
        self.move_history.push(mv);
        self.last_move = Some(mv);
        self.selected = None;
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();
        self.game_over = check_outcome_with_blocking(&self.board);
        if self.game_over.is_none() {
            self.move_timer.start();
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let side = self.current_turn();
        let depth = self.ai_depth;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_depth(depth);
            let result = engine.get_move_with_stats(&board, side);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    eprintln!("warn: AI worker exited without a result");
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            self.session_stats.merge(&move_result.stats);
            self.last_ai_result = Some(move_result.clone());

            if let Some(mv) = move_result.best_move {
                self.execute_move(mv);
            } else {
                self.message = Some("AI could not find a move".to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a move for the side to move (PvP hint)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::with_depth(self.ai_depth);
        let result = engine.get_move_with_stats(&self.board, self.current_turn());

        self.suggested_move = result.best_move;
        self.session_stats.merge(&result.stats);
        self.last_ai_result = Some(result);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI) so the human is to move again
        let undo_count = match self.mode {
            GameMode::PvE if self.current_turn() == Side::Player && self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Board::new();
        self.move_history.clear();
        self.game_over = None;
        self.last_move = None;
        self.selected = None;
        self.suggested_move = None;
        self.message = None;

        for mv in moves {
            if self.board.make_move(mv) {
                self.move_history.push(mv);
                self.last_move = Some(mv);
            }
        }
        self.game_over = check_outcome_with_blocking(&self.board);

        self.move_timer.start();
    }
}
