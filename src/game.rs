//! Game setup and turn orchestration.
//!
//! A game moves through three phases:
//! [`GameSetup`] collects the board size and players from the console,
//! [`GameInProgress`] runs turns until someone wins or the board fills, and
//! the finished game is summarised by an [`Outcome`].

use crate::config::GameConfig;
use crate::console::{Console, ConsoleError, INVALID_NUMBER};
use crate::players::{BotPlayer, HumanPlayer, Player};
use crate::rng::GameRng;
use nxn_board::{Board, Move, Piece};
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// Shown when a placement is rejected by the board.
pub const INVALID_MOVE: &str = "Invalid Move! Try again.";

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("Congratulations! {name} has won!")]
    Winner {
        /// Winner's name.
        name: String,
        /// Winner's piece.
        piece: Piece,
    },
    /// The board filled with no completed line.
    #[display("It's a Draw!")]
    Draw,
}

/// Result of a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// The game goes on with the next player.
    Continue,
    /// The game is over.
    Finished(Outcome),
}

/// A successfully placed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedMove {
    /// Piece that was placed.
    pub piece: Piece,
    /// Where it was placed.
    pub position: Move,
}

/// Setup phase: reads the game parameters from the console.
#[derive(Debug, Clone)]
pub struct GameSetup {
    config: GameConfig,
    size: Option<usize>,
}

impl GameSetup {
    /// Creates a setup using `config` for non-interactive settings.
    pub fn new(config: GameConfig) -> Self {
        Self { config, size: None }
    }

    /// Pre-selects the board size so it is not asked for.
    ///
    /// Sizes the config does not accept are ignored and asked for as usual.
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        self.size = size;
        self
    }

    /// Runs the setup dialogue and starts the game.
    ///
    /// `rng` is moved into the bot when the opponent is a bot.
    #[instrument(skip_all)]
    pub fn run(
        self,
        console: &mut Console<'_>,
        rng: GameRng,
    ) -> Result<GameInProgress, ConsoleError> {
        let size = match self.size {
            Some(n) if i64::try_from(n).is_ok_and(|n| self.config.accepts_size(n)) => n,
            preset => {
                if let Some(n) = preset {
                    warn!(size = n, "Ignoring unsupported preset board size");
                }
                self.read_size(console)?
            }
        };

        console.write("Enter Player 1 Name: ")?;
        let first_name = console.read_token()?;

        console.write(&format!("Choose Symbol for {} (X/O): ", first_name))?;
        let first_piece = Piece::from_choice(console.read_char()?);
        let second_piece = first_piece.opponent();

        let first: Box<dyn Player> = Box::new(HumanPlayer::new(first_name, first_piece));

        let mode = console.prompt_int("Select Opponent: 1. Human  2. AI Bot: ")?;
        let second: Box<dyn Player> = if mode == 1 {
            console.write("Enter Player 2 Name: ")?;
            Box::new(HumanPlayer::new(console.read_token()?, second_piece))
        } else {
            info!(seed = rng.seed(), "Opponent is a bot");
            Box::new(BotPlayer::new(
                self.config.bot_name().clone(),
                second_piece,
                rng,
            ))
        };

        info!(
            size,
            first = first.name(),
            second = second.name(),
            "Game set up"
        );
        Ok(GameInProgress::new(Board::new(size), first, second))
    }

    fn read_size(&self, console: &mut Console<'_>) -> Result<usize, ConsoleError> {
        loop {
            let n = console.prompt_int("Enter Board Size (N): ")?;
            if self.config.accepts_size(n) {
                // accepts_size guarantees 1..=max_board_size.
                return Ok(n as usize);
            }
            console.write_line(&format!(
                "Board size must be between 1 and {}.",
                self.config.max_board_size()
            ))?;
        }
    }
}

/// Playing phase: a board and a two-player turn queue.
pub struct GameInProgress {
    board: Board,
    /// Front is the player to move.
    players: VecDeque<Box<dyn Player>>,
    history: Vec<PlacedMove>,
}

impl GameInProgress {
    /// Starts a game on `board` with `first` to move.
    pub fn new(board: Board, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            board,
            players: VecDeque::from([first, second]),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &dyn Player {
        self.players[0].as_ref()
    }

    /// Returns every placed move in order.
    pub fn history(&self) -> &[PlacedMove] {
        &self.history
    }

    /// Plays one turn: asks the current player until a placement succeeds,
    /// then checks for a win or a full board before passing the turn on.
    #[instrument(skip_all, fields(turn = self.history.len() + 1))]
    pub fn play_turn(&mut self, console: &mut Console<'_>) -> Result<TurnResult, ConsoleError> {
        console.write(&self.board.render())?;

        let player = &mut self.players[0];
        let piece = player.piece();
        let mv = loop {
            let mv = player.choose_move(&self.board, console)?;
            match self.board.place(mv.row, mv.col, piece) {
                Ok(()) => break mv,
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                    console.write_line(INVALID_MOVE)?;
                }
            }
        };
        self.history.push(PlacedMove { piece, position: mv });
        info!(player = player.name(), %mv, "Move placed");

        if self.board.check_win(mv.row, mv.col, piece) {
            let outcome = Outcome::Winner {
                name: player.name().to_string(),
                piece,
            };
            return self.finish(console, outcome);
        }

        if self.board.is_full() {
            return self.finish(console, Outcome::Draw);
        }

        self.players.rotate_left(1);
        Ok(TurnResult::Continue)
    }

    fn finish(
        &self,
        console: &mut Console<'_>,
        outcome: Outcome,
    ) -> Result<TurnResult, ConsoleError> {
        console.write(&self.board.render())?;
        console.write_line(&outcome.to_string())?;
        info!(%outcome, moves = self.history.len(), "Game finished");
        Ok(TurnResult::Finished(outcome))
    }

    /// Plays turns until the game ends.
    pub fn play(mut self, console: &mut Console<'_>) -> Result<Outcome, ConsoleError> {
        loop {
            if let TurnResult::Finished(outcome) = self.play_turn(console)? {
                return Ok(outcome);
            }
        }
    }
}

impl std::fmt::Debug for GameInProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players: Vec<_> = self.players.iter().map(|p| (p.name(), p.piece())).collect();
        f.debug_struct("GameInProgress")
            .field("board", &self.board)
            .field("players", &players)
            .field("history", &self.history)
            .finish()
    }
}
