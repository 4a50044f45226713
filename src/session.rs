//! Turn controller: alternates the two players over one board, reports the
//! result, and drives the play-again loop.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::console::Console;
use crate::error::GameError;
use crate::game::{GameState, GameStatus, Mark, MoveError};
use crate::player::{HumanAgent, Player, RandomAgent};

/// One game: the board state plus both seats, `X` first.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    players: [Player; 2],
}

impl GameSession {
    /// Seats are looked up by mark; players are reordered so `X` sits first.
    pub fn new(mut players: [Player; 2]) -> Self {
        players.sort_by_key(|player| player.mark.index());
        GameSession {
            state: GameState::new(),
            players,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[mark.index()]
    }

    /// Play a single turn for the player to move and return the status after it.
    /// A finished game is returned as is without asking anyone for a move.
    pub fn play_turn(&mut self, console: &mut dyn Console) -> Result<GameStatus, GameError> {
        if self.state.is_terminal() {
            return Ok(self.state.status());
        }

        let mark = self.state.current_mark();
        let player = &mut self.players[mark.index()];

        console.clear()?;
        console.show_board(self.state.board())?;
        console.show_message(&format!("\n{}, choose a column from 1-7:", player.name))?;

        let status = loop {
            let column = player.agent.select_column(&self.state, console)?;
            match self.state.apply_move(column) {
                Ok(status) => {
                    debug!(player = %player.name, ?mark, column, agent = player.agent.label(), "disk dropped");
                    break status;
                }
                Err(MoveError::GameOver) => return Ok(self.state.status()),
                Err(err) => {
                    debug!(player = %player.name, %err, "move rejected");
                    console.show_message("Invalid or full column. Pick again.")?;
                }
            }
        };

        // Show the final position before announcing anything
        console.clear()?;
        console.show_board(self.state.board())?;

        match status {
            GameStatus::Won(winner) => {
                let name = &self.players[winner.index()].name;
                console.show_message(&format!("\nWinner is {name}!\n"))?;
            }
            GameStatus::Draw => console.show_message("\nDraw!\n")?,
            GameStatus::InProgress => {}
        }

        Ok(status)
    }

    /// Play turns until the game is won or drawn.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<GameStatus, GameError> {
        loop {
            let status = self.play_turn(console)?;
            if status.is_terminal() {
                info!(?status, moves = self.state.board().disk_count(), "game finished");
                return Ok(status);
            }
        }
    }
}

/// Results over every game played in one run of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub games: usize,
    /// Wins by mark, `X` first.
    pub wins: [usize; 2],
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(mark) => self.wins[mark.index()] += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }
}

/// Ask who is playing. With one human, the computer takes `O`.
/// `game_index` varies a configured seed so replays differ.
pub fn setup_players(
    console: &mut dyn Console,
    config: &AppConfig,
    game_index: u64,
) -> Result<[Player; 2], GameError> {
    let count = match config.players.count {
        Some(count) => count,
        None => console.read_player_count()?,
    };

    let [default_1, default_2] = &config.players.default_names;
    let name_1 = console.read_name("Enter player 1 name: ", default_1)?;
    let first = Player::new(name_1, Mark::X, Box::new(HumanAgent::new()));

    let second = if count == 1 {
        let agent = match config.bot.seed {
            Some(seed) => RandomAgent::seeded(seed.wrapping_add(game_index)),
            None => RandomAgent::new(),
        };
        let agent = agent.with_delay(Duration::from_millis(config.bot.delay_ms));
        Player::new(config.bot.name.clone(), Mark::O, Box::new(agent))
    } else {
        let name_2 = console.read_name("Enter player 2 name: ", default_2)?;
        Player::new(name_2, Mark::O, Box::new(HumanAgent::new()))
    };

    debug!(?first, ?second, "players seated");
    Ok([first, second])
}

/// Play games until the user declines another one.
pub fn run_app(console: &mut dyn Console, config: &AppConfig) -> Result<Tally, GameError> {
    let mut tally = Tally::default();

    for game_index in 0.. {
        console.clear()?;
        let players = setup_players(console, config, game_index)?;
        let mut session = GameSession::new(players);
        let status = session.run(console)?;
        tally.record(status);

        if !console.ask_restart()? {
            break;
        }
    }

    console.show_message("Thanks for playing!")?;
    info!(?tally, "leaving");
    Ok(tally)
}
