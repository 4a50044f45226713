use super::agent::Agent;
use crate::console::Console;
use crate::error::GameError;
use crate::game::GameState;

/// Reads column choices from the console.
#[derive(Debug, Default)]
pub struct HumanAgent;

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent
    }
}

impl Agent for HumanAgent {
    fn select_column(
        &mut self,
        _state: &GameState,
        console: &mut dyn Console,
    ) -> Result<usize, GameError> {
        let column = console.read_column()?;
        // Negative input is just as far off the board as column 0
        Ok(usize::try_from(column).unwrap_or(0))
    }

    fn label(&self) -> &str {
        "human"
    }
}
