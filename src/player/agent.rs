use crate::console::Console;
use crate::error::GameError;
use crate::game::{GameState, Mark};

/// Anything that can choose where the next disk goes.
pub trait Agent {
    /// Propose a 1-based column for the current player. The proposal may be
    /// illegal; the caller validates it and asks again if the drop fails.
    fn select_column(
        &mut self,
        state: &GameState,
        console: &mut dyn Console,
    ) -> Result<usize, GameError>;

    /// Short label for logs ("human", "random").
    fn label(&self) -> &str;
}

/// A seat at the table: who is playing, with which mark, and how they move.
pub struct Player {
    pub name: String,
    pub mark: Mark,
    pub agent: Box<dyn Agent>,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark, agent: Box<dyn Agent>) -> Self {
        Player {
            name: name.into(),
            mark,
            agent,
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("mark", &self.mark)
            .field("agent", &self.agent.label())
            .finish()
    }
}
