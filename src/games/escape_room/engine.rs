//! The read-eval-print loop.
//!
//! Input and output are injected, so the same engine drives a terminal
//! session or a scripted test.

use super::command::{Command, Verb};
use super::component::GameComponent;
use super::error::{EngineError, GameError};
use super::layout;
use super::player::Player;
use super::transcript::Transcript;
use super::world::World;
use crate::config::GameConfig;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player reached an exit room.
    Escaped {
        /// Turns taken, including the winning one.
        turns: u32,
    },
    /// The player typed `quit`.
    Quit {
        /// Turns taken.
        turns: u32,
    },
    /// Input ran out before the game ended.
    InputClosed {
        /// Turns taken.
        turns: u32,
    },
}

impl GameOutcome {
    /// Turns taken before the session ended.
    pub fn turns(&self) -> u32 {
        match self {
            GameOutcome::Escaped { turns }
            | GameOutcome::Quit { turns }
            | GameOutcome::InputClosed { turns } => *turns,
        }
    }
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    InputClosed,
}

/// Either a player mistake or a broken stream.
#[derive(Debug, derive_more::From)]
enum TurnError {
    Game(GameError),
    Engine(EngineError),
}

/// Owns the world, the player and the hint queue, and runs the command loop.
#[derive(Debug)]
pub struct GameEngine<R, W> {
    world: World,
    player: Player,
    hints: VecDeque<String>,
    config: GameConfig,
    turn: u32,
    out: Transcript,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameEngine<R, W> {
    /// Creates an engine for the built-in escape room.
    #[instrument(skip_all)]
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self::with_world(layout::escape_room(), layout::default_hints(), config, input, output)
    }

    /// Creates an engine for a custom world. The player starts in `world.start()`.
    #[instrument(skip_all, fields(rooms = world.len()))]
    pub fn with_world(
        world: World,
        hints: impl IntoIterator<Item = String>,
        config: GameConfig,
        input: R,
        output: W,
    ) -> Self {
        let player = Player::new(world.start());
        Self {
            world,
            player,
            hints: hints.into_iter().collect(),
            config,
            turn: 0,
            out: Transcript::new(),
            input,
            output,
        }
    }

    /// The world as it currently stands.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Turns started so far, blank lines included.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Hints not yet shown.
    pub fn hints_remaining(&self) -> usize {
        self.hints.len()
    }

    /// Gives back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the player escapes, quits, or input ends.
    ///
    /// Player mistakes are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if reading input or writing output fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome, EngineError> {
        if *self.config.show_banner() {
            self.banner();
        }

        loop {
            self.turn += 1;

            if self.config.hint_due(self.turn) {
                if let Some(hint) = self.hints.pop_front() {
                    debug!(turn = self.turn, remaining = self.hints.len(), "Showing hint");
                    self.out.blank();
                    self.out.say(format!("[HINT] {}", hint));
                }
            }

            self.flush()?;
            write!(self.output, "\n{}", self.config.prompt())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!(turn = self.turn, "Input closed");
                return Ok(GameOutcome::InputClosed { turns: self.turn });
            };
            if line.is_empty() {
                continue;
            }

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    self.flush()?;
                    info!(turn = self.turn, "Player quit");
                    return Ok(GameOutcome::Quit { turns: self.turn });
                }
                Ok(Flow::InputClosed) => {
                    self.flush()?;
                    info!(turn = self.turn, "Input closed mid-command");
                    return Ok(GameOutcome::InputClosed { turns: self.turn });
                }
                Err(TurnError::Game(err)) => {
                    warn!(error = %err, "Command failed");
                    match err {
                        GameError::InvalidCommand(_) => self.out.say(format!("Error: {}", err)),
                        _ => self.out.say(err.to_string()),
                    }
                    continue;
                }
                Err(TurnError::Engine(err)) => return Err(err),
            }

            if self.world.room(self.player.current_room()).is_exit() {
                self.celebrate();
                self.flush()?;
                info!(turn = self.turn, "Player escaped");
                return Ok(GameOutcome::Escaped { turns: self.turn });
            }
        }
    }

    #[instrument(skip(self))]
    fn execute(&mut self, line: &str) -> Result<Flow, TurnError> {
        let command = Command::parse(line)?;
        debug!(%command, turn = self.turn, "Executing command");

        let verb = command.verb();
        let argument = match (verb.usage(), command.argument()) {
            (Some(usage), None) => {
                self.out.say(usage);
                return Ok(Flow::Continue);
            }
            (_, arg) => arg.unwrap_or_default(),
        };

        match verb {
            Verb::Help => self.help(),
            Verb::Look => {
                let here = self.world.room(self.player.current_room());
                here.inspect(&self.world, &mut self.out);
            }
            Verb::Move => self.move_to(argument)?,
            Verb::Back => {
                self.player.go_back(&self.world, &mut self.out);
            }
            Verb::Pickup => {
                self.player.pickup_item(&mut self.world, argument, &mut self.out);
            }
            Verb::Inventory => self.player.show_inventory(&mut self.out),
            Verb::Sort => {
                self.player.sort_inventory_by_value(&mut self.out);
                self.player.show_inventory(&mut self.out);
            }
            Verb::Inspect => self.inspect(argument),
            Verb::Solve => return self.solve(argument),
            Verb::Find => self.find(argument),
            Verb::Map => {
                self.out.blank();
                self.out.say("=== Game Map (Recursive) ===");
                self.world.explore(self.world.start(), 0, &mut self.out);
            }
            Verb::Status => self.status(),
            Verb::Quit => {
                self.out.say("Thanks for playing!");
                return Ok(Flow::Quit);
            }
        }

        Ok(Flow::Continue)
    }

    /// Moves through one of the current room's exits.
    fn move_to(&mut self, name: &str) -> Result<(), GameError> {
        let here = self.world.room(self.player.current_room());
        let target = here
            .connections()
            .iter()
            .copied()
            .find(|&id| self.world.room(id).is_named(name));

        match target {
            Some(id) => self.player.move_to(&self.world, id, &mut self.out)?,
            None => self.out.say("You can't go there from here!"),
        }
        Ok(())
    }

    /// Shows a puzzle, reads one answer line, and grants the reward on success.
    fn solve(&mut self, name: &str) -> Result<Flow, TurnError> {
        let here = self.player.current_room();
        let Some(puzzle) = self.world.room(here).find_puzzle(name) else {
            self.out.say(format!("Puzzle not found: {}", name));
            return Ok(Flow::Continue);
        };
        puzzle.inspect(&self.world, &mut self.out);

        self.flush()?;
        write!(self.output, "Enter your answer: ").map_err(EngineError::from)?;
        self.output.flush().map_err(EngineError::from)?;
        let Some(answer) = self.read_line()? else {
            return Ok(Flow::InputClosed);
        };

        let Some(puzzle) = self.world.room_mut(here).find_puzzle_mut(name) else {
            return Ok(Flow::Continue);
        };
        if puzzle.attempt_solve(&answer, &mut self.out)? {
            if let Some(reward) = puzzle.take_reward() {
                info!(reward = %reward.name(), "Reward granted");
                self.player.add_to_inventory(reward);
            }
        }
        Ok(Flow::Continue)
    }

    fn inspect(&mut self, name: &str) {
        let here = self.world.room(self.player.current_room());
        match here.find(name) {
            Some(component) => component.inspect(&self.world, &mut self.out),
            None => self.out.say(format!("Not found: {}", name)),
        }
    }

    fn find(&mut self, name: &str) {
        if self.world.contains_item(self.player.current_room(), name) {
            self.out.say(format!("You sense that {} lies somewhere ahead.", name));
        } else {
            self.out.say(format!("No {} anywhere you can reach from here.", name));
        }
    }

    fn status(&mut self) {
        let (solved, total) = self.world.puzzle_progress();
        let here = self.world.room(self.player.current_room());
        self.out.blank();
        self.out.say("=== Status ===");
        self.out.say(format!("Current Room: {}", here.name()));
        self.out.say(format!("Turn: {}", self.turn));
        self.out.say(format!("Items in inventory: {}", self.player.inventory().len()));
        self.out.say(format!("Puzzles solved: {}/{}", solved, total));
        self.out.say(format!("Map depth: {}", self.world.max_depth(self.world.start())));
    }

    fn help(&mut self) {
        self.out.blank();
        self.out.say("=== Available Commands ===");
        for line in Verb::help_lines() {
            self.out.say(line);
        }
    }

    fn banner(&mut self) {
        self.out.say("===================================");
        self.out.say("  WELCOME TO THE ESCAPE ROOM!");
        self.out.say("===================================");
        self.out.say("Find your way to the exit!");
        self.out.say("Type 'help' for commands.");
    }

    fn celebrate(&mut self) {
        self.out.blank();
        self.out.say("***********************************");
        self.out.say("  CONGRATULATIONS! YOU ESCAPED!");
        self.out.say("***********************************");
        self.out.say(format!("You completed the game in {} turns!", self.turn));
    }

    fn flush(&mut self) -> Result<(), EngineError> {
        self.out.flush_to(&mut self.output)?;
        Ok(())
    }

    /// Reads one line. Undecodable bytes become U+FFFD rather than an error.
    fn read_line(&mut self) -> Result<Option<String>, EngineError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, std::borrow::Cow::Owned(_)) {
            warn!(turn = self.turn, "Input line was not valid UTF-8");
        }
        Ok(Some(line.trim().to_string()))
    }
}
