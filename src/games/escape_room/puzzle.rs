//! Riddles and code locks.
//!
//! A puzzle is either unsolved or solved, and the transition is one-way.
//! The reward item sits in the puzzle until the first correct answer, after
//! which [`Puzzle::take_reward`] hands it out exactly once.

use super::component::{GameComponent, same_name};
use super::error::GameError;
use super::item::Item;
use super::transcript::Transcript;
use super::world::World;
use derive_getters::Getters;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// The two kinds of puzzle and the text shown alongside each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleKind {
    /// Free-text riddle, answered case-insensitively.
    Riddle {
        /// The riddle itself.
        riddle: String,
    },
    /// Numeric or symbolic code, answered exactly.
    Code {
        /// Hint towards the code.
        hint: String,
    },
}

impl PuzzleKind {
    /// Header label used by `inspect`.
    pub fn label(&self) -> &'static str {
        match self {
            PuzzleKind::Riddle { .. } => "Riddle Puzzle",
            PuzzleKind::Code { .. } => "Code Puzzle",
        }
    }

    /// The prompt line shown under the header.
    pub fn prompt(&self) -> String {
        match self {
            PuzzleKind::Riddle { riddle } => format!("Riddle: {}", riddle),
            PuzzleKind::Code { hint } => format!("Hint: {}", hint),
        }
    }

    /// Compares a trimmed attempt against the stored answer.
    fn accepts(&self, expected: &str, given: &str) -> bool {
        match self {
            PuzzleKind::Riddle { .. } => same_name(given, expected),
            PuzzleKind::Code { .. } => given == expected,
        }
    }

    fn empty_answer(&self) -> &'static str {
        match self {
            PuzzleKind::Riddle { .. } => "Answer cannot be empty!",
            PuzzleKind::Code { .. } => "Code cannot be empty!",
        }
    }

    fn solved_message(&self) -> &'static str {
        match self {
            PuzzleKind::Riddle { .. } => "Correct! The puzzle is solved!",
            PuzzleKind::Code { .. } => "Code accepted! The puzzle is solved!",
        }
    }

    fn wrong_message(&self) -> &'static str {
        match self {
            PuzzleKind::Riddle { .. } => "Wrong answer. Try again!",
            PuzzleKind::Code { .. } => "Wrong code. Try again!",
        }
    }
}

/// A puzzle placed in a room.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Puzzle {
    name: String,
    difficulty: u32,
    kind: PuzzleKind,
    #[getter(skip)]
    answer: String,
    solved: bool,
    reward: Option<Item>,
}

impl Puzzle {
    /// Creates an unsolved riddle.
    #[instrument(skip_all, fields(name = %name.as_ref(), difficulty))]
    pub fn riddle(
        name: impl AsRef<str>,
        difficulty: u32,
        riddle: impl Into<String>,
        answer: impl Into<String>,
        reward: Option<Item>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            kind: PuzzleKind::Riddle {
                riddle: riddle.into(),
            },
            answer: answer.into(),
            solved: false,
            reward,
        }
    }

    /// Creates an unsolved code lock.
    #[instrument(skip_all, fields(name = %name.as_ref(), difficulty))]
    pub fn code(
        name: impl AsRef<str>,
        difficulty: u32,
        code: impl Into<String>,
        hint: impl Into<String>,
        reward: Option<Item>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            kind: PuzzleKind::Code { hint: hint.into() },
            answer: code.into(),
            solved: false,
            reward,
        }
    }

    /// Orders puzzles by difficulty, easiest first.
    pub fn cmp_by_difficulty(&self, other: &Self) -> Ordering {
        self.difficulty.cmp(&other.difficulty)
    }

    /// Checks an answer and marks the puzzle solved on a match.
    ///
    /// Returns `Ok(true)` when the puzzle is (or already was) solved and
    /// `Ok(false)` on a wrong answer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPuzzleAnswer`] if the answer is blank and
    /// the puzzle is still unsolved.
    #[instrument(skip(self, answer, out), fields(puzzle = %self.name, solved = self.solved))]
    pub fn attempt_solve(&mut self, answer: &str, out: &mut Transcript) -> Result<bool, GameError> {
        if self.solved {
            out.say("This puzzle is already solved!");
            return Ok(true);
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(GameError::InvalidPuzzleAnswer {
                reason: self.kind.empty_answer().to_string(),
            });
        }

        if self.kind.accepts(&self.answer, answer) {
            self.solved = true;
            info!("Puzzle solved");
            out.say(self.kind.solved_message());
            if let Some(reward) = &self.reward {
                out.say(format!("You received: {}", reward.name()));
            }
            Ok(true)
        } else {
            debug!("Wrong answer");
            out.say(self.kind.wrong_message());
            Ok(false)
        }
    }

    /// Hands out the reward, once, after the puzzle has been solved.
    #[instrument(skip(self), fields(puzzle = %self.name))]
    pub fn take_reward(&mut self) -> Option<Item> {
        if !self.solved {
            return None;
        }
        self.reward.take()
    }
}

impl GameComponent for Puzzle {
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect(&self, _world: &World, out: &mut Transcript) {
        out.say(format!("[{}] {}", self.kind.label(), self.name));
        out.say(self.kind.prompt());
        if self.solved {
            out.say("Status: SOLVED");
        } else {
            out.say(format!("Difficulty: {}", self.difficulty));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::escape_room::ItemKind;

    fn echo_riddle() -> Puzzle {
        Puzzle::riddle(
            "Ancient Riddle",
            3,
            "I speak without a mouth...",
            "echo",
            Some(Item::new("Rusty Key", 10, ItemKind::Key)),
        )
    }

    fn safe() -> Puzzle {
        Puzzle::code(
            "Safe Lock",
            5,
            "1234",
            "The code is the first four counting numbers",
            Some(Item::new("Gold Key", 50, ItemKind::Key)),
        )
    }

    #[test]
    fn riddle_ignores_case_and_padding() {
        let mut puzzle = echo_riddle();
        let mut out = Transcript::new();
        assert!(puzzle.attempt_solve("  ECHO ", &mut out).unwrap());
        assert!(*puzzle.solved());
        assert!(out.contains("You received: Rusty Key"));
    }

    #[test]
    fn code_is_case_sensitive() {
        let mut puzzle = Puzzle::code("Vault", 2, "AbC", "mixed case", None);
        let mut out = Transcript::new();
        assert!(!puzzle.attempt_solve("abc", &mut out).unwrap());
        assert!(out.contains("Wrong code. Try again!"));
        assert!(!*puzzle.solved());
        assert!(puzzle.attempt_solve("AbC", &mut out).unwrap());
        assert!(!out.contains("You received"));
    }

    #[test]
    fn blank_answer_is_an_error() {
        let mut puzzle = safe();
        let mut out = Transcript::new();
        let err = puzzle.attempt_solve("   ", &mut out).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPuzzleAnswer {
                reason: "Code cannot be empty!".to_string()
            }
        );
        assert!(!*puzzle.solved());
    }

    #[test]
    fn solved_is_terminal_and_reward_granted_once() {
        let mut puzzle = safe();
        let mut out = Transcript::new();
        assert!(puzzle.take_reward().is_none());

        assert!(puzzle.attempt_solve("1234", &mut out).unwrap());
        let reward = puzzle.take_reward().expect("reward after solve");
        assert_eq!(reward.name(), "Gold Key");

        for _ in 0..3 {
            assert!(puzzle.attempt_solve("wrong", &mut out).unwrap());
            assert!(puzzle.attempt_solve("", &mut out).unwrap());
            assert!(puzzle.take_reward().is_none());
        }
        assert!(*puzzle.solved());
        assert!(out.contains("This puzzle is already solved!"));
    }

    #[test]
    fn inspect_shows_difficulty_then_solved() {
        let world = World::new();
        let mut puzzle = safe();
        let mut out = Transcript::new();
        puzzle.inspect(&world, &mut out);
        assert_eq!(
            out.drain(),
            [
                "[Code Puzzle] Safe Lock",
                "Hint: The code is the first four counting numbers",
                "Difficulty: 5",
            ]
        );

        puzzle.attempt_solve("1234", &mut out).unwrap();
        out.drain();
        puzzle.inspect(&world, &mut out);
        assert_eq!(out.lines().last().unwrap(), "Status: SOLVED");
    }

    #[test]
    fn difficulty_ordering() {
        let mut puzzles = vec![safe(), echo_riddle()];
        puzzles.sort_by(Puzzle::cmp_by_difficulty);
        assert_eq!(puzzles[0].name(), "Ancient Riddle");
    }
}
