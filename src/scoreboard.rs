//! Level / game-over text model
//!
//! Tracks the displayed level and the best finished run of the session (in
//! memory only). The presentation layer feeds it simulation events and draws
//! the strings it produces.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Scoreboard state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Level currently displayed
    pub level: u32,
    /// Best final level among finished runs (0 before the first game over)
    pub best_level: u32,
    /// Finished runs this session
    pub runs: u32,
    /// Whether the last finished run beat every earlier one
    pub new_best: bool,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Default::default()
        }
    }

    /// Update from a simulation event; returns true if text must be redrawn
    pub fn apply(&mut self, event: &GameEvent) -> bool {
        match *event {
            GameEvent::LevelDisplay { level } => {
                self.level = level;
                true
            }
            GameEvent::GameOverDisplay { final_level } => {
                self.level = final_level;
                self.runs += 1;
                self.new_best = final_level > self.best_level;
                self.best_level = self.best_level.max(final_level);
                true
            }
            _ => false,
        }
    }

    /// Top-left HUD text
    pub fn level_text(&self) -> String {
        format!("Level: {}", self.level)
    }

    /// Centered game-over text, one string per line
    pub fn game_over_lines(&self) -> [String; 2] {
        [
            "GAME OVER".to_string(),
            format!("Highest Level: {}", self.level),
        ]
    }

    /// End-of-session summary
    pub fn session_text(&self) -> String {
        format!("Runs: {}, best level: {}", self.runs, self.best_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ObstacleId, RemovalReason};

    #[test]
    fn test_level_text() {
        let mut board = Scoreboard::new();
        assert_eq!(board.level_text(), "Level: 1");

        assert!(board.apply(&GameEvent::LevelDisplay { level: 4 }));
        assert_eq!(board.level_text(), "Level: 4");
        assert_eq!(board.best_level, 0);
    }

    #[test]
    fn test_game_over_lines() {
        let mut board = Scoreboard::new();
        board.apply(&GameEvent::LevelDisplay { level: 3 });
        assert!(board.apply(&GameEvent::GameOverDisplay { final_level: 3 }));
        assert_eq!(board.game_over_lines(), ["GAME OVER", "Highest Level: 3"]);
        assert_eq!(board.runs, 1);
        assert!(board.new_best);
    }

    #[test]
    fn test_best_across_runs() {
        let mut board = Scoreboard::new();
        board.apply(&GameEvent::GameOverDisplay { final_level: 5 });
        board.apply(&GameEvent::LevelDisplay { level: 1 });
        assert_eq!(board.level, 1);
        assert_eq!(board.best_level, 5);

        board.apply(&GameEvent::GameOverDisplay { final_level: 4 });
        assert!(!board.new_best);
        board.apply(&GameEvent::GameOverDisplay { final_level: 5 });
        assert!(!board.new_best);
        board.apply(&GameEvent::GameOverDisplay { final_level: 7 });
        assert!(board.new_best);
        assert_eq!(board.session_text(), "Runs: 4, best level: 7");
    }

    #[test]
    fn test_ignores_obstacle_events() {
        let mut board = Scoreboard::new();
        assert!(!board.apply(&GameEvent::ObstacleRemoved {
            id: ObstacleId(1),
            reason: RemovalReason::OffField,
        }));
        assert_eq!(board.level, 1);
    }
}
