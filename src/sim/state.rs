//! Simulation entities and events
//!
//! Plain data only: the presentation layer reads these and draws them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Obstacles moving, player crossing
    Playing,
    /// Player was hit; waits for a reset
    GameOver,
}

/// Direction of travel of an obstacle (fixed for its lifetime)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Leftward,
    Rightward,
}

impl Direction {
    /// Sign of the x velocity
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Leftward => -1.0,
            Direction::Rightward => 1.0,
        }
    }
}

/// Obstacle paint colour (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl ObstacleColor {
    pub const ALL: [ObstacleColor; 6] = [
        ObstacleColor::Red,
        ObstacleColor::Orange,
        ObstacleColor::Yellow,
        ObstacleColor::Green,
        ObstacleColor::Blue,
        ObstacleColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleColor::Red => "red",
            ObstacleColor::Orange => "orange",
            ObstacleColor::Yellow => "yellow",
            ObstacleColor::Green => "green",
            ObstacleColor::Blue => "blue",
            ObstacleColor::Purple => "purple",
        }
    }
}

/// Stable obstacle handle, allocated in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

/// A moving hazard ("car")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    /// Center position
    pub pos: Vec2,
    direction: Direction,
    /// Vertical extent
    pub width: f32,
    /// Horizontal extent
    pub length: f32,
    pub color: ObstacleColor,
    /// Lane index the obstacle was spawned in
    pub lane: usize,
}

impl Obstacle {
    pub fn new(
        id: ObstacleId,
        pos: Vec2,
        direction: Direction,
        width: f32,
        length: f32,
        color: ObstacleColor,
        lane: usize,
    ) -> Self {
        Self {
            id,
            pos,
            direction,
            width,
            length,
            color,
            lane,
        }
    }

    /// Obstacles never reverse, so there is no setter
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Move `distance` along the direction of travel
    #[inline]
    pub fn advance(&mut self, distance: f32) {
        self.pos.x += self.direction.sign() * distance;
    }

    /// True once the obstacle has left the field horizontally
    #[inline]
    pub fn is_off_field(&self, half_width: f32) -> bool {
        self.pos.x.abs() > half_width
    }
}

/// Which way the player token faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit step vector
    pub fn step(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::Y,
            Facing::Down => Vec2::NEG_Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// Player position as seen by the simulation core
///
/// The input layer owns and moves the player; the core only reads the
/// position and issues a reposition command on level-up and reset.
pub trait PlayerBody {
    fn position(&self) -> Vec2;
    fn reposition(&mut self, start: Vec2);
}

/// The player's token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub facing: Facing,
}

impl Player {
    pub fn new(start: Vec2) -> Self {
        Self {
            pos: start,
            facing: Facing::Up,
        }
    }

    /// Turn to `facing` and move one step that way
    pub fn step(&mut self, facing: Facing, distance: f32) {
        self.facing = facing;
        self.pos += facing.step() * distance;
    }

    pub fn move_up(&mut self, distance: f32) {
        self.step(Facing::Up, distance);
    }

    pub fn move_down(&mut self, distance: f32) {
        self.step(Facing::Down, distance);
    }

    pub fn move_left(&mut self, distance: f32) {
        self.step(Facing::Left, distance);
    }

    pub fn move_right(&mut self, distance: f32) {
        self.step(Facing::Right, distance);
    }
}

impl PlayerBody for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn reposition(&mut self, start: Vec2) {
        self.facing = Facing::Up;
        self.pos = start;
    }
}

/// Why an obstacle left the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Drove past the field edge
    OffField,
    /// Removed by the game-over effect
    Hidden,
    /// Removed by a full reset
    Cleared,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned {
        id: ObstacleId,
        pos: Vec2,
        direction: Direction,
        color: ObstacleColor,
    },
    ObstacleRemoved {
        id: ObstacleId,
        reason: RemovalReason,
    },
    PlayerRepositioned {
        pos: Vec2,
    },
    /// (Re)draw the level text
    LevelDisplay {
        level: u32,
    },
    /// Draw the game-over text
    GameOverDisplay {
        final_level: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_advance_follows_direction() {
        let mut left = Obstacle::new(
            ObstacleId(1),
            Vec2::new(250.0, 0.0),
            Direction::Leftward,
            30.0,
            40.0,
            ObstacleColor::Red,
            0,
        );
        left.advance(3.0);
        assert_eq!(left.pos.x, 247.0);
        assert_eq!(left.direction(), Direction::Leftward);

        let mut right = Obstacle::new(
            ObstacleId(2),
            Vec2::new(-250.0, 0.0),
            Direction::Rightward,
            30.0,
            40.0,
            ObstacleColor::Blue,
            0,
        );
        right.advance(3.0);
        assert_eq!(right.pos.x, -247.0);
    }

    #[test]
    fn test_off_field_is_strict() {
        let mut obstacle = Obstacle::new(
            ObstacleId(1),
            Vec2::new(-250.0, 0.0),
            Direction::Leftward,
            30.0,
            40.0,
            ObstacleColor::Green,
            0,
        );
        assert!(!obstacle.is_off_field(250.0));
        obstacle.advance(1.0);
        assert!(obstacle.is_off_field(250.0));
    }

    #[test]
    fn test_player_moves_and_faces() {
        let mut player = Player::new(Vec2::new(0.0, -230.0));
        player.move_left(20.0);
        assert_eq!(player.pos, Vec2::new(-20.0, -230.0));
        assert_eq!(player.facing, Facing::Left);

        player.move_up(20.0);
        player.move_right(20.0);
        player.move_down(20.0);
        assert_eq!(player.pos, Vec2::new(0.0, -230.0));
        assert_eq!(player.facing, Facing::Down);

        player.reposition(Vec2::new(0.0, -230.0));
        assert_eq!(player.facing, Facing::Up);
    }
}
