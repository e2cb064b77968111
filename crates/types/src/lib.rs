//! Shared data types for the gridfall engine.
//!
//! Pure data with no dependencies: piece kinds and their colors, player
//! commands, game phases, the board cell alias, and the tuning constants
//! for scoring and fall speed.

/// Default board dimensions (columns x rows)
pub const DEFAULT_COLUMNS: u8 = 10;
pub const DEFAULT_ROWS: u8 = 20;

/// Gravity interval at level 1 (milliseconds between automatic steps)
pub const INITIAL_FALL_INTERVAL_MS: u32 = 500;
/// Gravity interval never drops below this floor
pub const MIN_FALL_INTERVAL_MS: u32 = 100;
/// Each level above 1 shaves this much off the gravity interval
pub const FALL_SPEEDUP_PER_LEVEL_MS: u32 = 50;
/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points per clear event, indexed by lines cleared (index 0 unused)
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
/// Clear counts outside the table score this much per line
pub const FALLBACK_POINTS_PER_LINE: u32 = 100;

/// An RGB color, used for piece and cell rendering by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Strict 1..=7 id used for grid cell export (0 = empty)
    pub fn index(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// The fixed color for this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb(0, 255, 255),
            PieceKind::O => Rgb(255, 255, 0),
            PieceKind::T => Rgb(128, 0, 128),
            PieceKind::S => Rgb(0, 255, 0),
            PieceKind::Z => Rgb(255, 0, 0),
            PieceKind::J => Rgb(0, 0, 255),
            PieceKind::L => Rgb(255, 165, 0),
        }
    }
}

/// Player commands forwarded by the host's input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    TogglePause,
    Restart,
}

impl GameCommand {
    /// Parse command from string (for host keymaps)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "softdrop" => Some(GameCommand::SoftDrop),
            "rotate" => Some(GameCommand::Rotate),
            "harddrop" => Some(GameCommand::HardDrop),
            "togglepause" => Some(GameCommand::TogglePause),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::Rotate => "rotate",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Restart => "restart",
        }
    }
}

/// Game lifecycle phase. `GameOver` is absorbing except via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind).
/// The rendered color is derived from the kind.
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
        assert_eq!(PieceKind::from_str(""), None);
    }

    #[test]
    fn test_piece_kind_index_unique() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let idx = kind.index() as usize;
            assert!((1..=7).contains(&idx));
            assert!(!seen[idx], "duplicate index {}", idx);
            seen[idx] = true;
        }
    }

    #[test]
    fn test_command_round_trip() {
        let all = [
            GameCommand::MoveLeft,
            GameCommand::MoveRight,
            GameCommand::SoftDrop,
            GameCommand::Rotate,
            GameCommand::HardDrop,
            GameCommand::TogglePause,
            GameCommand::Restart,
        ];
        for cmd in all {
            assert_eq!(GameCommand::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(GameCommand::from_str("hold"), None);
    }

    #[test]
    fn test_colors_fixed_per_kind() {
        assert_eq!(PieceKind::I.color(), Rgb(0, 255, 255));
        assert_eq!(PieceKind::O.color(), Rgb(255, 255, 0));
        assert_eq!(PieceKind::L.color(), Rgb(255, 165, 0));
    }
}
