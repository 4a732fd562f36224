use glam::DVec2;
use strum_macros::{AsRefStr, EnumIter};

/// The four cardinal directions. Canvas space, so `Up` is negative y.
///
/// The lowercase string form (`"up"`, `"down"`, ...) is also the id of the
/// matching on-screen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step for this direction.
    pub fn offset(self) -> DVec2 {
        match self {
            Direction::Up => -DVec2::Y,
            Direction::Down => DVec2::Y,
            Direction::Left => -DVec2::X,
            Direction::Right => DVec2::X,
        }
    }

    /// Horizontal bounce. Anything that is not `Left` becomes `Left`, so a
    /// vertically moving ghost that drifted past a side edge turns horizontal.
    pub const fn flip_horizontal(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            _ => Direction::Left,
        }
    }

    /// Vertical counterpart of [`Direction::flip_horizontal`].
    pub const fn flip_vertical(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            _ => Direction::Up,
        }
    }

    /// Maps a `KeyboardEvent.code` to a direction; only the arrow keys are bound.
    pub fn from_key_code(code: &str) -> Option<Direction> {
        match code {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_direction_opposite() {
        let test_cases = [
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ];
        for (dir, expected) in test_cases {
            assert_eq!(dir.opposite(), expected);
        }
    }

    #[test]
    fn test_offset_cancels_with_opposite() {
        for dir in Direction::iter() {
            assert_eq!(dir.offset() + dir.opposite().offset(), DVec2::ZERO);
            assert_eq!(dir.offset().length(), 1.0);
        }
    }

    #[test]
    fn test_flips_remap_cross_axis() {
        assert_eq!(Direction::Left.flip_horizontal(), Direction::Right);
        assert_eq!(Direction::Right.flip_horizontal(), Direction::Left);
        assert_eq!(Direction::Up.flip_horizontal(), Direction::Left);
        assert_eq!(Direction::Up.flip_vertical(), Direction::Down);
        assert_eq!(Direction::Down.flip_vertical(), Direction::Up);
        assert_eq!(Direction::Right.flip_vertical(), Direction::Up);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Direction::from_key_code("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_code("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key_code("KeyW"), None);
        assert_eq!(Direction::from_key_code(""), None);
    }

    #[test]
    fn test_button_ids() {
        let ids: Vec<String> = Direction::iter().map(|d| d.as_ref().to_owned()).collect();
        assert_eq!(ids, ["up", "down", "left", "right"]);
        assert_eq!(Direction::default(), Direction::Right);
    }
}
