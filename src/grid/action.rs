use thiserror::Error;

/// Number of discrete actions available to the agent
pub const NUM_ACTIONS: usize = 4;

/// The action index was outside the {0=Up, 1=Down, 2=Left, 3=Right} encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid action index {0}, expected 0=Up, 1=Down, 2=Left, or 3=Right")]
pub struct InvalidActionError(pub usize);

/// Direction the agent can move
///
/// The integer encoding is part of the public contract between the
/// environment and any policy consumer: 0=Up, 1=Down, 2=Left, 3=Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions, ordered by their integer encoding
    pub const ALL: [Action; NUM_ACTIONS] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Decode an action index, rejecting anything outside 0..4
    pub fn from_index(idx: usize) -> Result<Action, InvalidActionError> {
        match idx {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            _ => Err(InvalidActionError(idx)),
        }
    }

    /// The integer encoding of this action
    pub fn index(&self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_encoding() {
        assert_eq!(Action::from_index(0), Ok(Action::Up));
        assert_eq!(Action::from_index(1), Ok(Action::Down));
        assert_eq!(Action::from_index(2), Ok(Action::Left));
        assert_eq!(Action::from_index(3), Ok(Action::Right));
    }

    #[test]
    fn test_invalid_action_index() {
        assert_eq!(Action::from_index(4), Err(InvalidActionError(4)));
        assert_eq!(Action::from_index(99), Err(InvalidActionError(99)));
    }

    #[test]
    fn test_index_roundtrip() {
        for action in Action::ALL {
            assert_eq!(Action::from_index(action.index()), Ok(action));
        }
    }
}
