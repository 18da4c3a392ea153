/// Highest state a cell can hold. Births land here and count down to 0.
pub const MAX_STATE: u8 = 4;

/// Number of distinct cell states (0 through `MAX_STATE`).
pub const STATE_COUNT: usize = MAX_STATE as usize + 1;

/// CellState is the value stored at every lattice point.
/// 0 is empty, 1..=4 are the decaying stages of a live cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[repr(transparent)]
pub struct CellState(u8);

impl CellState {
    pub const EMPTY: CellState = CellState(0);
    pub const NEWBORN: CellState = CellState(MAX_STATE);

    /// Wrap a raw state value. Values above `MAX_STATE` are a caller bug.
    #[inline]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value <= MAX_STATE);
        Self(value)
    }

    /// Checked constructor for values coming from configuration
    pub const fn try_new(value: u8) -> Option<Self> {
        if value <= MAX_STATE {
            Some(Self(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Any non-zero state counts as a live neighbor
    #[inline]
    pub const fn is_alive(self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count down by `step`, bottoming out at empty
    #[inline]
    pub const fn decay(self, step: u8) -> Self {
        Self(self.0.saturating_sub(step))
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        state.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_alive() {
        assert!(!CellState::EMPTY.is_alive());
        assert!(CellState::EMPTY.is_empty());
        assert_eq!(CellState::default(), CellState::EMPTY);
    }

    #[test]
    fn test_every_live_stage_is_alive() {
        for value in 1..=MAX_STATE {
            assert!(CellState::new(value).is_alive());
        }
    }

    #[test]
    fn test_decay_counts_down_to_empty() {
        let mut state = CellState::NEWBORN;
        for expected in (0..MAX_STATE).rev() {
            state = state.decay(1);
            assert_eq!(state.value(), expected);
        }
        assert_eq!(state.decay(1), CellState::EMPTY);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert_eq!(CellState::try_new(4), Some(CellState::NEWBORN));
        assert_eq!(CellState::try_new(5), None);
    }
}
