#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NotStarted,
    FirstHalf,
    SecondHalf,
    ExtraTime,
    PenaltyShootout,
    Finished,
}

/// Drives the phase sequence of a match. Extra time is entered only for a
/// drawn match with extra time configured, and the shootout only when extra
/// time also finishes level.
pub struct StateManager {
    current: MatchState,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    pub fn new() -> Self {
        StateManager {
            current: MatchState::NotStarted,
        }
    }

    pub fn current(&self) -> MatchState {
        self.current
    }

    pub fn next(&mut self, drawn: bool, extra_time_enabled: bool) -> Option<MatchState> {
        let next = match self.current {
            MatchState::NotStarted => MatchState::FirstHalf,
            MatchState::FirstHalf => MatchState::SecondHalf,
            MatchState::SecondHalf => {
                if drawn && extra_time_enabled {
                    MatchState::ExtraTime
                } else {
                    MatchState::Finished
                }
            }
            MatchState::ExtraTime => {
                if drawn {
                    MatchState::PenaltyShootout
                } else {
                    MatchState::Finished
                }
            }
            MatchState::PenaltyShootout | MatchState::Finished => MatchState::Finished,
        };

        self.current = next;
        match next {
            MatchState::Finished => None,
            state => Some(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_match_skips_extra_time() {
        let mut manager = StateManager::new();
        assert_eq!(manager.next(false, true), Some(MatchState::FirstHalf));
        assert_eq!(manager.next(false, true), Some(MatchState::SecondHalf));
        assert_eq!(manager.next(false, true), None);
        assert_eq!(manager.next(false, true), None);
    }

    #[test]
    fn test_drawn_match_goes_to_shootout() {
        let mut manager = StateManager::new();
        manager.next(true, true);
        manager.next(true, true);
        assert_eq!(manager.next(true, true), Some(MatchState::ExtraTime));
        assert_eq!(manager.next(true, true), Some(MatchState::PenaltyShootout));
        assert_eq!(manager.next(true, true), None);
    }

    #[test]
    fn test_extra_time_winner_ends_match() {
        let mut manager = StateManager::new();
        manager.next(true, true);
        manager.next(true, true);
        assert_eq!(manager.next(true, true), Some(MatchState::ExtraTime));
        assert_eq!(manager.next(false, true), None);
    }

    #[test]
    fn test_draw_without_extra_time_ends_match() {
        let mut manager = StateManager::new();
        manager.next(true, false);
        manager.next(true, false);
        assert_eq!(manager.next(true, false), None);
    }
}
