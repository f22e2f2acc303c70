use serde::Serialize;

/// Per-match counters for a single player. Counters start at zero and only
/// increase while the match runs; every `*_success` stays below or equal to
/// its attempt counter because a success is only recorded together with an
/// attempt of the same kind.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PlayerMatchStatistics {
    pub shots: u16,
    pub goals: u16,
    pub assists: u16,

    pub passes: u16,
    pub pass_success: u16,

    pub dribbles: u16,
    pub dribble_success: u16,

    pub tackles: u16,
    pub tackle_success: u16,

    pub aerials: u16,
    pub aerial_success: u16,

    pub saves: u16,
    pub save_success: u16,
}

impl PlayerMatchStatistics {
    pub fn is_empty(&self) -> bool {
        self.shots == 0
            && self.passes == 0
            && self.dribbles == 0
            && self.tackles == 0
            && self.aerials == 0
            && self.saves == 0
            && self.assists == 0
    }

    /// True while every success counter is within its attempt counter.
    pub fn is_consistent(&self) -> bool {
        self.goals <= self.shots
            && self.pass_success <= self.passes
            && self.dribble_success <= self.dribbles
            && self.tackle_success <= self.tackles
            && self.aerial_success <= self.aerials
            && self.save_success <= self.saves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_are_empty_and_consistent() {
        let statistics = PlayerMatchStatistics::default();
        assert!(statistics.is_empty());
        assert!(statistics.is_consistent());
    }

    #[test]
    fn test_consistency_detects_orphan_success() {
        let statistics = PlayerMatchStatistics {
            passes: 1,
            pass_success: 2,
            ..PlayerMatchStatistics::default()
        };
        assert!(!statistics.is_consistent());
    }
}
