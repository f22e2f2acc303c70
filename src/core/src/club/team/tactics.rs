use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The five attacking patterns a team can attempt on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TacticKind {
    WingCross,
    UnderCutting,
    PullBack,
    MiddleAttack,
    CounterAttack,
}

impl TacticKind {
    pub const ALL: [TacticKind; 5] = [
        TacticKind::WingCross,
        TacticKind::UnderCutting,
        TacticKind::PullBack,
        TacticKind::MiddleAttack,
        TacticKind::CounterAttack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TacticKind::WingCross => "wing cross",
            TacticKind::UnderCutting => "under cutting",
            TacticKind::PullBack => "pull back",
            TacticKind::MiddleAttack => "middle attack",
            TacticKind::CounterAttack => "counter attack",
        }
    }
}

impl Display for TacticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const DEFAULT_TACTIC_WEIGHT: f32 = 50.0;

/// Weight table driving the weighted tactic draw. Mutable between matches,
/// never mid-attack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TacticWeights {
    pub wing_cross: f32,
    pub under_cutting: f32,
    pub pull_back: f32,
    pub middle_attack: f32,
    pub counter_attack: f32,
}

impl Default for TacticWeights {
    fn default() -> Self {
        TacticWeights {
            wing_cross: DEFAULT_TACTIC_WEIGHT,
            under_cutting: DEFAULT_TACTIC_WEIGHT,
            pull_back: DEFAULT_TACTIC_WEIGHT,
            middle_attack: DEFAULT_TACTIC_WEIGHT,
            counter_attack: DEFAULT_TACTIC_WEIGHT,
        }
    }
}

impl TacticWeights {
    pub fn get(&self, tactic: TacticKind) -> f32 {
        match tactic {
            TacticKind::WingCross => self.wing_cross,
            TacticKind::UnderCutting => self.under_cutting,
            TacticKind::PullBack => self.pull_back,
            TacticKind::MiddleAttack => self.middle_attack,
            TacticKind::CounterAttack => self.counter_attack,
        }
    }

    pub fn set(&mut self, tactic: TacticKind, weight: f32) {
        let weight = weight.max(0.0);
        match tactic {
            TacticKind::WingCross => self.wing_cross = weight,
            TacticKind::UnderCutting => self.under_cutting = weight,
            TacticKind::PullBack => self.pull_back = weight,
            TacticKind::MiddleAttack => self.middle_attack = weight,
            TacticKind::CounterAttack => self.counter_attack = weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_equal() {
        let weights = TacticWeights::default();
        for tactic in TacticKind::ALL {
            assert_eq!(weights.get(tactic), DEFAULT_TACTIC_WEIGHT);
        }
    }

    #[test]
    fn test_set_clamps_negative_weight() {
        let mut weights = TacticWeights::default();
        weights.set(TacticKind::PullBack, -10.0);
        assert_eq!(weights.get(TacticKind::PullBack), 0.0);
    }
}
