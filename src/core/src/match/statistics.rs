use crate::club::TacticKind;
use serde::Serialize;

/// Team-level tactic counters, aggregated over a match. `attempts` counts
/// every attack regardless of tactic.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TeamMatchStatistics {
    pub attempts: u16,

    pub wing_cross: u16,
    pub wing_cross_success: u16,

    pub under_cutting: u16,
    pub under_cutting_success: u16,

    pub pull_back: u16,
    pub pull_back_success: u16,

    pub middle_attack: u16,
    pub middle_attack_success: u16,

    pub counter_attack: u16,
    pub counter_attack_success: u16,
}

impl TeamMatchStatistics {
    pub fn record_attempt(&mut self, tactic: TacticKind) {
        self.attempts += 1;
        match tactic {
            TacticKind::WingCross => self.wing_cross += 1,
            TacticKind::UnderCutting => self.under_cutting += 1,
            TacticKind::PullBack => self.pull_back += 1,
            TacticKind::MiddleAttack => self.middle_attack += 1,
            TacticKind::CounterAttack => self.counter_attack += 1,
        }
    }

    pub fn record_success(&mut self, tactic: TacticKind) {
        match tactic {
            TacticKind::WingCross => self.wing_cross_success += 1,
            TacticKind::UnderCutting => self.under_cutting_success += 1,
            TacticKind::PullBack => self.pull_back_success += 1,
            TacticKind::MiddleAttack => self.middle_attack_success += 1,
            TacticKind::CounterAttack => self.counter_attack_success += 1,
        }
    }

    pub fn attempts_of(&self, tactic: TacticKind) -> u16 {
        match tactic {
            TacticKind::WingCross => self.wing_cross,
            TacticKind::UnderCutting => self.under_cutting,
            TacticKind::PullBack => self.pull_back,
            TacticKind::MiddleAttack => self.middle_attack,
            TacticKind::CounterAttack => self.counter_attack,
        }
    }

    pub fn successes_of(&self, tactic: TacticKind) -> u16 {
        match tactic {
            TacticKind::WingCross => self.wing_cross_success,
            TacticKind::UnderCutting => self.under_cutting_success,
            TacticKind::PullBack => self.pull_back_success,
            TacticKind::MiddleAttack => self.middle_attack_success,
            TacticKind::CounterAttack => self.counter_attack_success,
        }
    }
}
