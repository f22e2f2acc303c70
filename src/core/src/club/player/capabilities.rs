use serde::{Deserialize, Serialize};

/// The closed set of numeric player attributes used as contest weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    Shooting,
    Passing,
    Dribbling,
    Interception,
    Pace,
    Strength,
    Aggression,
    Anticipation,
    FreeKick,
    Stamina,
    Goalkeeping,
}

impl Capability {
    pub const ALL: [Capability; 11] = [
        Capability::Shooting,
        Capability::Passing,
        Capability::Dribbling,
        Capability::Interception,
        Capability::Pace,
        Capability::Strength,
        Capability::Aggression,
        Capability::Anticipation,
        Capability::FreeKick,
        Capability::Stamina,
        Capability::Goalkeeping,
    ];
}

/// Capability vector of a single player. Values are non-negative and do not
/// change for the duration of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerCapabilities {
    pub shooting: f32,
    pub passing: f32,
    pub dribbling: f32,
    pub interception: f32,
    pub pace: f32,
    pub strength: f32,
    pub aggression: f32,
    pub anticipation: f32,
    pub free_kick: f32,
    pub stamina: f32,
    pub goalkeeping: f32,
}

impl PlayerCapabilities {
    pub fn get(&self, capability: Capability) -> f32 {
        match capability {
            Capability::Shooting => self.shooting,
            Capability::Passing => self.passing,
            Capability::Dribbling => self.dribbling,
            Capability::Interception => self.interception,
            Capability::Pace => self.pace,
            Capability::Strength => self.strength,
            Capability::Aggression => self.aggression,
            Capability::Anticipation => self.anticipation,
            Capability::FreeKick => self.free_kick,
            Capability::Stamina => self.stamina,
            Capability::Goalkeeping => self.goalkeeping,
        }
    }

    /// Uniform capability vector, handy for generated squads.
    pub fn uniform(value: f32) -> Self {
        PlayerCapabilities {
            shooting: value,
            passing: value,
            dribbling: value,
            interception: value,
            pace: value,
            strength: value,
            aggression: value,
            anticipation: value,
            free_kick: value,
            stamina: value,
            goalkeeping: value,
        }
    }

    pub fn average(&self) -> f32 {
        Capability::ALL.iter().map(|c| self.get(*c)).sum::<f32>() / Capability::ALL.len() as f32
    }
}
