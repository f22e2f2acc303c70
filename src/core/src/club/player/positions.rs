use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of on-field locations a player can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    Goalkeeper,
    CentreBack,
    LeftBack,
    RightBack,
    CentreMidfielder,
    LeftMidfielder,
    RightMidfielder,
    LeftWinger,
    RightWinger,
    Striker,
}

impl PlayerPosition {
    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::CentreBack => "CB",
            PlayerPosition::LeftBack => "LB",
            PlayerPosition::RightBack => "RB",
            PlayerPosition::CentreMidfielder => "CM",
            PlayerPosition::LeftMidfielder => "LM",
            PlayerPosition::RightMidfielder => "RM",
            PlayerPosition::LeftWinger => "LW",
            PlayerPosition::RightWinger => "RW",
            PlayerPosition::Striker => "ST",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPosition::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            PlayerPosition::CentreBack | PlayerPosition::LeftBack | PlayerPosition::RightBack
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            PlayerPosition::CentreMidfielder
                | PlayerPosition::LeftMidfielder
                | PlayerPosition::RightMidfielder
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            PlayerPosition::LeftWinger | PlayerPosition::RightWinger | PlayerPosition::Striker
        )
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_groups() {
        assert!(PlayerPosition::Goalkeeper.is_goalkeeper());
        assert!(PlayerPosition::LeftBack.is_defender());
        assert!(PlayerPosition::CentreMidfielder.is_midfielder());
        assert!(PlayerPosition::LeftWinger.is_forward());
        assert!(!PlayerPosition::Striker.is_midfielder());
    }

    #[test]
    fn test_short_names() {
        assert_eq!(PlayerPosition::Goalkeeper.short_name(), "GK");
        assert_eq!(PlayerPosition::RightWinger.to_string(), "RW");
    }
}
