use serde::{Serialize, Deserialize};

/// Agent specialty, also the W-Engine type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ZzzSpecialty {
    Attack,
    Stun,
    Anomaly,
    Support,
    Defense,
    Rupture
}

impl ZzzSpecialty {
    #[inline]
    pub fn list() -> &'static [ZzzSpecialty] {
        &[Self::Attack, Self::Stun, Self::Anomaly, Self::Support, Self::Defense, Self::Rupture]
    }
}

impl TryFrom<u16> for ZzzSpecialty {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Attack),
            2 => Ok(Self::Stun),
            3 => Ok(Self::Anomaly),
            4 => Ok(Self::Support),
            5 => Ok(Self::Defense),
            6 => Ok(Self::Rupture),

            _ => Err(format!("unknown specialty: {value}"))
        }
    }
}

impl From<ZzzSpecialty> for u16 {
    fn from(value: ZzzSpecialty) -> Self {
        match value {
            ZzzSpecialty::Attack  => 1,
            ZzzSpecialty::Stun    => 2,
            ZzzSpecialty::Anomaly => 3,
            ZzzSpecialty::Support => 4,
            ZzzSpecialty::Defense => 5,
            ZzzSpecialty::Rupture => 6
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ZzzElement {
    Physical,
    Fire,
    Ice,
    Electric,
    Ether
}

impl ZzzElement {
    #[inline]
    pub fn list() -> &'static [ZzzElement] {
        &[Self::Physical, Self::Fire, Self::Ice, Self::Electric, Self::Ether]
    }
}

impl TryFrom<u16> for ZzzElement {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            200 => Ok(Self::Physical),
            201 => Ok(Self::Fire),
            202 => Ok(Self::Ice),
            203 => Ok(Self::Electric),
            205 => Ok(Self::Ether),

            _ => Err(format!("unknown element: {value}"))
        }
    }
}

impl From<ZzzElement> for u16 {
    fn from(value: ZzzElement) -> Self {
        match value {
            ZzzElement::Physical => 200,
            ZzzElement::Fire     => 201,
            ZzzElement::Ice      => 202,
            ZzzElement::Electric => 203,
            ZzzElement::Ether    => 205
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ZzzAttackType {
    Slash,
    Strike,
    Pierce
}

impl ZzzAttackType {
    #[inline]
    pub fn list() -> &'static [ZzzAttackType] {
        &[Self::Slash, Self::Strike, Self::Pierce]
    }
}

impl TryFrom<u16> for ZzzAttackType {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            101 => Ok(Self::Slash),
            102 => Ok(Self::Strike),
            103 => Ok(Self::Pierce),

            _ => Err(format!("unknown attack type: {value}"))
        }
    }
}

impl From<ZzzAttackType> for u16 {
    fn from(value: ZzzAttackType) -> Self {
        match value {
            ZzzAttackType::Slash  => 101,
            ZzzAttackType::Strike => 102,
            ZzzAttackType::Pierce => 103
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZzzSkillType {
    Basic,
    Dodge,
    Special,
    Chain,
    Assist
}

impl ZzzSkillType {
    #[inline]
    pub fn list() -> &'static [ZzzSkillType] {
        &[Self::Basic, Self::Dodge, Self::Special, Self::Chain, Self::Assist]
    }
}

/// Item rank letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZzzRarity {
    B,
    A,
    S
}

impl ZzzRarity {
    /// `2` -> `B`, `3` -> `A`, `4` -> `S`
    #[inline]
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            2 => Some(Self::B),
            3 => Some(Self::A),
            4 => Some(Self::S),

            _ => None
        }
    }
}

/// IDs of the player avatars which are listed among the agents
pub const PLAYER_CHARACTER_IDS: &[u32] = &[2011, 2021];
