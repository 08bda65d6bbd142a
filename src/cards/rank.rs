/// Face value of a card, 1 (Ace) through 13 (King).
///
/// Aces are low: the declaration order is the sort order.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const MIN: Self = Rank::Ace;
    pub const MAX: Self = Rank::King;
    pub const fn all() -> &'static [Self; 13] {
        &[
            Self::Ace,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
            Self::Ten,
            Self::Jack,
            Self::Queen,
            Self::King,
        ]
    }
    /// The label printed in a card cell. Court cards and the ace are
    /// spelled out, pips are numeric.
    pub fn label(&self) -> String {
        match self {
            Self::Ace => String::from("AS"),
            Self::Jack => String::from("Jack"),
            Self::Queen => String::from("Queen"),
            Self::King => String::from("King"),
            pip => u8::from(*pip).to_string(),
        }
    }
}

/// u8 isomorphism over 1..=13
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=13 => Ok(Self::all()[n as usize - 1]),
            _ => Err(anyhow::anyhow!("rank out of range 1..=13: {}", n)),
        }
    }
}

impl crate::Arbitrary for Rank {
    fn random() -> Self {
        Self::all()[rand::random_range(0..Self::all().len())]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(&self.label())
    }
}
