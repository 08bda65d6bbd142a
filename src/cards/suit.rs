/// One of the four suits. Declaration order follows the deck's suit cycle.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Club = 2,
    Diamond = 3,
}

impl Suit {
    pub const fn all() -> &'static [Self; 4] {
        &[Self::Spade, Self::Heart, Self::Club, Self::Diamond]
    }
    /// Tie-break weight among equal ranks. Higher sorts first.
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Spade => 4,
            Self::Heart => 3,
            Self::Club => 2,
            Self::Diamond => 1,
        }
    }
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Spade => "♠",
            Self::Heart => "♥",
            Self::Club => "♣",
            Self::Diamond => "♦",
        }
    }
    pub const fn is_red(&self) -> bool {
        matches!(self, Self::Heart | Self::Diamond)
    }
}

/// u8 isomorphism over the suit cycle position
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        Self::all()[n as usize % Self::all().len()]
    }
}

impl crate::Arbitrary for Suit {
    fn random() -> Self {
        Self::from(rand::random_range(0..4u8))
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
