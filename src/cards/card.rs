use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use std::cmp::Ordering;

/// A playing card. Plain value: two cards with the same rank and suit are
/// interchangeable, and a deck may hold any number of them.
///
/// # Ordering
///
/// Cards sort by rank ascending. Among equal ranks the suit with the higher
/// [`Suit::priority`] comes first, so the four aces sort as
/// `A♠ A♥ A♣ A♦`. Two cards compare equal only when rank and suit both match.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Strict "sorts before" predicate handed to every sorting algorithm.
    pub fn less(a: &Self, b: &Self) -> bool {
        a < b
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.suit.priority().cmp(&self.suit.priority()))
    }
}
impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}
impl From<Card> for (Rank, Suit) {
    fn from(c: Card) -> Self {
        (c.rank, c.suit)
    }
}

/// (u8, Suit) convenience, rank given as its face value
impl TryFrom<(u8, Suit)> for Card {
    type Error = anyhow::Error;
    fn try_from((rank, suit): (u8, Suit)) -> Result<Self, Self::Error> {
        Ok(Self::from((Rank::try_from(rank)?, suit)))
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self::from((Rank::random(), Suit::random()))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.rank, self.suit)
    }
}
