use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use rand::seq::SliceRandom;

/// An ordered run of cards, generated by walking the rank and suit cycles
/// in lockstep. Card `i` has rank `(i mod 13) + 1` and suit
/// `[♠, ♥, ♣, ♦][i mod 4]`, so a deck longer than 52 repeats cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new(crate::DECK_SIZE)
    }
}

impl Deck {
    /// Generates the first `n` cards of the cyclic sequence.
    pub fn new(n: usize) -> Self {
        Self((0..n).map(Self::nth).collect())
    }
    /// The card at position `i` of the cyclic sequence.
    pub fn nth(i: usize) -> Card {
        let ranks = Rank::all();
        let suits = Suit::all();
        Card::from((ranks[i % ranks.len()], suits[i % suits.len()]))
    }
    /// Uniformly permutes the deck in place.
    pub fn shuffle(&mut self) {
        self.0.shuffle(&mut rand::rng());
    }
    /// `n` independent uniformly random cards.
    pub fn random(n: usize) -> Self {
        Self((0..n).map(|_| Card::random()).collect())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl AsRef<[Card]> for Deck {
    fn as_ref(&self) -> &[Card] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
