use super::insertion;
use super::selection;
use crate::cards::Card;

/// The four sorting variants, in the order they are raced and reported.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Algorithm {
    SelectionIterative,
    InsertionIterative,
    SelectionRecursive,
    InsertionRecursive,
}

impl Algorithm {
    pub const fn all() -> &'static [Self; 4] {
        &[
            Self::SelectionIterative,
            Self::InsertionIterative,
            Self::SelectionRecursive,
            Self::InsertionRecursive,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectionIterative => "Selection Sort (Iteratif)",
            Self::InsertionIterative => "Binary Insertion Sort (Iteratif)",
            Self::SelectionRecursive => "Selection Sort (Rekursif)",
            Self::InsertionRecursive => "Binary Insertion Sort (Rekursif)",
        }
    }
    pub const fn is_recursive(&self) -> bool {
        matches!(self, Self::SelectionRecursive | Self::InsertionRecursive)
    }
    /// Sorts any slice under an arbitrary strict order.
    pub fn sort_by<T, F>(&self, xs: &mut [T], less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Self::SelectionIterative => selection::iterative(xs, less),
            Self::InsertionIterative => insertion::iterative(xs, less),
            Self::SelectionRecursive => selection::recursive(xs, less),
            Self::InsertionRecursive => insertion::recursive(xs, less),
        }
    }
    /// Sorts cards under [`Card::less`].
    pub fn sort(&self, cards: &mut [Card]) {
        self.sort_by(cards, Card::less)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use std::collections::HashMap;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::try_from((rank, suit)).unwrap()
    }

    fn sorted(algorithm: &Algorithm, cards: &[Card]) -> Vec<Card> {
        let mut cards = cards.to_vec();
        algorithm.sort(&mut cards);
        cards
    }

    fn multiset(cards: &[Card]) -> HashMap<Card, usize> {
        cards.iter().fold(HashMap::new(), |mut counts, card| {
            *counts.entry(*card).or_default() += 1;
            counts
        })
    }

    #[test]
    fn output_is_permutation() {
        let deck = Deck::random(300);
        for algorithm in Algorithm::all() {
            let output = sorted(algorithm, deck.cards());
            assert_eq!(multiset(&output), multiset(deck.cards()), "{}", algorithm);
        }
    }

    #[test]
    fn output_is_ordered() {
        let deck = Deck::random(300);
        for algorithm in Algorithm::all() {
            let output = sorted(algorithm, deck.cards());
            assert!(
                output
                    .windows(2)
                    .all(|w| Card::less(&w[0], &w[1]) || w[0] == w[1]),
                "{}",
                algorithm
            );
        }
    }

    #[test]
    fn algorithms_agree() {
        for _ in 0..16 {
            let deck = Deck::random(rand::random_range(0..100));
            let expected = sorted(&Algorithm::SelectionIterative, deck.cards());
            for algorithm in Algorithm::all() {
                assert_eq!(sorted(algorithm, deck.cards()), expected, "{}", algorithm);
            }
        }
    }

    #[test]
    fn agrees_with_std_sort() {
        let deck = Deck::random(250);
        let mut expected = Vec::from(deck.clone());
        expected.sort();
        for algorithm in Algorithm::all() {
            assert_eq!(sorted(algorithm, deck.cards()), expected, "{}", algorithm);
        }
    }

    #[test]
    fn idempotent() {
        let once = sorted(&Algorithm::InsertionIterative, Deck::default().cards());
        for algorithm in Algorithm::all() {
            assert_eq!(sorted(algorithm, &once), once, "{}", algorithm);
        }
    }

    #[test]
    fn trivial_inputs() {
        let one = [card(9, Suit::Club)];
        for algorithm in Algorithm::all() {
            assert!(sorted(algorithm, &[]).is_empty());
            assert_eq!(sorted(algorithm, &one), one);
        }
    }

    #[test]
    fn suit_breaks_rank_tie() {
        let input = [card(1, Suit::Diamond), card(1, Suit::Spade)];
        let expected = [card(1, Suit::Spade), card(1, Suit::Diamond)];
        for algorithm in Algorithm::all() {
            assert_eq!(sorted(algorithm, &input), expected, "{}", algorithm);
        }
    }

    #[test]
    fn rank_orders_first() {
        let input = [card(13, Suit::Spade), card(1, Suit::Diamond), card(7, Suit::Heart)];
        let expected = [card(1, Suit::Diamond), card(7, Suit::Heart), card(13, Suit::Spade)];
        for algorithm in Algorithm::all() {
            assert_eq!(sorted(algorithm, &input), expected, "{}", algorithm);
        }
    }

    #[test]
    fn cyclic_deck_opens_with_aces() {
        let deck = Deck::default();
        let aces = deck
            .cards()
            .iter()
            .filter(|c| c.rank() == Rank::Ace)
            .copied()
            .collect::<Vec<_>>();
        let expected = Suit::all()
            .iter()
            .flat_map(|suit| aces.iter().filter(move |c| c.suit() == *suit).copied())
            .collect::<Vec<_>>();
        for algorithm in Algorithm::all() {
            let output = sorted(algorithm, deck.cards());
            assert_eq!(output[..aces.len()], expected[..], "{}", algorithm);
            assert!(output[..4].iter().all(|c| c.rank() == Rank::Ace));
            assert!(
                output[..4]
                    .windows(2)
                    .all(|w| w[0].suit().priority() >= w[1].suit().priority())
            );
            assert!(output[aces.len()..].iter().all(|c| c.rank() > Rank::Ace));
        }
    }

    #[test]
    fn recursive_variants() {
        let recursive = Algorithm::all()
            .iter()
            .filter(|a| a.is_recursive())
            .copied()
            .collect::<Vec<_>>();
        assert_eq!(
            recursive,
            vec![Algorithm::SelectionRecursive, Algorithm::InsertionRecursive]
        );
    }

    #[test]
    fn report_order() {
        let names = Algorithm::all().map(|a| a.name());
        assert_eq!(
            names,
            [
                "Selection Sort (Iteratif)",
                "Binary Insertion Sort (Iteratif)",
                "Selection Sort (Rekursif)",
                "Binary Insertion Sort (Rekursif)",
            ]
        );
    }
}
