pub mod layout;
pub use layout::*;

pub mod trial;
pub use trial::*;

use crate::cards::Deck;
use crate::sorting::Algorithm;

/// Every algorithm raced on the same deck, in [`Algorithm::all`] order.
#[derive(Debug, Clone)]
pub struct Race(Vec<Trial>);

impl Race {
    pub fn run(deck: &Deck) -> Self {
        Self(
            Algorithm::all()
                .iter()
                .map(|algorithm| Trial::run(*algorithm, deck))
                .collect(),
        )
    }
    pub fn trials(&self) -> &[Trial] {
        &self.0
    }
    /// The trial for one algorithm.
    pub fn get(&self, algorithm: Algorithm) -> Option<&Trial> {
        self.0.iter().find(|t| t.algorithm() == algorithm)
    }
    /// Whether every trial produced the same sequence.
    pub fn agrees(&self) -> bool {
        self.0.windows(2).all(|w| w[0].output() == w[1].output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_in_report_order() {
        let race = Race::run(&Deck::new(40));
        let order = race
            .trials()
            .iter()
            .map(Trial::algorithm)
            .collect::<Vec<_>>();
        assert_eq!(order, Algorithm::all().to_vec());
    }

    #[test]
    fn trials_agree() {
        let mut deck = Deck::default();
        deck.shuffle();
        assert!(Race::run(&deck).agrees());
        assert!(Race::run(&Deck::new(0)).agrees());
    }

    #[test]
    fn lookup() {
        let race = Race::run(&Deck::new(10));
        let trial = race.get(Algorithm::SelectionRecursive).unwrap();
        assert_eq!(trial.algorithm(), Algorithm::SelectionRecursive);
    }
}
