use crate::cards::Card;
use crate::cards::Deck;
use crate::sorting::Algorithm;
use std::time::Duration;
use std::time::Instant;

/// One algorithm run on a private copy of a deck, with its wall-clock time.
#[derive(Debug, Clone)]
pub struct Trial {
    algorithm: Algorithm,
    output: Vec<Card>,
    elapsed: Duration,
}

impl Trial {
    /// Clones the deck, then times only the sort itself.
    pub fn run(algorithm: Algorithm, deck: &Deck) -> Self {
        let mut output = Vec::from(deck.clone());
        let start = Instant::now();
        algorithm.sort(&mut output);
        let elapsed = start.elapsed();
        if algorithm.is_recursive() {
            log::debug!("{} nested {} frames deep", algorithm.name(), output.len());
        }
        log::info!(
            "{:<32} sorted {} cards in {:?}",
            algorithm.name(),
            output.len(),
            elapsed
        );
        Self {
            algorithm,
            output,
            elapsed,
        }
    }
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    pub fn output(&self) -> &[Card] {
        &self.output
    }
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Waktu Running Time {}: {:.6} detik",
            self.algorithm,
            self.elapsed.as_secs_f64()
        )
    }
}
