use crate::cards::Card;
use crate::cards::Suit;
use crate::COLUMNS;
use crate::LABEL_WIDTH;

/// Renders cards as fixed-width `[rank suit] ` cells, [`COLUMNS`] per line.
///
/// Every full line ends in a newline, and a trailing partial line gets one
/// too. An empty slice renders as nothing.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    cards: &'a [Card],
    color: bool,
}

impl<'a> Layout<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            color: false,
        }
    }
    /// Paint suit symbols: red suits red, black suits bold.
    pub fn colored(self, color: bool) -> Self {
        Self { color, ..self }
    }
    #[cfg(feature = "cli")]
    fn symbol(&self, suit: Suit) -> String {
        use colored::Colorize;
        match (self.color, suit.is_red()) {
            (false, _) => suit.symbol().to_string(),
            (true, true) => suit.symbol().red().to_string(),
            (true, false) => suit.symbol().bold().to_string(),
        }
    }
    #[cfg(not(feature = "cli"))]
    fn symbol(&self, suit: Suit) -> String {
        suit.symbol().to_string()
    }
}

impl std::fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            write!(
                f,
                "[{:<width$} {}] ",
                card.rank(),
                self.symbol(card.suit()),
                width = LABEL_WIDTH
            )?;
            if (i + 1) % COLUMNS == 0 {
                writeln!(f)?;
            }
        }
        if self.cards.len() % COLUMNS != 0 {
            writeln!(f)?;
        }
        Ok(())
    }
}
