//! The `remisort` command: ask, generate, race, report.
pub mod args;
pub use args::*;

pub mod prompt;
pub use prompt::*;

use crate::cards::Deck;
use crate::report::Layout;
use crate::report::Race;
use crate::sorting::Algorithm;
use std::io::Write;

/// Runs the whole command against stdout.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let display = args.display().unwrap_or_else(ask);
    let mut deck = Deck::new(args.size);
    if args.shuffle {
        deck.shuffle();
    }
    log::info!("generated {} cards", deck.len());
    let ref mut stdout = std::io::stdout().lock();
    write(stdout, &deck, display, args.color)?;
    Ok(())
}

/// Races every algorithm on `deck` and writes the report. When `display`
/// is set the deck is printed before and after sorting; the sorted copy
/// shown is the iterative selection sort's.
pub fn write<W: Write>(w: &mut W, deck: &Deck, display: bool, color: bool) -> anyhow::Result<Race> {
    match display {
        true => {
            writeln!(w, "\nData Kartu Sebelum Diurutkan:")?;
            write!(w, "{}", Layout::new(deck.cards()).colored(color))?;
        }
        false => writeln!(w, "\nUser memilih untuk tidak menampilkan data kartu")?,
    }
    let race = Race::run(deck);
    match race.agrees() {
        true => log::debug!("all {} algorithms agree", race.trials().len()),
        false => log::error!("algorithms disagree on a {} card deck", deck.len()),
    }
    if display {
        if let Some(trial) = race.get(Algorithm::SelectionIterative) {
            writeln!(w, "\nHasil Kartu Setelah Diurutkan:")?;
            write!(w, "{}", Layout::new(trial.output()).colored(color))?;
        }
    }
    writeln!(w)?;
    for trial in race.trials() {
        writeln!(w, "{}", trial)?;
    }
    w.flush()?;
    Ok(race)
}
