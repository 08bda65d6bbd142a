use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        help = "Number of cards to generate",
        default_value_t = crate::DECK_SIZE,
        value_parser = size
    )]
    pub size: usize,
    #[arg(long, help = "Print the decks without asking", conflicts_with = "hide")]
    pub show: bool,
    #[arg(long, help = "Skip the decks without asking")]
    pub hide: bool,
    #[arg(long, help = "Shuffle the generated deck before sorting")]
    pub shuffle: bool,
    #[arg(long, help = "Color suit symbols in the card layout")]
    pub color: bool,
    #[arg(short, long, help = "Log progress to stderr (repeat for more)", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The display answer given on the command line, if any.
    pub fn display(&self) -> Option<bool> {
        match (self.show, self.hide) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn size(s: &str) -> Result<usize, String> {
    let n = s
        .parse::<usize>()
        .map_err(|_| format!("not a card count: {}", s))?;
    match n {
        n if n <= crate::MAX_DECK_SIZE => Ok(n),
        n => Err(format!("at most {} cards, got {}", crate::MAX_DECK_SIZE, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("remisort").chain(argv.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.size, 250);
        assert_eq!(args.display(), None);
        assert!(!args.shuffle);
        assert!(!args.color);
        assert_eq!(args.level(), log::LevelFilter::Warn);
    }

    #[test]
    fn display_flags() {
        assert_eq!(parse(&["--show"]).unwrap().display(), Some(true));
        assert_eq!(parse(&["--hide"]).unwrap().display(), Some(false));
        assert!(parse(&["--show", "--hide"]).is_err());
    }

    #[test]
    fn size_bounds() {
        assert_eq!(parse(&["--size", "0"]).unwrap().size, 0);
        assert_eq!(parse(&["--size", "10000"]).unwrap().size, 10_000);
        assert!(parse(&["--size", "10001"]).is_err());
        assert!(parse(&["--size", "-3"]).is_err());
        assert!(parse(&["--size", "many"]).is_err());
    }

    #[test]
    fn verbosity() {
        assert_eq!(parse(&["-v"]).unwrap().level(), log::LevelFilter::Info);
        assert_eq!(parse(&["-vv"]).unwrap().level(), log::LevelFilter::Debug);
    }
}
