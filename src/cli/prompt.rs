use crate::PROMPT;
use console::Term;
use dialoguer::Input;
use std::io::IsTerminal;

/// Asks whether to print the decks. Anything but `y` means no, and so does
/// an unreadable answer.
pub fn ask() -> bool {
    match answer() {
        Ok(answer) => accepts(&answer),
        Err(e) => {
            log::warn!("no answer read, cards stay hidden: {}", e);
            false
        }
    }
}

/// Case-insensitive `y`, surrounding whitespace ignored.
pub fn accepts(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Where the question is written: stdout, alongside the report.
fn screen() -> Term {
    Term::stdout()
}

fn answer() -> anyhow::Result<String> {
    let screen = screen();
    if std::io::stdin().is_terminal() {
        Ok(Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .report(false)
            .interact_text_on(&screen)?)
    } else {
        screen.write_str(&format!("{}: ", PROMPT))?;
        screen.flush()?;
        let mut buffer = String::new();
        std::io::stdin().read_line(&mut buffer)?;
        Ok(buffer)
    }
}
