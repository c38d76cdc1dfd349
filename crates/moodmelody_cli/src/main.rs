//! Terminal host for a Mood Melody session.
//!
//! # Responsibility
//! - Translate stdin command lines into session events.
//! - Render the draft and the melody list as plain text.
//!
//! # Invariants
//! - All state lives in one `Session`; this loop only owns it across events.
//! - The clear-all confirmation reads from the same input stream.

use log::{debug, warn};
use moodmelody_core::{
    init_logging_from_config, ConfirmPrompt, CoreConfig, EventOutcome, InMemoryMelodyStore,
    Melody, Session, SessionEvent, EMPTY_STORE_MESSAGE,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const HELP_TEXT: &str = "\
commands:
  title <text>     set the draft title
  content <text>   set the draft content
  tags <text>      set the raw tag text (comma or space separated)
  draft            show the current draft
  save             save the draft as a melody
  list             show saved melodies, newest first
  clear            clear all melodies (asks first)
  help             show this text
  quit | exit      end the session";

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Event(SessionEvent),
    ShowDraft,
    List,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\n', '\r']);
    // One separator character after the command word; the rest is verbatim.
    let (word, rest) = match line
        .trim_start()
        .split_once(|ch: char| ch.is_ascii_whitespace())
    {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    match word {
        "" => Command::Blank,
        "title" => Command::Event(SessionEvent::TitleChanged(rest.to_string())),
        "content" => Command::Event(SessionEvent::ContentChanged(rest.to_string())),
        "tags" => Command::Event(SessionEvent::TagsChanged(rest.to_string())),
        "save" => Command::Event(SessionEvent::Submit),
        "clear" => Command::Event(SessionEvent::ClearAll),
        "draft" => Command::ShowDraft,
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Yes/no prompt over the shell's own input and output.
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    io_error: Option<io::Error>,
}

impl<R: BufRead, W: Write> ConfirmPrompt for LinePrompt<'_, R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        let mut answer = String::new();
        let result = write!(self.output, "{message} [y/N] ")
            .and_then(|()| self.output.flush())
            .and_then(|()| self.input.read_line(&mut answer));
        match result {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                self.io_error = Some(err);
                false
            }
        }
    }
}

fn render_melody(output: &mut impl Write, melody: &Melody) -> io::Result<()> {
    writeln!(output, "## {}", melody.title())?;
    writeln!(output, "{}", melody.content())?;
    if !melody.tags().is_empty() {
        writeln!(output, "{}", melody.tags().join(" "))?;
    }
    writeln!(output, "   {}", melody.created_at())
}

fn render_list(output: &mut impl Write, session: &Session) -> io::Result<()> {
    let melodies = session.melodies();
    if melodies.is_empty() {
        return writeln!(output, "{EMPTY_STORE_MESSAGE}");
    }
    for melody in melodies {
        render_melody(output, melody)?;
        writeln!(output)?;
    }
    Ok(())
}

fn render_outcome(output: &mut impl Write, outcome: &EventOutcome) -> io::Result<()> {
    match outcome {
        EventOutcome::DraftUpdated => Ok(()),
        EventOutcome::Saved(melody) => {
            writeln!(output, "saved:")?;
            render_melody(output, melody)
        }
        EventOutcome::Rejected(err) => writeln!(output, "{err}"),
        EventOutcome::Cleared { removed } => writeln!(output, "cleared {removed} melodies"),
        EventOutcome::ClearDeclined => writeln!(output, "nothing cleared"),
    }
}

/// Runs the event loop until `quit` or end of input.
fn run(session: &mut Session, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Mood Melody. Type `help` for commands.")?;
    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Blank => {}
            Command::Help => writeln!(output, "{HELP_TEXT}")?,
            Command::Quit => break,
            Command::List => render_list(&mut output, session)?,
            Command::ShowDraft => {
                let draft = session.draft();
                writeln!(output, "title:   {}", draft.title)?;
                writeln!(output, "content: {}", draft.content)?;
                writeln!(output, "tags:    {}", draft.tags_raw)?;
            }
            Command::Unknown(word) => {
                debug!("event=unknown_command module=cli status=ignored");
                writeln!(output, "unknown command `{word}`; type `help`")?;
            }
            Command::Event(event) => {
                let mut prompt = LinePrompt {
                    input: &mut input,
                    output: &mut output,
                    io_error: None,
                };
                let outcome = session.dispatch(event, &mut prompt);
                if let Some(err) = prompt.io_error.take() {
                    return Err(err);
                }
                render_outcome(&mut output, &outcome)?;
            }
        }
    }
    writeln!(output, "bye")
}

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("moodmelody: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("moodmelody: logging disabled: {err}");
    }
    let clock = match config.clock() {
        Ok(clock) => clock,
        Err(err) => {
            eprintln!("moodmelody: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::with_parts(InMemoryMelodyStore::new(), clock);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut session, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=cli_io_failed module=cli status=error error={err}");
            eprintln!("moodmelody: {err}");
            ExitCode::FAILURE
        }
    }
}
