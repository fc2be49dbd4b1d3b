use crate::app::report::{render_comparison, render_results};
use crate::core::session::{ComparisonSession, SearchOutcome};
use crate::domain::model::SearchType;
use crate::domain::ports::TitleSource;
use crate::utils::error::{CompareError, Result};
use std::io::Write;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
Commands:
  search <text>          search titles
  type <all|movie|series> set the type filter
  next | prev            change result page
  pick <n>               add result #n to the comparison
  select <imdbID>        add a title by id
  clear                  empty both comparison slots
  show                   print the comparison
  help                   this text
  quit                   leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Type(SearchType),
    Next,
    Previous,
    Pick(usize),
    Select(String),
    Clear,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CompareError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let invalid = |message: String| CompareError::InvalidInput { message };

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" if !rest.is_empty() => Ok(SessionCommand::Search(rest.to_string())),
            "search" | "s" => Err(invalid("Usage: search <text>".to_string())),
            "type" => rest
                .parse()
                .map(SessionCommand::Type)
                .map_err(invalid),
            "next" | "n" => Ok(SessionCommand::Next),
            "prev" | "p" => Ok(SessionCommand::Previous),
            "pick" => rest
                .parse()
                .map(SessionCommand::Pick)
                .map_err(|_| invalid(format!("Usage: pick <n>, got '{}'", rest))),
            "select" if !rest.is_empty() => Ok(SessionCommand::Select(rest.to_string())),
            "select" => Err(invalid("Usage: select <imdbID>".to_string())),
            "clear" => Ok(SessionCommand::Clear),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(invalid(format!("Unknown command '{}'", other))),
        }
    }
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run_interactive<S, R, W>(
    session: &mut ComparisonSession<S>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: TitleSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "{}", HELP)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e.user_friendly_message())?;
                continue;
            }
        };
        tracing::debug!("Command: {:?}", command);

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => write!(out, "{}", HELP)?,
            SessionCommand::Type(search_type) => {
                session.set_search_type(search_type);
                writeln!(out, "Type filter: {}", search_type)?;
            }
            SessionCommand::Search(query) => {
                session.set_query(query);
                let outcome = session.search(1).await;
                report_search(session, outcome, out)?;
            }
            SessionCommand::Next => {
                let outcome = session.next_page().await;
                report_search(session, outcome, out)?;
            }
            SessionCommand::Previous => {
                let outcome = session.previous_page().await;
                report_search(session, outcome, out)?;
            }
            SessionCommand::Pick(position) => match session.select_result(position).await {
                Ok(outcome) => report_selection(session, outcome.map(|o| o.completed), out)?,
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            },
            SessionCommand::Select(imdb_id) => {
                let outcome = session.select(&imdb_id).await;
                report_selection(session, outcome.map(|o| o.completed), out)?;
            }
            SessionCommand::Clear => {
                session.clear();
                writeln!(out, "Comparison cleared")?;
            }
            SessionCommand::Show => write!(out, "{}", render_comparison(session.slots())?)?,
        }
    }

    Ok(())
}

fn report_search<S: TitleSource, W: Write>(
    session: &ComparisonSession<S>,
    outcome: SearchOutcome,
    out: &mut W,
) -> Result<()> {
    match outcome {
        SearchOutcome::Loaded { .. } => {
            write!(out, "{}", render_results(session.results(), session.pagination()))?
        }
        SearchOutcome::Skipped => writeln!(out, "Nothing to do")?,
        SearchOutcome::Stale => {}
        SearchOutcome::NoResults | SearchOutcome::Failed => {
            if let Some(message) = session.message() {
                writeln!(out, "{}", message)?;
            }
        }
    }
    Ok(())
}

/// Prints the full comparison the moment it becomes complete.
fn report_selection<S: TitleSource, W: Write>(
    session: &ComparisonSession<S>,
    completed: Option<bool>,
    out: &mut W,
) -> Result<()> {
    match completed {
        Some(true) => write!(out, "{}", render_comparison(session.slots())?)?,
        Some(false) => {
            for (i, slot) in session.slots().as_array().into_iter().enumerate() {
                if let Some(title) = slot {
                    writeln!(out, "Slot {}: {} ({})", i + 1, title.title, title.year)?;
                }
            }
        }
        None => {
            if let Some(message) = session.message() {
                writeln!(out, "{}", message)?;
            }
        }
    }
    Ok(())
}
