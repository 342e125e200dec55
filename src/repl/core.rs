use std::path::Path;

use reedline::{FileBackedHistory, Reedline, Signal};
use tracing::{error, info};

use super::highlight::LangHighlighter;
use super::prompt::LangPrompt;
use super::release::session_header;
use crate::error::{Error, Result};
use crate::lang::Session;

const HISTORY_SIZE: usize = 1000;

/// Interactive read-eval-print loop
///
/// Reads statements with a line editor until Ctrl-D. Evaluation errors are
/// reported and the loop continues.
///
pub fn repl(session: &mut Session, history: Option<&Path>) -> Result<()> {
    println!("{}", session_header());

    let history = if let Some(path) = history {
        info!(path = %path.display(), "restoring session history");
        FileBackedHistory::with_file(HISTORY_SIZE, path.to_path_buf())
            .map_err(|e| Error::History(e.to_string()))?
    } else {
        FileBackedHistory::new(HISTORY_SIZE)
    };

    let mut line_editor = Reedline::create()
        .with_validator(Box::new(super::validator::LangValidator))
        .with_highlighter(Box::new(LangHighlighter))
        .with_history(Box::new(history));

    let prompt = LangPrompt;

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                // skip all-whitespace entries
                if line.chars().all(char::is_whitespace) {
                    continue;
                }

                match session.run(&line) {
                    Ok(Some(value)) => println!("{value}"),
                    Ok(None) => (),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Ok(Signal::CtrlD) => break,
            Ok(Signal::CtrlC) => continue,
            Err(err) => {
                error!(%err, "line editor failed");
                break;
            }
        }
    }

    Ok(())
}
