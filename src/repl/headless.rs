use std::io::{BufRead, Write};

use crate::error::Result;
use crate::lang::{is_incomplete, Session};

/// Evaluate statements read from `input`, writing results to `output`
///
/// Lines are gathered until they form a complete statement, as they would be
/// in the interactive line editor. The first failing statement stops
/// evaluation and its error is returned.
///
/// ```
/// use lazyvec::lang::Session;
/// use lazyvec::repl::headless;
///
/// let script = "v1 <- c(1, 2, 3)\nv2 <- c(6, 3,\n  1)\nv1 + v2\n";
/// let mut output = Vec::new();
/// headless(&mut Session::default(), script.as_bytes(), &mut output)?;
/// assert_eq!(String::from_utf8(output).unwrap(), "[7, 5, 4]\n");
/// # Ok::<(), lazyvec::error::Error>(())
/// ```
///
pub fn headless<R, W>(session: &mut Session, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buffer = String::new();
    for line in input.lines() {
        let line = line?;
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(&line);

        if is_incomplete(&buffer) {
            continue;
        }

        if let Some(value) = session.run(&buffer)? {
            writeln!(output, "{value}")?;
        }
        buffer.clear();
    }

    // trailing input that never completed
    if !buffer.trim().is_empty() {
        session.run(&buffer)?;
    }

    Ok(())
}
