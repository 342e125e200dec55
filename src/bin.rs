use clap::Parser;
use tracing_subscriber::EnvFilter;

use lazyvec::cli::Cli;
use lazyvec::error::Result;
use lazyvec::lang::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::from(&cli);

    if !cli.exprs.is_empty() {
        for expr in &cli.exprs {
            if let Some(value) = session.run(expr)? {
                println!("{value}");
            }
        }
        return Ok(());
    }

    interactive(&mut session, &cli)
}

#[cfg(feature = "repl")]
fn interactive(session: &mut Session, cli: &Cli) -> Result<()> {
    use std::io::IsTerminal;

    if std::io::stdin().is_terminal() {
        lazyvec::repl::repl(session, cli.history.as_deref())
    } else {
        lazyvec::repl::headless(session, std::io::stdin().lock(), std::io::stdout().lock())
    }
}

#[cfg(not(feature = "repl"))]
fn interactive(session: &mut Session, _cli: &Cli) -> Result<()> {
    lazyvec::repl::headless(session, std::io::stdin().lock(), std::io::stdout().lock())
}
