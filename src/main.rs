use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use folio_wm::constants::TERMINAL_BREAKPOINT;
use folio_wm::content::{ContentId, Locale};
use folio_wm::desktop::Desktop;
use folio_wm::drivers::console::{ConsoleInputDriver, ConsoleSession};
use folio_wm::runner::run_desktop;
use folio_wm::tracing_sub;
use folio_wm::viewport::ViewportConfig;

const AFTER_HELP: &str = indoc! {"
    Windows:
      aboutMe projects experiences languages studies games contact videos

    Controls:
      click an icon or a taskbar button   open and focus a window
      drag a header                       move the window
      drag a corner                       resize the window
      double-click a header               maximize or restore
      l, or the [ES]/[EN] button          switch language
      q, Ctrl-Q, Ctrl-C                   quit
"};

#[derive(Debug, Parser)]
#[command(name = "folio-wm", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Interface language.
    #[arg(long, default_value = "es")]
    locale: Locale,

    /// Terminal widths at or below this many columns force every window
    /// full-screen.
    #[arg(long, default_value_t = TERMINAL_BREAKPOINT)]
    breakpoint: u16,

    /// Open a window at startup. Repeat to open several; the last one is
    /// focused.
    #[arg(long = "open", value_name = "ID")]
    open: Vec<ContentId>,

    /// Write debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init_default(cli.log_file.as_deref())?;

    let (width, height) = crossterm::terminal::size()?;
    let config = ViewportConfig::TERMINAL.with_breakpoint(cli.breakpoint);
    let mut desktop = Desktop::new(config, width, height, cli.locale);
    for id in &cli.open {
        if let Err(err) = desktop.open(*id) {
            tracing::warn!(%err, "startup window skipped");
        }
    }
    tracing::info!(width, height, locale = cli.locale.code(), "desktop starting");

    let mut session = ConsoleSession::new()?;
    session.enter()?;
    let result: io::Result<()> = run_desktop(
        session.terminal(),
        ConsoleInputDriver::new(),
        &mut desktop,
        Duration::from_millis(16),
    );
    let restored = session.exit();
    first_error(result, restored)
}

/// The desktop's own failure wins over a teardown failure; the latter is
/// only logged in that case.
fn first_error(run: io::Result<()>, teardown: io::Result<()>) -> io::Result<()> {
    match (run, teardown) {
        (Err(err), Err(teardown_err)) => {
            tracing::error!(%teardown_err, "terminal restore failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), teardown) => teardown,
    }
}
