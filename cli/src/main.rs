use std::io;

use housing_cli::commands::CommandLine;
use housing_cli::commands::session::Session;
use housing_cli::terminal::{logging, print};
use housing_common::config::{Config, LedgerPolicy};
use housing_common::success;
use housing_core::registry::Registry;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        verbosity: commands.verbose,
        no_banner: commands.no_banner,
        ledger: LedgerPolicy::default(),
    };

    logging::init_logging(cfg.verbosity)?;
    print::initialize();

    let mut stdout = io::stdout().lock();
    print::banner(&mut stdout, cfg.no_banner)?;

    let mut session = Session::new(Registry::new(cfg.ledger), io::stdin().lock(), stdout);
    session.run()?;

    success!(residents = session.registry().len(), "session closed");
    Ok(())
}
