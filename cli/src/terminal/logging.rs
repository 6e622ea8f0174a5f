use colored::*;
use housing_common::SUCCESS_TARGET;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct HousingFormatter;

impl<S, N> FormatEvent<S, N> for HousingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[+]", |s| s.green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[*]", |s| s.cyan()),
                    Level::WARN => ("[!]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Maps the number of `-v` flags to the most detailed level that gets printed.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so they never end up
/// in the middle of the menu.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .event_format(HousingFormatter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {err}"))
}
