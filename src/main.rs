// SPDX-License-Identifier: MPL-2.0
use tearing_overlay::app::{self, Flags};

const HELP: &str = "\
Tearing test overlay

USAGE:
  tearing_overlay [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Directory containing settings.toml
  --detached          Run without a host (receiver calls fail, no signals)
  -h, --help          Print this help

Receiver calls are written to stdout and tearing signals are read from
stdin, one JSON document per line. Logs go to stderr (see RUST_LOG).
";

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        eprint!("{HELP}");
        return Ok(());
    }

    init_logging();

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            tracing::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    let flags = Flags {
        config_dir,
        detached: args.contains("--detached"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}
