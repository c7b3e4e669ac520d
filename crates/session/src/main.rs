use clap::Parser;

use fridgekeep_observability::LogFormat;
use fridgekeep_session::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.pretty {
        fridgekeep_observability::init_with(LogFormat::Pretty, "info");
    } else {
        fridgekeep_observability::init();
    }

    cli::run(&args, std::io::stdin().lock(), std::io::stdout().lock())
}
