//! Where the magic happens for `usbwatch` binary!
use clap::Parser;
use std::path::PathBuf;

use usbwatch::config::Config;
use usbwatch::error::Result;
use usbwatch::platform::Platform;
use usbwatch::source;
use usbwatch::watch::{LogReporter, Monitor};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seconds between polls of the device listing
    #[arg(short, long)]
    interval: Option<u64>,

    /// Force the listing tool rather than detecting from host
    #[arg(short, long, value_enum)]
    platform: Option<Platform>,

    /// Path to user config file to use, defaults to the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable coloured output, can also use NO_COLOR environment variable
    #[arg(long, default_value_t = false)]
    no_colour: bool,

    /// Disable padding of device table columns
    #[arg(long, default_value_t = false)]
    no_padding: bool,

    /// Turn debugging information on. Alternatively can use RUST_LOG env: INFO, DEBUG, TRACE
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn merge_args(mut config: Config, args: &Args) -> Config {
    if let Some(interval) = args.interval {
        config.interval = interval;
    }
    if args.platform.is_some() {
        config.platform = args.platform;
    }
    config.no_colour |= args.no_colour || std::env::var_os("NO_COLOR").is_some();
    config.no_padding |= args.no_padding;
    config
}

fn run(args: Args) -> Result<()> {
    usbwatch::set_log_level(args.verbose)?;

    let config = match args.config.as_ref() {
        Some(path) => Config::from_file(path)?,
        None => Config::sys()?,
    };
    let config = merge_args(config, &args);
    config.validate()?;
    log::debug!("Running with {:?}", config);

    if config.no_colour {
        colored::control::set_override(false);
    }

    let source = source::from_platform(config.platform());
    let reporter = LogReporter::new(config.print_settings());
    Monitor::new(source, reporter, config.interval()).run()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
