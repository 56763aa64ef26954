// SPDX-License-Identifier: MPL-2.0
use message_bar::app::{self, Flags};

const HELP: &str = "\
message_bar - message bar demo

USAGE:
  message_bar [OPTIONS]

OPTIONS:
  --config-dir <DIR>          Read settings.toml from DIR
  --location <top|bottom>     Default edge for messages
  -h, --help                  Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        location: args.opt_value_from_str("--location")?,
    })
}
