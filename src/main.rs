// SPDX-License-Identifier: MPL-2.0
use iced_message::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let verbose = args.contains(["-v", "--verbose"]);
    setup_tracing(verbose);

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        placement: opt_arg(&mut args, "--placement"),
        animation: opt_arg(&mut args, "--animation"),
        theme: opt_arg(&mut args, "--theme"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

/// Reads an optional flag, logging and ignoring values that do not parse.
fn opt_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, %err, "invalid command-line value");
            None
        }
    }
}

fn setup_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .init();
}
