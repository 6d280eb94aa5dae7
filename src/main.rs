// SPDX-License-Identifier: MPL-2.0
use library_admin::app::{self, Command, Flags, HELP};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(Flags::default());
    }

    let assume_yes = args.contains(["-y", "--yes"]);
    let dump_diagnostics = args.contains("--diagnostics");
    let csrf = args.opt_value_from_str("--csrf")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let out_dir: Option<PathBuf> = args.opt_value_from_str("--out")?;

    let command = match args.subcommand()?.as_deref() {
        None | Some("help") => Command::Help,
        Some("theme") => {
            let toggle = args.subcommand()?.as_deref() == Some("toggle");
            Command::Theme { toggle }
        }
        Some("export") => Command::Export {
            html: args.free_from_str()?,
            out_dir,
        },
        Some("delete-book") => Command::DeleteBook {
            id: args.free_from_str()?,
            title: args.free_from_str()?,
        },
        Some("delete-category") => Command::DeleteCategory {
            id: args.free_from_str()?,
            name: args.free_from_str()?,
        },
        Some("toggle-user") => Command::ToggleUser {
            id: args.free_from_str()?,
        },
        Some("mark-all-read") => Command::MarkAllRead,
        Some(other) => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown command '{other}'"),
            })
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {}", join(&rest)),
        });
    }

    Ok(Flags {
        command,
        assume_yes,
        csrf,
        dump_diagnostics,
        data_dir,
        config_dir,
    })
}

fn join(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
