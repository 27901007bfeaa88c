//! adbmux CLI - run one adb command on every attached Android device
//!
//! Usage: adbmux [OPTIONS] <COMMAND>
//!
//! Runs `adb -s <serial> <COMMAND>` on each online device. With `--watch`
//! it keeps polling and runs the command on devices that connect or change
//! state, until Ctrl+C.

use std::process::ExitCode;

use clap::Parser;

use adbmux::config::load_layered;
use adbmux::Config;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::Cli;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // a broken config file is reported with default output settings
    let loaded = match load_layered() {
        Ok(loaded) => loaded,
        Err(err) => {
            let ui = UiContext::new(cli.no_color, &Config::default());
            ui::error::print_error(&anyhow::Error::new(err), ui.color, ui.unicode);
            return ExitCode::FAILURE;
        }
    };
    let ui = UiContext::new(cli.no_color, &loaded.config);

    match commands::run::cmd_run(&cli, loaded, ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, ui.color, ui.unicode);
            ExitCode::FAILURE
        }
    }
}
