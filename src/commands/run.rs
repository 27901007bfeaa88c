use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::debug;

use adbmux::config::{Config, LoadedConfig};
use adbmux::{normalize_command, AdbClient, MultiplexOptions, MultiplexUseCase};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::render_config_warnings;
use crate::ui::views::run::{render_mux_event, render_run_header};
use crate::ui::views::watch::{render_watch_event, timestamp};

pub fn cmd_run(cli: &Cli, loaded: LoadedConfig, ui: UiContext) -> Result<()> {
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "loaded config");
    }
    let config = apply_cli_overrides(loaded.config, cli);

    eprint!(
        "{}",
        render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
    );

    let options = MultiplexOptions::new(cli.command.as_str())
        .with_config(&config)
        .with_watch(cli.watch);
    let command = normalize_command(&options.command, &options.keyword);
    if command.is_empty() {
        bail!("no command given (nothing left after '{}')", cli.command.trim());
    }

    let interval_ms = options.interval.as_millis() as u64;
    // Set up Ctrl+C handler. Device commands run in their own process
    // group and never see the terminal's SIGINT, so `cancel` kills them.
    let running = Arc::new(AtomicBool::new(true));
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let running = running.clone();
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            running.store(false, Ordering::SeqCst);
            cancel.store(true, Ordering::SeqCst);
        })
        .context("failed to install Ctrl+C handler")?;
    }

    let client = AdbClient::from_config(&config.adb);
    let use_case = MultiplexUseCase::new(
        client.clone(),
        client.with_cancel(cancel.clone()),
        options,
    );

    print!(
        "{}",
        render_run_header(
            use_case.command(),
            cli.watch.then_some(interval_ms),
            ui.color,
            ui.unicode
        )
    );

    let watch = cli.watch;
    let (color, unicode) = (ui.color, ui.unicode);
    use_case.start(running, move |event| {
        let text = if watch {
            render_watch_event(&timestamp(), &event, color, unicode)
        } else {
            render_mux_event(&event, color, unicode)
        };
        if event.is_error() {
            eprint!("{text}");
        } else {
            print!("{text}");
        }
    })?;

    if !watch && cancel.load(Ordering::SeqCst) {
        bail!("interrupted");
    }
    Ok(())
}

/// CLI flags are the last layer on top of file and environment config
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(adb) = &cli.adb {
        config.adb.path = adb.to_string_lossy().into_owned();
    }
    if let Some(secs) = cli.timeout {
        config.adb.timeout_secs = secs;
    }
    if let Some(ms) = cli.interval {
        config.watch.interval_ms = ms;
    }
    config
}
