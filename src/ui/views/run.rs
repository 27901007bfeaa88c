use std::fmt::Write as _;

use adbmux::{Device, MuxEvent, RunKind};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_run_header(
    command: &str,
    watch_interval_ms: Option<u64>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = if watch_interval_ms.is_some() {
        (Icon::Watch, "adbmux watch")
    } else {
        (Icon::Run, "adbmux")
    };
    let mut header = CommandHeader::new(icon, title);
    header.add("Command", format!("adb -s <device> {command}").trim_end().to_string());
    if let Some(ms) = watch_interval_ms {
        header.add("Interval", format!("{ms}ms"));
        header.add("Hint", "Press Ctrl+C to stop");
    }
    header.render(supports_color, supports_unicode)
}

/// Render one multiplexer event as one or more newline-terminated lines.
///
/// Returns an empty string for events with nothing to show.
pub fn render_mux_event(event: &MuxEvent, supports_color: bool, supports_unicode: bool) -> String {
    match event {
        MuxEvent::BatchStarted {
            kind,
            online,
            offline,
        } => render_batch_started(*kind, online, offline, supports_color, supports_unicode),
        MuxEvent::NoDevices { kind } => {
            let message = match kind {
                RunKind::Initial => "No online devices found",
                RunKind::Added | RunKind::Changed => "No online devices in this batch",
            };
            format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(message).render(supports_color)
            )
        }
        MuxEvent::CommandSucceeded { device, output } => {
            let mut out = format!(
                "{} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::plain(format!("Result for {}", device.label()))
                    .bold()
                    .render(supports_color)
            );
            if output.trim().is_empty() {
                out.push_str(&format!(
                    "  {}\n",
                    ColoredText::dim("(no output)").render(supports_color)
                ));
            } else {
                out.push_str(&indent(output));
            }
            out
        }
        MuxEvent::CommandFailed { device, error } => format!(
            "{} {}\n{}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("Failed on {}", device.label()))
                .bold()
                .render(supports_color),
            indent(&error.to_string())
        ),
        MuxEvent::BatchAborted { skipped, .. } => {
            let ids: Vec<&str> = skipped.iter().map(Device::id).collect();
            format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "Skipped {} remaining device(s): {}",
                    skipped.len(),
                    ids.join(", ")
                ))
                .render(supports_color)
            )
        }
        MuxEvent::WatchStarted { interval } => format!(
            "{} Watching for devices every {}ms\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            interval.as_millis()
        ),
        MuxEvent::DetectionFailed { error, stopping } => {
            let mut out = format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error(format!("Device detection failed: {error}"))
                    .render(supports_color)
            );
            if *stopping {
                out.push_str(&format!(
                    "  {}\n",
                    ColoredText::dim("Stopping watch (watch.stop_on_error = true)")
                        .render(supports_color)
                ));
            }
            out
        }
        MuxEvent::Shutdown => format!(
            "{} Watch stopped.\n",
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

fn render_batch_started(
    kind: RunKind,
    online: &[Device],
    offline: &[Device],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    if !online.is_empty() {
        let what = match kind {
            RunKind::Initial => "Running on",
            RunKind::Added => "New device(s), running on",
            RunKind::Changed => "Device(s) changed, running on",
        };
        let _ = writeln!(
            out,
            "{} {} {} device(s)",
            Icon::Device.colored(supports_color, supports_unicode),
            what,
            online.len()
        );
    }
    for device in offline {
        let _ = writeln!(
            out,
            "{} {}",
            Icon::Offline.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("Skipping {}", device.status_string())).render(supports_color)
        );
    }
    out
}

fn indent(text: &str) -> String {
    let mut out = String::new();
    for line in text.trim_end().lines() {
        let _ = writeln!(out, "  {line}");
    }
    out
}
