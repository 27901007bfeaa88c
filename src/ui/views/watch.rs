use adbmux::MuxEvent;

use crate::ui::views::run::render_mux_event;

/// Local wall-clock time as `HH:MM:SS`
pub fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Render an event for watch mode: the first line carries a `[HH:MM:SS]`
/// prefix, continuation lines are aligned under it.
pub fn render_watch_event(
    timestamp: &str,
    event: &MuxEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let body = render_mux_event(event, supports_color, supports_unicode);
    if body.is_empty() {
        return body;
    }

    let prefix = format!("[{}]", timestamp);
    let pad = " ".repeat(prefix.len());
    let mut out = String::new();
    if matches!(event, MuxEvent::Shutdown) {
        out.push('\n');
    }
    for (idx, line) in body.lines().enumerate() {
        let lead = if idx == 0 { prefix.as_str() } else { pad.as_str() };
        out.push_str(lead);
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out
}
