use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Offline,
    Run,
    Watch,
    Device,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Offline) => theme::icons::OFFLINE,
            (true, Icon::Run) => theme::icons::RUN,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Device) => theme::icons::DEVICE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Offline) => theme::icons_ascii::OFFLINE,
            (false, Icon::Run) => theme::icons_ascii::RUN,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Device) => theme::icons_ascii::DEVICE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Offline => theme::colors::DIM,
            Icon::Run | Icon::Watch | Icon::Device => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
