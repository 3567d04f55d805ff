//! Color configuration and bar styling

use ratatui::style::{Color, Modifier, Style};

/// Whether colored output is enabled.
///
/// Colors are on unless `--no-color` was passed or the `NO_COLOR`
/// environment variable is set. The active page keeps its bracket marker
/// either way, so state stays visible on monochrome output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve color enablement from the CLI flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        Self {
            enabled: !no_color_flag && std::env::var("NO_COLOR").is_err(),
        }
    }

    /// True when styled output should use colors.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Styles for the pagination bar's three button states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyles {
    normal: Style,
    active: Style,
    disabled: Style,
}

impl BarStyles {
    /// Styles honoring the given color configuration.
    ///
    /// With colors off every state renders with the default style and the
    /// bracket marker alone distinguishes the active page.
    pub fn with_color_config(color_config: ColorConfig) -> Self {
        if color_config.colors_enabled() {
            Self {
                normal: Style::default().fg(Color::White),
                active: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                normal: Style::default(),
                active: Style::default(),
                disabled: Style::default(),
            }
        }
    }

    /// Style for a button with the given state flags.
    pub fn style_for_button(&self, enabled: bool, active: bool) -> Style {
        if !enabled {
            self.disabled
        } else if active {
            self.active
        } else {
            self.normal
        }
    }
}

impl Default for BarStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}
