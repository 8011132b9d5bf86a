use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Terminal styles; all plain when stdout is not a terminal
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub dim: Style,
    pub index: Style,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        let pick = |styled: Style| if color { styled } else { Style::new() };
        Self {
            header: pick(Style::new().cyan().bold()),
            success: pick(Style::new().green().bold()),
            error: pick(Style::new().red().bold()),
            dim: pick(Style::new().white().dimmed()),
            index: pick(Style::new().yellow()),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::new(console::Term::stdout().is_term()))
}
