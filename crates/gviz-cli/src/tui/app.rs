use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gviz_engine::NavCommand;
use gviz_runtime::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    Continue,
    Quit,
}

pub(crate) struct SlideshowApp {
    page: Page,
    pub title: String,
    pub lines: Vec<String>,
    pub scroll: u16,
}

impl SlideshowApp {
    pub fn new(page: Page, title: String) -> Self {
        let lines = page.render_lines();
        Self {
            page,
            title,
            lines,
            scroll: 0,
        }
    }

    pub fn counter(&self) -> &str {
        self.page.counter()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        // Raw mode delivers Ctrl-C as a key, not as SIGINT.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        let code = key.code;
        if let Some(command) = command_for(code) {
            self.page.apply(command);
            self.lines = self.page.render_lines();
            self.clamp_scroll();
            return KeyOutcome::Continue;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                self.clamp_scroll();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn clamp_scroll(&mut self) {
        let last = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(last);
    }
}

/// Slideshow key bindings.
pub(crate) fn command_for(code: KeyCode) -> Option<NavCommand> {
    match code {
        KeyCode::Home | KeyCode::Char('g') => Some(NavCommand::First),
        KeyCode::PageUp | KeyCode::Char('[') => Some(NavCommand::Back10),
        KeyCode::Left | KeyCode::Char('h') => Some(NavCommand::Back1),
        KeyCode::Right | KeyCode::Char('l') => Some(NavCommand::Forward1),
        KeyCode::PageDown | KeyCode::Char(']') => Some(NavCommand::Forward10),
        KeyCode::End | KeyCode::Char('G') => Some(NavCommand::Last),
        _ => None,
    }
}

/// Key hint shown next to each command in the footer.
pub(crate) fn key_hint(command: NavCommand) -> &'static str {
    match command {
        NavCommand::First => "g",
        NavCommand::Back10 => "[",
        NavCommand::Back1 => "h",
        NavCommand::Forward1 => "l",
        NavCommand::Forward10 => "]",
        NavCommand::Last => "G",
    }
}
