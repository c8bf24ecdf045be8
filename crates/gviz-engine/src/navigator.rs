//! Slideshow navigation over log entries.
//!
//! The navigator owns only the current index and the set of entries that
//! have been abbreviated already. Everything visible (entry flags, the
//! counter, the abbreviation pass itself) goes through [`SlideHost`], which
//! keeps the state machine testable without a document.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The six slideshow commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    First,
    Back10,
    Back1,
    Forward1,
    Forward10,
    Last,
}

impl NavCommand {
    pub const ALL: [NavCommand; 6] = [
        NavCommand::First,
        NavCommand::Back10,
        NavCommand::Back1,
        NavCommand::Forward1,
        NavCommand::Forward10,
        NavCommand::Last,
    ];

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            NavCommand::First => "|\u{21c7}",
            NavCommand::Back10 => "\u{21c7}",
            NavCommand::Back1 => "\u{2190}",
            NavCommand::Forward1 => "\u{2192}",
            NavCommand::Forward10 => "\u{21c9}",
            NavCommand::Last => "\u{21c9}|",
        }
    }
}

/// Rendering side of the slideshow.
pub trait SlideHost {
    /// Hide entry `entry`.
    fn deactivate(&mut self, entry: usize);
    /// Show entry `entry`.
    fn activate(&mut self, entry: usize);
    /// Display the `"{n}/{total}"` counter.
    fn show_counter(&mut self, counter: &str);
    /// Run the abbreviation pass on `entry`. Called at most once per entry.
    fn abbreviate(&mut self, entry: usize);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    current: Option<usize>,
    processed: Vec<bool>,
}

impl Navigator {
    /// A navigator over `len` entries, before any entry is shown.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            processed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the shown entry; `None` until the first transition.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_processed(&self, entry: usize) -> bool {
        self.processed.get(entry).copied().unwrap_or(false)
    }

    pub fn counter(&self) -> String {
        let shown = self.current.map_or(0, |i| i + 1);
        format!("{}/{}", shown, self.len)
    }

    /// Show entry `index`, clamped to the last entry.
    pub fn set_current<H: SlideHost + ?Sized>(&mut self, index: usize, host: &mut H) {
        if self.len == 0 {
            host.show_counter(&self.counter());
            return;
        }

        let index = index.min(self.len - 1);
        if let Some(previous) = self.current {
            host.deactivate(previous);
        }
        self.current = Some(index);
        host.show_counter(&self.counter());
        host.activate(index);

        if !self.processed[index] {
            self.processed[index] = true;
            host.abbreviate(index);
        }
        debug!(entry = index, total = self.len, "slideshow moved");
    }

    /// Move by `delta` entries, saturating at both ends.
    pub fn adjust_current<H: SlideHost + ?Sized>(&mut self, delta: isize, host: &mut H) {
        if self.len == 0 {
            host.show_counter(&self.counter());
            return;
        }

        let base = self.current.map_or(-1, |i| i as isize);
        let last = (self.len - 1) as isize;
        let target = base.saturating_add(delta).clamp(0, last);
        self.set_current(target as usize, host);
    }

    pub fn apply<H: SlideHost + ?Sized>(&mut self, command: NavCommand, host: &mut H) {
        match command {
            NavCommand::First => self.set_current(0, host),
            NavCommand::Back10 => self.adjust_current(-10, host),
            NavCommand::Back1 => self.adjust_current(-1, host),
            NavCommand::Forward1 => self.adjust_current(1, host),
            NavCommand::Forward10 => self.adjust_current(10, host),
            NavCommand::Last => self.set_current(self.len.saturating_sub(1), host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingHost {
        active: Option<usize>,
        counter: String,
        abbreviated: Vec<usize>,
        deactivated: Vec<usize>,
    }

    impl SlideHost for RecordingHost {
        fn deactivate(&mut self, entry: usize) {
            self.deactivated.push(entry);
            if self.active == Some(entry) {
                self.active = None;
            }
        }

        fn activate(&mut self, entry: usize) {
            self.active = Some(entry);
        }

        fn show_counter(&mut self, counter: &str) {
            self.counter = counter.to_string();
        }

        fn abbreviate(&mut self, entry: usize) {
            self.abbreviated.push(entry);
        }
    }

    #[test]
    fn test_starts_before_first_entry() {
        let nav = Navigator::new(5);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.counter(), "0/5");
    }

    #[test]
    fn test_adjust_saturates_at_zero() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(5);
        nav.set_current(2, &mut host);

        nav.adjust_current(-10, &mut host);

        assert_eq!(nav.current(), Some(0));
        assert_eq!(host.counter, "1/5");
        assert_eq!(host.active, Some(0));
    }

    #[test]
    fn test_adjust_saturates_at_end() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(5);
        nav.set_current(0, &mut host);

        nav.apply(NavCommand::Forward10, &mut host);
        assert_eq!(nav.current(), Some(4));
        assert_eq!(host.counter, "5/5");
    }

    #[test]
    fn test_set_current_clamps() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(3);
        nav.set_current(99, &mut host);
        assert_eq!(nav.current(), Some(2));
    }

    #[test]
    fn test_abbreviates_each_entry_once() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(5);
        nav.set_current(0, &mut host);
        nav.set_current(3, &mut host);
        nav.set_current(3, &mut host);
        nav.set_current(1, &mut host);
        nav.set_current(3, &mut host);

        assert_eq!(host.abbreviated, vec![0, 3, 1]);
        assert!(nav.is_processed(3));
        assert!(!nav.is_processed(4));
    }

    #[test]
    fn test_previous_entry_is_deactivated() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(4);
        nav.set_current(0, &mut host);
        nav.apply(NavCommand::Forward1, &mut host);
        nav.apply(NavCommand::Last, &mut host);

        assert_eq!(host.deactivated, vec![0, 1]);
        assert_eq!(host.active, Some(3));
    }

    #[test]
    fn test_commands_from_initial_state() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(30);
        nav.apply(NavCommand::Forward10, &mut host);
        assert_eq!(nav.current(), Some(9));

        nav.apply(NavCommand::Back1, &mut host);
        assert_eq!(nav.current(), Some(8));

        nav.apply(NavCommand::Back10, &mut host);
        assert_eq!(nav.current(), Some(0));

        nav.apply(NavCommand::Last, &mut host);
        assert_eq!(nav.current(), Some(29));

        nav.apply(NavCommand::First, &mut host);
        assert_eq!(nav.current(), Some(0));
    }

    #[test]
    fn test_no_entries() {
        let mut host = RecordingHost::default();
        let mut nav = Navigator::new(0);
        for command in NavCommand::ALL {
            nav.apply(command, &mut host);
        }
        assert_eq!(nav.current(), None);
        assert_eq!(host.counter, "0/0");
        assert!(host.abbreviated.is_empty());
    }
}
