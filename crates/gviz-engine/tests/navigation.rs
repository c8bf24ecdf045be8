//! Slideshow Navigation Tests
//!
//! Walks the navigator through command sequences with a host that keeps a
//! log of every call, the way the page drives it.

use gviz_engine::{NavCommand, Navigator, SlideHost};

#[derive(Debug, Default)]
struct LogHost {
    log: Vec<String>,
}

impl SlideHost for LogHost {
    fn deactivate(&mut self, entry: usize) {
        self.log.push(format!("hide {}", entry));
    }

    fn activate(&mut self, entry: usize) {
        self.log.push(format!("show {}", entry));
    }

    fn show_counter(&mut self, counter: &str) {
        self.log.push(format!("counter {}", counter));
    }

    fn abbreviate(&mut self, entry: usize) {
        self.log.push(format!("abbrev {}", entry));
    }
}

#[test]
fn test_first_transition_order() {
    let mut host = LogHost::default();
    let mut nav = Navigator::new(3);

    nav.set_current(0, &mut host);

    assert_eq!(host.log, vec!["counter 1/3", "show 0", "abbrev 0"]);
}

#[test]
fn test_revisit_skips_abbreviation() {
    let mut host = LogHost::default();
    let mut nav = Navigator::new(3);
    nav.set_current(0, &mut host);
    nav.apply(NavCommand::Forward1, &mut host);
    host.log.clear();

    nav.apply(NavCommand::Back1, &mut host);

    assert_eq!(host.log, vec!["hide 1", "counter 1/3", "show 0"]);
}

#[test]
fn test_set_current_three_abbreviates_once() {
    let mut host = LogHost::default();
    let mut nav = Navigator::new(5);

    nav.set_current(3, &mut host);
    nav.set_current(3, &mut host);

    let passes = host.log.iter().filter(|l| *l == "abbrev 3").count();
    assert_eq!(passes, 1);
    assert_eq!(nav.counter(), "4/5");
}

#[test]
fn test_commands_serialize_snake_case() {
    let json = serde_json::to_string(&NavCommand::ALL).unwrap();
    assert_eq!(
        json,
        r#"["first","back10","back1","forward1","forward10","last"]"#
    );
}

#[test]
fn test_labels_are_distinct() {
    let labels: Vec<&str> = NavCommand::ALL.iter().map(|c| c.label()).collect();
    for (i, label) in labels.iter().enumerate() {
        assert!(!labels[i + 1..].contains(label), "duplicate label {}", label);
    }
}
