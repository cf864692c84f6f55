use std::cell::RefCell;
use std::rc::Rc;

use rl_jira::prelude::*;

/// Mock OutcomeReporter for testing
///
/// Captures messages instead of printing; clones share the capture buffer.
#[derive(Clone, Default)]
pub struct MockOutcomeReporter {
    infos: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl MockOutcomeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn has_info_containing(&self, needle: &str) -> bool {
        self.infos.borrow().iter().any(|m| m.contains(needle))
    }
}

impl OutcomeReporter for MockOutcomeReporter {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn debug(&self, _message: &str) {}
}
