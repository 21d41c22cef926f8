#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::rc::Rc;

use yew::Reducible;

/// Position of a cyclic carousel over `len` items (`len >= 1`).
///
/// Both the autoplay timer and the manual controls go through the same
/// reducer, so there is no separate paused state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        assert!(len >= 1, "carousel needs at least one item");
        Self { index: 0, len }
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Out-of-range targets leave the state untouched.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Indices of the `size` consecutive items starting at the current
    /// one, wrapping past the end of the sequence.
    pub fn window(&self, size: usize) -> Vec<usize> {
        (0..size).map(|offset| (self.index + offset) % self.len).collect()
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = *self;
        Rc::new(match action {
            CarouselAction::Next => state.next(),
            CarouselAction::Previous => state.previous(),
            CarouselAction::GoTo(index) => state.go_to(index),
        })
    }
}

/// FAQ accordion: at most one entry open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<usize>,
}

impl AccordionState {
    pub fn toggled(self, index: usize) -> Self {
        Self {
            open: if self.open == Some(index) {
                None
            } else {
                Some(index)
            },
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Lifecycle of the single in-flight contact submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}
