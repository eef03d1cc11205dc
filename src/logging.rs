//! Gameplay message sinks
//!
//! `GameState` and `GameController` write human-readable gameplay lines to a
//! `LogSink`.  These are player-facing messages (hits, level-ups, pauses), kept
//! apart from the `log` facade used for diagnostics.

use std::collections::VecDeque;

/// A single-method text sink.
pub trait LogSink {
    fn log(&mut self, text: &str);
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, text: &str) {
        (**self).log(text);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&mut self, text: &str) {
        (**self).log(text);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&mut self, _text: &str) {}
}

/// Forwards gameplay lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn log(&mut self, text: &str) {
        log::info!(target: "gameplay", "{text}");
    }
}

/// Default number of lines kept by `MessageLog`
pub const DEFAULT_MESSAGE_CAPACITY: usize = 6;

/// Bounded buffer of recent messages, newest last.  Drawn by the terminal HUD
/// and convenient as a test double.
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MESSAGE_CAPACITY)
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LogSink for MessageLog {
    fn log(&mut self, text: &str) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(text.to_string());
    }
}
