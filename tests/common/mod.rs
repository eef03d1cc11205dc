#![allow(dead_code)]

use std::collections::VecDeque;

use space_survival::logging::LogSink;
use space_survival::spawn::RandomSource;

/// Replays fixed draws and counts how many of each kind were consumed.
/// When a queue runs dry it falls back to `default_int` / `default_bool`.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<u32>,
    bools: VecDeque<bool>,
    pub default_int: u32,
    pub default_bool: bool,
    pub int_draws: usize,
    pub bool_draws: usize,
    pub bounds: Vec<u32>,
}

impl ScriptedRandom {
    pub fn new(ints: &[u32], bools: &[bool]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            bools: bools.iter().copied().collect(),
            default_int: 99,
            ..Self::default()
        }
    }

    /// Never spawns anything at low spawn rates.
    pub fn quiet() -> Self {
        Self::new(&[], &[])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.int_draws += 1;
        self.bounds.push(bound);
        let value = self.ints.pop_front().unwrap_or(self.default_int);
        value % bound
    }

    fn next_bool(&mut self) -> bool {
        self.bool_draws += 1;
        self.bools.pop_front().unwrap_or(self.default_bool)
    }
}

/// Keeps every gameplay line.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl LogSink for RecordingSink {
    fn log(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
