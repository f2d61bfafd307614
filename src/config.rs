//! Configuration for the rules engine and its console.

use crate::constants::{Language, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Rules
    pub first_to_move: Side,

    // Presentation, read by the console only
    pub label_language: Language,
    pub colored_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_to_move: Side::Red,
            label_language: Language::English,
            colored_output: true,
        }
    }
}
