// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// UI-style events fed through wrappers in tests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestEvent {
    Click { x: u32, y: u32 },
    Key(char),
    Scroll(u32),
    Input(String),
}

impl Display for TestEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click { x, y } => write!(f, "Click[x={x}, y={y}]"),
            Self::Key(key) => write!(f, "Key[{key}]"),
            Self::Scroll(offset) => write!(f, "Scroll[{offset}]"),
            Self::Input(text) => write!(f, "Input[{text}]"),
        }
    }
}

#[must_use]
pub fn click_at(x: u32, y: u32) -> TestEvent {
    TestEvent::Click { x, y }
}

#[must_use]
pub fn key(key: char) -> TestEvent {
    TestEvent::Key(key)
}

#[must_use]
pub fn scroll(offset: u32) -> TestEvent {
    TestEvent::Scroll(offset)
}

#[must_use]
pub fn input(text: &str) -> TestEvent {
    TestEvent::Input(text.to_string())
}

/// What a search box holds after each keystroke of `word`: "r", "ru", "rus", ...
#[must_use]
pub fn typing(word: &str) -> Vec<TestEvent> {
    word.char_indices()
        .map(|(idx, c)| input(&word[..idx + c.len_utf8()]))
        .collect()
}
