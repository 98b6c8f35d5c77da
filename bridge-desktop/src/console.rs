use bridge_traits::error::{BridgeError, Result};
use bridge_traits::logging::{LogLevel, Logger};
use core_text::{pad_text, wrap, Pad};
use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

const SEPARATOR: char = '|';

/// Pads log tags so that messages line up in a column.
///
/// Remembers the widest tag seen so far; every tag is padded to one more than
/// that width, so the column only ever moves right.
#[derive(Debug, Clone, Default)]
pub struct TagPadder {
    longest: usize,
}

impl TagPadder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pad(&mut self, tag: &str) -> String {
        let length = tag.chars().count();
        self.longest = self.longest.max(length + 1);
        pad_text(tag, self.longest, Pad::Right, ' ').unwrap_or_else(|_| tag.to_owned())
    }

    /// Current padded width, including the trailing space.
    pub fn longest(&self) -> usize {
        self.longest
    }
}

struct ConsoleState {
    out: Box<dyn Write + Send>,
    tags: TagPadder,
}

/// Console logger for desktop and development builds.
///
/// Writes one line per entry in the form `(I) Tag  |message`. Tags are padded
/// per instance by a [`TagPadder`].
pub struct ConsoleLogger {
    min_level: LogLevel,
    wrap_width: Option<usize>,
    state: Mutex<ConsoleState>,
}

impl ConsoleLogger {
    /// Logger writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Logger writing to an arbitrary sink.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            min_level: LogLevel::Info,
            wrap_width: None,
            state: Mutex::new(ConsoleState {
                out: Box::new(out),
                tags: TagPadder::new(),
            }),
        }
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Wrap messages to `width` characters. Zero disables wrapping.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = (width > 0).then_some(width);
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn write_entry(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| BridgeError::OperationFailed("console logger lock poisoned".into()))?;

        let prefix = format!("({}) {}", level.code(), state.tags.pad(tag));
        let lines = match self.wrap_width {
            Some(width) => wrap(message, width).unwrap_or_else(|_| vec![message.to_owned()]),
            None => vec![message.to_owned()],
        };

        let indent = " ".repeat(prefix.chars().count());
        for (index, line) in lines.iter().enumerate() {
            let lead = if index == 0 { &prefix } else { &indent };
            writeln!(state.out, "{}{}{}", lead, SEPARATOR, line)?;
        }

        if let Some(error) = error {
            writeln!(state.out, "{}", error)?;
        }

        state.out.flush()?;
        Ok(())
    }

    fn emit(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: Option<&(dyn StdError + 'static)>,
    ) {
        if level < self.min_level {
            return;
        }
        if let Err(err) = self.write_entry(level, tag, message, error) {
            eprintln!("ConsoleLogger error: {}", err);
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("min_level", &self.min_level)
            .field("wrap_width", &self.wrap_width)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        self.emit(level, tag, message, None);
    }

    fn log_with_error(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        error: &(dyn StdError + 'static),
    ) {
        self.emit(level, tag, message, Some(error));
    }
}
