use log::info;

use super::clock::iso_timestamp;
use crate::constants::LOG_INITIALIZED_MESSAGE;

/// Timestamped record of editor actions, offered to the user as `log.txt`.
/// Every entry is also forwarded to the `log` facade.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    lines: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        let mut log = Self { lines: Vec::new() };
        log.record(LOG_INITIALIZED_MESSAGE);
        log
    }

    pub fn record(&mut self, message: impl AsRef<str>) {
        let message = message.as_ref();
        info!(target: "tilegrid", "{}", message);
        self.lines.push(format!("{} {}", iso_timestamp(), message));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Newline-joined text for download
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
