use std::path::PathBuf;

pub mod generate;
pub mod guard;
pub mod include;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What happened to the dated note file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOutcome {
    Written,
    Overwritten,
    Existing,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Name of the dated note, set whenever a usable file is on disk.
    pub filename: Option<String>,
    pub outcome: Option<NoteOutcome>,
    pub note_path: Option<PathBuf>,
    /// True when a new include entry was appended to the index.
    pub included: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_note(mut self, filename: String, path: PathBuf, outcome: NoteOutcome) -> Self {
        self.filename = Some(filename);
        self.note_path = Some(path);
        self.outcome = Some(outcome);
        self
    }

    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    /// Appends another result's messages, keeping the note fields of `self`
    /// unless they are unset.
    pub fn merge(&mut self, other: CmdResult) {
        if self.filename.is_none() {
            self.filename = other.filename;
            self.note_path = other.note_path;
            self.outcome = other.outcome;
        }
        self.included |= other.included;
        self.messages.extend(other.messages);
    }
}
