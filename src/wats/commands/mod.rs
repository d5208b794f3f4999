use crate::config::WatsConfig;
use crate::model::AnimalRecord;
use std::path::PathBuf;

pub mod add;
pub mod average;
pub mod config;
pub mod delete;
pub mod get;
pub mod init;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Mean weight of one species.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageWeight {
    pub species: String,
    pub mean: f64,
}

/// Outcome of one command.
///
/// `failed` is the boolean the caller branches on; `messages` carry the reason, including
/// the underlying storage error when there was one.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub failed: bool,
    pub affected_records: Vec<AnimalRecord>,
    pub listed_records: Vec<AnimalRecord>,
    pub average: Option<AverageWeight>,
    pub database: Option<PathBuf>,
    pub config: Option<WatsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    /// A failed result carrying one message.
    pub fn failure(message: CmdMessage) -> Self {
        Self {
            failed: true,
            messages: vec![message],
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<AnimalRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<AnimalRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_average(mut self, average: AverageWeight) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_database(mut self, path: PathBuf) -> Self {
        self.database = Some(path);
        self
    }

    pub fn with_config(mut self, config: WatsConfig) -> Self {
        self.config = Some(config);
        self
    }
}

pub(crate) fn not_found(id: i32) -> CmdResult {
    CmdResult::failure(CmdMessage::warning(format!(
        "No record found with Tag ID {}",
        id
    )))
}
