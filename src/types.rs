//! Common types and data structures

use crate::output::ConversionOutput;
use crate::progress::ProgressTracker;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which kind of input the user is submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConversionMode {
    #[default]
    SingleFile,
    Repository,
    Project,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 3] = [
        ConversionMode::SingleFile,
        ConversionMode::Repository,
        ConversionMode::Project,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConversionMode::SingleFile => "Single File",
            ConversionMode::Repository => "Repository",
            ConversionMode::Project => "Project Archive",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConversionMode::SingleFile => "Upload your TIBCO BW files to begin the automated conversion process",
            ConversionMode::Repository => "Point at the TIBCO BW source repository and the repository that receives the Spring Boot code",
            ConversionMode::Project => "Upload a zipped TIBCO BW project with its configuration to the conversion service",
        }
    }

    /// Whether this mode talks to the remote conversion service
    pub fn uses_backend(self) -> bool {
        matches!(self, ConversionMode::Project)
    }
}

/// Validated, owned input for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionRequest {
    SingleFile {
        source: PathBuf,
    },
    Repository {
        source_repo: String,
        target_repo: String,
    },
    Project {
        archive: PathBuf,
        work_dir: String,
        config: PathBuf,
        target_git: String,
    },
}

impl ConversionRequest {
    pub fn mode(&self) -> ConversionMode {
        match self {
            ConversionRequest::SingleFile { .. } => ConversionMode::SingleFile,
            ConversionRequest::Repository { .. } => ConversionMode::Repository,
            ConversionRequest::Project { .. } => ConversionMode::Project,
        }
    }
}

/// Lifecycle of the current conversion
#[derive(Debug, Clone, Default)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Running,
    Succeeded(ConversionOutput),
    Failed(String),
}

impl ConversionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, ConversionStatus::Running)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ConversionStatus::Succeeded(_) | ConversionStatus::Failed(_))
    }
}

/// State shared between the UI thread and the conversion task
#[derive(Debug, Default)]
pub struct ConversionState {
    pub status: ConversionStatus,
    pub progress: ProgressTracker,
    pub received_bytes: u64,
}

impl ConversionState {
    /// Reset for a new run
    pub fn start(&mut self, steps: usize) {
        self.status = ConversionStatus::Running;
        self.progress = ProgressTracker::new(steps);
        self.received_bytes = 0;
    }

    /// Hand a finished outcome to the UI exactly once
    pub fn take_finished(&mut self) -> Option<ConversionStatus> {
        if self.status.is_finished() {
            Some(std::mem::take(&mut self.status))
        } else {
            None
        }
    }
}

/// Visual variant of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub start: std::time::Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_project_mode_uses_backend() {
        assert!(!ConversionMode::SingleFile.uses_backend());
        assert!(!ConversionMode::Repository.uses_backend());
        assert!(ConversionMode::Project.uses_backend());
    }

    #[test]
    fn take_finished_returns_outcome_once() {
        let mut state = ConversionState::default();
        state.start(3);
        assert!(state.take_finished().is_none());

        state.status = ConversionStatus::Failed("boom".into());
        assert!(matches!(state.take_finished(), Some(ConversionStatus::Failed(_))));
        assert!(state.take_finished().is_none());
        assert!(matches!(state.status, ConversionStatus::Idle));
    }
}
