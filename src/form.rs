//! Form input and submission validation

use crate::constants::{ARCHIVE_EXTENSIONS, SOURCE_EXTENSIONS};
use crate::error::ValidationError;
use crate::types::{ConversionMode, ConversionRequest};
use std::path::{Path, PathBuf};

/// Everything the user has entered so far. Lives only for the session.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub mode: ConversionMode,
    // Single file
    pub source_file: Option<PathBuf>,
    // Repository
    pub source_repo: String,
    pub target_repo: String,
    // Project archive
    pub project_archive: Option<PathBuf>,
    pub work_dir: String,
    pub config_file: Option<PathBuf>,
    pub target_git: String,
}

/// Suffix-only file type check, case insensitive
pub fn accepts_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// ".bw, .xml" style list for messages
pub fn extension_list(allowed: &[&str]) -> String {
    allowed
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl FormState {
    /// Required fields still empty for the selected mode, in display order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self.mode {
            ConversionMode::SingleFile => {
                if self.source_file.is_none() {
                    missing.push("Source file");
                }
            }
            ConversionMode::Repository => {
                if is_blank(&self.source_repo) {
                    missing.push("Source repository URL");
                }
                if is_blank(&self.target_repo) {
                    missing.push("Target repository URL");
                }
            }
            ConversionMode::Project => {
                if self.project_archive.is_none() {
                    missing.push("Project archive");
                }
                if is_blank(&self.work_dir) {
                    missing.push("Work directory");
                }
                if self.config_file.is_none() {
                    missing.push("Configuration file");
                }
                if is_blank(&self.target_git) {
                    missing.push("Target git repository");
                }
            }
        }
        missing
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check the form and build an owned request for the conversion task
    pub fn validate(&self) -> Result<ConversionRequest, ValidationError> {
        if let Some(&field) = self.missing_fields().first() {
            return Err(ValidationError::MissingField(field));
        }

        match self.mode {
            ConversionMode::SingleFile => {
                let source = self
                    .source_file
                    .clone()
                    .ok_or(ValidationError::MissingField("Source file"))?;
                check_extension(&source, SOURCE_EXTENSIONS)?;
                Ok(ConversionRequest::SingleFile { source })
            }
            ConversionMode::Repository => Ok(ConversionRequest::Repository {
                source_repo: self.source_repo.trim().to_string(),
                target_repo: self.target_repo.trim().to_string(),
            }),
            ConversionMode::Project => {
                let archive = self
                    .project_archive
                    .clone()
                    .ok_or(ValidationError::MissingField("Project archive"))?;
                let config = self
                    .config_file
                    .clone()
                    .ok_or(ValidationError::MissingField("Configuration file"))?;
                check_extension(&archive, ARCHIVE_EXTENSIONS)?;
                Ok(ConversionRequest::Project {
                    archive,
                    work_dir: self.work_dir.trim().to_string(),
                    config,
                    target_git: self.target_git.trim().to_string(),
                })
            }
        }
    }

    /// Selected file name for the "Uploaded: ..." line
    pub fn selected_name(path: &Option<PathBuf>) -> Option<String> {
        path.as_deref().map(display_name)
    }
}

fn check_extension(path: &Path, allowed: &[&str]) -> Result<(), ValidationError> {
    if accepts_extension(path, allowed) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType {
            file: display_name(path),
            expected: extension_list(allowed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_form() -> FormState {
        FormState {
            mode: ConversionMode::Project,
            project_archive: Some(PathBuf::from("/tmp/orders.zip")),
            work_dir: "orders".into(),
            config_file: Some(PathBuf::from("/tmp/application.properties")),
            target_git: "https://git.example.com/orders-spring.git".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_single_file_form_is_rejected() {
        let form = FormState::default();
        assert!(!form.can_submit());
        assert_eq!(form.validate(), Err(ValidationError::MissingField("Source file")));
    }

    #[test]
    fn single_file_accepts_known_suffixes() {
        for name in ["a.bw", "b.XML", "C.java", "app.properties"] {
            let form = FormState {
                source_file: Some(PathBuf::from(name)),
                ..Default::default()
            };
            assert!(form.validate().is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn single_file_rejects_other_suffixes() {
        let form = FormState {
            source_file: Some(PathBuf::from("/home/u/readme.txt")),
            ..Default::default()
        };
        match form.validate() {
            Err(ValidationError::UnsupportedFileType { file, expected }) => {
                assert_eq!(file, "readme.txt");
                assert_eq!(expected, ".bw, .xml, .java, .properties");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn repository_urls_are_trimmed_and_required() {
        let mut form = FormState {
            mode: ConversionMode::Repository,
            source_repo: "  https://git.example.com/bw.git ".into(),
            target_repo: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.missing_fields(), vec!["Target repository URL"]);

        form.target_repo = "https://git.example.com/spring.git".into();
        assert_eq!(
            form.validate(),
            Ok(ConversionRequest::Repository {
                source_repo: "https://git.example.com/bw.git".into(),
                target_repo: "https://git.example.com/spring.git".into(),
            })
        );
    }

    #[test]
    fn project_reports_every_missing_field() {
        let form = FormState {
            mode: ConversionMode::Project,
            ..Default::default()
        };
        assert_eq!(
            form.missing_fields(),
            vec![
                "Project archive",
                "Work directory",
                "Configuration file",
                "Target git repository"
            ]
        );
    }

    #[test]
    fn project_requires_zip_archive() {
        let mut form = project_form();
        assert!(matches!(form.validate(), Ok(ConversionRequest::Project { .. })));

        form.project_archive = Some(PathBuf::from("/tmp/orders.tar.gz"));
        assert!(matches!(
            form.validate(),
            Err(ValidationError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn fields_of_other_modes_are_ignored() {
        let mut form = project_form();
        form.source_file = None;
        form.source_repo.clear();
        assert!(form.can_submit());
    }

    #[test]
    fn file_without_extension_is_not_accepted() {
        assert!(!accepts_extension(Path::new("Makefile"), SOURCE_EXTENSIONS));
        assert!(accepts_extension(Path::new("x.ZIP"), ARCHIVE_EXTENSIONS));
    }
}
