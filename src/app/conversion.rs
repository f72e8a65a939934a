//! Conversion orchestration: submit, animate, call the backend, publish the outcome

use super::App;
use crate::backend::Backend;
use crate::error::{ConvertError, ValidationError};
use crate::form::FormState;
use crate::output::{save_output, ConversionOutput};
use crate::progress::PROGRESS_STEPS;
use crate::settings::Settings;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// Run the progress animation and the backend call side by side.
/// The outcome is published only once every step has elapsed.
async fn run_conversion(
    request: ConversionRequest,
    settings: Settings,
    state: Arc<Mutex<ConversionState>>,
    ctx: egui::Context,
) {
    let step_duration = settings.step_duration();

    let animate = async {
        for _ in 0..PROGRESS_STEPS.len() {
            tokio::time::sleep(step_duration).await;
            state.lock().unwrap().progress.advance();
            ctx.request_repaint();
        }
    };

    let convert = async {
        Backend::for_request(&request, &settings)?
            .convert(&request, |received| {
                state.lock().unwrap().received_bytes = received;
                ctx.request_repaint();
            })
            .await
    };

    let ((), result): ((), Result<ConversionOutput, ConvertError>) = tokio::join!(animate, convert);

    let mut s = state.lock().unwrap();
    s.status = match result {
        Ok(output) => {
            info!(file = %output.file_name, bytes = output.size(), "Conversion finished");
            ConversionStatus::Succeeded(output)
        }
        Err(e) => {
            error!(error = %e, mode = ?request.mode(), "Conversion failed");
            ConversionStatus::Failed(e.to_string())
        }
    };
    drop(s);
    ctx.request_repaint();
}

/// Validate `form` and spawn a conversion. Nothing is spawned on failure.
pub(crate) fn start_conversion(
    form: &FormState,
    settings: &Settings,
    state: &Arc<Mutex<ConversionState>>,
    ctx: &egui::Context,
    runtime: &tokio::runtime::Handle,
) -> Result<(), ValidationError> {
    let request = form.validate()?;

    {
        let mut s = state.lock().unwrap();
        if s.status.is_running() {
            warn!("Conversion already running, ignoring submit");
            return Ok(());
        }
        s.start(PROGRESS_STEPS.len());
    }

    info!(mode = ?request.mode(), "Starting conversion");
    runtime.spawn(run_conversion(
        request,
        settings.clone(),
        state.clone(),
        ctx.clone(),
    ));
    Ok(())
}

impl App {
    pub fn submit(&mut self, ctx: &egui::Context) {
        match start_conversion(
            &self.form,
            &self.settings,
            &self.conversion_state,
            ctx,
            self.runtime.handle(),
        ) {
            Ok(()) => {
                self.output = None;
                self.last_saved = None;
            }
            Err(e) => {
                warn!(error = %e, "Submission rejected");
                let description = if e == ValidationError::MissingField("Source file") {
                    "Please upload your TIBCO BW source code file.".to_string()
                } else {
                    format!("{}.", e)
                };
                self.notify(ToastKind::Error, e.title(), description);
            }
        }
    }

    /// Pick up a finished conversion from the background task
    pub fn poll_conversion(&mut self) {
        let finished = self.conversion_state.lock().unwrap().take_finished();
        if let Some(status) = finished {
            let outcome = publish_outcome(status, &self.settings);
            if outcome.saved_to.is_some() {
                self.last_saved = outcome.saved_to;
            }
            self.output = outcome.output;
            self.toast = outcome.toast;
        }
    }
}

/// What the window shows once a conversion has finished
#[derive(Debug, Default)]
pub(crate) struct Outcome {
    pub output: Option<ConversionOutput>,
    pub toast: Option<Toast>,
    pub saved_to: Option<PathBuf>,
}

/// Turn a finished status into the output card, the toast and an optional auto-save
pub(crate) fn publish_outcome(status: ConversionStatus, settings: &Settings) -> Outcome {
    match status {
        ConversionStatus::Succeeded(output) => {
            let mut outcome = Outcome {
                toast: Some(Toast::new(
                    ToastKind::Success,
                    "Conversion Successful!",
                    "Your TIBCO BW code has been successfully converted to Spring Boot.",
                )),
                ..Default::default()
            };
            if settings.auto_save {
                let dir = settings.output_path_or_default();
                match save_output(&dir, &output) {
                    Ok(path) => outcome.saved_to = Some(path),
                    Err(e) => {
                        error!(error = %e, dir = %dir.display(), "Auto-save failed");
                        outcome.toast = Some(Toast::new(ToastKind::Error, "Save Failed", e.to_string()));
                    }
                }
            }
            outcome.output = Some(output);
            outcome
        }
        ConversionStatus::Failed(_) => Outcome {
            toast: Some(Toast::new(
                ToastKind::Error,
                "Conversion Failed",
                "There was an error during the conversion process. Please check your source code and try again.",
            )),
            ..Default::default()
        },
        ConversionStatus::Idle | ConversionStatus::Running => Outcome::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONVERT_PATH;
    use crate::types::ConversionMode;
    use std::time::{Duration, Instant};

    fn fast_settings() -> Settings {
        Settings {
            step_duration_ms: 5,
            ..Default::default()
        }
    }

    fn wait_finished(state: &Arc<Mutex<ConversionState>>) -> ConversionStatus {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(status) = state.lock().unwrap().take_finished() {
                return status;
            }
            assert!(Instant::now() < deadline, "conversion did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn missing_field_issues_no_request() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", CONVERT_PATH).expect(0).create();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(ConversionState::default()));
        let settings = Settings {
            backend_url: server.url(),
            ..fast_settings()
        };
        let form = FormState {
            mode: ConversionMode::Project,
            project_archive: Some(PathBuf::from("/tmp/orders.zip")),
            config_file: Some(PathBuf::from("/tmp/app.properties")),
            target_git: "https://git.example.com/x.git".into(),
            ..Default::default()
        };

        let result = start_conversion(&form, &settings, &state, &egui::Context::default(), runtime.handle());

        assert_eq!(result, Err(ValidationError::MissingField("Work directory")));
        assert!(matches!(state.lock().unwrap().status, ConversionStatus::Idle));
        std::thread::sleep(Duration::from_millis(50));
        mock.assert();
    }

    #[test]
    fn project_success_publishes_archive_after_all_steps() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", CONVERT_PATH)
            .with_status(200)
            .with_body(b"PK\x03\x04")
            .expect(1)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("orders.zip");
        let config = dir.path().join("app.properties");
        std::fs::write(&archive, b"zip").unwrap();
        std::fs::write(&config, b"a=b").unwrap();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(ConversionState::default()));
        let settings = Settings {
            backend_url: server.url(),
            ..fast_settings()
        };
        let form = FormState {
            mode: ConversionMode::Project,
            project_archive: Some(archive),
            work_dir: "orders".into(),
            config_file: Some(config),
            target_git: "https://git.example.com/orders.git".into(),
            ..Default::default()
        };

        start_conversion(&form, &settings, &state, &egui::Context::default(), runtime.handle()).unwrap();
        let status = wait_finished(&state);

        mock.assert();
        assert!(state.lock().unwrap().progress.is_complete());
        match status {
            ConversionStatus::Succeeded(output) => {
                assert_eq!(output.file_name, "orders-spring-boot.zip");
                assert_eq!(output.bytes(), b"PK\x03\x04");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn backend_error_status_fails_without_output() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("POST", CONVERT_PATH).with_status(502).create();

        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("p.zip");
        let config = dir.path().join("c.xml");
        std::fs::write(&archive, b"zip").unwrap();
        std::fs::write(&config, b"<c/>").unwrap();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(ConversionState::default()));
        let settings = Settings {
            backend_url: server.url(),
            ..fast_settings()
        };
        let form = FormState {
            mode: ConversionMode::Project,
            project_archive: Some(archive),
            work_dir: "p".into(),
            config_file: Some(config),
            target_git: "t".into(),
            ..Default::default()
        };

        start_conversion(&form, &settings, &state, &egui::Context::default(), runtime.handle()).unwrap();
        assert!(matches!(wait_finished(&state), ConversionStatus::Failed(msg) if msg.contains("502")));
    }

    #[test]
    fn mock_conversion_succeeds_with_full_rate() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(ConversionState::default()));
        let settings = Settings {
            mock_success_rate: 1.0,
            ..fast_settings()
        };
        let form = FormState {
            source_file: Some(PathBuf::from("Orders.process.bw")),
            ..Default::default()
        };

        start_conversion(&form, &settings, &state, &egui::Context::default(), runtime.handle()).unwrap();
        match wait_finished(&state) {
            ConversionStatus::Succeeded(output) => assert!(output.text().is_some()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn mock_conversion_fails_with_zero_rate() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(ConversionState::default()));
        let settings = Settings {
            mock_success_rate: 0.0,
            ..fast_settings()
        };
        let form = FormState {
            mode: ConversionMode::Repository,
            source_repo: "https://git.example.com/bw.git".into(),
            target_repo: "https://git.example.com/spring.git".into(),
            ..Default::default()
        };

        start_conversion(&form, &settings, &state, &egui::Context::default(), runtime.handle()).unwrap();
        assert!(matches!(wait_finished(&state), ConversionStatus::Failed(_)));
    }

    #[test]
    fn success_offers_output_and_success_toast() {
        let status = ConversionStatus::Succeeded(ConversionOutput::source("A.java", "class A {}"));
        let outcome = publish_outcome(status, &Settings::default());

        assert!(outcome.output.is_some());
        assert!(outcome.saved_to.is_none());
        let toast = outcome.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Conversion Successful!");
    }

    #[test]
    fn failure_offers_no_output_and_failure_toast() {
        let outcome = publish_outcome(ConversionStatus::Failed("HTTP 502".into()), &Settings::default());

        assert!(outcome.output.is_none());
        let toast = outcome.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Conversion Failed");
    }

    #[test]
    fn auto_save_writes_into_output_folder() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            auto_save: true,
            output_path: Some(dir.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        let status = ConversionStatus::Succeeded(ConversionOutput::archive("orders-spring-boot.zip", b"PK".to_vec()));
        let outcome = publish_outcome(status, &settings);

        let saved = outcome.saved_to.unwrap();
        assert_eq!(saved, dir.path().join("orders-spring-boot.zip"));
        assert_eq!(std::fs::read(&saved).unwrap(), b"PK");
        assert!(outcome.output.is_some());
        assert_eq!(outcome.toast.unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn unfinished_status_publishes_nothing() {
        let outcome = publish_outcome(ConversionStatus::Running, &Settings::default());
        assert!(outcome.output.is_none() && outcome.toast.is_none());
    }
}
