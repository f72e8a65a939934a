//! Conversion backends: the built-in mock and the remote conversion service

use crate::constants::{CONVERT_PATH, GENERATED_SOURCE_NAME};
use crate::error::ConvertError;
use crate::output::ConversionOutput;
use crate::settings::Settings;
use crate::types::ConversionRequest;
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound on the response buffer reserved up front
const MAX_PREALLOC: u64 = 8 * 1024 * 1024;

const MOCK_SPRING_BOOT_SOURCE: &str = r#"package com.abc.tibcoconverter;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.*;

@SpringBootApplication
@RestController
public class ConvertedTibcoApplication {

    public static void main(String[] args) {
        SpringApplication.run(ConvertedTibcoApplication.class, args);
    }

    @GetMapping("/api/process")
    public ResponseEntity<String> processData(@RequestParam String input) {
        // Converted TIBCO BW logic
        String processedData = processBusinessLogic(input);
        return ResponseEntity.ok(processedData);
    }

    private String processBusinessLogic(String input) {
        // This method contains the converted TIBCO BW business logic
        return "Processed: " + input;
    }
}

// Additional configuration classes and services would be generated here
// based on your TIBCO BW project structure and components.
"#;

/// Stand-in for the conversion service: returns a fixed Spring Boot class
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub success_rate: f64,
}

impl MockBackend {
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    /// `roll` is a uniform sample in `[0, 1)`; below the success rate wins.
    pub fn convert(&self, request: &ConversionRequest, roll: f64) -> Result<ConversionOutput, ConvertError> {
        if let ConversionRequest::Project { .. } = request {
            return Err(ConvertError::Unsupported("Project archive"));
        }

        if roll >= self.success_rate {
            debug!(roll, rate = self.success_rate, "Mock conversion rejected");
            return Err(ConvertError::Rejected);
        }

        debug!(mode = ?request.mode(), "Mock conversion accepted");
        Ok(ConversionOutput::source(GENERATED_SOURCE_NAME, MOCK_SPRING_BOOT_SOURCE))
    }
}

/// Client for `POST .../v1/files` on the conversion service
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConvertError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONVERT_PATH)
    }

    /// Upload the project and collect the converted archive.
    /// `on_bytes` receives the running total of response bytes.
    pub async fn convert<F>(&self, request: &ConversionRequest, mut on_bytes: F) -> Result<ConversionOutput, ConvertError>
    where
        F: FnMut(u64),
    {
        let ConversionRequest::Project {
            archive,
            work_dir,
            config,
            target_git,
        } = request
        else {
            return Err(ConvertError::Unsupported(request.mode().label()));
        };

        let archive_name = file_name_of(archive);
        let config_name = file_name_of(config);
        let archive_bytes = read_file(archive).await?;
        let config_bytes = read_file(config).await?;

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(archive_bytes)
                    .file_name(archive_name.clone())
                    .mime_str("application/zip")?,
            )
            .text("work_dir", work_dir.clone())
            .part(
                "file_name",
                reqwest::multipart::Part::bytes(config_bytes).file_name(config_name),
            )
            .text("target_git", target_git.clone());

        let url = self.endpoint();
        info!(url = %url, archive = %archive_name, work_dir = %work_dir, "Submitting project for conversion");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Conversion service returned an error");
            return Err(ConvertError::Status(status));
        }

        let file_name = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(content_disposition_filename)
            .unwrap_or_else(|| default_archive_name(&archive_name));

        // Content-Length is only a hint from the server
        let total = response.content_length().unwrap_or(0).min(MAX_PREALLOC);
        let mut bytes = Vec::with_capacity(total as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            bytes.extend_from_slice(&chunk);
            on_bytes(bytes.len() as u64);
        }

        info!(file = %file_name, bytes = bytes.len(), "Converted archive received");
        Ok(ConversionOutput::archive(file_name, bytes))
    }
}

/// Backend chosen for one request
#[derive(Debug, Clone)]
pub enum Backend {
    Mock(MockBackend),
    Http(HttpBackend),
}

impl Backend {
    pub fn for_request(request: &ConversionRequest, settings: &Settings) -> Result<Self, ConvertError> {
        if request.mode().uses_backend() {
            let timeout = Duration::from_secs(settings.request_timeout_secs);
            Ok(Backend::Http(HttpBackend::new(&settings.backend_url, timeout)?))
        } else {
            Ok(Backend::Mock(MockBackend::new(settings.mock_success_rate)))
        }
    }

    pub async fn convert<F>(&self, request: &ConversionRequest, on_bytes: F) -> Result<ConversionOutput, ConvertError>
    where
        F: FnMut(u64),
    {
        match self {
            Backend::Mock(mock) => mock.convert(request, rand::random::<f64>()),
            Backend::Http(http) => http.convert(request, on_bytes).await,
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    tokio::fs::read(path).await.map_err(|source| ConvertError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string())
}

/// `orders.zip` -> `orders-spring-boot.zip`
pub fn default_archive_name(archive_name: &str) -> String {
    let stem = Path::new(archive_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "converted".to_string());
    format!("{}-spring-boot.zip", stem)
}

/// Extract a bare file name from a `Content-Disposition` header value
pub fn content_disposition_filename(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim().eq_ignore_ascii_case("filename").then(|| value.trim().trim_matches('"'))
        })
        // Drop any directory components the server sent
        .and_then(|name| Path::new(name).file_name().map(|n| n.to_string_lossy().to_string()))
        .filter(|name| !name.is_empty())
}
