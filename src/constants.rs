//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "TIBCO Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const CONVERT_PATH: &str = "/usb-service-ics-tibco-to-java-converter/v1/files";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const REQUEST_TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 5..=3600;

/// Suffixes accepted for a single-file conversion
pub const SOURCE_EXTENSIONS: &[&str] = &["bw", "xml", "java", "properties"];
pub const ARCHIVE_EXTENSIONS: &[&str] = &["zip"];

pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(3000);
pub const MAX_STEP_DURATION_MS: u64 = 60_000;
pub const DEFAULT_MOCK_SUCCESS_RATE: f64 = 0.7;

pub const GENERATED_SOURCE_NAME: &str = "ConvertedTibcoApplication.java";
