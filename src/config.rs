//! Configuration and constants.
//!
//! The sidecar takes no configuration file and reads no environment variables;
//! everything it needs is either a compile-time constant below or one of the two
//! command-line options collected into `SidecarConfig`.

use std::time::Duration;

// =============================================================================
// Bind Defaults
// =============================================================================

/// Default bind address (loopback only)
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port, agreed with the parent application
pub const DEFAULT_PORT: u16 = 43124;

// =============================================================================
// Payload Constants
// =============================================================================

/// Value of the `status` field in every health payload
pub const HEALTH_STATUS_OK: &str = "ok";

/// Value of the `service` field; the parent application matches on it
pub const SERVICE_NAME: &str = "python-sidecar";

/// Version reported as `interpreterVersion`
pub const INTERPRETER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message attached to every successful inspection
pub const INSPECTION_MESSAGE: &str = "PDF inspected by sidecar.";

// =============================================================================
// File Inspection Constants
// =============================================================================

/// Leading bytes that mark a file as PDF-like
pub const PDF_MAGIC: &[u8; 5] = b"%PDF-";

/// Number of bytes read from the start of an inspected file
pub const HEADER_LEN: u64 = PDF_MAGIC.len() as u64;

// =============================================================================
// Capability Probe Constants
// =============================================================================

/// MuPDF command-line tool used as the optional rendering capability
pub const PDF_TOOL_COMMAND: &str = "mutool";

/// Upper bound on how long a single capability probe may run
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Request Handling
// =============================================================================

/// Requests served at once; the sidecar handles one request to completion
/// before starting the next
pub const MAX_IN_FLIGHT_REQUESTS: usize = 1;

// =============================================================================
// Logging
// =============================================================================

/// Tracing filter used by the binary
pub const DEFAULT_LOG_FILTER: &str = "pdf_sidecar=info";

/// Bind configuration collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarConfig {
    pub host: String,
    pub port: u16,
}

impl SidecarConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `host:port` form used in log lines.
    pub fn display_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_binds_loopback() {
        let config = SidecarConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 43124);
    }

    #[test]
    fn test_display_addr() {
        let config = SidecarConfig::new("0.0.0.0", 8080);
        assert_eq!(config.display_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_header_len_matches_magic() {
        assert_eq!(HEADER_LEN, 5);
        assert_eq!(PDF_MAGIC, b"%PDF-");
    }
}
