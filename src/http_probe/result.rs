use std::fmt;

use chrono::{DateTime, Local};

use super::client::{PingError, PingResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { status: u16, version: String },
    Failure { description: String },
}

/// One GET request plus its observed outcome.
#[derive(Debug, Clone)]
pub struct Attempt {
    /// 1-based ordinal within the run.
    pub index: u32,
    /// Wall-clock time the response or error was observed.
    pub timestamp: DateTime<Local>,
    pub outcome: Outcome,
}

impl Attempt {
    pub fn observe(index: u32, result: Result<PingResponse, PingError>) -> Self {
        let outcome = match result {
            Ok(response) => Outcome::Success {
                status: response.status,
                version: response.version,
            },
            Err(err) => Outcome::Failure {
                description: err.to_string(),
            },
        };
        Self {
            index,
            timestamp: Local::now(),
            outcome,
        }
    }
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.outcome {
            Outcome::Success { status, version } => {
                write!(f, "{ts} Request {}: {status} ({version})", self.index)
            }
            Outcome::Failure { description } => {
                write!(
                    f,
                    "{ts} Request {}: error making request: {description}",
                    self.index
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_line_carries_status_and_version() {
        let attempt = Attempt::observe(
            3,
            Ok(PingResponse {
                status: 204,
                version: "HTTP/3.0".to_string(),
            }),
        );
        let line = attempt.to_string();
        assert!(line.contains("Request 3: 204 (HTTP/3.0)"), "{line}");
    }

    #[test]
    fn failure_line_carries_description_and_no_status() {
        let attempt = Attempt::observe(
            1,
            Err(PingError::Transport("connection refused".to_string())),
        );
        let line = attempt.to_string();
        assert!(
            line.contains("Request 1: error making request: connection refused"),
            "{line}"
        );
    }
}
