//! Subprocess-based scorer invocation

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::{DomainError, RecipeScorer, ScoreRequest};

/// Scorer that runs an external program once per request.
///
/// The request is passed as a single JSON argument and the program must
/// emit exactly one JSON document on stdout. Each invocation is an isolated
/// process lifecycle; nothing is shared between requests. A timeout bounds
/// the call, and on expiry the child is killed.
#[derive(Debug, Clone)]
pub struct ProcessScorer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ProcessScorer {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }
}

#[async_trait]
impl RecipeScorer for ProcessScorer {
    async fn score(&self, request: &ScoreRequest) -> Result<serde_json::Value, DomainError> {
        let payload = serde_json::to_string(request)
            .map_err(|e| DomainError::internal(format!("Failed to encode scorer input: {}", e)))?;

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::scorer(format!("Failed to spawn scorer '{}': {}", self.program, e))
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                DomainError::scorer(format!(
                    "Scorer timed out after {}s",
                    self.timeout.as_secs_f64()
                ))
            })?
            .map_err(|e| DomainError::scorer(format!("Failed to collect scorer output: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::scorer(format!(
                "Scorer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let document = stdout.trim();

        if document.is_empty() {
            return Err(DomainError::scorer("Scorer emitted no output"));
        }

        serde_json::from_str(document)
            .map_err(|e| DomainError::scorer(format!("Malformed scorer output: {}", e)))
    }
}
