//! Subprocess-backed contract engine.
//!
//! The engine is an out-of-process script executor: it is handed a function
//! name and ordered string arguments, runs to completion, and its combined
//! stdout/stderr text is relayed verbatim to the caller. Its internal logic
//! is opaque to this crate.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::errors::{EngineError, Result};

/// Invocation contract for the external contract engine.
#[async_trait]
pub trait ContractEngine: Send + Sync {
    /// Runs `function` with positional string `args` and returns the engine's
    /// combined output text.
    async fn execute(&self, function: &str, args: &[String]) -> Result<String>;
}

/// Configuration for the script-backed engine.
#[derive(Debug, Clone)]
pub struct ScriptEngineConfig {
    /// Interpreter binary, e.g. `lua`.
    pub interpreter: String,
    /// Path to the contract script handed to the interpreter.
    pub script: String,
    /// Hard deadline for a single invocation. Exceeding it is an engine
    /// failure; the child is killed.
    pub timeout: Duration,
}

impl ScriptEngineConfig {
    pub fn new(interpreter: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Engine that shells out to a script interpreter per invocation.
///
/// Calling convention: `<interpreter> <script> <function> <args...>`.
pub struct ScriptContractEngine {
    config: ScriptEngineConfig,
}

impl ScriptContractEngine {
    pub fn new(config: ScriptEngineConfig) -> Self {
        ScriptContractEngine { config }
    }
}

#[async_trait]
impl ContractEngine for ScriptContractEngine {
    async fn execute(&self, function: &str, args: &[String]) -> Result<String> {
        let mut command = Command::new(&self.config.interpreter);
        command
            .arg(&self.config.script)
            .arg(function)
            .args(args)
            .kill_on_drop(true);

        log::debug!(
            "Invoking contract function '{}' with {} args",
            function,
            args.len()
        );

        let run = command.output();
        let output = match tokio::time::timeout(self.config.timeout, run).await {
            Err(_) => {
                return Err(EngineError::Timeout {
                    function: function.to_string(),
                    timeout_secs: self.config.timeout.as_secs(),
                }
                .into())
            }
            Ok(Err(source)) => {
                return Err(EngineError::Spawn {
                    command: self.config.interpreter.clone(),
                    source,
                }
                .into())
            }
            Ok(Ok(output)) => output,
        };

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(EngineError::NonZeroExit {
                function: function.to_string(),
                status: output.status.to_string(),
                output: combined,
            }
            .into());
        }
        Ok(combined)
    }
}
