// src/invokers/process.rs

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use uuid::Uuid;

use crate::config::InferenceConfig;
use crate::errors::{AppError, Result};
use crate::invokers::{elapsed_ms, Invoker};
use crate::models::InvocationResult;

/// Runs the engine CLI (`ollama run llama3` by default) once per invocation,
/// feeding the prompt on stdin and capturing stdout/stderr in memory.
///
/// There is no timeout and no cap on concurrent children: a request waits as
/// long as the engine runs, and a client disconnect does not kill the child.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    engine_name: String,
    program: String,
    args: Vec<String>,
}

impl ProcessInvoker {
    pub fn new(engine_name: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            engine_name: engine_name.into(),
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Self {
        Self::new(config.engine_name.clone(), config.command.clone(), config.args())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the request.
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[async_trait]
impl Invoker for ProcessInvoker {
    fn engine_name(&self) -> &str {
        &self.engine_name
    }

    async fn invoke(&self, text: &str) -> Result<InvocationResult> {
        let invocation_id = Uuid::new_v4();
        log::info!(
            "[{}] Running {} {} ({} bytes of input)",
            invocation_id,
            self.program,
            self.args.join(" "),
            text.len()
        );

        let start = Instant::now();

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| AppError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::Engine("child stdin was not piped".to_string()))?;

        let input = text.as_bytes();
        let write_input = async move {
            let written = stdin.write_all(input).await;
            // Closing the pipe is what tells the engine the prompt is complete.
            drop(stdin);
            written
        };

        // Feed stdin while draining stdout/stderr so neither side blocks on a full pipe.
        let (written, output) = tokio::join!(write_input, child.wait_with_output());
        let output = output?;

        match written {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                log::warn!(
                    "[{}] {} closed stdin before reading the whole prompt",
                    invocation_id,
                    self.program
                );
            }
            Err(e) => return Err(AppError::Io(e)),
        }

        let latency_ms = elapsed_ms(start);

        if output.status.success() {
            log::info!(
                "[{}] {} finished in {}ms ({} bytes of output)",
                invocation_id,
                self.program,
                latency_ms,
                output.stdout.len()
            );
            Ok(InvocationResult::Success {
                text: decode(&output.stdout),
            })
        } else {
            log::warn!(
                "[{}] {} failed after {}ms with {}",
                invocation_id,
                self.program,
                latency_ms,
                output.status
            );
            Ok(InvocationResult::Failure {
                message: decode(&output.stderr),
            })
        }
    }
}
