// src/runner.rs
use crate::errors::Result;
use crate::invokers::Invoker;
use crate::models::InvocationResult;

/// Instruction appended to every submitted snippet before it reaches the model.
pub const FIXED_SUFFIX: &str = "The app has a section to code ACE.";

/// Appends the instruction after a blank line. Already-augmented input is
/// augmented again.
pub fn augment(code: &str) -> String {
    format!("{}\n\n{}", code, FIXED_SUFFIX)
}

/// Turns an engine outcome into the text returned as `updatedCode`.
pub fn render_outcome(engine_name: &str, outcome: InvocationResult) -> String {
    match outcome {
        InvocationResult::Success { text } => text,
        InvocationResult::Failure { message } => {
            format!("Error running {}:\n{}", engine_name, message)
        }
    }
}

/// Augments `code`, runs it through the engine and renders the outcome.
pub async fn run_code(invoker: &dyn Invoker, code: &str) -> Result<String> {
    let prompt = augment(code);
    let outcome = invoker.invoke(&prompt).await?;

    if let InvocationResult::Failure { message } = &outcome {
        log::warn!("{} reported a failure: {}", invoker.engine_name(), message.trim_end());
    }

    Ok(render_outcome(invoker.engine_name(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedInvoker {
        outcome: InvocationResult,
        seen: Mutex<Vec<String>>,
    }

    impl CannedInvoker {
        fn new(outcome: InvocationResult) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Invoker for CannedInvoker {
        fn engine_name(&self) -> &str {
            "Ollama"
        }

        async fn invoke(&self, text: &str) -> Result<InvocationResult> {
            self.seen.lock().unwrap().push(text.to_string());
            Ok(self.outcome.clone())
        }
    }

    struct UnreachableInvoker;

    #[async_trait]
    impl Invoker for UnreachableInvoker {
        fn engine_name(&self) -> &str {
            "Ollama"
        }

        async fn invoke(&self, _text: &str) -> Result<InvocationResult> {
            Err(AppError::Engine("engine is down".to_string()))
        }
    }

    #[test]
    fn test_augment_appends_suffix_after_blank_line() {
        for code in ["print(1)", "line one\nline two", "  padded  ", "ünïcødé ✓"] {
            assert_eq!(augment(code), format!("{}\n\n{}", code, FIXED_SUFFIX));
        }
    }

    #[test]
    fn test_augment_empty_input() {
        assert_eq!(augment(""), "\n\nThe app has a section to code ACE.");
    }

    #[test]
    fn test_augment_is_not_idempotent() {
        let once = augment("x");
        let twice = augment(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, "x\n\nThe app has a section to code ACE.\n\nThe app has a section to code ACE.");
    }

    #[test]
    fn test_render_success_passes_text_through() {
        let text = render_outcome("Ollama", InvocationResult::Success { text: "T".to_string() });
        assert_eq!(text, "T");
    }

    #[test]
    fn test_render_failure_prefixes_engine_name() {
        let text = render_outcome(
            "Ollama",
            InvocationResult::Failure {
                message: "model not found".to_string(),
            },
        );
        assert_eq!(text, "Error running Ollama:\nmodel not found");
    }

    #[tokio::test]
    async fn test_run_code_sends_augmented_prompt() {
        let invoker = CannedInvoker::new(InvocationResult::Success { text: "ok".to_string() });

        let updated = run_code(&invoker, "print(1)").await.unwrap();

        assert_eq!(updated, "ok");
        assert_eq!(
            *invoker.seen.lock().unwrap(),
            vec!["print(1)\n\nThe app has a section to code ACE.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_run_code_renders_failure() {
        let invoker = CannedInvoker::new(InvocationResult::Failure {
            message: "model not found".to_string(),
        });

        let updated = run_code(&invoker, "print(1)").await.unwrap();

        assert_eq!(updated, "Error running Ollama:\nmodel not found");
    }

    #[tokio::test]
    async fn test_run_code_propagates_unreachable_engine() {
        let err = run_code(&UnreachableInvoker, "print(1)").await.unwrap_err();
        assert!(matches!(err, AppError::Engine(_)));
    }
}
