//! Fixed-delay retry around a [`TextGenerator`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{GenerationError, TextGenerator};

/// Marker the generation service puts in front of in-band error replies.
const ERROR_MARKER: &str = "Error:";

/// How many attempts to make and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Default attempt count with a custom delay.
    pub fn with_backoff(backoff: Duration) -> Self {
        Self {
            backoff,
            ..Self::default()
        }
    }
}

/// A reply that should be retried rather than parsed.
pub fn is_transient(reply: &str) -> bool {
    reply.trim().is_empty() || reply.starts_with(ERROR_MARKER)
}

/// Retrying front end to a text generator.
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
}

impl GenerationClient {
    pub fn new(generator: Arc<dyn TextGenerator>, policy: RetryPolicy) -> Self {
        Self { generator, policy }
    }

    /// Generate text for `prompt`, retrying transient failures.
    ///
    /// Waits `policy.backoff` between attempts and never after the last
    /// one. Returns the first non-transient reply unchanged.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let max_attempts = self.policy.max_attempts;
        if max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        let mut last_message = String::new();
        for attempt in 1..=max_attempts {
            match self.generator.complete(prompt).await {
                Ok(reply) if !is_transient(&reply) => {
                    debug!(
                        generator = self.generator.name(),
                        attempt,
                        len = reply.len(),
                        "generation succeeded"
                    );
                    return Ok(reply);
                }
                Ok(reply) => {
                    last_message = if reply.trim().is_empty() {
                        "empty response".to_string()
                    } else {
                        reply
                    };
                }
                Err(e) => {
                    last_message = e.to_string();
                }
            }

            warn!(
                generator = self.generator.name(),
                attempt,
                max_attempts,
                reason = %last_message,
                "generation attempt failed"
            );

            if attempt < max_attempts {
                tokio::time::sleep(self.policy.backoff).await;
            }
        }

        Err(GenerationError::Exhausted {
            attempts: max_attempts,
            last_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;
    use crate::generate::TransportError;

    /// Replays a fixed script of replies, one per call.
    struct Scripted {
        replies: Mutex<VecDeque<Result<String, TransportError>>>,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, TransportError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn client(generator: Arc<Scripted>) -> GenerationClient {
        GenerationClient::new(generator, RetryPolicy::default())
    }

    #[test]
    fn transient_replies() {
        assert!(is_transient(""));
        assert!(is_transient("  \n\t"));
        assert!(is_transient("Error: quota exceeded"));
        assert!(!is_transient("Day 1: Push"));
        assert!(!is_transient(" Error: leading space is not the marker"));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_third_attempt_after_two_waits() {
        let generator = Scripted::new(vec![
            Ok("Error: timeout".to_string()),
            Ok("Error: timeout".to_string()),
            Ok("Day 1: Push\nBench - 3 sets x 5 reps".to_string()),
        ]);
        let client = client(generator.clone());

        let start = Instant::now();
        let text = client.generate("plan please").await.unwrap();

        assert_eq!(text, "Day 1: Push\nBench - 3 sets x 5 reps");
        assert_eq!(generator.calls(), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn three_empty_replies_exhaust_without_final_wait() {
        let generator = Scripted::new(vec![
            Ok(String::new()),
            Ok("   ".to_string()),
            Ok(String::new()),
        ]);
        let client = client(generator.clone());

        let start = Instant::now();
        let err = client.generate("plan please").await.unwrap_err();

        assert_eq!(generator.calls(), 3);
        assert_eq!(start.elapsed(), Duration::from_millis(2000));
        match err {
            GenerationError::Exhausted {
                attempts,
                last_message,
            } => {
                assert_eq!(attempts, 3);
                assert_eq!(last_message, "empty response");
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transport_errors_are_retried() {
        let generator = Scripted::new(vec![
            Err(TransportError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }),
            Ok("Day 1: Legs".to_string()),
        ]);
        let client = client(generator.clone());

        let text = client.generate("p").await.unwrap();
        assert_eq!(text, "Day 1: Legs");
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn last_failure_message_is_reported() {
        let generator = Scripted::new(vec![
            Ok(String::new()),
            Ok(String::new()),
            Ok("Error: model overloaded".to_string()),
        ]);
        let err = client(generator).generate("p").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "generation failed after 3 attempts: Error: model overloaded"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn custom_policy_controls_attempts_and_delay() {
        let generator = Scripted::new(vec![]);
        let policy = RetryPolicy {
            max_attempts: 5,
            backoff: Duration::from_millis(250),
        };
        let client = GenerationClient::new(generator.clone(), policy);

        let start = Instant::now();
        assert!(client.generate("p").await.is_err());
        assert_eq!(generator.calls(), 5);
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn zero_attempts_is_a_config_error() {
        let generator = Scripted::new(vec![Ok("Day 1: A".to_string())]);
        let policy = RetryPolicy {
            max_attempts: 0,
            backoff: Duration::ZERO,
        };
        let err = GenerationClient::new(generator.clone(), policy)
            .generate("p")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidConfig(_)));
        assert_eq!(generator.calls(), 0);
    }
}
