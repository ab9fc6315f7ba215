use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, ProviderName};

/// Outcome and wall-clock latency of one provider call.
#[derive(Debug)]
pub struct BenchmarkEntry {
    pub provider: ProviderName,
    pub outcome: Result<String, LlmClientError>,
    pub elapsed_seconds: f64,
}

impl BenchmarkEntry {
    pub fn text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn failure_reason(&self) -> Option<String> {
        self.outcome.as_ref().err().map(ToString::to_string)
    }
}

pub type BenchmarkReport = HashMap<ProviderName, BenchmarkEntry>;

/// Calls every provider concurrently with the same prompt and times each one.
pub struct BenchmarkOrchestrator {
    clients: Vec<Arc<dyn LlmClient>>,
}

impl BenchmarkOrchestrator {
    pub fn new(clients: Vec<Arc<dyn LlmClient>>) -> Self {
        Self { clients }
    }

    pub async fn benchmark_all(&self, prompt: &Prompt) -> BenchmarkReport {
        let runs = self.clients.iter().map(|client| async move {
            let start = Instant::now();
            let outcome = client.complete(prompt).await;
            let elapsed_seconds = start.elapsed().as_secs_f64();

            tracing::debug!(
                provider = %client.provider(),
                elapsed_seconds,
                success = outcome.is_ok(),
                "Benchmark run finished"
            );

            BenchmarkEntry {
                provider: client.provider(),
                outcome,
                elapsed_seconds,
            }
        });

        join_all(runs)
            .await
            .into_iter()
            .map(|entry| (entry.provider, entry))
            .collect()
    }
}
