use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{KnowledgeBase, QueryError};
use crate::domain::AnswerResult;

/// QnA Maker `generateAnswer` client for a single knowledge base.
pub struct QnaMakerClient {
    client: reqwest::Client,
    endpoint: String,
    subscription_key: String,
    top: u32,
}

impl QnaMakerClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        knowledgebase_id: &str,
        subscription_key: &str,
        top: u32,
    ) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/knowledgebases/{}/generateAnswer",
                base_url.trim_end_matches('/'),
                knowledgebase_id
            ),
            subscription_key: subscription_key.to_string(),
            top: top.max(1),
        }
    }
}

#[derive(Serialize)]
struct GenerateAnswerRequest<'a> {
    question: &'a str,
    top: u32,
}

#[derive(Deserialize)]
struct GenerateAnswerResponse {
    #[serde(default)]
    answers: Vec<AnswerRecord>,
}

#[derive(Deserialize)]
struct AnswerRecord {
    answer: String,
    #[serde(default)]
    questions: Vec<String>,
    #[serde(default)]
    score: f64,
}

#[async_trait]
impl KnowledgeBase for QnaMakerClient {
    async fn query(&self, question: &str) -> Result<Option<AnswerResult>, QueryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .json(&GenerateAnswerRequest {
                question,
                top: self.top,
            })
            .send()
            .await
            .map_err(|e| QueryError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(QueryError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: GenerateAnswerResponse = response
            .json()
            .await
            .map_err(|e| QueryError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::debug!(answers = result.answers.len(), "QnA Maker responded");

        Ok(result
            .answers
            .into_iter()
            .next()
            .map(|record| AnswerResult::new(record.answer, record.score, record.questions)))
    }
}
