use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use debrief::llm::{LlmProvider, ProviderError};
use debrief::report::MeetingRequest;

#[derive(Clone)]
pub struct MockProvider {
    pub completion: String,
    pub calls: Arc<Mutex<Vec<MeetingRequest>>>,
    pub fail_with: Option<ProviderError>,
}

impl MockProvider {
    pub fn new(completion: &str) -> Self {
        Self {
            completion: completion.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            completion: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(error),
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn model(&self) -> &str {
        "mock/model"
    }

    async fn complete(&self, request: &MeetingRequest) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(ref err) = self.fail_with {
            return Err(err.clone());
        }
        Ok(self.completion.clone())
    }
}
