use crate::core::errors::KatapultError;
use crate::core::traits::Requester;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
    pub content_type: Option<String>,
    pub raw: Option<Vec<u8>>,
}

/// In-memory `Requester` that records every call and answers with canned `data`
#[derive(Default)]
pub struct RecordingRequester {
    data: Option<Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingRequester {
    pub fn responding(data: Value) -> Self {
        Self {
            data: Some(data),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.lock().last().cloned().unwrap()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().push(call);
    }

    fn respond<T: DeserializeOwned>(&self) -> Result<Option<T>, KatapultError> {
        match &self.data {
            None | Some(Value::Null) => Ok(None),
            Some(data) => serde_json::from_value(data.clone())
                .map(Some)
                .map_err(|e| KatapultError::Decode(e.to_string())),
        }
    }
}

fn owned_query(query_params: &[(&str, &str)]) -> Vec<(String, String)> {
    query_params
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[async_trait]
impl Requester for RecordingRequester {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Option<T>, KatapultError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let json = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| KatapultError::Serialization(e.to_string()))?;
        self.record(RecordedCall {
            method,
            path: path.to_string(),
            query: owned_query(query_params),
            json,
            content_type: None,
            raw: None,
        });
        self.respond()
    }

    async fn request_with_body<T>(
        &self,
        method: Method,
        path: &str,
        query_params: &[(&str, &str)],
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Option<T>, KatapultError>
    where
        T: DeserializeOwned + Send,
    {
        self.record(RecordedCall {
            method,
            path: path.to_string(),
            query: owned_query(query_params),
            json: None,
            content_type: Some(content_type.to_string()),
            raw: Some(body),
        });
        self.respond()
    }
}

/// Shorthand for expected query pairs
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    owned_query(expected)
}
