//! In-memory transport for unit tests: canned responses per URL plus a call log.

use super::{Method, ProbeRequest, Transport, TransportError};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: HashMap<String, Result<u32, TransportError>>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn status(mut self, url: &str, status: u32) -> Self {
        self.responses.insert(url.to_string(), Ok(status));
        self
    }

    pub(crate) fn timeout(mut self, url: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Err(TransportError::Timeout {
                url: url.to_string(),
            }),
        );
        self
    }

    pub(crate) fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ProbeRequest) -> Result<u32, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.method, request.url.clone()));
        self.responses
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| {
                Err(TransportError::Connection {
                    url: request.url.clone(),
                    message: "no scripted response".to_string(),
                })
            })
    }
}
