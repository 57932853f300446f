use std::sync::Mutex;

use async_trait::async_trait;
use common::{Method, PushError, Transport, TransportResponse};

/// 记录下来的一次请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub body: String,
    pub url: String,
    pub content_type: String,
    pub version: u32,
}

/// 返回固定响应的测试传输层
pub struct MockTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        body: String,
        url: &str,
        content_type: &str,
        version: u32,
    ) -> Result<TransportResponse, PushError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            body,
            url: url.to_string(),
            content_type: content_type.to_string(),
            version,
        });
        TransportResponse::new(self.status, self.body.clone()).error_for_status()
    }
}
