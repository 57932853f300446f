use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 推送平台错误类型
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("Network error: {0}")]
    NetworkError(String),

    /// 鉴权失败 (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 其他非 2xx 响应
    #[error("Request failed with status: {status}, body: {body}")]
    RequestFailure { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Message error: {0}")]
    MessageError(String),
}

impl PushError {
    /// HTTP 状态码（仅限服务端返回的错误）
    pub fn status(&self) -> Option<u16> {
        match self {
            PushError::Unauthorized(_) => Some(401),
            PushError::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 解析服务端返回的错误详情
    pub fn failure_details(&self) -> Option<FailureDetails> {
        let body = match self {
            PushError::Unauthorized(body) => body,
            PushError::RequestFailure { body, .. } => body,
            _ => return None,
        };
        serde_json::from_str(body).ok()
    }
}

/// 服务端错误响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDetails {
    #[serde(default)]
    pub ok: bool,
    pub error: Option<String>,
    pub error_code: Option<i64>,
    pub details: Option<Value>,
}

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// 传输层返回的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 响应体
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 将响应体解码为 JSON
    pub fn json(&self) -> Result<Value, PushError> {
        serde_json::from_str(&self.body).map_err(|e| PushError::MessageError(e.to_string()))
    }

    /// 按状态码分类：2xx 成功，401 鉴权失败，其余为请求失败
    pub fn error_for_status(self) -> Result<Self, PushError> {
        match self.status {
            200..=299 => Ok(self),
            401 => Err(PushError::Unauthorized(self.body)),
            status => Err(PushError::RequestFailure {
                status,
                body: self.body,
            }),
        }
    }
}

/// 初始化配置trait
pub trait PushInitConfig: Send + Sync {
    /// 获取平台名称
    fn platform_name(&self) -> &str;

    /// 获取应用 key
    fn key(&self) -> &str;

    /// 获取密钥
    fn secret(&self) -> Option<&str>;

    /// 获取超时时间（秒）
    fn timeout(&self) -> u64;
}

/// 传输层trait（用于dyn兼容）
///
/// 负责鉴权、发送请求以及按状态码分类错误。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        body: String,
        url: &str,
        content_type: &str,
        version: u32,
    ) -> Result<TransportResponse, PushError>;
}

/// 推送平台trait（用于具体实现）
pub trait PushPlatform<C: PushInitConfig>: Transport {
    /// 创建一个新的推送平台实例
    fn new(config: C) -> Result<Self, PushError>
    where
        Self: Sized;
}

/// 平台工厂trait
pub trait PlatformFactory: Send + Sync {
    /// 根据JSON Value创建平台实例
    fn create(&self, config: Value) -> Result<Box<dyn Transport>, PushError>;

    /// 获取平台名称
    fn name(&self) -> &'static str;
}

/// 平台注册表
#[derive(Default)]
pub struct PlatformRegistry {
    factories: std::collections::HashMap<String, Box<dyn PlatformFactory>>,
}

impl PlatformRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self {
            factories: std::collections::HashMap::new(),
        }
    }

    /// 注册平台工厂
    pub fn register(&mut self, factory: Box<dyn PlatformFactory>) {
        self.factories.insert(factory.name().to_string(), factory);
    }

    /// 获取平台工厂
    pub fn get_factory(&self, name: &str) -> Option<&dyn PlatformFactory> {
        self.factories.get(name).map(|f| &**f)
    }

    /// 获取所有支持的平台名称
    pub fn list_platforms(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}
