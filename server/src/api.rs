use serde::{Deserialize, Serialize};
use serde_json::Value;
use urbanairship::{PushPayload, PushResponse};

/// 推送请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushRequest {
    /// 目标平台
    pub platform: String,
    /// 平台的配置信息 (e.g., app key, master secret)
    /// 使用 serde_json::Value 以支持不同平台的异构配置
    pub config: Value,
    /// 推送内容
    pub push: PushPayload,
}

/// 定时推送请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub platform: String,
    pub config: Value,
    /// 调度描述
    pub schedule: Value,
    #[serde(default)]
    pub name: Option<String>,
    pub push: PushPayload,
}

/// 转发结果
#[derive(Debug, Clone, Serialize)]
pub struct RelayResponse {
    /// 是否成功
    pub success: bool,
    /// 平台返回的响应
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<PushResponse>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 平台返回的 HTTP 状态码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl RelayResponse {
    pub fn ok(response: PushResponse) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
            upstream_status: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(message.into()),
            upstream_status: None,
        }
    }

    pub fn upstream_error(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            upstream_status: status,
            ..Self::error(message)
        }
    }
}
