use common::{Method, PushError, Transport};
use log::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{API_VERSION, PUSH_URL, SCHEDULES_URL};

const JSON_CONTENT_TYPE: &str = "application/json";

/// 推送请求体
///
/// `options` 与 `message` 未设置时不会出现在序列化结果中。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    pub audience: Value,
    pub notification: Value,
    pub device_types: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// 定时推送请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePayload {
    pub schedule: Value,
    pub push: PushPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// null counts as unset
fn present(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        value => Some(value),
    }
}

/// 一次推送：设置受众、通知内容等后发送
pub struct Push<'a> {
    airship: &'a dyn Transport,
    pub audience: Value,
    pub notification: Value,
    pub device_types: Value,
    pub options: Option<Value>,
    pub message: Option<Value>,
}

impl<'a> Push<'a> {
    pub fn new(airship: &'a dyn Transport) -> Self {
        Self {
            airship,
            audience: Value::Null,
            notification: Value::Null,
            device_types: Value::Null,
            options: None,
            message: None,
        }
    }

    /// 从已有的请求体构建推送
    pub fn from_payload(airship: &'a dyn Transport, payload: PushPayload) -> Self {
        Self {
            airship,
            audience: payload.audience,
            notification: payload.notification,
            device_types: payload.device_types,
            options: payload.options.and_then(present),
            message: payload.message.and_then(present),
        }
    }

    /// 设置受众
    pub fn audience(mut self, audience: Value) -> Self {
        self.audience = audience;
        self
    }

    /// 设置通知内容
    pub fn notification(mut self, notification: Value) -> Self {
        self.notification = notification;
        self
    }

    /// 设置目标设备类型
    pub fn device_types(mut self, device_types: Value) -> Self {
        self.device_types = device_types;
        self
    }

    pub fn options(mut self, options: Value) -> Self {
        self.options = present(options);
        self
    }

    /// 设置富消息
    pub fn message(mut self, message: Value) -> Self {
        self.message = present(message);
        self
    }

    pub fn payload(&self) -> PushPayload {
        PushPayload {
            audience: self.audience.clone(),
            notification: self.notification.clone(),
            device_types: self.device_types.clone(),
            options: self.options.clone().and_then(present),
            message: self.message.clone().and_then(present),
        }
    }

    /// 发送推送
    ///
    /// 鉴权失败返回 [`PushError::Unauthorized`]，其他失败返回
    /// [`PushError::RequestFailure`]，携带状态码和响应体。
    pub async fn send(&self) -> Result<PushResponse, PushError> {
        let body = serde_json::to_string(&self.payload())
            .map_err(|e| PushError::MessageError(e.to_string()))?;
        let response = self
            .airship
            .request(Method::Post, body, PUSH_URL, JSON_CONTENT_TYPE, API_VERSION)
            .await?;

        let result = PushResponse::from(response.json()?);
        match &result.push_ids {
            Some(ids) => info!("Push successful. push_ids: {}", ids.join(", ")),
            None => warn!("Push successful, but the response carried no push_ids"),
        }
        Ok(result)
    }
}

/// 定时推送：设置 schedule 与 push 后发送
pub struct ScheduledPush<'a> {
    airship: &'a dyn Transport,
    pub schedule: Value,
    pub name: Option<String>,
    pub push: Push<'a>,
}

impl<'a> ScheduledPush<'a> {
    pub fn new(airship: &'a dyn Transport) -> Self {
        Self {
            airship,
            schedule: Value::Null,
            name: None,
            push: Push::new(airship),
        }
    }

    /// 设置调度时间
    pub fn schedule(mut self, schedule: Value) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 设置要定时发送的推送
    pub fn push(mut self, push: Push<'a>) -> Self {
        self.push = push;
        self
    }

    pub fn payload(&self) -> SchedulePayload {
        SchedulePayload {
            schedule: self.schedule.clone(),
            push: self.push.payload(),
            name: self.name.clone(),
        }
    }

    /// 提交定时推送
    pub async fn send(&self) -> Result<PushResponse, PushError> {
        let body = serde_json::to_string(&self.payload())
            .map_err(|e| PushError::MessageError(e.to_string()))?;
        let response = self
            .airship
            .request(
                Method::Post,
                body,
                SCHEDULES_URL,
                JSON_CONTENT_TYPE,
                API_VERSION,
            )
            .await?;

        let result = PushResponse::from(response.json()?);
        info!(
            "Push successful. push_ids: {}",
            result.push_ids.as_deref().unwrap_or_default().join(", ")
        );
        Ok(result)
    }
}

/// 推送或定时推送成功后的响应
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushResponse {
    pub ok: bool,
    pub push_ids: Option<Vec<String>>,
    pub schedule_ids: Option<Vec<String>>,
    pub operation_id: Option<String>,
    /// 完整的原始响应
    pub payload: Value,
}

// A list with any non-string item counts as absent; the raw value stays in `payload`.
fn string_list(data: &Value, key: &str) -> Option<Vec<String>> {
    let items = data.get(key)?.as_array()?;
    let ids: Option<Vec<String>> = items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect();
    if ids.is_none() {
        warn!("Ignoring {} in response: expected a list of strings", key);
    }
    ids
}

impl From<Value> for PushResponse {
    fn from(data: Value) -> Self {
        Self {
            ok: data.get("ok").and_then(Value::as_bool).unwrap_or(false),
            push_ids: string_list(&data, "push_ids"),
            schedule_ids: string_list(&data, "schedule_ids"),
            operation_id: data
                .get("operation_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            payload: data,
        }
    }
}
