//! 通知内容、设备类型、选项和富消息的构建器

use serde_json::{Map, Value, json};

/// 设备类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Ios,
    Android,
    Amazon,
    Wns,
    Mpns,
    Blackberry,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Ios => "ios",
            DeviceType::Android => "android",
            DeviceType::Amazon => "amazon",
            DeviceType::Wns => "wns",
            DeviceType::Mpns => "mpns",
            DeviceType::Blackberry => "blackberry",
        }
    }
}

/// 指定设备类型列表
pub fn device_types(types: &[DeviceType]) -> Value {
    Value::Array(types.iter().map(|t| Value::from(t.as_str())).collect())
}

/// 全部设备类型
pub fn all_device_types() -> Value {
    Value::from("all")
}

/// 推送选项，`expiry` 可以是秒数或 ISO 时间字符串
pub fn options(expiry: impl Into<Value>) -> Value {
    let expiry: Value = expiry.into();
    json!({ "expiry": expiry })
}

fn insert_some(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

/// iOS 平台专属内容
#[derive(Debug, Clone, Default)]
pub struct IosPayload {
    alert: Option<String>,
    badge: Option<Value>,
    sound: Option<String>,
    content_available: bool,
    category: Option<String>,
    extra: Option<Map<String, Value>>,
}

impl IosPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    /// 角标：数字，或 `"auto"`、`"+1"` 这类字符串
    pub fn badge(mut self, badge: impl Into<Value>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// 静默推送
    pub fn content_available(mut self) -> Self {
        self.content_available = true;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut map = Map::new();
        insert_some(&mut map, "alert", self.alert.map(Value::from));
        insert_some(&mut map, "badge", self.badge);
        insert_some(&mut map, "sound", self.sound.map(Value::from));
        if self.content_available {
            map.insert("content-available".to_string(), Value::from(true));
        }
        insert_some(&mut map, "category", self.category.map(Value::from));
        insert_some(&mut map, "extra", self.extra.map(Value::Object));
        Value::Object(map)
    }
}

/// Android 平台专属内容
#[derive(Debug, Clone, Default)]
pub struct AndroidPayload {
    alert: Option<String>,
    collapse_key: Option<String>,
    time_to_live: Option<Value>,
    delay_while_idle: bool,
    extra: Option<Map<String, Value>>,
}

impl AndroidPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    pub fn collapse_key(mut self, key: impl Into<String>) -> Self {
        self.collapse_key = Some(key.into());
        self
    }

    /// 存活时间：秒数或 ISO 时间字符串
    pub fn time_to_live(mut self, ttl: impl Into<Value>) -> Self {
        self.time_to_live = Some(ttl.into());
        self
    }

    pub fn delay_while_idle(mut self) -> Self {
        self.delay_while_idle = true;
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .get_or_insert_with(Map::new)
            .insert(key.into(), Value::from(value.into()));
        self
    }

    pub fn build(self) -> Value {
        let mut map = Map::new();
        insert_some(&mut map, "alert", self.alert.map(Value::from));
        insert_some(&mut map, "collapse_key", self.collapse_key.map(Value::from));
        insert_some(&mut map, "time_to_live", self.time_to_live);
        if self.delay_while_idle {
            map.insert("delay_while_idle".to_string(), Value::from(true));
        }
        insert_some(&mut map, "extra", self.extra.map(Value::Object));
        Value::Object(map)
    }
}

/// 通知内容构建器
#[derive(Debug, Clone, Default)]
pub struct Notification {
    alert: Option<String>,
    ios: Option<Value>,
    android: Option<Value>,
    amazon: Option<Value>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有平台通用的提示文本
    pub fn alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    pub fn ios(mut self, ios: IosPayload) -> Self {
        self.ios = Some(ios.build());
        self
    }

    pub fn android(mut self, android: AndroidPayload) -> Self {
        self.android = Some(android.build());
        self
    }

    /// Amazon 与 Android 的字段一致
    pub fn amazon(mut self, amazon: AndroidPayload) -> Self {
        self.amazon = Some(amazon.build());
        self
    }

    pub fn build(self) -> Value {
        let mut map = Map::new();
        insert_some(&mut map, "alert", self.alert.map(Value::from));
        insert_some(&mut map, "ios", self.ios);
        insert_some(&mut map, "android", self.android);
        insert_some(&mut map, "amazon", self.amazon);
        Value::Object(map)
    }
}

/// 富消息（Message Center）
#[derive(Debug, Clone)]
pub struct RichMessage {
    title: String,
    body: String,
    content_type: Option<String>,
    content_encoding: Option<String>,
    extra: Option<Map<String, Value>>,
    expiry: Option<Value>,
}

impl RichMessage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            content_type: None,
            content_encoding: None,
            extra: None,
            expiry: None,
        }
    }

    /// 例如 `text/html`
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// `utf-8` 或 `base64`
    pub fn content_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.content_encoding = Some(encoding.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .get_or_insert_with(Map::new)
            .insert(key.into(), Value::from(value.into()));
        self
    }

    pub fn expiry(mut self, expiry: impl Into<Value>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }

    pub fn build(self) -> Value {
        let mut map = Map::new();
        map.insert("title".to_string(), Value::from(self.title));
        map.insert("body".to_string(), Value::from(self.body));
        insert_some(&mut map, "content_type", self.content_type.map(Value::from));
        insert_some(
            &mut map,
            "content_encoding",
            self.content_encoding.map(Value::from),
        );
        insert_some(&mut map, "extra", self.extra.map(Value::Object));
        insert_some(&mut map, "expiry", self.expiry);
        Value::Object(map)
    }
}
