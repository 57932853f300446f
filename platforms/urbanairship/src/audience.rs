//! 受众选择器
//!
//! 只负责拼装 JSON，不做任何格式校验，非法的选择器由服务端拒绝。

use serde_json::{Value, json};

/// 全部设备
pub const ALL: &str = "all";

/// 全部设备的选择器
pub fn all() -> Value {
    Value::from(ALL)
}

fn selector(kind: &str, value: impl Into<String>) -> Value {
    let value: String = value.into();
    json!({ kind: value })
}

pub fn tag(tag: impl Into<String>) -> Value {
    selector("tag", tag)
}

pub fn alias(alias: impl Into<String>) -> Value {
    selector("alias", alias)
}

pub fn segment(segment: impl Into<String>) -> Value {
    selector("segment", segment)
}

/// iOS device token
pub fn device_token(token: impl Into<String>) -> Value {
    selector("device_token", token)
}

/// BlackBerry PIN
pub fn device_pin(pin: impl Into<String>) -> Value {
    selector("device_pin", pin)
}

pub fn apid(uuid: impl Into<String>) -> Value {
    selector("apid", uuid)
}

pub fn ios_channel(uuid: impl Into<String>) -> Value {
    selector("ios_channel", uuid)
}

pub fn android_channel(uuid: impl Into<String>) -> Value {
    selector("android_channel", uuid)
}

pub fn amazon_channel(uuid: impl Into<String>) -> Value {
    selector("amazon_channel", uuid)
}

/// Windows 8 APID
pub fn wns(uuid: impl Into<String>) -> Value {
    selector("wns", uuid)
}

/// Windows Phone 8 APID
pub fn mpns(uuid: impl Into<String>) -> Value {
    selector("mpns", uuid)
}

/// 同时满足所有子选择器
pub fn and(children: impl IntoIterator<Item = Value>) -> Value {
    json!({ "and": children.into_iter().collect::<Vec<_>>() })
}

/// 满足任一子选择器
pub fn or(children: impl IntoIterator<Item = Value>) -> Value {
    json!({ "or": children.into_iter().collect::<Vec<_>>() })
}

pub fn not(child: Value) -> Value {
    json!({ "not": child })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_selectors() {
        assert_eq!(all(), json!("all"));
        assert_eq!(tag("sports"), json!({"tag": "sports"}));
        assert_eq!(alias("user-1"), json!({"alias": "user-1"}));
        assert_eq!(
            ios_channel("9c36e8c7-5a73-47c0-9716-99fd3d4197d5"),
            json!({"ios_channel": "9c36e8c7-5a73-47c0-9716-99fd3d4197d5"})
        );
        assert_eq!(device_pin("12345678"), json!({"device_pin": "12345678"}));
    }

    #[test]
    fn test_no_local_validation() {
        assert_eq!(ios_channel("not-a-uuid"), json!({"ios_channel": "not-a-uuid"}));
    }

    #[test]
    fn test_compound_selectors() {
        let selector = and([
            tag("sports"),
            or([alias("a"), alias("b")]),
            not(segment("muted")),
        ]);
        assert_eq!(
            selector,
            json!({
                "and": [
                    {"tag": "sports"},
                    {"or": [{"alias": "a"}, {"alias": "b"}]},
                    {"not": {"segment": "muted"}},
                ]
            })
        );
    }
}
