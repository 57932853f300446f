//! 定时推送的调度描述

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Value, json};

const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 在指定的 UTC 时间发送
pub fn scheduled_time(at: DateTime<Utc>) -> Value {
    json!({ "scheduled_time": at.format(SCHEDULE_FORMAT).to_string() })
}

/// 在设备本地时间发送
pub fn local_scheduled_time(at: NaiveDateTime) -> Value {
    json!({ "local_scheduled_time": at.format(SCHEDULE_FORMAT).to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_scheduled_time() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 5).unwrap();
        assert_eq!(
            scheduled_time(at),
            json!({"scheduled_time": "2026-10-18T12:30:05"})
        );
    }

    #[test]
    fn test_local_scheduled_time() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(
            local_scheduled_time(at),
            json!({"local_scheduled_time": "2026-01-02T08:00:00"})
        );
    }
}
