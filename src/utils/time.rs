//! 时间工具函数
//!
//! Repository 层只接收 `i64` Unix millis。

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
