//! Time-related utilities.
//!
//! All timestamps in the application are Unix milliseconds in JST.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    let jst_offset = jst_offset();
    let now_utc = Utc::now();
    let now_jst: DateTime<FixedOffset> = now_utc.with_timezone(&jst_offset);
    now_jst.timestamp_millis()
}

/// Convert Unix timestamp (milliseconds) to JST RFC 3339 format
///
/// Out-of-range timestamps fall back to the Unix epoch rather than panic.
pub fn timestamp_to_jst_rfc3339(timestamp_millis: i64) -> String {
    let jst_offset = jst_offset();
    let seconds = timestamp_millis.div_euclid(1000);
    let nanos = (timestamp_millis.rem_euclid(1000) * 1_000_000) as u32;
    let dt = jst_offset
        .timestamp_opt(seconds, nanos)
        .single()
        .unwrap_or_else(|| jst_offset.timestamp_opt(0, 0).single().unwrap_or_default());
    dt.to_rfc3339()
}

fn jst_offset() -> FixedOffset {
    // JST is UTC+9; the offset is always representable
    FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_jst_timestamp_returns_positive_value() {
        // テスト項目: get_jst_timestamp が正の値を返す
        // given (前提条件):

        // when (操作):
        let timestamp = get_jst_timestamp();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_get_jst_timestamp_is_monotonic_enough() {
        // テスト項目: 連続呼び出しでタイムスタンプが減少しない
        // given (前提条件):
        let timestamp1 = get_jst_timestamp();

        // when (操作):
        std::thread::sleep(std::time::Duration::from_millis(10));
        let timestamp2 = get_jst_timestamp();

        // then (期待する結果):
        assert!(timestamp2 >= timestamp1);
    }

    #[test]
    fn test_timestamp_to_jst_rfc3339_format() {
        // テスト項目: タイムスタンプが正しく RFC 3339 形式に変換される
        // given (前提条件):
        // 2023-01-01 00:00:00 JST in milliseconds
        let timestamp = 1672498800000;

        // when (操作):
        let result = timestamp_to_jst_rfc3339(timestamp);

        // then (期待する結果):
        assert!(result.starts_with("2023-01-01T00:00:00"));
        assert!(result.contains("+09:00"));
    }

    #[test]
    fn test_timestamp_to_jst_rfc3339_with_milliseconds() {
        // テスト項目: ミリ秒を含むタイムスタンプが正しく変換される
        // given (前提条件):
        let timestamp = 1672498800123;

        // when (操作):
        let result = timestamp_to_jst_rfc3339(timestamp);

        // then (期待する結果):
        assert!(result.starts_with("2023-01-01T00:00:00"));
        assert!(result.contains("+09:00"));
    }
}
