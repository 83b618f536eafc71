use crate::types::Timestamp;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at dashboard scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Entity-prefixed opaque id ("att-…", "grv-…", "not-…")
pub fn tagged_id(prefix: &str) -> String {
    format!("{}-{}", prefix, snowflake_id())
}

/// 当前日历日 (YYYY-MM-DD, UTC)
pub fn today_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Current wall-clock time (HH:MM), used for check-in stamps
pub fn time_hhmm() -> String {
    chrono::Utc::now().format("%H:%M").to_string()
}

/// Current instant as ISO 8601 with seconds precision, no zone suffix -
/// the same shape as the seeded reference data
pub fn now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_id_carries_prefix() {
        let id = tagged_id("grv");
        assert!(id.starts_with("grv-"));
        assert!(id["grv-".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_today_date_shape() {
        let today = today_date();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }

    #[test]
    fn test_now_iso_extends_today() {
        assert!(now_iso().starts_with(&today_date()));
    }
}
