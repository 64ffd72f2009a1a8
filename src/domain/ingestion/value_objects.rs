//! Ingestion Context - Value Objects

use std::fmt;
use std::time::Duration;

use super::IngestionError;

/// 字节数
///
/// `Display` 以 1024 为进制输出，如 `1.00MiB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByteSize(u64);

impl ByteSize {
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SUBDIVISION: f64 = 1024.0;
        const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

        f.write_str(&to_human_readable(self.0 as f64, SUBDIVISION, &UNITS))
    }
}

/// 耗时
///
/// `Display` 以 1000 为进制输出，如 `12.35ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    pub const fn new(duration: Duration) -> Self {
        Self(duration)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SUBDIVISION: f64 = 1000.0;
        const UNITS: [&str; 4] = ["ns", "μs", "ms", "s"];

        f.write_str(&to_human_readable(
            self.0.as_nanos() as f64,
            SUBDIVISION,
            &UNITS,
        ))
    }
}

/// 最后一个单位不再继续进位
fn to_human_readable(mut value: f64, subdivision: f64, units: &[&str]) -> String {
    let mut divisions = 0;
    while value >= subdivision && divisions + 1 < units.len() {
        value /= subdivision;
        divisions += 1;
    }

    format!("{:.2}{}", value, units[divisions])
}

/// 请求体大小上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(u64);

impl BodyLimit {
    pub fn new(max_bytes: u64) -> Result<Self, IngestionError> {
        if max_bytes == 0 {
            return Err(IngestionError::InvalidLimit(
                "body limit must be greater than 0".to_string(),
            ));
        }
        Ok(Self(max_bytes))
    }

    /// 校验客户端声明的 Content-Length（在创建临时文件之前）
    pub fn check_declared(&self, declared: u64) -> Result<(), IngestionError> {
        if declared > self.0 {
            return Err(IngestionError::PayloadTooLarge { limit: self.0 });
        }
        Ok(())
    }

    /// 校验已接收的字节数
    pub fn check_received(&self, received: u64) -> Result<(), IngestionError> {
        if received > self.0 {
            return Err(IngestionError::PayloadTooLarge { limit: self.0 });
        }
        Ok(())
    }
}

/// 一次成功写入的回执，仅用于日志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestReceipt {
    pub bytes_written: ByteSize,
    pub elapsed: Elapsed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_display() {
        assert_eq!(ByteSize::new(0).to_string(), "0.00B");
        assert_eq!(ByteSize::new(1023).to_string(), "1023.00B");
        assert_eq!(ByteSize::new(1024).to_string(), "1.00KiB");
        assert_eq!(ByteSize::new(1536).to_string(), "1.50KiB");
        assert_eq!(ByteSize::new(100 * 1024 * 1024).to_string(), "100.00MiB");
    }

    #[test]
    fn test_byte_size_stops_at_largest_unit() {
        let pib = 1024_u64.pow(5);
        assert_eq!(ByteSize::new(pib).to_string(), "1024.00TiB");
    }

    #[test]
    fn test_elapsed_display() {
        assert_eq!(Elapsed::new(Duration::from_nanos(999)).to_string(), "999.00ns");
        assert_eq!(Elapsed::new(Duration::from_micros(5)).to_string(), "5.00μs");
        assert_eq!(Elapsed::new(Duration::from_micros(12_350)).to_string(), "12.35ms");
        assert_eq!(Elapsed::new(Duration::from_secs(3600)).to_string(), "3600.00s");
    }

    #[test]
    fn test_body_limit_rejects_zero() {
        assert!(BodyLimit::new(0).is_err());
    }

    #[test]
    fn test_body_limit_boundaries() {
        let limit = BodyLimit::new(10).unwrap();
        assert!(limit.check_declared(10).is_ok());
        assert!(limit.check_received(0).is_ok());
        assert!(matches!(
            limit.check_declared(11),
            Err(IngestionError::PayloadTooLarge { limit: 10 })
        ));
        assert!(limit.check_received(11).is_err());
    }
}
