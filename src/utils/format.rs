//! Formatting utilities for file sizes and other display values.

/// Binary-prefixed size units.
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count for display (e.g., "1023 B", "1.5 KB", "2.0 MB").
///
/// Divides by 1024 until the value drops below 1024 or the largest unit is
/// reached. Bytes are shown without decimals, every other unit with one.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        // Half-up to one decimal; `{:.1}` alone rounds ties to even
        let tenths = (value * 10.0).round() / 10.0;
        format!("{:.1} {}", tenths, SIZE_UNITS[unit])
    }
}

/// Format a playback position as `m:ss` (or `h:mm:ss` past one hour).
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1280), "1.3 KB");
        assert_eq!(human_size(3328), "3.3 KB");
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(1_048_576), "1.0 MB");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_human_size_caps_at_terabytes() {
        let bytes = 2048 * 1024u64.pow(4);
        assert_eq!(human_size(bytes), "2048.0 TB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(65.9), "1:05");
        assert_eq!(format_timestamp(3723.0), "1:02:03");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
    }
}
