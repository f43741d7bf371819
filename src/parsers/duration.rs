//! 把上游渲染的时长文本解析成总秒数。

/// 按位置解释 `"分:秒"` 或 `"时:分:秒"` 形式的时长文本。
///
/// 无法解析的文本返回 `None`，绝不向调用方抛错：
/// 一个坏掉的时长标签不应该让整行条目解析失败。
///
/// ```
/// use ytmusic_helper_rs::parsers::duration::parse_duration_label;
///
/// assert_eq!(parse_duration_label("3:45"), Some(225));
/// assert_eq!(parse_duration_label("1:02:03"), Some(3723));
/// assert_eq!(parse_duration_label("notatime"), None);
/// ```
pub fn parse_duration_label(label: &str) -> Option<u64> {
    let parts: Vec<&str> = label.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let mut total: u64 = 0;
    for part in &parts {
        let n: u64 = part.parse().ok()?;
        total = total.checked_mul(60)?.checked_add(n)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_second_label() {
        assert_eq!(parse_duration_label("3:45"), Some(225));
        assert_eq!(parse_duration_label("0:07"), Some(7));
    }

    #[test]
    fn test_hour_minute_second_label() {
        assert_eq!(parse_duration_label("1:02:03"), Some(3723));
    }

    #[test]
    fn test_malformed_label_is_absent() {
        assert_eq!(parse_duration_label("notatime"), None);
        assert_eq!(parse_duration_label(""), None);
        assert_eq!(parse_duration_label("12"), None);
        assert_eq!(parse_duration_label("1:2:3:4"), None);
        assert_eq!(parse_duration_label("3:4x"), None);
    }

    #[test]
    fn test_overflowing_label_is_absent() {
        // 溢出 u64 的段位同样视为坏标签，而不是 panic 或回绕
        assert_eq!(parse_duration_label("18446744073709551615:59"), None);
        assert_eq!(parse_duration_label("99999999999999999999:00"), None);
    }

    #[test]
    fn test_label_with_surrounding_whitespace() {
        assert_eq!(parse_duration_label(" 3:45 "), Some(225));
    }
}
