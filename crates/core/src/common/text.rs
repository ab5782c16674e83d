/// 将字符串截断到最多 `max_chars` 个字符。
///
/// 按 Unicode 标量值计数，不会切断多字节 UTF-8 序列。
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
