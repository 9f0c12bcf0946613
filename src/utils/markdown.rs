//! Escaping for Telegram MarkdownV2.

/// Characters MarkdownV2 treats as markup, backslash included.
const RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes every MarkdownV2 reserved character so `text` renders literally.
///
/// # Example
/// ```
/// use seat_alert_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Moscow (Kazansky)"), "Moscow \\(Kazansky\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
