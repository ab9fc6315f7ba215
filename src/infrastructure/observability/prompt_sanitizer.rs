const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PREFIXES: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens and redacts learner text before it reaches the logs.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &trimmed[..cut], total_chars),
        None => trimmed.to_string(),
    };

    SENSITIVE_PREFIXES
        .iter()
        .fold(visible, |text, prefix| redact_after(&text, prefix))
}

fn redact_after(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(prefix) {
        let value_start = idx + prefix.len();
        let value_end = rest[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .map_or(rest.len(), |i| value_start + i);

        result.push_str(&rest[..value_start]);
        result.push_str("[REDACTED]");
        rest = &rest[value_end..];
    }

    result.push_str(rest);
    result
}
