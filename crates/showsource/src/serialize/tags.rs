/// Теги без содержимого и без закрывающего тега.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Теги, содержимое которых выводится как есть.
pub const LITERAL_TAGS: &[&str] = &["script", "style"];

pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

pub fn is_literal(tag: &str) -> bool {
    LITERAL_TAGS.contains(&tag)
}

/// Убирает пустые строки в начале и в конце, остальное не трогает.
pub fn trim_blank_lines(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |last| last + 1);

    lines[start..end].join("\n")
}
