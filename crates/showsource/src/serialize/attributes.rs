//! Раскладка атрибутов открывающего тега по строкам.

use std::borrow::Cow;

use super::patterns::SeparatePatterns;
use crate::options::Options;

/// Экранирует значение атрибута так же, как это делает HTML-сериализатор.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"', '\u{a0}']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Открывающий тег, собираемый атрибут за атрибутом.
///
/// Атрибут уходит на новую строку (с префиксом `" " + indent`), если:
/// его имя подходит под шаблон `separate_elements`; предыдущий атрибут
/// подошёл под шаблон; в текущей строке уже `max_attributes_per_line`
/// атрибутов; строка стала бы длиннее `tag_line_break`. Проверки идут
/// именно в этом порядке.
#[derive(Debug)]
pub struct OpeningTag<'a> {
    indent: &'a str,
    patterns: &'a SeparatePatterns,
    max_per_line: Option<usize>,
    line_break: Option<usize>,
    lines: Vec<String>,
    in_row: usize,
    separating: bool,
}

impl<'a> OpeningTag<'a> {
    pub fn new(
        indent: &'a str,
        tag: &str,
        options: &Options,
        patterns: &'a SeparatePatterns,
    ) -> Self {
        Self {
            indent,
            patterns,
            max_per_line: options.max_attributes_per_line,
            line_break: options.tag_line_break,
            lines: vec![format!("{indent}<{tag}")],
            in_row: 0,
            separating: false,
        }
    }

    pub fn push(&mut self, name: &str, value: &str) {
        let attribute = format!("{}=\"{}\"", name, escape_attribute(value));

        if self.patterns.matches(name) {
            self.separating = true;
            self.start_line(attribute);
            return;
        }

        if self.separating {
            self.separating = false;
            self.start_line(attribute);
            return;
        }

        if let Some(max) = self.max_per_line
            && self.in_row >= max
        {
            self.start_line(attribute);
            return;
        }

        if let Some(limit) = self.line_break
            && self.current_len() + attribute.chars().count() > limit
        {
            self.start_line(attribute);
            return;
        }

        let current = self.current_line();
        current.push(' ');
        current.push_str(&attribute);
        self.in_row += 1;
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn start_line(&mut self, attribute: String) {
        self.lines.push(format!(" {}{}", self.indent, attribute));
        self.in_row = 1;
    }

    fn current_line(&mut self) -> &mut String {
        // `lines` никогда не пуст: первая строка создаётся в `new`
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    fn current_len(&self) -> usize {
        self.lines.last().map_or(0, |line| line.chars().count())
    }
}
