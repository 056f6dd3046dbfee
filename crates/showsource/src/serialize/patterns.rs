use crate::error::ShowSourceError;
use regex::Regex;

/// Glob-шаблоны имён атрибутов из `separate_elements`.
///
/// Поддерживается только `*` (любая последовательность символов), всё
/// остальное сравнивается буквально. Шаблон должен совпасть с именем целиком.
#[derive(Debug, Clone, Default)]
pub struct SeparatePatterns {
    patterns: Vec<Regex>,
}

impl SeparatePatterns {
    /// Разбирает список шаблонов через пробел.
    pub fn parse(patterns: Option<&str>) -> Result<Self, ShowSourceError> {
        let patterns = patterns
            .unwrap_or_default()
            .split_whitespace()
            .map(glob_to_regex)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> Result<Regex, ShowSourceError> {
    let body = glob
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^{body}$")).map_err(|err| ShowSourceError::InvalidPattern {
        pattern: glob.to_string(),
        message: err.to_string(),
    })
}
