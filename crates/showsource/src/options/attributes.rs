//! Разбор локальных настроек узла из атрибутов `data-showsource-*`.

use super::Overrides;

/// Префикс служебных атрибутов. Сам `data-showsource` включает вывод для
/// элемента при монтировании.
pub const PLUGIN_PREFIX: &str = "data-showsource";

/// Булев флаг. Ложь только для `"false"` в любом регистре, любое другое
/// значение (и пустое, и `" false "` с пробелами) считается истиной.
pub fn parse_flag(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

fn parse_limit(name: &str, value: &str) -> Option<usize> {
    match value.trim().parse::<usize>() {
        Ok(limit) => Some(limit),
        Err(err) => {
            tracing::warn!(
                "ignoring {PLUGIN_PREFIX}-{name}=\"{value}\": expected a non-negative integer ({err})"
            );
            None
        }
    }
}

impl Overrides {
    /// Собирает локальный слой настроек из атрибутов узла.
    ///
    /// Отсутствующий атрибут оставляет поле `None`. Некорректные значения
    /// пишутся в лог и игнорируются.
    pub fn from_attributes<N, V>(attributes: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut overrides = Overrides::default();

        for (name, value) in attributes {
            let (name, value) = (name.as_ref(), value.as_ref());
            let Some(field) = name
                .strip_prefix(PLUGIN_PREFIX)
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };

            match field {
                "indentation" => overrides.indentation = Some(value.to_string()),
                "hide" => overrides.hide = Some(parse_flag(value)),
                "hide-selector" => overrides.hide_selector = Some(value.to_string()),
                "hide-selector-add" => overrides.hide_selector_add = Some(value.to_string()),
                "skip" => overrides.skip = Some(parse_flag(value)),
                "skip-selector" => overrides.skip_selector = Some(value.to_string()),
                "skip-selector-add" => overrides.skip_selector_add = Some(value.to_string()),
                "skip-children" => overrides.skip_children = Some(parse_flag(value)),
                "hide-plugin" => overrides.hide_plugin = Some(parse_flag(value)),
                "remove-attributes" => overrides.remove_attributes = Some(value.to_string()),
                "class" => {
                    if value.trim().is_empty() {
                        tracing::warn!(
                            "the value of the {PLUGIN_PREFIX}-class attribute must be a non-empty class list; keeping the default"
                        );
                    } else {
                        overrides.class = Some(value.to_string());
                    }
                }
                "tag-line-break" | "tag-length-limit" => {
                    if let Some(limit) = parse_limit(field, value) {
                        overrides.tag_line_break = Some(limit);
                    }
                }
                "max-attributes-per-line" | "max-attributes-in-row" => {
                    if let Some(max) = parse_limit(field, value) {
                        overrides.max_attributes_per_line = Some(max);
                    }
                }
                "separate-elements" => overrides.separate_elements = Some(value.to_string()),
                "remove" => overrides.remove = Some(value.to_string()),
                other => tracing::debug!("unknown option attribute {PLUGIN_PREFIX}-{other}"),
            }
        }

        overrides
    }
}
