//! Настройки форматирования и их каскадное слияние.
//!
//! Итоговые [`Options`] собираются из четырёх слоёв, от младшего к старшему:
//! значения библиотеки по умолчанию, умолчания процесса ([`crate::ShowSource`]),
//! локальные атрибуты узла `data-showsource-*` и переопределения вызывающего
//! кода. Старший слой целиком заменяет поле младшего.

mod attributes;

pub use attributes::{PLUGIN_PREFIX, parse_flag};

/// Теги, которые режим beautify по умолчанию вырезает из копии.
pub const DEFAULT_REMOVE: &str = "h1 h2 h3 h4 h5 h6 p";

/// Классы контейнера с результатом по умолчанию.
pub const DEFAULT_CLASS: &str = "showsource";

/// Итоговые настройки для одного узла.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Единица отступа на уровень вложенности.
    pub indentation: String,
    /// Скрыть тег самого узла, сохранив детей.
    pub hide: bool,
    /// Узлы, подходящие под селектор, ведут себя как `hide`.
    pub hide_selector: Option<String>,
    /// Дописывается к `hide_selector`, а не заменяет его.
    pub hide_selector_add: Option<String>,
    /// Пропустить узел вместе с поддеревом.
    pub skip: bool,
    /// Узлы, подходящие под селектор, пропускаются.
    pub skip_selector: Option<String>,
    /// Дописывается к `skip_selector` для потомков.
    pub skip_selector_add: Option<String>,
    /// Вывести тег, но не содержимое.
    pub skip_children: bool,
    /// Не выводить собственные атрибуты `data-showsource*`.
    pub hide_plugin: bool,
    /// Имена атрибутов через пробел, которые не попадают в вывод.
    pub remove_attributes: Option<String>,
    /// Классы контейнера, куда монтируется результат.
    pub class: String,
    /// Максимальная длина строки, после которой атрибут переносится.
    pub tag_line_break: Option<usize>,
    /// Максимум атрибутов в одной строке.
    pub max_attributes_per_line: Option<usize>,
    /// Glob-шаблоны имён атрибутов, выносимых на отдельную строку.
    pub separate_elements: Option<String>,
    /// Теги, удаляемые из копии в режиме beautify.
    pub remove: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indentation: "  ".to_string(),
            hide: false,
            hide_selector: None,
            hide_selector_add: None,
            skip: false,
            skip_selector: None,
            skip_selector_add: None,
            skip_children: false,
            hide_plugin: true,
            remove_attributes: None,
            class: DEFAULT_CLASS.to_string(),
            tag_line_break: None,
            max_attributes_per_line: None,
            separate_elements: None,
            remove: Some(DEFAULT_REMOVE.to_string()),
        }
    }
}

impl Options {
    /// Переносит наследуемые поля из `self` поверх `base`.
    ///
    /// Наследуются отступ, `hide_plugin`, ограничения переноса, шаблоны
    /// `separate_elements` и оба селектора (уже с добавками). Остальные поля
    /// берутся из `base`.
    pub fn inherit(&self, base: &Options) -> Options {
        Options {
            indentation: self.indentation.clone(),
            hide_selector: self.hide_selector.clone(),
            skip_selector: self.skip_selector.clone(),
            hide_plugin: self.hide_plugin,
            tag_line_break: self.tag_line_break,
            max_attributes_per_line: self.max_attributes_per_line,
            separate_elements: self.separate_elements.clone(),
            ..base.clone()
        }
    }

    /// Имена из `remove_attributes`.
    pub fn removed_attributes(&self) -> Vec<&str> {
        self.remove_attributes
            .as_deref()
            .map(|names| names.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Классы контейнера.
    pub fn classes(&self) -> Vec<&str> {
        self.class.split_whitespace().collect()
    }

    /// Список `remove` в виде селектора (`"h1 p"` → `"h1,p"`).
    pub fn remove_selector(&self) -> Option<String> {
        tag_selector(self.remove.as_deref()?)
    }
}

/// Частичный набор настроек: `None` означает «наследовать».
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub indentation: Option<String>,
    pub hide: Option<bool>,
    pub hide_selector: Option<String>,
    pub hide_selector_add: Option<String>,
    pub skip: Option<bool>,
    pub skip_selector: Option<String>,
    pub skip_selector_add: Option<String>,
    pub skip_children: Option<bool>,
    pub hide_plugin: Option<bool>,
    pub remove_attributes: Option<String>,
    pub class: Option<String>,
    pub tag_line_break: Option<usize>,
    pub max_attributes_per_line: Option<usize>,
    pub separate_elements: Option<String>,
    pub remove: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Записывает заданные поля поверх `options`.
    pub fn apply_to(&self, options: &mut Options) {
        if let Some(indentation) = &self.indentation {
            options.indentation = indentation.clone();
        }
        if let Some(hide) = self.hide {
            options.hide = hide;
        }
        if let Some(selector) = &self.hide_selector {
            options.hide_selector = Some(selector.clone());
        }
        if let Some(selector) = &self.hide_selector_add {
            options.hide_selector_add = Some(selector.clone());
        }
        if let Some(skip) = self.skip {
            options.skip = skip;
        }
        if let Some(selector) = &self.skip_selector {
            options.skip_selector = Some(selector.clone());
        }
        if let Some(selector) = &self.skip_selector_add {
            options.skip_selector_add = Some(selector.clone());
        }
        if let Some(skip_children) = self.skip_children {
            options.skip_children = skip_children;
        }
        if let Some(hide_plugin) = self.hide_plugin {
            options.hide_plugin = hide_plugin;
        }
        if let Some(names) = &self.remove_attributes {
            options.remove_attributes = Some(names.clone());
        }
        if let Some(class) = &self.class {
            options.class = class.clone();
        }
        if let Some(limit) = self.tag_line_break {
            options.tag_line_break = Some(limit);
        }
        if let Some(max) = self.max_attributes_per_line {
            options.max_attributes_per_line = Some(max);
        }
        if let Some(patterns) = &self.separate_elements {
            options.separate_elements = Some(patterns.clone());
        }
        if let Some(remove) = &self.remove {
            options.remove = Some(remove.clone());
        }
    }

    /// Поля, которые переопределения вызывающего кода передают каждому
    /// потомку напрямую: они не наследуются и не являются локальными.
    pub fn persistent(&self) -> Overrides {
        Overrides {
            remove_attributes: self.remove_attributes.clone(),
            class: self.class.clone(),
            remove: self.remove.clone(),
            ..Overrides::default()
        }
    }

    pub fn indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = Some(indentation.into());
        self
    }

    pub fn hide(mut self, hide: bool) -> Self {
        self.hide = Some(hide);
        self
    }

    pub fn hide_selector(mut self, selector: impl Into<String>) -> Self {
        self.hide_selector = Some(selector.into());
        self
    }

    pub fn hide_selector_add(mut self, selector: impl Into<String>) -> Self {
        self.hide_selector_add = Some(selector.into());
        self
    }

    pub fn skip(mut self, skip: bool) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn skip_selector(mut self, selector: impl Into<String>) -> Self {
        self.skip_selector = Some(selector.into());
        self
    }

    pub fn skip_selector_add(mut self, selector: impl Into<String>) -> Self {
        self.skip_selector_add = Some(selector.into());
        self
    }

    pub fn skip_children(mut self, skip_children: bool) -> Self {
        self.skip_children = Some(skip_children);
        self
    }

    pub fn hide_plugin(mut self, hide_plugin: bool) -> Self {
        self.hide_plugin = Some(hide_plugin);
        self
    }

    pub fn remove_attributes(mut self, names: impl Into<String>) -> Self {
        self.remove_attributes = Some(names.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn tag_line_break(mut self, limit: usize) -> Self {
        self.tag_line_break = Some(limit);
        self
    }

    pub fn max_attributes_per_line(mut self, max: usize) -> Self {
        self.max_attributes_per_line = Some(max);
        self
    }

    pub fn separate_elements(mut self, patterns: impl Into<String>) -> Self {
        self.separate_elements = Some(patterns.into());
        self
    }

    pub fn remove(mut self, tags: impl Into<String>) -> Self {
        self.remove = Some(tags.into());
        self
    }
}

/// Сливает слои настроек от младшего к старшему.
pub fn resolve(
    defaults: &Options,
    process: &Overrides,
    local: &Overrides,
    caller: &Overrides,
) -> Options {
    let mut options = defaults.clone();
    process.apply_to(&mut options);
    local.apply_to(&mut options);
    caller.apply_to(&mut options);
    options
}

/// Превращает список тегов через пробел в список селекторов.
pub fn tag_selector(tags: &str) -> Option<String> {
    let tags: Vec<&str> = tags.split_whitespace().collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

/// Дописывает `addition` к списку селекторов через запятую.
pub fn append_selector(selector: Option<String>, addition: Option<&str>) -> Option<String> {
    match (selector, addition) {
        (Some(selector), Some(addition)) => Some(format!("{selector}, {addition}")),
        (None, Some(addition)) => Some(addition.to_string()),
        (selector, None) => selector,
    }
}
