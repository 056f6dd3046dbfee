//! Рекурсивный сериализатор: узел DOM → строки отформатированного HTML.
//!
//! Обход идёт обычной рекурсией в глубину, глубина стека равна глубине дерева.

mod attributes;
mod patterns;
mod tags;

pub use attributes::{OpeningTag, escape_attribute};
pub use patterns::SeparatePatterns;
pub use tags::{LITERAL_TAGS, VOID_TAGS, is_literal, is_void, trim_blank_lines};

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ego_tree::NodeId;
use scraper::{ElementRef, Node, Selector};

use crate::dom::{Document, compile_selector_list, qualified_attributes};
use crate::error::ShowSourceError;
use crate::options::{
    Options, Overrides, PLUGIN_PREFIX, append_selector, resolve, tag_selector,
};

/// Режим сериализации.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Читает документ как есть, ничего не меняя.
    #[default]
    Extract,
    /// Работает с копией, из которой удалены теги из `remove`.
    Beautify,
}

/// Сериализует элемент `node_id` в выбранном режиме.
///
/// `indent` добавляется перед каждой строкой корня, потомки получают его
/// плюс свои уровни отступа.
pub fn serialize(
    document: &Document,
    node_id: NodeId,
    process: &Overrides,
    caller: &Overrides,
    mode: Mode,
    indent: &str,
) -> Result<Vec<String>, ShowSourceError> {
    match mode {
        Mode::Extract => Serializer::new(document, process, caller).serialize_root(node_id, indent),
        Mode::Beautify => {
            let mut copy = document.clone();
            prune(&mut copy, node_id, process, caller)?;
            Serializer::new(&copy, process, caller).serialize_root(node_id, indent)
        }
    }
}

/// Режим extract: документ только читается.
pub fn extract(
    document: &Document,
    node_id: NodeId,
    process: &Overrides,
    caller: &Overrides,
) -> Result<Vec<String>, ShowSourceError> {
    serialize(document, node_id, process, caller, Mode::Extract, "")
}

/// Режим beautify: сериализует копию документа, из которой удалены потомки
/// с тегами из `remove`. Исходный документ не меняется.
pub fn beautify(
    document: &Document,
    node_id: NodeId,
    process: &Overrides,
    caller: &Overrides,
) -> Result<Vec<String>, ShowSourceError> {
    serialize(document, node_id, process, caller, Mode::Beautify, "")
}

/// Удаляет из копии потомков, перечисленных в `remove`.
///
/// Список корня действует на всё поддерево. Потомок со своим
/// `data-showsource-remove` дополнительно чистит собственное поддерево,
/// если вызывающий код не задал `remove` явно.
fn prune(
    copy: &mut Document,
    root_id: NodeId,
    process: &Overrides,
    caller: &Overrides,
) -> Result<(), ShowSourceError> {
    let local = Overrides::from_attributes(copy.attributes(root_id));
    let options = resolve(&Options::default(), process, &local, caller);

    let mut scopes = vec![(root_id, options.remove_selector())];
    if caller.remove.is_none() {
        let attribute = format!("{PLUGIN_PREFIX}-remove");
        for scope_id in copy.select_ids_from(root_id, &format!("[{attribute}]"))? {
            let selector = copy.attribute(scope_id, &attribute).and_then(tag_selector);
            scopes.push((scope_id, selector));
        }
    }

    for (scope_id, selector) in scopes {
        let Some(selector) = selector else {
            continue;
        };
        if !copy.is_within(root_id, scope_id) {
            continue;
        }

        let removed = copy.remove_matching(scope_id, &selector)?;
        tracing::trace!("beautify: removed {} node(s) matching `{}`", removed, selector);
    }

    Ok(())
}

struct Serializer<'a> {
    document: &'a Document,
    process: &'a Overrides,
    caller: &'a Overrides,
    persistent: Overrides,
    base: Options,
    // Селекторы и шаблоны наследуются без изменений, компилируем один раз
    selectors: HashMap<String, Option<Selector>>,
    patterns: HashMap<String, SeparatePatterns>,
}

impl<'a> Serializer<'a> {
    fn new(document: &'a Document, process: &'a Overrides, caller: &'a Overrides) -> Self {
        let persistent = caller.persistent();
        let base = resolve(&Options::default(), process, &Overrides::default(), &persistent);

        Self {
            document,
            process,
            caller,
            persistent,
            base,
            selectors: HashMap::new(),
            patterns: HashMap::new(),
        }
    }

    fn serialize_root(&mut self, node_id: NodeId, indent: &str) -> Result<Vec<String>, ShowSourceError> {
        let document = self.document;
        let element = document.element(node_id)?;
        let local = Overrides::from_attributes(element.value().attrs());
        let options = resolve(&Options::default(), self.process, &local, self.caller);

        self.serialize_element(element, options, indent)
    }

    fn serialize_child(
        &mut self,
        element: ElementRef<'a>,
        parent: &Options,
        indent: &str,
    ) -> Result<Vec<String>, ShowSourceError> {
        let local = Overrides::from_attributes(element.value().attrs());
        let options = resolve(
            &parent.inherit(&self.base),
            &Overrides::default(),
            &local,
            &self.persistent,
        );

        self.serialize_element(element, options, indent)
    }

    fn serialize_element(
        &mut self,
        element: ElementRef<'a>,
        mut options: Options,
        indent: &str,
    ) -> Result<Vec<String>, ShowSourceError> {
        let tag = element.value().name();

        if options.skip {
            tracing::trace!("skip <{}>", tag);
            return Ok(Vec::new());
        }

        if let Some(selector) = options.skip_selector.as_deref()
            && self.matches(element, selector)?
        {
            tracing::trace!("skip <{}>: matches `{}`", tag, selector);
            return Ok(Vec::new());
        }

        // Добавки дописываются после проверки skip: skip_selector_add
        // действует только на потомков
        options.skip_selector = append_selector(
            options.skip_selector.take(),
            options.skip_selector_add.as_deref(),
        );
        options.hide_selector = append_selector(
            options.hide_selector.take(),
            options.hide_selector_add.as_deref(),
        );

        let hidden = options.hide
            || match options.hide_selector.as_deref() {
                Some(selector) => self.matches(element, selector)?,
                None => false,
            };

        let mut lines = if hidden {
            tracing::trace!("hide <{}>", tag);
            Vec::new()
        } else {
            self.opening_tag(element, &options, indent)?
        };

        let has_element_children = element.children().any(|child| child.value().is_element());

        if !has_element_children && !hidden {
            let inner = if options.skip_children {
                String::new()
            } else {
                element.inner_html()
            };
            close_leaf(&mut lines, tag, &inner, indent);
            return Ok(lines);
        }

        if !hidden && let Some(last) = lines.last_mut() {
            last.push('>');
        }

        if !options.skip_children {
            let text_indent = format!("{indent}{}", options.indentation);
            let child_indent = if hidden { indent } else { text_indent.as_str() };

            for child in element.children() {
                match child.value() {
                    Node::Text(text) => {
                        let text = text.trim();
                        if !text.is_empty() {
                            lines.push(format!("{text_indent}{text}"));
                        }
                    }
                    Node::Comment(comment) => {
                        lines.push(format!("{text_indent}<!--{}-->", comment.trim()));
                    }
                    Node::Element(_) => {
                        if let Some(child) = ElementRef::wrap(child) {
                            lines.extend(self.serialize_child(child, &options, child_indent)?);
                        }
                    }
                    _ => {}
                }
            }
        }

        if !hidden {
            lines.push(format!("{indent}</{tag}>"));
        }

        Ok(lines)
    }

    fn opening_tag(
        &mut self,
        element: ElementRef<'a>,
        options: &Options,
        indent: &str,
    ) -> Result<Vec<String>, ShowSourceError> {
        let patterns = self.separate_patterns(options.separate_elements.as_deref())?;
        let removed = options.removed_attributes();

        let mut opening = OpeningTag::new(indent, element.value().name(), options, patterns);
        for (name, value) in qualified_attributes(element.value()) {
            if options.hide_plugin && name.starts_with(PLUGIN_PREFIX) {
                continue;
            }
            if removed.contains(&name.as_ref()) {
                continue;
            }
            opening.push(&name, value);
        }

        Ok(opening.into_lines())
    }

    fn matches(&mut self, element: ElementRef<'a>, selector: &str) -> Result<bool, ShowSourceError> {
        let compiled = match self.selectors.entry(selector.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(compile_selector_list(selector)?),
        };

        Ok(compiled
            .as_ref()
            .is_some_and(|compiled| compiled.matches(&element)))
    }

    fn separate_patterns(
        &mut self,
        source: Option<&str>,
    ) -> Result<&SeparatePatterns, ShowSourceError> {
        let key = source.unwrap_or_default().to_string();
        match self.patterns.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(SeparatePatterns::parse(source)?)),
        }
    }
}

/// Закрывает элемент без дочерних элементов.
fn close_leaf(lines: &mut Vec<String>, tag: &str, inner: &str, indent: &str) {
    let wrapped = lines.len() > 1;
    let Some(last) = lines.last_mut() else {
        return;
    };

    if is_void(tag) {
        last.push('>');
        last.push_str(inner.trim());
    } else if is_literal(tag) {
        last.push('>');
        let body = trim_blank_lines(inner);
        if !body.is_empty() {
            lines.push(body);
        }
        lines.push(format!("{indent}</{tag}>"));
    } else if wrapped {
        last.push('>');
        last.push_str(inner.trim());
        lines.push(format!("{indent}</{tag}>"));
    } else {
        last.push_str(&format!(">{}</{tag}>", inner.trim()));
    }
}
