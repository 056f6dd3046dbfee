use crate::error::ShowSourceError;
use ego_tree::NodeId;
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use std::borrow::Cow;

/// Атрибуты элемента в исходном порядке с полными именами.
///
/// Атрибуты из пространств имён выводятся с префиксом (`xlink:href`),
/// как они записаны в разметке.
pub fn qualified_attributes(element: &Element) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
    element.attrs.iter().map(|(name, value)| {
        let qualified = match name.prefix.as_deref() {
            Some(prefix) => Cow::Owned(format!("{prefix}:{}", &*name.local)),
            None => Cow::Borrowed(&*name.local),
        };
        (qualified, &**value)
    })
}

/// Разобранный HTML-документ, с которым работают сериализатор и монтирование.
///
/// Узлы адресуются через `ego_tree::NodeId`. Идентификаторы сохраняются при
/// клонировании, поэтому один и тот же `NodeId` указывает на соответствующий
/// узел копии.
#[derive(Debug, Clone)]
pub struct Document {
    pub(super) html: Html,
}

impl Document {
    pub fn new() -> Self {
        Self {
            html: Html::new_document(),
        }
    }

    pub fn from_html(html: Html) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Элемент `<html>` (для фрагментов это обёртка вокруг содержимого).
    pub fn root_id(&self) -> NodeId {
        self.html.root_element().id()
    }

    pub fn node(&self, node_id: NodeId) -> Result<ego_tree::NodeRef<'_, Node>, ShowSourceError> {
        self.html
            .tree
            .get(node_id)
            .ok_or(ShowSourceError::NodeNotFound(node_id))
    }

    pub fn element(&self, node_id: NodeId) -> Result<ElementRef<'_>, ShowSourceError> {
        let node = self.node(node_id)?;
        ElementRef::wrap(node).ok_or(ShowSourceError::NotAnElement(node_id))
    }

    pub fn attribute(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.element(node_id).ok()?.value().attr(name)
    }

    pub fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).ok().map(|element| element.value().name())
    }

    /// Атрибуты элемента в исходном порядке.
    pub fn attributes(&self, node_id: NodeId) -> Vec<(Cow<'_, str>, &str)> {
        self.element(node_id)
            .map(|element| qualified_attributes(element.value()).collect())
            .unwrap_or_default()
    }

    /// Возвращает `true`, если `node_id` лежит внутри поддерева `ancestor_id`
    /// (сам `ancestor_id` тоже считается).
    pub fn is_within(&self, ancestor_id: NodeId, node_id: NodeId) -> bool {
        let Ok(node) = self.node(node_id) else {
            return false;
        };
        node.id() == ancestor_id || node.ancestors().any(|ancestor| ancestor.id() == ancestor_id)
    }

    pub fn get_text_content(&self, node_id: NodeId) -> String {
        self.element(node_id)
            .map(|element| element.text().collect())
            .unwrap_or_default()
    }

    pub fn inner_html(&self, node_id: NodeId) -> String {
        self.element(node_id)
            .map(|element| element.inner_html())
            .unwrap_or_default()
    }

    /// Сериализует весь документ обратно в HTML.
    pub fn to_html(&self) -> String {
        self.html.html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
