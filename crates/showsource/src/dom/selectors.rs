use super::document::Document;
use crate::error::ShowSourceError;
use ego_tree::NodeId;
use scraper::{ElementRef, Selector};

/// Компилирует список селекторов через запятую.
///
/// Пустые части списка отбрасываются; если не осталось ни одной, возвращается
/// `None`, и такой список ничего не совпадает. Остальные части не меняются:
/// запятая может стоять внутри значения в кавычках. Синтаксическая ошибка
/// возвращается вызывающему как есть.
pub fn compile_selector_list(selector_text: &str) -> Result<Option<Selector>, ShowSourceError> {
    let parts: Vec<&str> = selector_text
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .collect();

    if parts.is_empty() {
        return Ok(None);
    }
    let normalized = parts.join(",");

    Selector::parse(&normalized)
        .map(Some)
        .map_err(|err| ShowSourceError::InvalidSelector {
            selector: selector_text.to_string(),
            message: err.to_string(),
        })
}

impl Document {
    /// Все элементы документа, подходящие под селектор, в порядке документа.
    pub fn select_ids(&self, selector: &str) -> Result<Vec<NodeId>, ShowSourceError> {
        let Some(selector) = compile_selector_list(selector)? else {
            return Ok(Vec::new());
        };

        // Обход от корня дерева: отсоединённые узлы остаются в арене,
        // но в выборку попадать не должны
        Ok(self
            .html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| selector.matches(element))
            .map(|element| element.id())
            .collect())
    }

    pub fn select_first_id(&self, selector: &str) -> Result<Option<NodeId>, ShowSourceError> {
        Ok(self.select_ids(selector)?.into_iter().next())
    }

    /// Потомки `node_id` (без него самого), подходящие под селектор.
    pub fn select_ids_from(
        &self,
        node_id: NodeId,
        selector: &str,
    ) -> Result<Vec<NodeId>, ShowSourceError> {
        let element = self.element(node_id)?;
        let Some(selector) = compile_selector_list(selector)? else {
            return Ok(Vec::new());
        };

        Ok(element.select(&selector).map(|element| element.id()).collect())
    }

    /// Проверяет, подходит ли сам элемент под список селекторов.
    pub fn matches(&self, node_id: NodeId, selector: &str) -> Result<bool, ShowSourceError> {
        let element = self.element(node_id)?;
        let Some(selector) = compile_selector_list(selector)? else {
            return Ok(false);
        };

        Ok(selector.matches(&element))
    }
}
