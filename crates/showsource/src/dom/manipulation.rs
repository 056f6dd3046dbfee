use super::document::Document;
use crate::error::ShowSourceError;
use ego_tree::{NodeId, NodeMut, NodeRef};
use scraper::Node;

impl Document {
    /// Отсоединяет узел вместе с поддеревом от родителя.
    pub fn detach(&mut self, node_id: NodeId) -> Result<(), ShowSourceError> {
        let mut node = self
            .html
            .tree
            .get_mut(node_id)
            .ok_or(ShowSourceError::NodeNotFound(node_id))?;
        node.detach();
        Ok(())
    }

    /// Удаляет всех потомков `scope_id`, подходящих под селектор.
    ///
    /// Возвращает количество отсоединённых узлов. Вложенные совпадения
    /// уходят вместе с предком и отдельно не считаются.
    pub fn remove_matching(
        &mut self,
        scope_id: NodeId,
        selector: &str,
    ) -> Result<usize, ShowSourceError> {
        let matches = self.select_ids_from(scope_id, selector)?;

        let mut removed = 0;
        for node_id in matches {
            if !self.is_within(scope_id, node_id) {
                continue;
            }
            self.detach(node_id)?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Копирует верхнеуровневые узлы фрагмента сразу после `node_id`.
    ///
    /// Возвращает идентификаторы вставленных узлов в порядке вставки.
    pub fn insert_fragment_after(
        &mut self,
        node_id: NodeId,
        fragment: &Document,
    ) -> Result<Vec<NodeId>, ShowSourceError> {
        let sources: Vec<NodeRef<'_, Node>> = fragment.html.root_element().children().collect();

        let mut anchor = node_id;
        let mut inserted = Vec::with_capacity(sources.len());
        for source in sources {
            let mut target = self
                .html
                .tree
                .get_mut(anchor)
                .ok_or(ShowSourceError::NodeNotFound(anchor))?;
            let mut copy = target.insert_after(source.value().clone());
            append_copies(&mut copy, source);
            anchor = copy.id();
            inserted.push(anchor);
        }

        Ok(inserted)
    }
}

fn append_copies(target: &mut NodeMut<'_, Node>, source: NodeRef<'_, Node>) {
    for child in source.children() {
        let mut copy = target.append(child.value().clone());
        append_copies(&mut copy, child);
    }
}
