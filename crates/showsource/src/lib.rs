pub mod dom;
pub mod error;
pub mod mount;
pub mod options;
pub mod serialize;

pub use dom::Document;
pub use error::ShowSourceError;
pub use options::{Options, Overrides, resolve};
pub use serialize::Mode;

use ego_tree::NodeId;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Точка входа для хост-кода: хранит умолчания процесса и запускает
/// сериализацию и монтирование.
#[derive(Debug, Clone, Default)]
pub struct ShowSource {
    defaults: Overrides,
}

impl ShowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создаёт экземпляр с заданными умолчаниями процесса.
    pub fn with_defaults(defaults: Overrides) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &Overrides {
        &self.defaults
    }

    /// Меняет умолчания процесса; действуют на все последующие вызовы.
    pub fn update_defaults(&mut self, update: impl FnOnce(&mut Overrides)) {
        update(&mut self.defaults);
        tracing::debug!("showsource defaults updated: {:?}", self.defaults);
    }

    /// Строки исходника элемента, документ не меняется.
    pub fn extract(
        &self,
        document: &Document,
        node_id: NodeId,
        overrides: &Overrides,
    ) -> Result<Vec<String>, ShowSourceError> {
        serialize::extract(document, node_id, &self.defaults, overrides)
    }

    /// Строки исходника копии элемента без тегов из `remove`.
    pub fn beautify(
        &self,
        document: &Document,
        node_id: NodeId,
        overrides: &Overrides,
    ) -> Result<Vec<String>, ShowSourceError> {
        serialize::beautify(document, node_id, &self.defaults, overrides)
    }

    /// Исходник элемента одной строкой (строки через `\n`).
    pub fn render(
        &self,
        document: &Document,
        node_id: NodeId,
        overrides: &Overrides,
        mode: Mode,
    ) -> Result<String, ShowSourceError> {
        let lines = serialize::serialize(document, node_id, &self.defaults, overrides, mode, "")?;
        Ok(lines.join("\n"))
    }

    /// Монтирует исходник после каждого элемента, подходящего под `selector`.
    pub fn show(
        &self,
        document: &mut Document,
        selector: &str,
        mode: Mode,
    ) -> Result<usize, ShowSourceError> {
        mount::show(document, selector, mode, &self.defaults)
    }

    /// То же, что `show` с селектором `div[data-showsource]` в режиме extract.
    pub fn init(&self, document: &mut Document) -> Result<usize, ShowSourceError> {
        self.show(document, mount::DEFAULT_SELECTOR, Mode::Extract)
    }
}
