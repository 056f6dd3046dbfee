use super::document::Document;
use scraper::Html;

impl Document {
    /// Разбирает полный HTML-документ.
    pub fn parse(source: &str) -> Self {
        let mut document = Self::new();
        document.parse_html(source);
        document
    }

    /// Разбирает фрагмент разметки (контекст `<body>`).
    pub fn parse_fragment(source: &str) -> Self {
        let html = Html::parse_fragment(source);
        log_parse_errors(&html);
        Self { html }
    }

    /// Заменяет содержимое документа результатом разбора `source`.
    pub fn parse_html(&mut self, source: &str) {
        let html = Html::parse_document(source);
        log_parse_errors(&html);
        self.html = html;
    }
}

fn log_parse_errors(html: &Html) {
    // html5ever восстанавливается сам, ошибки только для диагностики
    for error in &html.errors {
        tracing::trace!("html parse error: {}", error);
    }
}
