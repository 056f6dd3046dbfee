//! Монтирование результата рядом с исходным элементом.
//!
//! Для каждого подходящего под селектор элемента сериализатор строит
//! исходник, и сразу после элемента вставляется
//! `<div class="..."><pre><code>…</code></pre></div>`.

use crate::dom::Document;
use crate::error::ShowSourceError;
use crate::options::{Options, Overrides, resolve};
use crate::serialize::{self, Mode, escape_attribute};

/// Селектор элементов, для которых вывод включён по умолчанию.
pub const DEFAULT_SELECTOR: &str = "div[data-showsource]";

/// Монтирует исходник каждого элемента, подходящего под `selector`.
///
/// Возвращает количество вставленных контейнеров. Сами элементы не меняются.
pub fn show(
    document: &mut Document,
    selector: &str,
    mode: Mode,
    process: &Overrides,
) -> Result<usize, ShowSourceError> {
    let targets = document.select_ids(selector)?;
    tracing::debug!("showsource: {} target(s) for `{}`", targets.len(), selector);

    let caller = Overrides::default();
    for &target in &targets {
        let source = serialize::serialize(document, target, process, &caller, mode, "")?.join("\n");

        let local = Overrides::from_attributes(document.attributes(target));
        let options = resolve(&Options::default(), process, &local, &caller);

        let fragment = Document::parse_fragment(&container_markup(&options.classes(), &source));
        document.insert_fragment_after(target, &fragment)?;
        tracing::trace!("showsource: mounted {} line(s) after {:?}", source.lines().count(), target);
    }

    Ok(targets.len())
}

fn container_markup(classes: &[&str], source: &str) -> String {
    let code = format!("<pre><code>{}</code></pre>", escape_text(source));
    if classes.is_empty() {
        format!("<div>{code}</div>")
    } else {
        format!(
            r#"<div class="{}">{code}</div>"#,
            escape_attribute(&classes.join(" "))
        )
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
