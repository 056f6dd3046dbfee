//! Обёртка над деревом `scraper::Html`: доступ к узлам, селекторы, клонирование.

mod document;
mod manipulation;
mod parser;
mod selectors;

pub use document::{Document, qualified_attributes};
pub use selectors::compile_selector_list;
