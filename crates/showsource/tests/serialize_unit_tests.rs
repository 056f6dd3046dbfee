//! Тесты сериализатора: теги, атрибуты, каскад настроек, оба режима.

use pretty_assertions::assert_eq;
use showsource::{Document, Mode, Overrides, ShowSource, ShowSourceError};

fn parse(body: &str) -> Document {
    Document::parse(&format!("<!DOCTYPE html><html><head></head><body>{body}</body></html>"))
}

fn extract(body: &str, selector: &str, overrides: &Overrides) -> Vec<String> {
    let doc = parse(body);
    let node = doc.select_first_id(selector).unwrap().expect("target element");
    ShowSource::new().extract(&doc, node, overrides).unwrap()
}

fn extract_default(body: &str, selector: &str) -> Vec<String> {
    extract(body, selector, &Overrides::default())
}

#[test]
fn test_text_only_element_is_one_line() {
    let lines = extract_default(r#"<div id="a" data-x="1">hello</div>"#, "#a");
    assert_eq!(lines, vec![r#"<div id="a" data-x="1">hello</div>"#]);
}

#[test]
fn test_void_element() {
    assert_eq!(extract_default("<br>", "br"), vec!["<br>"]);
    assert_eq!(
        extract_default(r#"<img src="a.png" alt="A">"#, "img"),
        vec![r#"<img src="a.png" alt="A">"#]
    );
}

#[test]
fn test_literal_element_trims_blank_lines() {
    let lines = extract_default("<script>\n\nconsole.log(1)\n\n</script>", "script");
    assert_eq!(lines, vec!["<script>", "console.log(1)", "</script>"]);
}

#[test]
fn test_literal_element_keeps_inner_content() {
    let body = "<div id=\"r\"><style>\n  .a > .b { color: red; }\n\n  .c {}\n</style></div>";
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  <style>",
            "  .a > .b { color: red; }\n\n  .c {}",
            "  </style>",
            "</div>",
        ]
    );
}

#[test]
fn test_nested_elements_and_text() {
    let body = r#"
        <div id="r">
            Intro
            <span class="s">inner</span>
            <ul><li>one</li><li>two</li></ul>
        </div>
    "#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  Intro",
            r#"  <span class="s">inner</span>"#,
            "  <ul>",
            "    <li>one</li>",
            "    <li>two</li>",
            "  </ul>",
            "</div>",
        ]
    );
}

#[test]
fn test_comments_are_kept() {
    let lines = extract_default(r#"<div id="r"><!-- note --><p>x</p></div>"#, "#r");
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <!--note-->", "  <p>x</p>", "</div>"]);
}

#[test]
fn test_plugin_attributes_hidden_by_default() {
    let body = r#"<div id="r" data-showsource data-showsource-indentation="    "><p>x</p></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(lines, vec![r#"<div id="r">"#, "    <p>x</p>", "</div>"]);
}

#[test]
fn test_plugin_attributes_shown_when_requested() {
    let body = r#"<div id="r" data-showsource data-showsource-hide-plugin="false">x</div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![r#"<div id="r" data-showsource="" data-showsource-hide-plugin="false">x</div>"#]
    );
}

#[test]
fn test_attribute_values_are_escaped() {
    let lines = extract_default(r#"<a id="l" href="/?a=1&amp;b=2" title='say "hi"'>x</a>"#, "#l");
    assert_eq!(
        lines,
        vec![r#"<a id="l" href="/?a=1&amp;b=2" title="say &quot;hi&quot;">x</a>"#]
    );
}

#[test]
fn test_namespaced_attributes_keep_prefix() {
    let lines = extract_default(r##"<div id="r"><svg><use xlink:href="#a"></use></svg></div>"##, "#r");
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  <svg>",
            r##"    <use xlink:href="#a"></use>"##,
            "  </svg>",
            "</div>",
        ]
    );

    // remove_attributes работает с полным именем
    let lines = extract(
        r##"<div id="r"><svg><use xlink:href="#a" x="1"></use></svg></div>"##,
        "#r",
        &Overrides::new().remove_attributes("xlink:href"),
    );
    assert_eq!(lines[2], r#"    <use x="1"></use>"#);
}

#[test]
fn test_skip_returns_nothing() {
    let overrides = Overrides::new().skip(true).hide(true).max_attributes_per_line(1);
    let lines = extract(r#"<div id="r"><p>x</p></div>"#, "#r", &overrides);
    assert!(lines.is_empty());

    let lines = extract_default(r#"<div id="r" data-showsource-skip><p>x</p></div>"#, "#r");
    assert!(lines.is_empty());

    let lines = extract_default(r#"<div id="r" data-showsource-skip="FALSE">x</div>"#, "#r");
    assert_eq!(lines, vec![r#"<div id="r">x</div>"#]);
}

#[test]
fn test_skip_selector_drops_subtrees() {
    let body = r#"<ul id="l"><li>a</li><li class="x"><b>b</b></li><li>c</li></ul>"#;
    let lines = extract(body, "#l", &Overrides::new().skip_selector(".x"));
    assert_eq!(lines, vec![r#"<ul id="l">"#, "  <li>a</li>", "  <li>c</li>", "</ul>"]);
}

#[test]
fn test_skip_selector_add_applies_to_descendants() {
    let body = r#"<div id="r" class="k" data-showsource-skip-selector-add=".k, span"><span>s</span><b class="k">b</b><i>i</i></div>"#;
    let lines = extract(body, "#r", &Overrides::new().skip_selector("em"));
    assert_eq!(
        lines,
        vec![r#"<div id="r" class="k">"#, "  <i>i</i>", "</div>"]
    );
}

#[test]
fn test_selectors_with_comma_inside_quotes() {
    let body = r#"<div id="r"><p title="a, b">x</p><p>y</p></div>"#;

    let lines = extract(body, "#r", &Overrides::new().skip_selector(r#"[title="a, b"]"#));
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <p>y</p>", "</div>"]);

    let body = r#"<div id="r"><section title="a, b"><p>x</p></section></div>"#;
    let lines = extract(body, "#r", &Overrides::new().hide_selector(r#"[title="a, b"]"#));
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <p>x</p>", "</div>"]);
}

#[test]
fn test_child_selectors_and_patterns_replace_inherited_ones() {
    let body = r#"<div id="r" data-showsource-separate-elements="data-*" data-showsource-skip-selector="em"><em>e</em><p data-showsource-skip-selector="b" data-showsource-separate-elements="aria-*" data-a="1" aria-x="2" title="t"><b>b</b><em>kept</em></p><i data-a="1">i</i></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            r#"  <p data-a="1""#,
            r#"   aria-x="2""#,
            r#"   title="t">"#,
            "    <em>kept</em>",
            "  </p>",
            "  <i",
            r#"   data-a="1">i"#,
            "  </i>",
            "</div>",
        ]
    );
}

#[test]
fn test_hide_keeps_children_at_same_indent() {
    let body = r#"<div id="r"><section data-showsource-hide><p>a</p><p>b</p></section></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <p>a</p>", "  <p>b</p>", "</div>"]);
}

#[test]
fn test_hidden_root() {
    let body = r#"<div id="r"><p>a</p><span>b</span></div>"#;
    let lines = extract(body, "#r", &Overrides::new().hide(true));
    assert_eq!(lines, vec!["<p>a</p>", "<span>b</span>"]);

    // hide не наследуется
    let body = r#"<div id="r"><div><p>a</p></div></div>"#;
    let lines = extract(body, "#r", &Overrides::new().hide(true));
    assert_eq!(lines, vec!["<div>", "  <p>a</p>", "</div>"]);
}

#[test]
fn test_hidden_text_only_element() {
    let lines = extract(r#"<div id="r">hello</div>"#, "#r", &Overrides::new().hide(true));
    assert_eq!(lines, vec!["  hello"]);
}

#[test]
fn test_hide_selector_is_inherited() {
    let body = r#"<div id="r" data-showsource-hide-selector="section"><article><section><p>x</p></section></article></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  <article>",
            "    <p>x</p>",
            "  </article>",
            "</div>",
        ]
    );
}

#[test]
fn test_hide_selector_add_appends() {
    let body = r#"<div id="r" data-showsource-hide-selector-add="article"><article><section><p>x</p></section></article></div>"#;
    let lines = extract(body, "#r", &Overrides::new().hide_selector("section"));
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <p>x</p>", "</div>"]);
}

#[test]
fn test_skip_children() {
    let lines = extract_default(r#"<div id="r" data-showsource-skip-children><p>x</p></div>"#, "#r");
    assert_eq!(lines, vec![r#"<div id="r">"#, "</div>"]);

    let lines = extract_default(r#"<p id="p" data-showsource-skip-children>text</p>"#, "#p");
    assert_eq!(lines, vec![r#"<p id="p"></p>"#]);

    // skip_children не наследуется
    let body = r#"<div id="r"><div data-showsource-skip-children><p>x</p></div><p>y</p></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![r#"<div id="r">"#, "  <div>", "  </div>", "  <p>y</p>", "</div>"]
    );
}

#[test]
fn test_remove_attributes() {
    let body = r#"<div id="r" style="color: red" class="c"><p style="x" class="d">t</p></div>"#;
    let lines = extract(body, "#r", &Overrides::new().remove_attributes("style"));
    assert_eq!(
        lines,
        vec![r#"<div id="r" class="c">"#, r#"  <p class="d">t</p>"#, "</div>"]
    );

    // Локальный атрибут действует только на свой узел
    let body = r#"<div id="r" style="a" data-showsource-remove-attributes="style"><p style="b">t</p></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(
        lines,
        vec![r#"<div id="r">"#, r#"  <p style="b">t</p>"#, "</div>"]
    );
}

#[test]
fn test_max_attributes_per_line_in_nested_tags() {
    let body = r#"<div id="r" class="a" role="main"><span a="1" b="2" c="3">x</span></div>"#;
    let lines = extract(body, "#r", &Overrides::new().max_attributes_per_line(2));
    assert_eq!(
        lines,
        vec![
            r#"<div id="r" class="a""#,
            r#" role="main">"#,
            r#"  <span a="1" b="2""#,
            r#"   c="3">x"#,
            "  </span>",
            "</div>",
        ]
    );

    for line in &lines {
        assert!(line.matches("=\"").count() <= 2, "too many attributes: {line}");
    }
}

#[test]
fn test_tag_line_break_wraps_and_closes_on_own_line() {
    let body = r#"<a id="link" href="/docs/index.html">Docs</a>"#;
    let lines = extract(body, "#link", &Overrides::new().tag_line_break(20));
    assert_eq!(lines, vec![r#"<a id="link""#, r#" href="/docs/index.html">Docs"#, "</a>"]);
}

#[test]
fn test_tag_length_limit_alias() {
    let body = r#"<a id="link" data-showsource-tag-length-limit="20" href="/docs/index.html">Docs</a>"#;
    let lines = extract_default(body, "#link");
    assert_eq!(lines, vec![r#"<a id="link""#, r#" href="/docs/index.html">Docs"#, "</a>"]);
}

#[test]
fn test_separate_elements() {
    let body = r#"<button id="b" data-toggle="modal" data-target="x" type="button" class="btn">Go</button>"#;
    let lines = extract(body, "#b", &Overrides::new().separate_elements("data-*"));
    assert_eq!(
        lines,
        vec![
            r#"<button id="b""#,
            r#" data-toggle="modal""#,
            r#" data-target="x""#,
            r#" type="button" class="btn">Go"#,
            "</button>",
        ]
    );
}

#[test]
fn test_child_local_option_overrides_inherited() {
    let body = r#"<div id="r" a="1" b="2"><span data-showsource-max-attributes-per-line="5" a="1" b="2" c="3">x</span><i a="1" b="2">y</i></div>"#;
    let lines = extract_default(body, "#r");
    assert_eq!(lines[0], r#"<div id="r" a="1" b="2">"#);

    let doc = parse(body);
    let root = doc.select_first_id("#r").unwrap().unwrap();
    let showsource = ShowSource::with_defaults(Overrides::new().max_attributes_per_line(1));
    let lines = showsource.extract(&doc, root, &Overrides::default()).unwrap();
    assert_eq!(
        lines,
        vec![
            r#"<div id="r""#,
            r#" a="1""#,
            r#" b="2">"#,
            r#"  <span a="1" b="2" c="3">x</span>"#,
            r#"  <i a="1""#,
            r#"   b="2">y"#,
            "  </i>",
            "</div>",
        ]
    );
}

#[test]
fn test_process_defaults_and_caller_precedence() {
    let doc = parse(r#"<div id="r"><p>x</p></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();

    let mut showsource = ShowSource::new();
    showsource.update_defaults(|defaults| defaults.indentation = Some("\t".to_string()));
    assert_eq!(
        showsource.extract(&doc, root, &Overrides::default()).unwrap(),
        vec![r#"<div id="r">"#, "\t<p>x</p>", "</div>"]
    );

    let lines = showsource
        .extract(&doc, root, &Overrides::new().indentation("-"))
        .unwrap();
    assert_eq!(lines, vec![r#"<div id="r">"#, "-<p>x</p>", "</div>"]);
}

#[test]
fn test_render_joins_lines() {
    let doc = parse(r#"<div id="r"><p>x</p></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();
    let text = ShowSource::new()
        .render(&doc, root, &Overrides::default(), Mode::Extract)
        .unwrap();
    assert_eq!(text, "<div id=\"r\">\n  <p>x</p>\n</div>");
}

#[test]
fn test_indent_argument_prefixes_root() {
    let doc = parse(r#"<div id="r"><p>x</p></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();
    let lines = showsource::serialize::serialize(
        &doc,
        root,
        &Overrides::default(),
        &Overrides::default(),
        Mode::Extract,
        "    ",
    )
    .unwrap();
    assert_eq!(lines, vec![r#"    <div id="r">"#, "      <p>x</p>", "    </div>"]);
}

#[test]
fn test_extract_is_idempotent() {
    let doc = parse(r#"<div id="r" class="a"><h1>T</h1><p>text <b>bold</b></p><br></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();
    let showsource = ShowSource::new();

    let first = showsource.extract(&doc, root, &Overrides::default()).unwrap();
    let second = showsource.extract(&doc, root, &Overrides::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            r#"<div id="r" class="a">"#,
            "  <h1>T</h1>",
            "  <p>",
            "    text",
            "    <b>bold</b>",
            "  </p>",
            "  <br>",
            "</div>",
        ]
    );
}

#[test]
fn test_invalid_skip_selector_is_an_error() {
    let doc = parse(r#"<div id="r"><p>x</p></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();

    let result = ShowSource::new().extract(&doc, root, &Overrides::new().skip_selector("p["));
    assert!(matches!(result, Err(ShowSourceError::InvalidSelector { .. })));
}

#[test]
fn test_extract_on_text_node_is_an_error() {
    let doc = parse(r#"<p id="p">text</p>"#);
    let p = doc.select_first_id("#p").unwrap().unwrap();
    let text = doc.node(p).unwrap().first_child().unwrap().id();

    let result = ShowSource::new().extract(&doc, text, &Overrides::default());
    assert_eq!(result, Err(ShowSourceError::NotAnElement(text)));
}

#[test]
fn test_beautify_removes_tags_from_copy_only() {
    let doc = parse(r#"<div id="r"><h1>Title</h1><div>Body</div></div>"#);
    let root = doc.select_first_id("#r").unwrap().unwrap();

    let lines = ShowSource::new()
        .beautify(&doc, root, &Overrides::new().remove("h1"))
        .unwrap();
    assert_eq!(lines, vec![r#"<div id="r">"#, "  <div>Body</div>", "</div>"]);
    assert!(lines.iter().all(|line| !line.contains("h1")));

    assert_eq!(doc.select_ids("h1").unwrap().len(), 1);
}

#[test]
fn test_beautify_default_removes_headings_and_paragraphs() {
    let doc = parse(
        r#"<div id="r"><h2>Demo</h2><p>Explanation</p><button class="btn">Click</button></div>"#,
    );
    let root = doc.select_first_id("#r").unwrap().unwrap();

    let lines = ShowSource::new().beautify(&doc, root, &Overrides::default()).unwrap();
    assert_eq!(
        lines,
        vec![r#"<div id="r">"#, r#"  <button class="btn">Click</button>"#, "</div>"]
    );

    // Без удаления beautify совпадает с extract
    let showsource = ShowSource::new();
    let keep_all = Overrides::new().remove("");
    assert_eq!(
        showsource.beautify(&doc, root, &keep_all).unwrap(),
        showsource.extract(&doc, root, &keep_all).unwrap()
    );
}

#[test]
fn test_beautify_nested_remove_lists() {
    let body = r#"<div id="r" data-showsource-remove="h1"><h1>T</h1><section data-showsource-remove="em"><em>e</em><b>b</b></section><em>keep</em></div>"#;
    let doc = parse(body);
    let root = doc.select_first_id("#r").unwrap().unwrap();
    let showsource = ShowSource::new();

    let lines = showsource.beautify(&doc, root, &Overrides::default()).unwrap();
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  <section>",
            "    <b>b</b>",
            "  </section>",
            "  <em>keep</em>",
            "</div>",
        ]
    );

    // Явный remove вызывающего кода перекрывает локальные списки
    let lines = showsource
        .beautify(&doc, root, &Overrides::new().remove("b"))
        .unwrap();
    assert_eq!(
        lines,
        vec![
            r#"<div id="r">"#,
            "  <h1>T</h1>",
            "  <section>",
            "    <em>e</em>",
            "  </section>",
            "  <em>keep</em>",
            "</div>",
        ]
    );
}
