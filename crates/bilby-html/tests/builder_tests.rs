//! Integration tests for the document builder and interpolation dispatch.

use std::collections::BTreeMap;

use bilby_html::{HTML, HTMLBuilder, Value, html};

#[test]
fn test_literal_only_document_is_identity() {
    let page = html!("<h1>Hello, world!</h1>");
    assert_eq!(page.as_str(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_text_interpolation() {
    let page = html!("<h1>Hello, " ("world") "!</h1>");
    assert_eq!(page.as_str(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_text_interpolation_is_escaped() {
    let page = html!("<h1>Hello, " ("<world>") "!</h1>");
    assert_eq!(page.as_str(), "<h1>Hello, &lt;world&gt;!</h1>");
}

#[test]
fn test_element_name_interpolation() {
    let tag = "h1";
    let page = html!("<" (tag) ">Hello, world!</" (tag) ">");
    assert_eq!(page.as_str(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_partial_element_name_interpolation() {
    let level = 1;
    let page = html!("<h" (level) ">Hello, world!</h" (level) ">");
    assert_eq!(page.as_str(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_plain_string_tags_are_escaped() {
    let start_tag = "<h1>";
    let end_tag = "</h1>";
    let page = html!((start_tag) "Hello, world!" (end_tag));
    assert_eq!(page.as_str(), "&lt;h1&gt;Hello, world!&lt;/h1&gt;");
}

#[test]
fn test_trusted_markup_tags_pass_through() {
    let start_tag = HTML::new("<h1>");
    let end_tag = HTML::new("</h1>");
    let page = html!((start_tag) "Hello, world!" (end_tag));
    assert_eq!(page.as_str(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_attribute_interpolation_across_quote_styles() {
    let id = "logo";
    let url = "https://example.org/";
    let title = r#"Example | "Welcome to Example""#;
    let page = html!(
        "<a id='" (id) "' href=\"" (url) "\" title=" (title) ">Example</a>"
    );
    assert_eq!(
        page.as_str(),
        r#"<a id='logo' href="https://example.org/" title="Example | \"Welcome to Example\"">Example</a>"#
    );
}

#[test]
fn test_single_quoted_value_keeps_double_quotes() {
    let title = r#"say "hi""#;
    let page = html!("<a title='" (title) "'>x</a>");
    assert_eq!(page.as_str(), r#"<a title='say "hi"'>x</a>"#);
}

#[test]
fn test_unquoted_value_is_wrapped() {
    let size = 5;
    let page = html!("<input size=" (size) "/>");
    assert_eq!(page.as_str(), r#"<input size="5"/>"#);
}

#[test]
fn test_class_attribute_map_interpolation() {
    let attributes = Value::entries([("class", Value::from(vec!["alpha", "bravo", "charlie"]))]);
    let page = html!("<div " (attributes) "></div>");
    assert_eq!(page.as_str(), r#"<div class="alpha bravo charlie"></div>"#);
}

#[test]
fn test_style_attribute_value_interpolation() {
    let style = BTreeMap::from([
        ("background", Value::from("orangered")),
        ("font-weight", Value::from(700)),
    ]);
    let page = html!("<span style=" (style) ">urgent</span>");
    assert_eq!(
        page.as_str(),
        r#"<span style="background: orangered; font-weight: 700;">urgent</span>"#
    );
}

#[test]
fn test_nested_attributes_interpolation() {
    let attributes = Value::entries([
        ("aria", Value::entries([("role", Value::from("article"))])),
        ("data", Value::entries([
            ("index", Value::from(1)),
            ("count", Value::from(3)),
        ])),
        ("style", Value::entries([
            ("background", Value::from("orangered")),
            ("font-weight", Value::from(700)),
        ])),
    ]);
    let page = html!("<section " (attributes) ">…</section>");
    assert_eq!(
        page.as_str(),
        r#"<section aria-role="article" data-count="3" data-index="1" style="background: orangered; font-weight: 700;">…</section>"#
    );
}

#[test]
fn test_boolean_attributes_interpolation() {
    let attributes = Value::entries([
        ("aria", Value::entries([("label", Value::from(true))])),
        ("autocomplete", Value::from(true)),
        ("spellcheck", Value::from(true)),
        ("translate", Value::from(true)),
        ("type", Value::from("text")),
        ("disabled", Value::from(false)),
    ]);
    let page = html!("<input " (attributes) "/>");
    assert_eq!(
        page.as_str(),
        r#"<input aria-label="true" autocomplete="on" spellcheck translate="yes" type="text"/>"#
    );
}

#[test]
fn test_list_of_attribute_maps() {
    let groups = Value::from(vec![
        Value::entries([("fill", Value::from("red"))]),
        Value::entries([("stroke", Value::from("blue"))]),
    ]);
    let page = html!("<rect " (groups) "/>");
    assert_eq!(page.as_str(), r#"<rect fill="red" stroke="blue"/>"#);
}

#[test]
fn test_raw_insertion_bypasses_escaping() {
    let inline = "<strong>&amp;</strong>";
    let mut builder = HTMLBuilder::new();
    builder.literal("<span>");
    builder.raw(inline);
    builder.literal("</span>");
    assert_eq!(
        builder.finish().as_str(),
        "<span><strong>&amp;</strong></span>"
    );
}

#[test]
fn test_default_path_always_escapes_markup() {
    let inline = "<strong>&amp;</strong>";
    let page = html!("<span>" (inline) "</span>");
    assert_eq!(
        page.as_str(),
        "<span>&lt;strong&gt;&amp;amp;&lt;/strong&gt;</span>"
    );
}

#[test]
fn test_comment_interpolation_in_text() {
    let mut builder = HTMLBuilder::new();
    builder.comment("look! <!");
    assert_eq!(builder.finish().as_str(), "<!-- look! <! -->");
}

#[test]
fn test_comment_interpolation_inside_comment() {
    let page = html!("<!-- " ("<!-- zzZ -->") " -->");
    assert_eq!(page.as_str(), "<!-- zzZ -->");
}

#[test]
fn test_comment_delimiters_are_stripped_not_duplicated() {
    let mut builder = HTMLBuilder::new();
    builder.comment("<!-- x -->");
    assert_eq!(builder.finish().as_str(), "<!-- x -->");
}

#[test]
fn test_list_of_markup_joins_with_newlines() {
    let items = vec![
        HTML::new("<dt>a</dt>"),
        HTML::new("<dd>first letter</dd>"),
    ];
    let page = html!("<dl>\n" (items) "\n</dl>");
    assert_eq!(
        page.as_str(),
        "<dl>\n<dt>a</dt>\n<dd>first letter</dd>\n</dl>"
    );
}

#[test]
fn test_documents_compose() {
    let content = html!("<h1>Results</h1>");
    let page = html!("<body><main>" (content) "</main></body>");
    assert_eq!(
        page.as_str(),
        "<body><main><h1>Results</h1></main></body>"
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let attributes = Value::entries([("style", Value::entries([
        ("background", Value::from("yellow")),
        ("font-weight", Value::from("bold")),
    ]))]);
    let first = html!("<span " (attributes.clone()) ">whoa</span>");
    let second = html!("<span " (attributes) ">whoa</span>");
    assert_eq!(first, second);
    assert_eq!(
        first.as_str(),
        r#"<span style="background: yellow; font-weight: bold;">whoa</span>"#
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(html!().as_str(), "");
}
