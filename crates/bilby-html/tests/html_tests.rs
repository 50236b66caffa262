//! Integration tests for the trusted markup wrapper.

use bilby_html::HTML;

#[test]
fn test_construction_and_display() {
    let markup = HTML::new("<h1>Hello, world!</h1>");
    assert_eq!(markup.as_str(), "<h1>Hello, world!</h1>");
    assert_eq!(markup.to_string(), "<h1>Hello, world!</h1>");
    assert_eq!(markup.clone().into_string(), "<h1>Hello, world!</h1>");
}

#[test]
fn test_from_str_is_lossless() {
    let markup: HTML = "<p>&amp;</p>".parse().unwrap();
    assert_eq!(markup, HTML::new("<p>&amp;</p>"));
}

#[test]
fn test_conversions() {
    assert_eq!(HTML::from("<br/>"), HTML::new("<br/>"));
    assert_eq!(HTML::from(String::from("<br/>")), HTML::new("<br/>"));
    assert_eq!(HTML::new("<br/>").as_ref(), "<br/>");
}

#[test]
fn test_default_is_empty() {
    assert_eq!(HTML::default().as_str(), "");
}

#[test]
fn test_ordering_is_lexicographic() {
    assert!(HTML::new("<a>") < HTML::new("<b>"));
    assert!(HTML::new("alpha") < HTML::new("beta"));
    assert_eq!(HTML::new("<p>"), HTML::new("<p>"));
}

#[test]
fn test_serialization_round_trip() {
    let markup = HTML::new("<p>&amp;</p>");
    let encoded = serde_json::to_string(&markup).unwrap();
    assert_eq!(encoded, r#""<p>&amp;</p>""#);
    let decoded: HTML = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, markup);
}
