use super::*;

#[test]
fn empty_span_is_the_default() {
    assert_eq!(Span::default(), Span::EMPTY);
    assert_eq!(Span::new(3, 7), Span { start: 3, end: 7 });
}

#[test]
fn span_serializes_as_offsets() {
    let json = serde_json::to_string(&Span::new(1, 2)).expect("serialize span");
    assert_eq!(json, r#"{"start":1,"end":2}"#);
}
