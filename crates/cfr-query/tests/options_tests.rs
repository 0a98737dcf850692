use super::*;

#[test]
fn empty_object_uses_defaults() {
    let options: QueryOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(options, QueryOptions::default());
    assert_eq!(options.accuracy, ResolutionAccuracy::Approximate);
    assert_eq!(options.formation, TypeFormation::PossiblyConverted);
}

#[test]
fn fields_are_camel_case() {
    let options: QueryOptions =
        serde_json::from_str(r#"{"accuracy":"exact","formation":"withoutConversion"}"#)
            .expect("valid options");
    assert_eq!(options.accuracy, ResolutionAccuracy::Exact);
    assert_eq!(options.formation, TypeFormation::WithoutConversion);

    let json = serde_json::to_string(&QueryOptions::default()).expect("serializable");
    assert_eq!(json, r#"{"accuracy":"approximate","formation":"possiblyConverted"}"#);
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(serde_json::from_str::<QueryOptions>(r#"{"accuracy":"fuzzy"}"#).is_err());
}
