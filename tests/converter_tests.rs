use paramshift::{
    convert_signature, parse_function, to_named_params, to_positional_params, FunctionDefinition,
    FunctionParam, Notation,
};
use pretty_assertions::assert_eq;

#[test]
fn converts_typed_params_to_positional() {
    assert_eq!(
        to_positional_params(&[FunctionParam::required("param1", Some("int"))]),
        "int param1"
    );
    assert_eq!(
        to_positional_params(&[
            FunctionParam::required("param1", Some("int")),
            FunctionParam::required("param2", Some("string")),
        ]),
        "int param1, string param2"
    );
}

#[test]
fn converts_default_values_to_positional() {
    assert_eq!(
        to_positional_params(&[FunctionParam::optional("param1", None, "\"foo\"")]),
        "[param1 = \"foo\"]"
    );
    assert_eq!(
        to_positional_params(&[
            FunctionParam::optional("param1", None, "\"foo\""),
            FunctionParam::optional("param2", Some("int"), "42"),
        ]),
        "[param1 = \"foo\", param2 = 42]"
    );
}

#[test]
fn converts_typed_params_to_named() {
    assert_eq!(
        to_named_params(&[
            FunctionParam::required("param1", Some("int")),
            FunctionParam::required("param2", Some("string")),
        ]),
        "{required int param1, required string param2}"
    );
}

#[test]
fn converts_mixed_params_to_named() {
    assert_eq!(
        to_named_params(&[
            FunctionParam::optional("param1", None, "\"foo\""),
            FunctionParam::optional("param2", None, "42"),
            FunctionParam::optional("param3", Some("int"), "123"),
            FunctionParam::required("param4", Some("int")),
        ]),
        "{required int param4, param1 = \"foo\", param2 = 42, param3 = 123}"
    );
}

#[test]
fn parses_named_and_converts_to_positional() {
    let raw = r#"void foo({required param1, required int param2, param3 = "Foo", param4 = "Foo"}) {}"#;
    let parsed = parse_function(raw).unwrap();

    assert_eq!(
        parsed,
        FunctionDefinition::new(
            "foo",
            vec![
                FunctionParam::new("param1", None, None),
                FunctionParam::new("param2", Some("int".into()), None),
                FunctionParam::new("param3", None, Some("\"Foo\"".into())),
                FunctionParam::new("param4", None, Some("\"Foo\"".into())),
            ]
        )
    );

    assert_eq!(
        to_positional_params(&parsed.params),
        r#"param1, int param2, [param3 = "Foo", param4 = "Foo"]"#
    );
}

#[test]
fn parses_positional_and_converts_to_named() {
    let raw = r#"void foo(param1, int param2, [param3 = "Foo", param4 = "Foo"]) {}"#;
    let parsed = parse_function(raw).unwrap();

    assert_eq!(
        parsed,
        FunctionDefinition::new(
            "foo",
            vec![
                FunctionParam::new("param1", None, None),
                FunctionParam::new("param2", Some("int".into()), None),
                FunctionParam::new("param3", None, Some("\"Foo\"".into())),
                FunctionParam::new("param4", None, Some("\"Foo\"".into())),
            ]
        )
    );

    assert_eq!(
        to_named_params(&parsed.params),
        r#"{required param1, required int param2, param3 = "Foo", param4 = "Foo"}"#
    );
}

#[test]
fn converts_whole_signatures_both_ways() {
    let positional = r#"Future<void> save(String path, [bool overwrite = false]) async {}"#;
    let named = convert_signature(positional, Notation::Named).unwrap();
    assert_eq!(
        named,
        r#"Future<void> save({required String path, overwrite = false}) async {}"#
    );

    let back = convert_signature(&named, Notation::Positional).unwrap();
    assert_eq!(back, r#"Future<void> save(String path, [overwrite = false]) async {}"#);
}

#[test]
fn definition_round_trips_through_json() {
    let parsed = parse_function("void foo(int a, [b = 1]) {}").unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(
        json,
        r#"{"functionName":"foo","params":[{"name":"a","type":"int"},{"name":"b","defaultValue":"1"}]}"#
    );

    let back: FunctionDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parsed);
}
