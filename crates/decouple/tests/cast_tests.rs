use decouple::{Coercion, Error, Value, to_bool};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("y")]
#[case("yes")]
#[case("t")]
#[case("true")]
#[case("on")]
#[case("1")]
#[case("TRUE")]
#[case("Yes")]
#[case("oN")]
fn truthy_strings(#[case] raw: &str) {
    assert!(to_bool(raw).unwrap(), "{raw:?} should be true");
}

#[rstest]
#[case("n")]
#[case("no")]
#[case("f")]
#[case("false")]
#[case("off")]
#[case("0")]
#[case("FALSE")]
#[case("No")]
#[case("Off")]
fn falsy_strings(#[case] raw: &str) {
    assert!(!to_bool(raw).unwrap(), "{raw:?} should be false");
}

#[rstest]
#[case("maybe")]
#[case("2")]
#[case(" true")]
#[case("yes please")]
#[case("")]
fn invalid_strings(#[case] raw: &str) {
    match to_bool(raw) {
        Err(Error::InvalidTruthValue { value }) => assert_eq!(value, raw),
        other => panic!("expected InvalidTruthValue for {raw:?}, got {other:?}"),
    }
}

#[test]
fn canonical_forms_agree() {
    assert_eq!(to_bool("true").unwrap(), to_bool("TRUE").unwrap());
    assert_eq!(to_bool("TRUE").unwrap(), to_bool("1").unwrap());
}

#[test]
fn invalid_truth_value_message_names_the_value() {
    let err = to_bool("maybe").unwrap_err();
    assert!(err.to_string().contains("maybe"));
}

#[test]
fn custom_coercion_parses_strings() {
    fn to_int(raw: &str) -> decouple::Result<Value> {
        raw.parse::<i64>()
            .map(Value::from)
            .map_err(|e| Error::invalid_value("WORKERS", e))
    }

    let coercion = Coercion::Custom(to_int);
    assert_eq!(coercion.apply(json!("12")).unwrap(), json!(12));
    assert!(matches!(
        coercion.apply(json!("twelve")),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn none_coercion_is_identity() {
    for value in [json!("text"), json!(true), json!(42), json!(null)] {
        assert_eq!(Coercion::None.apply(value.clone()).unwrap(), value);
    }
}
