//! Tests for binding parsed arguments to command instances

use argbind::application::Binder;
use argbind::domain::{
    tokenize, CommandSchema, ConversionRule, ConverterRegistry, FailureRecord, OptionSpec,
    TextConverter, ValueKind,
};
use argbind::util::testing;

#[derive(Debug, Default, Clone, PartialEq)]
struct Transfer {
    source: String,
    count: u32,
    ratio: f64,
    untouched: i32,
}

fn transfer_schema() -> CommandSchema<Transfer> {
    CommandSchema::<Transfer>::new("transfer")
        .option(OptionSpec::new('s', "source").required(), |c, v: String| {
            c.source = v
        })
        .option(OptionSpec::new('c', "count").required(), |c, v: u32| {
            c.count = v
        })
        .option(OptionSpec::new('r', "ratio"), |c, v: f64| c.ratio = v)
}

fn bind(args: &[&str]) -> Result<Transfer, argbind::domain::FailureChain> {
    let converters = ConverterRegistry::builtin();
    let parsed = tokenize(args).expect("valid tokens");
    Binder::new(&converters).bind(&transfer_schema(), &parsed)
}

#[test]
fn given_two_required_options_absent_when_binding_then_two_missing_in_declaration_order() {
    testing::init_test_setup();

    // Act
    let chain = bind(&["-r", "0.5"]).unwrap_err();

    // Assert
    let longs: Vec<&str> = chain.iter().map(|r| r.option().long.as_str()).collect();
    assert_eq!(longs, vec!["source", "count"]);
    assert!(chain
        .iter()
        .all(|r| matches!(r, FailureRecord::MissingRequiredOption { .. })));
    assert_eq!(chain.head().label(), "-s(--source)");
    assert_eq!(chain.head().message(), "Required option is missing.");
}

#[test]
fn given_required_option_without_values_when_binding_then_missing_required() {
    let chain = bind(&["-s", "--count", "2"]).unwrap_err();

    assert_eq!(chain.len(), 1);
    assert!(matches!(
        chain.head(),
        FailureRecord::MissingRequiredOption { .. }
    ));
    assert_eq!(chain.head().label(), "-s(--source)");
}

#[test]
fn given_required_long_option_without_values_when_binding_then_missing_required() {
    let chain = bind(&["-c", "2", "--source"]).unwrap_err();

    assert_eq!(chain.len(), 1);
    assert_eq!(chain.head().label(), "-s(--source)");
    assert_eq!(chain.head().message(), "Required option is missing.");
}

#[test]
fn given_all_options_when_binding_then_fields_written_and_undeclared_kept() {
    let transfer = bind(&["-s", "a.txt", "--count", "3", "-r", "1.5"]).unwrap();

    assert_eq!(
        transfer,
        Transfer {
            source: "a.txt".into(),
            count: 3,
            ratio: 1.5,
            untouched: 0,
        }
    );
}

#[test]
fn given_optional_option_absent_when_binding_then_default_kept() {
    let transfer = bind(&["-s", "a", "-c", "1"]).unwrap();

    assert_eq!(transfer.ratio, 0.0);
}

#[test]
fn given_short_and_long_spelling_when_binding_then_short_wins() {
    let transfer = bind(&["-s", "short", "--source", "long", "-c", "1"]).unwrap();

    assert_eq!(transfer.source, "short");
}

#[test]
fn given_only_long_spelling_when_binding_then_long_used() {
    let transfer = bind(&["--source", "long", "--count", "9"]).unwrap();

    assert_eq!(transfer.source, "long");
    assert_eq!(transfer.count, 9);
}

#[test]
fn given_conversion_failure_and_missing_option_when_binding_then_both_reported() {
    let chain = bind(&["-c", "many", "-r", "x"]).unwrap_err();

    let labels: Vec<String> = chain.iter().map(FailureRecord::label).collect();
    assert_eq!(labels, vec!["-s(--source)", "-c(--count)", "-r(--ratio)"]);
    assert!(matches!(
        chain.records()[0],
        FailureRecord::MissingRequiredOption { .. }
    ));
    assert!(matches!(
        chain.records()[1],
        FailureRecord::PropertyConversionFailure { .. }
    ));
    assert!(chain.records()[1].message().contains("many"));
}

#[test]
fn given_multiple_values_for_single_option_when_binding_then_conversion_failure() {
    let chain = bind(&["-s", "a", "b", "-c", "1"]).unwrap_err();

    assert_eq!(chain.len(), 1);
    assert_eq!(chain.head().option().kind, ValueKind::Text);
    assert!(matches!(
        chain.head(),
        FailureRecord::PropertyConversionFailure { .. }
    ));
}

#[test]
fn given_same_input_when_binding_twice_then_same_result() {
    let converters = ConverterRegistry::builtin();
    let schema = transfer_schema();
    let binder = Binder::new(&converters);

    let ok = tokenize(&["-s", "a", "-c", "2"]).unwrap();
    assert_eq!(
        binder.bind(&schema, &ok).unwrap(),
        binder.bind(&schema, &ok).unwrap()
    );

    let bad = tokenize(&["-c", "x"]).unwrap();
    assert_eq!(
        binder.bind(&schema, &bad).unwrap_err(),
        binder.bind(&schema, &bad).unwrap_err()
    );
}

#[test]
fn given_unknown_keys_when_binding_then_ignored() {
    let transfer = bind(&["-s", "a", "-c", "1", "--verbose", "yes", "-z", "1"]).unwrap();

    assert_eq!(transfer.source, "a");
}

#[test]
fn given_optional_field_when_binding_then_wrapped_in_some() {
    #[derive(Debug, Default)]
    struct Limit {
        max: Option<u16>,
    }
    let schema = CommandSchema::<Limit>::new("limit")
        .option(OptionSpec::new('m', "max"), |c, v: Option<u16>| c.max = v);
    let converters = ConverterRegistry::builtin();
    let binder = Binder::new(&converters);

    let given = binder
        .bind(&schema, &tokenize(&["-m", "80"]).unwrap())
        .unwrap();
    let absent = binder.bind(&schema, &tokenize::<&str>(&[]).unwrap()).unwrap();

    assert_eq!(given.max, Some(80));
    assert_eq!(absent.max, None);
}

#[test]
fn given_registry_without_rule_for_kind_when_binding_then_conversion_failure_not_panic() {
    let text_only = ConverterRegistry::builder()
        .rule(ConversionRule::new(
            "text",
            |kind| kind == ValueKind::Text,
            |_, _| TextConverter,
        ))
        .build()
        .unwrap();
    let parsed = tokenize(&["-s", "a", "-c", "1"]).unwrap();

    let chain = Binder::new(&text_only)
        .bind(&transfer_schema(), &parsed)
        .unwrap_err();

    assert_eq!(chain.len(), 1);
    assert_eq!(chain.head().label(), "-c(--count)");
    assert!(matches!(
        chain.head(),
        FailureRecord::PropertyConversionFailure { message, .. }
            if message.contains("no converter rules")
    ));
}
