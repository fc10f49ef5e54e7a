//! Tests for argument tokenizing

use rstest::rstest;

use argbind::domain::{tokenize, TokenizeError};
use argbind::util::testing;

#[test]
fn given_long_and_short_groups_when_tokenizing_then_values_grouped_by_key() {
    testing::init_test_setup();

    // Act
    let parsed = tokenize(&["--a", "1", "2", "-b", "3"]).unwrap();

    // Assert
    assert_eq!(parsed.values("a"), ["1", "2"]);
    assert_eq!(parsed.values("b"), ["3"]);
    assert_eq!(parsed.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn given_value_before_any_option_when_tokenizing_then_value_without_option() {
    let err = tokenize(&["value"]).unwrap_err();

    assert_eq!(err, TokenizeError::ValueWithoutOption("value".into()));
    assert_eq!(err.token(), "value");
}

#[test]
fn given_combined_short_flags_when_tokenizing_then_short_name_too_long() {
    let err = tokenize(&["-ab", "1"]).unwrap_err();

    assert_eq!(err, TokenizeError::ShortNameTooLong("-ab".into()));
}

#[test]
fn given_malformed_token_after_valid_groups_when_tokenizing_then_whole_parse_fails() {
    let result = tokenize(&["-a", "1", "-xy", "2", "-b", "3"]);

    assert_eq!(result, Err(TokenizeError::ShortNameTooLong("-xy".into())));
}

#[test]
fn given_repeated_key_when_tokenizing_then_values_concatenated_in_order() {
    let parsed = tokenize(&["-a", "1", "-b", "x", "-a", "2", "3"]).unwrap();

    assert_eq!(parsed.values("a"), ["1", "2", "3"]);
    assert_eq!(parsed.values("b"), ["x"]);
}

#[test]
fn given_short_and_long_spelling_when_tokenizing_then_keys_not_normalized() {
    let parsed = tokenize(&["-s", "1", "--second", "2"]).unwrap();

    assert_eq!(parsed.values("s"), ["1"]);
    assert_eq!(parsed.values("second"), ["2"]);
}

#[rstest]
#[case(&["---triple", "v"], "triple")]
#[case(&["--with-dash", "v"], "with-dash")]
#[case(&["--", "v"], "")]
fn given_leading_dashes_when_tokenizing_then_only_leading_dashes_stripped(
    #[case] args: &[&str],
    #[case] key: &str,
) {
    let parsed = tokenize(args).unwrap();

    assert_eq!(parsed.values(key), ["v"]);
}

#[rstest]
#[case(&["-a", "1", "2", "3", "4"])]
#[case(&["--x", "c", "b", "a", "-y", "z", "--x", "0"])]
#[case(&["-k", "3", "-k", "1", "-k", "2"])]
fn given_any_sequence_when_tokenizing_then_per_key_order_matches_input(#[case] args: &[&str]) {
    let parsed = tokenize(args).unwrap();

    // Recompute expected order by a straightforward scan
    let mut current = "";
    for key in parsed.keys() {
        let expected: Vec<&str> = args
            .iter()
            .filter_map(|token| {
                if token.starts_with('-') {
                    current = token.trim_start_matches('-');
                    None
                } else if current == key {
                    Some(*token)
                } else {
                    None
                }
            })
            .collect();
        assert_eq!(parsed.values(key), expected.as_slice());
    }
}

#[test]
fn given_negative_number_as_value_when_tokenizing_then_read_as_short_key() {
    let parsed = tokenize(&["-n", "-5"]).unwrap();

    assert!(parsed.values("n").is_empty());
    assert!(parsed.contains_key("5"));
}
