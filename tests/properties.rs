//! Property tests for the lex, parse and evaluate pipeline using proptest

use parsum::{Error, ParseError, evaluate, get_result, lex, parse, parse_source};
use proptest::prelude::*;

/// Strategy for generating fully parenthesized expressions of single digits,
/// paired with their value.
fn grouped_expr_strategy() -> impl Strategy<Value = (String, i64)> {
    let leaf = (0i64..10).prop_map(|d| (d.to_string(), d));

    leaf.prop_recursive(6, 64, 2, |inner| {
            (inner.clone(), prop_oneof![Just('+'), Just('-')], inner).prop_map(|((l, lv), op, (r, rv))| {
                let value = if op == '+' { lv + rv } else { lv - rv };
                (format!("({l}{op}{r})"), value)
            })
        })
}

/// Strategy for generating flat chains such as `12+3-40`, paired with their
/// left-to-right value.
fn flat_chain_strategy() -> impl Strategy<Value = (String, i64)> {
    (0i64..1000, prop::collection::vec((prop_oneof![Just('+'), Just('-')], 0i64..1000), 0..500))
        .prop_map(|(first, rest)| {
            let mut source = first.to_string();
            let mut value = first;
            for (op, operand) in rest {
                source.push(op);
                source.push_str(&operand.to_string());
                value = if op == '+' { value + operand } else { value - operand };
            }
            (source, value)
        })
}

proptest! {
    #[test]
    fn grouped_expressions_evaluate_arithmetically((source, value) in grouped_expr_strategy()) {
        prop_assert_eq!(get_result(&source).unwrap(), value);
    }

    #[test]
    fn flat_chains_fold_left_to_right((source, value) in flat_chain_strategy()) {
        prop_assert_eq!(get_result(&source).unwrap(), value);
    }

    #[test]
    fn token_texts_reconstruct_the_source(source in "[0-9+()-]{0,40}") {
        let tokens = lex(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn token_texts_skip_only_whitespace(source in "[0-9+() \t-]{0,40}") {
        let tokens = lex(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, stripped);
    }

    #[test]
    fn evaluation_is_idempotent((source, _) in grouped_expr_strategy()) {
        let expr = parse_source(&source).unwrap();
        prop_assert_eq!(evaluate(&expr), evaluate(&expr));
    }

    #[test]
    fn printed_trees_keep_their_value((source, value) in grouped_expr_strategy()) {
        let printed = parse_source(&source).unwrap().to_string();
        prop_assert_eq!(get_result(&printed).unwrap(), value);
    }

    #[test]
    fn unclosed_group_is_always_rejected((source, _) in grouped_expr_strategy()) {
        let unclosed = format!("({source}");
        let tokens = lex(&unclosed).unwrap();
        prop_assert_eq!(parse(&tokens), Err(ParseError::UnmatchedParenthesis { position: 0 }));
    }

    #[test]
    fn arbitrary_input_never_panics(source in "[0-9+()a -]{0,30}") {
        match get_result(&source) {
            Ok(_) | Err(Error::Lex(_) | Error::Parse(_) | Error::Runtime(_)) => {},
        }
    }
}
