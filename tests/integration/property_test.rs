use empire::{compile_str, Properties};
use proptest::prelude::*;

fn output_text() -> impl Strategy<Value = String> {
    "[a-z0-9=_. ]{1,24}".prop_filter("needs visible text", |s| !s.trim().is_empty())
}

fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("keywords are not names", |s| s != "bind")
}

proptest! {
    #[test]
    fn unconditional_statements_always_fire(texts in prop::collection::vec(output_text(), 0..8)) {
        let source: String = texts.iter().map(|t| format!("() {{{}}}\n", t)).collect();
        let expected: String = texts.iter().map(|t| format!("{}\n", t.trim())).collect();

        let output = compile_str(&source, &Properties::new()).unwrap();
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn literal_condition_matches_only_equal_value(expected in "[a-z]{1,8}", actual in "[a-z]{1,8}") {
        let source = format!("bind a=a\n(a={}) {{hit}}", expected);
        let properties: Properties = [("a", actual.as_str())].into_iter().collect();

        let output = compile_str(&source, &properties).unwrap();
        prop_assert_eq!(output == "hit\n", expected == actual);
    }

    #[test]
    fn unbound_condition_never_fires(name in name(), value in "[a-z]{1,8}") {
        let source = format!("bind {name}=missing\n({name}={value}) {{hit}}");
        let properties: Properties = [("other", value.as_str())].into_iter().collect();

        prop_assert_eq!(compile_str(&source, &properties).unwrap(), "");
    }
}
