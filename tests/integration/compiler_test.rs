use empire::{compile_str, Compiler, EmpireError, EvalError, Properties};
use pretty_assertions::assert_eq;

fn compile(source: &str, props: &[(&str, &str)]) -> String {
    let properties: Properties = props.iter().copied().collect();

    let mut output = Vec::new();
    Compiler::new(source.as_bytes(), &mut output, properties)
        .compile()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn empty_should_compile() {
    assert_eq!(compile("", &[]), "");
}

#[test]
fn bare_should_compile() {
    assert_eq!(compile("() {a\n}", &[]), "a\n");
}

#[test]
fn invalid_bindings_should_compile() {
    assert_eq!(compile("bind a=b\n(a=b) {c\n}", &[]), "");
}

#[test]
fn condition_should_compile() {
    assert_eq!(compile("bind a=a\n(a=b) {c\n}", &[("a", "b")]), "c\n");
}

#[test]
fn regex_condition_should_compile() {
    assert_eq!(compile("bind a=a\n(a=~/[b]/) {c\n}", &[("a", "b")]), "c\n");
}

#[test]
fn non_matching_regex_condition_should_compile() {
    assert_eq!(compile("bind a=a\n(a=~/[b]/) {c\n}", &[("a", "x")]), "");
}

#[test]
fn regex_escape_condition_should_compile() {
    assert_eq!(compile("bind a=a\n(a=~/\\/b/) {c\n}", &[("a", "/b")]), "c\n");
}

#[test]
fn should_compile_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Test.empire");
    let file = std::fs::File::open(path).unwrap();
    let properties: Properties = [("b", "x"), ("d", "y")].into_iter().collect();

    let mut output = Vec::new();
    let stats = Compiler::new(file, &mut output, properties).compile().unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "property=value\nkey=value\n"
    );
    assert_eq!(stats.statements, 4);
    assert_eq!(stats.fired, 2);
}

#[test]
fn literal_pattern_must_match_whole_value() {
    let source = "bind a=a\n(a=b) {c}";
    assert_eq!(compile(source, &[("a", "abc")]), "");
    assert_eq!(compile(source, &[("a", "b")]), "c\n");
}

#[test]
fn literal_pattern_keeps_regex_metacharacters() {
    let source = "bind v=version\n(v=1.0) {matched}";
    assert_eq!(compile(source, &[("version", "1.0")]), "matched\n");
    assert_eq!(compile(source, &[("version", "1x0")]), "matched\n");
    assert_eq!(compile(source, &[("version", "1.00")]), "");
}

#[test]
fn all_conditions_must_hold() {
    let source = "bind os=os\nbind arch=arch\n(os=linux, arch=~/x86_64|aarch64/) {unix}";
    assert_eq!(
        compile(source, &[("os", "linux"), ("arch", "aarch64")]),
        "unix\n"
    );
    assert_eq!(compile(source, &[("os", "linux"), ("arch", "riscv")]), "");
    assert_eq!(compile(source, &[("os", "macos"), ("arch", "x86_64")]), "");
    assert_eq!(compile(source, &[("os", "linux")]), "");
}

#[test]
fn properties_are_cleared_after_first_statement() {
    let source = "() {first}\nbind a=a\n(a=b) {second}";
    assert_eq!(compile(source, &[("a", "b")]), "first\n");
}

#[test]
fn bindings_outlive_the_statement_they_precede() {
    let source = "bind a=a\n(a=b) {first}\n(a=b) {second}\n(a=c) {third}";
    assert_eq!(compile(source, &[("a", "b")]), "first\nsecond\n");
}

#[test]
fn output_is_trimmed_and_keeps_inner_lines() {
    let source = "() {\n    line one\n    line two\n}";
    assert_eq!(compile(source, &[]), "line one\n    line two\n");
}

#[test]
fn escaped_brace_in_output() {
    assert_eq!(compile(r"() {fn main() {\}}", &[]), "fn main() {}\n");
}

#[test]
fn output_may_end_with_a_backslash() {
    assert_eq!(compile(r"() {a\\}", &[]), "a\\\n");
}

#[test]
fn property_values_use_their_text_form() {
    let mut properties = Properties::new();
    properties.insert("cores", 8);
    properties.insert("debug", true);
    let source = "bind n=cores\nbind d=debug\n(n=~/[0-9]+/, d=true) {ok}";
    assert_eq!(compile_str(source, &properties).unwrap(), "ok\n");
}

#[test]
fn integral_float_property_matches_its_decimal_form() {
    let properties = Properties::from_json_str(r#"{"v": 1.0}"#).unwrap();
    assert_eq!(
        compile_str("bind v=v\n(v=1.0) {hit}", &properties).unwrap(),
        "hit\n"
    );
}

#[test]
fn invalid_regex_aborts_the_run() {
    let source = "() {before}\nbind a=a\n(a=~/[b/) {c}\n() {after}";
    let properties: Properties = [("a", "b")].into_iter().collect();

    let mut output = Vec::new();
    let result = Compiler::new(source.as_bytes(), &mut output, properties).compile();

    assert!(matches!(
        result,
        Err(EmpireError::Eval(EvalError::InvalidPattern { .. }))
    ));
    // nothing past the failing statement is produced
    assert!(!String::from_utf8(output).unwrap().contains("after"));
}

#[test]
fn invalid_regex_fails_even_for_unbound_name() {
    let result = compile_str("(missing=~/(/) {c}", &Properties::new());
    assert!(matches!(
        result,
        Err(EmpireError::Eval(EvalError::InvalidPattern { .. }))
    ));
}

#[test]
fn syntax_error_produces_no_output() {
    let mut output = Vec::new();
    let result = Compiler::new(
        "() {ok}\n(a=b {c}".as_bytes(),
        &mut output,
        Properties::new(),
    )
    .compile();
    assert!(matches!(result, Err(EmpireError::Parse { .. })));
    assert!(output.is_empty());
}

#[test]
fn comments_are_ignored() {
    let source = "// header\n/* block */ () {a} // trailing";
    assert_eq!(compile(source, &[]), "a\n");
}
