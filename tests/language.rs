use std::fs;

use minipas::{
    error::{Error, ErrorKind, SyntaxError},
    interpreter::evaluator::GlobalScope,
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pas"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&source) {
            panic!("Demo program {path:?} failed:\n{source}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn assert_success(src: &str) -> GlobalScope {
    run(src).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match run(src) {
        Ok(globals) => panic!("Program succeeded but was expected to fail: {globals:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "unexpected error: {e}");
            e
        },
    }
}

/// Wraps statements in the smallest valid program.
fn program(body: &str) -> String {
    format!("PROGRAM test; BEGIN {body} END.")
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let globals = assert_success(&program("x := 2 + 3 * 4"));
    assert_eq!(globals["x"], 14.0);

    let globals = assert_success(&program("x := (2 + 3) * 4"));
    assert_eq!(globals["x"], 20.0);
}

#[test]
fn operators_are_left_associative() {
    let globals = assert_success(&program("x := 10 - 4 - 3; y := 24 / 4 / 2"));
    assert_eq!(globals["x"], 3.0);
    assert_eq!(globals["y"], 3.0);
}

#[test]
fn unary_minus_chains() {
    let globals = assert_success(&program("a := 2; b := 12; c := a - - b"));
    assert_eq!(globals["c"], 14.0);

    let globals = assert_success(&program("x := - - - 5; y := + - + 5; z := -(2 + 3) * 2"));
    assert_eq!(globals["x"], -5.0);
    assert_eq!(globals["y"], -5.0);
    assert_eq!(globals["z"], -10.0);
}

#[test]
fn both_division_operators_divide_as_reals() {
    let globals = assert_success(&program("a := 10 DIV 4; b := 10 / 4"));
    assert_eq!(globals["a"], 2.5);
    assert_eq!(globals["b"], 2.5);
    assert_eq!(globals["a"], globals["b"]);
}

#[test]
fn division_by_zero_follows_ieee() {
    let globals = assert_success(&program("a := 1 / 0; b := 0 DIV 0"));
    assert!(globals["a"].is_infinite());
    assert!(globals["b"].is_nan());
}

#[test]
fn real_literals() {
    let globals = assert_success(&program("y := 20 / 8 + 3.25; z := 2."));
    assert_eq!(globals["y"], 5.75);
    assert_eq!(globals["z"], 2.0);
}

#[test]
fn declarations_do_not_define_variables() {
    let globals = assert_success("PROGRAM p; VAR a, b, c : INTEGER; BEGIN a := 1 END.");
    assert_eq!(globals.len(), 1);
    assert_eq!(globals["a"], 1.0);
    assert!(!globals.contains_key("b"));
    assert!(!globals.contains_key("c"));
}

#[test]
fn declared_types_do_not_constrain_values() {
    let globals = assert_success("PROGRAM p; VAR i : INTEGER; r : REAL; BEGIN i := 7 / 2; r := 3 END.");
    assert_eq!(globals["i"], 3.5);
    assert_eq!(globals["r"], 3.0);
}

#[test]
fn assigned_variables_are_exactly_the_table() {
    let globals = assert_success(&program("a := 1; BEGIN b := a + 1; BEGIN c := b + 1 END END"));
    let mut names: Vec<_> = globals.keys().cloned().collect();
    names.sort();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(globals["c"], 3.0);
}

#[test]
fn statements_run_in_source_order() {
    let globals = assert_success(&program("a := 1; a := a + 1; b := a * 10; a := b - a"));
    assert_eq!(globals["a"], 18.0);
    assert_eq!(globals["b"], 20.0);
}

#[test]
fn reassignment_overwrites() {
    let globals = assert_success(&program("x := 1; x := 2; x := x * x"));
    assert_eq!(globals["x"], 4.0);
}

#[test]
fn each_run_starts_with_an_empty_table() {
    let first = assert_success(&program("shared := 1"));
    assert_eq!(first["shared"], 1.0);

    assert_failure(&program("x := shared"), ErrorKind::UndefinedVariable);
}

#[test]
fn reading_an_unassigned_variable_is_an_error() {
    let e = assert_failure("PROGRAM p; VAR a, b : INTEGER; BEGIN a := b + 1 END.",
                           ErrorKind::UndefinedVariable);
    assert_eq!(e.to_string(), "Error on line 1: Undefined variable 'b'.");

    assert_failure(&program("x := never"), ErrorKind::UndefinedVariable);
    assert_failure(&program("x := x + 1"), ErrorKind::UndefinedVariable);
}

#[test]
fn failed_run_returns_no_table() {
    assert!(run(&program("a := 1; b := missing; c := 3")).is_err());
}

#[test]
fn missing_separator_is_a_syntax_error() {
    let e = assert_failure("PROGRAM p;\nBEGIN\n  a := 1\n  b := 2\nEND.", ErrorKind::Syntax);
    match e {
        Error::Syntax(SyntaxError::MissingSeparator { found, line }) => {
            assert_eq!(found, "identifier 'b'");
            assert_eq!(line, 4);
        },
        other => panic!("expected a missing separator, got {other:?}"),
    }
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    let e = assert_failure("PROGRAM p; BEGIN END. x := 1", ErrorKind::Syntax);
    assert!(matches!(e, Error::Syntax(SyntaxError::TrailingTokens { .. })));

    assert_failure("PROGRAM p; BEGIN END. .", ErrorKind::Syntax);
}

#[test]
fn malformed_programs_are_syntax_errors() {
    assert_failure("BEGIN x := 1 END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p BEGIN x := 1 END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; BEGIN x := 1 END", ErrorKind::Syntax);
    assert_failure("PROGRAM p; BEGIN x : 1 END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; BEGIN x := (1 + 2 END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; BEGIN x := 1 + END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; VAR BEGIN x := 1 END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; VAR a INTEGER; BEGIN END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; VAR a : BOOLEAN; BEGIN END.", ErrorKind::Syntax);
    assert_failure("PROGRAM p; VAR a, : INTEGER; BEGIN END.", ErrorKind::Syntax);
}

#[test]
fn unexpected_token_names_both_sides() {
    let e = assert_failure("PROGRAM p; BEGIN x := 1 END;", ErrorKind::Syntax);
    assert_eq!(e.to_string(), "Error on line 1: Expected '.', found ';'.");
}

#[test]
fn keywords_are_case_sensitive() {
    let globals = assert_success(&program("begin := 1; Div := 2; x := begin DIV Div"));
    assert_eq!(globals["x"], 0.5);

    assert_failure("program p; BEGIN END.", ErrorKind::Syntax);
}

#[test]
fn comments_have_no_effect() {
    let globals = assert_success("PROGRAM p; { x := 99; } BEGIN { y := 1 } x := 1 { ; z := 3 } END. {done}");
    assert_eq!(globals.len(), 1);
    assert_eq!(globals["x"], 1.0);
}

#[test]
fn comments_do_not_nest() {
    let e = assert_failure(&program("{ outer { inner } x := 1 }"), ErrorKind::Lex);
    assert!(matches!(e, Error::Lex(ref e) if e.character == '}'));
}

#[test]
fn unterminated_comment_runs_to_end_of_input() {
    let globals = assert_success("PROGRAM p; BEGIN x := 1 END. { never closed");
    assert_eq!(globals["x"], 1.0);

    assert_failure("PROGRAM p; BEGIN x := 1 { END.", ErrorKind::Syntax);
}

#[test]
fn unrecognized_character_is_a_lex_error() {
    let e = assert_failure(&program("x := 3 # 4"), ErrorKind::Lex);
    match e {
        Error::Lex(e) => {
            assert_eq!(e.character, '#');
            assert_eq!(e.line, 1);
        },
        other => panic!("expected a lex error, got {other:?}"),
    }

    assert_failure(&program("x := 'a'"), ErrorKind::Lex);
    assert_failure(&program("x_y := 1"), ErrorKind::Lex);
}

#[test]
fn empty_statements_are_allowed() {
    let globals = assert_success("PROGRAM p; BEGIN ; ; BEGIN END; ; END.");
    assert!(globals.is_empty());
}

#[test]
fn reference_programs() {
    let source = fs::read_to_string("demos/part10.pas").expect("missing file");
    let globals = assert_success(&source);
    assert_eq!(globals.len(), 6);
    assert_eq!(globals["number"], 2.0);
    assert_eq!(globals["a"], 2.0);
    assert_eq!(globals["b"], 25.0);
    assert_eq!(globals["c"], 27.0);
    assert_eq!(globals["x"], 11.0);
    assert!((globals["y"] - (20.0 / 7.0 + 3.14)).abs() < 1e-12);

    let source = fs::read_to_string("demos/part10_sample2.pas").expect("missing file");
    let globals = assert_success(&source);
    assert_eq!(globals["a"], 2.0);
    assert_eq!(globals["b"], 25.0);

    let source = fs::read_to_string("demos/empty_statements.pas").expect("missing file");
    let globals = assert_success(&source);
    assert_eq!(globals["total"], 6.0);
}
