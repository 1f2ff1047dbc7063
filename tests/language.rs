use std::fs;

use franzcode::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::{Context, Outcome},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
    run_source,
};

fn assert_success(src: &str) {
    let mut context = Context::new();
    if let Err(e) = run_source(src, &mut context) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    let mut context = Context::new();
    if run_source(src, &mut context).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs a script and hands back the context for state assertions.
fn run_with(src: &str) -> Context {
    let mut context = Context::new();
    if let Err(e) = run_source(src, &mut context) {
        panic!("Script failed: {e}");
    }
    context
}

#[test]
fn set_then_add_then_interpolate() {
    let context = run_with("SET x TO 3\nADD x BY 4");

    assert_eq!(context.get_variable("x"), Some(&Value::Integer(7)));
    assert_eq!(context.interpolate("x is {x}"), "x is 7");
}

#[test]
fn keywords_work_in_any_case() {
    let context = run_with("set x to 3\nAdd x By 4");

    assert_eq!(context.get_variable("x"), Some(&Value::Integer(7)));
}

#[test]
fn statements_may_share_a_line_and_span_lines() {
    let context = run_with("SET a TO 1 SET b TO\n2");

    assert_eq!(context.get_variable("a"), Some(&Value::Integer(1)));
    assert_eq!(context.get_variable("b"), Some(&Value::Integer(2)));
}

#[test]
fn if_picks_the_right_branch() {
    let context = run_with("SET r TO 0\nIF 5 > 10 THEN\nADD r BY 1\nELSE\nADD r BY 2\nENDIF");
    assert_eq!(context.get_variable("r"), Some(&Value::Integer(2)));

    let context = run_with("SET r TO 0\nIF 10 > 5 THEN\nADD r BY 1\nELSE\nADD r BY 2\nENDIF");
    assert_eq!(context.get_variable("r"), Some(&Value::Integer(1)));
}

#[test]
fn empty_else_is_legal() {
    assert_success("IF FALSE THEN\nSAY \"never\"\nENDIF");
}

#[test]
fn branch_variables_never_leak() {
    let context = run_with("SET x TO 1\nIF TRUE THEN\nSET x TO 2\nSET inner TO 9\nENDIF");

    // SET in the branch shadowed the outer binding instead of replacing it.
    assert_eq!(context.get_variable("x"), Some(&Value::Integer(1)));
    assert_eq!(context.get_variable("inner"), None);
}

#[test]
fn mutation_reaches_through_child_scopes() {
    let context = run_with("SET x TO 0\nLOOP 3 TIMES\nADD x BY LOOPCOUNT\nENDLOOP");

    assert_eq!(context.get_variable("x"), Some(&Value::Integer(6)));
}

#[test]
fn loop_counter_runs_one_to_count() {
    let context = run_with("SET total TO 0\nLOOP 3 TIMES\nSET doubled TO LOOPCOUNT * 2\n\
                            ADD total BY doubled\nENDLOOP");

    assert_eq!(context.get_variable("total"), Some(&Value::Integer(12)));
}

#[test]
fn zero_or_negative_counts_run_nothing() {
    let context = run_with("SET hits TO 0\nLOOP 0 TIMES\nADD hits BY 1\nENDLOOP");
    assert_eq!(context.get_variable("hits"), Some(&Value::Integer(0)));
    assert_eq!(context.get_variable("LOOPCOUNT"), Some(&Value::Integer(0)));

    let context = run_with("SET hits TO 0\nLOOP -3 TIMES\nADD hits BY 1\nENDLOOP");
    assert_eq!(context.get_variable("hits"), Some(&Value::Integer(0)));
}

#[test]
fn fractional_counts_truncate_toward_zero() {
    let context = run_with("SET hits TO 0\nLOOP 2.9 TIMES\nADD hits BY 1\nENDLOOP");

    assert_eq!(context.get_variable("hits"), Some(&Value::Integer(2)));
}

#[test]
fn breakout_ends_only_the_innermost_loop() {
    let context = run_with("SET n TO 0\nLOOP 3 TIMES\nLOOP 5 TIMES\nBREAKOUT\nENDLOOP\n\
                            ADD n BY 1\nENDLOOP");

    assert_eq!(context.get_variable("n"), Some(&Value::Integer(3)));
}

#[test]
fn breakout_works_from_inside_a_conditional() {
    let context = run_with("SET n TO 0\nLOOP 5 TIMES\nIF LOOPCOUNT > 2 THEN\nBREAKOUT\nENDIF\n\
                            ADD n BY 1\nENDLOOP");

    assert_eq!(context.get_variable("n"), Some(&Value::Integer(2)));
}

#[test]
fn breakout_outside_a_loop_is_an_error() {
    let mut context = Context::new();
    let err = run_source("BREAKOUT", &mut context).unwrap_err();

    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::BreakOutsideLoop { line: 1 })));
}

#[test]
fn stop_halts_the_run_without_an_error() {
    let mut context = Context::new();
    let outcome = run_source("SET x TO 1\nSTOP\nSET y TO 2", &mut context).unwrap();

    assert_eq!(outcome, Outcome::Stopped);
    assert_eq!(context.get_variable("x"), Some(&Value::Integer(1)));
    assert_eq!(context.get_variable("y"), None);
}

#[test]
fn stop_escapes_loops_and_conditionals() {
    let mut context = Context::new();
    let outcome =
        run_source("SET n TO 0\nLOOP 5 TIMES\nADD n BY 1\nIF n == 2 THEN\nSTOP\nENDIF\nENDLOOP",
                   &mut context).unwrap();

    assert_eq!(outcome, Outcome::Stopped);
    assert_eq!(context.get_variable("n"), Some(&Value::Integer(2)));
}

#[test]
fn modifying_an_unset_variable_never_creates_it() {
    let mut context = Context::new();
    let err = run_source("ADD ghost BY 1", &mut context).unwrap_err();

    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UnknownVariable { line: 1, .. })));
    assert_eq!(context.get_variable("ghost"), None);
}

#[test]
fn reading_an_unset_variable_is_an_error() {
    assert_failure("SAY ghost");
}

#[test]
fn division_by_zero_reports_its_line_and_aborts() {
    let mut context = Context::new();
    let err = run_source("SET x TO 5\nDIV x BY 0\nSET y TO 1", &mut context).unwrap_err();

    assert!(matches!(err.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::DivisionByZero { line: 2 })));
    assert_eq!(context.get_variable("y"), None);
}

#[test]
fn slash_division_by_zero_is_the_same_error() {
    assert_failure("SAY 1 / 0");
    assert_failure("SAY 1 % 0");
}

#[test]
fn division_is_true_division() {
    let context = run_with("SET x TO 7\nDIV x BY 2");

    assert_eq!(context.get_variable("x"), Some(&Value::Real(3.5)));
    assert_eq!(context.interpolate("{x}"), "3.5");
}

#[test]
fn whole_real_results_print_as_integers() {
    let context = run_with("SET x TO 10\nDIV x BY 2");

    assert_eq!(context.get_variable("x"), Some(&Value::Real(5.0)));
    assert_eq!(context.interpolate("{x}"), "5");
}

#[test]
fn logic_short_circuits_past_a_poisoned_operand() {
    // The right side would raise UnknownVariable if it were evaluated.
    let context = run_with("SET r TO FALSE AND ghost\nSET s TO TRUE OR ghost");

    assert_eq!(context.get_variable("r"), Some(&Value::Bool(false)));
    assert_eq!(context.get_variable("s"), Some(&Value::Bool(true)));
}

#[test]
fn logic_coerces_truthiness() {
    let context = run_with("SET r TO 1 AND \"yes\"\nSET s TO 0 OR \"\"");

    assert_eq!(context.get_variable("r"), Some(&Value::Bool(true)));
    assert_eq!(context.get_variable("s"), Some(&Value::Bool(false)));
}

#[test]
fn seeded_constants_are_available() {
    let context = run_with("SET circle TO TAU / 2");

    let value = context.get_variable("circle").cloned();
    match value {
        Some(Value::Real(r)) => assert!((r - std::f64::consts::PI).abs() < 1e-12),
        other => panic!("expected a real, got {other:?}"),
    }
}

#[test]
fn interpolation_misses_stay_literal() {
    let context = run_with("SET greeting TO \"hello {nobody}\"");

    assert_eq!(context.get_variable("greeting"),
               Some(&Value::Str("hello {nobody}".to_string())));
}

#[test]
fn wait_accepts_anything_numeric() {
    assert_success("WAIT 0 SECONDS");
    assert_success("WAIT 0.0 SECONDS");
    assert_success("WAIT \"0\" SECONDS");
    assert_failure("WAIT \"soon\" SECONDS");
    assert_failure("WAIT 0 - 1 SECONDS");
}

#[test]
fn arithmetic_type_mismatches_are_errors() {
    assert_failure("SAY \"a\" + 1");
    assert_failure("SAY \"a\" * \"b\"");
    assert_failure("SAY -\"a\"");
    assert_failure("SAY \"a\" < 1");
}

#[test]
fn string_concatenation_and_comparison_work() {
    let context = run_with("SET ab TO \"a\" + \"b\"\nSET lt TO \"a\" < \"b\"");

    assert_eq!(context.get_variable("ab"), Some(&Value::Str("ab".to_string())));
    assert_eq!(context.get_variable("lt"), Some(&Value::Bool(true)));
}

#[test]
fn lexical_errors_surface_as_lex_errors() {
    let mut context = Context::new();

    let err = run_source("SAY \"oops", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::UnterminatedString { line: 1, .. })));

    let err = run_source("SET x TO 1.2.3", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::MalformedNumber { .. })));

    let err = run_source("SAY @", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<LexError>(),
                     Some(LexError::UnexpectedCharacter { character: '@', .. })));
}

#[test]
fn structural_mistakes_surface_as_parse_errors() {
    let mut context = Context::new();

    let err = run_source("SET 5 TO 3", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedIdentifier { .. })));

    let err = run_source("IF 1 THEN\nSAY 1", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnclosedBlock { opener: "IF", .. })));

    let err = run_source("LOOP 3\nSAY 1\nENDLOOP", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedToken { .. })));

    let err = run_source("ENDIF", &mut context).unwrap_err();
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedToken { .. })));
}

#[test]
fn precedence_shows_in_the_canonical_rendering() {
    let program = parse(&tokenize("SAY 1 + 2 * 3").unwrap()).unwrap();
    assert_eq!(program.to_source(), "SAY (1 + (2 * 3))\n");

    let program = parse(&tokenize("SAY 1 + 2 == 3 AND NOT FALSE").unwrap()).unwrap();
    assert_eq!(program.to_source(), "SAY (((1 + 2) == 3) AND (NOT FALSE))\n");
}

#[test]
fn rendering_reparses_to_the_same_tree() {
    let source = "SET x TO 3.5\nADD x BY 4\nIF x > 5 AND TRUE THEN\nYELL \"big {x}\"\nELSE\n\
                  WHISPER 'small'\nENDIF\nLOOP 2 + 1 TIMES\nREPEAT \"ha\" LOOPCOUNT TIMES\n\
                  IF LOOPCOUNT == 2 THEN\nBREAKOUT\nENDIF\nENDLOOP\nWAIT 0 SECONDS\nDUMP\nSTOP";

    let first = parse(&tokenize(source).unwrap()).unwrap();
    let rendering = first.to_source();

    let second = parse(&tokenize(&rendering).unwrap()).unwrap();
    assert_eq!(second.to_source(), rendering);

    let third = parse(&tokenize(&second.to_source()).unwrap()).unwrap();
    assert_eq!(third, second);
}

#[test]
fn tokenizing_is_deterministic() {
    let source = fs::read_to_string("tests/example.franz").expect("missing example script");
    assert_eq!(tokenize(&source).unwrap(), tokenize(&source).unwrap());
}

#[test]
fn example_script_runs() {
    let source = fs::read_to_string("tests/example.franz").expect("missing example script");
    assert_success(&source);
}
