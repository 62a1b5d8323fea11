use std::io::{self, Write};

use ciktor::{
    ast::{BinaryOperator, Type},
    error::{Error, ParseError, RuntimeError},
    interpreter::evaluator::function::core::MAX_CALL_DEPTH,
    run,
};

fn run_with_input(src: &str, input: &str) -> (Result<(), Error>, String) {
    let mut output = Vec::new();
    let result = run(src, &mut input.as_bytes(), &mut output);
    (result, String::from_utf8(output).expect("output is utf-8"))
}

fn assert_output(src: &str, expected: &str) {
    match run_with_input(src, "") {
        (Ok(()), output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        (Err(e), output) => panic!("Script failed: {e}\noutput so far: {output:?}\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let (Err(e), _) = run_with_input(src, "") {
        panic!("Script failed: {e}");
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run_with_input(src, "").0 {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match run_with_input(src, "").0 {
        Err(Error::Parse(e)) => e,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn basic_printing() {
    assert_output("print(1+2)", "3");
    assert_output("print(\"a\"+\"b\")", "ab");
    assert_output("print([1,2]+[3])", "[1, 2, 3]");
    assert_output("print()", "\n");
    assert_output("print(1); print(); print(2)", "1\n2");
    assert_output("print([1, \"a\", [true, false]])", "[1, a, [true, false]]");
}

#[test]
fn string_multiplication_doubles() {
    assert_output("string s = \"ab\"; print(s*1);", "abab");
    assert_output("string s = \"ab\"; print(s*2);", "abababab");
    assert_output("string s = \"ab\"; print((s*3)?);", "16");
    assert_output("print(\"ab\" * 0)", "ab");
    assert_output("print(\"ab\" * (3 / 2))", "abab");
    assert_output("print(\"\" * 50)", "");
}

#[test]
fn huge_string_repetition_is_an_error() {
    assert!(matches!(runtime_error("print(\"ab\" * 100)"),
                     RuntimeError::RepetitionOverflow { line: 1 }));
    assert!(matches!(runtime_error("string s = \"ab\" * 47"),
                     RuntimeError::RepetitionOverflow { line: 1 }));
}

#[test]
fn huge_array_repetition_is_an_error() {
    assert!(matches!(runtime_error("\narray a = [1] * 1000000000000000"),
                     RuntimeError::RepetitionOverflow { line: 2 }));
    assert_output("print([] * 1000000000000000)", "[]");
}

#[test]
fn void_functions_and_missing_return() {
    assert_success("func f<> void { return; }\nf()");
    assert_success("func f<> void { }\nf()");
    assert_eq!(runtime_error("func g<> double { print(1) }\ng()"),
               RuntimeError::MissingReturn { name: "g".to_string(),
                                             line: 2, });
}

#[test]
fn for_loop_without_separator_after_init() {
    assert_output("for double i = 0 i < 3 { print(i); i = i + 1; }", "012");
    assert_output("for double i = 0; i < 3 { print(i); i = i + 1 }", "012");
    assert_output("for double i = 5 i < 3 { print(i) }", "");
}

#[test]
fn indexing_and_size() {
    assert_eq!(runtime_error("print([1,2].5)"),
               RuntimeError::IndexOutOfRange { index: 5.0,
                                               len:   2,
                                               line:  1, });
    assert_output("print([1,2]?)", "2");
    assert_output("array a = [[1, 2], [3]]\nprint(a.0.1)", "2");
    assert_output("print(\"abc\".1)", "b");
    assert_output("print(\"héllo\"?)", "5");
    assert_output("array a = [4, 5, 6]\nprint(a.(1 + 1))", "6");
    assert!(matches!(runtime_error("print(\"abc\".3)"),
                     RuntimeError::IndexOutOfRange { len: 3, .. }));
    assert!(matches!(runtime_error("print([1, 2].0.5)"),
                     RuntimeError::IncompatibleOperands { op: BinaryOperator::Index,
                                                          left: Type::Double,
                                                          .. }));
    assert!(matches!(runtime_error("print(3?)"),
                     RuntimeError::NotSized { found: Type::Double,
                                              line:  1, }));
}

#[test]
fn declaration_and_assignment_types_are_checked() {
    assert!(matches!(runtime_error("double x = true;"),
                     RuntimeError::DeclarationTypeMismatch { expected: Type::Double,
                                                             found: Type::Bool,
                                                             .. }));
    assert!(matches!(runtime_error("double x = 1; x = \"s\";"),
                     RuntimeError::AssignmentTypeMismatch { expected: Type::Double,
                                                            found: Type::String,
                                                            .. }));
    assert!(matches!(runtime_error("y = 1"), RuntimeError::UnknownVariable { .. }));
    assert_output("int n = 3\nn = n * 2\nprint(n)", "6");
    assert_output("double x = 1\nstring x = \"s\"\nprint(x)", "s");
}

#[test]
fn call_locals_do_not_leak() {
    let e = runtime_error("func f<double n> void { double x = n; } f(5); print(x);");
    assert_eq!(e,
               RuntimeError::UnknownVariable { name: "x".to_string(),
                                               line: 1, });
    assert_eq!(e.to_string(), "1: no such variable 'x'");
}

#[test]
fn calls_restore_caller_variables() {
    assert_output("double n = 1\nfunc f<double n> double { return n * 10 }\nprint(f(2)); \
                   print(); print(n)",
                  "20\n1");
    assert_output("double g = 1\nfunc bump<> void { g = g + 1; print(g) }\nbump()\nprint(g)",
                  "21");
}

#[test]
fn recursion_and_nested_return() {
    let fact = "
func fact<double n> double {
    if n <= 1 { return 1 }
    return n * fact(n - 1)
}
print(fact(5))
";
    assert_output(fact, "120");

    let find = "
func find<array a, double x> double {
    for double i = 0 i < a? {
        if a.i == x {
            return i
        }
        i = i + 1
    }
    return 0 - 1
}
print(find([5, 6, 7], 6))
print(find([5, 6, 7], 9))
";
    assert_output(find, "1-1");
}

#[test]
fn deep_recursion() {
    let down = |n: u32| {
        format!("func down<double n> double {{ if n == 0 {{ return 0 }} return down(n - 1) }}\n\
                 print(down({n}))")
    };
    assert_output(&down(3000), "0");
    assert_eq!(runtime_error(&down(20000)),
               RuntimeError::RecursionLimit { limit: MAX_CALL_DEPTH,
                                              line:  1, });
    // The depth is released again when calls return.
    assert_output(&format!("{}\nprint(down(3000))", down(3000)), "00");
}

#[test]
fn call_errors() {
    assert!(matches!(runtime_error("f()"), RuntimeError::UnknownFunction { .. }));
    assert!(matches!(runtime_error("f()\nfunc f<> void {}"),
                     RuntimeError::UnknownFunction { line: 1, .. }));
    assert_eq!(runtime_error("func f<double n> void {}\nf()"),
               RuntimeError::ArgumentCountMismatch { name:     "f".to_string(),
                                                     expected: 1,
                                                     found:    0,
                                                     line:     2, });
    assert_eq!(runtime_error("func f<double n> void {}\n\nf(\"x\")"),
               RuntimeError::ArgumentTypeMismatch { param:    "n".to_string(),
                                                    expected: Type::Double,
                                                    found:    Type::String,
                                                    line:     3, });
    assert_eq!(runtime_error("func f<> double { return \"x\" }\nprint(f())"),
               RuntimeError::ReturnTypeMismatch { name:     "f".to_string(),
                                                  expected: Type::Double,
                                                  found:    Type::String,
                                                  line:     2, });
}

#[test]
fn later_function_definition_wins() {
    assert_output("func f<> double { return 1 }\nfunc f<> double { return 2 }\nprint(f())",
                  "2");
}

#[test]
fn expression_statements_must_be_void() {
    assert_eq!(runtime_error("1 + 2"),
               RuntimeError::StatementNotVoid { found: Type::Double,
                                                line:  1, });
    assert!(matches!(runtime_error("func f<> bool { return true }\nif true { f() }"),
                     RuntimeError::StatementNotVoid { found: Type::Bool,
                                                      line:  2, }));
    assert_output("func f<> void {}\nprint(f())", "void");
}

#[test]
fn number_operators() {
    assert_output("print(7 % 3)", "1");
    assert_output("print((0 - 7) % 3)", "-1");
    assert_output("print(15 / 2)", "7.5");
    assert_output("print(7 // 2)", "3");
    assert_output("print(1 / 2)", "0.5");
    assert_output("print(1 / 0)", "inf");
    assert_output("print(2 * 3 + 4)", "10");
    assert_output("print(2 * (3 + 4))", "14");
    assert_output("print(10 - 2 - 3)", "5");
    assert!(matches!(runtime_error("print(1 % 0)"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("print(1 // 0)"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn comparisons_and_logic() {
    assert_output("print(1 < 2)", "true");
    assert_output("print(2 <= 2)", "true");
    assert_output("print(1 != 1)", "false");
    assert_output("print(\"b\" > \"a\")", "true");
    assert_output("print(\"abc\" == \"abc\")", "true");
    assert_output("print(true == false)", "false");
    assert_output("print(true || false && false)", "false");
    assert_output("print(!true)", "false");
    assert_output("print(!!true)", "true");
    assert!(matches!(parse_error("print(1 < 2 < 3)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(runtime_error("print(!1)"),
                     RuntimeError::TypeError { expected: Type::Bool,
                                               found: Type::Double,
                                               .. }));
}

#[test]
fn string_operators() {
    assert_output("print(\"10\" - \"4\")", "6");
    assert_output("print(\"n\" + 1)", "n1");
    assert_output("print(\"x\" + 1 / 4)", "x0.25");
    assert!(matches!(runtime_error("print(\"x\" - \"1\")"),
                     RuntimeError::InvalidNumber { .. }));
    assert_eq!(runtime_error("print(1 + \"a\")"),
               RuntimeError::IncompatibleOperands { op:    BinaryOperator::Add,
                                                    left:  Type::Double,
                                                    right: Type::String,
                                                    line:  1, });
}

#[test]
fn array_operators() {
    assert_output("print([1, 2] * 2)", "[1, 2, 1, 2]");
    assert_output("print([1, 2] * 0)", "[]");
    assert_output("print([1, 2, 3] - 1)", "[1, 2]");
    assert_output("print([1, 2, 3] - 3)", "[]");
    assert!(matches!(runtime_error("print([1] - 2)"), RuntimeError::InvalidCount { len: 1, .. }));
    assert!(matches!(runtime_error("print([1] * 0.5)"), RuntimeError::InvalidCount { .. }));
    assert!(matches!(runtime_error("print([1] == [1])"),
                     RuntimeError::IncompatibleOperands { op: BinaryOperator::Equal,
                                                          .. }));
}

#[test]
fn values_are_copied() {
    assert_output("array a = [1]\narray b = a\nb = b + [2]\nprint(a)\nprint(b)",
                  "[1][1, 2]");
    assert_output("array a = [[1]]\narray inner = a.0\ninner = inner + [2]\nprint(a)",
                  "[[1]]");
}

#[test]
fn if_else_chains() {
    let src = "double x = 5
if x < 3 { print(\"small\") } else if x < 10 { print(\"medium\") } else { print(\"large\") }
";
    assert_output(src, "medium");
    assert_output("if false { print(1) }\nprint(2)", "2");
    assert_eq!(runtime_error("if 1 { }"),
               RuntimeError::TypeError { expected: Type::Bool,
                                         found:    Type::Double,
                                         line:     1, });
}

#[test]
fn throw_writes_highlighted_value_and_stops() {
    let (result, output) = run_with_input("print(\"a\")\nthrow([1, 2])\nprint(\"b\")", "");
    let error = result.unwrap_err();

    assert_eq!(output, "a\x1b[1;31m[1, 2]\x1b[0m\n");
    assert!(error.is_silent());
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::Thrown { line: 2, .. })));
}

#[test]
fn exit_stops_silently() {
    let (result, output) = run_with_input("print(1)\nexit()\nprint(2)", "");
    let error = result.unwrap_err();

    assert_eq!(output, "1");
    assert!(error.is_silent());
    assert_eq!(error.line(), 2);
}

#[test]
fn input_reads_lines() {
    let src = "string a = input()\nstring b = input()\nprint(b + a)";
    let (result, output) = run_with_input(src, "hello\r\nworld\n");
    assert!(result.is_ok());
    assert_eq!(output, "worldhello");

    let (result, output) = run_with_input("print(input()?)", "");
    assert!(result.is_ok());
    assert_eq!(output, "0");
}

#[test]
fn top_level_return_is_an_error() {
    assert!(matches!(runtime_error("print(1)\nreturn 2"),
                     RuntimeError::ReturnOutsideFunction { line: 2 }));
}

#[test]
fn comments_blank_lines_and_crlf() {
    assert_output("# leading comment\r\n\r\nprint(1) # trailing\r\n\r\n\r\nprint(2)\r\n", "12");
    assert_output("", "");
}

#[test]
fn parse_errors() {
    assert_eq!(parse_error("print(1)\nprint(\"abc"),
               ParseError::UnterminatedString { line: 2 });
    assert!(matches!(parse_error("double = 1"), ParseError::ExpectedName { .. }));
    assert!(matches!(parse_error("1 + 1 = 2"),
                     ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(parse_error("func f<x> void {}"),
                     ParseError::ExpectedType { position: "parameter",
                                                .. }));
    assert!(matches!(parse_error("func f<> {}"),
                     ParseError::ExpectedType { position: "return",
                                                .. }));
    assert!(matches!(parse_error("print(1) print(2)"),
                     ParseError::ExpectedTerminator { line: 1, .. }));
    assert!(matches!(parse_error("print(1 +)"),
                     ParseError::ExpectedExpression { .. }));
    assert!(matches!(parse_error("if true {\nprint(1)\n"),
                     ParseError::UnexpectedToken { line: 3, .. }));
    assert!(matches!(parse_error("x @ y"),
                     ParseError::UnexpectedCharacter { line: 1, .. }));
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let (result, output) = run_with_input("print(1)\nprint(", "");
    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(output, "");
}

#[test]
fn diagnostics_carry_line_numbers() {
    let (result, _) = run_with_input("double a = 1\n\nprint(a + b)", "");
    assert_eq!(result.unwrap_err().to_string(), "3: no such variable 'b'");

    let (result, _) = run_with_input("print(\"x\")\n\n\n$", "");
    assert_eq!(result.unwrap_err().to_string(), "4: unexpected character '$'");
}

struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn failed_final_flush_is_an_error() {
    let result = run("print(1)\nprint(2)\n", &mut io::empty(), &mut ClosedOutput);
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Io { line: 2, .. }))),
            "{result:?}");
}
