use std::process::{Command, Output};

fn ciktor(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ciktor")).args(args)
                                              .env_remove("RUST_LOG")
                                              .output()
                                              .expect("failed to start ciktor")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn runs_a_script() {
    let output = ciktor(&["tests/scripts/fibonacci.ck"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(output.stdout,
               std::fs::read("tests/scripts/fibonacci.out").expect("expected output"));
}

#[test]
fn wrong_argument_count_prints_usage() {
    for args in [&[][..], &["a.ck", "b.ck"][..]] {
        let output = ciktor(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stderr(&output).contains("Usage"), "{args:?}: {}", stderr(&output));
    }
}

#[test]
fn help_exits_successfully() {
    let output = ciktor(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn unreadable_script_is_reported() {
    let output = ciktor(&["tests/scripts/no_such_script.ck"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("failed to read 'tests/scripts/no_such_script.ck': "),
            "{}",
            stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn failing_script_reports_line_and_exits_with_failure() {
    let path = std::env::temp_dir().join(format!("ciktor-cli-{}.ck", std::process::id()));
    std::fs::write(&path, "print(1)\nprint(x)\n").expect("failed to write script");

    let output = ciktor(&[path.to_str().expect("utf-8 path")]);
    std::fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, b"1");
    assert_eq!(stderr(&output), "2: no such variable 'x'\n");
}

#[test]
fn tokens_and_ast_flags_do_not_run_the_script() {
    let tokens = ciktor(&["--tokens", "tests/scripts/fibonacci.ck"]);
    assert!(tokens.status.success(), "{}", stderr(&tokens));
    assert!(String::from_utf8_lossy(&tokens.stdout).starts_with("1: 'func'\n"));

    let ast = ciktor(&["--ast", "tests/scripts/fibonacci.ck"]);
    assert!(ast.status.success(), "{}", stderr(&ast));
    assert!(String::from_utf8_lossy(&ast.stdout).contains("FunctionDef"));

    let both = ciktor(&["--tokens", "--ast", "tests/scripts/fibonacci.ck"]);
    assert_eq!(both.status.code(), Some(1));
}
