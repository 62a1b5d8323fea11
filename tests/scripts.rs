use std::{fs, io, path::Path};

use ciktor::run;
use walkdir::WalkDir;

#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ck"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        let mut output = Vec::new();
        if let Err(e) = run(&source, &mut io::empty(), &mut output) {
            panic!("Script {path:?} failed: {e}");
        }

        count += 1;
        assert_eq!(String::from_utf8_lossy(&output), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn read_expected(script: &Path) -> String {
    let path = script.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
