use std::fs;

use tinypy::{default_output_path, transpile_file, transpile_source, TranspileError, TranspileOptions};

#[test]
fn full_program_with_conditionals_loops_and_io() {
    let src = include_str!("fixtures/grades.tpy");
    insta::assert_snapshot!(transpile_source(src), @r#"
PASS_MARK = 50
global total; total = 0
def main():
    global total
    n = None
    n = int(input())
    scores = [0] * n
    names = {1: "ann", 2: "bo"}
    for i in range(0, n):
        scores[i] = int(input())
        total = total + scores[i]
    avg = 0.0
    avg = total / n
    if avg >= PASS_MARK and n != 0:
        print("pass", avg)
    elif avg >= 40:
        print("close")
    else:
        print("fail")
    for k, v in names.items():
        print(k, v)
    return 0

if __name__ == "__main__":
    main()
"#);
}

#[test]
fn chained_conditions_after_bare_close() {
    let src = include_str!("fixtures/chained.tpy");
    insta::assert_snapshot!(transpile_source(src), @r#"
def classify(x):
    if x < 10:
        return "small"
    elif x > 100:
        while x > 100:
            x = x / 2
        return "big"
    return "medium"
"#);
}

#[test]
fn collections_and_iteration() {
    let src = include_str!("fixtures/collections.tpy");
    insta::assert_snapshot!(transpile_source(src), @r#"
words = ["alpha", "beta", "gamma"]
flags = [True, False]
weights = [0.0] * 4
bag = []
ages = {"ann": 31, "bo": 27}
empty = {}
for w in words:
    print(w)
seen = False
while not seen and len(words) != 0:
    seen = True
"#);
}

#[test]
fn default_output_path_swaps_extension() {
    assert_eq!(
        default_output_path(std::path::Path::new("progs/hello.tpy")),
        std::path::PathBuf::from("progs/hello.py")
    );
}

#[test]
fn transpile_file_writes_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hello.tpy");
    fs::write(&input, "int main(){\n    disp << \"hello\";\n}\n").unwrap();

    let written = transpile_file(&input, None, &TranspileOptions::default()).unwrap();
    assert_eq!(written, dir.path().join("hello.py"));

    let python = fs::read_to_string(&written).unwrap();
    assert!(python.starts_with("def main():\n    print(\"hello\")\n"));
    assert!(python.ends_with("    main()\n"));
}

#[test]
fn transpile_file_honours_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tpy");
    let output = dir.path().join("custom.py");
    fs::write(&input, "x++;\n").unwrap();

    let written = transpile_file(&input, Some(&output), &TranspileOptions::default()).unwrap();
    assert_eq!(written, output);
    assert_eq!(fs::read_to_string(&output).unwrap(), "x += 1\n");
}

#[test]
fn transpile_file_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.tpy");

    let err = transpile_file(&missing, None, &TranspileOptions::default()).unwrap_err();
    assert!(matches!(err, TranspileError::Read { .. }));
    assert!(err.to_string().contains("missing.tpy"));
}
