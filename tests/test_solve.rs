use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

const CHAIN: &str = "arg(a),arg(b),arg(c),att(a:b),att(b:c)";

fn solve_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crustground").unwrap();
    cmd.args(["solve", "--logging-level", "off"]);
    cmd
}

fn assert_answer_for_input(input: &str, extra_args: &[&str], expected: &str) {
    let mut cmd = solve_cmd();
    cmd.arg("-i").arg(input).args(extra_args);
    cmd.assert().success().stdout(predicate::eq(expected));
}

fn assert_failure_for_input(input: &str, extra_args: &[&str], reason: &str) {
    let mut cmd = Command::cargo_bin("crustground").unwrap();
    cmd.args(["solve", "--logging-level", "error", "-i", input])
        .args(extra_args);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(reason));
}

#[test]
fn test_single_argument() {
    assert_answer_for_input("arg(a)", &[], "[a]\n");
}

#[test]
fn test_single_attack() {
    assert_answer_for_input("arg(a),arg(b),att(a:b)", &[], "[a]\n");
}

#[test]
fn test_mutual_attack() {
    assert_answer_for_input("arg(a),arg(b),att(a:b),att(b:a)", &[], "[]\n");
}

#[test]
fn test_self_attack() {
    assert_answer_for_input("arg(a),att(a:a)", &[], "[]\n");
}

#[test]
fn test_chain() {
    assert_answer_for_input(CHAIN, &[], "[a,c]\n");
    assert_answer_for_input(CHAIN, &["-p", "SE-GR"], "[a,c]\n");
}

#[test]
fn test_blank_input() {
    assert_answer_for_input("", &[], "NO INPUT\n");
    assert_answer_for_input("   ", &[], "NO INPUT\n");
}

#[test]
fn test_missing_input() {
    let mut cmd = solve_cmd();
    cmd.assert()
        .success()
        .stdout(predicate::eq("NO INPUT\n"));
}

#[test]
fn test_lenient_reading() {
    assert_answer_for_input("arg(a), foo, att(a:z), arg(b), att(b:a)", &[], "[b]\n");
}

#[test]
fn test_forward_references() {
    assert_answer_for_input("att(a:b),arg(a),arg(b)", &[], "[a,b]\n");
    assert_answer_for_input(
        "att(a:b),arg(a),arg(b)",
        &["--forward-references"],
        "[a]\n",
    );
}

#[test]
fn test_strict_reading() {
    assert_answer_for_input("arg(a),att(a:z)", &[], "[a]\n");
    assert_failure_for_input(
        "arg(a),att(a:z)",
        &["--strict"],
        r#"the attack at index 2 refers to the undeclared argument "z""#,
    );
    assert_answer_for_input("arg(a),arg(z),att(a:z)", &["--strict"], "[a]\n");
}

#[test]
fn test_credulous_acceptance() {
    assert_answer_for_input(CHAIN, &["-p", "DC-GR", "-a", "c"], "YES\n");
    assert_answer_for_input(CHAIN, &["-p", "DC-GR", "-a", "b"], "NO\n");
}

#[test]
fn test_skeptical_acceptance() {
    assert_answer_for_input(CHAIN, &["-p", "DS-GR", "-a", "a"], "YES\n");
    assert_answer_for_input(CHAIN, &["-p", "DS-GR", "-a", "b"], "NO\n");
}

#[test]
fn test_missing_query_argument() {
    assert_answer_for_input(CHAIN, &["-p", "DC-GR", "-a", "a"], "YES\n");
    assert_failure_for_input(
        CHAIN,
        &["-p", "DC-GR"],
        "missing argument on the command line (required for query DC)",
    );
    assert_failure_for_input(
        CHAIN,
        &["-p", "DS-GR"],
        "missing argument on the command line (required for query DS)",
    );
}

#[test]
fn test_unknown_query_argument() {
    assert_answer_for_input(CHAIN, &["-p", "DC-GR", "-a", "c"], "YES\n");
    assert_failure_for_input(CHAIN, &["-p", "DC-GR", "-a", "z"], "no such argument: z");
}

#[test]
fn test_unsupported_semantics() {
    assert_answer_for_input(CHAIN, &["-p", "SE-GR"], "[a,c]\n");
    assert_failure_for_input(CHAIN, &["-p", "SE-PR"], r#"unsupported semantics "PR""#);
}

#[test]
fn test_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("debate.txt")?;
    file.write_str(&format!("{}\n", CHAIN))?;
    let mut cmd = solve_cmd();
    cmd.arg("-f").arg(file.path());
    cmd.assert().success().stdout(predicate::eq("[a,c]\n"));
    file.close()?;
    Ok(())
}

#[test]
fn test_debate_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("debate.json")?;
    file.write_str(
        r#"[
            {"id": "A", "content": "It is sunny", "relation": "none", "target_id": null},
            {"id": "B", "content": "It is raining", "relation": "attack", "target_id": "A"},
            {"id": "C", "content": "The forecast says sun", "relation": "attack", "target_id": "B"}
        ]"#,
    )?;
    let mut cmd = solve_cmd();
    cmd.arg("-f").arg(file.path()).args(["--reader", "debate"]);
    cmd.assert().success().stdout(predicate::eq("[A,C]\n"));
    file.close()?;
    Ok(())
}

#[test]
fn test_missing_file() {
    let mut cmd = solve_cmd();
    cmd.args(["-f", "/this/file/does/not/exist.txt"]);
    cmd.assert().failure();
}

#[test]
fn test_long_input_option() {
    let mut cmd = solve_cmd();
    cmd.args(["--input", "arg(a),arg(b),att(a:b)"]);
    cmd.assert().success().stdout(predicate::eq("[a]\n"));
}

#[test]
fn test_credulous_acceptance_with_certificate() {
    assert_answer_for_input(CHAIN, &["-p", "DC-GR", "-a", "c", "-c"], "YES\n[a,c]\n");
    assert_answer_for_input(
        CHAIN,
        &["-p", "DC-GR", "-a", "b", "--with-certificate"],
        "NO\n",
    );
}

#[test]
fn test_skeptical_acceptance_with_certificate() {
    assert_answer_for_input(CHAIN, &["-p", "DS-GR", "-a", "a", "-c"], "YES\n");
    assert_answer_for_input(CHAIN, &["-p", "DS-GR", "-a", "b", "-c"], "NO\n[a,c]\n");
}

#[test]
fn test_dropped_instruction_warning() {
    let mut cmd = Command::cargo_bin("crustground").unwrap();
    cmd.args(["solve", "--logging-level", "warn", "-i", "arg(a),foo"]);
    cmd.assert().success().stdout(
        predicate::str::contains(r#"ignoring instruction: malformed token "foo" at index 2"#)
            .and(predicate::str::contains("at index 2: ignoring").not())
            .and(predicate::str::ends_with("[a]\n")),
    );
}
