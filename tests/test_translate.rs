use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

fn translate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crustground").unwrap();
    cmd.args(["translate", "--logging-level", "off"]);
    cmd
}

#[test]
fn test_translate_debate() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("debate.json")?;
    file.write_str(
        r#"[
            {"id": "rebuttal one", "relation": "attack", "target_id": "claim"},
            {"id": "claim", "content": "We should build it", "relation": null, "target_id": null},
            {"id": 3, "relation": "support", "target_id": "claim"}
        ]"#,
    )?;
    let mut cmd = translate_cmd();
    cmd.arg("-f").arg(file.path());
    cmd.assert().success().stdout(predicate::eq(
        "arg(rebuttal_one),arg(claim),arg(3),att(rebuttal_one:claim)\n",
    ));
    file.close()?;
    Ok(())
}

#[test]
fn test_translate_instructions() {
    let mut cmd = translate_cmd();
    cmd.args([
        "--reader",
        "instructions",
        "-i",
        " arg(a) , att(a:a), arg(b), att(a:a) ",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("arg(a),arg(b),att(a:a)\n"));
}

#[test]
fn test_translate_empty() {
    let mut cmd = translate_cmd();
    cmd.args(["-i", " "]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("NO INPUT\n"));
}

#[test]
fn test_translate_invalid_json() {
    let mut cmd = translate_cmd();
    cmd.args(["-i", "[{\"id\": 1}]"]);
    cmd.assert().success().stdout(predicate::eq("arg(1)\n"));
    let mut cmd = Command::cargo_bin("crustground").unwrap();
    cmd.args(["translate", "--logging-level", "error", "-i", "[{\"id\": }]"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("while parsing the debate items"));
}

#[test]
fn test_translate_drops_invalid_ids() {
    let mut cmd = translate_cmd();
    cmd.args([
        "-i",
        r#"[{"id": "x:y"}, {"id": "b", "relation": "attack", "target_id": "x:y"}]"#,
    ]);
    cmd.assert().success().stdout(predicate::eq("arg(b)\n"));
    let mut cmd = translate_cmd();
    cmd.args(["--strict", "-i", r#"[{"id": "x:y"}]"#]);
    cmd.assert().failure();
}
