//! CLI end-to-end tests that invoke the compiled `bffgen` binary.

use assert_cmd::Command;
use bffgen_test_utils::TestProject;
use predicates::prelude::*;

fn bffgen(project: &TestProject) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bffgen"));
    cmd.current_dir(project.root()).env_remove("RUST_LOG").env_remove("BFFGEN_CONFIG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let project = TestProject::new();
    bffgen(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("cleanup-backups"));
}

#[test]
fn test_generate_replaces_block() {
    let project = TestProject::new();
    project.write("main.go", "A\n// bffgen:begin\nold\n// bffgen:end\nB");
    project.write("body.txt", "new");

    bffgen(&project)
        .args(["generate", "main.go", "body.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 modified"));

    assert_eq!(
        project.read("main.go"),
        "A\n// bffgen:begin\nnew\n// bffgen:end\nB"
    );
}

#[test]
fn test_generate_reads_stdin() {
    let project = TestProject::new();

    bffgen(&project)
        .args(["generate", "out/routes.go", "-"])
        .write_stdin("r.Get(\"/\")")
        .assert()
        .success();

    assert_eq!(
        project.read("out/routes.go"),
        "// bffgen:begin\nr.Get(\"/\")\n// bffgen:end"
    );
}

#[test]
fn test_check_mode_prints_diff_and_leaves_file() {
    let project = TestProject::new();
    let original = "// bffgen:begin\nold\n// bffgen:end";
    project.write("main.go", original);
    project.write("body.txt", "new");

    bffgen(&project)
        .args(["--check", "--dry-run", "generate", "main.go", "body.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes detected"))
        .stdout(predicate::str::contains("~ 2: old -> new"));

    assert_eq!(project.read("main.go"), original);
}

#[test]
fn test_generate_json_report() {
    let project = TestProject::new();
    project.write("body.txt", "x");

    let output = bffgen(&project)
        .args(["--dry-run", "generate", "main.go", "body.txt", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["strategy"], "create");
    assert_eq!(report["mode"], "dry_run");
    assert_eq!(report["written"], false);
    assert_eq!(report["diff"]["has_changes"], true);
    project.assert_file_missing("main.go");
}

#[test]
fn test_scoped_marker_flag() {
    let project = TestProject::new();
    project.write("body.txt", "mw");

    bffgen(&project)
        .args(["--marker-id", "middleware", "generate", "server.go", "body.txt"])
        .assert()
        .success();

    assert_eq!(
        project.read("server.go"),
        "// bffgen:begin:middleware\nmw\n// bffgen:end:middleware"
    );
}

#[test]
fn test_validate_reports_marker_error() {
    let project = TestProject::new();
    project.write("ok.go", "// bffgen:begin\nx\n// bffgen:end");
    project.write("bad.go", "x\n// bffgen:end");

    bffgen(&project)
        .args(["validate", "ok.go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("well-formed"));

    bffgen(&project)
        .args(["validate", "bad.go"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_summary_lists_sections() {
    let project = TestProject::new();
    project.write("main.go", "a\n// bffgen:begin\nb\n// bffgen:end");

    bffgen(&project)
        .args(["summary", "main.go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Section at lines 2-4 (1 lines)"));
}

#[test]
fn test_diff_command() {
    let project = TestProject::new();
    project.write("old.txt", "a\nb");
    project.write("new.txt", "a\nc\nd");

    bffgen(&project)
        .args(["diff", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes: 1 added, 1 modified"))
        .stdout(predicate::str::contains("+ 3: d"));

    bffgen(&project)
        .args(["diff", "old.txt", "old.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes detected"));
}

#[test]
fn test_merge_with_resolution_to_output_file() {
    let project = TestProject::new();
    project.write("base.txt", "a\nb\nc");
    project.write("local.txt", "a\nL\nc");
    project.write("remote.txt", "a\nR\nc");

    bffgen(&project)
        .args([
            "merge",
            "base.txt",
            "local.txt",
            "remote.txt",
            "--resolve",
            "2=both",
            "--output",
            "merged.txt",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Merge Conflicts (1):"));

    assert_eq!(project.read("merged.txt"), "a\nboth\nc");
}

#[test]
fn test_merge_unknown_conflict_line_fails() {
    let project = TestProject::new();
    project.write("base.txt", "a");
    project.write("local.txt", "a");
    project.write("remote.txt", "a");

    bffgen(&project)
        .args(["merge", "base.txt", "local.txt", "remote.txt", "--resolve", "9=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9"));
}

#[test]
fn test_backup_and_cleanup() {
    let project = TestProject::new();
    project.write("main.go", "package main");
    project.write("body.txt", "x");

    bffgen(&project)
        .args(["--backup-dir", "bk", "generate", "main.go", "body.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup at"));
    assert_eq!(project.read("bk/main.go.backup"), "package main");

    bffgen(&project)
        .args(["--backup-dir", "bk", "cleanup-backups"])
        .assert()
        .success();
    project.assert_file_missing("bk");

    bffgen(&project)
        .arg("cleanup-backups")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no backup directory configured"));
}

#[test]
fn test_config_file_is_loaded() {
    let project = TestProject::new();
    project.write("bffgen.toml", "[marker]\nid = \"routes\"\n");
    project.write("body.txt", "r");

    bffgen(&project)
        .args(["--config", "bffgen.toml", "generate", "main.go", "body.txt"])
        .assert()
        .success();

    assert_eq!(
        project.read("main.go"),
        "// bffgen:begin:routes\nr\n// bffgen:end:routes"
    );
}
