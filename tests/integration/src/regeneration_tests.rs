//! End-to-end regeneration scenarios
//!
//! Each test walks a generated project through several regeneration rounds
//! with hand edits in between, crossing the blocks, content and core crates.

use std::collections::BTreeMap;

use bffgen_blocks::{Marker, find_sections, insert_section, remove_section, validate_markers};
use bffgen_content::{DiffKind, DiffStrategy, ThreeWayMerge, compute_diff};
use bffgen_core::{BackupNaming, Generator, GeneratorConfig, UpdateStrategy};
use bffgen_test_utils::TestProject;
use pretty_assertions::assert_eq;

const MAIN_GO: &str = "package main

import \"net/http\"

func main() {
\tmux := http.NewServeMux()
}
";

#[test]
fn test_hand_edits_outside_block_survive_regeneration() {
    let project = TestProject::new();
    let target = project.write("main.go", MAIN_GO);
    let generator = Generator::default();

    let first = generator
        .generate_file(&target, "mux.HandleFunc(\"/users\", users)")
        .unwrap();
    assert_eq!(first.strategy, UpdateStrategy::Append);

    // The user adds code above and below the generated region
    let edited = project
        .read("main.go")
        .replace("package main\n", "package main\n\n// Custom header\n")
        + "\nfunc extra() {}\n";
    project.write("main.go", &edited);

    let second = generator
        .generate_file(
            &target,
            "mux.HandleFunc(\"/users\", users)\nmux.HandleFunc(\"/orders\", orders)",
        )
        .unwrap();

    let content = project.read("main.go");
    assert_eq!(second.strategy, UpdateStrategy::Replace);
    assert!(content.contains("// Custom header"));
    assert!(content.ends_with("\nfunc extra() {}\n"));
    assert!(content.contains("mux.HandleFunc(\"/orders\", orders)"));
    assert_eq!(second.diff.count(DiffKind::Added), 1);
    validate_markers(&content, &Marker::default()).unwrap();
}

#[test]
fn test_hand_edits_inside_block_are_recovered_by_merge() {
    let project = TestProject::new();
    let target = project.path("routes.go");
    let generator = Generator::default();

    generator.generate_file(&target, "get /a\nget /b\nget /c").unwrap();
    let base = project.read("routes.go");

    // The user tweaks a generated line, then the generator changes the same line
    let local = base.replace("get /b", "get /b // cached");
    project.write("routes.go", &local);
    generator.generate_file(&target, "get /a\npost /b\nget /c").unwrap();
    let remote = project.read("routes.go");

    let mut result = ThreeWayMerge::new(&base, &local, &remote).merge();
    assert!(result.has_conflicts);
    assert_eq!(result.conflicts.len(), 1);
    let line = result.conflicts[0].line;
    assert_eq!(result.conflicts[0].local, "get /b // cached");
    assert_eq!(result.conflicts[0].remote, "post /b");

    result.resolve_conflict(line, "post /b // cached").unwrap();
    let merged = result.apply_resolutions();

    assert_eq!(
        merged,
        "// bffgen:begin\nget /a\npost /b // cached\nget /c\n// bffgen:end"
    );
    assert_eq!(compute_diff(&remote, &merged).summary, "1 modified");
}

#[test]
fn test_independent_scoped_blocks_in_one_file() {
    let project = TestProject::new();
    let target = project.write("server.go", "package server\n");
    let routes = Generator::new(GeneratorConfig::new().with_marker(Marker::scoped("routes")));
    let middleware =
        Generator::new(GeneratorConfig::new().with_marker(Marker::scoped("middleware")));

    routes.generate_file(&target, "r1").unwrap();
    middleware.generate_file(&target, "m1").unwrap();
    routes.generate_file(&target, "r2").unwrap();

    let content = project.read("server.go");
    assert_eq!(
        content,
        "package server\n\n// bffgen:begin:routes\nr2\n// bffgen:end:routes\n\n\
         // bffgen:begin:middleware\nm1\n// bffgen:end:middleware"
    );

    let sections = find_sections(&content, &Marker::scoped("middleware")).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].body, "m1");
}

#[test]
fn test_section_editor_round_trip_on_generated_file() {
    let project = TestProject::new();
    let target = project.write("main.go", "a\nb");
    let marker = Marker::default();
    Generator::default().generate_file(&target, "gen").unwrap();
    let generated = project.read("main.go");

    let with_extra = insert_section(&generated, &marker, "more", 1).unwrap();
    let sections = find_sections(&with_extra, &marker).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].body, "more");

    let restored = remove_section(&with_extra, &sections[0]).unwrap();
    assert_eq!(restored, generated);
}

#[test]
fn test_batch_generation_with_backups_and_cleanup() {
    let project = TestProject::new();
    project.write("api/handler.go", "package api");
    project.write("web/handler.go", "package web");
    let config = GeneratorConfig::new()
        .with_backup_dir(project.path(".bffgen/backups"))
        .with_backup_naming(BackupNaming::FullPath);
    let generator = Generator::new(config);

    let mut files = BTreeMap::new();
    files.insert(project.path("api/handler.go"), "api body".to_string());
    files.insert(project.path("web/handler.go"), "web body".to_string());
    files.insert(project.path("new/handler.go"), "new body".to_string());

    let reports = generator.generate_files(&files).unwrap();

    assert_eq!(reports.len(), 3);
    let backups: Vec<_> = reports.iter().filter_map(|r| r.backup.clone()).collect();
    assert_eq!(backups.len(), 2);
    let contents: Vec<String> = backups
        .iter()
        .map(|b| std::fs::read_to_string(b).unwrap())
        .collect();
    assert!(contents.contains(&"package api".to_string()));
    assert!(contents.contains(&"package web".to_string()));

    // Second round is a no-op on content
    let again = generator.generate_files(&files).unwrap();
    assert!(again.iter().all(|r| !r.diff.has_changes));

    assert!(generator.cleanup_backups().unwrap());
    project.assert_file_missing(".bffgen/backups");
}

#[test]
fn test_aligned_strategy_from_config_file() {
    let project = TestProject::new();
    let config_path = project.write("bffgen.json", r#"{"diff_strategy": "aligned"}"#);
    let target = project.write("list.go", "// bffgen:begin\na\nb\nc\n// bffgen:end");
    let generator = Generator::new(GeneratorConfig::load(&config_path).unwrap());

    // Dropping the first body line shifts everything under positional diffing
    let report = generator.generate_file(&target, "b\nc").unwrap();

    assert_eq!(report.diff.summary, "1 removed");
    assert_eq!(report.diff.diffs[0].line, 2);
    assert_eq!(generator.config().diff_strategy, DiffStrategy::Aligned);
}

#[test]
fn test_report_serializes_for_tooling() {
    let project = TestProject::new();
    let generator = Generator::new(GeneratorConfig::new().with_check_mode(true));

    let report = generator.generate_file(project.path("x.go"), "x").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["mode"], "check");
    assert_eq!(json["strategy"], "create");
    // An empty baseline is one empty line
    assert_eq!(json["diff"]["summary"], "2 added, 1 modified");
    project.assert_file_missing("x.go");
}
