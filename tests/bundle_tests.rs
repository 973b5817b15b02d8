//! End-to-end bundling tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fmt::Write as _;

#[allow(deprecated)]
fn bundleme_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bundleme").unwrap();
    for var in [
        "BUNDLEME_OUTPUT",
        "BUNDLEME_NAME",
        "BUNDLEME_DESCRIPTION",
        "BUNDLEME_LICENSE",
        "BUNDLEME_AUTHOR",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Bundle `project` into a separate output directory and return the text
fn run_bundle(project: &common::TestProject, extra: &[&str]) -> String {
    let out = common::TestProject::new();
    let output = out.join(".bundler");

    bundleme_cmd()
        .arg("-o")
        .arg(&output)
        .arg("-y")
        .args(extra)
        .args(["bundle", "--path"])
        .arg(&project.path)
        .assert()
        .success();

    common::read_bundle(&output)
}

#[test]
fn test_mixed_project_statistics() {
    let project = common::TestProject::new();
    project.write_file("a.c", "one\ntwo\nthree\n");
    project.write_bytes("b.bin", &[0xde, 0xad, 0xbe, 0xef]);
    project.write_file("c.txt", "plain\n");

    let bundle = run_bundle(&project, &[]);

    let stat = common::section(&bundle, "STAT");
    let entries: Vec<&str> = stat.split(" | ").collect();
    assert_eq!(entries.len(), 3);
    for label in ["C", "BINARY", "OTHER"] {
        assert!(entries.contains(&format!("%33.3 {label}").as_str()), "{stat}");
    }

    let names = common::section(&bundle, "NAMES");
    assert_eq!(names.lines().count(), 3);
    assert!(names.lines().all(|l| l.ends_with(" | file")));

    let project_type = common::section(&bundle, "PROJECT-TYPE");
    assert_eq!(project_type.split(", ").count(), 3);
    assert!(project_type.contains("[BINARY]"));

    assert!(bundle.contains("a.c [\none\ntwo\nthree\n] (DETECTED ERROR COUNT: 0)\n"));
    assert!(bundle.contains("b.bin [\n] (DETECTED ERROR COUNT: 0)\n"));
    assert!(bundle.contains("c.txt [\nplain\n] (DETECTED ERROR COUNT: 0)\n"));
}

#[test]
fn test_section_order() {
    let project = common::TestProject::new();
    project.write_file("app.js", "console.log(1);\n");

    let bundle = run_bundle(&project, &[]);

    let order = [
        "<! START !>",
        "<! STAT !>",
        "<! NAMES !>",
        "<! DIR-NAME !>",
        "<! BUNDLE-ID !>",
        "<! PROJECT-TYPE !>",
        "<! BUNDLE-NAME !>",
        "<! BUNDLE-DESCRIPTION !>",
        "<! END !>",
        "VIEW LICENSE IN",
        "THIS PROJECT IS MADE BY AUTHOR",
        "PROJECT SUPPORTED BY BUNDLEME",
        "PROJECT USES BUNDLEME FOR BUNDLING PROCESS",
        "<! FILE-CONTENTS !>",
        "app.js [",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| bundle.find(marker).expect(marker))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(bundle.starts_with("<! START !>\n\n<! STAT !>\n"));
}

#[test]
fn test_metadata_flags() {
    let project = common::TestProject::new();
    project.write_file("main.py", "print('hi')\n");

    let bundle = run_bundle(
        &project,
        &[
            "--name",
            "demo",
            "--description",
            "Demo project",
            "--license",
            "LICENSE.md",
            "--author",
            "Jane Doe",
        ],
    );

    assert_eq!(common::section(&bundle, "BUNDLE-NAME"), "\"demo\"");
    assert_eq!(
        common::section(&bundle, "BUNDLE-DESCRIPTION"),
        "\"Demo project\""
    );
    assert!(bundle.contains("VIEW LICENSE IN <LICENSE.md>, CANNOT BE COPIED.\n"));
    assert!(bundle.contains("THIS PROJECT IS MADE BY AUTHOR [Jane Doe].\n"));
}

#[test]
fn test_missing_metadata_is_unknown() {
    let project = common::TestProject::new();
    project.write_file("main.py", "print('hi')\n");

    let bundle = run_bundle(&project, &[]);

    assert_eq!(common::section(&bundle, "BUNDLE-NAME"), "\"UNKNOWN\"");
    assert_eq!(common::section(&bundle, "BUNDLE-DESCRIPTION"), "\"UNKNOWN\"");
    assert!(bundle.contains("VIEW LICENSE IN <UNKNOWN>"));
    assert!(bundle.contains("AUTHOR [UNKNOWN]."));
}

#[test]
fn test_metadata_from_environment() {
    let project = common::TestProject::new();
    project.write_file("x.h", "#define X 1\n");
    let out = common::TestProject::new();
    let output = out.join(".bundler");

    bundleme_cmd()
        .env("BUNDLEME_NAME", "env-name")
        .env("BUNDLEME_AUTHOR", "Env Author")
        .arg("-y")
        .arg("-o")
        .arg(&output)
        .args(["bundle", "--path"])
        .arg(&project.path)
        .assert()
        .success();

    let bundle = common::read_bundle(&output);
    assert_eq!(common::section(&bundle, "BUNDLE-NAME"), "\"env-name\"");
    assert!(bundle.contains("AUTHOR [Env Author]."));
}

#[test]
fn test_config_file_metadata() {
    let project = common::TestProject::new();
    project.write_file(
        "bundleme.yaml",
        "name: configured\ndescription: From config\nlicense: COPYING\nauthor: Config Author\n",
    );

    let bundle = run_bundle(&project, &["--author", "Flag Author"]);

    assert_eq!(common::section(&bundle, "BUNDLE-NAME"), "\"configured\"");
    assert_eq!(
        common::section(&bundle, "BUNDLE-DESCRIPTION"),
        "\"From config\""
    );
    assert!(bundle.contains("VIEW LICENSE IN <COPYING>"));
    assert!(bundle.contains("AUTHOR [Flag Author]."));
    assert!(bundle.contains("bundleme.yaml [\n"));
}

#[test]
fn test_dir_name_is_path_as_given() {
    let project = common::TestProject::new();
    project.write_file("src/lib.cpp", "int f();\n");
    let out = common::TestProject::new();

    bundleme_cmd()
        .current_dir(&project.path)
        .arg("-y")
        .arg("-o")
        .arg(out.join(".bundler"))
        .args(["bundle", "--path", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("with 1 files."));

    let bundle = common::read_bundle(&out.join(".bundler"));
    assert_eq!(common::section(&bundle, "DIR-NAME"), "\"src\"");
    assert_eq!(common::section(&bundle, "STAT"), "%100.0 C++");
}

#[test]
fn test_bundle_id_format() {
    let project = common::TestProject::new();
    let bundle = run_bundle(&project, &[]);

    let id = common::section(&bundle, "BUNDLE-ID");
    let digits = id.trim_matches('"');
    assert_eq!(digits.len(), 7);
    let value: u32 = digits.parse().unwrap();
    assert!((1_000_000..=9_999_999).contains(&value));
}

#[test]
fn test_empty_project() {
    let project = common::TestProject::new();
    let out = common::TestProject::new();
    let output = out.join(".bundler");

    bundleme_cmd()
        .arg("-y")
        .arg("-o")
        .arg(&output)
        .args(["bundle", "--path"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("with 0 files."));

    let bundle = common::read_bundle(&output);
    assert!(bundle.contains("<! STAT !>\n\n\n<! NAMES !>\n\n<! DIR-NAME !>"));
    assert!(bundle.ends_with("<! FILE-CONTENTS !>\n"));
}

#[test]
fn test_missing_root_produces_empty_bundle() {
    let project = common::TestProject::new();
    let out = common::TestProject::new();
    let output = out.join(".bundler");

    bundleme_cmd()
        .arg("-y")
        .arg("-o")
        .arg(&output)
        .args(["bundle", "--path"])
        .arg(project.join("nope"))
        .assert()
        .success()
        .stdout(predicate::str::contains("with 0 files."));

    assert!(common::read_bundle(&output).ends_with("<! FILE-CONTENTS !>\n"));
}

#[test]
fn test_truncation_in_bundle() {
    let project = common::TestProject::new();
    let mut long = String::new();
    for i in 1..=1800 {
        writeln!(long, "row {i}").unwrap();
    }
    project.write_file("long.java", &long);

    let bundle = run_bundle(&project, &[]);

    assert!(bundle.contains("row 1700\n...\n] (DETECTED ERROR COUNT: 0)\n"));
    assert!(!bundle.contains("row 1701\n"));
}

#[test]
fn test_nested_tree_counts() {
    let project = common::TestProject::new();
    project.write_file("CMakeLists.txt", "project(x)\n");
    project.write_file("cmake/tools.cmake", "set(X 1)\n");
    project.write_file("src/main.c", "int main;\n");
    project.write_file("src/util/util.h", "void u(void);\n");
    project.write_file("src/util/util.c", "void u(void) {}\n");
    project.write_file("scripts/run.py", "print()\n");

    let bundle = run_bundle(&project, &[]);

    let stat = common::section(&bundle, "STAT");
    let total_pct: f64 = stat
        .split(" | ")
        .map(|entry| {
            entry
                .trim_start_matches('%')
                .split(' ')
                .next()
                .unwrap()
                .parse::<f64>()
                .unwrap()
        })
        .sum();
    assert!((total_pct - 100.0).abs() <= 0.1 * 5.0, "{stat}");

    assert!(stat.contains("%33.3 C"), "{stat}");
    assert!(stat.contains("%16.7 OTHER"), "{stat}");
    assert!(stat.contains("%16.7 CMAKE"), "{stat}");
}

#[test]
fn test_rerun_is_stable_apart_from_bundle_id() {
    let project = common::TestProject::new();
    project.write_file("a.c", "a\n");
    project.write_file("lib/b.py", "b\n");
    project.write_file("lib/c.bin", "c\n");

    let first = run_bundle(&project, &["--name", "same"]);
    let second = run_bundle(&project, &["--name", "same"]);

    assert_eq!(
        common::without_bundle_id(&first),
        common::without_bundle_id(&second)
    );
}

#[test]
fn test_rerun_in_place_skips_previous_bundle() {
    let project = common::TestProject::new();
    project.write_file("main.c", "int x;\n");

    for _ in 0..2 {
        bundleme_cmd()
            .current_dir(&project.path)
            .arg("-y")
            .assert()
            .success()
            .stdout(predicate::str::contains("with 1 files."));
    }

    let bundle = project.read_file(".bundler");
    assert!(!bundle.contains(".bundler ["));
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_counts_toward_statistics() {
    let project = common::TestProject::new();
    project.write_file("a.c", "x\n");
    let _listener = std::os::unix::net::UnixListener::bind(project.join("s.py")).unwrap();

    let out = common::TestProject::new();
    let output = out.join(".bundler");
    bundleme_cmd()
        .arg("-y")
        .arg("-o")
        .arg(&output)
        .args(["bundle", "--path"])
        .arg(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("with 2 files."));

    let bundle = common::read_bundle(&output);
    assert!(bundle.contains("s.py [CANNOT OPEN FILE]\n"));
    let stat = common::section(&bundle, "STAT");
    assert!(stat.contains("%50.0 C"), "{stat}");
    assert!(stat.contains("%50.0 PYTHON"), "{stat}");
}
