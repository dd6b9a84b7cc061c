use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_jsdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn write_js(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// -- end to end --

#[test]
fn end_to_end_matches_expected() {
    let root = TempDir::new().unwrap();
    let src = std::fs::read_to_string(fixture_path("converter.js")).unwrap();
    write_js(root.path(), "utils/converter.js", &src);

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "utils:out:utils"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote"));

    let output = std::fs::read_to_string(root.path().join("out/utils.md")).unwrap();
    let expected = std::fs::read_to_string(fixture_path("converter.expected.md")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn heading_description_and_tables_in_order() {
    let root = TempDir::new().unwrap();
    write_js(
        root.path(),
        "utils/math.js",
        "/**\n * Adds two numbers.\n * @param {number} a - First.\n * @param {number} b - Second.\n * @returns {number} - The sum.\n */\nexport function add(a, b) {\n  return a + b;\n}\n",
    );

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "utils:out:math"])
        .assert()
        .success();

    let output = std::fs::read_to_string(root.path().join("out/math.md")).unwrap();
    let heading = output.find("### add").unwrap();
    let desc = output.find("Adds two numbers.").unwrap();
    let params = output.find("#### Parameters").unwrap();
    let row_a = output.find("| a | `{number}` | First. |").unwrap();
    let row_b = output.find("| b | `{number}` | Second. |").unwrap();
    let returns = output.find("#### Returns").unwrap();
    let row_ret = output.find("| `{number}` | The sum. |").unwrap();
    assert!(heading < desc && desc < params && params < row_a);
    assert!(row_a < row_b && row_b < returns && returns < row_ret);
}

// -- empty and undocumented folders --

#[test]
fn empty_folder_warns_without_output_file() {
    let root = TempDir::new().unwrap();
    write_js(root.path(), "plain/helpers.js", "// no docs here\nconst x = 1;\n");

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "plain:out:plain"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No JSDoc blocks found"));

    assert!(!root.path().join("out/plain.md").exists());
}

#[test]
fn missing_source_dir_is_non_fatal() {
    let root = TempDir::new().unwrap();

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "does-not-exist:out:none"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No JSDoc blocks found"));
}

#[test]
fn undocumented_file_is_excluded() {
    let root = TempDir::new().unwrap();
    write_js(
        root.path(),
        "utils/documented.js",
        "/**\n * Documented.\n */\nexport function documented() {}\n",
    );
    write_js(root.path(), "utils/plain.js", "const x = 1;\n");

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "utils:out:utils"])
        .assert()
        .success();

    let output = std::fs::read_to_string(root.path().join("out/utils.md")).unwrap();
    assert!(output.contains("## documented.js"));
    assert!(!output.contains("## plain.js"));
}

// -- output naming --

#[test]
fn md_extension_not_doubled() {
    let root = TempDir::new().unwrap();
    write_js(
        root.path(),
        "utils/a.js",
        "/**\n * Doc.\n */\nexport function a() {}\n",
    );

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "utils:out:notes.md"])
        .assert()
        .success();

    assert!(root.path().join("out/notes.md").exists());
    assert!(!root.path().join("out/notes.md.md").exists());
}

#[test]
fn title_uses_source_folder_name() {
    let root = TempDir::new().unwrap();
    write_js(
        root.path(),
        "lib/import/a.js",
        "/**\n * Doc.\n */\nexport function a() {}\n",
    );

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .args(["--folder", "lib/import:out:utils_import"])
        .assert()
        .success();

    let output = std::fs::read_to_string(root.path().join("out/utils_import.md")).unwrap();
    assert!(output.starts_with("# Utility Functions – Import\n"));
}

// -- built-in folder table --

#[test]
fn default_table_processes_known_layout() {
    let root = TempDir::new().unwrap();
    write_js(
        root.path(),
        "src/lib/utils/a.js",
        "/**\n * Doc.\n */\nexport function a() {}\n",
    );

    cmd()
        .args(["--root", root.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote"))
        // Folders from the table with no sources warn but don't fail.
        .stderr(predicate::str::contains("No JSDoc blocks found"));

    assert!(root.path().join("docs/technical/utils.md").exists());
}

// -- argument validation --

#[test]
fn invalid_folder_spec_fails() {
    cmd()
        .args(["--folder", "only-two:fields"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid folder spec"));
}
