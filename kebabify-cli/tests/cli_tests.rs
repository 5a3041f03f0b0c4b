use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn kebabify() -> Command {
    let mut cmd = Command::cargo_bin("kebabify").unwrap();
    cmd.env_remove("KEBABIFY_YES")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn card_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("Card.vue")
        .write_str("<script setup lang=\"ts\">\nimport CardHeader from './CardHeader.vue'\n</script>\n")
        .unwrap();
    temp.child("CardHeader.vue")
        .write_str("<template><div /></template>\n")
        .unwrap();
    temp.child("index.ts")
        .write_str("export { default as Card } from './Card.vue'\nexport { default as CardHeader } from './CardHeader.vue'\n")
        .unwrap();
    temp
}

#[test]
fn test_help_command() {
    kebabify()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kebab-case"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_command() {
    kebabify()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kebabify"));
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    kebabify().arg("--frobnicate").assert().code(2);
}

#[test]
fn test_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    kebabify()
        .arg(temp.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_nothing_to_rename() {
    let temp = TempDir::new().unwrap();
    temp.child("index.ts").write_str("export const x = 1\n").unwrap();

    kebabify()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No PascalCase imports found to rename."));
}

#[test]
fn test_dry_run_leaves_tree_untouched() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .args(["--dry-run", "--preview", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CardHeader -> card-header"))
        .stdout(predicate::str::contains("[DRY RUN]"))
        .stdout(predicate::str::contains("Dry run: would rename 2 items"));

    temp.child("CardHeader.vue").assert(predicate::path::exists());
    temp.child("index.ts")
        .assert(predicate::str::contains("./CardHeader.vue"));
}

#[test]
fn test_refuses_to_prompt_without_a_terminal() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a terminal"));

    temp.child("Card.vue").assert(predicate::path::exists());
    temp.child("card.vue").assert(predicate::path::missing());
}

#[test]
fn test_prompt_lists_renames_with_preview_off() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .args(["--preview", "none"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 PascalCase imports to rename:"))
        .stdout(predicate::str::contains("CardHeader -> card-header"))
        .stderr(predicate::str::contains("not a terminal"));

    temp.child("CardHeader.vue").assert(predicate::path::exists());
}

#[test]
fn test_yes_applies_changes() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .args(["-y", "--preview", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 PascalCase imports to rename:"))
        .stdout(predicate::str::contains("All changes completed successfully!"));

    temp.child("card.vue")
        .assert(predicate::str::contains("import CardHeader from './card-header.vue'"));
    temp.child("card-header.vue").assert(predicate::path::exists());
    temp.child("index.ts").assert(
        "export { default as Card } from './card.vue'\nexport { default as CardHeader } from './card-header.vue'\n",
    );
}

#[test]
fn test_yes_from_environment() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .env("KEBABIFY_YES", "1")
        .assert()
        .success();

    temp.child("card-header.vue").assert(predicate::path::exists());
}

#[test]
fn test_json_output() {
    let temp = card_fixture();

    let output = kebabify()
        .arg(temp.path())
        .args(["-y", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["outcome"], "applied");
    assert_eq!(value["summary"]["identifiers"], 2);
    assert_eq!(value["summary"]["renames"], 2);
    assert_eq!(value["rename_map"][0]["old"], "Card");
    assert_eq!(value["rename_map"][0]["new"], "card");
}

#[test]
fn test_no_rename_files_only_rewrites_paths() {
    let temp = card_fixture();

    kebabify()
        .arg(temp.path())
        .args(["-y", "--no-rename-files"])
        .assert()
        .success();

    temp.child("Card.vue")
        .assert(predicate::str::contains("'./card-header.vue'"));
    temp.child("CardHeader.vue").assert(predicate::path::exists());
}

#[test]
fn test_discovers_components_directory() {
    let temp = TempDir::new().unwrap();
    let ui = temp.child("src/components/ui");
    ui.child("Button.vue")
        .write_str("import ButtonGroup from './ButtonGroup.vue'\n")
        .unwrap();
    ui.child("ButtonGroup.vue").write_str("").unwrap();

    kebabify()
        .current_dir(temp.path())
        .arg("-y")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found components directory:"));

    ui.child("button-group.vue").assert(predicate::path::exists());
    ui.child("Button.vue")
        .assert("import ButtonGroup from './button-group.vue'\n");
}

#[test]
fn test_no_components_directory_found() {
    let temp = TempDir::new().unwrap();

    kebabify()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not find a components directory"));
}

#[test]
fn test_structural_policy_from_config_file() {
    let temp = TempDir::new().unwrap();
    temp.child("Page.vue")
        .write_str("import MyWidget from './MyWidget.vue'\n")
        .unwrap();
    temp.child("MyWidget.vue").write_str("").unwrap();
    let config = temp.child("kebabify.toml");
    config.write_str("[classifier]\npolicy = \"structural\"\n").unwrap();

    // The allowlist does not know MyWidget
    kebabify()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No PascalCase imports found to rename."));

    kebabify()
        .arg(temp.path())
        .arg("--config")
        .arg(config.path())
        .arg("-y")
        .assert()
        .success();

    temp.child("my-widget.vue").assert(predicate::path::exists());
    temp.child("Page.vue")
        .assert("import MyWidget from './my-widget.vue'\n");
}

#[test]
fn test_invalid_config_file_fails() {
    let temp = card_fixture();
    let config = temp.child("broken.toml");
    config.write_str("[classifier\n").unwrap();

    kebabify()
        .arg(temp.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}
