use std::path::{Path, PathBuf};

use fluidspec::installer::{install_templates, sync_spec_files};
use fluidspec::ioutils::{copy_dir, CopyStats};
use tempfile::TempDir;

/// Lays out a realistic bundled catalog:
/// - `review`: standard single-command template with an extra asset file
/// - `workflow`: multi-command bundle with two sub-commands
/// - `broken`: descriptor is invalid JSON
/// - `bare`: no descriptor at all
fn build_catalog(root: &Path) -> PathBuf {
    let catalog = root.join("templates").join("claude");

    let review = catalog.join("review");
    std::fs::create_dir_all(review.join("assets")).unwrap();
    std::fs::write(
        review.join("command.json"),
        r#"{"name":"Code Review","version":"1.2.0","description":"Reviews a change","entry":"prompt.md","input_type":"text"}"#,
    )
    .unwrap();
    std::fs::write(review.join("prompt.md"), "Review the diff.\n").unwrap();
    std::fs::write(review.join("assets").join("checklist.md"), "- style\n- tests\n").unwrap();

    let workflow = catalog.join("workflow");
    std::fs::create_dir_all(&workflow).unwrap();
    std::fs::write(
        workflow.join("command.json"),
        r#"{"commands":[
            {"id":"plan","name":"Plan","version":"0.1.0","description":"Plans the work","entry":"docs/plan.md","input_type":"text"},
            {"id":"build","name":"Build","version":"0.1.0","description":"Builds the plan","entry":"build.md","input_type":"text"}
        ]}"#,
    )
    .unwrap();
    std::fs::create_dir_all(workflow.join("docs")).unwrap();
    std::fs::write(workflow.join("docs").join("plan.md"), "plan prompt\n").unwrap();
    std::fs::write(workflow.join("build.md"), "build prompt\n").unwrap();

    let broken = catalog.join("broken");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("command.json"), "{definitely not json").unwrap();

    std::fs::create_dir_all(catalog.join("bare")).unwrap();

    catalog
}

fn build_spec_templates(root: &Path) -> PathBuf {
    let spec = root.join("templates").join("spec");
    std::fs::create_dir_all(spec.join("base").join("guides")).unwrap();
    std::fs::create_dir_all(spec.join("project")).unwrap();
    std::fs::write(spec.join("base").join("overview.md"), "base overview v1\n").unwrap();
    std::fs::write(spec.join("base").join("guides").join("style.md"), "style v1\n").unwrap();
    std::fs::write(spec.join("project").join("vision.template.md"), "fill me in\n").unwrap();
    std::fs::write(spec.join("project").join("readme.md"), "project readme\n").unwrap();
    spec
}

#[test]
fn install_is_idempotent_without_force() {
    let tmp = TempDir::new().unwrap();
    let catalog = build_catalog(tmp.path());
    let target = tmp.path().join("out");

    let first = install_templates(&catalog, &target, false).unwrap();
    // review: 3 files, workflow: 2 sub-commands x 2 files
    assert_eq!(first.stats, CopyStats { copied: 7, skipped: 0 });

    // Snapshot the target, rerun, and require byte-identical contents.
    let snapshot = tmp.path().join("snapshot");
    copy_dir(&target, &snapshot, true).unwrap();

    let second = install_templates(&catalog, &target, false).unwrap();
    assert_eq!(second.stats, CopyStats { copied: 0, skipped: 7 });
    assert!(!dir_diff::is_different(&target, &snapshot).unwrap());
}

#[test]
fn installed_ids_cover_standard_and_expanded_targets() {
    let tmp = TempDir::new().unwrap();
    let catalog = build_catalog(tmp.path());
    let target = tmp.path().join("out");

    let report = install_templates(&catalog, &target, false).unwrap();
    let mut installed = report.installed.clone();
    installed.sort();
    assert_eq!(installed, vec!["review", "workflow-build", "workflow-plan"]);
}

#[test]
fn bundle_targets_contain_normalized_descriptor_and_prompt() {
    let tmp = TempDir::new().unwrap();
    let catalog = build_catalog(tmp.path());
    let target = tmp.path().join("out");

    install_templates(&catalog, &target, false).unwrap();

    let plan_dir = target.join("workflow-plan");
    let descriptor: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(plan_dir.join("command.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(descriptor["entry"], "prompt.md");
    assert_eq!(descriptor["name"], "Plan");
    assert_eq!(descriptor["version"], "0.1.0");
    assert_eq!(descriptor["input_type"], "text");
    assert_eq!(
        std::fs::read_to_string(plan_dir.join("prompt.md")).unwrap(),
        "plan prompt\n"
    );
    assert_eq!(
        std::fs::read_to_string(target.join("workflow-build").join("prompt.md")).unwrap(),
        "build prompt\n"
    );
}

#[test]
fn existing_files_are_untouched_without_force_and_replaced_with_force() {
    let tmp = TempDir::new().unwrap();
    let catalog = build_catalog(tmp.path());
    let target = tmp.path().join("out");

    install_templates(&catalog, &target, false).unwrap();

    // User edits an installed file; the catalog also moves on.
    let edited = target.join("review").join("prompt.md");
    std::fs::write(&edited, "my local tweaks\n").unwrap();
    std::fs::write(catalog.join("review").join("prompt.md"), "Review the diff v2.\n").unwrap();

    let rerun = install_templates(&catalog, &target, false).unwrap();
    assert_eq!(rerun.stats.copied, 0);
    assert_eq!(std::fs::read_to_string(&edited).unwrap(), "my local tweaks\n");

    let forced = install_templates(&catalog, &target, true).unwrap();
    assert_eq!(forced.stats.skipped, 0);
    assert_eq!(std::fs::read_to_string(&edited).unwrap(), "Review the diff v2.\n");
}

#[test]
fn malformed_templates_are_skipped_but_do_not_abort() {
    let tmp = TempDir::new().unwrap();
    let catalog = build_catalog(tmp.path());
    let target = tmp.path().join("out");

    let report = install_templates(&catalog, &target, false).unwrap();
    assert!(!report.installed.iter().any(|id| id.starts_with("broken")));
    assert!(!report.installed.iter().any(|id| id.starts_with("bare")));
    assert!(!target.join("broken").exists());
    assert!(!target.join("bare").exists());
    // The valid templates still landed.
    assert!(target.join("review").join("command.json").exists());
}

#[test]
fn missing_catalog_root_raises_while_listing_returns_empty() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("no-catalog");

    assert!(fluidspec::catalog::list_templates(&missing).unwrap().is_empty());
    assert!(install_templates(&missing, &tmp.path().join("out"), false).is_err());
}

#[test]
fn spec_base_is_always_fresh_and_project_is_never_clobbered() {
    let tmp = TempDir::new().unwrap();
    let spec = build_spec_templates(tmp.path());
    let target = tmp.path().join(".fluidspec").join("spec");

    let first = sync_spec_files(&spec, &target, false).unwrap();
    assert_eq!(first.copied, 4);

    // Template suffix is stripped on install.
    let vision = target.join("project").join("vision.md");
    assert_eq!(std::fs::read_to_string(&vision).unwrap(), "fill me in\n");
    assert!(!target.join("project").join("vision.template.md").exists());

    // User edits their project files; the bundle ships new base content.
    std::fs::write(&vision, "our actual vision\n").unwrap();
    std::fs::write(spec.join("base").join("overview.md"), "base overview v2\n").unwrap();

    let second = sync_spec_files(&spec, &target, true).unwrap();
    assert_eq!(
        std::fs::read_to_string(target.join("base").join("overview.md")).unwrap(),
        "base overview v2\n"
    );
    assert_eq!(std::fs::read_to_string(&vision).unwrap(), "our actual vision\n");
    assert_eq!(second.skipped, 2);
}
