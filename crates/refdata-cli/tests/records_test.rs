use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use refdata_testing::{TestWorld, fixtures};
use refdata_types::CatalogKind;
use serde_json::{Value, json};

fn departments_world() -> TestWorld {
    TestWorld::new().with_dataset(CatalogKind::Department, fixtures::departments())
}

fn find<'a>(records: &'a Value, id: &str) -> Option<&'a Value> {
    records
        .as_array()?
        .iter()
        .find(|record| record["id"] == id)
}

// --------------------------------------------------------
// list / show
// --------------------------------------------------------

#[test]
fn test_list_pages_flat_catalog() -> Result<()> {
    let world = TestWorld::new().with_dataset(CatalogKind::Country, fixtures::countries_page());

    let first = world.run(&["list", "country", "--page-size", "2"])?;
    assert!(first.success(), "list failed: {}", first.stderr());
    assert!(first.stdout().contains("Page 1 of 2 (3 total, 2 per page)"));
    assert!(first.stdout().contains("Viet Nam"));
    assert!(!first.stdout().contains("Cambodia"));
    assert!(first.stdout().contains("refdata list country --page 2"));

    let second = world.run(&["list", "country", "--page-size", "2", "--page", "2"])?;
    assert!(second.success());
    assert!(second.stdout().contains("Kingdom of Cambodia"));
    assert!(!second.stdout().contains("Viet Nam"));
    Ok(())
}

#[test]
fn test_list_keyword_json() -> Result<()> {
    let world = TestWorld::new().with_dataset(CatalogKind::Country, fixtures::countries_page());
    let result = world.run(&["--format", "json", "list", "country", "--keyword", "CAM"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["totalCount"], 1);
    assert_eq!(json["content"]["keyword"], "CAM");
    assert_eq!(json["content"]["records"][0]["code"], "KH");
    assert_eq!(json["content"]["records"][0]["id"], "3");
    Ok(())
}

#[test]
fn test_list_department_is_unpaged() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["--format", "json", "list", "department", "--page-size", "5"])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["paged"], false);
    assert_eq!(json["content"]["records"].as_array().unwrap().len(), 7);
    Ok(())
}

#[test]
fn test_show_department_detail() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["show", "department", "it"])?;

    assert!(result.success(), "show failed: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.contains(&format!("{:<14}{}", "Parent:", "HQ - Head office (hq)")));
    assert!(stdout.contains(&format!("{:<14}{}", "Founded:", "2015-03-01")));
    assert!(stdout.contains(&format!("{:<14}{}", "Children:", 1)));
    assert!(stdout.contains("displayOrder: 2"));
    assert!(!stdout.contains("foundedDate"));
    Ok(())
}

#[test]
fn test_show_unknown_record() {
    let world = departments_world();
    let mut cmd = cargo_bin_cmd!("refdata");
    world.configure_command(&mut cmd);

    cmd.args(["show", "department", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: No department record with id 'nope'",
        ));
}

#[test]
fn test_unknown_dataset_is_rejected() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("refdata");
    world.configure_command(&mut cmd);

    cmd.args(["list", "planets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown dataset 'planets'"));
}

// --------------------------------------------------------
// create / edit / delete
// --------------------------------------------------------

#[test]
fn test_create_under_parent_writes_both_references() -> Result<()> {
    let world = departments_world();
    let result = world.run(&[
        "--format",
        "json",
        "create",
        "department",
        "--code",
        "OPS",
        "--name",
        "Operations",
        "--parent",
        "hq",
    ])?;

    assert!(result.success(), "create failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["action"], "created");
    assert_eq!(json["content"]["record"]["parentId"], "hq");

    let id = json["content"]["record"]["id"].as_str().unwrap().to_string();
    let stored = world.read_dataset(CatalogKind::Department)?;
    assert_eq!(stored.as_array().unwrap().len(), 8);
    let created = find(&stored, &id).expect("created record saved");
    assert_eq!(created["parentId"], "hq");
    assert_eq!(
        created["parent"],
        json!({"id": "hq", "code": "HQ", "name": "Head office"})
    );
    Ok(())
}

#[test]
fn test_create_rejects_parent_for_flat_catalog() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("refdata");
    world.configure_command(&mut cmd);

    cmd.args([
        "create", "country", "--code", "VN", "--name", "Viet Nam", "--parent", "x",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("country records have no parent"));
}

#[test]
fn test_create_reports_validation_errors() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["create", "country", "--code", "VNM", "--name", "Viet Nam"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Failed to create: Validation failed"));
    assert!(result.stderr().contains("code: must be exactly 2 characters"));
    assert!(!world.dataset_path(CatalogKind::Country).exists());
    Ok(())
}

#[test]
fn test_create_with_unknown_parent() -> Result<()> {
    let world = departments_world();
    let result = world.run(&[
        "create", "department", "--code", "X", "--name", "Nowhere", "--parent", "zzz",
    ])?;

    assert!(!result.success());
    assert!(
        result
            .stderr()
            .contains("No department record with id 'zzz' to use as parent")
    );
    Ok(())
}

#[test]
fn test_edit_refuses_self_parent() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["edit", "department", "fin", "--parent", "fin"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("A record cannot be its own parent"));
    Ok(())
}

#[test]
fn test_edit_to_descendant_warns_but_saves() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["edit", "department", "fin", "--parent", "acc"])?;

    assert!(result.success(), "edit failed: {}", result.stderr());
    assert!(
        result
            .stdout()
            .contains("'ACC' is a descendant of 'FIN'; the hierarchy now contains a cycle")
    );
    assert!(result.stderr().contains("hierarchy now contains a cycle"));

    let tree = world.run(&["--format", "json", "tree"])?;
    let json = tree.json()?;
    let breaks = json["content"]["cycleBreaks"].as_array().unwrap();
    assert!(breaks.contains(&json!("fin")));
    assert!(breaks.contains(&json!("acc")));
    Ok(())
}

#[test]
fn test_edit_keeps_unspecified_fields() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["edit", "department", "hq", "--name", "Headquarters"])?;
    assert!(result.success(), "edit failed: {}", result.stderr());

    let stored = world.read_dataset(CatalogKind::Department)?;
    let hq = find(&stored, "hq").unwrap();
    assert_eq!(hq["name"], "Headquarters");
    assert_eq!(hq["code"], "HQ");
    assert_eq!(hq["description"], "Executive office");
    Ok(())
}

#[test]
fn test_edit_clear_parent_makes_root() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["edit", "department", "fin", "--clear-parent"])?;
    assert!(result.success(), "edit failed: {}", result.stderr());

    let tree = world.run(&["--format", "json", "tree"])?;
    let json = tree.json()?;
    let roots: Vec<&str> = json["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(roots, vec!["hq", "fin", "br1"]);
    Ok(())
}

#[test]
fn test_delete_orphans_children() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["--format", "json", "delete", "department", "fin"])?;

    assert!(result.success(), "delete failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["orphanedChildren"], 2);
    assert_eq!(json["badge"]["label"], "Deleted successfully");

    let tree = world.run(&["--format", "json", "tree"])?;
    let json = tree.json()?;
    let roots: Vec<&str> = json["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(roots, vec!["hq", "acc", "tre", "br1"]);
    assert_eq!(json["content"]["dangling"], json!(["acc", "tre"]));
    Ok(())
}

#[test]
fn test_delete_unknown_record() {
    let world = departments_world();
    let mut cmd = cargo_bin_cmd!("refdata");
    world.configure_command(&mut cmd);

    cmd.args(["delete", "department", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to delete"));
}
