use anyhow::Result;
use refdata_testing::{TestWorld, fixtures};
use refdata_types::CatalogKind;
use serde_json::Value;

fn departments_world() -> TestWorld {
    TestWorld::new().with_dataset(CatalogKind::Department, fixtures::departments())
}

fn row_ids(json: &Value) -> Vec<&str> {
    json["content"]["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect()
}

#[test]
fn test_excluded_record_is_not_offered() -> Result<()> {
    let world = departments_world();
    let result = world.run(&[
        "--format",
        "json",
        "candidates",
        "--exclude",
        "fin",
        "--expand-all",
    ])?;

    assert!(result.success(), "candidates failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["excludeId"], "fin");
    assert_eq!(json["content"]["totalCount"], 7);

    // Children of the excluded record lose their parent and become roots.
    assert_eq!(row_ids(&json), vec!["hq", "it", "sup", "acc", "tre", "br1"]);
    Ok(())
}

#[test]
fn test_candidate_pages_build_their_own_tree() -> Result<()> {
    let world = departments_world();
    let result = world.run(&[
        "--format",
        "json",
        "candidates",
        "--page-size",
        "3",
        "--page",
        "2",
    ])?;

    assert!(result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["page"], 2);
    assert_eq!(json["content"]["pageCount"], 3);
    assert_eq!(row_ids(&json), vec!["tre", "it"]);
    assert_eq!(json["content"]["rows"][1]["hasChildren"], true);
    Ok(())
}

#[test]
fn test_candidates_plain_footer() -> Result<()> {
    let world = departments_world();
    let result = world.run(&["candidates", "--keyword", "o"])?;

    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("Parent candidates matching \"o\""));
    assert!(stdout.contains("per page)"));
    Ok(())
}
