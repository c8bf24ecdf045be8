//! Render & Regions Tests
//!
//! Runs the binary against the sample parse log at several widths and checks
//! what gets abbreviated and which entry is shown.

use anyhow::Result;
use gviz_testing::TestWorld;
use gviz_testing::assertions::{assert_region_count, assert_render_json};

#[test]
fn test_render_wide_page_unabbreviated() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&["render", "log.html", "--width", "100"])?;

    assert!(result.success(), "render failed: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r#"
    Stmt ::== Statement LongIdentifierNumberOne then LongIdentifierNumberTwo end
    Num ::== "0" | "1" | "2"
    Opt ::== Num | ()
    - 0 1
      entered Stmt

    entry 1/3
    "#);
    Ok(())
}

#[test]
fn test_render_narrow_page_abbreviates() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&["render", "log.html", "--width", "40"])?;

    assert!(result.success(), "render failed: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r#"
    Stmt ::== Statement … then … end
    Num ::== "0" | "1" | "2"
    Opt ::== Num | ()
    - 0 1
      entered Stmt

    entry 1/3
    "#);
    Ok(())
}

#[test]
fn test_render_entry_json() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&[
        "render", "log.html", "--width", "40", "--entry", "2", "--format", "json",
    ])?;

    assert!(result.success(), "render failed: {}", result.stderr());
    let json = result.json()?;
    assert_render_json(&json, "2/3")?;
    assert_eq!(json["current"], 2);
    assert_eq!(json["width"], 40);

    let lines: Vec<&str> = json["lines"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|l| l.as_str())
        .collect();
    assert!(lines.contains(&"  matched Statement … then …"));
    assert!(!lines.iter().any(|l| l.contains("entered")));
    Ok(())
}

#[test]
fn test_render_entry_is_clamped() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&["render", "log.html", "--entry", "99", "--format", "json"])?;

    assert!(result.success());
    assert_render_json(&result.json()?, "3/3")?;
    Ok(())
}

#[test]
fn test_regions_grammar_json() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&["regions", "log.html", "--width", "40", "--format", "json"])?;

    assert!(result.success(), "regions failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["scope"], "grammar");
    assert_region_count(&json, 3)?;

    let regions = json["regions"].as_array().unwrap();
    assert_eq!(regions[0]["depth"], 0);
    assert_eq!(regions[0]["overflows"], true);
    assert_eq!(regions[0]["children"], serde_json::json!([1, 2]));
    assert_eq!(regions[1]["parent"], 0);
    assert_eq!(regions[1]["abbreviated"], true);
    assert_eq!(regions[2]["text"], "LongIdentifierNumberTwo");
    Ok(())
}

#[test]
fn test_regions_plain_marks_flags() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&["regions", "log.html", "--width", "40"])?;

    assert!(result.success());
    assert_eq!(
        result.lines(),
        vec![
            "grammar (3 regions)",
            "#0 Statement LongIdentifierNumberOne then LongIdentifierNumberTwo end [overflows]",
            "  #1 LongIdentifierNumberOne [abbreviated]",
            "  #2 LongIdentifierNumberTwo [abbreviated]",
        ]
    );
    Ok(())
}

#[test]
fn test_regions_for_entry() -> Result<()> {
    let world = TestWorld::new().with_sample_page("log.html");

    let result = world.run(&[
        "regions", "log.html", "--width", "40", "--entry", "2", "--format", "json",
    ])?;

    assert!(result.success(), "regions failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["scope"], "entry 2");
    assert_region_count(&json, 3)?;
    Ok(())
}

#[test]
fn test_regions_entry_without_log_fails() -> Result<()> {
    let world = TestWorld::new().with_page("plain.html", "<p>no log</p>");

    let result = world.run(&["regions", "plain.html", "--entry", "1"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Error: Page has no log entries"));
    Ok(())
}

#[test]
fn test_config_start_entry_applies() -> Result<()> {
    let world = TestWorld::new()
        .with_sample_page("log.html")
        .with_config("[slideshow]\nstart_entry = 3\n");

    let result = world.run(&["render", "log.html", "--format", "json"])?;

    assert!(result.success(), "render failed: {}", result.stderr());
    assert_render_json(&result.json()?, "3/3")?;
    Ok(())
}

#[test]
fn test_config_width_used_without_flag() -> Result<()> {
    let world = TestWorld::new()
        .with_sample_page("log.html")
        .with_config("[layout]\nwidth = 40\n");

    let result = world.run(&["render", "log.html"])?;

    assert!(result.success());
    assert!(result.stdout().contains("Statement … then … end"));
    Ok(())
}
