use anyhow::Result;

use crate::CliTest;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        ".resxrc.json",
        r#"{ "resourcesPath": "values/strings.xml" }"#,
    )?;
    test.write_file(
        "values/strings.xml",
        "<resources>\n    <string name=\"farewell\">Bye</string>\n    <string name=\"greeting\">Hello</string>\n    <string name=\"welcome\">Hello</string>\n</resources>\n",
    )
}

#[test]
fn test_lookup_lists_all_entries_with_count() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.command()
        .arg("lookup")
        .assert()
        .success()
        .stdout(predicates::str::contains("greeting: Hello"))
        .stdout(predicates::str::contains("2 distinct resource strings"));
    Ok(())
}

#[test]
fn test_lookup_by_value_unions_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.command()
        .args(["lookup", "--value", "Hello"])
        .assert()
        .success()
        .stdout(predicates::str::contains("greeting"))
        .stdout(predicates::str::contains("welcome"));
    Ok(())
}

#[test]
fn test_lookup_by_key() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.command()
        .args(["lookup", "--key", "farewell"])
        .assert()
        .success()
        .stdout(predicates::str::contains("farewell: Bye"));
    Ok(())
}

#[test]
fn test_lookup_no_match_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.command()
        .args(["lookup", "--key", "missing"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no matching entries"));
    Ok(())
}
