use anyhow::Result;

use crate::CliTest;

const STRINGS_XML: &str = "<resources>\n    <string name=\"greeting\">Hi</string>\n</resources>\n";

const SOURCE: &str = r#"package com.example

import androidx.compose.material3.Text

fun Screen() {
    Text("Hello $name!")
}
"#;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        ".resxrc.json",
        r#"{
            "resourcesPath": "values/strings.xml",
            "resourcesPackage": "com.example.generated.resources"
        }"#,
    )?;
    test.write_file("values/strings.xml", STRINGS_XML)?;
    test.write_file("src/Screen.kt", SOURCE)?;
    Ok(())
}

#[test]
fn test_extract_dry_run_leaves_files_untouched() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 6, 13)
        .assert()
        .success()
        .stdout(predicates::str::contains("dry-run"));

    assert_eq!(test.read_file("src/Screen.kt")?, SOURCE);
    assert_eq!(test.read_file("values/strings.xml")?, STRINGS_XML);
    Ok(())
}

#[test]
fn test_extract_apply_rewrites_source_and_resources() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 6, 13)
        .arg("--apply")
        .assert()
        .success();

    let source = test.read_file("src/Screen.kt")?;
    assert!(source.contains("Text(stringResource(Res.string.hello_x, name))"));
    assert!(source.contains("import com.example.generated.resources.Res"));
    assert!(source.contains("import com.example.generated.resources.hello_x"));
    assert!(source.contains("import org.jetbrains.compose.resources.stringResource"));

    let resources = test.read_file("values/strings.xml")?;
    assert!(resources.contains("<string name=\"hello_x\">Hello %1$s!</string>"));
    Ok(())
}

#[test]
fn test_extract_inserts_entry_in_sorted_position() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        "values/strings.xml",
        "<resources>\n    <string name=\"aaa\">First</string>\n    <string name=\"zzz\">Last</string>\n</resources>\n",
    )?;

    test.extract_command("src/Screen.kt", 6, 13)
        .arg("--apply")
        .assert()
        .success();

    let resources = test.read_file("values/strings.xml")?;
    let aaa = resources.find("name=\"aaa\"").unwrap();
    let hello = resources.find("name=\"hello_x\"").unwrap();
    let zzz = resources.find("name=\"zzz\"").unwrap();
    assert!(aaa < hello && hello < zzz);
    Ok(())
}

#[test]
fn test_extract_duplicate_value_declines_without_force() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 6, 13)
        .args(["--value", "Hi", "--apply"])
        .assert()
        .code(1);

    assert_eq!(test.read_file("src/Screen.kt")?, SOURCE);
    assert_eq!(test.read_file("values/strings.xml")?, STRINGS_XML);
    Ok(())
}

#[test]
fn test_extract_use_existing_skips_resource_write() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 6, 13)
        .args(["--use-existing", "greeting", "--apply"])
        .assert()
        .success();

    let source = test.read_file("src/Screen.kt")?;
    assert!(source.contains("stringResource(Res.string.greeting, name)"));
    assert_eq!(test.read_file("values/strings.xml")?, STRINGS_XML);
    Ok(())
}

#[test]
fn test_extract_duplicate_key_errors_before_any_edit() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 6, 13)
        .args(["--key", "greeting", "--force", "--apply"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"));

    assert_eq!(test.read_file("src/Screen.kt")?, SOURCE);
    assert_eq!(test.read_file("values/strings.xml")?, STRINGS_XML);
    Ok(())
}

#[test]
fn test_extract_cursor_outside_string_is_silent() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.extract_command("src/Screen.kt", 5, 4)
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    assert_eq!(test.read_file("src/Screen.kt")?, SOURCE);
    Ok(())
}

#[test]
fn test_extract_malformed_resource_file_errors() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        "values/strings.xml",
        "<resources><string>no name</string></resources>",
    )?;

    test.extract_command("src/Screen.kt", 6, 13)
        .arg("--apply")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("malformed resource file"));

    assert_eq!(test.read_file("src/Screen.kt")?, SOURCE);
    Ok(())
}

#[test]
fn test_extract_cdata_for_reserved_characters() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        "src/Company.kt",
        "import a.A\n\nfun Name() {\n    Text(\"O'Brien & Co\")\n}\n",
    )?;

    test.extract_command("src/Company.kt", 4, 12)
        .arg("--apply")
        .assert()
        .success();

    let resources = test.read_file("values/strings.xml")?;
    assert!(resources.contains("<![CDATA[O'Brien & Co]]>"));
    assert!(!resources.contains("&amp;"));
    Ok(())
}
