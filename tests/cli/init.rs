use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").assert().success();

    assert!(test.root().join(".resxrc.json").exists());
    let content = test.read_file(".resxrc.json")?;
    assert!(content.contains("resourcesPath"));
    assert!(content.contains("buildTask"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".resxrc.json", r#"{ "buildTask": "custom" }"#)?;

    test.command().arg("init").assert().code(1);

    // Existing config untouched.
    assert_eq!(test.read_file(".resxrc.json")?, r#"{ "buildTask": "custom" }"#);
    Ok(())
}
