#[cfg(feature = "toolchain-tests")]
mod toolchain;

#[test]
fn prelude() -> Result<(), Box<dyn std::error::Error>> {
    let mut output = vec![];
    p0::write_prelude("hello", &mut output)?;
    let output = String::from_utf8(output)?;
    assert!(output.starts_with("; ModuleID = 'hello'\n"));
    assert_eq!(output.matches("declare external ccc").count(), 5);
    Ok(())
}

#[test]
fn prelude_matches_runtime() -> Result<(), Box<dyn std::error::Error>> {
    let mut output = vec![];
    p0::write_prelude("p0", &mut output)?;
    for builtin in &p0_runtime::decl::BUILTINS {
        assert!(String::from_utf8_lossy(&output).contains(&builtin.declaration()));
    }
    Ok(())
}

#[test]
fn include_dir_is_a_target_dir() {
    if std::env::var_os("P0_RUNTIME_LIB").is_some() {
        return;
    }
    let dir = p0::include_dir();
    assert!(dir.ends_with("target/debug") || dir.ends_with("target/release"));
}
