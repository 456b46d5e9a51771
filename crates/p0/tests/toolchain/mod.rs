use indoc::indoc;
use std::path::PathBuf;

const PROGRAM: &str = indoc! {r#"
    @.x = private unnamed_addr constant [2 x i8] c"x\00"

    define i32 @main() {
      call void @_print_string(i8* getelementptr inbounds ([2 x i8], [2 x i8]* @.x, i32 0, i32 0))
      call void @_print_int(i32 5)
      call void @_print_ln()
      call void @_print_bool(i8 1)
      call void @_print_bool(i8 2)
      call void @_print_ln()
      call void @_print_float(float 1.5)
      call void @_print_ln()
      ret i32 0
    }
"#};

fn module(name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("p0-tests");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{name}.ll"));
    let mut ir = p0_runtime::decl::prelude(name);
    ir.push('\n');
    ir.push_str(PROGRAM);
    std::fs::write(&path, ir)?;
    Ok(path)
}

#[test]
fn runs_against_the_runtime() -> Result<(), Box<dyn std::error::Error>> {
    let path = module("sequence")?;
    let mut output = vec![];
    let code = p0::run(&path, &mut output)?;
    assert_eq!(code, 0);
    insta::assert_snapshot!(String::from_utf8(output)?, @r###"
    x5
    truefalse
    1.500000
    "###);
    Ok(())
}
