use p0_runtime::{decl, print, PrintError};

fn program(out: &mut Vec<u8>) -> Result<(), PrintError> {
    print::write_str(out, b"sum: ")?;
    print::write_int(out, 2 + 3)?;
    print::write_ln(out)?;
    print::write_bool(out, 1 < 2)?;
    print::write_str(out, b" ")?;
    print::write_float(out, 2.5 * 2.0)?;
    print::write_ln(out)
}

#[test]
fn routines_concatenate() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = vec![];
    program(&mut out)?;
    assert_eq!(String::from_utf8(out)?, "sum: 5\ntrue 5.000000\n");
    Ok(())
}

#[test]
fn every_declaration_is_a_void_routine() {
    for builtin in &decl::BUILTINS {
        assert_eq!(builtin.ret, decl::Ty::Void);
        assert!(builtin.name.starts_with("_print_"));
        assert!(decl::prelude("p0").contains(&builtin.declaration()));
    }
}
