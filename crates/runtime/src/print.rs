use crate::PrintError;
use std::{
    ffi::{c_char, CStr},
    io::{self, Write},
};

pub fn write_str(out: &mut impl Write, s: &[u8]) -> Result<(), PrintError> {
    out.write_all(s)?;
    Ok(())
}

pub fn write_ln(out: &mut impl Write) -> Result<(), PrintError> {
    out.write_all(b"\n")?;
    Ok(())
}

pub fn write_int(out: &mut impl Write, i: i32) -> Result<(), PrintError> {
    write!(out, "{i}")?;
    Ok(())
}

pub fn write_bool(out: &mut impl Write, b: bool) -> Result<(), PrintError> {
    write!(out, "{b}")?;
    Ok(())
}

/// Writes `f` the way `printf("%f", f)` does: six fractional digits,
/// `nan`/`inf` spelled in lowercase.
pub fn write_float(out: &mut impl Write, f: f32) -> Result<(), PrintError> {
    let sign = if f.is_sign_negative() { "-" } else { "" };
    if f.is_nan() {
        write!(out, "{sign}nan")?;
    } else if f.is_infinite() {
        write!(out, "{sign}inf")?;
    } else {
        write!(out, "{:.6}", f64::from(f))?;
    }
    Ok(())
}

/// Runs `f` against a locked stdout and flushes. Generated programs exit
/// through the C runtime, which never flushes Rust's stdout buffer.
fn stdout<F>(routine: &str, f: F)
where
    F: FnOnce(&mut io::StdoutLock<'static>) -> Result<(), PrintError>,
{
    let mut out = io::stdout().lock();
    let res = f(&mut out).and_then(|()| out.flush().map_err(PrintError::from));
    if let Err(e) = res {
        log::debug!("{routine}: {e}");
    }
}

/// # Safety
/// `s` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn _print_string(s: *const c_char) {
    stdout("_print_string", |out| {
        if s.is_null() {
            return Err(PrintError::NullString);
        }
        let s = unsafe { CStr::from_ptr(s) };
        write_str(out, s.to_bytes())
    });
}

#[no_mangle]
pub extern "C" fn _print_ln() {
    stdout("_print_ln", write_ln);
}

#[no_mangle]
pub extern "C" fn _print_int(v: i32) {
    stdout("_print_int", |out| write_int(out, v));
}

/// Generated code passes an `i8`; only `1` counts as true.
#[no_mangle]
pub extern "C" fn _print_bool(v: u8) {
    stdout("_print_bool", |out| write_bool(out, v == 1));
}

#[no_mangle]
pub extern "C" fn _print_float(v: f32) {
    stdout("_print_float", |out| write_float(out, v));
}
