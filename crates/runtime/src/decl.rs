//! The signatures generated code uses to declare the runtime routines.

use std::fmt;

/// An LLVM type appearing in a runtime signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Void,
    I8,
    I32,
    Float,
    Ptr(&'static Ty),
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::I8 => write!(f, "i8"),
            Self::I32 => write!(f, "i32"),
            Self::Float => write!(f, "float"),
            Self::Ptr(ty) => write!(f, "{ty}*"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub params: &'static [Ty],
    pub ret: Ty,
}

impl Builtin {
    /// The `declare` line for this routine.
    #[must_use]
    pub fn declaration(&self) -> String {
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("declare external ccc {} @{}({params})", self.ret, self.name)
    }
}

/// Every routine exported by this crate, in declaration order.
pub static BUILTINS: [Builtin; 5] = [
    Builtin {
        name: "_print_bool",
        params: &[Ty::I8],
        ret: Ty::Void,
    },
    Builtin {
        name: "_print_int",
        params: &[Ty::I32],
        ret: Ty::Void,
    },
    Builtin {
        name: "_print_string",
        params: &[Ty::Ptr(&Ty::I8)],
        ret: Ty::Void,
    },
    Builtin {
        name: "_print_float",
        params: &[Ty::Float],
        ret: Ty::Void,
    },
    Builtin {
        name: "_print_ln",
        params: &[],
        ret: Ty::Void,
    },
];

#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

/// The header of an LLVM module that calls into the runtime.
#[must_use]
pub fn prelude(module_id: &str) -> String {
    let mut out = format!("; ModuleID = '{module_id}'\n");
    for builtin in &BUILTINS {
        out.push('\n');
        out.push_str(&builtin.declaration());
        out.push('\n');
    }
    out
}
