use clap::{Parser, Subcommand};
use colored::Colorize;
use fern::colors::{Color, ColoredLevelConfig};
use std::{
    fmt::Display,
    io::Write,
    path::{Path, PathBuf},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const RUNTIME_LIB: &str = "p0_runtime";

/// Libraries a Rust static library needs from the system linker.
#[cfg(target_os = "linux")]
const SYSTEM_LIBS: &[&str] = &["-lpthread", "-ldl", "-lm"];
#[cfg(not(target_os = "linux"))]
const SYSTEM_LIBS: &[&str] = &[];

/// The p0 CLI.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prints the declarations a module needs to call the runtime
    Prelude {
        /// The module id written to the header
        #[arg(short, long, default_value = "p0")]
        module: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Links a .ll file against the runtime
    Build {
        /// The path to the .ll file
        path: PathBuf,
        /// The executable to produce
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Builds and runs a .ll file
    Run {
        /// The path to the .ll file
        path: PathBuf,
    },
    /// Prints the p0 version
    Version,
}

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("{0} not found in PATH")]
    ToolNotFound(&'static str),
    #[error("path \"{0}\" is not valid UTF-8")]
    InvalidPath(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to compile (see output)")]
    Tool(String),
}

/// Parses the command-line args.
#[must_use]
pub fn cli() -> Cli {
    Cli::parse()
}

#[must_use]
pub fn installed(s: &str, msg: &str) -> bool {
    if which::which(s).is_err() {
        log::error!("{s} not found in PATH; {msg}");
        false
    } else {
        true
    }
}

/// Directory searched for `libp0_runtime.a`. `P0_RUNTIME_LIB` overrides the
/// workspace target directory of the current build profile.
#[must_use]
pub fn include_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("P0_RUNTIME_LIB") {
        return dir.into();
    }
    let build = if cfg!(debug_assertions) {
        "target/debug"
    } else {
        "target/release"
    };
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .unwrap_or(Path::new("."))
        .join(build)
}

/// The executable produced for `path` when no output is given.
#[must_use]
pub fn default_output(path: &Path) -> PathBuf {
    path.with_extension("")
}

pub fn write_prelude(module: &str, mut writer: impl Write) -> std::io::Result<()> {
    write!(writer, "{}", p0_runtime::decl::prelude(module))?;
    writer.flush()
}

fn utf8(path: &Path) -> Result<&str, BuildError> {
    path.to_str()
        .ok_or_else(|| BuildError::InvalidPath(path.to_path_buf()))
}

/// Links `path` against the runtime with clang and returns the executable.
pub fn build(path: &Path, output: Option<&Path>) -> Result<PathBuf, BuildError> {
    if !installed("clang", "try installing LLVM") {
        return Err(BuildError::ToolNotFound("clang"));
    }
    let exe = output.map_or_else(|| default_output(path), Path::to_path_buf);
    let dir = include_dir();
    let lib = dir.join(format!("lib{RUNTIME_LIB}.a"));
    if !lib.exists() {
        log::warn!(
            "{} does not exist; try `cargo build --package p0-runtime`",
            lib.display()
        );
    }
    let link = format!("-l{RUNTIME_LIB}");
    let mut args = vec![utf8(path)?, "-o", utf8(&exe)?, "-L", utf8(&dir)?, link.as_str()];
    args.extend(SYSTEM_LIBS);
    subprocess::handle(subprocess::exec("clang", &args)?).map_err(BuildError::Tool)?;
    Ok(exe)
}

/// Builds and runs `path`, copying the program's output to `writer`.
/// Returns the program's exit code.
pub fn run(path: &Path, mut writer: impl Write) -> Result<i32, BuildError> {
    let exe = build(path, None)?;
    let exe = if exe.is_relative() && exe.components().count() == 1 {
        Path::new(".").join(exe)
    } else {
        exe
    };
    log::info!("running {}", exe.display());
    let res = subprocess::exec(utf8(&exe)?, &[])?;
    write!(writer, "{}{}", res.stdout, res.stderr)?;
    writer.flush()?;
    Ok(res.code)
}

pub fn fatal<E: Display, T>(e: E) -> T {
    eprintln!("{}: {e}", "error".red().bold());
    std::process::exit(1);
}

pub fn init_logger(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        3.. => log::LevelFilter::Trace,
    };
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Magenta)
        .trace(Color::Cyan);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}: {}",
                format!("{}", colors.color(record.level()))
                    .to_lowercase()
                    .bold(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
