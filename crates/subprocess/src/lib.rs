use std::{
    io,
    time::{Duration, Instant},
};

#[derive(Debug)]
pub struct ProcessResult {
    pub command: String,
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl ProcessResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Program name, without its arguments.
    #[must_use]
    pub fn program(&self) -> &str {
        self.command
            .split_once(' ')
            .map_or(self.command.as_str(), |(p, _)| p)
    }
}

/// Runs `cmd` to completion. A process killed by a signal reports code `-1`.
pub fn exec(cmd: &str, args: &[&str]) -> io::Result<ProcessResult> {
    let start = Instant::now();
    let output = std::process::Command::new(cmd).args(args).output()?;
    let elapsed = start.elapsed();
    let command = if args.is_empty() {
        cmd.to_string()
    } else {
        format!("{} {}", cmd, args.join(" "))
    };
    Ok(ProcessResult {
        command,
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        elapsed,
    })
}

/// Returns the captured stdout on success, or stdout and stderr combined.
pub fn handle(res: ProcessResult) -> Result<String, String> {
    if res.success() {
        log::info!(
            "finished `{}` in {}ms",
            res.program(),
            res.elapsed.as_millis()
        );
        Ok(res.stdout)
    } else {
        let output = res.stdout + &res.stderr;
        log::error!("while running `{}`\n\t{}", res.command, output);
        Err(output)
    }
}
