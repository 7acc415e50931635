use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Installs the generated package's dependencies.
///
/// # Arguments
/// * `command` - Program followed by its arguments, e.g. `["npm", "install"]`
/// * `output_dir` - Directory holding the generated `package.json`
///
/// # Notes
/// - The command inherits stdout and stderr so progress stays visible
/// - Non-zero exit codes are treated as errors
pub fn run_install<P: AsRef<Path>>(command: &[String], output_dir: P) -> Result<()> {
    let output_dir = output_dir.as_ref();
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::ValidationError("install command is empty".into()))?;

    log::info!("Running '{}' in '{}'", command.join(" "), output_dir.display());
    let status = Command::new(program)
        .args(args)
        .current_dir(output_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        return Err(Error::InstallError { command: command.join(" "), status });
    }
    Ok(())
}
