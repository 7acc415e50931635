use crate::templates::TemplateId;
use std::path::PathBuf;

#[derive(Debug)]
pub enum EmitOperation {
    Write { target: PathBuf, content: String, target_exists: bool, executable: bool },
    Skip { template: TemplateId, target: PathBuf },
}

impl EmitOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            EmitOperation::Write { target, .. } => target,
            EmitOperation::Skip { target, .. } => target,
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `user_confirmed_overwrite` - Whether the user has confirmed overwriting existing files
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, user_confirmed_overwrite: bool, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            EmitOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    if user_confirmed_overwrite {
                        format!(
                            "{}Writing to '{}' (overwriting existing file)",
                            prefix,
                            target.display()
                        )
                    } else {
                        format!(
                            "{}Skipping write to '{}' (target already exists)",
                            prefix,
                            target.display()
                        )
                    }
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }

            EmitOperation::Skip { template, target } => {
                format!(
                    "{}Skipping '{}' for '{}' (not requested)",
                    prefix,
                    template,
                    target.display()
                )
            }
        }
    }
}
