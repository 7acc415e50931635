use crate::{
    constants::MANIFEST_FILENAME,
    emitter::operation::EmitOperation,
    error::{Error, Result},
    manifest::Manifest,
    plan::TemplateInstruction,
    prompt::{confirm, PromptProvider},
    renderer::TemplateRenderer,
};
use std::path::{Path, PathBuf};

/// Renders instructions into file operations and applies them
pub struct Emitter<'a> {
    engine: &'a dyn TemplateRenderer,
    provider: &'a dyn PromptProvider,
    output_root: PathBuf,
    skip_overwrite_prompts: bool,
    dry_run: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        provider: &'a dyn PromptProvider,
        output_root: PathBuf,
        skip_overwrite_prompts: bool,
        dry_run: bool,
    ) -> Self {
        Self { engine, provider, output_root, skip_overwrite_prompts, dry_run }
    }

    /// Renders the manifest and every instruction without touching the filesystem.
    pub fn operations(
        &self,
        manifest: &Manifest,
        instructions: &[TemplateInstruction],
    ) -> Result<Vec<EmitOperation>> {
        let mut operations = Vec::with_capacity(instructions.len() + 1);
        let manifest_json = manifest.to_json()?;
        operations.push(self.write_operation(Path::new(MANIFEST_FILENAME), manifest_json, false));

        for instruction in instructions {
            let target = self.output_root.join(&instruction.destination);
            if !instruction.emit {
                operations.push(EmitOperation::Skip { template: instruction.template, target });
                continue;
            }

            let template = instruction.template;
            let content = self.engine.render(
                template.source(),
                &instruction.context(),
                Some(template.name()),
            )?;
            operations.push(self.write_operation(
                &instruction.destination,
                content,
                template.executable(),
            ));
        }
        Ok(operations)
    }

    /// Writes everything and returns the paths actually written. Empty on a dry run.
    pub fn emit(
        &self,
        manifest: &Manifest,
        instructions: &[TemplateInstruction],
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for operation in self.operations(manifest, instructions)? {
            let user_confirmed_overwrite = match &operation {
                EmitOperation::Skip { .. } => {
                    log::debug!("{}", operation.get_message(false, self.dry_run));
                    continue;
                }
                EmitOperation::Write { .. } => self.handle_operation(&operation)?,
            };
            if user_confirmed_overwrite && !self.dry_run {
                written.push(operation.target().clone());
            }
            log::info!("{}", operation.get_message(user_confirmed_overwrite, self.dry_run));
        }
        Ok(written)
    }

    fn write_operation(
        &self,
        relative: &Path,
        content: String,
        executable: bool,
    ) -> EmitOperation {
        let target = self.output_root.join(relative);
        let target_exists = target.exists();
        EmitOperation::Write { target, content, target_exists, executable }
    }

    /// Applies a write, asking before replacing an existing file.
    fn handle_operation(&self, operation: &EmitOperation) -> Result<bool> {
        log::debug!("Handling emit operation: {operation:?}");
        match operation {
            EmitOperation::Write { target, content, target_exists, executable } => {
                let skip_prompt = self.skip_overwrite_prompts || !target_exists;
                let user_confirmed = confirm(
                    self.provider,
                    skip_prompt,
                    format!("Overwrite {}?", target.display()),
                )?;

                if user_confirmed {
                    self.write_file(content, target, *executable)?;
                }
                Ok(user_confirmed)
            }
            EmitOperation::Skip { .. } => Ok(false),
        }
    }

    /// Write content to a file, creating parent directories if needed.
    fn write_file(&self, content: &str, dest_path: &Path, executable: bool) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        if let Some(parent) = dest_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::from)?;
        }
        std::fs::write(dest_path, content)?;

        if executable {
            set_executable(dest_path)?;
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        answers::AnswerRecord, manifest::build_manifest, plan::plan_instructions,
        prompt::ScriptedPrompter, renderer::new_renderer, rule_set::RuleSet,
    };
    use std::fs;

    fn answers() -> AnswerRecord {
        let mut answers = AnswerRecord::new("foo");
        answers.description = "bar".into();
        answers.wants_cli = true;
        answers
    }

    fn emit_into(
        dir: &Path,
        provider: &ScriptedPrompter,
        skip: bool,
        dry_run: bool,
    ) -> Vec<PathBuf> {
        let engine = new_renderer();
        let answers = answers();
        let emitter = Emitter::new(&engine, provider, dir.to_path_buf(), skip, dry_run);
        emitter
            .emit(
                &build_manifest(&answers, RuleSet::V2),
                &plan_instructions(&answers, RuleSet::V2),
            )
            .unwrap()
    }

    #[test]
    fn writes_manifest_and_emitted_templates() {
        let dir = tempfile::tempdir().unwrap();
        let written = emit_into(dir.path(), &ScriptedPrompter::new(), false, false);

        assert_eq!(written.len(), 8);
        assert!(dir.path().join("package.json").is_file());
        assert!(dir.path().join("lib/index.js").is_file());
        assert!(dir.path().join("bin/cli").is_file());
        assert!(!dir.path().join(".travis.yml").exists());

        let attributes = fs::read_to_string(dir.path().join(".gitattributes")).unwrap();
        assert!(attributes.contains("bin/cli text eol=lf"));
    }

    #[cfg(unix)]
    #[test]
    fn cli_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        emit_into(dir.path(), &ScriptedPrompter::new(), false, false);
        let mode = fs::metadata(dir.path().join("bin/cli")).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let written = emit_into(dir.path(), &ScriptedPrompter::new(), false, true);
        assert!(written.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn keeps_existing_files_unless_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("readme.md");
        fs::write(&readme, "mine").unwrap();

        let provider = ScriptedPrompter::new()
            .with_confirmation_response(&format!("Overwrite {}?", readme.display()), false);
        let written = emit_into(dir.path(), &provider, false, false);
        assert!(!written.contains(&readme));
        assert_eq!(fs::read_to_string(&readme).unwrap(), "mine");

        emit_into(dir.path(), &ScriptedPrompter::new(), true, false);
        assert!(fs::read_to_string(&readme).unwrap().starts_with("# foo"));
    }
}
