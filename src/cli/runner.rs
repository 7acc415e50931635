use crate::{
    answers::AnswerRecord,
    cli::Args,
    collector::{questions, AnswerCollector},
    config::Config,
    emitter::Emitter,
    error::Result,
    install::run_install,
    ioutils::{default_package_name, get_output_dir},
    manifest::ManifestBuilder,
    plan::plan_instructions,
    prompt::{confirm, get_prompt_provider, PromptProvider},
    renderer::{new_renderer, TemplateRenderer},
    rule_set::RuleSet,
};
use std::path::Path;

/// Main CLI runner: collect answers, derive the artifacts, emit them, install.
pub struct Runner<'a> {
    args: Args,
    provider: &'a dyn PromptProvider,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, provider: &'a dyn PromptProvider) -> Self {
        Self { args, provider }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<()> {
        let engine = new_renderer();
        let output_root = get_output_dir(&self.args.output_dir)?;
        let config = self.load_config(&output_root)?;
        let rule_set = self.args.rule_set.unwrap_or(config.rule_set);
        log::debug!("Generating into '{}' with rule set {rule_set}", output_root.display());

        let answers = self.collect_answers(&engine, &output_root, rule_set)?;

        let manifest = ManifestBuilder::new(config.author.clone(), rule_set).build(&answers);
        let instructions = plan_instructions(&answers, rule_set);

        let emitter = Emitter::new(
            &engine,
            self.provider,
            output_root.clone(),
            self.args.should_skip_overwrite_prompts(),
            self.args.dry_run,
        );
        let written = emitter.emit(&manifest, &instructions)?;
        log::debug!("Wrote {} files", written.len());

        self.install(&config, &output_root)?;

        println!(
            "Package '{}' generated successfully in {}.",
            answers.name,
            output_root.display()
        );
        Ok(())
    }

    /// Loads the explicit config file, or looks for one in the output directory
    fn load_config(&self, output_root: &Path) -> Result<Config> {
        match &self.args.config {
            Some(path) => Config::load_file(path),
            None => Config::discover(output_root),
        }
    }

    fn collect_answers(
        &self,
        engine: &dyn TemplateRenderer,
        output_root: &Path,
        rule_set: RuleSet,
    ) -> Result<AnswerRecord> {
        let questions = questions(rule_set, &default_package_name(output_root));
        let collector = AnswerCollector::new(engine, self.provider, self.args.non_interactive);
        collector.collect_answers(&questions, self.args.answers.clone())
    }

    /// Runs the install command unless disabled, declined, or dry-running
    fn install(&self, config: &Config, output_root: &Path) -> Result<()> {
        if self.args.skip_install || self.args.dry_run {
            log::debug!("Skipping dependency installation");
            return Ok(());
        }

        let confirmed = confirm(
            self.provider,
            self.args.should_skip_install_prompt(),
            format!("Run '{}' now?", config.install_command.join(" ")),
        )?;
        if confirmed {
            run_install(&config.install_command, output_root)?;
        }
        Ok(())
    }
}

/// Runs with interactive terminal prompts
pub fn run(args: Args) -> Result<()> {
    let provider = get_prompt_provider();
    Runner::new(args, &provider).run()
}

/// Runs with the given prompt provider
pub fn run_with_provider(args: Args, provider: &dyn PromptProvider) -> Result<()> {
    Runner::new(args, provider).run()
}
