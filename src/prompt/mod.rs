//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `scripted`: Predefined answers for automation and tests

pub mod dialoguer;
pub mod interface;
pub mod scripted;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;
pub use scripted::ScriptedPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks a yes/no question unless `skip` is set, in which case the answer is yes.
pub fn confirm(
    provider: &dyn PromptProvider,
    skip: bool,
    prompt: String,
) -> crate::error::Result<bool> {
    if skip {
        return Ok(true);
    }
    provider.prompt_confirmation(&ConfirmationConfig { prompt, default: false })
}
