//! Command execution implementations

use super::Commands;
use super::{brand, inspect};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Brand(args) => brand::execute(args),
            Commands::Fingerprint { text, meaning } => {
                inspect::fingerprint(text, meaning.as_deref());
                Ok(())
            }
            Commands::Rewrite {
                text,
                browser,
                force_provider,
            } => inspect::rewrite_text(text, browser, *force_provider),
        }
    }
}
