use std::path::PathBuf;

use anyhow::Context;
use i18nmerge_config::{Config, PathsConfig};
use i18nmerge_core::merge_with_stats;
use i18nmerge_io::{load_catalog, load_localization, write_merged};
use tracing::info;

/// Paths given on the command line. Anything left out comes from the config
/// file or the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct MergeInput {
    pub german: Option<PathBuf>,
    pub french: Option<PathBuf>,
    pub items: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl MergeInput {
    /// Fill in missing paths. `load_defaults` only runs when at least one
    /// path is missing, so a fully specified invocation never reads the
    /// config file.
    fn resolve(
        self,
        load_defaults: impl FnOnce() -> anyhow::Result<PathsConfig>,
    ) -> anyhow::Result<PathsConfig> {
        match (self.german, self.french, self.items, self.output) {
            (Some(german), Some(french), Some(items), Some(output)) => Ok(PathsConfig {
                german,
                french,
                items,
                output,
            }),
            (german, french, items, output) => {
                let defaults = load_defaults()?;
                Ok(PathsConfig {
                    german: german.unwrap_or(defaults.german),
                    french: french.unwrap_or(defaults.french),
                    items: items.unwrap_or(defaults.items),
                    output: output.unwrap_or(defaults.output),
                })
            }
        }
    }
}

/// Strategy for the merge itself: read all three sources, merge, then write.
#[derive(Debug, Clone, Copy)]
pub struct MergeStrategy;

impl super::CommandStrategy for MergeStrategy {
    type Input = MergeInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let paths = input.resolve(|| Ok(Config::load()?.paths))?;

        let german = load_localization(&paths.german).context("Failed to load German source")?;
        let french = load_localization(&paths.french).context("Failed to load French source")?;
        let catalog = load_catalog(&paths.items).context("Failed to load item catalog")?;

        let (merged, stats) = merge_with_stats(&german, &french, &catalog);
        info!(
            german = stats.german_entries,
            french = stats.french_entries,
            shared = stats.shared_entries,
            icons = stats.indexed_icons,
            kept = stats.kept_entries,
            "Merged translations"
        );

        write_merged(&paths.output, &merged).context("Failed to write merged document")?;

        println!("Merged & filtered JSON saved to {}", paths.output.display());
        Ok(())
    }
}
