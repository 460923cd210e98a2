//! Preset-driven blank-line cleanup pipeline.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::passes::{
    collapse_consecutive_blanks, ensure_blank_after_lists, ensure_blank_around_tables,
    remove_blanks_in_lists,
};
use crate::blank::{
    remove_trailing_blanks_in_table_cells, BlankLineOptions, BlankLineStats, TrailingBlankOptions,
};
use crate::error::{Error, Result};
use crate::model::Document;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupPreset {
    /// Minimal cleanup: trailing blanks in table cells only
    Minimal,
    /// Standard cleanup: trailing cell blanks, duplicate blanks, spacing after tables
    #[default]
    Standard,
    /// Aggressive cleanup: every pass, including list spacing
    Aggressive,
}

/// Options for the cleanup pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    /// How generated or adjusted blanks look
    pub blank_line: BlankLineOptions,

    /// How trailing cell blanks are pruned
    pub trailing: TrailingBlankOptions,

    /// Remove trailing blank paragraphs from table cells
    pub remove_trailing_cell_blanks: bool,

    /// Remove unpreserved blank paragraphs between items of the same list
    pub remove_blanks_in_lists: bool,

    /// Collapse runs of consecutive blank body paragraphs
    pub collapse_consecutive_blanks: bool,

    /// Ensure a blank paragraph before every body table
    pub blank_before_tables: bool,

    /// Ensure a blank paragraph after every body table
    pub blank_after_tables: bool,

    /// Ensure a blank paragraph after every list
    pub blank_after_lists: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            blank_line: BlankLineOptions::default(),
            trailing: TrailingBlankOptions::default(),
            remove_trailing_cell_blanks: true,
            remove_blanks_in_lists: false,
            collapse_consecutive_blanks: false,
            blank_before_tables: false,
            blank_after_tables: false,
            blank_after_lists: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            collapse_consecutive_blanks: true,
            blank_after_tables: true,
            ..Self::minimal()
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            remove_blanks_in_lists: true,
            blank_before_tables: true,
            blank_after_lists: true,
            ..Self::standard()
        }
    }

    /// Load options from a JSON string. Missing fields take standard defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Set blank-line options.
    pub fn with_blank_line(mut self, options: BlankLineOptions) -> Self {
        self.blank_line = options;
        self
    }

    /// Set trailing-blank options.
    pub fn with_trailing(mut self, options: TrailingBlankOptions) -> Self {
        self.trailing = options;
        self
    }

    /// Check if any pass is enabled.
    pub fn has_passes(&self) -> bool {
        self.remove_trailing_cell_blanks
            || self.remove_blanks_in_lists
            || self.collapse_consecutive_blanks
            || self.blank_before_tables
            || self.blank_after_tables
            || self.blank_after_lists
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Blank-line cleanup pipeline.
///
/// Passes run in a fixed order: removals first, then insertions.
#[derive(Debug, Clone, Default)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Process a document in place.
    pub fn process(&self, doc: &mut Document) -> Result<BlankLineStats> {
        let opts = &self.options;
        let mut stats = BlankLineStats::new();

        if opts.remove_trailing_cell_blanks {
            stats.record_removed(remove_trailing_blanks_in_table_cells(doc, &opts.trailing));
        }

        if opts.remove_blanks_in_lists {
            stats.record_removed(remove_blanks_in_lists(doc));
        }

        if opts.collapse_consecutive_blanks {
            stats.record_removed(collapse_consecutive_blanks(doc));
        }

        if opts.blank_before_tables || opts.blank_after_tables {
            stats.merge(&ensure_blank_around_tables(
                doc,
                &opts.blank_line,
                opts.blank_before_tables,
                opts.blank_after_tables,
            )?);
        }

        if opts.blank_after_lists {
            stats.merge(&ensure_blank_after_lists(doc, &opts.blank_line)?);
        }

        log::info!(
            "blank-line cleanup: {} added, {} marked, {} skipped, {} removed",
            stats.added,
            stats.marked,
            stats.skipped,
            stats.removed
        );

        Ok(stats)
    }

    /// Process independent documents in parallel.
    ///
    /// Each document is handled on its own; the returned stats are in the
    /// same order as `docs`.
    pub fn process_all(&self, docs: &mut [Document]) -> Result<Vec<BlankLineStats>> {
        docs.par_iter_mut().map(|doc| self.process(doc)).collect()
    }
}

/// Run the cleanup pipeline over independent documents in parallel and
/// return the combined statistics.
pub fn process_documents(docs: &mut [Document], options: &CleanupOptions) -> Result<BlankLineStats> {
    let pipeline = CleanupPipeline::new(options.clone());
    let per_doc = pipeline.process_all(docs)?;

    Ok(per_doc.iter().fold(BlankLineStats::new(), |mut acc, s| {
        acc.merge(s);
        acc
    }))
}
