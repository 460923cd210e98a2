//! Document-wide blank-line cleanup.
//!
//! The passes here are the callers of the blank-line building blocks in
//! [`crate::blank`]: each one decides *which* body positions need a blank
//! paragraph or lose one, and the [`CleanupPipeline`] strings them together
//! according to a [`CleanupPreset`] or explicit [`CleanupOptions`].

mod passes;
mod pipeline;

pub use passes::{
    collapse_consecutive_blanks, ensure_blank_after_lists, ensure_blank_around_tables,
    remove_blanks_in_lists,
};
pub use pipeline::{process_documents, CleanupOptions, CleanupPipeline, CleanupPreset};
