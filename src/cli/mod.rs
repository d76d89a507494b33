//! CLI module for syllabi
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Syllabi - Draft syllabi through a permission-gated wizard and review them
#[derive(Parser, Debug)]
#[command(name = "syllabi")]
#[command(version)]
#[command(about = "Draft syllabi through a permission-gated wizard and review them")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preview operations without saving anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a .syllabi data directory in the current directory
    Init {
        /// Overwrite an existing config.json
        #[arg(long)]
        force: bool,
    },

    /// Show which wizard steps a user may edit
    Steps {
        /// User whose section grants to load
        #[arg(long)]
        user: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save every allowed step of a syllabus and submit it for review
    Walk {
        /// User whose section grants gate the wizard
        #[arg(long)]
        user: String,

        /// Syllabus to draft
        #[arg(long)]
        syllabus: String,
    },

    /// Inspect or annotate a syllabus review
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewAction {
    /// Show saved annotations
    Show {
        /// Syllabus under review
        #[arg(long)]
        syllabus: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle approve/reject on a field (repeating a status clears it)
    Mark {
        /// Syllabus under review
        #[arg(long)]
        syllabus: String,

        /// Field identifier, or step-<n> for a whole step
        #[arg(long)]
        field: String,

        /// approved or rejected
        #[arg(long)]
        status: String,
    },

    /// Replace the comment on a field (empty text clears it)
    Comment {
        /// Syllabus under review
        #[arg(long)]
        syllabus: String,

        /// Field identifier, or step-<n> for a whole step
        #[arg(long)]
        field: String,

        /// Comment text
        #[arg(long, default_value = "")]
        text: String,
    },
}
