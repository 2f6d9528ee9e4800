use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nbcards", version)]
#[command(about = "Ordered code and markdown cards, exported as Jupyter notebooks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global deck instead of the one in the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a code card
    #[command(alias = "a")]
    Add {
        /// Title of the card
        title: String,

        /// Source code of the card
        #[arg(default_value = "")]
        source: String,

        /// Kernel of the card (python3, ir); defaults to the configured kernel
        #[arg(short, long)]
        kernel: Option<String>,

        /// Notebook cell as JSON, used instead of a generated code cell
        #[arg(long, conflicts_with = "cell_file")]
        cell: Option<String>,

        /// File holding the notebook cell as JSON
        #[arg(long)]
        cell_file: Option<PathBuf>,
    },

    /// Add a custom markdown card
    #[command(alias = "n")]
    Note {
        /// Title of the card
        title: String,

        /// Markdown text
        #[arg(default_value = "")]
        text: String,
    },

    /// Append cards from JSON files (one card or a list of cards per file)
    Import {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },

    /// Change fields of a card
    #[command(alias = "e")]
    #[command(group(ArgGroup::new("kind").args(["markdown", "code"])))]
    Edit {
        /// Index of the card
        index: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        source: Option<String>,

        #[arg(short, long)]
        kernel: Option<String>,

        /// Notebook cell as JSON
        #[arg(long)]
        cell: Option<String>,

        /// Turn the card into a custom markdown card
        #[arg(long)]
        markdown: bool,

        /// Turn the card into an ordinary card
        #[arg(long)]
        code: bool,

        /// Replace the card with the one in this JSON file
        #[arg(long, conflicts_with_all = ["title", "source", "kernel", "cell", "markdown", "code"])]
        from: Option<PathBuf>,
    },

    /// Rename a card
    Title {
        /// Index of the card
        index: String,
        title: String,
    },

    /// Move a card one place up
    Up {
        /// Index of the card
        index: String,
    },

    /// Move a card one place down
    Down {
        /// Index of the card
        index: String,
    },

    /// Delete one or more cards
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the cards (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Collapse (or expand with --off) cards, their code or their output
    #[command(group(ArgGroup::new("part").args(["code", "output"])))]
    Collapse {
        /// Indexes of the cards (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Collapse only the code
        #[arg(long)]
        code: bool,

        /// Collapse only the output
        #[arg(long)]
        output: bool,

        /// Expand instead of collapse
        #[arg(long)]
        off: bool,
    },

    /// List cards
    #[command(alias = "ls")]
    List {
        /// Only cards of this kernel
        #[arg(short, long)]
        kernel: Option<String>,
    },

    /// Show one or more cards in full
    #[command(alias = "v")]
    View {
        /// Indexes of the cards (e.g. 1 3 5-7)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Export cards to output_<kernel>.ipynb notebooks
    #[command(alias = "x")]
    Export {
        /// Indexes of the cards to export (all when omitted)
        indexes: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (output-dir, pretty, default-kernel)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the deck
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_without_indexes() {
        let cli = Cli::try_parse_from(["nbcards", "export"]).unwrap();
        match cli.command {
            Some(Commands::Export { indexes }) => assert!(indexes.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_add_with_kernel() {
        let cli = Cli::try_parse_from(["nbcards", "add", "Plot", "plot(x)", "-k", "ir"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                source,
                kernel,
                ..
            }) => {
                assert_eq!(title, "Plot");
                assert_eq!(source, "plot(x)");
                assert_eq!(kernel.as_deref(), Some("ir"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn collapse_parts_are_exclusive() {
        assert!(Cli::try_parse_from(["nbcards", "collapse", "1", "--code", "--output"]).is_err());
    }

    #[test]
    fn edit_from_file_conflicts_with_fields() {
        assert!(
            Cli::try_parse_from(["nbcards", "edit", "1", "--from", "c.json", "--title", "x"])
                .is_err()
        );
    }

    #[test]
    fn global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["nbcards", "list", "-g"]).unwrap();
        assert!(cli.global);
    }
}
