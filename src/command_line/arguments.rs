use {
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a formula and report its syntactic category
    Classify {
        /// The formula to classify
        formula: String,
    },

    /// Decide the satisfiability of a formula
    Decide {
        /// The formula to decide
        formula: String,
    },

    /// Process a batch file whose first line selects PARSE and/or SAT mode
    Batch {
        /// The batch file to process
        #[arg(default_value = "input.txt")]
        input: PathBuf,
    },
}
