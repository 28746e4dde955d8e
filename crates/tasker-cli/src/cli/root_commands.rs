use clap::Subcommand;

/// Top-level command tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Subcommand)]
pub enum Commands {
    /// Interactive task menu (default).
    #[default]
    Interactive,
    /// Add two sample tasks, filter by priority, sort by due date, and report.
    Demo,
}
