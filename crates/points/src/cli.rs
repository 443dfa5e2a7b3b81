use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use points_core::View;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "points",
    version,
    about = "Report outstanding issue points per assignee and milestone"
)]
pub struct Cli {
    /// GitHub organization to scan
    #[arg(long, conflicts_with = "repos")]
    pub org: Option<String>,

    /// Scan only this repository (OWNER/NAME); repeat for several
    #[arg(long = "repo", value_name = "OWNER/NAME")]
    pub repos: Vec<String>,

    /// Label marking every issue to include
    #[arg(long)]
    pub label: Option<String>,

    /// Print all issues in one table
    #[arg(long, conflicts_with = "view")]
    pub all: bool,

    /// Which tables to print
    #[arg(long, value_enum)]
    pub view: Option<ViewChoice>,

    /// Path to a TOML config file
    #[arg(long, env = "POINTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum ViewChoice {
    /// Per-assignee tables, then points per milestone
    #[default]
    Summary,
    /// Every issue in one table
    All,
    /// Only the per-assignee tables
    Assignee,
    /// Only points per assignee and milestone
    Milestone,
}

impl From<ViewChoice> for View {
    fn from(choice: ViewChoice) -> Self {
        match choice {
            ViewChoice::Summary => View::Summary,
            ViewChoice::All => View::All,
            ViewChoice::Assignee => View::Assignee,
            ViewChoice::Milestone => View::Milestone,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

impl Cli {
    /// The view selected by `--all` or `--view`
    pub fn selected_view(&self) -> View {
        if self.all {
            View::All
        } else {
            self.view.unwrap_or_default().into()
        }
    }

    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "points", &mut std::io::stdout());
    }
}
