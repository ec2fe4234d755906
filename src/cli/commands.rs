use clap::{Args, Parser, Subcommand};

use crate::model::task::Filter;

#[derive(Parser)]
#[command(name = "tk", about = concat!("[·] tick v", env!("CARGO_PKG_VERSION"), " - your todos, one server away"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the todo service (overrides TICK_API_URL and tick.toml)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Read configuration from this file instead of ./tick.toml
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List todos (optionally filtered and searched)
    List(ListArgs),
    /// Show a single todo
    Show(ShowArgs),
    /// Add a todo
    Add(AddArgs),
    /// Toggle a todo's completed flag
    Toggle(ToggleArgs),
    /// Edit a todo's title, description, or completed flag
    Edit(EditArgs),
    /// Delete todos
    Delete(DeleteArgs),
    /// Show todo counts (total / active / completed)
    Stats,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Subset to show: all, active, or completed
    #[arg(long, default_value = "all")]
    pub filter: Filter,
    /// Case-insensitive search over titles and descriptions
    #[arg(long)]
    pub search: Option<String>,
    /// Emit the view as an HTML fragment
    #[arg(long)]
    pub html: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Todo id
    pub id: i64,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Todo title
    pub title: String,
    /// Optional description
    #[arg(long)]
    pub desc: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Todo id
    pub id: i64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Todo id
    pub id: i64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description (empty string clears it)
    #[arg(long)]
    pub desc: Option<String>,
    /// Set the completed flag explicitly
    #[arg(long)]
    pub done: Option<bool>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Todo ids to delete
    #[arg(required = true)]
    pub ids: Vec<i64>,
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}
