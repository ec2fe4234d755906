use std::io::Write;
use std::path::Path;

use crate::api::{HttpClient, TodoApi};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::model::task::TaskUpdate;
use crate::ops::controller::{Controller, DeleteOutcome, Ui};
use crate::ops::view::render_markup;

/// Stdin/stderr implementation of the controller's [`Ui`] capability.
/// `--yes` pre-answers every confirmation.
pub struct StdUi {
    pub assume_yes: bool,
}

impl Ui for StdUi {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", message);
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

type CliController = Controller<HttpClient, StdUi>;

fn build_controller(cli: &Cli, assume_yes: bool) -> Result<CliController, Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref().map(Path::new))?;
    let url = config_io::resolve_api_url(cli.api_url.as_deref(), &config);
    let api = HttpClient::new(url);
    Ok(Controller::new(api, StdUi { assume_yes }))
}

/// A controller operation already told the user what went wrong through
/// its Ui; all that is left is the exit status.
fn bail() -> ! {
    std::process::exit(1);
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        None => crate::tui::run(&cli),
        Some(Commands::List(ref args)) => cmd_list(&cli, args, json),
        Some(Commands::Show(ref args)) => cmd_show(&cli, args, json),
        Some(Commands::Add(ref args)) => cmd_add(&cli, args),
        Some(Commands::Toggle(ref args)) => cmd_toggle(&cli, args),
        Some(Commands::Edit(ref args)) => cmd_edit(&cli, args),
        Some(Commands::Delete(ref args)) => cmd_delete(&cli, args),
        Some(Commands::Stats) => cmd_stats(&cli, json),
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(cli: &Cli, args: &ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = build_controller(cli, true)?;
    if !controller.load() {
        bail();
    }
    controller.set_filter(args.filter);
    if let Some(term) = &args.search {
        controller.set_search(term.clone());
    }

    let view = controller.view();
    if args.html {
        print!("{}", render_markup(&view));
    } else if json {
        let out = ListJson {
            filter: controller.filter(),
            search: args.search.clone(),
            tasks: view.rows.iter().map(row_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for line in format_view(&view) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_show(cli: &Cli, args: &ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let controller = build_controller(cli, true)?;
    let task = controller
        .api()
        .get(args.id)?
        .ok_or_else(|| format!("todo {} not found", args.id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(&task))?);
    } else {
        for line in format_task_detail(&task) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_stats(cli: &Cli, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = build_controller(cli, true)?;
    if !controller.load() {
        bail();
    }
    let stats = controller.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(&stats))?);
    } else {
        println!("{}", format_stats(&stats));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(cli: &Cli, args: &AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.title.trim().is_empty() {
        return Err("title must not be empty".into());
    }
    let mut controller = build_controller(cli, true)?;
    if !controller.create(&args.title, args.desc.as_deref().unwrap_or("")) {
        bail();
    }
    println!("added: {}", args.title.trim());
    Ok(())
}

fn cmd_toggle(cli: &Cli, args: &ToggleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = build_controller(cli, true)?;
    if !controller.toggle(args.id) {
        bail();
    }
    // The resynced cache has the new state
    match controller.tasks().iter().find(|t| t.id == args.id) {
        Some(task) => println!("[{}] {:>4}  {}", task.checkbox_char(), task.id, task.title),
        None => println!("toggled {}", args.id),
    }
    Ok(())
}

fn cmd_edit(cli: &Cli, args: &EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.title.is_none() && args.desc.is_none() && args.done.is_none() {
        return Err("nothing to edit (use --title, --desc, or --done)".into());
    }
    if let Some(title) = &args.title
        && title.trim().is_empty()
    {
        return Err("title must not be empty".into());
    }

    let mut controller = build_controller(cli, true)?;
    let current = controller
        .api()
        .get(args.id)?
        .ok_or_else(|| format!("todo {} not found", args.id))?;

    let mut update = TaskUpdate::from(&current);
    if let Some(title) = &args.title {
        update.title = title.trim().to_string();
    }
    if let Some(desc) = &args.desc {
        let desc = desc.trim();
        update.description = if desc.is_empty() {
            None
        } else {
            Some(desc.to_string())
        };
    }
    if let Some(done) = args.done {
        update.completed = done;
    }

    if !controller.update(args.id, &update) {
        bail();
    }
    println!("updated {}", args.id);
    Ok(())
}

fn cmd_delete(cli: &Cli, args: &DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = build_controller(cli, args.yes)?;
    let mut failed = false;
    for id in &args.ids {
        match controller.delete(*id) {
            DeleteOutcome::Deleted => println!("deleted {}", id),
            DeleteOutcome::Declined => {}
            DeleteOutcome::Failed => failed = true,
        }
    }
    if failed {
        bail();
    }
    Ok(())
}
