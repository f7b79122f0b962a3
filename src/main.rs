//! pagewin - page-window planning for pagination controls.
//!
//! Usage:
//!   pagewin plan --total 200 --per-page 10 --current 11 --max 5
//!   pagewin navigate --total 200 --max 5 next next last 3
//!   pagewin --help
//!
//! Page numbers on the command line are one-based, as shown to users.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pagewin_core::{PagerConfig, non_negative};
use pagewin_nav::{EventKind, PageNavigator, PageSnapshot, PageState, PagerEvent, WindowEntry};

#[derive(Parser)]
#[command(
    name = "pagewin",
    version,
    about = "Plan which page links a pagination control shows",
    long_about = "pagewin computes the page links, ellipses and prev/next affordances \
                  of a pagination control for a given item count, page size and \
                  current page."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page links for one state
    Plan {
        #[command(flatten)]
        pager: PagerArgs,

        /// Current page (one-based, clamped into range)
        #[arg(long, alias = "page", default_value = "1", allow_negative_numbers = true)]
        current: i64,
    },

    /// Apply navigation steps and print every page shown
    Navigate {
        #[command(flatten)]
        pager: PagerArgs,

        /// Steps: next, prev, first, last, or a one-based page number
        #[arg(allow_negative_numbers = true)]
        steps: Vec<Step>,
    },
}

#[derive(Args)]
struct PagerArgs {
    /// Total number of items
    #[arg(short, long, allow_negative_numbers = true)]
    total: Option<i64>,

    /// Items per page
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    per_page: Option<i64>,

    /// Max page links in the window (0 = show all)
    #[arg(short, long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// JSON config file; command-line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Prev,
    Next,
    First,
    Last,
    Page(i64),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => other
                .parse::<i64>()
                .map(Self::Page)
                .map_err(|_| format!("unknown step `{other}`")),
        }
    }
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    snapshot: PageSnapshot,
    entries: &'a [WindowEntry],
    events: &'a [PagerEvent],
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Plan { pager, current } => run_plan(&pager, current)?,
        Command::Navigate { pager, steps } => run_navigate(&pager, &steps)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge the config file (if any) with command-line overrides.
fn load_config(args: &PagerArgs) -> Result<PagerConfig> {
    let mut config = match &args.config {
        Some(path) => PagerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PagerConfig::default(),
    };

    if let Some(total) = args.total {
        config.total_items = non_negative("total_items", total)?;
    }
    if let Some(per_page) = args.per_page {
        config.page_size = non_negative("page_size", per_page)?;
    }
    if let Some(max) = args.max {
        config.max_visible = non_negative("max_visible", max)?;
    }

    tracing::debug!(?config, "pager config resolved");
    Ok(config)
}

/// Print the plan for a single state.
fn run_plan(args: &PagerArgs, current: i64) -> Result<()> {
    let config = load_config(args)?;
    let mut pager = PageState::from_config(&config).context("Invalid pager configuration")?;
    pager.select(current.saturating_sub(1));

    print_plan(&pager, &[], args.format)
}

/// Apply each step, recording the pages announced to listeners.
fn run_navigate(args: &PagerArgs, steps: &[Step]) -> Result<()> {
    let config = load_config(args)?;
    let mut pager = PageState::from_config(&config).context("Invalid pager configuration")?;

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    pager.on(EventKind::Show, move |event| sink.borrow_mut().push(*event));

    for step in steps {
        match *step {
            Step::Prev => pager.prev(),
            Step::Next => pager.next(),
            Step::First => pager.first(),
            Step::Last => pager.last(),
            Step::Page(n) => pager.goto(n.saturating_sub(1)),
        };
    }

    let events = events.borrow();
    if let OutputFormat::Text = args.format {
        for event in events.iter() {
            println!("{} page {}", event.kind(), event.page() + 1);
        }
    }

    print_plan(&pager, &events, args.format)
}

fn print_plan(pager: &PageState, events: &[PagerEvent], format: OutputFormat) -> Result<()> {
    let entries = pager.window();
    let snapshot = pager.snapshot();

    match format {
        OutputFormat::Text => {
            println!("{}", format_links(&entries, &snapshot));
            if snapshot.page_count > 0 {
                let items = pager.item_range();
                println!(
                    "page {} of {} (items {}-{} of {})",
                    snapshot.current_page + 1,
                    snapshot.page_count,
                    items.start + 1,
                    items.end,
                    snapshot.total_items
                );
            } else {
                println!("no pages");
            }
        }
        OutputFormat::Json => {
            let output = PlanOutput {
                snapshot,
                entries: &entries,
                events,
            };
            let json =
                serde_json::to_string_pretty(&output).context("Failed to serialize plan")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// One-line rendering: `‹ 1 … 9 10 [11] 12 13 … 20 ›`.
fn format_links(entries: &[WindowEntry], snapshot: &PageSnapshot) -> String {
    let mut parts = Vec::with_capacity(entries.len() + 2);

    if snapshot.has_prev {
        parts.push("‹".to_string());
    }
    for entry in entries {
        if entry.is_current(snapshot.current_page) {
            parts.push(format!("[{entry}]"));
        } else {
            parts.push(entry.label());
        }
    }
    if snapshot.has_next {
        parts.push("›".to_string());
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_args(args: &[&str]) -> (PagerArgs, i64) {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Plan { pager, current } => (pager, current),
            Command::Navigate { .. } => panic!("expected the plan subcommand"),
        }
    }

    fn links_for(pager: &PagerArgs, current: i64) -> String {
        let config = load_config(pager).unwrap();
        let mut state = PageState::from_config(&config).unwrap();
        state.select(current.saturating_sub(1));
        format_links(&state.window(), &state.snapshot())
    }

    #[test]
    fn test_plan_accepts_current() {
        let (pager, current) = plan_args(&[
            "pagewin", "plan", "--total", "200", "--per-page", "10", "--current", "11", "--max",
            "5",
        ]);
        assert_eq!(current, 11);
        assert_eq!(links_for(&pager, current), "‹ 1 … 9 10 [11] 12 13 … 20 ›");
    }

    #[test]
    fn test_plan_accepts_page_alias() {
        let (_, current) = plan_args(&["pagewin", "plan", "--total", "200", "--page", "4"]);
        assert_eq!(current, 4);
    }

    #[test]
    fn test_affordance_markers_hidden_at_edges() {
        let (pager, _) = plan_args(&[
            "pagewin", "plan", "--total", "200", "--per-page", "10", "--max", "5",
        ]);
        assert_eq!(links_for(&pager, 1), "[1] 2 3 4 5 … 20 ›");
        assert_eq!(links_for(&pager, 20), "‹ 1 … 16 17 18 19 [20]");
    }

    #[test]
    fn test_negative_total_rejected() {
        let (pager, _) = plan_args(&["pagewin", "plan", "--total", "-3"]);
        assert!(load_config(&pager).is_err());
    }
}
