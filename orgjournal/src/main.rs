use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;
use orgjournal::config::{DEFAULT_LAST_DAYS, JournalConfig};
use orgjournal::tools::{
    EntriesRequest, JournalTools, RecentRequest, SearchRequest, TagsRequest,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(
    name = "orgjournal",
    about = "Query an org-mode journal kept as monthly journal-YYYY-MM.org files",
    version
)]
struct Cli {
    /// Enable verbose logging for debugging.
    #[arg(long, global = true)]
    verbose: bool,
    /// Directory holding the monthly journal files.
    #[arg(long, global = true, env = "ORGJOURNAL_DIR")]
    journal_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Entries within a date range (defaults to the last 7 days).
    Entries(RangeArgs),

    /// Case-insensitive keyword search over title, body and tags.
    Search(SearchArgs),

    /// Entries from the last N days, leaving out chores.
    Recent(RecentArgs),

    /// Entries filtered by tags to include and exclude.
    Tags(TagArgs),

    /// List the available tools.
    Tools,

    /// Answer one JSON tool call per stdin line.
    Serve,
}

#[derive(Debug, Args)]
struct RangeArgs {
    /// Look back this many days from now.
    #[arg(long)]
    last_days: Option<u32>,
    /// Inclusive start date (YYYY-MM-DD).
    #[arg(long)]
    since: Option<String>,
    /// Exclusive end date (YYYY-MM-DD).
    #[arg(long)]
    before: Option<String>,
}

#[derive(Debug, Args)]
struct SearchArgs {
    query: String,
    #[command(flatten)]
    range: RangeArgs,
    /// Do not match against titles.
    #[arg(long)]
    no_title: bool,
    /// Do not match against bodies.
    #[arg(long)]
    no_body: bool,
    /// Do not match against tags.
    #[arg(long)]
    no_tags: bool,
}

#[derive(Debug, Args)]
struct RecentArgs {
    #[arg(long, default_value_t = DEFAULT_LAST_DAYS)]
    days: u32,
}

#[derive(Debug, Args)]
struct TagArgs {
    /// Keep entries carrying at least one of these tags (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Drop entries carrying any of these tags (repeatable).
    #[arg(long = "exclude")]
    exclude: Vec<String>,
    #[command(flatten)]
    range: RangeArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.journal_dir {
        Some(dir) => JournalConfig::new(dir),
        None => JournalConfig::from_env(),
    };
    debug!("journal directory {:?}", config.journal_dir);
    let tools = JournalTools::new(config);

    match cli.command {
        Commands::Entries(args) => handle_entries(&tools, args),
        Commands::Search(args) => handle_search(&tools, args),
        Commands::Recent(args) => handle_recent(&tools, args),
        Commands::Tags(args) => handle_tags(&tools, args),
        Commands::Tools => print_json(&JournalTools::definitions()),
        Commands::Serve => {
            let stdin = io::stdin();
            serve(&tools, stdin.lock(), io::stdout().lock())
        }
    }
}

/// `--verbose` lowers the default filter to debug; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_entries(tools: &JournalTools, args: RangeArgs) -> Result<()> {
    let req = EntriesRequest {
        last_days: args.last_days,
        since: args.since,
        before: args.before,
        journal_dir: None,
    };
    print_json(&tools.get_journal_entries(&req)?)
}

fn handle_search(tools: &JournalTools, args: SearchArgs) -> Result<()> {
    let req = SearchRequest {
        last_days: args.range.last_days,
        since: args.range.since,
        before: args.range.before,
        search_in_title: !args.no_title,
        search_in_body: !args.no_body,
        search_in_tags: !args.no_tags,
        ..SearchRequest::new(args.query)
    };
    print_json(&tools.search_journal(&req)?)
}

fn handle_recent(tools: &JournalTools, args: RecentArgs) -> Result<()> {
    let req = RecentRequest {
        days: args.days,
        journal_dir: None,
    };
    print_json(&tools.get_recent_entries(&req)?)
}

fn handle_tags(tools: &JournalTools, args: TagArgs) -> Result<()> {
    let req = TagsRequest {
        tags: non_empty(args.tags),
        exclude_tags: non_empty(args.exclude),
        last_days: args.range.last_days,
        since: args.range.since,
        before: args.range.before,
        journal_dir: None,
    };
    print_json(&tools.get_entries_by_tag(&req)?)
}

/// An absent repeatable flag means "no filter", not "match nothing".
fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

/* ------------------------------ Serve loop ------------------------------ */

#[derive(Debug, Deserialize)]
struct ToolCall {
    tool: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Serialize)]
struct ToolReply {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ToolReply {
    fn success(result: Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    fn failure(error: impl ToString) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

fn serve(tools: &JournalTools, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("reading tool call")?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = answer(tools, &line);
        serde_json::to_writer(&mut output, &reply).context("writing reply")?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}

fn answer(tools: &JournalTools, line: &str) -> ToolReply {
    let call: ToolCall = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(err) => return ToolReply::failure(format!("malformed tool call: {err}")),
    };
    debug!("tool call {}", call.tool);
    match tools.call(&call.tool, call.arguments) {
        Ok(result) => ToolReply::success(result),
        Err(err) => ToolReply::failure(err),
    }
}
