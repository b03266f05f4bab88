//! A worked example of driving gridout the way a monitoring CLI would.
//!
//! The data here is a static snapshot of a small search cluster, so the
//! binary runs offline. It plays the two upstream roles the engine expects
//! from its callers: producing rows positionally aligned to a schema, and
//! resolving a user-named column subset against the entity's default
//! columns before the engine ever sees it.
//!
//! ```text
//! clusterdemo nodes --sort-by HEAP-PERCENT:desc
//! clusterdemo indices --columns index,store-size --sort-by STORE-SIZE:desc
//! ```

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use gridout::{ColumnDef, SortSpec, Table};

#[derive(Parser)]
#[command(
    name = "clusterdemo",
    about = "Render sample cluster tables with gridout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sample cluster's nodes
    Nodes(EntityArgs),
    /// List the sample cluster's indices
    Indices(EntityArgs),
}

#[derive(Args)]
struct EntityArgs {
    /// Columns to sort by (comma-separated), e.g. 'NAME:desc,HEAP-PERCENT'
    #[arg(short = 's', long = "sort-by", default_value = "")]
    sort_by: String,

    /// Columns to display (comma-separated) or 'all'
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,
}

fn node_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("IP"),
        ColumnDef::percent("HEAP-PERCENT"),
        ColumnDef::percent("CPU"),
        ColumnDef::number("LOAD-1M"),
        ColumnDef::text("NODE-ROLE"),
        ColumnDef::text("MASTER"),
        ColumnDef::text("NAME"),
    ]
}

const NODE_ROWS: &[&[&str]] = &[
    &["10.0.0.3", "71%", "31%", "2.06", "dim", "", "es-data-2"],
    &["10.0.0.1", "62%", "23%", "1.13", "dim", "*", "es-data-0"],
    &["10.0.0.2", "38%", "9%", "0.41", "dim", "", "es-data-1"],
    &["10.0.0.4", "12%", "2%", "0.05", "m", "", "es-master-0"],
];

fn index_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::text("HEALTH"),
        ColumnDef::text("STATUS"),
        ColumnDef::text("INDEX"),
        ColumnDef::number("PRIMARY"),
        ColumnDef::number("DOCS-COUNT"),
        ColumnDef::data_size("STORE-SIZE"),
        ColumnDef::date("CREATED"),
    ]
}

const INDEX_ROWS: &[&[&str]] = &[
    &["green", "open", "logs-2024", "3", "120400", "1.5gb", "2024-01-02T08:30:00Z"],
    &["yellow", "open", "metrics", "1", "903", "721kb", "2024-03-15T11:05:00Z"],
    &["green", "open", "traces", "2", "17", "900b", "2024-06-01T09:00:00Z"],
    &["red", "open", "quarantine", "1", "", "", "2023-11-20T16:45:00Z"],
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nodes(args) => run_entity(node_columns(), NODE_ROWS, "NAME", &args),
        Commands::Indices(args) => run_entity(index_columns(), INDEX_ROWS, "INDEX", &args),
    }
}

fn run_entity(
    defaults: Vec<ColumnDef>,
    rows: &[&[&str]],
    default_sort: &str,
    args: &EntityArgs,
) -> Result<()> {
    let selected = resolve_columns(&args.columns, &defaults)?;

    // Project each row into the resolved schema; producing positionally
    // aligned rows is the caller's job, not the engine's.
    let schema: Vec<ColumnDef> = selected.iter().map(|&i| defaults[i].clone()).collect();
    let mut table = Table::new(schema);
    for row in rows {
        table.push_row(selected.iter().map(|&i| row[i]));
    }

    let sort = if args.sort_by.is_empty() {
        SortSpec::parse(default_sort)
    } else {
        SortSpec::parse(&args.sort_by)
    };

    let mut stdout = std::io::stdout().lock();
    table.write_to(&sort, &mut stdout)?;
    Ok(())
}

/// Resolves a requested column subset against the entity's default columns,
/// case-insensitively. No request (or `all`) keeps the full default set;
/// an unknown name is a hard error before anything renders.
fn resolve_columns(requested: &[String], defaults: &[ColumnDef]) -> Result<Vec<usize>> {
    if requested.is_empty() || requested.iter().any(|name| name.eq_ignore_ascii_case("all")) {
        return Ok((0..defaults.len()).collect());
    }
    let mut selected = Vec::with_capacity(requested.len());
    for name in requested {
        match defaults
            .iter()
            .position(|column| column.header.eq_ignore_ascii_case(name))
        {
            Some(index) => selected.push(index),
            None => bail!("unknown column: {name}"),
        }
    }
    Ok(selected)
}
