use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::process;

use catalogo_core::labels::{self, classification_label};
use catalogo_core::*;

/// Catálogo - browse the technology and laboratory catalog from the terminal
///
/// Examples:
///   # Every technology, in catalog order
///   catalogo-cli dados
///
///   # Laboratories of one area
///   catalogo-cli dados --dataset laboratory --group "ciencias da saude"
///
///   # Accent- and case-insensitive search
///   catalogo-cli dados --search "jose alvares" --links
///
///   # Partition the results by classification
///   catalogo-cli dados --group-by-natureza
#[derive(Parser, Debug)]
#[command(name = "catalogo-cli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - With no --group, every declared group of the dataset is searched\n  \
    - Under the exclusive policy only the last --group is kept\n  \
    - Under the toggle policy repeated --group values are combined with OR\n  \
    - --natureza, --group and --search are combined with AND\n\n\
Ordering:\n  \
    - Results are sorted by name, ignoring case and accents\n  \
    - Technologies whose name starts with a letter come first")]
struct Cli {
    /// Directory holding the `patentes/` and `laboratorios/` documents
    #[arg(value_name = "DATA_DIR", env = "CATALOGO_DATA_DIR")]
    data_dir: PathBuf,

    /// Dataset to browse: technology or laboratory
    #[arg(short, long, default_value_t = Dataset::Technology)]
    dataset: Dataset,

    /// Restrict to a group (can be specified multiple times)
    #[arg(short, long = "group", value_name = "KEY")]
    groups: Vec<String>,

    /// Restrict to one classification
    #[arg(short, long, value_name = "LABEL")]
    natureza: Option<String>,

    /// Free-text search over every field
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Group selection behaviour: "exclusive" or "toggle"
    #[arg(short, long, default_value_t = SelectionPolicy::Exclusive)]
    policy: SelectionPolicy,

    /// Print the detail link of every result
    #[arg(short, long)]
    links: bool,

    /// Partition the results by classification
    #[arg(short = 'G', long)]
    group_by_natureza: bool,

    /// Emit a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ResultEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    natureza: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    dataset: Dataset,
    groups: Vec<&'a str>,
    natureza: Option<&'a str>,
    search: &'a str,
    count: usize,
    failed_documents: Vec<String>,
    results: Vec<ResultEntry<'a>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = load_catalog_from_dir(&cli.data_dir)
        .with_context(|| format!("could not load catalog from '{}'", cli.data_dir.display()))?;

    if let Some(failure) = &catalog.failure {
        eprintln!("{} {}", "Warning:".yellow().bold(), labels::LOAD_FAILED);
        for line in failure.details().lines() {
            eprintln!("  - {}", line);
        }
        eprintln!();
    }

    let state = build_filters(cli, &catalog.store);
    let results = compute_results(&state, &catalog.store);

    if cli.json {
        print_json(cli, &state, &catalog, &results)
    } else {
        print_results(cli, &state, &catalog.store, &results);
        Ok(())
    }
}

fn build_filters(cli: &Cli, store: &RecordStore) -> FilterState {
    let mut state = match cli.search.as_deref().and_then(search_link) {
        Some(link) => FilterState::from_query(&link, cli.policy),
        None => FilterState::new(cli.policy),
    };
    state.switch_dataset(cli.dataset);

    for group in &cli.groups {
        if !store.is_group_declared(cli.dataset, group) {
            eprintln!(
                "{} group '{}' is not declared for {}",
                "Warning:".yellow().bold(),
                group,
                cli.dataset
            );
        }
        state.select_group(group);
    }

    if let Some(natureza) = &cli.natureza {
        state.set_classification(Some(natureza.as_str()));
    }

    state
}

fn print_results(cli: &Cli, state: &FilterState, store: &RecordStore, results: &[&Record]) {
    let dataset = state.active_dataset();
    println!("{}\n", format!("# {}", labels::dataset_label(dataset)).bold());

    if state.has_filters() {
        if !state.selected_groups().is_empty() {
            let names: Vec<&str> = state
                .selected_groups()
                .iter()
                .map(|key| store.group_label(dataset, key))
                .collect();
            println!("- {} {}", format!("{}:", labels::group_panel_title(dataset)).cyan(), names.join(" OR "));
        }
        if let Some(natureza) = state.selected_classification() {
            println!("- {} {}", "Natureza:".cyan(), natureza);
        }
        if !state.search_text().is_empty() {
            println!("- {} {}", "Busca:".cyan(), state.search_text());
        }
        println!();
    }

    println!("{}\n", labels::result_count(results.len()).bold());

    if results.is_empty() {
        return;
    }

    if cli.group_by_natureza {
        for (label, records) in group_by_classification(results) {
            println!("{}", format!("## {} ({})", classification_label(&label), records.len()).green());
            for record in records {
                print_record(record, cli.links);
            }
            println!();
        }
    } else {
        for record in results {
            print_record(record, cli.links);
        }
    }
}

fn print_record(record: &Record, links: bool) {
    match record.natureza() {
        Some(natureza) => println!("- {} {}", record.display_name(), format!("[{}]", natureza).dimmed()),
        None => println!("- {}", record.display_name()),
    }
    if links {
        match detail_link(record) {
            Some(link) => println!("  {}", link.blue()),
            None => println!("  {}", "(sem identificador)".dimmed()),
        }
    }
}

fn print_json(
    cli: &Cli,
    state: &FilterState,
    catalog: &LoadedCatalog,
    results: &[&Record],
) -> anyhow::Result<()> {
    let report = Report {
        dataset: state.active_dataset(),
        groups: state.selected_groups().iter().map(String::as_str).collect(),
        natureza: state.selected_classification(),
        search: state.search_text(),
        count: results.len(),
        failed_documents: catalog
            .failure
            .iter()
            .flat_map(|f| f.failures.iter())
            .map(|f| f.error.path().display().to_string())
            .collect(),
        results: results
            .iter()
            .map(|record| ResultEntry {
                name: record.display_name(),
                natureza: record.natureza(),
                link: if cli.links { detail_link(record) } else { None },
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
