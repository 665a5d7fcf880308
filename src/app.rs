use std::fs::OpenOptions;
use std::io::{self, Write};

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use log::{info, warn};

use crate::catalog::{builtin_catalog, Catalog};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::facets::{FacetSelection, FacetValue, SortOrder};
use crate::finder::Finder;
use crate::output::{self, OutputFormat, PageScope};
use crate::session;

fn print_banner() {
    println!(
        "{} {}",
        "statsfinder".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_opt_value<'a>(v: &'a str, default: &'a str) -> &'a str {
    if v.trim().is_empty() {
        default
    } else {
        v
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

#[derive(Clone, Debug)]
struct RunConfig {
    fixtures: Option<String>,
    selection: FacetSelection,
    scope: PageScope,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    interactive: bool,
    list_themes: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let fixtures = args
        .fixtures
        .or(cfg.fixtures)
        .map(|p| config::expand_tilde_string(&p));

    let sort_raw = args.sort.or(cfg.sort);
    let sort = match sort_raw.as_deref() {
        Some(raw) => SortOrder::parse(raw)
            .ok_or_else(|| format!("invalid sort '{raw}', expected newest or alphabetical"))?,
        None => SortOrder::default(),
    };

    let selection = FacetSelection {
        query: args
            .query
            .or(cfg.query)
            .map(|q| q.trim().to_string())
            .unwrap_or_default(),
        category: FacetValue::parse(args.theme.or(cfg.theme).as_deref().unwrap_or_default()),
        sub_category: FacetValue::parse(args.topic.or(cfg.topic).as_deref().unwrap_or_default()),
        release_type: FacetValue::parse(
            args.release_type
                .or(cfg.release_type)
                .as_deref()
                .unwrap_or_default(),
        ),
        sort,
        page: args.page.map(|p| p.saturating_sub(1)).unwrap_or(0),
    };

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text or json"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    if args.interactive && output.is_some() {
        warn!("interactive session ignores the configured output file");
    }

    let scope = if args.all_pages {
        PageScope::All
    } else {
        PageScope::Current
    };

    Ok(RunConfig {
        fixtures,
        selection,
        scope,
        output,
        output_format,
        no_color,
        interactive: args.interactive,
        list_themes: args.list_themes,
    })
}

fn load_catalog(fixtures: Option<&str>) -> Result<Catalog, String> {
    let catalog = match fixtures {
        Some(path) => {
            let catalog = Catalog::load(std::path::Path::new(path)).map_err(|e| e.to_string())?;
            info!("loaded {} publications from {path}", catalog.len());
            catalog
        }
        None => {
            let catalog = builtin_catalog();
            info!("using built-in catalogue of {} publications", catalog.len());
            catalog
        }
    };
    if catalog.is_empty() {
        warn!("the catalogue has no publications");
    }
    Ok(catalog)
}

fn print_selection(run: &RunConfig) {
    let s = &run.selection;
    format_kv_line("Search", format_opt_value(&s.query, "-"));
    format_kv_line("Theme", &s.category.to_string());
    format_kv_line("Topic", &s.sub_category.to_string());
    format_kv_line("Type", &s.release_type.to_string());
    format_kv_line("Sort", s.sort.label());
    if let Some(path) = run.fixtures.as_deref() {
        format_kv_line("Fixtures", path);
    }
    println!();
}

fn execute(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    let catalog = load_catalog(run.fixtures.as_deref())?;

    if run.list_themes {
        print!("{}", session::render_taxonomy(catalog.taxonomy()));
        return Ok(());
    }

    validation::validate_selection(&run.selection, catalog.taxonomy())?;

    let requested_page = run.selection.page;
    let mut finder = Finder::with_selection(catalog, run.selection.clone());
    if finder.selection().page != requested_page {
        warn!(
            "page {} is out of range, showing page {}",
            requested_page + 1,
            finder.selection().page + 1
        );
    }

    if run.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return session::run_session(&mut finder, stdin.lock(), &mut stdout)
            .map_err(|e| format!("interactive session failed: {e}"));
    }

    let view = finder.view();
    let rendered = match run.output_format {
        OutputFormat::Text => output::render_text(&view, finder.selection(), run.scope),
        OutputFormat::Json => output::render_json(&output::build_output(
            &view,
            finder.selection(),
            run.scope,
        ))?,
    };

    match run.output.as_deref() {
        Some(path) => {
            let mut outfile = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .map_err(|e| format!("failed to open output file: {e}"))?;
            outfile
                .write_all(&rendered)
                .map_err(|e| format!("failed to write output file: {e}"))?;
            format_kv_line("Results", &view.total_count().to_string());
            format_kv_line("Output", path);
        }
        None => {
            if run.output_format == OutputFormat::Text {
                print_banner();
                print_selection(&run);
            }
            io::stdout()
                .write_all(&rendered)
                .map_err(|e| format!("failed to write results: {e}"))?;
        }
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    init_logging(args.verbose);

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));

    if args.init_config {
        let path = user_config_path
            .or_else(config::default_config_path)
            .ok_or_else(|| "could not determine a config path, pass --config".to_string())?;
        if config::ensure_default_config_file(&path)? {
            format_kv_line("Config", &format!("written to {}", path.display()));
        } else {
            format_kv_line("Config", &format!("{} already exists", path.display()));
        }
        return Ok(());
    }

    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    execute(run)
}
