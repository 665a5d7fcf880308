use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::{debug, info};

use crate::catalog::{ReleaseType, Taxonomy};
use crate::cli::validation;
use crate::facets::{FacetEvent, FacetValue, SortOrder};
use crate::finder::Finder;
use crate::output::{self, PageScope};
use crate::page::PageAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Facet(FacetEvent),
    Mode(PageAction),
    Themes,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  search <text>        filter by title or summary (empty clears)
  theme <id|all>       filter by theme
  topic <id|all>       filter by topic
  type <id|all>        filter by release type
  sort newest|title    change sort order
  page <n>             go to page n
  next, prev           move between pages
  clear                clear all filters
  filters, hide        show or hide the filter panel
  edit, apply, cancel  stage filter changes and apply them together
  themes               list theme, topic and release type ids
  help                 show this help
  quit                 leave the session
";

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_lowercase().as_str() {
        "search" | "q" => Command::Facet(FacetEvent::SetQuery(rest.to_string())),
        "theme" | "category" => Command::Facet(FacetEvent::SetCategory(FacetValue::parse(rest))),
        "topic" => Command::Facet(FacetEvent::SetSubCategory(FacetValue::parse(rest))),
        "type" => Command::Facet(FacetEvent::SetReleaseType(FacetValue::parse(rest))),
        "sort" => {
            let order = SortOrder::parse(rest)
                .ok_or_else(|| format!("unknown sort order '{rest}', expected newest or title"))?;
            Command::Facet(FacetEvent::SetSort(order))
        }
        "page" => {
            let n: usize = rest
                .parse()
                .map_err(|_| format!("invalid page '{rest}', expected a number"))?;
            if n == 0 {
                return Err("pages start at 1".to_string());
            }
            Command::Facet(FacetEvent::GoToPage(n - 1))
        }
        "next" | "n" => Command::Facet(FacetEvent::NextPage),
        "prev" | "previous" | "p" => Command::Facet(FacetEvent::PreviousPage),
        "clear" => Command::Facet(FacetEvent::ClearFilters),
        "filters" => Command::Mode(PageAction::ShowFilters),
        "hide" => Command::Mode(PageAction::HideFilters),
        "edit" => Command::Mode(PageAction::Edit),
        "apply" => Command::Mode(PageAction::Apply),
        "cancel" => Command::Mode(PageAction::Cancel),
        "themes" => Command::Themes,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}', type 'help' for a list")),
    };
    Ok(Some(command))
}

pub fn render_taxonomy(taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    out.push_str("Themes:\n");
    for theme in taxonomy.themes() {
        out.push_str(&format!("  {:<24} {}\n", theme.id, theme.title));
        for topic in theme.topics.iter() {
            out.push_str(&format!("    {:<22} {}\n", topic.id, topic.title));
        }
    }
    out.push_str("Release types:\n");
    for t in ReleaseType::ALL {
        out.push_str(&format!("  {:<24} {}\n", t.id(), t.label()));
    }
    out
}

fn render_panel<W: Write>(finder: &Finder, out: &mut W) -> io::Result<()> {
    let mode = finder.mode();
    if !mode.filters_visible() {
        return Ok(());
    }
    let (label, selection) = match mode.draft() {
        Some(draft) => ("Editing filters (apply or cancel)", draft),
        None => ("Filters", finder.selection()),
    };
    writeln!(out, "{}", label.bold())?;
    let query = if selection.query.is_empty() {
        "-"
    } else {
        selection.query.as_str()
    };
    writeln!(out, ":: {:<10}: {}", "Search", query)?;
    writeln!(out, ":: {:<10}: {}", "Theme", selection.category)?;
    writeln!(out, ":: {:<10}: {}", "Topic", selection.sub_category)?;
    writeln!(out, ":: {:<10}: {}", "Type", selection.release_type)?;
    writeln!(out, ":: {:<10}: {}", "Sort", selection.sort.label())?;
    writeln!(out)?;
    Ok(())
}

pub fn render_state<W: Write>(finder: &Finder, out: &mut W) -> io::Result<()> {
    render_panel(finder, out)?;
    let view = finder.view();
    out.write_all(&output::render_text(
        &view,
        finder.selection(),
        PageScope::Current,
    ))?;
    out.flush()
}

// Rejects theme, topic and type ids the taxonomy cannot resolve before they
// reach the draft or the live selection.
fn check_facet_ids(finder: &Finder, event: &FacetEvent) -> Result<(), String> {
    if !matches!(
        event,
        FacetEvent::SetCategory(_) | FacetEvent::SetSubCategory(_) | FacetEvent::SetReleaseType(_)
    ) {
        return Ok(());
    }
    let mut candidate = finder
        .mode()
        .draft()
        .unwrap_or_else(|| finder.selection())
        .clone();
    candidate.apply(event.clone());
    validation::validate_selection(&candidate, finder.catalog().taxonomy())
}

pub fn run_session<R: BufRead, W: Write>(
    finder: &mut Finder,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    info!("interactive session started");
    render_state(finder, out)?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{} {e}", "WRN".bold().yellow())?;
                continue;
            }
        };
        debug!("session command {command:?}");
        match command {
            Command::Quit => break,
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
                continue;
            }
            Command::Themes => {
                out.write_all(render_taxonomy(finder.catalog().taxonomy()).as_bytes())?;
                continue;
            }
            Command::Facet(event) => {
                if let Err(e) = check_facet_ids(finder, &event) {
                    writeln!(out, "{} {e}", "WRN".bold().yellow())?;
                    continue;
                }
                finder.apply(event);
            }
            Command::Mode(action) => {
                if let Err(e) = finder.apply_action(action) {
                    writeln!(out, "{} {e}", "WRN".bold().yellow())?;
                    continue;
                }
            }
        }
        render_state(finder, out)?;
    }
    info!("interactive session ended");
    Ok(())
}
