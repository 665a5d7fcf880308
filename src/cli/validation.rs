use crate::catalog::{ReleaseType, Taxonomy};
use crate::cli::args::CliArgs;
use crate::facets::{FacetSelection, SortOrder};
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if args.page == Some(0) {
        return Err("invalid --page, expected a positive integer (pages start at 1)".to_string());
    }
    if let Some(raw) = args.sort.as_deref() {
        if SortOrder::parse(raw).is_none() {
            return Err(format!(
                "invalid --sort '{raw}', expected newest or alphabetical"
            ));
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected text or json"
            ));
        }
    }
    if args.interactive && args.all_pages {
        return Err("use either --interactive or --all-pages, not both".to_string());
    }
    if args.interactive && (args.output.is_some() || args.output_format.is_some()) {
        return Err(
            "--interactive writes to the terminal, drop --output and --output-format".to_string(),
        );
    }
    Ok(())
}

/// Rejects facet ids that the taxonomy cannot resolve.
pub fn validate_selection(selection: &FacetSelection, taxonomy: &Taxonomy) -> Result<(), String> {
    if let Some(theme) = selection.category.id() {
        if taxonomy.theme(theme).is_none() {
            let known: Vec<&str> = taxonomy.themes().iter().map(|t| t.id.as_str()).collect();
            return Err(format!(
                "unknown theme '{theme}', expected one of: all, {}",
                known.join(", ")
            ));
        }
    }
    if let Some(topic) = selection.sub_category.id() {
        if taxonomy
            .topic_title(selection.category.id(), topic)
            .is_none()
        {
            return Err(match selection.category.id() {
                Some(theme) => format!("unknown topic '{topic}' for theme '{theme}'"),
                None => format!("unknown topic '{topic}'"),
            });
        }
    }
    if let Some(release_type) = selection.release_type.id() {
        if ReleaseType::parse(release_type).is_none() {
            let known: Vec<&str> = ReleaseType::ALL.iter().map(|t| t.id()).collect();
            return Err(format!(
                "unknown release type '{release_type}', expected one of: all, {}",
                known.join(", ")
            ));
        }
    }
    Ok(())
}
