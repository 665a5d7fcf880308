use colored::Colorize;
use serde::Serialize;

use crate::catalog::Record;
use crate::facets::FacetSelection;
use crate::view::{clamp_page, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageScope {
    #[default]
    Current,
    All,
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputRecord {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub theme: String,
    pub topic: Option<String>,
    pub release_type: String,
    pub published: String,
}

impl From<&Record> for OutputRecord {
    fn from(r: &Record) -> Self {
        Self {
            slug: r.slug.clone(),
            title: r.title.clone(),
            summary: r.summary.clone(),
            theme: r.theme.clone(),
            topic: r.topic.clone(),
            release_type: r.release_type.label().to_string(),
            published: r.published.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputPage {
    pub page: usize,
    pub records: Vec<OutputRecord>,
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputView {
    pub total_count: usize,
    pub page_count: usize,
    // 0 when there are no results
    pub page: usize,
    pub selection: FacetSelection,
    pub pages: Vec<OutputPage>,
}

pub fn build_output(view: &View<'_>, selection: &FacetSelection, scope: PageScope) -> OutputView {
    let current = clamp_page(selection.page, view.page_count());
    let pages = view
        .pages()
        .iter()
        .enumerate()
        .filter(|(index, _)| scope == PageScope::All || *index == current)
        .map(|(index, records)| OutputPage {
            page: index + 1,
            records: records.iter().map(|r| OutputRecord::from(*r)).collect(),
        })
        .collect();
    OutputView {
        total_count: view.total_count(),
        page_count: view.page_count(),
        page: if view.is_empty() { 0 } else { current + 1 },
        selection: selection.clone(),
        pages,
    }
}

pub fn render_json(output: &OutputView) -> Result<Vec<u8>, String> {
    let mut out = serde_json::to_vec_pretty(output)
        .map_err(|e| format!("failed to serialize results: {e}"))?;
    out.push(b'\n');
    Ok(out)
}

fn record_meta(r: &Record) -> String {
    let mut parts: Vec<String> = vec![r.theme.clone()];
    if let Some(topic) = r.topic.as_deref() {
        parts.push(topic.to_string());
    }
    parts.push(r.release_type.label().to_string());
    parts.push(r.published.format("%-d %B %Y").to_string());
    parts.join(" | ")
}

fn render_record(out: &mut String, r: &Record) {
    out.push_str(&format!("  {}\n", r.title.bold()));
    out.push_str(&format!("  {}\n", record_meta(r).dimmed()));
    if !r.summary.trim().is_empty() {
        out.push_str(&format!("  {}\n", r.summary.trim()));
    }
    out.push('\n');
}

fn results_heading(total: usize) -> String {
    match total {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    }
}

pub fn render_text(view: &View<'_>, selection: &FacetSelection, scope: PageScope) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(&format!("{}\n", results_heading(view.total_count()).bold()));

    if view.is_empty() {
        out.push_str(&format!("{}\n", "No matching results".yellow()));
        if selection.has_active_filters() {
            out.push_str("Try removing some filters or clearing your search.\n");
        }
        return out.into_bytes();
    }

    let current = clamp_page(selection.page, view.page_count());
    let indices: Vec<usize> = match scope {
        PageScope::Current => vec![current],
        PageScope::All => (0..view.page_count()).collect(),
    };
    for index in indices {
        let Some(summary) = view.summary(index) else {
            continue;
        };
        out.push_str(&format!("{}\n\n", summary.to_string().dimmed()));
        for r in view.page(index).unwrap_or_default() {
            render_record(&mut out, r);
        }
        let mut nav = format!("Page {} of {}", summary.page + 1, summary.page_count);
        if scope == PageScope::Current {
            if summary.has_previous() {
                nav.push_str(&format!("  < previous: page {}", summary.page));
            }
            if summary.has_next() {
                nav.push_str(&format!("  > next: page {}", summary.page + 2));
            }
        }
        out.push_str(&format!("{}\n", nav.cyan()));
    }
    out.into_bytes()
}
