use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "statsfinder",
    version,
    about = "faceted search over a statistics publication catalogue",
    long_about = "statsfinder filters, sorts and paginates a catalogue of statistics publications by free-text query, theme, topic and release type.\n\nExamples:\n  statsfinder --theme schools\n  statsfinder -q absence --type accredited-official --sort title\n  statsfinder --fixtures ./publications.yml -A json -o results.json\n  statsfinder --interactive\n\nTip: Use --config to persist default facets and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "query",
        visible_alias = "search",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Keep publications whose title or summary contains TEXT (case-insensitive)."
    )]
    pub query: Option<String>,

    #[arg(
        short = 't',
        long = "theme",
        visible_alias = "category",
        value_name = "ID",
        help_heading = "Filters",
        help = "Theme id, or 'all'."
    )]
    pub theme: Option<String>,

    #[arg(
        long = "topic",
        visible_alias = "sub-category",
        value_name = "ID",
        help_heading = "Filters",
        help = "Topic id, or 'all'. Resolved across every theme when no theme is selected."
    )]
    pub topic: Option<String>,

    #[arg(
        short = 'y',
        long = "type",
        visible_alias = "release-type",
        value_name = "ID",
        help_heading = "Filters",
        help = "Release type id (e.g. accredited-official, ad-hoc), or 'all'."
    )]
    pub release_type: Option<String>,

    #[arg(
        short = 's',
        long = "sort",
        value_name = "ORDER",
        help_heading = "Results",
        help = "Sort order: newest or alphabetical."
    )]
    pub sort: Option<String>,

    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        help_heading = "Results",
        help = "Page to show (1-based, 10 results per page)."
    )]
    pub page: Option<usize>,

    #[arg(
        short = 'a',
        long = "all-pages",
        help_heading = "Results",
        help = "Show every page instead of a single page."
    )]
    pub all_pages: bool,

    #[arg(
        short = 'f',
        long = "fixtures",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load publications from a JSON or YAML file instead of the built-in catalogue."
    )]
    pub fixtures: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.statsfinder/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write a commented default config file and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'i',
        long = "interactive",
        help_heading = "Mode",
        help = "Read filter commands from stdin and re-render after each one."
    )]
    pub interactive: bool,

    #[arg(
        long = "list-themes",
        help_heading = "Mode",
        help = "List theme, topic and release type ids and exit."
    )]
    pub list_themes: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write results to a file."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (text or json)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'n',
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}
