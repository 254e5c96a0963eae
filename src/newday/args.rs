use clap::Parser;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "newday", version = get_version())]
#[command(about = "Generate today's note and include it in the index", long_about = None)]
pub struct Cli {
    /// File extension of the note [default: typ]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Number of empty subheadings [default: 3]
    #[arg(short, long)]
    pub subheading: Option<u32>,

    /// Titles joined into the heading (e.g. -t Parser Scanner)
    #[arg(short, long, num_args = 1..)]
    pub title: Vec<String>,

    /// Rewrite today's note if it already exists
    #[arg(short, long)]
    pub overwrite: bool,

    /// Index file to append the include to [default: main.typ]
    #[arg(long, value_name = "FILE")]
    pub index: Option<String>,

    /// Add a page break after the include, even if config disables it
    #[arg(long, overrides_with = "no_page_break")]
    pub page_break: bool,

    /// Do not add a page break after the include
    #[arg(long, overrides_with = "page_break")]
    pub no_page_break: bool,

    /// Generate the note for another day (YYYY-MM-DD or YYYYMMDD)
    #[arg(long)]
    pub date: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Page break choice from the flags; `None` defers to config.
    pub fn page_break_override(&self) -> Option<bool> {
        if self.page_break {
            Some(true)
        } else if self.no_page_break {
            Some(false)
        } else {
            None
        }
    }
}
