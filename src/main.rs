//! rekishi - study-note renderer

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rekishi::export::{Exporter, HtmlConfig, HtmlExporter};
use rekishi::review::store::{DEFAULT_KEY, default_dir};
use rekishi::view::CLEAR_CONFIRM;
use rekishi::{Document, Error, FileStore, ReviewStore, ReviewView, StudyView, ViewConfig, ViewState};

#[derive(Parser)]
#[command(name = "rekishi")]
#[command(version, about = "Study-note renderer with a persisted review list", long_about = None)]
#[command(after_help = "EXAMPLES:
    rekishi study bakumatsu.json -o index.html    Render the full listing
    rekishi check q1 q2                           Mark items for review
    rekishi review bakumatsu.json -o my-q.html    Render the review listing
    rekishi clear --yes                           Empty the review list")]
struct Cli {
    /// Directory holding the review record
    #[arg(long, global = true, env = "REKISHI_STATE_DIR", value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Name of the review record
    #[arg(long, global = true, default_value = DEFAULT_KEY, value_name = "KEY")]
    key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every item with concealed blanks
    Study {
        /// Study data file (JSON)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Render only the items marked for review
    Review {
        /// Study data file (JSON)
        #[arg(value_name = "DATA")]
        data: PathBuf,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Mark items for review
    Check {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
    /// Remove items from the review list
    Uncheck {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },
    /// Print the review list, one id per line
    List,
    /// Empty the review list
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Page title
    #[arg(long, default_value = "")]
    title: String,

    /// Stylesheet linked from the page
    #[arg(long, value_name = "HREF")]
    stylesheet: Option<String>,

    /// Target of the back-to-listing button and empty-state link
    #[arg(long, default_value = "index.html", value_name = "HREF")]
    listing: String,

    /// Emit only the mount point's inner markup
    #[arg(long)]
    fragment: bool,
}

impl PageArgs {
    fn view_config(&self, key: &str) -> ViewConfig {
        let mut config = ViewConfig::default()
            .with_title(&self.title)
            .with_listing_href(&self.listing)
            .with_storage_key(key);
        if let Some(href) = &self.stylesheet {
            config = config.with_stylesheet(href);
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> rekishi::Result<()> {
    let dir = cli.state_dir.unwrap_or_else(default_dir);
    let mut store = FileStore::in_dir(&dir, &cli.key);
    tracing::debug!(path = %store.path().display(), "review record");

    match cli.command {
        Command::Study { data, page } => {
            let view = StudyView::open(page.view_config(&cli.key), &data);
            write_page(view.tree(), view.config(), &page)?;
            check_loaded(view.state(), &data)
        }
        Command::Review { data, page } => {
            let mut view = ReviewView::new(page.view_config(&cli.key), store);
            view.finish_load(Document::load(&data));
            if view.state() == ViewState::Empty {
                tracing::info!("review list is empty");
            }
            write_page(view.tree(), view.config(), &page)?;
            check_loaded(view.state(), &data)
        }
        Command::Check { ids } => {
            let mut set = store.load();
            for id in ids {
                set.check(id);
            }
            store.save(&set)
        }
        Command::Uncheck { ids } => {
            let mut set = store.load();
            for id in &ids {
                if !set.uncheck(id) {
                    tracing::warn!(id = %id, "not in the review list");
                }
            }
            store.save(&set)
        }
        Command::List => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for id in store.load().iter() {
                writeln!(out, "{id}")?;
            }
            Ok(())
        }
        Command::Clear { yes } => {
            if yes || confirm_on_stdin(CLEAR_CONFIRM)? {
                store.clear()?;
            }
            Ok(())
        }
    }
}

/// A view that failed to load still writes its error page. The command
/// then fails so scripts notice; the view has already logged the cause.
fn check_loaded(state: ViewState, data: &Path) -> rekishi::Result<()> {
    if state == ViewState::Failed {
        return Err(Error::Load(data.display().to_string()));
    }
    Ok(())
}

fn write_page(
    tree: &rekishi::dom::DomTree,
    config: &ViewConfig,
    page: &PageArgs,
) -> rekishi::Result<()> {
    let mut html_config = HtmlConfig::from(config);
    html_config.fragment = page.fragment;
    let exporter = HtmlExporter::new().with_config(html_config);

    match &page.output {
        Some(path) => export_to_file(&exporter, tree, path),
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            exporter.export(tree, &mut out)?;
            Ok(())
        }
    }
}

fn export_to_file(
    exporter: &HtmlExporter,
    tree: &rekishi::dom::DomTree,
    path: &Path,
) -> rekishi::Result<()> {
    let mut file = File::create(path)?;
    exporter.export(tree, &mut file)?;
    Ok(())
}

fn confirm_on_stdin(message: &str) -> io::Result<bool> {
    eprint!("{message} [y/N] ");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
