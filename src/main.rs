use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use compatscope::config::{Settings, DEFAULT_BASE_PATH};
use compatscope::dataset::{parse_file, Dataset};
use compatscope::export::{self, ExportData, ExportFormat};
use compatscope::loader::{spawn_load, DataLoader, DefaultFetcher};
use compatscope::logging::{self, LogTarget};
use compatscope::ui::{run_app, App};
use compatscope::views::Summary;

#[derive(Parser)]
#[command(name = "compatscope")]
#[command(version)]
#[command(about = "Terminal dashboard for application / base-package version compatibility", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Directory or URL holding sample-data.json
    #[arg(long, global = true, default_value = DEFAULT_BASE_PATH)]
    base: String,

    /// Read this local document instead of fetching one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Write dashboard logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl From<GlobalArgs> for Settings {
    fn from(args: GlobalArgs) -> Self {
        Settings {
            base: args.base,
            file: args.file,
            log_file: args.log_file,
            verbose: args.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard,
    /// Print application, unique package and risk counts
    Summary,
    /// Write the dependency network and report in another format
    Export {
        /// Output format: json, csv or markdown
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from(cli.global);
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let target = match (&command, &settings.log_file) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Dashboard, None) => LogTarget::Off,
        _ => LogTarget::Stderr,
    };
    logging::init(target, settings.log_level()).context("failed to set up logging")?;

    match command {
        Commands::Dashboard => run_dashboard(&settings),
        Commands::Summary => {
            let dataset = load_blocking(&settings)?;
            let summary = Summary::from_dataset(&dataset);
            println!("Applications:            {}", summary.applications);
            println!("Unique package versions: {}", summary.unique_packages);
            println!("Risk factors:            {}", summary.risk_factors);
            Ok(())
        }
        Commands::Export { format, output } => {
            let dataset = load_blocking(&settings)?;
            let data = ExportData::new(&dataset);
            write_export(format, &data, output)
        }
        Commands::Version => {
            println!("compatscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn loader(settings: &Settings) -> Result<DataLoader<DefaultFetcher>> {
    let fetcher = DefaultFetcher::new().context("failed to build HTTP client")?;
    Ok(DataLoader::new(
        fetcher,
        settings.primary_location(),
        settings.fallback_location(),
    ))
}

/// Load the dataset on the current thread, for the non-interactive commands
fn load_blocking(settings: &Settings) -> Result<Dataset> {
    if let Some(path) = &settings.file {
        return parse_file(path).with_context(|| format!("failed to read {}", path.display()));
    }
    let loader = loader(settings)?;
    loader.load().context("could not load compatibility data")
}

fn write_export(format: ExportFormat, data: &ExportData<'_>, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::export(format, data, &mut writer)
                .and_then(|()| writer.flush())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(%format, path = %path.display(), "export written");
            eprintln!("Exported {} to {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(format, data, &mut writer).context("failed to write export")?;
        }
    }
    Ok(())
}

fn run_dashboard(settings: &Settings) -> Result<()> {
    let mut app = match &settings.file {
        // A local override replaces the fetch entirely
        Some(path) => {
            let mut app = App::new();
            let dataset = parse_file(path).with_context(|| format!("failed to read {}", path.display()))?;
            app.set_dataset(dataset);
            app
        }
        None => App::loading(spawn_load(loader(settings)?)),
    };

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal even if the event loop failed
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result.context("dashboard event loop failed")
}
