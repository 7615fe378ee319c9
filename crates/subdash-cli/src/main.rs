use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use subdash_core::config::{DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
use subdash_core::manifest::reader::DEFAULT_MANIFEST_PATH;
use subdash_core::{generate_dashboard, render_dashboard, DashboardConfig, ErrorKind, RunSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "subdash",
    version,
    about = "Render a Markdown status dashboard for git submodules"
)]
struct Cli {
    /// Submodule manifest to read
    #[arg(long, env = "SUBDASH_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    /// Dashboard file to (over)write; its directory must exist
    #[arg(short, long, env = "SUBDASH_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory that manifest, output, config and submodule paths are relative to
    #[arg(long, env = "SUBDASH_ROOT", default_value = ".")]
    root: PathBuf,

    /// YAML config file (default: .subdash.yml when present)
    #[arg(long, env = "SUBDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Output format: markdown or json
    #[arg(long, env = "SUBDASH_FORMAT", default_value = "markdown")]
    format: String,

    /// Git backend: cli or libgit2
    #[arg(long, env = "SUBDASH_BACKEND", default_value = "cli")]
    backend: String,

    /// Git executable used by the cli backend
    #[arg(long = "git", env = "SUBDASH_GIT", default_value = "git")]
    git_program: String,

    /// Only include submodules whose path or name matches (comma-separated globs)
    #[arg(long, env = "SUBDASH_INCLUDE", value_delimiter = ',')]
    include: Option<Vec<String>>,

    /// Skip submodules whose path or name matches (comma-separated globs)
    #[arg(long, env = "SUBDASH_EXCLUDE", value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Print the document instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => 0,
        Err(e) => {
            if let Some(kind) = error_kind(&e) {
                tracing::debug!(?kind, "run failed");
            }
            eprintln!("Error: {e:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Install the stderr subscriber; `RUST_LOG` overrides the default filter
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "subdash=debug,subdash_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Category of the library error behind a failed run, if any
fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<subdash_core::Error>().map(subdash_core::Error::kind)
}

/// Filter empty strings from Vec (env vars may produce [""] for empty values)
fn clean_vec(v: &Option<Vec<String>>) -> Vec<String> {
    v.iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn build_settings(cli: &Cli) -> anyhow::Result<RunSettings> {
    let mut settings = RunSettings::with_root(&cli.root);
    settings.manifest = cli.manifest.clone();
    settings.output = cli.output.clone();
    settings.format = cli.format.parse()?;
    settings.backend = cli.backend.parse()?;
    settings.git_program = cli.git_program.clone().into();

    settings.dashboard = match &cli.config {
        Some(path) => DashboardConfig::load(&settings.resolve(path))?,
        None => DashboardConfig::load_or_default(&settings.resolve(Path::new(DEFAULT_CONFIG_PATH)))?,
    };
    settings.dashboard.include.extend(clean_vec(&cli.include));
    settings.dashboard.exclude.extend(clean_vec(&cli.exclude));

    Ok(settings)
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let settings = build_settings(cli)?;
    tracing::debug!(
        root = %settings.root.display(),
        manifest = %settings.manifest.display(),
        backend = ?settings.backend,
        "starting"
    );

    if cli.stdout {
        let document = render_dashboard(&settings)?;
        out.write_all(document.as_bytes())?;
        return Ok(());
    }

    generate_dashboard(&settings)
        .with_context(|| format!("failed to generate {}", cli.output.display()))?;
    writeln!(out, "Dashboard generated at {}", cli.output.display())?;
    Ok(())
}
