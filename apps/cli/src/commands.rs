//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use relnotify_core::message::{compose_message, last_commit_excerpt};
use relnotify_core::{
    PublishConfig, PublishOutcome, PublishProgress, PublishStage, interpolate, publish_release,
    resolve_assets,
};
use relnotify_shared::{
    AppConfig, Branch, Commit, ReleaseContext, config_dir, init_config, load_config,
    load_config_from,
};
use relnotify_slack::SlackClient;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// relnotify: announce releases in Slack with downloadable artifacts.
#[derive(Parser)]
#[command(
    name = "relnotify",
    version,
    about = "Announce a release in Slack, attach its artifacts, and link them from the announcement.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Post the release announcement and upload its assets.
    Publish {
        #[command(flatten)]
        release: ReleaseArgs,

        /// Slack channel (overrides [slack].channel).
        #[arg(long, env = "RELNOTIFY_CHANNEL")]
        channel: Option<String>,
    },

    /// Resolve assets and print the announcement without contacting Slack.
    Preview {
        #[command(flatten)]
        release: ReleaseArgs,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Release metadata and config location shared by `publish` and `preview`.
#[derive(Args)]
pub(crate) struct ReleaseArgs {
    /// Version being released.
    #[arg(long, env = "RELNOTIFY_VERSION")]
    pub release_version: String,

    /// Release notes text.
    #[arg(long, conflicts_with = "notes_file")]
    pub notes: Option<String>,

    /// File containing the release notes.
    #[arg(long)]
    pub notes_file: Option<PathBuf>,

    /// Commit message in the release, most recent first (repeatable).
    #[arg(long = "commit")]
    pub commits: Vec<String>,

    /// Branch the release was cut from.
    #[arg(long, default_value = "main", env = "RELNOTIFY_BRANCH")]
    pub branch: String,

    /// Mark the branch as a prerelease branch.
    #[arg(long)]
    pub prerelease: bool,

    /// Project directory. Asset patterns and relnotify.toml are looked up here
    /// (defaults to cwd).
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Config file (defaults to <workdir>/relnotify.toml, then ~/.relnotify/relnotify.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Write a default config file.
    Init {
        /// Write to ~/.relnotify instead of the project directory.
        #[arg(long)]
        global: bool,

        /// Project directory to write relnotify.toml into (defaults to cwd).
        #[arg(long, conflicts_with = "global")]
        workdir: Option<PathBuf>,
    },
    /// Show resolved configuration.
    Show {
        /// Config file to show instead of the default lookup.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Project directory whose relnotify.toml is looked up (defaults to cwd).
        #[arg(long)]
        workdir: Option<PathBuf>,
    },
}

/// The project directory: `--workdir` when given, else the cwd.
fn resolve_workdir(workdir: Option<&Path>) -> Result<PathBuf> {
    match workdir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir().map_err(|e| eyre!("cannot determine working directory: {e}")),
    }
}

impl ReleaseArgs {
    fn workdir(&self) -> Result<PathBuf> {
        resolve_workdir(self.workdir.as_deref())
    }

    fn release_context(&self) -> Result<ReleaseContext> {
        let notes = match (&self.notes, &self.notes_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(
                std::fs::read_to_string(path)
                    .map_err(|e| eyre!("cannot read notes file '{}': {e}", path.display()))?,
            ),
            (None, None) => None,
        };

        Ok(ReleaseContext {
            version: self.release_version.clone(),
            notes,
            commits: self.commits.iter().map(Commit::new).collect(),
            branch: Branch {
                name: self.branch.clone(),
                prerelease: self.prerelease,
            },
        })
    }
}

fn load_app_config(path: Option<&Path>, workdir: &Path) -> Result<AppConfig> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => load_config(workdir)?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "relnotify=info",
        1 => "relnotify=debug",
        _ => "relnotify=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Publish { release, channel } => cmd_publish(&release, channel).await,
        Command::Preview { release } => cmd_preview(&release).await,
        Command::Config { action } => match action {
            ConfigAction::Init { global, workdir } => {
                cmd_config_init(global, workdir.as_deref()).await
            }
            ConfigAction::Show { config, workdir } => {
                cmd_config_show(config.as_deref(), workdir.as_deref()).await
            }
        },
    }
}

async fn cmd_publish(args: &ReleaseArgs, channel: Option<String>) -> Result<()> {
    let workdir = args.workdir()?;
    let mut config = load_app_config(args.config.as_deref(), &workdir)?;
    if let Some(channel) = channel {
        config.slack.channel = channel;
    }

    // Fail on missing channel/token before touching the filesystem or Slack.
    let client = SlackClient::from_config(&config.slack)?;
    let release = args.release_context()?;

    let publish_config = PublishConfig {
        channel: config.slack.channel.clone(),
        workdir,
        notify: config.notify,
    };

    info!(
        version = %release.version,
        branch = %release.branch.name,
        channel = %publish_config.channel,
        "publishing release announcement"
    );

    let reporter = CliProgress::new();
    let outcome = publish_release(&client, &publish_config, &release, &reporter).await?;

    println!();
    match outcome {
        PublishOutcome::Skipped => {
            println!("  Skipped: prerelease announcements are disabled.");
        }
        PublishOutcome::Published {
            channel,
            message_id,
            links,
        } => {
            println!("  Release {} announced!", release.version);
            println!("  Channel: {channel}");
            println!("  Message: {message_id}");
            println!("  Assets:  {}", links.len());
        }
        PublishOutcome::PostedWithoutLinks {
            channel,
            message_id,
        } => {
            println!("  Release {} announced (no download links).", release.version);
            println!("  Channel: {channel}");
            println!("  Message: {message_id}");
        }
    }
    println!();

    Ok(())
}

async fn cmd_preview(args: &ReleaseArgs) -> Result<()> {
    let workdir = args.workdir()?;
    let config = load_app_config(args.config.as_deref(), &workdir)?;
    let release = args.release_context()?;
    let effective = config.notify.effective_for(&release.branch);

    if release.branch.prerelease && !effective.prerelease_enabled {
        println!("Prerelease announcements are disabled; publish would skip this release.");
        return Ok(());
    }

    let assets = resolve_assets(&effective.assets, &release, &workdir)?;

    let headline = interpolate(&effective.message_template, &release);
    let excerpt = if effective.include_last_commit_text {
        last_commit_excerpt(&release.commits)
    } else {
        String::new()
    };
    let body = compose_message(&headline, &effective, &excerpt, release.notes_or_empty());

    println!("{}", body.trim_end());
    println!();
    println!("--- {} asset(s) ---", assets.len());
    for (path, label) in assets.iter() {
        println!("{label}: {}", path.display());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl PublishProgress for CliProgress {
    fn stage(&self, stage: PublishStage) {
        match stage {
            PublishStage::Resolving => self.spinner.set_message("Resolving assets"),
            PublishStage::Posted => self.spinner.set_message("Posting announcement"),
            PublishStage::Uploading => self.spinner.set_message("Uploading assets"),
            PublishStage::Updated => self.spinner.set_message("Announcement updated"),
            PublishStage::Failed => self.spinner.finish_and_clear(),
            PublishStage::Idle => {}
        }
    }

    fn asset_uploaded(&self, label: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Uploaded [{current}/{total}] {label}"));
    }

    fn done(&self, _outcome: &PublishOutcome) {
        self.spinner.finish_and_clear();
    }
}

async fn cmd_config_init(global: bool, workdir: Option<&Path>) -> Result<()> {
    let dir = if global {
        config_dir()?
    } else {
        resolve_workdir(workdir)?
    };
    let path = init_config(&dir)?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(path: Option<&Path>, workdir: Option<&Path>) -> Result<()> {
    let workdir = resolve_workdir(workdir)?;
    let config = load_app_config(path, &workdir)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
