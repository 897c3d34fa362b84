use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::error;

use tw_theme::config::{
    find_config, LoaderOptions, DEFAULT_JS_RUNTIME, DEFAULT_TS_TRANSPILER,
};
use tw_theme::error::{ErrorSeverity, ThemeConfigError};
use tw_theme::logging::{self, LogOptions, FILE_ONLY_TARGET};
use tw_theme::Project;

#[derive(Parser)]
#[command(name = "tw-theme", version)]
#[command(about = "Load a Tailwind-style config and resolve its theme")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Also append JSONL logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
    /// Config file (default: first tailwind.config.* in the current directory)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// JS runtime used to evaluate .js/.ts configs
    #[arg(long, default_value = DEFAULT_JS_RUNTIME)]
    runtime: String,

    /// Bundler used to compile .ts configs before evaluation
    #[arg(long, default_value = DEFAULT_TS_TRANSPILER)]
    ts_transpiler: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged theme as JSON
    Resolve {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Validate the config and report likely authoring errors
    Check {
        #[command(flatten)]
        config: ConfigArgs,

        /// Exit non-zero when any issue is reported
        #[arg(long)]
        deny_warnings: bool,
    },
    /// List the files matched by the content globs
    Scan {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Scan content and write the stylesheet
    Build {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init(&LogOptions {
        verbose: cli.verbose,
        log_file: cli.log_file.clone(),
    });

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            let (label, message) = match e.downcast_ref::<ThemeConfigError>() {
                Some(config_error) if config_error.severity() == ErrorSeverity::Warning => {
                    ("Warning", config_error.user_message())
                }
                Some(config_error) => ("Error", config_error.user_message()),
                None => ("Error", format!("{:#}", e)),
            };
            error!(
                target: FILE_ONLY_TARGET,
                error = %format!("{:#}", e),
                "Command failed"
            );
            eprintln!("{}: {}", label, message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Resolve { config } => {
            let project = load_project(&config)?;
            let json = serde_json::to_string_pretty(&project.theme)
                .context("Failed to serialize theme")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            config,
            deny_warnings,
        } => {
            let project = load_project(&config)?;
            for issue in &project.issues {
                println!("warning: {}", issue);
            }
            println!(
                "{}: {} issue(s)",
                project.config_path.display(),
                project.issues.len()
            );
            if deny_warnings && !project.issues.is_empty() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Commands::Scan { config } => {
            let project = load_project(&config)?;
            for path in project.scan() {
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Build { config, output } => {
            let project = load_project(&config)?;
            let css = project.build_css();
            match output {
                Some(path) => {
                    let path = expand(&path);
                    std::fs::write(&path, css)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
                None => print!("{}", css),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_project(args: &ConfigArgs) -> Result<Project> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let config_path = match &args.config {
        Some(path) => expand(path),
        None => find_config(&cwd).ok_or_else(|| ThemeConfigError::NotFound(cwd.clone()))?,
    };
    let options = LoaderOptions {
        js_runtime: args.runtime.clone(),
        ts_transpiler: args.ts_transpiler.clone(),
    };
    Ok(Project::load(&config_path, &options, &cwd)?)
}

fn expand(path: &std::path::Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
}
