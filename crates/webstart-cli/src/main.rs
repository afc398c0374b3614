//! Webstart CLI - scaffolding for webpack + Express front-end projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use webstart_core::tui::CreateArgs;
use webstart_core::ScaffoldError;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "webstart")]
#[command(about = "CLI for scaffolding webpack + Express front-end projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name or target directory (`.` for the current directory)
    pub name: Option<String>,

    /// Local directory to use for templates instead of the embedded set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Preview host, no protocol
    #[arg(long)]
    pub preview: Option<String>,

    /// Online host, no protocol
    #[arg(long)]
    pub online: Option<String>,

    /// Framework to wire in (react supported, defaults to pure js)
    #[arg(short = 'F', long)]
    pub framework: Option<String>,

    /// Stylesheet engine (accepted, no preprocessor is wired in yet)
    #[arg(short = 'c', long)]
    pub css: Option<String>,

    /// Skip the existing-directory prompt and merge into the target
    #[arg(short, long)]
    pub force: bool,

    /// Skip .gitignore and README.md generation
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip .eslintrc generation
    #[arg(long = "no-lint")]
    pub no_lint: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            template_dir: args.template_dir,
            preview: args.preview,
            online: args.online,
            framework: args.framework,
            css: args.css,
            force: args.force,
            git: !args.no_git,
            lint: !args.no_lint,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let create_args = match args.command {
        Some(Command::Create(create_args)) => create_args.into(),
        // No subcommand provided, default to interactive create in `.`
        None => CreateArgs::default(),
    };

    let result = webstart_core::run(create_args, CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if let Some(scaffold) = err.downcast_ref::<ScaffoldError>() {
                match scaffold {
                    ScaffoldError::Aborted => {
                        eprintln!("aborting");
                        std::process::exit(1);
                    }
                    ScaffoldError::InvalidName { name, errors } => {
                        eprintln!("{}", format!("Invalid project name: {:?}", name).red());
                        for error in errors {
                            eprintln!("{}", error.red());
                        }
                        std::process::exit(1);
                    }
                    ScaffoldError::TemplateMissing(_) => {}
                }
            }
            Err(err)
        }
    }
}
