use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod action;
mod add_frontmatter;
mod convert_files;
mod error;
mod utils;

use add_frontmatter::{add_frontmatter, FrontmatterOptions};
use convert_files::{convert_files, ConvertOptions};
use error::{Error, Result};

#[derive(StructOpt, Debug)]
#[structopt(name = "docmend")]
pub enum CliCommand {
    /// Prepends a title/description block to Markdown files lacking one.
    #[structopt(name = "frontmatter")]
    Frontmatter {
        #[structopt(short = "r", long = "root", parse(from_os_str))]
        root: Option<PathBuf>,

        #[structopt(short = "d", long = "dry")]
        dry: bool,

        #[structopt(short = "v", long = "verbose")]
        verbose: bool,

        #[structopt(long = "fallback-description", default_value = "Documentation for SVYP platform")]
        fallback_description: String,
    },

    /// Renames Markdown files to a new extension and updates the manifest.
    #[structopt(name = "convert")]
    Convert {
        #[structopt(short = "r", long = "root", parse(from_os_str))]
        root: Option<PathBuf>,

        #[structopt(short = "d", long = "dry")]
        dry: bool,

        #[structopt(short = "v", long = "verbose")]
        verbose: bool,

        #[structopt(long = "from", default_value = "md")]
        from: String,

        #[structopt(long = "to", default_value = "mdx")]
        to: String,

        #[structopt(
            short = "m",
            long = "manifest",
            parse(from_os_str),
            default_value = "docs.json"
        )]
        manifest: PathBuf,

        #[structopt(long = "readme", default_value = "README.md")]
        readme: String,
    },
}

impl CliCommand {
    fn verbose(&self) -> bool {
        match self {
            CliCommand::Frontmatter { verbose, .. } | CliCommand::Convert { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "docmend=debug"
        } else {
            "docmend=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir().map_err(|e| Error::io(Path::new("."), e))?,
    };
    std::fs::canonicalize(&root).map_err(|e| Error::io(&root, e))
}

fn main() -> Result<()> {
    let cmd = CliCommand::from_args();
    init_tracing(cmd.verbose());

    match cmd {
        CliCommand::Frontmatter {
            root,
            dry,
            fallback_description,
            ..
        } => {
            let options = FrontmatterOptions {
                fallback_description,
                ..FrontmatterOptions::new(project_root(root)?)
            };
            add_frontmatter(&options, dry)?;
        }

        CliCommand::Convert {
            root,
            dry,
            from,
            to,
            manifest,
            readme,
            ..
        } => {
            let options = ConvertOptions {
                from,
                to,
                manifest,
                readme,
                ..ConvertOptions::new(project_root(root)?)
            };
            convert_files(&options, dry)?;
        }
    }

    Ok(())
}
