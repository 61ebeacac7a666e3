//! `crudsmith guidelines`: publish the bundled CRUD conventions document
//! into a project, for assistants and new contributors.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::GuidelinesArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const GUIDELINES: &str = include_str!("../../assets/guidelines.md");

/// Location under the project root.
const TARGET: &str = ".ai/guidelines/crudsmith.md";

pub fn execute(args: GuidelinesArgs, output: OutputManager) -> CliResult<()> {
    if !args.path.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("project root {} is not a directory", args.path.display()),
        });
    }

    let published = publish(&args.path, args.force)?;
    info!(path = %published.path.display(), "guidelines published");

    if let Some(dir) = &published.created_dir {
        output.info(&format!("Created directory: {}", dir.display()))?;
    }
    output.success(&format!(
        "Guidelines published to {}",
        published.path.display()
    ))?;
    output.info("Edit the file to match your project's conventions.")?;
    Ok(())
}

#[derive(Debug)]
struct Published {
    path: PathBuf,
    created_dir: Option<PathBuf>,
}

fn publish(root: &Path, force: bool) -> CliResult<Published> {
    let path = root.join(TARGET);
    if path.exists() && !force {
        return Err(CliError::GuidelinesExist { path });
    }

    let mut created_dir = None;
    if let Some(dir) = path.parent() {
        if !dir.is_dir() {
            std::fs::create_dir_all(dir).with_cli_context(|| {
                format!("Failed to create directory '{}'", dir.display())
            })?;
            created_dir = Some(dir.to_path_buf());
        }
    }

    std::fs::write(&path, GUIDELINES)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(Published { path, created_dir })
}
