use crate::CliError;
use clap::Parser;
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};
use yarn_dedupe::{fix_duplicates, list_duplicates, DedupeOptions, InvalidConfigurationError, Strategy};
use yarn_dedupe_lockfile::Lockfile;

const FAIL_MESSAGE: &str = "Found duplicated entries. Run yarn-dedupe to deduplicate them.";

/// Deduplicate the entries of a yarn v1 lockfile.
#[derive(Debug, Parser)]
#[clap(name = "yarn-dedupe")]
#[clap(bin_name = "yarn-dedupe")]
#[clap(version)]
#[clap(about = "Deduplicate the entries of a yarn v1 lockfile")]
pub struct CliArgs {
    /// Path of the lockfile.
    #[clap(default_value = Lockfile::FILE_NAME)]
    pub lockfile: PathBuf,

    /// Deduplication strategy: highest, fewer, fewerHighest or mostCommon.
    #[clap(short, long, default_value = "fewerHighest")]
    pub strategy: String,

    /// Do not change the lockfile, only list the duplicates.
    #[clap(short, long)]
    pub list: bool,

    /// Exit with status 1 if the lockfile has duplicates.
    #[clap(short, long)]
    pub fail: bool,

    /// Only deduplicate packages of these scopes.
    #[clap(long, num_args = 1..)]
    pub scopes: Vec<String>,

    /// Only deduplicate these packages.
    #[clap(long, num_args = 1..)]
    pub packages: Vec<String>,

    /// Never deduplicate these packages.
    #[clap(long, num_args = 1..)]
    pub exclude: Vec<String>,

    /// Never deduplicate packages of these scopes.
    #[clap(long, num_args = 1..)]
    pub exclude_scopes: Vec<String>,

    /// Print the deduplicated lockfile instead of saving it.
    #[clap(long)]
    pub print: bool,

    /// Let pre-releases satisfy ranges, e.g. ^1.0.0 accepts 1.0.1-alpha.
    #[clap(long, alias = "includePrerelease")]
    pub include_prerelease: bool,
}

impl CliArgs {
    /// Translate the flags into engine options.
    pub fn options(&self) -> Result<DedupeOptions, InvalidConfigurationError> {
        let collect = |items: &[String]| items.iter().cloned().collect();
        let options = DedupeOptions {
            strategy: Strategy::from_name(&self.strategy)?,
            include_scopes: collect(&self.scopes),
            include_packages: collect(&self.packages),
            exclude_packages: collect(&self.exclude),
            exclude_scopes: collect(&self.exclude_scopes),
            include_prerelease: self.include_prerelease,
        };
        options.validate()?;
        Ok(options)
    }

    /// Execute the command.
    pub fn run(self) -> miette::Result<ExitCode> {
        let options = self.options()?;
        let CliArgs { lockfile: path, list, fail, print, .. } = self;

        let text = fs::read_to_string(&path)
            .map_err(|error| CliError::ReadLockfile { path: path.clone(), error })?;

        if list {
            let duplicates = list_duplicates(&text, &options)?;
            for line in &duplicates {
                println!("{line}");
            }
            if duplicates.is_empty() {
                println!("No duplicates found!");
            } else if fail {
                eprintln!("{FAIL_MESSAGE}");
                return Ok(ExitCode::FAILURE);
            }
            return Ok(ExitCode::SUCCESS);
        }

        let deduped = fix_duplicates(&text, &options)?;
        let changed = deduped != text;
        if print {
            print!("{deduped}");
        } else if changed {
            println!("Found duplicates, {} changed", file_name(&path));
            fs::write(&path, &deduped)
                .map_err(|error| CliError::WriteLockfile { path: path.clone(), error })?;
        } else {
            println!("No duplicates found, {} identical", file_name(&path));
        }

        if fail && changed {
            eprintln!("{FAIL_MESSAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name().map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
}
