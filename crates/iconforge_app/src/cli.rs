use std::path::PathBuf;

use anyhow::{bail, Result};

const USAGE: &str = "\
Usage: iconforge_app [OPTIONS] <FILES OR DIRECTORIES>...

Imports the given SVG files (directories are scanned one level deep),
normalizes them, and exports a typed icon-pack module.

Options:
  --out <DIR>           Output directory (default: ./output)
  --collection <NAME>   Group all imported icons into a named collection
                        and export that collection
  --no-manifest         Skip the JSON manifest next to the pack
  --help                Show this message
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub collection: Option<String>,
    pub write_manifest: bool,
}

impl CliOptions {
    /// Parses the argument list. Returns `None` when `--help` was asked for.
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let mut options = Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("./output"),
            collection: None,
            write_manifest: true,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    print!("{USAGE}");
                    return Ok(None);
                }
                "--out" => match args.next() {
                    Some(dir) => options.output_dir = PathBuf::from(dir),
                    None => bail!("--out requires a directory argument"),
                },
                "--collection" => match args.next() {
                    Some(name) if !name.trim().is_empty() => options.collection = Some(name),
                    _ => bail!("--collection requires a non-empty name"),
                },
                "--no-manifest" => options.write_manifest = false,
                flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
                path => options.inputs.push(PathBuf::from(path)),
            }
        }

        if options.inputs.is_empty() {
            bail!("no input files given\n\n{USAGE}");
        }
        Ok(Some(options))
    }
}
