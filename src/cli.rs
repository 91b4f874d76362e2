//! Command-line interface implementation

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, loader, merge_cli_overrides, parse_dimensions, CliOverrides};
use crate::geometry::Size;
use crate::logging;
use crate::output::OutputPaths;
use crate::pipeline::{build_atlas, BuildOutcome};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pack a directory of sprites into one atlas image and a JSON manifest.
///
/// Writes {OUTPUT}.png and {OUTPUT}.json. By default the atlas is only
/// rebuilt when the sprite directory changed since the last run.
#[derive(Parser, Debug)]
#[command(name = "atlas-packer")]
#[command(version)]
pub struct Cli {
    /// Directory containing only sprite images; anything else is an error
    pub sprite_dir: PathBuf,

    /// Output base name ({OUTPUT}.png and {OUTPUT}.json)
    pub output: PathBuf,

    /// Size of the final atlas (e.g., "1024x1024")
    #[arg(long, value_parser = parse_size_arg)]
    pub dimensions: Option<Size>,

    /// Space inserted between sprites, in pixels
    #[arg(long)]
    pub space: Option<u32>,

    /// Always rebuild the atlas
    #[arg(long)]
    pub force: bool,

    /// Write the manifest without indentation
    #[arg(long)]
    pub compact: bool,

    /// Config file (default: search for atlas-packer.toml upward from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_size_arg(s: &str) -> Result<Size, String> {
    parse_dimensions(s).map(|(w, h)| Size::new(w, h)).map_err(|e| e.to_string())
}

impl Cli {
    /// Overrides carried by the flags that were actually given
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            size: self.dimensions.map(|s| (s.width, s.height)),
            space: self.space,
            force: self.force.then_some(true),
            pretty: self.compact.then_some(false),
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run_pack(&cli)
}

/// Execute a packing run for parsed arguments
pub fn run_pack(cli: &Cli) -> ExitCode {
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };
    merge_cli_overrides(&mut config, &cli.overrides());
    if let Err(e) = loader::validate(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let paths = OutputPaths::from_base(&cli.output);
    match build_atlas(&cli.sprite_dir, &paths, &config) {
        Ok(BuildOutcome::Skipped) => {
            println!("{} is up to date (use --force to rebuild)", paths.image.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(BuildOutcome::Built { sprites }) => {
            println!(
                "Packed {} sprites into {} and {}",
                sprites,
                paths.image.display(),
                paths.manifest.display()
            );
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "atlas-packer",
            "--dimensions",
            "512x256",
            "--space",
            "0",
            "--force",
            "--compact",
            "-v",
            "sprites",
            "build/atlas",
        ])
        .unwrap();
        assert_eq!(cli.sprite_dir, PathBuf::from("sprites"));
        assert_eq!(cli.output, PathBuf::from("build/atlas"));
        assert_eq!(cli.dimensions, Some(Size::new(512, 256)));
        assert!(cli.verbose);

        let overrides = cli.overrides();
        assert_eq!(overrides.size, Some((512, 256)));
        assert_eq!(overrides.space, Some(0));
        assert_eq!(overrides.force, Some(true));
        assert_eq!(overrides.pretty, Some(false));
    }

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = Cli::try_parse_from(["atlas-packer", "sprites", "out"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.size.is_none());
        assert!(overrides.space.is_none());
        assert!(overrides.force.is_none());
        assert!(overrides.pretty.is_none());
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let result = Cli::try_parse_from(["atlas-packer", "--dimensions", "big", "sprites", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_positionals_rejected() {
        assert!(Cli::try_parse_from(["atlas-packer", "sprites"]).is_err());
    }
}
