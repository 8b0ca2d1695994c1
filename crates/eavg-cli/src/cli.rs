use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const LEGACY_AXIS_FLAGS: [&str; 3] = ["-dx", "-dy", "-dz"];

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "eavg - weighted average kinetic energy per particle species from PIC simulation snapshots.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Snapshot files to process, in order (.h5/.hdf5/.hdf or .json).
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Whitespace-separated species tags [default: "H+ H2+ H3+"].
    #[arg(short, long, value_name = "TAGS")]
    pub species: Option<String>,

    /// Only count particles inside the box given by --dx, --dy and --dz.
    #[arg(short = 'F', long)]
    pub filter: bool,

    /// Also write the cross-species summary series.
    #[arg(short = 'S', long)]
    pub sum: bool,

    /// Filter bounds along x as "LO HI" [default: "-7.0 7.0"].
    #[arg(long, value_name = "\"LO HI\"", allow_hyphen_values = true)]
    pub dx: Option<String>,

    /// Filter bounds along y as "LO HI" [default: "8 9.5"].
    #[arg(long, value_name = "\"LO HI\"", allow_hyphen_values = true)]
    pub dy: Option<String>,

    /// Filter bounds along z as "LO HI" [default: "164.0 165.6"].
    #[arg(long, value_name = "\"LO HI\"", allow_hyphen_values = true)]
    pub dz: Option<String>,

    /// Suffix for output file names.
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Directory the series files are written to [default: .].
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML file supplying defaults for any of the options above.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses `args` after rewriting the single-dash axis flags.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_legacy_args(args))
    }
}

/// Rewrites `-dx`, `-dy` and `-dz` (also in `-dx=...` form) to their
/// double-dash spelling. Everything after a bare `--` is left alone.
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let is_legacy = LEGACY_AXIS_FLAGS.iter().any(|flag| {
                text == *flag || text.strip_prefix(flag).is_some_and(|rest| rest.starts_with('='))
            });
            if is_legacy {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
