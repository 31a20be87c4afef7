use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use sdk_version_gate::config::{
    DEFAULT_DESCRIPTOR_FILE_NAME, DESCRIPTOR_ENV, DescriptorLocation, EXPECTED_ENV,
};
use sdk_version_gate::report::CheckReport;
use sdk_version_gate::version::{VersionConsistencyChecker, VersionString};

#[derive(Parser)]
#[command(name = "sdk-version-gate")]
#[command(
    version,
    about = "Check that a client SDK version matches its build descriptor"
)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the declared version with the client version (default)
    Check(CheckArgs),
    /// Print the declared version without comparing
    Show(LocationArgs),
}

#[derive(Args, Clone)]
struct CheckArgs {
    /// Version reported by the client
    #[arg(long, env = EXPECTED_ENV, required = true)]
    expected: Option<String>,

    #[command(flatten)]
    location: LocationArgs,
}

#[derive(Args, Clone)]
struct LocationArgs {
    /// Build descriptor path, relative paths resolve against --anchor
    #[arg(long, env = DESCRIPTOR_ENV)]
    descriptor: Option<PathBuf>,

    /// Directory the descriptor is looked up in [default: current directory]
    #[arg(long)]
    anchor: Option<PathBuf>,

    /// Descriptor file name used when --descriptor is not given
    #[arg(long, default_value = DEFAULT_DESCRIPTOR_FILE_NAME)]
    file_name: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl LocationArgs {
    fn resolve(&self) -> PathBuf {
        DescriptorLocation {
            path: self.descriptor.clone(),
            anchor: self.anchor.clone(),
            file_name: self.file_name.clone(),
        }
        .resolve()
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = sdk_version_gate::logging::init()?;

    let checker = VersionConsistencyChecker::new();

    let (report, format) = match cli.command {
        Some(Command::Show(location)) => {
            let descriptor = location.resolve();
            let result = checker.extract(&descriptor);
            (CheckReport::from_extract(&descriptor, &result), location.format)
        }
        Some(Command::Check(args)) => (run_check(&checker, &args), args.location.format),
        None => (run_check(&checker, &cli.check), cli.check.location.format),
    };

    print_report(&report, format)?;

    Ok(if report.status.is_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_check(checker: &VersionConsistencyChecker, args: &CheckArgs) -> CheckReport {
    let expected = expected_version(args).unwrap_or_else(|e| e.exit());

    let descriptor = args.location.resolve();
    let result = checker.verify(&descriptor, &expected);
    CheckReport::from_verify(&descriptor, &expected, &result)
}

/// An empty `--expected` (typically an empty environment variable) is a
/// usage error, reported by clap with its usage exit status.
fn expected_version(args: &CheckArgs) -> Result<VersionString, clap::Error> {
    match args.expected.as_deref() {
        Some(expected) if !expected.is_empty() => Ok(VersionString::from(expected)),
        _ => Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            format!("--expected must not be empty, pass --expected or set {EXPECTED_ENV}"),
        )),
    }
}

fn print_report(report: &CheckReport, format: OutputFormat) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => writeln!(stdout, "{}", report.to_text())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, report)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
