use clap::Parser;
use const_format::formatcp;
use std::path::PathBuf;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Prints the colors of an Adobe Color Table (.act) palette as hex codes")]
pub(crate) struct Cli {
	#[arg(help = "The input ACT file. Use - to read from standard input.")]
	pub input: PathBuf,

	#[arg(value_name = "LIMIT", help = "Only prints the first LIMIT colors.")]
	pub limit: Option<usize>,
	#[arg(short = 'n', long = "limit", value_name = "N", conflicts_with = "limit", help = "Only prints the first N colors.")]
	pub limit_flag: Option<usize>,

	#[arg(short, long, help = "Prints a JSON array instead of one color per line.")]
	pub json: bool,

	#[arg(long, help = "Prints diagnostic information to stderr.")]
	pub debug: bool,
}

impl Cli {
	pub(crate) fn reads_stdin(&self) -> bool {
		self.input.as_os_str() == "-"
	}

	pub(crate) fn color_limit(&self) -> Option<usize> {
		self.limit.or(self.limit_flag)
	}
}
