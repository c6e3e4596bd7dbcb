use std::path::PathBuf;

use colored::Colorize;
use structopt::StructOpt;

use dvmodels::cli::base::{init_logging, print_error, Matcher, Offline};
use dvmodels::cli::dataset::DatasetSubCommand;
use dvmodels::cli::dataverse::DataverseSubCommand;
use dvmodels::cli::file::FileSubCommand;
use dvmodels::cli::info::InfoSubCommand;
use dvmodels::cli::metrics::MetricsSubCommand;
use dvmodels::cli::model::{ConvertCommand, ParseCommand, ValidateCommand};
use dvmodels::client::BaseClient;
use dvmodels::config::Config;
use dvmodels::search_api::query::SearchQuery;

static HEADER: &str = r#"
--- Dataverse Metadata Models (dvmodels) ---
"#;

#[derive(StructOpt, Debug)]
struct GlobalOpts {
    /// TOML file with `base_url` and `api_token`. Defaults to the
    /// DATAVERSE_URL and DATAVERSE_API_TOKEN environment variables.
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

#[derive(StructOpt, Debug)]
#[structopt(about = "Convert, validate and exchange Dataverse metadata")]
#[allow(clippy::upper_case_acronyms)]
struct CLI {
    #[structopt(flatten)]
    global: GlobalOpts,

    #[structopt(subcommand)]
    cmd: DVCLI,
}

#[derive(StructOpt, Debug)]
#[allow(clippy::upper_case_acronyms)]
enum DVCLI {
    Convert(ConvertCommand),
    Parse(ParseCommand),
    Validate(ValidateCommand),
    Info(InfoSubCommand),
    Dataverse(DataverseSubCommand),
    Dataset(DatasetSubCommand),
    File(FileSubCommand),
    Search(SearchQuery),
    Metrics(MetricsSubCommand),
}

fn main() {
    init_logging();
    let cli = CLI::from_args();

    // Local conversions need no installation.
    let cmd = match cli.cmd {
        DVCLI::Convert(command) => std::process::exit(command.execute()),
        DVCLI::Parse(command) => std::process::exit(command.execute()),
        DVCLI::Validate(command) => std::process::exit(command.execute()),
        cmd => cmd,
    };

    let client = match setup_client(cli.global.config) {
        Ok(client) => client,
        Err(error) => {
            print_error(&error);
            std::process::exit(exitcode::CONFIG);
        }
    };

    if atty::is(atty::Stream::Stdout) {
        println!("{}", HEADER.bold());
    }

    match cmd {
        DVCLI::Info(command) => command.process(&client),
        DVCLI::Dataverse(command) => command.process(&client),
        DVCLI::Dataset(command) => command.process(&client),
        DVCLI::File(command) => command.process(&client),
        DVCLI::Search(command) => command.process(&client),
        DVCLI::Metrics(command) => command.process(&client),
        DVCLI::Convert(_) | DVCLI::Parse(_) | DVCLI::Validate(_) => {}
    }
}

fn setup_client(config: Option<PathBuf>) -> Result<BaseClient, Box<dyn std::error::Error>> {
    let config = Config::load(config.as_deref())?;
    Ok(BaseClient::from_config(&config)?)
}
