//! Information retrieval commands for Dataverse instances

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::native_api::info;

use super::base::{block_on, evaluate_and_print_response, Matcher};

/// Subcommands for retrieving Dataverse instance information
#[derive(StructOpt, Debug)]
#[structopt(about = "Retrieve information about the Dataverse instance")]
pub enum InfoSubCommand {
    #[structopt(about = "Retrieve the version of the Dataverse instance")]
    Version,

    #[structopt(about = "Retrieve the host name of the Dataverse instance")]
    Server,
}

impl Matcher for InfoSubCommand {
    fn process(self, client: &BaseClient) {
        match self {
            InfoSubCommand::Version => {
                evaluate_and_print_response(block_on(info::get_version(client)))
            }
            InfoSubCommand::Server => {
                evaluate_and_print_response(block_on(info::get_server(client)))
            }
        }
    }
}
