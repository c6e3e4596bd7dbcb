//! Commands managing collections

use std::path::PathBuf;

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::engine::AttributeMap;
use crate::models::{Dataverse, Entity};
use crate::native_api::dataverse;

use super::base::{
    block_on, evaluate_and_print_response, parse_file, print_diagnostics, print_error, Matcher,
};

/// Subcommands for managing collections (dataverses)
#[derive(StructOpt, Debug)]
#[structopt(about = "Handle collections of the Dataverse instance")]
pub enum DataverseSubCommand {
    #[structopt(about = "Create a collection from a flat attribute file")]
    Create {
        #[structopt(long, short, default_value = "root", help = "Alias of the parent collection")]
        parent: String,

        #[structopt(parse(from_os_str), help = "Path to the JSON/YAML attribute file")]
        body: PathBuf,
    },

    #[structopt(about = "Retrieve a collection")]
    Get {
        #[structopt(help = "Alias or id of the collection")]
        alias: String,

        #[structopt(long, help = "Print the flat attributes instead of the raw answer")]
        flat: bool,
    },

    #[structopt(about = "List the datasets and collections inside a collection")]
    Contents {
        #[structopt(help = "Alias or id of the collection")]
        alias: String,
    },

    #[structopt(about = "Publish a collection")]
    Publish {
        #[structopt(help = "Alias or id of the collection")]
        alias: String,
    },

    #[structopt(about = "Delete an unpublished collection")]
    Delete {
        #[structopt(help = "Alias or id of the collection")]
        alias: String,
    },
}

impl Matcher for DataverseSubCommand {
    fn process(self, client: &BaseClient) {
        match self {
            DataverseSubCommand::Create { parent, body } => {
                let model = match parse_file::<_, AttributeMap>(&body) {
                    Ok(attributes) => Dataverse::from_attributes(attributes),
                    Err(error) => {
                        print_error(&error);
                        std::process::exit(exitcode::NOINPUT);
                    }
                };
                print_diagnostics(&model.diagnostics);

                let response = block_on(dataverse::create_dataverse(client, &parent, &model.value));
                evaluate_and_print_response(response);
            }
            DataverseSubCommand::Get { alias, flat } => {
                let response = block_on(dataverse::get_dataverse(client, &alias));
                if flat {
                    let response = response.and_then(|r| {
                        Ok(r.try_map(|info| info.to_model().map(|c| c.into_value()))?)
                    });
                    evaluate_and_print_response(response);
                } else {
                    evaluate_and_print_response(response);
                }
            }
            DataverseSubCommand::Contents { alias } => {
                let response = block_on(dataverse::get_dataverse_contents(client, &alias));
                evaluate_and_print_response(response);
            }
            DataverseSubCommand::Publish { alias } => {
                let response = block_on(dataverse::publish_dataverse(client, &alias));
                evaluate_and_print_response(response);
            }
            DataverseSubCommand::Delete { alias } => {
                let response = block_on(dataverse::delete_dataverse(client, &alias));
                evaluate_and_print_response(response);
            }
        }
    }
}
