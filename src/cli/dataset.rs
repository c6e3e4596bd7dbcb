//! Dataset-related CLI commands
//!
//! Metadata is exchanged as flat attribute files (JSON or YAML). The commands
//! turn them into the nested documents the repository expects and back.

use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::datasetversion::{DatasetVersion, VersionType};
use crate::engine::AttributeMap;
use crate::identifier::Identifier;
use crate::models::{Dataset, Entity};
use crate::native_api::dataset;

use super::base::{
    block_on, evaluate_and_print_response, parse_file, print_diagnostics, print_error, Matcher,
};

/// Subcommands for managing datasets in a Dataverse instance
#[derive(StructOpt, Debug)]
#[structopt(about = "Handle datasets of the Dataverse instance")]
pub enum DatasetSubCommand {
    /// Create a new dataset in a collection
    #[structopt(about = "Create a dataset from a flat attribute file")]
    Create {
        #[structopt(long, short, help = "Alias of the collection to create the dataset in")]
        collection: String,

        #[structopt(parse(from_os_str), help = "Path to the JSON/YAML attribute file")]
        body: PathBuf,
    },

    /// Retrieve a dataset version
    #[structopt(about = "Retrieve a datasets metadata")]
    Get {
        #[structopt(help = "(Persistent) identifier of the dataset to retrieve")]
        id: Identifier,

        #[structopt(
            short,
            long,
            help = "Version of the dataset to retrieve. Defaults to ':latest' when there is no API token, and ':draft' when there is an API token."
        )]
        version: Option<DatasetVersion>,

        #[structopt(long, help = "Print the flat attributes instead of the raw version")]
        flat: bool,
    },

    #[structopt(about = "Edit the metadata of a dataset")]
    Edit {
        #[structopt(help = "(Persistent) identifier of the dataset to edit")]
        id: Identifier,

        #[structopt(parse(from_os_str), help = "Path to the JSON/YAML attribute file")]
        body: PathBuf,

        #[structopt(long, short, help = "Overwrite existing values")]
        replace: bool,
    },

    #[structopt(about = "Publishes a dataset")]
    Publish {
        #[structopt(help = "(Persistent) identifier of the dataset to publish")]
        id: Identifier,

        #[structopt(
            long,
            short,
            help = "Version of the dataset to publish (major, minor, updatecurrent)",
            default_value = "major"
        )]
        version: VersionType,
    },

    #[structopt(about = "Deletes the draft of a dataset")]
    Delete {
        #[structopt(help = "(Persistent) identifier of the dataset")]
        id: Identifier,
    },

    #[structopt(about = "Export a dataset in a metadata format")]
    Export {
        #[structopt(help = "(Persistent) identifier of the dataset")]
        id: Identifier,

        #[structopt(long, short, default_value = "dataverse_json", help = "Name of the exporter")]
        exporter: String,
    },
}

impl Matcher for DatasetSubCommand {
    fn process(self, client: &BaseClient) {
        match self {
            DatasetSubCommand::Create { collection, body } => {
                let model = read_model(&body);
                let response = block_on(dataset::create_dataset(client, &collection, &model));
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Get { id, version, flat } => {
                if flat {
                    let response = block_on(dataset::get_dataset_model(client, &id, version.as_ref()))
                        .map(|response| {
                            response.map(|conversion| {
                                print_diagnostics(&conversion.diagnostics);
                                conversion.into_value()
                            })
                        });
                    evaluate_and_print_response(response);
                } else {
                    let response = block_on(dataset::get_dataset(client, &id, version.as_ref()));
                    evaluate_and_print_response(response);
                }
            }
            DatasetSubCommand::Edit { id, body, replace } => {
                let model = read_model(&body);
                let response =
                    block_on(dataset::edit_dataset_metadata(client, &id, &model, replace));
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Publish { id, version } => {
                let response = block_on(dataset::publish_dataset(client, &id, version));
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Delete { id } => {
                let response = block_on(dataset::delete_dataset(client, &id));
                evaluate_and_print_response(response);
            }
            DatasetSubCommand::Export { id, exporter } => {
                let response = block_on(dataset::export_dataset(client, &id, &exporter));
                evaluate_and_print_response(response);
            }
        }
    }
}

/// Reads a flat attribute file into a dataset. Exits on unreadable files.
fn read_model(path: &Path) -> Dataset {
    match parse_file::<_, AttributeMap>(path) {
        Ok(attributes) => {
            let conversion = Dataset::from_attributes(attributes);
            print_diagnostics(&conversion.diagnostics);
            conversion.into_value()
        }
        Err(error) => {
            print_error(&error);
            std::process::exit(exitcode::NOINPUT);
        }
    }
}
