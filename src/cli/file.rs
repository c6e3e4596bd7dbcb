//! Commands handling data files

use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::client::BaseClient;
use crate::data_access::datafile;
use crate::engine::AttributeMap;
use crate::identifier::Identifier;
use crate::models::{Datafile, Entity};
use crate::native_api::file;

use super::base::{
    block_on, evaluate_and_print_response, parse_file, print_diagnostics, print_error, Matcher,
};

/// Subcommands for handling files in a Dataverse instance
#[derive(StructOpt, Debug)]
#[structopt(about = "Handle files of the Dataverse instance")]
pub enum FileSubCommand {
    #[structopt(about = "Upload a file to a dataset")]
    Upload {
        #[structopt(long, short, help = "(Persistent) identifier of the dataset")]
        id: Identifier,

        #[structopt(parse(from_os_str), help = "Path to the file to upload")]
        path: PathBuf,

        #[structopt(long, parse(from_os_str), help = "JSON/YAML file with flat file metadata")]
        body: Option<PathBuf>,
    },

    #[structopt(about = "Retrieve the metadata of a file")]
    Meta {
        #[structopt(help = "(Persistent) identifier of the file")]
        id: Identifier,

        #[structopt(long, help = "Print the flat attributes instead of the raw answer")]
        flat: bool,
    },

    #[structopt(about = "Download a file")]
    Download {
        #[structopt(help = "(Persistent) identifier of the file")]
        id: Identifier,

        #[structopt(long, short, parse(from_os_str), help = "Where to write the content")]
        out: PathBuf,
    },
}

impl Matcher for FileSubCommand {
    fn process(self, client: &BaseClient) {
        match self {
            FileSubCommand::Upload { id, path, body } => {
                let metadata = body.map(|body| read_metadata(&body));
                let response =
                    block_on(file::upload_datafile(client, &id, &path, metadata.as_ref()));
                evaluate_and_print_response(response);
            }
            FileSubCommand::Meta { id, flat } => {
                let response = block_on(file::get_datafile_metadata(client, &id));
                if flat {
                    let response = response.map(|response| {
                        response.map(|info| {
                            let conversion = info.to_model();
                            print_diagnostics(&conversion.diagnostics);
                            conversion.into_value()
                        })
                    });
                    evaluate_and_print_response(response);
                } else {
                    evaluate_and_print_response(response);
                }
            }
            FileSubCommand::Download { id, out } => {
                let response = block_on(datafile::download_datafile_to(client, &id, &out));
                evaluate_and_print_response(response);
            }
        }
    }
}

fn read_metadata(path: &Path) -> Datafile {
    match parse_file::<_, AttributeMap>(path) {
        Ok(attributes) => {
            let conversion = Datafile::from_attributes(attributes);
            print_diagnostics(&conversion.diagnostics);
            conversion.into_value()
        }
        Err(error) => {
            print_error(&error);
            std::process::exit(exitcode::NOINPUT);
        }
    }
}
