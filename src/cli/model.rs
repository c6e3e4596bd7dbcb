//! Offline commands converting and validating metadata documents.

use std::path::PathBuf;

use colored::Colorize;
use serde_json::Value;
use structopt::StructOpt;

use crate::engine::{
    from_nested_document, to_nested_document, validate_attributes, validate_document,
    AttributeMap, DataFormat, ValidationReport,
};
use crate::error::ModelError;
use crate::schema::EntityKind;

use super::base::{parse_file, print_diagnostics, print_error, print_json, Offline};

/// Converts a flat attribute file into an upload document.
#[derive(StructOpt, Debug)]
#[structopt(about = "Convert flat attributes (JSON/YAML) into a nested upload document")]
pub struct ConvertCommand {
    #[structopt(long, short, default_value = "dataset", help = "dataverse, dataset or datafile")]
    pub kind: EntityKind,

    #[structopt(parse(from_os_str), help = "Path to the flat attribute file")]
    pub path: PathBuf,
}

/// Reads a nested document back into flat attributes.
#[derive(StructOpt, Debug)]
#[structopt(about = "Parse a nested document (JSON/YAML) into flat attributes")]
pub struct ParseCommand {
    #[structopt(long, short, default_value = "dataset", help = "dataverse, dataset or datafile")]
    pub kind: EntityKind,

    #[structopt(long, short, default_value = "upload", help = "upload or download")]
    pub format: DataFormat,

    #[structopt(long, help = "Skip the upload schema check")]
    pub no_validate: bool,

    #[structopt(parse(from_os_str), help = "Path to the nested document")]
    pub path: PathBuf,
}

/// Checks a flat attribute file or a nested document.
#[derive(StructOpt, Debug)]
#[structopt(about = "Validate flat attributes or a nested document")]
pub struct ValidateCommand {
    #[structopt(long, short, default_value = "dataset", help = "dataverse, dataset or datafile")]
    pub kind: EntityKind,

    #[structopt(long, help = "The file holds a nested document instead of flat attributes")]
    pub nested: bool,

    #[structopt(long, short, default_value = "upload", help = "Format of a nested document")]
    pub format: DataFormat,

    #[structopt(parse(from_os_str), help = "Path to the file to validate")]
    pub path: PathBuf,
}

impl Offline for ConvertCommand {
    fn execute(self) -> i32 {
        let result = parse_file::<_, AttributeMap>(&self.path)
            .and_then(|attributes| to_nested_document(&attributes, self.kind));

        match result {
            Ok(conversion) => {
                print_diagnostics(&conversion.diagnostics);
                exit_code(print_json(&conversion.value))
            }
            Err(error) => fail(error),
        }
    }
}

impl Offline for ParseCommand {
    fn execute(self) -> i32 {
        let result = parse_file::<_, Value>(&self.path).and_then(|document| {
            from_nested_document(&document, self.kind, self.format, !self.no_validate)
        });

        match result {
            Ok(conversion) => {
                print_diagnostics(&conversion.diagnostics);
                exit_code(print_json(&conversion.value))
            }
            Err(error) => fail(error),
        }
    }
}

impl Offline for ValidateCommand {
    fn execute(self) -> i32 {
        match self.report() {
            Ok(report) => {
                print_diagnostics(&report.diagnostics);
                if report.is_valid() {
                    eprintln!("{} {} is a valid {}", "✓".green().bold(), self.path.display(), self.kind);
                    exitcode::OK
                } else {
                    eprintln!("{} {} is not a valid {}", "✗".red().bold(), self.path.display(), self.kind);
                    exitcode::DATAERR
                }
            }
            Err(error) => fail(error),
        }
    }
}

impl ValidateCommand {
    fn report(&self) -> Result<ValidationReport, ModelError> {
        if self.nested {
            let document: Value = parse_file(&self.path)?;
            validate_document(&document, self.kind, self.format)
        } else {
            let attributes: AttributeMap = parse_file(&self.path)?;
            validate_attributes(&attributes, self.kind)
        }
    }
}

fn exit_code(result: Result<(), ModelError>) -> i32 {
    match result {
        Ok(()) => exitcode::OK,
        Err(error) => fail(error),
    }
}

fn fail(error: ModelError) -> i32 {
    print_error(&error);
    match error {
        ModelError::Io(_) => exitcode::NOINPUT,
        ModelError::SchemaLoad(_) => exitcode::SOFTWARE,
        _ => exitcode::DATAERR,
    }
}
