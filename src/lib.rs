//! Metadata models and API client for Dataverse repositories.
//!
//! The core of this crate maps between flat attribute maps and the nested,
//! block-structured metadata documents of the Dataverse upload and download
//! APIs, and validates both. Around it sit thin wrappers for the native,
//! search, metrics and SWORD APIs plus a command line front-end.

#![warn(unused_crate_dependencies)]

/// Static attribute tables per entity kind and metadata block
pub mod schema;

/// Serializer, parser and validator for nested metadata documents
pub mod engine;

/// Entity records for collections, datasets and files
pub mod models;

/// Error types of the engine and the HTTP layer
pub mod error;

/// Connection settings
pub mod config;

/// Client functionality for interacting with Dataverse APIs
pub mod client;

/// Types and utilities for working with dataset versions
pub mod datasetversion;

/// Types for handling Dataverse identifiers
pub mod identifier;

/// Types for making requests to Dataverse APIs
pub mod request;

/// Types for handling responses from Dataverse APIs
pub mod response;

/// Macros declaring entity records
pub(crate) mod macros;

/// Data access functionality
pub mod data_access {
    pub use datafile::{download_datafile, download_datafile_to};

    /// Datafile downloads
    pub mod datafile;
}

/// Search API functionality
pub mod search_api {
    pub use search::search;

    /// Search query building
    pub mod query;
    /// Search execution
    pub mod search;
}

/// Usage metrics of an installation
pub mod metrics_api {
    pub use metrics::{metrics_past_days, metrics_to_month, metrics_total, MetricsKind};

    pub mod metrics;
}

/// SWORD v2 deposit API
pub mod sword_api {
    pub use service::get_service_document;

    pub mod service;
}

/// Native API functionality
pub mod native_api {
    /// Information retrieval operations
    pub mod info {
        pub use server::get_server;
        pub use version::get_version;

        /// Server name
        pub mod server;
        /// Version information
        pub mod version;
    }

    /// Collection operations
    pub mod dataverse {
        pub use content::get_dataverse_contents;
        pub use create::create_dataverse;
        pub use delete::delete_dataverse;
        pub use get::{get_dataverse, DataverseInfo};
        pub use publish::publish_dataverse;

        /// Collection content listing
        pub mod content;
        /// Collection creation
        pub mod create;
        /// Collection deletion
        pub mod delete;
        /// Collection retrieval
        pub mod get;
        /// Collection publishing
        pub mod publish;
    }

    /// Dataset operations
    pub mod dataset {
        pub use create::create_dataset;
        pub use delete::delete_dataset;
        pub use edit::edit_dataset_metadata;
        pub use export::export_dataset;
        pub use metadata::{get_dataset, get_dataset_model};
        pub use publish::publish_dataset;

        /// Dataset creation
        pub mod create;
        /// Draft deletion
        pub mod delete;
        /// Dataset editing
        pub mod edit;
        /// Dataset export operations
        pub mod export;
        /// Metadata operations
        pub mod metadata;
        /// Publishing operations
        pub mod publish;
    }

    /// File operations
    pub mod file {
        pub use metadata::{get_datafile_metadata, FileInfo};
        pub use upload::upload_datafile;

        /// File metadata operations
        pub mod metadata;
        /// File upload
        pub mod upload;
    }
}

/// Commonly used types and functions
pub mod prelude {
    pub use super::client::BaseClient;
    pub use super::config::Config;
    pub use super::datasetversion::{DatasetVersion, VersionType};
    pub use super::engine::{Conversion, DataFormat, Diagnostic, DiagnosticKind, ValidationReport};
    pub use super::error::{ApiError, ModelError};
    pub use super::identifier::Identifier;
    pub use super::models::{Datafile, Dataset, Dataverse, Entity};
    pub use super::native_api::dataset;
    pub use super::native_api::dataverse;
    pub use super::native_api::file;
    pub use super::native_api::info;
    pub use super::schema::EntityKind;
}

/// Command-line interface functionality
pub mod cli {
    /// Base CLI functionality
    pub mod base;
    /// Dataset commands
    pub mod dataset;
    /// Collection commands
    pub mod dataverse;
    /// File commands
    pub mod file;
    /// Information commands
    pub mod info;
    /// Metrics commands
    pub mod metrics;
    /// Offline conversion and validation commands
    pub mod model;
}
