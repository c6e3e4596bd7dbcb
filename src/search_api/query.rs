use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use structopt::StructOpt;

use crate::cli::base::{block_on, evaluate_and_print_response, Matcher};
use crate::client::{BaseClient, QueryParams};
use crate::search_api;

lazy_static! {
    /// Field names whose query parameter is spelled differently.
    static ref KEY_MAPPINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("search_type", "type");
        m
    };
}

/// Appends a field to the parameter list if it is `Some`.
///
/// # Arguments
///
/// * `$obj` - The object containing the field
/// * `$field` - The field name to check and insert
/// * `$params` - The parameter list to append to
macro_rules! insert_if_some {
    ($obj:expr, $field:ident, $params:expr) => {
        if let Some(value) = &$obj.$field {
            let key = KEY_MAPPINGS
                .get(stringify!($field))
                .unwrap_or(&stringify!($field))
                .to_string();
            $params.push((key, value.to_string()));
        }
    };
}

/// Appends one parameter per value of a list field if it is `Some`.
/// The search API reads repeated keys such as `type=dataset&type=file`.
///
/// # Arguments
///
/// * `$obj` - The object containing the field
/// * `$field` - The field name to check and insert
/// * `$params` - The parameter list to append to
macro_rules! insert_multiple_if_some {
    ($obj:expr, $field:ident, $params:expr) => {
        if let Some(values) = &$obj.$field {
            let key = KEY_MAPPINGS
                .get(stringify!($field))
                .unwrap_or(&stringify!($field))
                .to_string();
            for value in values {
                $params.push((key.clone(), value.to_string()));
            }
        }
    };
}

/// Options of `GET api/search`. Doubles as the `search` subcommand.
#[derive(Debug, Serialize, Deserialize, StructOpt, Default)]
#[structopt(about = "Search a Dataverse instance")]
pub struct SearchQuery {
    #[structopt(short = "q", long = "query", help = "The search query string")]
    pub q: String,

    /// Sent as `type`.
    #[structopt(short = "t", long = "type", help = "The type of search")]
    pub search_type: Option<Vec<SearchType>>,

    /// The subtree to search within, limiting results to a specific dataverse.
    #[structopt(long, help = "The subtree to search within")]
    pub subtree: Option<Vec<String>>,

    #[structopt(long, help = "The field to sort by")]
    pub sort: Option<SortField>,

    #[structopt(long, help = "The order of sorting")]
    pub order: Option<Order>,

    #[structopt(long, help = "The number of results per page")]
    pub per_page: Option<u32>,

    #[structopt(long, help = "The starting index of the results")]
    pub start: Option<u32>,

    #[structopt(long, help = "Whether to show relevance scores")]
    pub show_relevance: Option<bool>,

    #[structopt(long, help = "Whether to show facets")]
    pub show_facets: Option<bool>,

    /// Filter queries to narrow down search results.
    #[structopt(long = "filter", help = "The filter query")]
    pub fq: Option<Vec<String>>,

    #[structopt(long, help = "Whether to show entity IDs")]
    pub show_entity_ids: Option<bool>,

    /// The geographic point for geo-spatial searches.
    #[structopt(long, help = "The geographic point")]
    pub geo_point: Option<String>,

    #[structopt(long, help = "The geographic radius")]
    pub geo_radius: Option<String>,

    /// The metadata fields to search within, limiting the search scope.
    #[structopt(long = "fields", help = "The metadata fields to search within")]
    pub metadata_fields: Option<Vec<String>>,
}

impl SearchQuery {
    /// The query parameters, in field order, with one pair per value of list options.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = vec![("q".to_string(), self.q.clone())];

        // Optional fields
        insert_multiple_if_some!(self, search_type, params);
        insert_multiple_if_some!(self, subtree, params);
        insert_if_some!(self, sort, params);
        insert_if_some!(self, order, params);
        insert_if_some!(self, per_page, params);
        insert_if_some!(self, start, params);
        insert_if_some!(self, show_relevance, params);
        insert_if_some!(self, show_facets, params);
        insert_multiple_if_some!(self, fq, params);
        insert_if_some!(self, show_entity_ids, params);
        insert_if_some!(self, geo_point, params);
        insert_if_some!(self, geo_radius, params);
        insert_multiple_if_some!(self, metadata_fields, params);

        params
    }
}

impl From<&SearchQuery> for QueryParams {
    fn from(query: &SearchQuery) -> Self {
        query.to_query_params()
    }
}

impl Matcher for SearchQuery {
    fn process(self, client: &BaseClient) {
        let response = block_on(search_api::search(client, &self));
        evaluate_and_print_response(response);
    }
}

/// A query for the given term with every option unset.
impl FromStr for SearchQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SearchQuery {
            q: s.to_string(),
            ..Default::default()
        })
    }
}

/// Entity types a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SearchType {
    /// Search for dataverse containers
    Dataverse,
    /// Search for datasets
    Dataset,
    /// Search for individual files
    File,
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "dataverse" => Ok(SearchType::Dataverse),
            "dataset" => Ok(SearchType::Dataset),
            "file" => Ok(SearchType::File),
            _ => Err(format!("Invalid search type: {}", input)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SortField {
    /// Sort by name
    Name,
    /// Sort by date
    Date,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "date" => Ok(SortField::Date),
            _ => Err(format!("Invalid sort field: {}", input)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Order {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl FromStr for Order {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(format!("Invalid order: {}", input)),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SearchType::Dataverse => "dataverse",
                SearchType::Dataset => "dataset",
                SearchType::File => "file",
            }
        )
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortField::Name => "name",
                SortField::Date => "date",
            }
        )
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Order::Asc => "asc",
                Order::Desc => "desc",
            }
        )
    }
}
