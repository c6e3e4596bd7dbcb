use atty::Stream;
use colored::Colorize;
use colored_json::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents the status of a response from the Dataverse API.
///
/// We distinguish success and error responses with this enum.
/// Once the response is parsed, we can check if it's an error or not
/// and act accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Status {
    /// Indicates a successful response
    OK,
    /// Indicates an error response
    ERROR,
}

impl Status {
    /// Returns the string representation of the status
    pub fn as_str(&self) -> &str {
        match self {
            Status::OK => "OK",
            Status::ERROR => "ERROR",
        }
    }

    /// Returns true if the status is OK
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::OK)
    }

    /// Returns true if the status is ERROR
    pub fn is_err(&self) -> bool {
        matches!(self, Status::ERROR)
    }
}

/// The envelope every native API endpoint answers with.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    /// The status of the response (OK or ERROR)
    pub status: Status,

    /// Optional data payload returned by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Optional message providing additional information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
}

impl<T> Response<T> {
    /// Creates a new Response
    pub fn new(status: Status, data: Option<T>, message: Option<Message>) -> Response<T> {
        Response::<T> {
            status,
            data,
            message,
            request_url: None,
            request_method: None,
        }
    }

    /// Creates a new Response from a message and status
    pub fn from_message(message: Message, status: Status) -> Self {
        Self::new(status, None, Some(message))
    }

    /// Replaces the payload while keeping status and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            status: self.status,
            data: self.data.map(f),
            message: self.message,
            request_url: self.request_url,
            request_method: self.request_method,
        }
    }

    /// Like [`Response::map`] for conversions that can fail.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Response<U>, E> {
        let data = match self.data {
            Some(data) => Some(f(data)?),
            None => None,
        };

        Ok(Response {
            status: self.status,
            data,
            message: self.message,
            request_url: self.request_url,
            request_method: self.request_method,
        })
    }
}

impl<T> Response<T>
where
    T: Serialize,
{
    /// Prints the response result to stdout and exits with appropriate code
    pub fn print_result(&self) {
        match self.status {
            Status::OK => {
                let json = serde_json::to_string_pretty(&self.data).unwrap_or_default();

                redirect_stream(&json);
                std::process::exit(exitcode::OK);
            }
            Status::ERROR => {
                let message = self
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Unknown error".to_string());

                eprintln!("\n{} {}\n", "Error:".red().bold(), message);
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}

/// Redirects output to appropriate stream based on context
///
/// If users are redirecting the output to a file, we don't want to print
/// the success message but only the JSON response to ensure that the output
/// is clean and can be used in other scripts
pub(crate) fn redirect_stream(json_str: &str) {
    if atty::is(Stream::Stdout) {
        println!("{}", success_message());
        match json_str.to_colored_json_auto() {
            Ok(colored) => println!("{}\n", colored),
            Err(_) => println!("{}\n", json_str),
        }
    } else {
        println!("{}", json_str);
    }
}

/// Returns a formatted success message string
fn success_message() -> String {
    format!(
        "{} {} - Received the following response: \n",
        "└── ".bold(),
        "🎉 Success!".green().bold()
    )
}

/// Represents a message that can be either plain text or nested.
///
/// The editMetadata endpoint wraps its message in an object.
#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// A simple string message
    PlainMessage(String),
    /// A message wrapped in a nested structure
    NestedMessage(NestedMessage),
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Message::PlainMessage(message) => write!(f, "{}", message),
            Message::NestedMessage(nested_message) => write!(f, "{}", nested_message),
        }
    }
}

/// Represents a nested message structure returned by some Dataverse endpoints
#[derive(Debug, Deserialize, Serialize)]
pub struct NestedMessage {
    /// The actual message content
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl std::fmt::Display for NestedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message.as_deref().unwrap_or_default())
    }
}
