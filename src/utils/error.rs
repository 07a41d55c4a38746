use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("no filename provided")]
    MissingInputFile,

    #[error("file {path} does not exist")]
    InputFileNotFound { path: String },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed row at line {line}: expected 5 fields, found {found}")]
    MalformedRow { line: u64, found: usize },

    #[error("Malformed quoting at line {line}: unterminated or stray '\"'")]
    MalformedQuote { line: u64 },

    #[error("Remote service rejected request ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Configuration,
    Input,
    Remote,
}

impl ImportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ImportError::MissingInputFile | ImportError::InputFileNotFound { .. } => {
                ErrorCategory::Argument
            }
            ImportError::MissingConfig { .. } | ImportError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            ImportError::MalformedRow { .. }
            | ImportError::MalformedQuote { .. }
            | ImportError::CsvError(_)
            | ImportError::IoError(_) => ErrorCategory::Input,
            ImportError::RemoteRejected { .. } | ImportError::ApiError(_) => {
                ErrorCategory::Remote
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImportError::MissingInputFile => "Pass the path of the user file as the first argument",
            ImportError::InputFileNotFound { .. } => "Check the input path and file permissions",
            ImportError::MissingConfig { .. } => {
                "Set JIRA_URL, JIRA_USERNAME and JIRA_PASSWORD in the environment or a .env file"
            }
            ImportError::InvalidConfigValue { .. } => {
                "JIRA_URL must be an absolute http(s) URL such as https://jira.example.com"
            }
            ImportError::MalformedQuote { .. } => {
                "Close every quoted field with '\"' and write a literal quote as '\"\"'"
            }
            ImportError::MalformedRow { .. } | ImportError::CsvError(_) => {
                "Each row needs five ';'-separated fields: first;last;email;username;password"
            }
            ImportError::IoError(_) => "Check that the input file is readable",
            ImportError::RemoteRejected { status, .. } if *status == 401 || *status == 403 => {
                "Check the admin credentials and that the account may manage users"
            }
            ImportError::RemoteRejected { .. } => "Inspect the service message for the rejected user",
            ImportError::ApiError(_) => "Check that JIRA_URL is reachable from this machine",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
