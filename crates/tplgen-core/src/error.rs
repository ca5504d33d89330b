use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TplgenError {
    // Config errors
    #[error("CONFIG_INVALID_DEFINE: invalid -D option '{define}': expected from=to")]
    InvalidDefine { define: String },

    #[error("CONFIG_EMPTY_PATTERN: substitution pattern must not be empty")]
    EmptyPattern,

    // Template errors
    #[error("TEMPLATE_READ_FAILED: cannot read template '{}': {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("OUTPUT_OPEN_FAILED: cannot open output '{}': {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Formatter errors
    #[error("FORMATTER_NOT_FOUND: formatter '{program}' not found in PATH")]
    FormatterNotFound { program: String },

    #[error("FORMATTER_SPAWN_FAILED: failed to start '{program}': {source}")]
    FormatterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("FORMATTER_FAILED: {program} failed: {}", describe_code(*code))]
    FormatterFailed { program: String, code: Option<i32> },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl TplgenError {
    /// Process exit code to report for this error.
    ///
    /// A failing formatter hands its own status through so scripts can tell
    /// a syntax error in the generated code from a usage error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TplgenError::FormatterFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, TplgenError>;
