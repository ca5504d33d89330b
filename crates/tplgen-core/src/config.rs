//! Run configuration
//!
//! [`RunOptions`] carries the raw strings from the command line.
//! [`RunConfig::from_options`] validates them once; after that the
//! configuration is read-only for the rest of the run.

use crate::error::Result;
use crate::rule::{Rule, RuleSet};
use std::fmt;
use std::path::PathBuf;

/// Placeholder replaced by the lowercase prefix
pub const LOWER_PLACEHOLDER: &str = "zz";

/// Placeholder replaced by the uppercase prefix
pub const UPPER_PLACEHOLDER: &str = "ZZ";

/// Placeholder replaced by the package name
pub const PACKAGE_PLACEHOLDER: &str = "PACKAGE";

pub const DEFAULT_PACKAGE: &str = "funkymonkeypackage";
pub const DEFAULT_PREFIX: &str = "funkymonkey";
pub const DEFAULT_FORMATTER: &str = "goimports";

/// Where generated output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `None` and an empty path both mean standard output
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Destination::File(path),
            _ => Destination::Stdout,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Which formatter post-processes the substituted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterChoice {
    /// External program plus extra arguments
    Command { program: String, args: Vec<String> },
    /// No formatting; text is written as-is
    Disabled,
}

impl Default for FormatterChoice {
    fn default() -> Self {
        FormatterChoice::Command {
            program: DEFAULT_FORMATTER.to_string(),
            args: Vec::new(),
        }
    }
}

/// Unvalidated invocation options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub template: PathBuf,
    pub output: Option<PathBuf>,
    pub package: String,
    pub prefix: String,
    /// Empty or `None` means "derive from `prefix`"
    pub upper_prefix: Option<String>,
    /// Raw `from=to` strings in command-line order
    pub defines: Vec<String>,
    pub formatter: FormatterChoice,
    /// Full invocation, embedded in the generated header
    pub command_line: String,
}

impl RunOptions {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            output: None,
            package: DEFAULT_PACKAGE.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            upper_prefix: None,
            defines: Vec::new(),
            formatter: FormatterChoice::default(),
            command_line: String::new(),
        }
    }
}

/// Validated, immutable configuration for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub template: PathBuf,
    pub destination: Destination,
    pub package: String,
    pub prefix: String,
    pub upper_prefix: String,
    pub defines: Vec<Rule>,
    pub formatter: FormatterChoice,
    pub command_line: String,
}

impl RunConfig {
    /// Validate raw options
    ///
    /// Every `-D` value is parsed here, before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TplgenError::InvalidDefine`] for the first malformed
    /// define.
    pub fn from_options(options: RunOptions) -> Result<Self> {
        let defines = options
            .defines
            .iter()
            .map(|d| Rule::parse_define(d))
            .collect::<Result<Vec<_>>>()?;

        let upper_prefix = match options.upper_prefix {
            Some(upper) if !upper.is_empty() => upper,
            _ => derive_upper_prefix(&options.prefix),
        };

        Ok(Self {
            template: options.template,
            destination: Destination::from_path(options.output),
            package: options.package,
            prefix: options.prefix,
            upper_prefix,
            defines,
            formatter: options.formatter,
            command_line: options.command_line,
        })
    }

    /// Rules in application order: `ZZ`, `zz`, `PACKAGE`, then user defines
    pub fn rules(&self) -> RuleSet {
        let mut rules: RuleSet = [
            Rule::placeholder(UPPER_PLACEHOLDER, &self.upper_prefix),
            Rule::placeholder(LOWER_PLACEHOLDER, &self.prefix),
            Rule::placeholder(PACKAGE_PLACEHOLDER, &self.package),
        ]
        .into_iter()
        .collect();
        rules.extend(self.defines.iter().cloned());
        rules
    }
}

/// Uppercase the first character of `prefix`, keep the rest
///
/// `"widget"` becomes `"Widget"`; an empty prefix stays empty.
pub fn derive_upper_prefix(prefix: &str) -> String {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
