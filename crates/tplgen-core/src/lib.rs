//! Template substitution and formatting for tplgen.
//!
//! A template is plain text with a few literal markers:
//!
//! - `zz` becomes the lowercase prefix
//! - `ZZ` becomes the uppercase prefix
//! - `PACKAGE` becomes the package name
//! - any `-D from=to` pair rewrites `from` to `to`
//!
//! Each line is rewritten in that order, then the whole text is piped through
//! an external formatter (`goimports` by default) into the destination.
//!
//! # Examples
//!
//! ```no_run
//! use tplgen_core::{RunConfig, RunOptions, formatter_for, generate};
//!
//! # fn main() -> tplgen_core::Result<()> {
//! let mut opts = RunOptions::new("list.go.tpl");
//! opts.prefix = "int".to_string();
//! opts.defines = vec!["ELEM=int32".to_string()];
//! opts.output = Some("int_list.go".into());
//!
//! let config = RunConfig::from_options(opts)?;
//! let formatter = formatter_for(&config.formatter)?;
//! generate(&config, formatter.as_ref())?;
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod rule;

// Re-export commonly used types
pub use config::{Destination, FormatterChoice, RunConfig, RunOptions};
pub use error::{Result, TplgenError};
pub use format::{CommandFormatter, Formatter, Passthrough, Sink, formatter_for};
pub use generate::generate;
pub use rule::{Rule, RuleSet};
