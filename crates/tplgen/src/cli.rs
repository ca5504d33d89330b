//! CLI structure using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tplgen_core::config::{DEFAULT_FORMATTER, DEFAULT_PACKAGE, DEFAULT_PREFIX};
use tplgen_core::{FormatterChoice, RunOptions};

/// Expand a template by literal substitution and format the result.
///
/// `zz` becomes --prefix, `ZZ` becomes --PREFIX, `PACKAGE` becomes
/// --package, then each -D from=to is applied in order.
///
/// Example:
///
///     tplgen --prefix=int -DELEM=int32 --package=tests -o int_list.go list.go.tpl
#[derive(Parser, Debug)]
#[command(name = "tplgen")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Occurrences of 'PACKAGE' in the template are replaced with this string
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Occurrences of 'zz' in the template are replaced with this string
    #[arg(long, value_name = "name", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Occurrences of 'ZZ' in the template are replaced with this string
    /// [default: --prefix with its first letter uppercased]
    #[arg(long = "PREFIX", value_name = "Name")]
    pub upper_prefix: Option<String>,

    /// Output destination. Defaults to standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Replace every occurrence of FROM with TO; may be repeated
    #[arg(
        short = 'D',
        long = "define",
        value_name = "FROM=TO",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub defines: Vec<String>,

    /// Formatter reading source on stdin and writing it to stdout
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "TPLGEN_FORMATTER",
        default_value = DEFAULT_FORMATTER
    )]
    pub formatter: String,

    /// Extra argument for the formatter; may be repeated
    #[arg(
        long = "formatter-arg",
        value_name = "ARG",
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub formatter_args: Vec<String>,

    /// Write the substituted text without running a formatter
    #[arg(long, conflicts_with_all = ["formatter_args"])]
    pub no_format: bool,

    /// Log formatter resolution and progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Template file to process
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,
}

impl Cli {
    /// Convert parsed flags into core run options
    pub fn into_options(self, command_line: String) -> RunOptions {
        let formatter = if self.no_format {
            FormatterChoice::Disabled
        } else {
            FormatterChoice::Command {
                program: self.formatter,
                args: self.formatter_args,
            }
        };

        RunOptions {
            template: self.template,
            output: self.output,
            package: self.package,
            prefix: self.prefix,
            upper_prefix: self.upper_prefix,
            defines: self.defines,
            formatter,
            command_line,
        }
    }
}
