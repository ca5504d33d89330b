//! Generation pipeline
//!
//! ```text
//! RunConfig
//!     ↓
//! open template → open destination
//!     ↓
//! formatter.format(sink, feed)
//!     feed: header line, blank line,
//!           then every template line through the rule set
//!     ↓
//! formatter exit status
//! ```

use crate::config::RunConfig;
use crate::error::{Result, TplgenError};
use crate::format::{Formatter, Sink};
use crate::rule::RuleSet;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Marker comment placed at the top of every generated file
pub fn header(command_line: &str) -> String {
    format!("// Code generated by \"{}\". DO NOT EDIT.\n\n", command_line)
}

/// Which side of [`substitute`] failed
#[derive(Debug)]
pub enum StreamError {
    /// Reading the template
    Read(io::Error),
    /// Writing to the formatter or destination
    Write(io::Error),
}

/// Stream `reader` line by line through `rules` into `writer`
///
/// Line terminators are kept as found, including a final line without one.
/// Returns the number of lines written.
pub fn substitute<R: BufRead, W: Write + ?Sized>(
    mut reader: R,
    writer: &mut W,
    rules: &RuleSet,
) -> std::result::Result<usize, StreamError> {
    let mut line = String::new();
    let mut count = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(StreamError::Read)? == 0 {
            break;
        }
        writer
            .write_all(rules.apply(&line).as_bytes())
            .map_err(StreamError::Write)?;
        count += 1;
    }

    Ok(count)
}

/// Run one generation with the given formatter
///
/// # Errors
///
/// - [`TplgenError::TemplateRead`] if the template cannot be opened or read
/// - [`TplgenError::OutputOpen`] if the destination cannot be created
/// - [`TplgenError::FormatterFailed`] if the formatter exits non-zero
/// - [`TplgenError::IoError`] if the output cannot be written
pub fn generate(config: &RunConfig, formatter: &dyn Formatter) -> Result<()> {
    let rules = config.rules();
    debug!("Applying {} substitution rule(s)", rules.len());

    let template = File::open(&config.template).map_err(|source| TplgenError::TemplateRead {
        path: config.template.clone(),
        source,
    })?;

    let sink = Sink::open(&config.destination)?;
    info!(
        "Generating {} from {} via {}",
        config.destination,
        config.template.display(),
        formatter.name()
    );

    let header = header(&config.command_line);
    let mut read_error = None;
    let mut lines = 0;

    let result = {
        let mut feed = |out: &mut dyn Write| -> io::Result<()> {
            out.write_all(header.as_bytes())?;
            match substitute(BufReader::new(&template), out, &rules) {
                Ok(n) => {
                    lines = n;
                    Ok(())
                }
                Err(StreamError::Write(e)) => Err(e),
                Err(StreamError::Read(e)) => {
                    let kind = e.kind();
                    read_error = Some(e);
                    Err(io::Error::new(kind, "template read failed"))
                }
            }
        };
        formatter.format(sink, &mut feed)
    };

    if let Some(source) = read_error {
        return Err(TplgenError::TemplateRead {
            path: config.template.clone(),
            source,
        });
    }
    result?;

    debug!("Wrote {} template line(s)", lines);
    Ok(())
}
