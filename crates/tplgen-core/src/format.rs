//! Formatter capability
//!
//! A [`Formatter`] turns raw generated text into its final form at a
//! [`Sink`]. The generator only knows this trait; whether the text goes
//! through `goimports`, some other program, or nowhere is decided by the
//! configuration.

use crate::config::{Destination, FormatterChoice};
use crate::error::{Result, TplgenError};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Callback that writes the unformatted text
pub type Feed<'a> = dyn FnMut(&mut dyn Write) -> io::Result<()> + 'a;

/// An opened destination
#[derive(Debug)]
pub enum Sink {
    Stdout,
    File(File),
}

impl Sink {
    /// Open a destination for writing, creating or truncating a file
    pub fn open(destination: &Destination) -> Result<Self> {
        match destination {
            Destination::Stdout => Ok(Sink::Stdout),
            Destination::File(path) => File::create(path)
                .map(Sink::File)
                .map_err(|source| TplgenError::OutputOpen {
                    path: path.clone(),
                    source,
                }),
        }
    }

    /// Hand the sink to a child process as its stdout
    pub fn into_stdio(self) -> Stdio {
        match self {
            Sink::Stdout => Stdio::inherit(),
            Sink::File(file) => Stdio::from(file),
        }
    }

    /// Write to the sink directly
    pub fn into_writer(self) -> Box<dyn Write> {
        match self {
            Sink::Stdout => Box::new(io::stdout().lock()),
            Sink::File(file) => Box::new(file),
        }
    }
}

/// Transforms raw text into formatted text at a sink
pub trait Formatter {
    /// Name shown in logs and errors
    fn name(&self) -> &str;

    /// Run `feed` to supply the raw text and deliver the formatted result
    /// to `sink`
    ///
    /// # Errors
    ///
    /// Returns [`TplgenError::FormatterFailed`] if formatting did not
    /// succeed, or an I/O error if the text could not be delivered.
    fn format(&self, sink: Sink, feed: &mut Feed<'_>) -> Result<()>;
}

/// Formatter backed by an external program reading stdin and writing stdout
#[derive(Debug, Clone)]
pub struct CommandFormatter {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandFormatter {
    /// Use `program` exactly as given, without a PATH lookup
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Resolve `program` and build a formatter for it
    ///
    /// A bare name is looked up in `PATH`; anything containing a path
    /// separator is taken as a path.
    pub fn resolve(program: &str, args: Vec<String>) -> Result<Self> {
        let path = resolve_program(program)?;
        debug!("Resolved formatter '{}' to {}", program, path.display());
        Ok(Self::new(path, args))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Formatter for CommandFormatter {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("formatter")
    }

    fn format(&self, sink: Sink, feed: &mut Feed<'_>) -> Result<()> {
        let program = self.program.display().to_string();

        info!("Running formatter: {} {}", program, self.args.join(" "));
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(sink.into_stdio())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| TplgenError::FormatterSpawn {
                program: program.clone(),
                source,
            })?;

        let fed = match child.stdin.take() {
            Some(stdin) => {
                let mut input = BufWriter::new(stdin);
                // Dropping `input` closes the pipe and signals end of input.
                feed(&mut input).and_then(|()| input.flush())
            }
            None => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "formatter stdin was not captured",
            )),
        };

        let status = child.wait()?;
        debug!("Formatter exited with {}", status);

        if !status.success() {
            return Err(TplgenError::FormatterFailed {
                program: self.name().to_string(),
                code: status.code(),
            });
        }

        fed.map_err(TplgenError::from)
    }
}

/// Writes the raw text through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Formatter for Passthrough {
    fn name(&self) -> &str {
        "passthrough"
    }

    fn format(&self, sink: Sink, feed: &mut Feed<'_>) -> Result<()> {
        let mut out = BufWriter::new(sink.into_writer());
        feed(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Build the formatter described by the configuration
pub fn formatter_for(choice: &FormatterChoice) -> Result<Box<dyn Formatter>> {
    match choice {
        FormatterChoice::Command { program, args } => {
            Ok(Box::new(CommandFormatter::resolve(program, args.clone())?))
        }
        FormatterChoice::Disabled => Ok(Box::new(Passthrough)),
    }
}

fn resolve_program(program: &str) -> Result<PathBuf> {
    if program.is_empty() {
        return Err(TplgenError::FormatterNotFound {
            program: program.to_string(),
        });
    }

    let as_path = Path::new(program);
    if as_path.components().count() > 1 {
        return if as_path.is_file() {
            Ok(as_path.to_path_buf())
        } else {
            Err(TplgenError::FormatterNotFound {
                program: program.to_string(),
            })
        };
    }

    which::which(program).map_err(|_| TplgenError::FormatterNotFound {
        program: program.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sink_open_creates_and_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");
        fs::write(&path, "old contents that must go").unwrap();

        let sink = Sink::open(&Destination::File(path.clone())).unwrap();
        assert!(matches!(sink, Sink::File(_)));
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_sink_open_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.go");

        let err = Sink::open(&Destination::File(path)).unwrap_err();
        assert!(matches!(err, TplgenError::OutputOpen { .. }));
        assert!(err.to_string().starts_with("OUTPUT_OPEN_FAILED"));
    }

    #[test]
    fn test_passthrough_writes_feed_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        let sink = Sink::open(&Destination::File(path.clone())).unwrap();

        Passthrough
            .format(sink, &mut |w: &mut dyn Write| w.write_all(b"hello\n"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_resolve_unknown_program() {
        let err = CommandFormatter::resolve("tplgen-no-such-formatter-xyz", vec![]).unwrap_err();
        assert!(matches!(err, TplgenError::FormatterNotFound { .. }));
    }

    #[test]
    fn test_resolve_missing_path() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("fmt");
        let err = CommandFormatter::resolve(missing.to_str().unwrap(), vec![]).unwrap_err();
        assert!(matches!(err, TplgenError::FormatterNotFound { .. }));
    }

    #[test]
    fn test_resolve_empty_program() {
        assert!(matches!(
            CommandFormatter::resolve("", vec![]),
            Err(TplgenError::FormatterNotFound { .. })
        ));
    }

    #[test]
    fn test_formatter_for_disabled() {
        let formatter = formatter_for(&FormatterChoice::Disabled).unwrap();
        assert_eq!(formatter.name(), "passthrough");
    }

    #[test]
    fn test_command_formatter_name_is_file_name() {
        let formatter = CommandFormatter::new("/usr/local/bin/goimports", vec!["-local".into()]);
        assert_eq!(formatter.name(), "goimports");
        assert_eq!(formatter.args(), ["-local".to_string()]);
        assert_eq!(formatter.program(), Path::new("/usr/local/bin/goimports"));
    }
}
