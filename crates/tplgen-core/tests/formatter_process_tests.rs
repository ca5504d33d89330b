//! CommandFormatter against real child processes

#![cfg(unix)]

use std::fs;
use std::io::Write;
use tplgen_core::{
    CommandFormatter, Destination, Formatter, RunConfig, RunOptions, Sink, TplgenError, generate,
};
use tplgen_testkit::{
    failing_formatter, fake_formatter, passthrough_formatter, recording_formatter,
    temp_dir_in_workspace, uppercasing_formatter, write_template,
};

fn feed_text(text: &'static str) -> impl FnMut(&mut dyn Write) -> std::io::Result<()> {
    move |w: &mut dyn Write| w.write_all(text.as_bytes())
}

#[test]
fn test_formatter_output_reaches_file() {
    let temp = temp_dir_in_workspace();
    let output = temp.path().join("out.go");
    let formatter = CommandFormatter::new(uppercasing_formatter(temp.path()), vec![]);

    let sink = Sink::open(&Destination::File(output.clone())).unwrap();
    formatter.format(sink, &mut feed_text("package x\n")).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "PACKAGE X\n");
}

#[test]
fn test_formatter_nonzero_exit_is_reported() {
    let temp = temp_dir_in_workspace();
    let output = temp.path().join("out.go");
    let formatter = CommandFormatter::new(failing_formatter(temp.path(), 2), vec![]);

    let sink = Sink::open(&Destination::File(output)).unwrap();
    let err = formatter
        .format(sink, &mut feed_text("package x\n"))
        .unwrap_err();

    match err {
        TplgenError::FormatterFailed { code, .. } => assert_eq!(code, Some(2)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_formatter_that_ignores_stdin_still_reports_status() {
    let temp = temp_dir_in_workspace();
    let fmt = fake_formatter(temp.path(), "fmt-early-exit", "exit 4");
    let formatter = CommandFormatter::new(fmt, vec![]);

    // Large enough to overflow the pipe buffer once the reader is gone.
    let big = "x".repeat(1 << 20);
    let sink = Sink::open(&Destination::File(temp.path().join("out.go"))).unwrap();
    let err = formatter
        .format(sink, &mut |w: &mut dyn Write| w.write_all(big.as_bytes()))
        .unwrap_err();

    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_formatter_that_exits_cleanly_without_reading_is_io_error() {
    let temp = temp_dir_in_workspace();
    let fmt = fake_formatter(temp.path(), "fmt-true", "exec true");
    let formatter = CommandFormatter::new(fmt, vec![]);

    let big = "x".repeat(2 << 20);
    let sink = Sink::open(&Destination::File(temp.path().join("out.go"))).unwrap();
    let err = formatter
        .format(sink, &mut |w: &mut dyn Write| w.write_all(big.as_bytes()))
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    match err {
        TplgenError::IoError(e) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_formatter_receives_extra_args() {
    let temp = temp_dir_in_workspace();
    let record = temp.path().join("args.txt");
    let formatter = CommandFormatter::new(
        recording_formatter(temp.path(), &record),
        vec!["-local".to_string(), "example.com/m".to_string()],
    );

    let sink = Sink::open(&Destination::File(temp.path().join("out.go"))).unwrap();
    formatter.format(sink, &mut feed_text("x\n")).unwrap();

    assert_eq!(
        fs::read_to_string(&record).unwrap(),
        "-local\nexample.com/m\n"
    );
}

#[test]
fn test_spawn_failure_for_non_executable() {
    let temp = temp_dir_in_workspace();
    let not_exec = write_template(temp.path(), "not-a-program", "plain text");
    let formatter = CommandFormatter::new(not_exec, vec![]);

    let sink = Sink::open(&Destination::File(temp.path().join("out.go"))).unwrap();
    let err = formatter.format(sink, &mut feed_text("x\n")).unwrap_err();
    assert!(matches!(err, TplgenError::FormatterSpawn { .. }));
}

#[test]
fn test_generate_through_real_process() {
    let temp = temp_dir_in_workspace();
    let template = write_template(
        temp.path(),
        "cache.go.tpl",
        "package PACKAGE\n\nvar c = zz.New(ZZOptions{Name: \"PACKAGE\"})\n",
    );
    let output = temp.path().join("cache.go");

    let mut opts = RunOptions::new(&template);
    opts.prefix = "cache".to_string();
    opts.package = "store".to_string();
    opts.output = Some(output.clone());
    opts.command_line = "tplgen --prefix=cache --package=store cache.go.tpl".to_string();
    let config = RunConfig::from_options(opts).unwrap();

    let formatter = CommandFormatter::new(passthrough_formatter(temp.path()), vec![]);
    generate(&config, &formatter).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "// Code generated by \"tplgen --prefix=cache --package=store cache.go.tpl\". DO NOT EDIT.\n\
         \n\
         package store\n\
         \n\
         var c = cache.New(CacheOptions{Name: \"store\"})\n"
    );
}
