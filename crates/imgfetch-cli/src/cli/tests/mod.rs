//! CLI parse, prompt and outcome tests.

use super::{fetch, read_url, Cli, Outcome, EXIT_FETCH_FAILED, EXIT_NO_URL};
use clap::Parser;
use imgfetch_core::{ErrorKind, FetchConfig};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url() {
    let cli = parse(&["imgfetch", "https://example.com/cat.png"]);
    assert_eq!(cli.url.as_deref(), Some("https://example.com/cat.png"));
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_no_url() {
    let cli = parse(&["imgfetch"]);
    assert!(cli.url.is_none());
}

#[test]
fn cli_parse_verbose_count() {
    let cli = parse(&["imgfetch", "-vv", "https://example.com/x"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.url.as_deref(), Some("https://example.com/x"));
}

#[test]
fn cli_rejects_two_urls() {
    assert!(Cli::try_parse_from(["imgfetch", "https://a/1.png", "https://b/2.png"]).is_err());
}

#[test]
fn prompt_reads_trimmed_line() {
    let mut out = Vec::new();
    let url = read_url(&b"  https://example.com/a.png \n"[..], &mut out).unwrap();
    assert_eq!(url, "https://example.com/a.png");
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.starts_with("Enter an image URL"));
    assert!(shown.ends_with("> "));
}

#[test]
fn prompt_eof_is_empty() {
    let url = read_url(&b""[..], Vec::new()).unwrap();
    assert!(url.is_empty());
}

#[test]
fn empty_argument_is_no_url() {
    let cli = parse(&["imgfetch", "   "]);
    let outcome = cli.run().unwrap();
    assert!(matches!(outcome, Outcome::NoUrl));
    assert_eq!(outcome.exit_code(), EXIT_NO_URL);
}

#[test]
fn missing_scheme_is_reported_failure() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = FetchConfig::with_output_dir(dir.path().join("Fetched_Images"));
    let outcome = fetch("example.com/a.png", &cfg);
    match &outcome {
        Outcome::Failed(err) => assert_eq!(err.kind(), ErrorKind::MissingScheme),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(outcome.exit_code(), EXIT_FETCH_FAILED);
    assert!(!cfg.output_dir.exists());
}

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(Outcome::Saved("x".into()).exit_code(), 0);
    assert_ne!(EXIT_NO_URL, EXIT_FETCH_FAILED);
    assert_ne!(EXIT_NO_URL, 0);
}
