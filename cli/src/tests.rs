use super::*;
use clap::CommandFactory;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["fontinline"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("parse cli")
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn input_and_output_are_required() {
    assert!(Cli::try_parse_from(["fontinline", "--input", "a.svg"]).is_err());
    assert!(Cli::try_parse_from(["fontinline", "--output", "b.svg"]).is_err());
}

#[test]
fn strict_and_quiet_conflict() {
    let parsed = Cli::try_parse_from([
        "fontinline", "-i", "a.svg", "-o", "b.svg", "--strict", "--quiet",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn verbosity_maps_to_log_levels() {
    assert_eq!(parse(&["-i", "a", "-o", "b"]).log_level(), LevelFilter::Warn);
    assert_eq!(parse(&["-i", "a", "-o", "b", "-v"]).log_level(), LevelFilter::Info);
    assert_eq!(parse(&["-i", "a", "-o", "b", "-vvv"]).log_level(), LevelFilter::Debug);
}

#[test]
fn flags_select_policy_and_decoding() {
    let strict = parse(&["-i", "a", "-o", "b", "--strict", "--strict-names"]).embed_options();
    assert_eq!(strict.unresolved, UnresolvedPolicy::Error);
    assert_eq!(strict.catalog.decoding, NameDecoding::Platform);

    let quiet = parse(&["-i", "a", "-o", "b", "-q", "--follow-symlinks"]).embed_options();
    assert_eq!(quiet.unresolved, UnresolvedPolicy::Ignore);
    assert!(quiet.catalog.follow_symlinks);

    let default = parse(&["-i", "a", "-o", "b"]).embed_options();
    assert_eq!(default.unresolved, UnresolvedPolicy::Warn);
    assert_eq!(default.catalog.decoding, NameDecoding::NullByteHeuristic);
}

#[test]
fn font_dir_flags_lead_the_search_list() {
    let cli = parse(&[
        "-i", "a", "-o", "b", "--no-default-dirs", "--font-dir", "/one", "--font-dir", "/two",
    ]);
    assert_eq!(
        cli.font_dirs().roots(),
        vec![PathBuf::from("/one"), PathBuf::from("/two")]
    );
}

#[test]
fn identical_paths_are_rejected() {
    let err = check_paths(Path::new("same.svg"), Path::new("same.svg")).expect_err("same");
    assert!(matches!(err, ConfigError::SameFile(_)));
}

#[test]
fn different_spellings_of_one_file_are_rejected() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("drawing.svg");
    fs::write(&file, "<svg/>").expect("write");
    let roundabout = tmp.path().join(".").join("drawing.svg");

    assert!(check_paths(&file, &roundabout).is_err());
}

#[test]
fn missing_output_in_same_directory_is_fine() {
    let tmp = tempdir().expect("tempdir");
    let input = tmp.path().join("in.svg");
    fs::write(&input, "<svg/>").expect("write");

    assert!(check_paths(&input, &tmp.path().join("out.svg")).is_ok());
}

#[test]
fn stdio_is_never_the_same_file() {
    assert!(check_paths(Path::new("-"), Path::new("-")).is_ok());
}

#[test]
fn json_summary_refuses_stdout_output() {
    let cli = parse(&["-i", "a.svg", "-o", "-", "--json"]);
    let err = run_with(&cli).expect_err("config error");
    assert!(err.downcast_ref::<ConfigError>().is_some());
}

#[test]
fn same_file_error_is_a_config_error() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("x.svg");
    let original = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
    fs::write(&file, original).expect("write");
    let path = file.to_string_lossy().to_string();

    let cli = parse(&["-i", &path, "-o", &path, "--no-default-dirs"]);
    let err = run_with(&cli).expect_err("config error");

    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert_eq!(fs::read_to_string(&file).expect("read"), original);
}
