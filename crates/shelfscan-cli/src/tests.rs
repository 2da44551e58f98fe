use super::*;

#[test]
fn parses_store_id_only() {
    let cli = Cli::try_parse_from(["shelfscan", "156"]).expect("expected valid cli args");
    assert_eq!(cli.store_id, 156);
    assert!(cli.output.is_none());
}

#[test]
fn parses_short_output_flag() {
    let cli = Cli::try_parse_from(["shelfscan", "74", "-o", "out.csv"]).unwrap();
    assert_eq!(cli.store_id, 74);
    assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn parses_long_output_flag() {
    let cli = Cli::try_parse_from(["shelfscan", "--output", "/tmp/catalog.csv", "74"]).unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("/tmp/catalog.csv")));
}

#[test]
fn missing_store_id_is_rejected() {
    let err = Cli::try_parse_from(["shelfscan"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn non_numeric_store_id_is_rejected() {
    let err = Cli::try_parse_from(["shelfscan", "astor"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn zero_store_id_is_rejected() {
    let err = Cli::try_parse_from(["shelfscan", "0"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
