use apicheck_cli::cli_args::Args;
use apicheck_cli::error::Error;
use apicheck_core::error::Error as ValidationError;
use apicheck_core::validation::{BoolOrPath, SchemaLocation};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

fn resolve(argv: &[&str]) -> Result<apicheck_cli::options::ResolvedOptions, Error> {
    let mut full = vec!["apicheck"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).unwrap().resolve()
}

#[test]
fn test_schema_file_with_base_url() {
    let mut schema = NamedTempFile::new().unwrap();
    writeln!(schema, "openapi: 3.0.2").unwrap();
    let schema_path = schema.path().to_str().unwrap();

    let options = resolve(&[schema_path, "--base-url", "http://127.0.0.1:8080/api"]).unwrap();

    assert_eq!(options.schema, SchemaLocation::Path(schema_path.to_string()));
    assert_eq!(
        options.base_url.as_deref(),
        Some("http://127.0.0.1:8080/api")
    );
}

#[test]
fn test_schema_file_without_base_url() {
    let schema = NamedTempFile::new().unwrap();
    let schema_path = schema.path().to_str().unwrap();

    let error = resolve(&[schema_path]).unwrap_err();

    assert!(matches!(
        error,
        Error::Validation(ValidationError::MissingBaseUrl)
    ));
    assert_eq!(
        error.to_string(),
        "The `--base-url` option is required when specifying a schema via a file."
    );
    assert_eq!(error.status(), 2);
}

#[test]
fn test_scheme_less_network_path() {
    let error = resolve(&["//test"]).unwrap_err();
    assert!(matches!(
        error,
        Error::Validation(ValidationError::InvalidSchema)
    ));
}

#[test]
fn test_full_invocation_renders_yaml() {
    let options = resolve(&[
        "https://example.com/openapi.json",
        "-a",
        "admin:secret",
        "-H",
        "X-Tenant: acme",
        "-H",
        "X-Tenant: globex",
        "--include-path-regex",
        "^/users",
        "--tls-verify",
        "no",
        "--workers",
        "3",
        "--rate-limit",
        "100/2s",
        "--allowed-status-codes",
        "2xx,404",
    ])
    .unwrap();

    assert_eq!(options.headers.len(), 1);
    assert_eq!(
        options.headers.get("X-Tenant").map(String::as_str),
        Some("globex")
    );
    assert_eq!(options.tls_verify, BoolOrPath::Bool(false));
    assert_eq!(options.workers, 3);
    assert_eq!(
        options.allowed_status_codes,
        Some(vec!["2xx".to_string(), "404".to_string()])
    );

    let yaml = options.to_yaml().unwrap();
    assert!(yaml.contains("username: admin"));
    assert!(!yaml.contains("secret"));
    assert!(yaml.contains("X-Tenant: globex"));
    assert!(yaml.contains("^/users"));
}

#[test]
fn test_status_code_errors_are_aggregated() {
    let error = resolve(&[
        "https://example.com/openapi.json",
        "--allowed-status-codes",
        "abc,200,20",
    ])
    .unwrap_err();

    assert_eq!(error.to_string(), "Invalid status code(s): abc, 20");
    assert_eq!(error.status(), 2);
}

#[test]
fn test_invalid_header_is_rejected_by_clap() {
    let error = Args::try_parse_from([
        "apicheck",
        "https://example.com/openapi.json",
        "-H",
        "Ā:0",
    ])
    .unwrap_err();

    assert!(error
        .to_string()
        .contains("Header name should be latin-1 encodable."));
}

#[test]
fn test_invalid_regex_is_rejected_by_clap() {
    let error = Args::try_parse_from([
        "apicheck",
        "https://example.com/openapi.json",
        "--exclude-path-regex",
        "(?(8))",
    ])
    .unwrap_err();

    assert!(error.to_string().contains("Invalid regex: "));
}
