use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_load() {
    match parse(&["geoload", "load", "https://example.com/a.geojson"]) {
        CliCommand::Load { param, output } => {
            assert_eq!(param, "https://example.com/a.geojson");
            assert!(!output.pretty);
            assert!(output.crs.is_none());
        }
        _ => panic!("expected Load"),
    }
}

#[test]
fn cli_parse_load_pretty_and_crs() {
    match parse(&["geoload", "load", "%7B%7D", "--pretty", "--crs", "gcj02"]) {
        CliCommand::Load { param, output } => {
            assert_eq!(param, "%7B%7D");
            assert!(output.pretty);
            assert_eq!(output.crs, Some(Crs::Gcj02));
        }
        _ => panic!("expected Load with flags"),
    }
}

#[test]
fn cli_parse_load_rejects_unknown_crs() {
    assert!(Cli::try_parse_from(["geoload", "load", "x", "--crs", "EPSG:3857"]).is_err());
}

#[test]
fn cli_parse_page() {
    match parse(&["geoload", "page", "https://v.example.com/?geojson=x"]) {
        CliCommand::Page {
            page_url,
            param_name,
            ..
        } => {
            assert_eq!(page_url, "https://v.example.com/?geojson=x");
            assert!(param_name.is_none());
        }
        _ => panic!("expected Page"),
    }
}

#[test]
fn cli_parse_page_param_name() {
    match parse(&["geoload", "page", "https://v/?d=x", "--param-name", "d"]) {
        CliCommand::Page { param_name, .. } => assert_eq!(param_name.as_deref(), Some("d")),
        _ => panic!("expected Page with param name"),
    }
}

#[test]
fn cli_parse_encode() {
    match parse(&["geoload", "encode", "data.geojson"]) {
        CliCommand::Encode { path, raw, page } => {
            assert_eq!(path, "data.geojson");
            assert!(!raw);
            assert!(page.is_none());
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_encode_raw_and_page() {
    match parse(&[
        "geoload",
        "encode",
        "data.geojson",
        "--raw",
        "--page",
        "https://v.example.com/",
    ]) {
        CliCommand::Encode { raw, page, .. } => {
            assert!(raw);
            assert_eq!(page.as_deref(), Some("https://v.example.com/"));
        }
        _ => panic!("expected Encode with flags"),
    }
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["geoload"]).is_err());
}
