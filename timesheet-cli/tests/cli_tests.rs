use clap::Parser;
use pretty_assertions::assert_eq;
use std::io::Write;
use timesheet_cli::{run, Cli, Command};

fn run_with(command: Command, stdin: &str) -> anyhow::Result<String> {
    run(&command, stdin.as_bytes())
}

const CLIENTS: &str = r#"[
    {"client": {"id": 3, "name": "Globex"}},
    {"client": {"id": 1, "name": "Acme"}},
    {"client": {"id": 3, "name": "Globex Corp"}}
]"#;

// ── Argument parsing ─────────────────────────────────────────────

#[test]
fn parses_ids_with_default_index_key() {
    let cli = Cli::try_parse_from(["timesheet", "ids", "--main-key", "client"]).unwrap();
    assert!(!cli.verbose);
    assert_eq!(
        cli.command,
        Command::Ids {
            main_key: "client".into(),
            index_key: "id".into(),
            input: None,
        }
    );
}

#[test]
fn verbose_is_global() {
    let cli = Cli::try_parse_from(["timesheet", "format-time", "1.5", "-v"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn parses_parse_date_options() {
    let cli = Cli::try_parse_from([
        "timesheet",
        "parse-date",
        "tomorrow",
        "--reference",
        "2024-03-15T14:45:30Z",
        "--utc-offset",
        "-60",
    ])
    .unwrap();
    match cli.command {
        Command::ParseDate {
            text,
            reference,
            utc_offset,
        } => {
            assert_eq!(text, "tomorrow");
            assert_eq!(reference.unwrap().to_rfc3339(), "2024-03-15T14:45:30+00:00");
            assert_eq!(utc_offset, -60);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_date_accepts_leading_minus() {
    let cli = Cli::try_parse_from(["timesheet", "parse-date", "-2 weeks"]).unwrap();
    match cli.command {
        Command::ParseDate { text, .. } => assert_eq!(text, "-2 weeks"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["timesheet"]).is_err());
}

// ── Commands ─────────────────────────────────────────────────────

#[test]
fn format_time_command() {
    assert_eq!(run_with(Command::FormatTime { hours: 1.5 }, "").unwrap(), "01:30");
}

#[test]
fn format_time_rejects_negative() {
    assert!(run_with(Command::FormatTime { hours: -2.0 }, "").is_err());
}

#[test]
fn ids_command_from_stdin() {
    let out = run_with(
        Command::Ids {
            main_key: "client".into(),
            index_key: "id".into(),
            input: None,
        },
        CLIENTS,
    )
    .unwrap();
    let ids: Vec<i64> = serde_json::from_str(&out).unwrap();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn ids_command_requires_array() {
    let err = run_with(
        Command::Ids {
            main_key: "client".into(),
            index_key: "id".into(),
            input: None,
        },
        r#"{"client": {"id": 1}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a JSON array of entries, got an object"
    );
}

#[test]
fn ids_command_reports_missing_key() {
    let err = run_with(
        Command::Ids {
            main_key: "project".into(),
            index_key: "id".into(),
            input: None,
        },
        CLIENTS,
    )
    .unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "collecting `id` under `project`: Param project does not exist."
    );
}

#[test]
fn by_id_command_last_write_wins() {
    let out = run_with(
        Command::ById {
            main_key: "client".into(),
            input: None,
        },
        CLIENTS,
    )
    .unwrap();
    let map: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(map["1"]["name"], "Acme");
    assert_eq!(map["3"]["name"], "Globex Corp");
    assert_eq!(map.as_object().unwrap().len(), 2);
}

#[test]
fn hours_command() {
    let out = run_with(
        Command::Hours { input: None },
        r#"{"hours": 2, "hours_with_timer": 6.5}"#,
    )
    .unwrap();
    assert_eq!(out, "6.5");
}

#[test]
fn parse_date_command() {
    let out = run_with(
        Command::ParseDate {
            text: "yesterday".into(),
            reference: Some("2024-03-15T14:45:30Z".parse().unwrap()),
            utc_offset: 0,
        },
        "",
    )
    .unwrap();
    assert_eq!(out, "2024-03-14T00:00:00+00:00");
}

#[test]
fn parse_date_command_negative_offset() {
    let out = run_with(
        Command::ParseDate {
            text: "-2 weeks".into(),
            reference: Some("2024-03-15T14:45:30Z".parse().unwrap()),
            utc_offset: 0,
        },
        "",
    )
    .unwrap();
    assert_eq!(out, "2024-03-01T14:45:30+00:00");
}

#[test]
fn parse_date_command_passes_through_gibberish() {
    let out = run_with(
        Command::ParseDate {
            text: "whenever".into(),
            reference: None,
            utc_offset: 0,
        },
        "",
    )
    .unwrap();
    assert_eq!(out, "whenever");
}

#[test]
fn get_command_returns_value() {
    let out = run_with(
        Command::Get {
            field: "a".into(),
            message: None,
            input: None,
        },
        r#"{"a": 1}"#,
    )
    .unwrap();
    assert_eq!(out, "1");
}

#[test]
fn get_command_custom_message() {
    let err = run_with(
        Command::Get {
            field: "a".into(),
            message: Some("msg".into()),
            input: None,
        },
        "{}",
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "msg");
}

#[test]
fn invalid_json_is_reported() {
    let err = run_with(Command::Hours { input: None }, "{not json").unwrap_err();
    assert_eq!(err.to_string(), "parsing JSON input");
}

#[test]
fn reads_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CLIENTS.as_bytes()).unwrap();

    let out = run_with(
        Command::Ids {
            main_key: "client".into(),
            index_key: "name".into(),
            input: Some(file.path().to_path_buf()),
        },
        "",
    )
    .unwrap();
    let names: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(names, vec!["Acme", "Globex", "Globex Corp"]);
}

#[test]
fn missing_input_file_is_reported() {
    let err = run_with(
        Command::Hours {
            input: Some("/nonexistent/timesheet.json".into()),
        },
        "",
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("reading /nonexistent/timesheet.json"));
}
