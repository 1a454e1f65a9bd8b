use cly_core::{DefinitionError, NameKind, NameRule};

use super::*;

/// `git`-like parser: one argument, one indefinite argument, two flags. Nothing is required.
fn git() -> Parser {
    git_with(ParserOptions::new().with_prog("git"))
}

fn git_with(options: ParserOptions) -> Parser {
    let mut parser = Parser::with_options(options).unwrap();
    parser
        .add_argument(
            Argument::new("--file", "File to read", "file")
                .short("-f")
                .metavar("PATH")
                .default_value("out.txt"),
        )
        .unwrap();
    parser
        .add_argument(
            Argument::new("--tags", "Tags to apply", "tags")
                .short("-t")
                .indefinite(true)
                .default_value("latest"),
        )
        .unwrap();
    parser.add_flag(Flag::new("--all", "Stage everything", "all").short("-A")).unwrap();
    parser.add_flag(Flag::new("--verbose", "Print more", "verbose").short("-v")).unwrap();
    parser
}

fn parsed(parser: &Parser, args: &[&str]) -> Matches {
    match parser.parse(args.iter().copied()) {
        Ok(Outcome::Parsed(matches)) => matches,
        other => panic!("expected matches for {args:?}, got {other:?}"),
    }
}

fn rejected(parser: &Parser, args: &[&str]) -> Rejection {
    match parser.parse(args.iter().copied()) {
        Err(rejection) => rejection,
        other => panic!("expected a rejection for {args:?}, got {other:?}"),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ========================================
// Flags and arguments
// ========================================

#[test]
fn test_empty_command_line_fills_defaults() {
    let matches = parsed(&git(), &[]);
    assert!(!matches.get_flag("all"));
    assert!(!matches.get_flag("verbose"));
    assert_eq!(matches.get("all"), Some(&Value::Flag(false)));
    assert_eq!(matches.get_one("file"), Some("out.txt"));
    assert_eq!(matches.get_many("tags"), Some(&strings(&["latest"])[..]));
    assert!(matches.unknown().is_empty());
}

#[test]
fn test_long_and_short_names() {
    let matches = parsed(&git(), &["--all", "-f", "a.txt"]);
    assert!(matches.get_flag("all"));
    assert!(!matches.get_flag("verbose"));
    assert_eq!(matches.get_one("file"), Some("a.txt"));

    let matches = parsed(&git(), &["-A", "--file", "b.txt", "--verbose"]);
    assert!(matches.get_flag("all"));
    assert!(matches.get_flag("verbose"));
    assert_eq!(matches.get_one("file"), Some("b.txt"));
}

#[test]
fn test_repeated_argument_last_wins() {
    let matches = parsed(&git(), &["-f", "a", "--file", "b"]);
    assert_eq!(matches.get_one("file"), Some("b"));
}

#[test]
fn test_indefinite_stops_at_registered_name() {
    let matches = parsed(&git(), &["-t", "a", "b", "-v"]);
    assert_eq!(matches.get_many("tags"), Some(&strings(&["a", "b"])[..]));
    assert!(matches.get_flag("verbose"));
}

#[test]
fn test_indefinite_takes_unregistered_dash_tokens() {
    let matches = parsed(&git(), &["--tags", "-x", "y", "--nope"]);
    assert_eq!(matches.get_many("tags"), Some(&strings(&["-x", "y", "--nope"])[..]));
}

// ========================================
// Assignments
// ========================================

#[test]
fn test_assignment_splits_at_first_equals() {
    let matches = parsed(&git(), &["--file=a=b"]);
    assert_eq!(matches.get_one("file"), Some("a=b"));
}

#[test]
fn test_assignment_with_short_name() {
    let matches = parsed(&git(), &["-f=x.txt"]);
    assert_eq!(matches.get_one("file"), Some("x.txt"));
}

#[test]
fn test_assignment_to_indefinite_argument() {
    let matches = parsed(&git(), &["--tags=beta"]);
    assert_eq!(matches.get_many("tags"), Some(&strings(&["beta"])[..]));
}

#[test]
fn test_flag_rejects_assignment() {
    let rejection = rejected(&git(), &["--all=yes"]);
    assert_eq!(
        rejection.reason,
        RejectReason::FlagWithValue {
            name: "--all".to_string()
        }
    );
}

#[test]
fn test_unknown_assignment_is_rejected_whole() {
    let rejection = rejected(&git(), &["--nope=1"]);
    assert_eq!(
        rejection.reason,
        RejectReason::Unrecognised {
            name: "--nope=1".to_string()
        }
    );
}

// ========================================
// Clusters
// ========================================

#[test]
fn test_cluster_of_flags() {
    let matches = parsed(&git(), &["-Av"]);
    assert!(matches.get_flag("all"));
    assert!(matches.get_flag("verbose"));
}

#[test]
fn test_cluster_ending_with_argument() {
    let matches = parsed(&git(), &["-vf", "x.txt"]);
    assert!(matches.get_flag("verbose"));
    assert_eq!(matches.get_one("file"), Some("x.txt"));
}

#[test]
fn test_cluster_ending_with_indefinite_argument() {
    let matches = parsed(&git(), &["-vt", "a", "b", "-A"]);
    assert_eq!(matches.get_many("tags"), Some(&strings(&["a", "b"])[..]));
    assert!(matches.get_flag("verbose"));
    assert!(matches.get_flag("all"));
}

#[test]
fn test_cluster_ending_with_indefinite_argument_without_values() {
    let rejection = rejected(&git(), &["-vt", "-A"]);
    assert_eq!(
        rejection.reason,
        RejectReason::MissingValue {
            name: "-vt".to_string()
        }
    );
    assert_eq!(
        rejection.details.as_deref(),
        Some("\nCorrect usage:\n\tgit -vt <value1> <value2> ... <valuen>\n\nDescription:\n\tTags to apply")
    );
}

#[test]
fn test_argument_inside_cluster_is_rejected() {
    let rejection = rejected(&git(), &["-fv", "x.txt"]);
    assert_eq!(
        rejection.reason,
        RejectReason::ArgumentInsideCluster {
            cluster: "-fv".to_string()
        }
    );
}

#[test]
fn test_cluster_with_unknown_letter() {
    let rejection = rejected(&git(), &["-Az"]);
    assert_eq!(
        rejection.reason,
        RejectReason::Unrecognised {
            name: "-z".to_string()
        }
    );
}

#[test]
fn test_clusters_are_off_outside_strict_mode() {
    let mut parser = Parser::with_options(ParserOptions::new().with_prog("p").with_strict_mode(false)).unwrap();
    parser.add_flag(Flag::new("-a", "", "a")).unwrap();
    parser.add_flag(Flag::new("-b", "", "b")).unwrap();
    let rejection = rejected(&parser, &["-ab"]);
    assert_eq!(
        rejection.reason,
        RejectReason::Unrecognised {
            name: "-ab".to_string()
        }
    );
}

// ========================================
// Help
// ========================================

#[test]
fn test_help_flag_returns_help_page() {
    let parser = git();
    assert_eq!(parser.parse(["--help"]), Ok(Outcome::Help(parser.help())));
    assert_eq!(parser.parse(["-h"]), Ok(Outcome::Help(parser.help())));
}

#[test]
fn test_help_stops_the_scan() {
    let parser = git();
    assert!(matches!(parser.parse(["-h", "--nope"]), Ok(Outcome::Help(_))));
}

#[test]
fn test_help_inside_cluster() {
    let parser = git();
    assert!(matches!(parser.parse(["-vh"]), Ok(Outcome::Help(_))));
}

#[test]
fn test_custom_help_flag() {
    let parser = git_with(ParserOptions::new().with_prog("git").with_help_flag("-?, --usage"));
    assert!(matches!(parser.parse(["--usage"]), Ok(Outcome::Help(_))));
    assert!(matches!(parser.parse(["-?"]), Ok(Outcome::Help(_))));

    let rejection = rejected(&parser, &["--help"]);
    assert_eq!(rejection.help_long, "--usage");
}

// ========================================
// Rejections
// ========================================

#[test]
fn test_unknown_token_is_rejected() {
    let rejection = rejected(&git(), &["extra"]);
    assert_eq!(rejection.exit_code(), REJECTION_EXIT_CODE);
    assert_eq!(
        rejection.to_string(),
        "git: extra is not a recognised flag or argument\n\nUse git --help for detailed help message"
    );
}

#[test]
fn test_unknown_tokens_recorded_when_allowed() {
    let parser = git_with(ParserOptions::new().with_prog("git").with_allow_unknown_args(true));
    let matches = parsed(&parser, &["extra", "--nope", "-v", "-Az"]);
    assert_eq!(matches.unknown(), ["extra", "--nope", "-z"]);
    assert!(matches.get_flag("verbose"));
    assert!(matches.get_flag("all"));
}

#[test]
fn test_single_value_rejects_dash_prefixed_value() {
    let rejection = rejected(&git(), &["-f", "-v"]);
    assert_eq!(
        rejection.reason,
        RejectReason::MissingValue {
            name: "-f".to_string()
        }
    );
    assert_eq!(
        rejection.details.as_deref(),
        Some("\nCorrect usage:\n\tgit -f <PATH>\n\nDescription:\n\tFile to read")
    );
}

#[test]
fn test_single_value_rejects_empty_value() {
    let rejection = rejected(&git(), &["--file", ""]);
    assert_eq!(
        rejection.reason,
        RejectReason::MissingValue {
            name: "--file".to_string()
        }
    );
}

#[test]
fn test_argument_at_end_of_line_has_no_value() {
    let rejection = rejected(&git(), &["--file"]);
    assert_eq!(
        rejection.reason,
        RejectReason::MissingValue {
            name: "--file".to_string()
        }
    );
}

#[test]
fn test_indefinite_without_values() {
    let rejection = rejected(&git(), &["-t", "-v"]);
    assert_eq!(
        rejection.to_string(),
        "git: -t is an argument and it requires some value to work\n\
         \n\
         Correct usage:\n\
         \tgit -t <value1> <value2> ... <valuen>\n\
         \n\
         Description:\n\
         \tTags to apply\n\
         \n\
         Use git --help for detailed help message"
    );
}

#[test]
fn test_missing_required_arguments() {
    let mut parser = git();
    parser
        .add_argument(Argument::new("--message", "Commit message", "message").short("-m"))
        .unwrap();
    parser
        .add_argument(Argument::new("--author", "Author", "author"))
        .unwrap();

    let rejection = rejected(&parser, &["-v"]);
    assert_eq!(
        rejection.reason,
        RejectReason::MissingRequired {
            names: strings(&["--message", "--author"])
        }
    );
    assert_eq!(rejection.details, Some(format!("\nUsage:\n\t{}", parser.usage())));

    let matches = parsed(&parser, &["-m", "init", "--author=me"]);
    assert_eq!(matches.get_one("message"), Some("init"));
    assert_eq!(matches.get_one("author"), Some("me"));
}

// ========================================
// Registration
// ========================================

#[test]
fn test_redundant_long_name() {
    let mut parser = git();
    assert_eq!(
        parser.add_flag(Flag::new("--all", "", "again")),
        Err(DefinitionError::Redundant {
            kind: NameKind::Long,
            name: "--all".to_string()
        })
    );
}

#[test]
fn test_short_name_clashes_with_help() {
    let mut parser = git();
    assert_eq!(
        parser.add_flag(Flag::new("--hint", "", "hint").short("-h")),
        Err(DefinitionError::Redundant {
            kind: NameKind::Short,
            name: "-h".to_string()
        })
    );
}

#[test]
fn test_failed_registration_leaves_registry_untouched() {
    let mut parser = git();
    assert!(parser.add_flag(Flag::new("--fresh", "", "fresh").short("-A")).is_err());
    assert_eq!(parser.flags().len(), 2);
    let rejection = rejected(&parser, &["--fresh"]);
    assert!(matches!(rejection.reason, RejectReason::Unrecognised { .. }));
}

#[test]
fn test_empty_names_rejected() {
    let mut parser = git();
    assert_eq!(
        parser.add_flag(Flag::new("", "", "x")),
        Err(DefinitionError::EmptyName { kind: NameKind::Long })
    );
    assert_eq!(
        parser.add_argument(Argument::new("--x", "", "x").short("")),
        Err(DefinitionError::EmptyName { kind: NameKind::Short })
    );
}

#[test]
fn test_strict_mode_style_rules() {
    let mut parser = git();
    assert_eq!(
        parser.add_flag(Flag::new("all-files", "", "x")),
        Err(DefinitionError::InvalidLongName {
            name: "all-files".to_string(),
            reason: NameRule::MissingPrefix
        })
    );
    assert_eq!(
        parser.add_flag(Flag::new("--dry_run", "", "x")),
        Err(DefinitionError::InvalidLongName {
            name: "--dry_run".to_string(),
            reason: NameRule::NotAlphanumeric
        })
    );
    assert_eq!(
        parser.add_flag(Flag::new("--dry-run", "", "x").short("-dr")),
        Err(DefinitionError::InvalidShortName {
            name: "-dr".to_string(),
            reason: NameRule::WrongLength { len: 2 }
        })
    );
    assert!(parser.add_flag(Flag::new("--dry-run", "", "dry_run").short("-d")).is_ok());
}

#[test]
fn test_free_style_names_outside_strict_mode() {
    let mut parser = Parser::with_options(ParserOptions::new().with_prog("p").with_strict_mode(false)).unwrap();
    parser.add_argument(Argument::new("file", "", "file").short("f")).unwrap();
    parser.add_flag(Flag::new("+x", "", "x")).unwrap();

    let matches = parsed(&parser, &["f", "a.txt", "+x"]);
    assert_eq!(matches.get_one("file"), Some("a.txt"));
    assert!(matches.get_flag("x"));
}

#[test]
fn test_invalid_help_flag_option() {
    assert_eq!(
        Parser::with_options(ParserOptions::new().with_help_flag("--help")).err(),
        Some(DefinitionError::InvalidHelpFlag {
            value: "--help".to_string()
        })
    );
}

// ========================================
// Spec-string registration
// ========================================

#[test]
fn test_add_arg_from_spec() {
    let mut parser = git();
    let argument = parser.add_arg("--out -o [Output file], FILE, false, a.out", "out").unwrap();
    assert_eq!(argument.metavar.as_deref(), Some("FILE"));

    let matches = parsed(&parser, &[]);
    assert_eq!(matches.get_one("out"), Some("a.out"));
    let matches = parsed(&parser, &["-vo", "b.out"]);
    assert_eq!(matches.get_one("out"), Some("b.out"));
}

#[test]
fn test_flag_from_spec() {
    let mut parser = git();
    parser.flag("--quiet -q [Print less]", "quiet").unwrap();
    assert!(parsed(&parser, &["-q"]).get_flag("quiet"));
}

#[test]
fn test_add_arg_spec_error() {
    let mut parser = git();
    assert!(matches!(
        parser.add_arg("--out -o Output file", "out"),
        Err(RegisterError::Spec(_))
    ));
}

#[test]
fn test_add_arg_definition_error() {
    let mut parser = git();
    assert_eq!(
        parser.flag("--all [Again]", "all").err(),
        Some(RegisterError::Definition(DefinitionError::Redundant {
            kind: NameKind::Long,
            name: "--all".to_string()
        }))
    );
}

// ========================================
// Shared destinations
// ========================================

#[test]
fn test_supplied_flag_survives_default_on_shared_dest() {
    let mut parser = Parser::with_options(ParserOptions::new().with_prog("p")).unwrap();
    parser
        .add_argument(Argument::new("--x", "", "same").default_value("dflt"))
        .unwrap();
    parser.add_flag(Flag::new("--y", "", "same")).unwrap();

    assert_eq!(parsed(&parser, &["--y"]).get("same"), Some(&Value::Flag(true)));
    assert_eq!(parsed(&parser, &[]).get_one("same"), Some("dflt"));
}
