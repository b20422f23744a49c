//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::Cli;

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from_iter(["json-card"]);

        assert!(cli.url.is_none());
        assert!(cli.input.is_none());
        assert!(cli.timeout.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.fail_on_delivery_error);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_url_and_input() {
        let cli = Cli::parse_from_iter([
            "json-card",
            "--url",
            "https://example.com/webhook",
            "--input",
            "data.json",
        ]);

        assert_eq!(cli.url.as_deref(), Some("https://example.com/webhook"));
        assert_eq!(cli.input, Some(PathBuf::from("data.json")));
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["json-card", "-i", "-", "-c", "cfg.toml", "-v"]);

        assert_eq!(cli.input, Some(PathBuf::from("-")));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_timeout() {
        let cli = Cli::parse_from_iter(["json-card", "--timeout", "10"]);

        assert_eq!(cli.timeout, Some(10));
    }

    #[test]
    fn parse_behavior_flags() {
        let cli = Cli::parse_from_iter(["json-card", "--dry-run", "--fail-on-delivery-error"]);

        assert!(cli.dry_run);
        assert!(cli.fail_on_delivery_error);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        use clap::Parser;

        let result = Cli::try_parse_from(["json-card", "--timeout", "soon"]);

        assert!(result.is_err());
    }

    #[test]
    fn header_option_is_not_accepted() {
        use clap::Parser;

        let result = Cli::try_parse_from(["json-card", "--header", "X-Api-Key=secret"]);

        assert!(result.is_err());
    }

    #[test]
    fn positional_subcommand_is_not_accepted() {
        use clap::Parser;

        let result = Cli::try_parse_from(["json-card", "init"]);

        assert!(result.is_err());
    }
}
