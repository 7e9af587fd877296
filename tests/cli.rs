#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;
    use upcheck::commands::Cli;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands_parse() {
        assert!(Cli::try_parse_from(["upcheck", "check"]).is_ok());
        assert!(Cli::try_parse_from(["upcheck", "status"]).is_ok());
        assert!(Cli::try_parse_from(["upcheck", "clear"]).is_ok());
        assert!(Cli::try_parse_from(["upcheck", "init"]).is_ok());
        assert!(Cli::try_parse_from(["upcheck", "init", "--delete"]).is_ok());
    }

    #[test]
    fn test_bare_invocation_is_rejected() {
        // arg_required_else_help turns a bare call into a help error.
        assert!(Cli::try_parse_from(["upcheck"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["upcheck", "upgrade"]).is_err());
    }
}
