//! CLI integration tests
//!
//! Runs subcommands in-process against profile files.

#[cfg(test)]
mod tests {
    use crate::common::{ProfileFactory, RoleFactory};
    use crate::{assert_err, assert_ok};
    use auzap_authz::AuthzError;
    use auzap_authz::cli::{Cli, Command, execute, load_profile};
    use auzap_authz::config::Config;
    use clap::Parser;

    async fn run(command: Command, config: &Config) -> (bool, String) {
        let mut out = Vec::new();
        let granted = assert_ok!(execute(&command, config, &mut out).await);
        (granted, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_check_all_granted() {
        let file = ProfileFactory::json_file(&ProfileFactory::with_role(&RoleFactory::admin()));
        let command = Command::Check {
            profile: file.path().to_path_buf(),
            permissions: vec!["dashboard.read".to_string(), "settings.read".to_string()],
        };

        let (granted, output) = run(command, &Config::default()).await;
        assert!(granted);
        assert_eq!(
            output,
            "granted dashboard.read (namespace wildcard dashboard.*)\ngranted settings.read (exact)\n"
        );
    }

    #[tokio::test]
    async fn test_check_partial_denial() {
        let file = ProfileFactory::json_file(&ProfileFactory::with_role(
            &RoleFactory::receptionist(),
        ));
        let command = Command::Check {
            profile: file.path().to_path_buf(),
            permissions: vec!["clients.read".to_string(), "billing.read".to_string()],
        };

        let (granted, output) = run(command, &Config::default()).await;
        assert!(!granted);
        assert!(output.contains("granted clients.read (exact)"));
        assert!(output.contains("denied  billing.read (missing permission: billing.read)"));
    }

    #[tokio::test]
    async fn test_check_profile_without_role() {
        let file = ProfileFactory::raw_file(r#"{"role": null}"#, ".json");
        let command = Command::Check {
            profile: file.path().to_path_buf(),
            permissions: vec!["dashboard.read".to_string()],
        };

        let (granted, output) = run(command, &Config::default()).await;
        assert!(!granted);
        assert_eq!(output, "denied  dashboard.read (role not loaded)\n");
    }

    #[tokio::test]
    async fn test_gate_command() {
        let config = assert_ok!(Config::from_yaml(
            "gates:\n  settings:\n    kind: admin\n"
        ));
        let file = ProfileFactory::raw_file(
            "role:\n  name: admin\n  permissions: []\n",
            ".yaml",
        );

        let command = Command::Gate {
            profile: file.path().to_path_buf(),
            page: "settings".to_string(),
        };
        let (granted, output) = run(command, &config).await;
        assert!(granted);
        assert_eq!(output, "granted settings\n");
    }

    #[tokio::test]
    async fn test_gate_command_unknown_page() {
        let file = ProfileFactory::json_file(&ProfileFactory::with_role(&RoleFactory::admin()));
        let command = Command::Gate {
            profile: file.path().to_path_buf(),
            page: "billing".to_string(),
        };

        let mut out = Vec::new();
        let err = assert_err!(execute(&command, &Config::default(), &mut out).await);
        assert!(matches!(err, AuthzError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_whoami() {
        let file = ProfileFactory::json_file(&ProfileFactory::with_role(
            &RoleFactory::with_permissions("super_admin", &["pets.read", "clients.read"]),
        ));
        let command = Command::Whoami {
            profile: file.path().to_path_buf(),
        };

        let (loaded, output) = run(command, &Config::default()).await;
        assert!(loaded);
        assert_eq!(
            output,
            "role: super_admin\nadmin: true\nsuper_admin: true\npermissions:\n  - clients.read\n  - pets.read\n"
        );
    }

    #[tokio::test]
    async fn test_whoami_without_role() {
        let file = ProfileFactory::raw_file("{}", ".json");
        let command = Command::Whoami {
            profile: file.path().to_path_buf(),
        };

        let (loaded, output) = run(command, &Config::default()).await;
        assert!(!loaded);
        assert!(output.starts_with("role: <not loaded>\n"));
    }

    #[tokio::test]
    async fn test_load_profile_errors() {
        let file = ProfileFactory::raw_file("not json", ".json");
        let err = assert_err!(load_profile(file.path()).await);
        assert!(matches!(err, AuthzError::Json(_)));

        let err = assert_err!(load_profile(std::path::Path::new("/nonexistent/profile.json")).await);
        assert!(matches!(err, AuthzError::Io(_)));
    }

    #[test]
    fn test_argument_parsing() {
        let cli = Cli::try_parse_from([
            "auzap-authz",
            "--json-logs",
            "check",
            "--profile",
            "me.json",
            "dashboard.read",
            "billing.*",
        ])
        .unwrap();

        assert!(cli.json_logs);
        match cli.command {
            Command::Check {
                profile,
                permissions,
            } => {
                assert_eq!(profile.to_str(), Some("me.json"));
                assert_eq!(permissions, vec!["dashboard.read", "billing.*"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_a_permission() {
        let result = Cli::try_parse_from(["auzap-authz", "check", "--profile", "me.json"]);
        assert!(result.is_err());
    }
}
