use figment::Jail;
use icdxn_config::{IcdxnConfig, PROJECT_CONFIG_FILE};

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ICDXN_SERVER__PORT", "7070");
        jail.set_env("ICDXN_DATABASE__PATH", "env.db");

        let config = IcdxnConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.database.path, "env.db");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            PROJECT_CONFIG_FILE,
            r#"
[server]
port = 6000
"#,
        )?;
        jail.set_env("ICDXN_SERVER__PORT", "6001");

        let config = IcdxnConfig::load().expect("config loads");
        assert_eq!(config.server.port, 6001);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "ICDXN_EXPORT__DIR=from-dotenv\n")?;

        let config = IcdxnConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.export.dir, std::path::PathBuf::from("from-dotenv"));
        Ok(())
    });
}
