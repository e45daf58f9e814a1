use std::sync::LazyLock;

use config::Config;

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub extractor: super::extractor_config::ExtractorConfig,
}

// The config file is optional: every extractor setting has a usable default.
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    Config::builder()
        .add_source(config::File::with_name("Config").required(false))
        .build()
        .expect("Should build config sources")
        .try_deserialize()
        .expect("Should deserialize built config into struct")
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::extractor_config::BalanceMatchMode;

    #[test]
    fn test_empty_config_uses_defaults() {
        let app_config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(app_config.extractor.lookahead_window, 20);
        assert_eq!(app_config.extractor.dust_threshold, 50.0);
        assert_eq!(
            app_config.extractor.balance_match_mode,
            BalanceMatchMode::WholeLine
        );
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let toml = r#"
            [extractor]
            lookahead_window = 15
            dust_threshold = 0.01
            balance_match_mode = "anywhere-in-line"
        "#;

        let app_config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(app_config.extractor.lookahead_window, 15);
        assert_eq!(app_config.extractor.dust_threshold, 0.01);
        assert_eq!(
            app_config.extractor.balance_match_mode,
            BalanceMatchMode::AnywhereInLine
        );
    }
}
