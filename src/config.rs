use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Root of the exported photo tree (e.g. a Lightroom export).
    #[serde(default)]
    pub export_path: String,
    /// Path of the target library catalog file.
    #[serde(default)]
    pub library_path: String,
    /// Where the missing-items CSV report is written.
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

fn default_report_path() -> String {
    "missing-files.csv".to_string()
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_defaults_when_absent() {
        let config: AppConfig = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.report_path, "missing-files.csv");
        assert!(config.export_path.is_empty());
    }
}
