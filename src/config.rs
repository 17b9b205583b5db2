// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores se fijan al compilar con option_env!; build.rs los toma de .env
// si existe.
// ============================================================================

use crate::router::BasePath;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            app_title: "Goods Booking".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: option_env!("BASE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
        }
    }

    /// Base sobre la que se escriben todas las entradas del historial
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.base_url)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_known_values() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn base_path_is_normalized() {
        let config = AppConfig {
            base_url: "shop/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.base_path().as_str(), "/shop");
    }
}
