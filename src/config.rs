use serde::{Deserialize, Serialize};
use crate::utils::constants::{DEFAULT_SESSION_STORAGE_KEY, SUPABASE_ANON_KEY, SUPABASE_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub environment: String,
    pub enable_logging: bool,
    pub province_refresh_minutes: i64,
    pub session_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase_url: SUPABASE_URL.to_string(),
            supabase_anon_key: SUPABASE_ANON_KEY.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            province_refresh_minutes: 30,
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            supabase_url: SUPABASE_URL.to_string(),
            supabase_anon_key: SUPABASE_ANON_KEY.to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            province_refresh_minutes: option_env!("PROVINCE_REFRESH_MINUTES")
                .unwrap_or("30").parse().unwrap_or(30),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .unwrap_or(DEFAULT_SESSION_STORAGE_KEY).to_string(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log: en producción solo avisos y errores
    pub fn log_level(&self) -> log::Level {
        if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Info
        }
    }

    /// Ventana de frescura de provincias; `None` si está desactivada (<= 0)
    pub fn province_freshness(&self) -> Option<chrono::Duration> {
        if self.province_refresh_minutes > 0 {
            Some(chrono::Duration::minutes(self.province_refresh_minutes))
        } else {
            None
        }
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
    fn default_config_targets_development() {
        let config = AppConfig::default();
        assert!(!config.is_production());
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.province_freshness(), Some(chrono::Duration::minutes(30)));
    }

    #[test]
    fn non_positive_window_disables_province_freshness() {
        let config = AppConfig {
            province_refresh_minutes: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.province_freshness(), None);
    }

    #[test]
    fn production_only_logs_warnings() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
