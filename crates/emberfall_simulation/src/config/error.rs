//! Ошибки загрузки конфигов.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// RON не распарсился (синтаксис или форма структуры)
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Значение распарсилось, но не проходит валидацию
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Длительность, скорость, задержка: конечное и неотрицательное
pub(crate) fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("expected a non-negative value, got {value}"),
        ));
    }
    Ok(())
}

/// Вероятность в [0, 1]
pub(crate) fn check_probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(
            field,
            format!("expected a probability in [0, 1], got {value}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::invalid(
            field,
            format!("expected a positive value, got {value}"),
        ));
    }
    Ok(())
}
