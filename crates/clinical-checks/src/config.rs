//! Configuration for the dataset checks.
//!
//! Only the distributional check is tunable: its overall significance
//! level and the way KS p-values are computed. Column names, dtypes,
//! labels and ranges are fixed properties of the dataset (see
//! [`crate::schema`]).

use serde::{Deserialize, Serialize};

use crate::stats::KsMethod;

/// Default overall significance level of the distributional check.
pub const DEFAULT_KS_ALPHA: f64 = 0.05;

/// Configuration for [`crate::Validator`].
///
/// Use [`CheckConfig::builder()`] to create a validated configuration.
///
/// # Example
///
/// ```rust,ignore
/// use clinical_checks::config::CheckConfig;
/// use clinical_checks::stats::KsMethod;
///
/// let config = CheckConfig::builder()
///     .ks_alpha(0.01)
///     .ks_method(KsMethod::Asymptotic)
///     .build()?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Overall significance level of the distributional check, in (0, 1).
    /// The per-column threshold is derived from it.
    /// Default: 0.05
    pub ks_alpha: f64,

    /// How KS p-values are computed.
    /// Default: Auto
    pub ks_method: KsMethod,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ks_alpha: DEFAULT_KS_ALPHA,
            ks_method: KsMethod::default(),
        }
    }
}

impl CheckConfig {
    /// Create a new configuration builder.
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        validate_alpha(self.ks_alpha)
    }
}

/// Check that a significance level lies strictly between 0 and 1.
pub fn validate_alpha(alpha: f64) -> Result<(), ConfigValidationError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidAlpha(alpha))
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid significance level: {0} (must be strictly between 0.0 and 1.0)")]
    InvalidAlpha(f64),
}

/// Builder for [`CheckConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    ks_alpha: Option<f64>,
    ks_method: Option<KsMethod>,
}

impl CheckConfigBuilder {
    /// Set the overall significance level of the distributional check.
    ///
    /// # Arguments
    /// * `alpha` - Value strictly between 0.0 and 1.0 (e.g., 0.05)
    pub fn ks_alpha(mut self, alpha: f64) -> Self {
        self.ks_alpha = Some(alpha);
        self
    }

    /// Set how KS p-values are computed.
    pub fn ks_method(mut self, method: KsMethod) -> Self {
        self.ks_method = Some(method);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `CheckConfig` or an error if validation fails.
    pub fn build(self) -> Result<CheckConfig, ConfigValidationError> {
        let config = CheckConfig {
            ks_alpha: self.ks_alpha.unwrap_or(DEFAULT_KS_ALPHA),
            ks_method: self.ks_method.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
