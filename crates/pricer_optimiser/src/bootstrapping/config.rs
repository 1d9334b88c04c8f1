//! Bootstrap configuration types.
//!
//! Controls convergence criteria and interpolation for the sequential
//! hazard-rate bootstrap.

use num_traits::Float;
use pricer_core::types::time::InterpolationMethod;

/// Configuration for credit-curve bootstrapping.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use pricer_optimiser::bootstrapping::GenericBootstrapConfig;
///
/// let config: GenericBootstrapConfig<f64> = GenericBootstrapConfig::default();
/// assert!(config.mtm_tolerance < 1e-10);
///
/// let config = GenericBootstrapConfig::<f64>::builder()
///     .mtm_tolerance(1e-13)
///     .max_iterations(200)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GenericBootstrapConfig<T: Float> {
    /// Convergence tolerance on `|MTM / notional|`.
    ///
    /// Default: 1e-12, per the standard convention that a par instrument
    /// reprices to (effectively) zero.
    pub mtm_tolerance: T,

    /// Convergence tolerance on the hazard-rate step between iterations.
    ///
    /// Default: 1e-14.
    pub hazard_tolerance: T,

    /// Maximum number of solver iterations per tenor.
    ///
    /// Default: 100.
    pub max_iterations: usize,

    /// Interpolation method used both while solving and on the returned
    /// curve.
    ///
    /// Default: `FlatForward`, matching the model's piecewise-constant
    /// hazard assumption.
    pub interpolation: InterpolationMethod,
}

impl<T: Float> Default for GenericBootstrapConfig<T> {
    fn default() -> Self {
        Self {
            mtm_tolerance: T::from(1e-12).unwrap(),
            hazard_tolerance: T::from(1e-14).unwrap(),
            max_iterations: 100,
            interpolation: InterpolationMethod::FlatForward,
        }
    }
}

impl<T: Float> GenericBootstrapConfig<T> {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration builder for fluent construction.
    pub fn builder() -> GenericBootstrapConfigBuilder<T> {
        GenericBootstrapConfigBuilder::new()
    }

    /// Sets the MTM convergence tolerance.
    pub fn with_mtm_tolerance(mut self, tolerance: T) -> Self {
        self.mtm_tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the interpolation method.
    pub fn with_interpolation(mut self, interpolation: InterpolationMethod) -> Self {
        self.interpolation = interpolation;
        self
    }
}

impl<T: Float> Default for GenericBootstrapConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`GenericBootstrapConfig`].
#[derive(Debug, Clone)]
pub struct GenericBootstrapConfigBuilder<T: Float> {
    config: GenericBootstrapConfig<T>,
}

impl<T: Float> GenericBootstrapConfigBuilder<T> {
    /// Creates a new builder seeded with default values.
    pub fn new() -> Self {
        Self {
            config: GenericBootstrapConfig::default(),
        }
    }

    /// Sets the MTM convergence tolerance.
    pub fn mtm_tolerance(mut self, tolerance: T) -> Self {
        self.config.mtm_tolerance = tolerance;
        self
    }

    /// Sets the hazard-change convergence tolerance.
    pub fn hazard_tolerance(mut self, tolerance: T) -> Self {
        self.config.hazard_tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations per tenor.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Sets the interpolation method.
    pub fn interpolation(mut self, interpolation: InterpolationMethod) -> Self {
        self.config.interpolation = interpolation;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GenericBootstrapConfig<T> {
        self.config
    }
}
