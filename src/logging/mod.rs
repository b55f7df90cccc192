//! Log filter construction
//!
//! The binary installs a `tracing-subscriber` registry whose filter comes from
//! [`build_filter_directives`], unless `RUST_LOG` is set.

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tracedash::config::{LogFormat, LoggingConfig};
/// use tracedash::logging::build_filter_directives;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("traces".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,tracedash::traces=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",tracedash::{}={}", component, level));
        }
    }

    filter_str
}
