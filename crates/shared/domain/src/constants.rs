/// Translation domain of CPV labels.
pub const DEFAULT_DOMAIN: &str = "cpvCodes";
/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";
/// Locale consulted when the requested one has no entry.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Dataset file name, relative to the dataset root.
pub const CODES_FILE: &str = "cpvCodes.json";
/// Legacy mapping file name, relative to the dataset root.
pub const MAPPINGS_FILE: &str = "cpvMappings.json";

/// Prefix of configuration environment variables (`CPV__TRANSLATION__LOCALE`).
pub const CONFIG_ENV_PREFIX: &str = "CPV";
/// Nested key separator of configuration environment variables.
pub const CONFIG_ENV_SEPARATOR: &str = "__";
