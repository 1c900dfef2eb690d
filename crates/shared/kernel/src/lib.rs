//! Kernel utilities shared across CPV applications.
//! Keep this crate lightweight; today it only owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use cpv_kernel::config::load_config;
//! use cpv_kernel::domain::config::RegistryConfig;
//!
//! let cfg: RegistryConfig = load_config(Some("cpv.toml")).unwrap();
//! assert!(!cfg.translation.locale.is_empty());
//! ```
pub mod config;

pub use cpv_domain as domain;
