//! Facade crate for the CPV registry.
//! Re-exports domain, kernel and feature crates and provides [`RegistryFactory`], the place
//! where a dataset root and a translator are put together.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! ```rust
//! use cpv::prelude::*;
//!
//! # fn main() -> Result<(), DataLoadError> {
//! let translator = Arc::new(NativeTranslator::builder().locale("de").build());
//! let factory = RegistryFactory::new().translator(translator);
//!
//! let codes = factory.codes();
//! let entry = codes.lookup("31532700-1", Version::V2)?.expect("bundled code");
//! assert_eq!(entry.local_name(), "Lampenabdeckungen");
//!
//! let previous = factory.mappings().get_mapping("03000000-1", Version::V2)?;
//! assert_eq!(previous.map(|r| r.code), Some("01000000-7".to_owned()));
//! # Ok(())
//! # }
//! ```

pub mod factory;
pub mod prelude;

pub use crate::factory::RegistryFactory;
pub use cpv_codes as codes;
pub use cpv_domain as domain;
pub use cpv_kernel as kernel;
pub use cpv_translation as translation;
