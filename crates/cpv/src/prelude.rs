//! Everything needed to query the registry.

pub use crate::factory::RegistryFactory;
pub use cpv_codes::{CodeRegistry, DataLoadError, Entries, LegacyMappingIndex};
pub use cpv_domain::{CodeEntry, CodeRef, CodeType, Level, Version};
pub use cpv_translation::{LocaleAware, NativeTranslator, NullTranslator, Translator};
pub use std::sync::Arc;
