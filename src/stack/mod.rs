//! Strongly-typed identifiers for the technologies a project can use.
//!
//! All ID enums support a `Custom(String)` variant so that values supplied by
//! callers (for example a framework name from a previous detection run) always
//! deserialize, even when this crate does not know them.

#[macro_use]
pub mod id_enum_macro;

pub mod framework_id;
pub mod frontend_id;
pub mod language_id;
pub mod package_manager_id;

pub use framework_id::FrameworkId;
pub use frontend_id::FrontendId;
pub use language_id::LanguageId;
pub use package_manager_id::PackageManagerId;
