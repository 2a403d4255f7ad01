//! IT Glue resource kinds.
//!
//! Each kind is a unit type implementing [`ResourceKind`](crate::rest::ResourceKind);
//! every operation (`get`, `filter`, `find`, `find_by`, `first_or_initialize`,
//! `first_or_create`) comes from the trait.
//!
//! | Kind | Path |
//! |------|------|
//! | [`Organization`] | `/organizations` |
//! | [`Configuration`] | `/configurations` |
//! | [`ConfigurationType`] | `/configuration_types` |
//! | [`ConfigurationStatus`] | `/configuration_statuses` |
//! | [`ConfigurationInterface`] | `/configuration_interfaces` |
//! | [`Location`] | `/locations` |
//! | [`FlexibleAsset`] | `/flexible_assets` |
//! | [`FlexibleAssetType`] | `/flexible_asset_types` |
//! | [`FlexibleAssetField`] | `/flexible_asset_fields` |
//!
//! # Example
//!
//! ```rust,ignore
//! use itglue::rest::ResourceKind;
//! use itglue::rest::resources::{FlexibleAsset, FlexibleAssetType, Organization};
//!
//! let acme = Organization::find_by(&connection, None, [("name", "Acme")]).await?;
//!
//! let kind = FlexibleAssetType::find(&connection, 42, None).await?;
//! let assets = FlexibleAsset::filter(
//!     &connection,
//!     None,
//!     [("flexible_asset_type_id", kind.id())],
//! )
//! .await?;
//! ```

pub mod configuration;
pub mod flexible_asset;
pub mod location;
pub mod organization;

pub use configuration::{
    Configuration, ConfigurationInterface, ConfigurationStatus, ConfigurationType,
};
pub use flexible_asset::{
    normalize_ids, prepare_tag_traits, FlexibleAsset, FlexibleAssetField, FlexibleAssetType,
};
pub use location::Location;
pub use organization::Organization;
