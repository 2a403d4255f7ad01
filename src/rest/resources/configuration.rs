//! Configuration resources.
//!
//! Configurations are the devices and services documented for an
//! organization. Types, statuses and interfaces are separate kinds that
//! configurations refer to by id.

use crate::rest::ResourceKind;

/// A configuration item (`/configurations`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Configuration;

impl ResourceKind for Configuration {
    const NAME: &'static str = "Configuration";
    const TYPE: &'static str = "configurations";
}

/// A configuration type such as "Managed Workstation" (`/configuration_types`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationType;

impl ResourceKind for ConfigurationType {
    const NAME: &'static str = "ConfigurationType";
    const TYPE: &'static str = "configuration_types";
}

/// A configuration status such as "Active" (`/configuration_statuses`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationStatus;

impl ResourceKind for ConfigurationStatus {
    const NAME: &'static str = "ConfigurationStatus";
    const TYPE: &'static str = "configuration_statuses";
}

/// A network interface of a configuration (`/configuration_interfaces`).
///
/// Usually listed under its configuration:
///
/// ```rust,ignore
/// let interfaces = ConfigurationInterface::get(&connection, Some(&config)).await?;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationInterface;

impl ResourceKind for ConfigurationInterface {
    const NAME: &'static str = "ConfigurationInterface";
    const TYPE: &'static str = "configuration_interfaces";
}
