//! Location resource.

use crate::rest::ResourceKind;

/// A physical location belonging to an organization (`/locations`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location;

impl ResourceKind for Location {
    const NAME: &'static str = "Location";
    const TYPE: &'static str = "locations";
}
