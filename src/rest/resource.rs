//! The [`ResourceKind`] trait.
//!
//! Each IT Glue resource kind is a unit type that declares its name and
//! JSON:API type. All operations are provided by default methods on the trait,
//! so a new kind needs only two constants:
//!
//! ```rust
//! use itglue::rest::ResourceKind;
//!
//! pub struct Contact;
//!
//! impl ResourceKind for Contact {
//!     const NAME: &'static str = "Contact";
//!     const TYPE: &'static str = "contacts";
//! }
//!
//! let contact = Contact::new_resource();
//! assert_eq!(contact.resource_type(), "contacts");
//! ```

use std::fmt::Display;

use serde_json::{Map, Value};

use crate::clients::{Connection, QueryParams};
use crate::rest::{Resource, ResourceError, ResourcePath, ResourceResponse};

/// Operations shared by every resource kind.
///
/// Every operation takes the [`Connection`] to use and an optional parent
/// resource. With a parent, the collection path is nested under the
/// parent's member path (`/organizations/123/configurations`).
///
/// # Example
///
/// ```rust,ignore
/// use itglue::rest::ResourceKind;
/// use itglue::rest::resources::{Configuration, Organization};
///
/// let org = Organization::find(&connection, 123, None).await?;
/// let configs = Configuration::get(&connection, Some(&org)).await?;
///
/// let web = Configuration::filter(&connection, Some(&org), [("name", "web01")]).await?;
/// ```
#[allow(async_fn_in_trait)]
pub trait ResourceKind {
    /// The singular name used in error messages (e.g., "Organization").
    const NAME: &'static str;

    /// The JSON:API type, also the collection path segment
    /// (e.g., "organizations").
    const TYPE: &'static str;

    /// Returns an unsaved resource of this kind.
    #[must_use]
    fn new_resource() -> Resource {
        Resource::new(Self::TYPE)
    }

    /// Returns the collection path, nested under `parent` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParent`] if the parent has no id.
    fn path(parent: Option<&Resource>) -> Result<ResourcePath, ResourceError> {
        ResourcePath::new(Self::TYPE).scoped(parent)
    }

    /// Lists the resources of this kind.
    ///
    /// Only the page returned by the API is loaded; see
    /// [`ResourceResponse::pagination`] to request further pages.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 (e.g., a missing parent),
    /// [`ResourceError::Http`] for other non-2xx responses and
    /// [`ResourceError::MalformedResponse`] for unexpected bodies.
    async fn get(
        connection: &Connection,
        parent: Option<&Resource>,
    ) -> Result<ResourceResponse<Vec<Resource>>, ResourceError> {
        Self::get_with(connection, parent, &QueryParams::new()).await
    }

    /// Lists resources with explicit query parameters.
    ///
    /// Filters, page and sort parameters are passed through unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = QueryParams::new().page_size(100).sort("name");
    /// let orgs = Organization::get_with(&connection, None, &params).await?;
    /// ```
    async fn get_with(
        connection: &Connection,
        parent: Option<&Resource>,
        params: &QueryParams,
    ) -> Result<ResourceResponse<Vec<Resource>>, ResourceError> {
        let path = Self::path(parent)?.build();

        let params = (!params.is_empty()).then_some(params);
        let response = connection
            .get(&path, params)
            .await
            .map_err(|e| ResourceError::from_request(e, Self::NAME, &path))?;

        ResourceResponse::<Vec<Resource>>::from_http_response(response, Self::TYPE)
    }

    /// Lists resources matching every `filter[<key>]=<value>` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingFilters`] if no filter has a
    /// non-empty value, otherwise the same errors as [`get`](Self::get).
    async fn filter<I, K, V>(
        connection: &Connection,
        parent: Option<&Resource>,
        filters: I,
    ) -> Result<ResourceResponse<Vec<Resource>>, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let params = QueryParams::new().filters(filters);
        if !params.has_filters() {
            return Err(ResourceError::MissingFilters {
                resource: Self::NAME,
            });
        }

        Self::get_with(connection, parent, &params).await
    }

    /// Fetches one resource by id.
    ///
    /// The id is percent-encoded into a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on a 404 and
    /// [`ResourceError::TypeMismatch`] if the API returns another type.
    async fn find(
        connection: &Connection,
        id: impl Display,
        parent: Option<&Resource>,
    ) -> Result<ResourceResponse<Resource>, ResourceError> {
        let path = Self::path(parent)?.id(id).build();

        let response = connection
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_request(e, Self::NAME, &path))?;

        ResourceResponse::<Resource>::from_http_response(response, Self::TYPE)
    }

    /// Returns the first resource whose attributes match, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingFilters`] if no attribute has a
    /// non-empty value.
    async fn find_by<I, K, V>(
        connection: &Connection,
        parent: Option<&Resource>,
        attributes: I,
    ) -> Result<Option<Resource>, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let matches = Self::filter(connection, parent, attributes).await?;
        Ok(matches.into_inner().into_iter().next())
    }

    /// Returns the first match, or a new unsaved resource with `attributes`.
    ///
    /// # Errors
    ///
    /// Same as [`find_by`](Self::find_by).
    async fn first_or_initialize<I, K, V>(
        connection: &Connection,
        parent: Option<&Resource>,
        attributes: I,
    ) -> Result<Resource, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let attributes = collect_attributes(attributes);

        match Self::find_by(connection, parent, attributes.clone()).await? {
            Some(existing) => Ok(existing),
            None => Ok(Resource::with_attributes(Self::TYPE, attributes)),
        }
    }

    /// Returns the first match, or creates a resource with `attributes`.
    ///
    /// The created resource is posted under `parent` as well.
    ///
    /// # Errors
    ///
    /// Same as [`find_by`](Self::find_by) and [`Resource::create`].
    async fn first_or_create<I, K, V>(
        connection: &Connection,
        parent: Option<&Resource>,
        attributes: I,
    ) -> Result<Resource, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let attributes = collect_attributes(attributes);

        if let Some(existing) = Self::find_by(connection, parent, attributes.clone()).await? {
            return Ok(existing);
        }

        let mut resource = Resource::with_attributes(Self::TYPE, attributes);
        resource.create(connection, parent, &[]).await?;
        Ok(resource)
    }
}

fn collect_attributes<I, K, V>(attributes: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    attributes
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
