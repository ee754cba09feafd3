//! Profile configuration — organizational identity for one profile.

use chrono::{DateTime, Utc};

use crate::{validate, FieldValue, Identifier, ProfileResult};

/// Default top label of the reverse-DNS identifier.
pub const DEFAULT_DOMAIN: &str = "org";

/// Organizational identity for a single configuration profile.
///
/// Holds the host identity, optional human-readable metadata, and an
/// optional removal date. The two derived dotted identifiers — the
/// reverse-DNS name `domain.host` and the full identifier path
/// `domain.host.suffix` — are computed once at construction and frozen.
///
/// Construct via [`ProfileConfig::builder`] (or [`ProfileConfig::new`] when
/// only the host is needed). Construction validates every supplied field
/// against its declared kind and fails without a partial result.
#[derive(Clone, Debug)]
pub struct ProfileConfig {
    host: String,
    domain: String,
    description: Option<String>,
    display_name: Option<String>,
    organization: Option<String>,
    removal_date: Option<DateTime<Utc>>,
    rdn: String,
    identifier: String,
}

impl ProfileConfig {
    /// Shorthand for `builder(host).build()`.
    pub fn new(host: impl Into<FieldValue>) -> ProfileResult<Self> {
        Self::builder(host).build()
    }

    pub fn builder(host: impl Into<FieldValue>) -> ProfileConfigBuilder {
        ProfileConfigBuilder {
            host: host.into(),
            domain: None,
            description: None,
            display_name: None,
            organization: None,
            removal_date: None,
            identifier_suffix: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    pub fn removal_date(&self) -> Option<DateTime<Utc>> {
        self.removal_date
    }

    /// The reverse-DNS name, `domain.host`.
    pub fn rdn(&self) -> &str {
        &self.rdn
    }

    /// The full profile identifier path, `domain.host.suffix`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Builder for [`ProfileConfig`].
///
/// Setters accept loosely-typed values; [`build`](Self::build) runs the kind
/// checks. When no identifier suffix is supplied, a fresh one is generated
/// inside `build()` so that every built configuration gets its own suffix.
#[derive(Debug)]
pub struct ProfileConfigBuilder {
    host: FieldValue,
    domain: Option<FieldValue>,
    description: Option<FieldValue>,
    display_name: Option<FieldValue>,
    organization: Option<FieldValue>,
    removal_date: Option<DateTime<Utc>>,
    identifier_suffix: Option<Identifier>,
}

impl ProfileConfigBuilder {
    /// Top label of the reverse-DNS identifier (defaults to `"org"`).
    pub fn with_domain(mut self, domain: impl Into<FieldValue>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<FieldValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<FieldValue>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<FieldValue>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// If set, the assembled profile carries this removal date.
    pub fn with_removal_date(mut self, removal_date: DateTime<Utc>) -> Self {
        self.removal_date = Some(removal_date);
        self
    }

    /// Explicit instance-unique suffix for the identifier path.
    pub fn with_identifier_suffix(mut self, suffix: Identifier) -> Self {
        self.identifier_suffix = Some(suffix);
        self
    }

    /// Validate all fields and freeze the derived identifiers.
    pub fn build(self) -> ProfileResult<ProfileConfig> {
        let host = validate::required_text(Some(self.host), "host")?;
        let domain = validate::optional_text(self.domain, "domain")?
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        let description = validate::optional_text(self.description, "hdesc")?;
        let display_name = validate::optional_text(self.display_name, "hname")?;
        let organization = validate::optional_text(self.organization, "horg")?;

        let suffix = self.identifier_suffix.unwrap_or_else(Identifier::generate);
        let rdn = format!("{}.{}", domain, host);
        let identifier = format!("{}.{}", rdn, suffix);

        Ok(ProfileConfig {
            host,
            domain,
            description,
            display_name,
            organization,
            removal_date: self.removal_date,
            rdn,
            identifier,
        })
    }
}
