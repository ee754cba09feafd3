//! Option structs for the per-kind payload constructors.

use mobileconfig_types::FieldValue;

/// Metadata shared by every payload kind: organization, display name,
/// description (loosely typed, validated at add time) and format version.
#[derive(Clone, Debug)]
pub struct PayloadOptions {
    pub organization: Option<FieldValue>,
    pub display_name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub version: u32,
}

impl Default for PayloadOptions {
    fn default() -> Self {
        Self {
            organization: None,
            display_name: None,
            description: None,
            version: 1,
        }
    }
}

impl PayloadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, organization: impl Into<FieldValue>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<FieldValue>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<FieldValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

/// Options for web-clip payloads.
#[derive(Clone, Debug, Default)]
pub struct WebClipOptions {
    /// Emitted only when set (absent means the key is omitted).
    pub full_screen: Option<FieldValue>,
    /// Defaults to true when absent.
    pub precomposed: Option<FieldValue>,
    /// Defaults to true when absent.
    pub removable: Option<FieldValue>,
    /// Raw icon image bytes; re-encoded to PNG when icon support is
    /// available, skipped entirely otherwise.
    pub icon: Option<Vec<u8>>,
}

impl WebClipOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_screen(mut self, full_screen: impl Into<FieldValue>) -> Self {
        self.full_screen = Some(full_screen.into());
        self
    }

    pub fn with_precomposed(mut self, precomposed: impl Into<FieldValue>) -> Self {
        self.precomposed = Some(precomposed.into());
        self
    }

    pub fn with_removable(mut self, removable: impl Into<FieldValue>) -> Self {
        self.removable = Some(removable.into());
        self
    }

    pub fn with_icon(mut self, icon: Vec<u8>) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Options for wireless-network payloads.
#[derive(Clone, Debug, Default)]
pub struct WifiOptions {
    /// Defaults to false when absent.
    pub hidden: Option<FieldValue>,
    /// Encryption tag (`WEP`, `WPA`, `WPA2`, `Any`, `None`); defaults to
    /// `Any`. An unrecognized tag omits the `EncryptionType` key.
    pub encryption: Option<String>,
    /// Accepted and kind-checked, but not yet emitted.
    pub hotspot: Option<FieldValue>,
    /// Defaults to true when absent.
    pub auto_join: Option<FieldValue>,
    pub password: Option<FieldValue>,
}

impl WifiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hidden(mut self, hidden: impl Into<FieldValue>) -> Self {
        self.hidden = Some(hidden.into());
        self
    }

    pub fn with_encryption(mut self, encryption: impl Into<String>) -> Self {
        self.encryption = Some(encryption.into());
        self
    }

    pub fn with_hotspot(mut self, hotspot: impl Into<FieldValue>) -> Self {
        self.hotspot = Some(hotspot.into());
        self
    }

    pub fn with_auto_join(mut self, auto_join: impl Into<FieldValue>) -> Self {
        self.auto_join = Some(auto_join.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<FieldValue>) -> Self {
        self.password = Some(password.into());
        self
    }
}
