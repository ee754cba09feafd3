//! Typed payload kinds and their plist-dictionary boundary.

use plist::{Dictionary, Value};
use serde::{Deserialize, Serialize};

use mobileconfig_types::Identifier;

// ── Certificate kinds ──────────────────────────────────────────────────

/// The certificate payload kinds the installer accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateKind {
    Root,
    Pkcs1,
    Pem,
    Pkcs12,
}

impl CertificateKind {
    /// Parse the wire tag; unknown tags yield `None` (the constructor
    /// skips, it does not error).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "root" => Some(Self::Root),
            "pkcs1" => Some(Self::Pkcs1),
            "pem" => Some(Self::Pem),
            "pkcs12" => Some(Self::Pkcs12),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Pkcs1 => "pkcs1",
            Self::Pem => "pem",
            Self::Pkcs12 => "pkcs12",
        }
    }

    /// The per-kind `PayloadType` value.
    pub fn payload_type(&self) -> String {
        format!("com.apple.security.{}", self.as_tag())
    }
}

// ── Wifi encryption ────────────────────────────────────────────────────

/// Wireless-network encryption choices the installer accepts.
///
/// Tags are case-sensitive; an unrecognized tag means the `EncryptionType`
/// key is omitted from the payload entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiEncryption {
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WPA2")]
    Wpa2,
    Any,
    None,
}

impl WifiEncryption {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "WEP" => Some(Self::Wep),
            "WPA" => Some(Self::Wpa),
            "WPA2" => Some(Self::Wpa2),
            "Any" => Some(Self::Any),
            "None" => Some(Self::None),
            _ => Option::None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::Any => "Any",
            Self::None => "None",
        }
    }
}

// ── Payload body ───────────────────────────────────────────────────────

/// Kind-specific content of one payload.
///
/// Converted to the generic key-value mapping only at the serialization
/// boundary ([`PayloadEntry::to_dictionary`]); fields that are `None` are
/// omitted from the mapping entirely.
#[derive(Clone, Debug)]
pub enum PayloadBody {
    Font {
        data: Vec<u8>,
        name: Option<String>,
    },
    WebClip {
        url: String,
        label: String,
        full_screen: Option<bool>,
        precomposed: bool,
        removable: bool,
        /// Already re-encoded to PNG by the icon capability.
        icon: Option<Vec<u8>>,
    },
    Certificate {
        kind: CertificateKind,
        data: Vec<u8>,
        filename: Option<String>,
        password: Option<String>,
    },
    Wifi {
        ssid: String,
        hidden: bool,
        encryption: Option<WifiEncryption>,
        auto_join: bool,
        password: Option<String>,
    },
}

impl PayloadBody {
    pub fn payload_type(&self) -> String {
        match self {
            Self::Font { .. } => "com.apple.font".to_string(),
            Self::WebClip { .. } => "com.apple.webClip.managed".to_string(),
            Self::Certificate { kind, .. } => kind.payload_type(),
            Self::Wifi { .. } => "com.apple.wifi.managed".to_string(),
        }
    }
}

// ── Payload metadata ───────────────────────────────────────────────────

/// Identity and versioning metadata shared by every payload kind.
#[derive(Clone, Debug)]
pub struct PayloadMeta {
    /// Full dotted identifier: `<config identifier>.<local ident>`.
    pub identifier: String,
    /// Fresh per-payload UUID.
    pub uuid: Identifier,
    pub version: u32,
    pub organization: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Bookkeeping copy of the identifier; cleared before final output.
    pub(crate) title: Option<String>,
}

// ── Payload entry ──────────────────────────────────────────────────────

/// One payload in a set: shared metadata plus kind-specific body.
#[derive(Clone, Debug)]
pub struct PayloadEntry {
    pub(crate) meta: PayloadMeta,
    pub(crate) body: PayloadBody,
}

impl PayloadEntry {
    pub fn meta(&self) -> &PayloadMeta {
        &self.meta
    }

    pub fn body(&self) -> &PayloadBody {
        &self.body
    }

    /// Render to a plist dictionary.
    ///
    /// A key appears iff its source value is present; binary blobs are
    /// emitted as `Value::Data` so the encoder writes a data element rather
    /// than a string.
    pub fn to_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("PayloadType".to_string(), Value::String(self.body.payload_type()));

        match &self.body {
            PayloadBody::Font { data, name } => {
                dict.insert("Font".to_string(), Value::Data(data.clone()));
                insert_text(&mut dict, "Name", name.as_deref());
            }
            PayloadBody::WebClip {
                url,
                label,
                full_screen,
                precomposed,
                removable,
                icon,
            } => {
                dict.insert("URL".to_string(), Value::String(url.clone()));
                dict.insert("Label".to_string(), Value::String(label.clone()));
                dict.insert("IsRemovable".to_string(), Value::Boolean(*removable));
                dict.insert("Precomposed".to_string(), Value::Boolean(*precomposed));
                if let Some(full_screen) = full_screen {
                    dict.insert("FullScreen".to_string(), Value::Boolean(*full_screen));
                }
                if let Some(icon) = icon {
                    dict.insert("Icon".to_string(), Value::Data(icon.clone()));
                }
            }
            PayloadBody::Certificate {
                data,
                filename,
                password,
                ..
            } => {
                dict.insert("PayloadContent".to_string(), Value::Data(data.clone()));
                insert_text(&mut dict, "PayloadCertificateFilename", filename.as_deref());
                insert_text(&mut dict, "Password", password.as_deref());
            }
            PayloadBody::Wifi {
                ssid,
                hidden,
                encryption,
                auto_join,
                password,
            } => {
                dict.insert("SSID_STR".to_string(), Value::String(ssid.clone()));
                dict.insert("HIDDEN_NETWORK".to_string(), Value::Boolean(*hidden));
                dict.insert("AutoJoin".to_string(), Value::Boolean(*auto_join));
                insert_text(&mut dict, "Password", password.as_deref());
                if let Some(encryption) = encryption {
                    dict.insert(
                        "EncryptionType".to_string(),
                        Value::String(encryption.as_tag().to_string()),
                    );
                }
            }
        }

        dict.insert(
            "PayloadIdentifier".to_string(),
            Value::String(self.meta.identifier.clone()),
        );
        insert_text(&mut dict, "PayloadOrganization", self.meta.organization.as_deref());
        insert_text(&mut dict, "PayloadDisplayName", self.meta.display_name.as_deref());
        insert_text(&mut dict, "PayloadDescription", self.meta.description.as_deref());
        insert_text(&mut dict, "title", self.meta.title.as_deref());
        dict.insert(
            "PayloadUUID".to_string(),
            Value::String(self.meta.uuid.to_string()),
        );
        dict.insert(
            "PayloadVersion".to_string(),
            Value::Integer(u64::from(self.meta.version).into()),
        );
        dict
    }
}

fn insert_text(dict: &mut Dictionary, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        dict.insert(key.to_string(), Value::String(value.to_string()));
    }
}
