//! Payload set — ordered payload construction bound to one configuration.

use tracing::debug;

use mobileconfig_types::{validate, FieldValue, Identifier, ProfileConfig, ProfileResult};

use crate::icon;
use crate::options::{PayloadOptions, WebClipOptions, WifiOptions};
use crate::payload::{CertificateKind, PayloadBody, PayloadEntry, PayloadMeta, WifiEncryption};

/// An insertion-ordered set of payloads bound to one [`ProfileConfig`].
///
/// Each `add_*` constructor appends at most one entry. A missing or
/// unrecognized primary value skips the payload silently (logged at debug);
/// a kind mismatch on a supplied field fails the call and appends nothing.
#[derive(Clone, Debug)]
pub struct PayloadSet {
    config: ProfileConfig,
    entries: Vec<PayloadEntry>,
}

impl PayloadSet {
    pub fn new(config: ProfileConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn entries(&self) -> &[PayloadEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [PayloadEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a font payload embedding raw font bytes.
    ///
    /// Skips when `font` is empty.
    pub fn add_font(
        &mut self,
        font: Vec<u8>,
        name: Option<impl Into<FieldValue>>,
        opts: PayloadOptions,
    ) -> ProfileResult<()> {
        if font.is_empty() {
            debug!("no font data supplied, skipping font payload");
            return Ok(());
        }
        let name = validate::optional_text(name.map(Into::into), "name")?;
        let local_ident = format!("font.{}", Identifier::generate());
        self.finalize(PayloadBody::Font { data: font, name }, local_ident, opts)
    }

    /// Add a managed web-clip payload.
    ///
    /// An icon, when given, is re-encoded to PNG through the icon
    /// capability; if the capability is unavailable or the bytes do not
    /// decode, the clip is added without an icon.
    pub fn add_web_clip(
        &mut self,
        url: &str,
        label: &str,
        clip: WebClipOptions,
        opts: PayloadOptions,
    ) -> ProfileResult<()> {
        let full_screen = validate::optional_bool(clip.full_screen, "fullscreen")?;
        let precomposed = validate::optional_bool(clip.precomposed, "precomposed")?.unwrap_or(true);
        let removable = validate::optional_bool(clip.removable, "removable")?.unwrap_or(true);
        let icon = clip.icon.as_deref().and_then(icon::encode_png);

        let local_ident = format!("webclip.{}", Identifier::generate());
        self.finalize(
            PayloadBody::WebClip {
                url: url.to_string(),
                label: label.to_string(),
                full_screen,
                precomposed,
                removable,
                icon,
            },
            local_ident,
            opts,
        )
    }

    /// Add a certificate payload.
    ///
    /// Skips when `cert` is empty or `kind_tag` is not one of `root`,
    /// `pkcs1`, `pem`, `pkcs12`.
    pub fn add_certificate(
        &mut self,
        kind_tag: &str,
        cert: Vec<u8>,
        filename: Option<impl Into<FieldValue>>,
        password: Option<impl Into<FieldValue>>,
        opts: PayloadOptions,
    ) -> ProfileResult<()> {
        if cert.is_empty() {
            debug!("no certificate data supplied, skipping certificate payload");
            return Ok(());
        }
        let Some(kind) = CertificateKind::from_tag(kind_tag) else {
            debug!(certtype = kind_tag, "unrecognized certificate kind, skipping certificate payload");
            return Ok(());
        };
        let filename = validate::optional_text(filename.map(Into::into), "filename")?;
        let password = validate::optional_text(password.map(Into::into), "password")?;

        // Certificate entries use the bare local identifier, no kind prefix.
        let local_ident = Identifier::generate().to_string();
        self.finalize(
            PayloadBody::Certificate {
                kind,
                data: cert,
                filename,
                password,
            },
            local_ident,
            opts,
        )
    }

    /// Add a managed wireless-network payload.
    ///
    /// Skips when `ssid` is empty. An unrecognized encryption tag omits the
    /// `EncryptionType` key rather than erroring.
    pub fn add_wifi(
        &mut self,
        ssid: &str,
        wifi: WifiOptions,
        opts: PayloadOptions,
    ) -> ProfileResult<()> {
        if ssid.is_empty() {
            debug!("no ssid supplied, skipping wifi payload");
            return Ok(());
        }
        let hidden = validate::optional_bool(wifi.hidden, "hidden")?.unwrap_or(false);
        let auto_join = validate::optional_bool(wifi.auto_join, "autojoin")?.unwrap_or(true);
        // Kind-checked for parity with the other flags; not yet emitted.
        let _hotspot = validate::optional_bool(wifi.hotspot, "hotspot")?.unwrap_or(false);
        let password = validate::optional_text(wifi.password, "password")?;

        let tag = wifi.encryption.as_deref().unwrap_or("Any");
        let encryption = WifiEncryption::from_tag(tag);
        if encryption.is_none() {
            debug!(encryption = tag, "unrecognized encryption tag, omitting EncryptionType");
        }

        let local_ident = format!("wifi.{}", Identifier::generate());
        self.finalize(
            PayloadBody::Wifi {
                ssid: ssid.to_string(),
                hidden,
                encryption,
                auto_join,
                password,
            },
            local_ident,
            opts,
        )
    }

    /// VPN payloads are not implemented; this is an explicit no-op
    /// placeholder.
    pub fn add_vpn(&mut self, _vpn_type: &str, _all_traffic: bool) {}

    /// Shared finalizer: validate the common metadata, mint the payload
    /// identity, and append the entry.
    fn finalize(
        &mut self,
        body: PayloadBody,
        local_ident: String,
        opts: PayloadOptions,
    ) -> ProfileResult<()> {
        let organization = validate::optional_text(opts.organization, "horg")?;
        let display_name = validate::optional_text(opts.display_name, "hname")?;
        let description = validate::optional_text(opts.description, "hdesc")?;

        let identifier = format!("{}.{}", self.config.identifier(), local_ident);
        let meta = PayloadMeta {
            title: Some(identifier.clone()),
            identifier,
            uuid: Identifier::generate(),
            version: opts.version,
            organization,
            display_name,
            description,
        };
        self.entries.push(PayloadEntry { meta, body });
        Ok(())
    }
}
