//! End-to-end profile construction scenarios against the public API.

use chrono::{TimeZone, Utc};
use plist::Value;

use mobileconfig_profile::{
    assemble, PayloadOptions, PayloadSet, WebClipOptions, WifiOptions,
};
use mobileconfig_types::{ProfileConfig, ProfileError};

#[test]
fn full_profile_with_all_payload_kinds() {
    let rdate = Utc.with_ymd_and_hms(2027, 6, 1, 12, 0, 0).unwrap();
    let config = ProfileConfig::builder("device1")
        .with_domain("com")
        .with_description("Managed device profile")
        .with_display_name("Device One")
        .with_organization("Example Corp")
        .with_removal_date(rdate)
        .build()
        .expect("valid configuration");
    let identifier = config.identifier().to_string();
    assert!(identifier.starts_with("com.device1."));

    let mut set = PayloadSet::new(config);
    set.add_font(vec![0u8; 16], Some("Body Font"), PayloadOptions::new())
        .unwrap();
    set.add_web_clip(
        "https://example.com",
        "Example",
        WebClipOptions::new().with_full_screen(true),
        PayloadOptions::new().with_display_name("Example Clip"),
    )
    .unwrap();
    set.add_certificate(
        "pem",
        b"-----BEGIN CERTIFICATE-----".to_vec(),
        Some("ca.pem"),
        None::<&str>,
        PayloadOptions::new(),
    )
    .unwrap();
    set.add_wifi(
        "Office",
        WifiOptions::new()
            .with_password("secret")
            .with_encryption("WPA2"),
        PayloadOptions::new(),
    )
    .unwrap();
    set.add_vpn("l2tp", false);
    assert_eq!(set.len(), 4);

    let doc = assemble(&mut set);
    let dict = doc.as_dictionary();
    assert_eq!(
        dict.get("PayloadIdentifier"),
        Some(&Value::String(identifier.clone()))
    );
    assert_eq!(
        dict.get("PayloadOrganization"),
        Some(&Value::String("Example Corp".to_string()))
    );
    assert!(dict.get("RemovalDate").is_some());

    let Some(Value::Array(content)) = dict.get("PayloadContent") else {
        panic!("PayloadContent missing");
    };
    assert_eq!(content.len(), 4);

    // Ordered as inserted, bookkeeping stripped, identifiers namespaced
    // under the profile identifier.
    let types: Vec<&str> = content
        .iter()
        .map(|v| {
            let Value::Dictionary(d) = v else { panic!("entry not a dictionary") };
            assert!(d.get("title").is_none());
            let Some(Value::String(id)) = d.get("PayloadIdentifier") else {
                panic!("entry missing PayloadIdentifier")
            };
            assert!(id.starts_with(&identifier));
            let Some(Value::String(t)) = d.get("PayloadType") else {
                panic!("entry missing PayloadType")
            };
            t.as_str()
        })
        .collect();
    assert_eq!(
        types,
        vec![
            "com.apple.font",
            "com.apple.webClip.managed",
            "com.apple.security.pem",
            "com.apple.wifi.managed",
        ]
    );
}

#[test]
fn payload_uuids_are_unique_within_a_profile() {
    let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
    for ssid in ["A", "B", "C"] {
        set.add_wifi(ssid, WifiOptions::new(), PayloadOptions::new())
            .unwrap();
    }
    let doc = assemble(&mut set);
    let Some(Value::Array(content)) = doc.as_dictionary().get("PayloadContent") else {
        panic!("PayloadContent missing");
    };
    let mut uuids: Vec<&Value> = content
        .iter()
        .map(|v| {
            let Value::Dictionary(d) = v else { panic!("entry not a dictionary") };
            d.get("PayloadUUID").expect("entry missing PayloadUUID")
        })
        .collect();
    uuids.sort_by_key(|v| format!("{:?}", v));
    uuids.dedup();
    assert_eq!(uuids.len(), 3);
}

#[test]
fn construction_fails_atomically_on_kind_mismatch() {
    let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
    let err = set
        .add_wifi(
            "Office",
            WifiOptions::new(),
            PayloadOptions::new().with_organization(7i64),
        )
        .unwrap_err();
    assert!(matches!(err, ProfileError::InvalidField { .. }));
    assert_eq!(
        err.to_string(),
        "Argument 'horg' is wrong type, should be 'text'."
    );
    assert!(set.is_empty());
}

#[test]
fn xml_encoding_of_an_empty_profile() {
    let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
    let doc = assemble(&mut set);
    let mut out = Vec::new();
    doc.to_xml(&mut out).unwrap();
    let xml = String::from_utf8(out).unwrap();
    assert!(xml.contains("<key>PayloadContent</key>"));
    assert!(xml.contains("Configuration"));
}
