//! Profile assembly — wrap a payload set into the top-level document.

use std::io::Write;
use std::time::SystemTime;

use plist::{Dictionary, Value};

use mobileconfig_types::Identifier;

use crate::collection::PayloadSet;

/// Remove the bookkeeping `title` field from every entry in the set.
pub fn strip_bookkeeping(set: &mut PayloadSet) {
    for entry in set.entries_mut() {
        entry.meta.title = None;
    }
}

/// Build the top-level profile document from the set.
///
/// Strips bookkeeping first, then wraps the ordered payload entries under
/// `PayloadContent` with the profile-level metadata drawn from the set's
/// configuration. Every call mints a fresh top-level `PayloadUUID`; the rest
/// of the document depends only on the (unmutated) set.
pub fn assemble(set: &mut PayloadSet) -> ProfileDocument {
    strip_bookkeeping(set);

    let config = set.config();
    let mut dict = Dictionary::new();
    dict.insert(
        "PayloadType".to_string(),
        Value::String("Configuration".to_string()),
    );
    dict.insert("PayloadVersion".to_string(), Value::Integer(1u64.into()));
    dict.insert(
        "PayloadIdentifier".to_string(),
        Value::String(config.identifier().to_string()),
    );
    dict.insert(
        "PayloadUUID".to_string(),
        Value::String(Identifier::generate().to_string()),
    );
    if let Some(description) = config.description() {
        dict.insert(
            "PayloadDescription".to_string(),
            Value::String(description.to_string()),
        );
    }
    if let Some(display_name) = config.display_name() {
        dict.insert(
            "PayloadDisplayName".to_string(),
            Value::String(display_name.to_string()),
        );
    }
    if let Some(organization) = config.organization() {
        dict.insert(
            "PayloadOrganization".to_string(),
            Value::String(organization.to_string()),
        );
    }
    if let Some(removal_date) = config.removal_date() {
        dict.insert(
            "RemovalDate".to_string(),
            Value::Date(plist::Date::from(SystemTime::from(removal_date))),
        );
    }
    dict.insert(
        "PayloadContent".to_string(),
        Value::Array(
            set.entries()
                .iter()
                .map(|entry| Value::Dictionary(entry.to_dictionary()))
                .collect(),
        ),
    );
    ProfileDocument(dict)
}

/// The assembled top-level profile document.
///
/// A thin wrapper over the plist dictionary; encoding to XML or binary form
/// is delegated to the plist crate.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDocument(Dictionary);

impl ProfileDocument {
    pub fn as_dictionary(&self) -> &Dictionary {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Dictionary(self.0)
    }

    /// Write the document as an XML property list.
    pub fn to_xml<W: Write>(&self, writer: W) -> Result<(), plist::Error> {
        Value::Dictionary(self.0.clone()).to_writer_xml(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{PayloadOptions, WifiOptions};
    use chrono::{TimeZone, Utc};
    use mobileconfig_types::ProfileConfig;

    #[test]
    fn test_top_level_shape() {
        let config = ProfileConfig::builder("device1")
            .with_display_name("Device One")
            .with_organization("Example Corp")
            .build()
            .unwrap();
        let identifier = config.identifier().to_string();
        let mut set = PayloadSet::new(config);
        set.add_wifi("Office", WifiOptions::new(), PayloadOptions::new())
            .unwrap();

        let doc = assemble(&mut set);
        let dict = doc.as_dictionary();
        assert_eq!(
            dict.get("PayloadType"),
            Some(&Value::String("Configuration".to_string()))
        );
        assert_eq!(dict.get("PayloadVersion"), Some(&Value::Integer(1u64.into())));
        assert_eq!(dict.get("PayloadIdentifier"), Some(&Value::String(identifier)));
        assert_eq!(
            dict.get("PayloadDisplayName"),
            Some(&Value::String("Device One".to_string()))
        );
        assert!(dict.get("PayloadDescription").is_none());
        assert!(dict.get("RemovalDate").is_none());

        let Some(Value::Array(content)) = dict.get("PayloadContent") else {
            panic!("PayloadContent missing or not an array");
        };
        assert_eq!(content.len(), 1);
    }

    #[test]
    fn test_assembly_strips_bookkeeping() {
        let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
        set.add_wifi("Office", WifiOptions::new(), PayloadOptions::new())
            .unwrap();
        assert!(set.entries()[0].meta().title.is_some());

        let doc = assemble(&mut set);
        assert!(set.entries()[0].meta().title.is_none());
        let Some(Value::Array(content)) = doc.as_dictionary().get("PayloadContent") else {
            panic!("PayloadContent missing");
        };
        let Value::Dictionary(entry) = &content[0] else {
            panic!("entry not a dictionary");
        };
        assert!(entry.get("title").is_none());
    }

    #[test]
    fn test_assembly_twice_differs_only_in_uuid() {
        let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
        set.add_wifi("Office", WifiOptions::new(), PayloadOptions::new())
            .unwrap();

        let mut a = assemble(&mut set).as_dictionary().clone();
        let mut b = assemble(&mut set).as_dictionary().clone();
        assert_ne!(a.get("PayloadUUID"), b.get("PayloadUUID"));
        a.remove("PayloadUUID");
        b.remove("PayloadUUID");
        assert_eq!(a, b);
    }

    #[test]
    fn test_removal_date_round_trip() {
        let rdate = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let config = ProfileConfig::builder("device1")
            .with_removal_date(rdate)
            .build()
            .unwrap();
        let mut set = PayloadSet::new(config);
        let doc = assemble(&mut set);
        assert_eq!(
            doc.as_dictionary().get("RemovalDate"),
            Some(&Value::Date(plist::Date::from(SystemTime::from(rdate))))
        );
    }

    #[test]
    fn test_xml_output_marks_binary_fields() {
        let mut set = PayloadSet::new(ProfileConfig::new("device1").unwrap());
        set.add_certificate(
            "root",
            vec![1u8, 2, 3],
            None::<&str>,
            None::<&str>,
            PayloadOptions::new(),
        )
        .unwrap();
        let doc = assemble(&mut set);
        let mut out = Vec::new();
        doc.to_xml(&mut out).unwrap();
        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("<data>"));
        assert!(xml.contains("com.apple.security.root"));
    }
}
