//! Device records and snapshots shared between the parser, differ and display
//!
//! A [`DeviceRecord`] is the attributes one device reported at one point in time. It keeps the order fields were reported in so it can be displayed like the tool printed it, but equality and hashing only consider [`DeviceRecord::canonical`].
//!
//! ```
//! use usbwatch::types::DeviceRecord;
//!
//! let a = DeviceRecord::from_pairs([("Class", "USB"), ("FriendlyName", "Mouse")]);
//! let b = DeviceRecord::from_pairs([("FriendlyName", "Mouse"), ("Class", "USB")]);
//! assert_eq!(a, b);
//! assert_eq!(a.get("Class"), Some("USB"));
//! ```
use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;

/// Field name used for records from the USB-listing platform, which hold the whole line
pub const DEVICE_FIELD: &str = "Device";

/// Sorted field name/value pairs; the encoding used for record equality
pub type CanonicalRecord<'a> = Vec<(&'a str, &'a str)>;

/// Structured attributes of one enumerated device
#[derive(Debug, Clone, Default)]
pub struct DeviceRecord {
    fields: Vec<(String, String)>,
}

impl DeviceRecord {
    /// New empty record
    pub fn new() -> Self {
        Default::default()
    }

    /// Build from `(name, value)` pairs in reported order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = DeviceRecord::new();
        for (k, v) in pairs {
            record.insert(k, v);
        }
        record
    }

    /// Record holding a whole listing line under [`DEVICE_FIELD`]
    pub fn from_line(line: &str) -> Self {
        DeviceRecord::from_pairs([(DEVICE_FIELD, line)])
    }

    /// Set `name` to `value`, replacing an existing value in place
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of field `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in reported order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Fields in reported order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of populated fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Order independent encoding: fields sorted by name
    ///
    /// Two records are the same observation if and only if their canonical forms match.
    pub fn canonical(&self) -> CanonicalRecord<'_> {
        self.fields()
            .sorted_by(|a, b| a.0.cmp(b.0).then(a.1.cmp(b.1)))
            .collect()
    }
}

impl PartialEq for DeviceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for DeviceRecord {}

impl Hash for DeviceRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.fields()
                .format_with(", ", |(k, v), f| f(&format_args!("{}: {:?}", k, v)))
        )
    }
}

/// All device records observed at one polling tick, in the order the tool listed them
pub type Snapshot = Vec<DeviceRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_sorted() {
        let r = DeviceRecord::from_pairs([("Status", "OK"), ("Class", "USB")]);
        assert_eq!(r.canonical(), vec![("Class", "USB"), ("Status", "OK")]);
        // reported order is kept for display
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["Status", "Class"]);
    }

    #[test]
    fn test_equality_is_full_content() {
        let a = DeviceRecord::from_pairs([("Class", "USB"), ("FriendlyName", "Mouse")]);
        let b = DeviceRecord::from_pairs([("Class", "USB")]);
        let c = DeviceRecord::from_pairs([("Class", "USB"), ("FriendlyName", "Keyboard")]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_hash_matches_eq() {
        let mut set = HashSet::new();
        set.insert(DeviceRecord::from_pairs([("A", "1"), ("B", "2")]));
        assert!(set.contains(&DeviceRecord::from_pairs([("B", "2"), ("A", "1")])));
    }

    #[test]
    fn test_insert_replaces() {
        let mut r = DeviceRecord::new();
        r.insert("Class", "USB");
        r.insert("Class", "HIDClass");
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("Class"), Some("HIDClass"));
    }

    #[test]
    fn test_display() {
        let r = DeviceRecord::from_line("Bus 001 Device 002");
        assert_eq!(format!("{}", r), "{Device: \"Bus 001 Device 002\"}");
    }
}
