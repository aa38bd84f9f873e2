//! Static descriptor table for the record types the pipeline can sync.
//!
//! The table maps an operator-facing type name to its IANA (class, type)
//! codes. Extending support to a new type is one table entry; nothing
//! else dispatches on the type name.

/// IANA class code for the Internet class (`IN`).
pub const CLASS_IN: u16 = 1;

/// Descriptor for one supported record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeSpec {
    /// Canonical uppercase name, as submitted to the destination.
    pub name: &'static str,
    /// IANA class code. Always [`CLASS_IN`] for the supported set.
    pub class_code: u16,
    /// IANA record type code.
    pub type_code: u16,
}

/// All record types the pipeline can extract and submit.
///
/// SPF (type 99) is the deprecated dedicated type, not a TXT record;
/// sources that still serve it transfer it under its own code.
pub const RECORD_TYPES: &[RecordTypeSpec] = &[
    RecordTypeSpec { name: "A", class_code: CLASS_IN, type_code: 1 },
    RecordTypeSpec { name: "AAAA", class_code: CLASS_IN, type_code: 28 },
    RecordTypeSpec { name: "CNAME", class_code: CLASS_IN, type_code: 5 },
    RecordTypeSpec { name: "MX", class_code: CLASS_IN, type_code: 15 },
    RecordTypeSpec { name: "NS", class_code: CLASS_IN, type_code: 2 },
    RecordTypeSpec { name: "PTR", class_code: CLASS_IN, type_code: 12 },
    RecordTypeSpec { name: "SPF", class_code: CLASS_IN, type_code: 99 },
    RecordTypeSpec { name: "TXT", class_code: CLASS_IN, type_code: 16 },
    RecordTypeSpec { name: "SRV", class_code: CLASS_IN, type_code: 33 },
];

/// Look up the descriptor for a type name, case-insensitively.
///
/// Returns `None` for anything outside the supported set; callers turn
/// that into a configuration error before any network work happens.
#[must_use]
pub fn lookup_record_type(name: &str) -> Option<&'static RecordTypeSpec> {
    let upper = name.trim().to_uppercase();
    RECORD_TYPES.iter().find(|spec| spec.name == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_types_resolve() {
        for name in ["A", "AAAA", "CNAME", "MX", "NS", "PTR", "SPF", "TXT", "SRV"] {
            let spec = lookup_record_type(name);
            assert!(spec.is_some(), "{name} should be supported");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let spec = lookup_record_type("cname");
        assert_eq!(spec.map(|s| s.name), Some("CNAME"));
        let spec = lookup_record_type(" a ");
        assert_eq!(spec.map(|s| s.type_code), Some(1));
    }

    #[test]
    fn soa_is_not_supported() {
        assert!(lookup_record_type("SOA").is_none());
    }

    #[test]
    fn unknown_type_is_not_supported() {
        assert!(lookup_record_type("LOC").is_none());
        assert!(lookup_record_type("").is_none());
    }

    #[test]
    fn all_entries_are_class_in() {
        assert!(RECORD_TYPES.iter().all(|s| s.class_code == CLASS_IN));
    }

    #[test]
    fn iana_codes_match() {
        assert_eq!(lookup_record_type("A").map(|s| s.type_code), Some(1));
        assert_eq!(lookup_record_type("AAAA").map(|s| s.type_code), Some(28));
        assert_eq!(lookup_record_type("SRV").map(|s| s.type_code), Some(33));
        assert_eq!(lookup_record_type("SPF").map(|s| s.type_code), Some(99));
    }
}
