//! Owner-name helpers shared by the transfer client and the extractor.

/// Strip the trailing dot from a domain name.
#[must_use]
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Convert a fully-qualified name to a name relative to the zone origin.
///
/// `"www.example.com." + "example.com"` becomes `"www"`;
/// `"example.com." + "example.com"` becomes `"@"` (the apex marker).
/// Names outside the zone are returned unchanged, minus the trailing dot.
#[must_use]
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// Compose a relative owner name with the zone into a fully-qualified
/// name with trailing dot: `"www" + "example.com"` → `"www.example.com."`.
///
/// The apex marker must be filtered out by the caller before this point;
/// composing `"@"` with the domain would produce an invalid name.
#[must_use]
pub fn qualify(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);
    format!("{relative_name}.{zone}.")
}
