/// Maps a violation category to its policy documentation page under
/// `https://docs.secure.software/policies`. Categories without a page
/// get no URL suffix on the ticket's category line.
pub fn category_doc_url(category: &str) -> Option<&'static str> {
    match category {
        "vulnerabilities" => Some("https://docs.secure.software/policies/vulnerabilities"),
        "hunting" => Some("https://docs.secure.software/policies/threat-hunting"),
        "hardening" => Some("https://docs.secure.software/policies/hardening"),
        "signatures" => Some("https://docs.secure.software/policies/digital-signatures"),
        "threats" => Some("https://docs.secure.software/policies/malware-detection"),
        "licenses" => Some("https://docs.secure.software/policies/license-compliance"),
        "secrets" => Some("https://docs.secure.software/policies/sensitive-information"),
        "containers" => Some("https://docs.secure.software/policies/container-security"),
        "integrity" => Some("https://docs.secure.software/policies/package-integrity"),
        _ => None,
    }
}
