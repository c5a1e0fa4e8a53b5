use chrono::Datelike;

/// pt-BR month abbreviations, January first.
const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Formats an ISO publication timestamp into the listing's display form,
/// e.g. `2021-03-15T10:00:00Z` -> `15 mar 2021`.
///
/// Returns `None` for input the CMS should not have produced (missing
/// offset, garbage); callers render a placeholder instead of failing the
/// whole page on one bad record.
pub fn format_publication_date(iso: &str) -> Option<String> {
    // Prismic emits `+0000` offsets, which strict RFC 3339 parsing rejects.
    let parsed = chrono::DateTime::parse_from_rfc3339(iso)
        .or_else(|_| chrono::DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()?;

    Some(format!(
        "{:02} {} {}",
        parsed.day(),
        MONTHS_PT_BR[parsed.month0() as usize],
        parsed.year()
    ))
}
