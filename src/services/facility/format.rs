//! 文本格式化

use std::fmt::Write;

use super::model::{Address, FacilityRecord, SearchOutcome};

pub const RESULTS_HEADER: &str = "Nearby hospitals and clinics:";

/// Render a search outcome as the human-readable text block.
///
/// Terminal indicators are returned verbatim.
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(records) => format_records(records),
        other => other.message().unwrap_or_default(),
    }
}

pub fn format_records(records: &[FacilityRecord]) -> String {
    let mut out = format!("{}\n\n", RESULTS_HEADER);

    for (i, record) in records.iter().enumerate() {
        let distance = record
            .distance
            .map(format_distance)
            .unwrap_or_else(|| "Unknown".to_string());

        let _ = writeln!(out, "{}. {}", i + 1, record.name);
        let _ = writeln!(out, "   Distance: {} km", distance);
        let _ = writeln!(
            out,
            "   Address: {}",
            format_address(&record.address).as_deref().unwrap_or("Address not available")
        );
        let _ = writeln!(
            out,
            "   Phone: {}",
            record.phone.as_deref().unwrap_or("Phone not available")
        );
        let _ = writeln!(
            out,
            "   Website: {}\n",
            record.website.as_deref().unwrap_or("Website not available")
        );
    }

    out
}

/// "{housenumber} {street}, {city}, {postcode}", skipping missing parts.
///
/// The house number is only used together with a street. Suburb and state
/// are kept in the structured record but not printed.
pub fn format_address(address: &Address) -> Option<String> {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    match (&address.housenumber, &address.street) {
        (Some(number), Some(street)) => parts.push(format!("{} {}", number, street)),
        (None, Some(street)) => parts.push(street.clone()),
        _ => {}
    }
    if let Some(city) = &address.city {
        parts.push(city.clone());
    }
    if let Some(postcode) = &address.postcode {
        parts.push(postcode.clone());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Kilometres with at least one decimal digit: `3.0`, `0.5`, `1.25`.
pub fn format_distance(km: f64) -> String {
    if km.fract() == 0.0 {
        format!("{:.1}", km)
    } else {
        km.to_string()
    }
}
