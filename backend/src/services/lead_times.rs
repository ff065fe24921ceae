use crate::models::Scope;

/// Extract week-denominated lead times from a scope's matched vendors.
///
/// Scans every vendor record across every match group. Only lead-time
/// strings containing "week" (case-insensitive) qualify; within a qualifying
/// string the first whitespace-delimited token that parses as an integer is
/// taken and the rest of that string is ignored. Quotes in other units
/// ("2-3 days", "Off-the-shelf") and ranges with no standalone integer
/// ("4-8 weeks") contribute nothing.
///
/// An empty result is normal, not an error; the schedule builder supplies
/// the fallback.
pub fn extract_lead_times(scope: &Scope) -> Vec<i64> {
    let mut lead_times = Vec::new();

    for group in &scope.matched_vendors {
        for vendor in &group.vendors {
            let lead_time = vendor.lead_time.to_lowercase();
            if !lead_time.contains("week") {
                continue;
            }

            if let Some(weeks) = lead_time
                .split_whitespace()
                .find_map(|token| token.parse::<i64>().ok())
            {
                lead_times.push(weeks);
            }
        }
    }

    lead_times
}
