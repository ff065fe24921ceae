use std::collections::BTreeMap;

use crate::models::{BillingEvent, MonthKey, MonthlyBucket};

/// Group billing events by calendar month, summing amounts per group.
///
/// Grouping is keyed on [`MonthKey`] (year + month), so buckets come back in
/// chronological order regardless of event order or display label. Every
/// event lands in exactly one bucket and the bucket totals reconcile with
/// the event amounts.
pub fn aggregate_by_month(events: &[BillingEvent]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();

    for event in events {
        let key = MonthKey::from_date(event.date);
        let bucket = buckets.entry(key).or_insert_with(|| MonthlyBucket {
            key,
            label: event.date.format("%B %Y").to_string(),
            total: 0.0,
            events: Vec::new(),
        });

        bucket.total += event.amount;
        bucket.events.push(event.clone());
    }

    buckets.into_values().collect()
}
