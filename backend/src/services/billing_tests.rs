#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::{Milestone, Scope, ScopeError, VendorMatch, VendorRecord, ALL_SCOPES};
    use crate::services::billing::{build_billing_events, generate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scope_with_vendor(scope_type: &str, description: &str, lead_time: &str) -> Scope {
        Scope {
            scope_type: scope_type.to_string(),
            description: description.to_string(),
            matched_vendors: vec![VendorMatch {
                material_category: "Glass".to_string(),
                vendors: vec![VendorRecord {
                    lead_time: lead_time.to_string(),
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_storefront_schedule_end_to_end() {
        // Anchor 2025-01-01, storefront valued at 150,000 with an 8-week
        // vendor lead time.
        let scopes = vec![scope_with_vendor("STOREFRONT", "Lobby storefront", "8 weeks")];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        assert_eq!(events.len(), 5);

        assert_eq!(events[0].milestone, Milestone::Submittals);
        assert_eq!(events[0].date, date(2025, 1, 15));
        assert!((events[0].amount - 18_000.0).abs() < 1e-9);
        assert_eq!(events[0].percentage, 12);

        assert_eq!(events[1].milestone, Milestone::MaterialsPurchased);
        assert_eq!(events[1].date, date(2025, 3, 12));
        assert!((events[1].amount - 82_500.0).abs() < 1e-9);
        assert!(events[1].notes.contains("8-week lead time"));

        assert_eq!(events[2].milestone, Milestone::MaterialsStored);
        assert_eq!(events[2].date, date(2025, 3, 26));
        assert!((events[2].amount - 15_000.0).abs() < 1e-9);

        assert_eq!(events[3].milestone, Milestone::InstallationLabor);
        assert_eq!(events[3].date, date(2025, 4, 23));
        assert!((events[3].amount - 27_000.0).abs() < 1e-9);

        assert_eq!(events[4].milestone, Milestone::FinalRetention);
        assert_eq!(events[4].scope, ALL_SCOPES);
        assert_eq!(events[4].date, date(2025, 6, 18));
        assert!((events[4].amount - 7_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_milestone_dates_chain_off_each_other() {
        // With a single "8 weeks" quote the chain is anchor+2w, +8w, +2w,
        // +4w: each date extends the previous milestone's date.
        let scopes = vec![scope_with_vendor("MIRRORS", "Restroom mirrors", "8 weeks")];
        let anchor = date(2025, 6, 2);
        let events = build_billing_events(&scopes, anchor).unwrap();

        assert_eq!(events[0].date, anchor + chrono::Duration::weeks(2));
        assert_eq!(events[1].date, events[0].date + chrono::Duration::weeks(8));
        assert_eq!(events[2].date, events[1].date + chrono::Duration::weeks(2));
        assert_eq!(events[3].date, events[2].date + chrono::Duration::weeks(4));
    }

    #[test]
    fn test_lead_time_fallback_of_twelve_weeks() {
        // "2-3 days" carries no week-denominated integer, so the purchase
        // milestone falls back to submittals + 12 weeks.
        let scopes = vec![scope_with_vendor("STOREFRONT", "Lobby storefront", "2-3 days")];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        let submittals = &events[0];
        let purchase = &events[1];
        assert_eq!(purchase.date, submittals.date + chrono::Duration::weeks(12));
        assert!(purchase.notes.contains("12-week lead time"));
    }

    #[test]
    fn test_worst_case_lead_time_wins() {
        let mut scope = scope_with_vendor("CURTAIN WALL", "East elevation", "4 weeks");
        scope.matched_vendors.push(VendorMatch {
            material_category: "IGUs".to_string(),
            vendors: vec![
                VendorRecord {
                    lead_time: "16 weeks".to_string(),
                    ..Default::default()
                },
                VendorRecord {
                    lead_time: "6 weeks".to_string(),
                    ..Default::default()
                },
            ],
        });

        let events = build_billing_events(&[scope], date(2025, 1, 1)).unwrap();
        let submittals = &events[0];
        let purchase = &events[1];
        assert_eq!(purchase.date, submittals.date + chrono::Duration::weeks(16));
    }

    #[test]
    fn test_retention_is_project_wide_and_single() {
        // STOREFRONT (150,000) + FIRE-RATED (50,000): retention is 5% of
        // the combined 200,000, once, not 5% per scope.
        let scopes = vec![
            scope_with_vendor("STOREFRONT", "Lobby storefront", "8 weeks"),
            scope_with_vendor("FIRE-RATED", "Stair enclosure glazing", "6 weeks"),
        ];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        let retention: Vec<_> = events
            .iter()
            .filter(|e| e.milestone == Milestone::FinalRetention)
            .collect();
        assert_eq!(retention.len(), 1);
        assert_eq!(retention[0].scope, ALL_SCOPES);
        assert!((retention[0].amount - 10_000.0).abs() < 1e-9);

        // 8 weeks past the latest milestone in the list.
        let last_scope_date = events
            .iter()
            .filter(|e| e.milestone != Milestone::FinalRetention)
            .map(|e| e.date)
            .max()
            .unwrap();
        assert_eq!(
            retention[0].date,
            last_scope_date + chrono::Duration::weeks(8)
        );
    }

    #[test]
    fn test_empty_scope_list_yields_empty_ledger() {
        let ledger = generate(&[], date(2025, 1, 1)).unwrap();
        assert!(ledger.events.is_empty());
        assert!(ledger.monthly.is_empty());
        assert_eq!(ledger.total_billed(), 0.0);
    }

    #[test]
    fn test_missing_scope_type_surfaces_as_error() {
        let scopes = vec![Scope {
            description: "Unlabeled work".to_string(),
            ..Default::default()
        }];

        let err = build_billing_events(&scopes, date(2025, 1, 1)).unwrap_err();
        match err {
            ScopeError::MissingField { index, field } => {
                assert_eq!(index, 0);
                assert_eq!(field, "scope_type");
            }
        }
    }

    #[test]
    fn test_stable_sort_keeps_generation_order_for_ties() {
        // Two storefront scopes with identical lead times produce pairwise
        // identical milestone dates; the stable sort must keep the first
        // scope's event ahead of the second's in every pair, with the
        // retention line last overall.
        let scopes = vec![
            scope_with_vendor("STOREFRONT", "Lobby storefront", "8 weeks"),
            scope_with_vendor("STOREFRONT - LEVEL 2", "Upper storefront", "8 weeks"),
        ];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        assert_eq!(events.len(), 9);
        for pair in events[..8].chunks(2) {
            assert_eq!(pair[0].date, pair[1].date);
            assert_eq!(pair[0].scope, "STOREFRONT");
            assert_eq!(pair[1].scope, "STOREFRONT - LEVEL 2");
        }
        assert_eq!(events[8].milestone, Milestone::FinalRetention);
    }

    #[test]
    fn test_events_sorted_by_date() {
        // Mixed lead times interleave scopes; the final list must be
        // non-decreasing in date.
        let scopes = vec![
            scope_with_vendor("CURTAIN WALL", "East elevation", "16 weeks"),
            scope_with_vendor("MIRRORS", "Restroom mirrors", "2 weeks"),
        ];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        for pair in events.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn test_unknown_scope_type_uses_default_value() {
        let scopes = vec![scope_with_vendor("SKYLIGHT", "Atrium skylight", "8 weeks")];
        let events = build_billing_events(&scopes, date(2025, 1, 1)).unwrap();

        // 12% of the 50,000 default.
        assert!((events[0].amount - 6_000.0).abs() < 1e-9);
    }
}
