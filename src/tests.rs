#[cfg(test)]
mod tests {
    use {
        crate::calendar_core::{
            aggregate, filter_events, normalize_day, EventFilter, Impact, RawEventRow,
        },
        chrono::NaiveDate,
        chrono_tz::Europe::London,
        std::collections::HashSet,
    };

    fn raw(date: &str, time: &str, importance: &str, currency: &str) -> RawEventRow {
        RawEventRow {
            date: date.to_string(),
            time: Some(time.to_string()),
            importance: Some(importance.to_string()),
            currency: Some(currency.to_string()),
            event: Some(format!("{} release", currency)),
            actual: None,
            forecast: None,
            previous: None,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// A realistic session: mixed tiers, duplicate instants, an unmapped
    /// importance label, and a row from the fetch's second day.
    fn session_rows() -> Vec<RawEventRow> {
        vec![
            raw("01/01/2024", "08:30", "medium", "EUR"),
            raw("01/01/2024", "09:00", "high", "USD"),
            raw("01/01/2024", "09:00", "low", "EUR"),
            raw("01/01/2024", "13:30", "high", "USD"),
            raw("01/01/2024", "13:30", "high", "GBP"),
            raw("01/01/2024", "15:00", "holiday", "JPY"),
            raw("02/01/2024", "09:00", "high", "USD"),
        ]
    }

    fn currencies(codes: &[&str]) -> Option<HashSet<String>> {
        Some(codes.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_filter_idempotence_over_session() {
        let events = normalize_day(&session_rows(), day(), London);
        for min_impact in 0..=3 {
            let filter = EventFilter {
                currencies: currencies(&["USD", "EUR", "GBP", "JPY"]),
                min_impact,
            };
            let once = filter_events(&events, &filter);
            let twice = filter_events(&once, &filter);
            assert_eq!(once.len(), twice.len());
        }
    }

    #[test]
    fn test_filter_monotonicity_over_session() {
        let events = normalize_day(&session_rows(), day(), London);
        let sizes: Vec<usize> = (0..=4)
            .map(|min_impact| {
                filter_events(
                    &events,
                    &EventFilter {
                        currencies: None,
                        min_impact,
                    },
                )
                .len()
            })
            .collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(sizes[0], 6); // second-day row never became an event
    }

    #[test]
    fn test_tier_partition_after_filtering() {
        let events = normalize_day(&session_rows(), day(), London);
        let filtered = filter_events(
            &events,
            &EventFilter {
                currencies: None,
                min_impact: 0,
            },
        );
        let timeline = aggregate(&filtered);

        let bucketed: usize = Impact::tiers()
            .iter()
            .flat_map(|&t| timeline.density_for(t))
            .map(|p| p.count)
            .sum();
        let classified = filtered
            .iter()
            .filter(|e| e.impact != Impact::Unclassified)
            .count();
        assert_eq!(bucketed, classified);
        assert_eq!(bucketed, 5);

        // The unclassified JPY row still anchors a zero-weight score step.
        assert_eq!(timeline.score.len(), 6);
        let weight_sum: u32 = filtered.iter().map(|e| e.impact.weight()).sum();
        assert_eq!(timeline.final_score(), weight_sum);
    }

    #[test]
    fn test_full_pipeline_is_deterministic() {
        let rows = session_rows();
        let run = || {
            let events = normalize_day(&rows, day(), London);
            let filtered = filter_events(
                &events,
                &EventFilter {
                    currencies: currencies(&["USD", "GBP"]),
                    min_impact: 2,
                },
            );
            aggregate(&filtered)
        };

        let a = run();
        let b = run();
        assert_eq!(a.score, b.score);
        assert_eq!(a.max_count, b.max_count);
        assert_eq!(a.max_count, 2); // the 13:30 USD+GBP pair
    }

    #[test]
    fn test_filtered_to_empty_aggregates_cleanly() {
        let events = normalize_day(&session_rows(), day(), London);
        let filtered = filter_events(
            &events,
            &EventFilter {
                currencies: currencies(&["CHF"]),
                min_impact: 0,
            },
        );
        assert!(filtered.is_empty());

        let timeline = aggregate(&filtered);
        assert!(timeline.is_empty());
        assert_eq!(timeline.max_count, 0);
    }
}
