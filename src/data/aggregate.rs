use std::collections::HashMap;

use super::model::{DatasetStore, Outcome, PayloadRange, SiteOption};

// ---------------------------------------------------------------------------
// Success proportions (pie chart input)
// ---------------------------------------------------------------------------

/// Number of successful launches from one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSuccesses {
    pub site: String,
    pub successes: usize,
}

/// Occurrences of one outcome at a single site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: usize,
}

/// Result of [`success_breakdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuccessBreakdown {
    /// One entry per distinct site, sorted by site name.
    BySite(Vec<SiteSuccesses>),
    /// Only outcomes that actually occur at `site`, most frequent first;
    /// ties keep the order the outcomes first appear in.
    ByOutcome {
        site: String,
        counts: Vec<OutcomeCount>,
    },
}

impl SuccessBreakdown {
    /// `(label, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(String, usize)> {
        match self {
            SuccessBreakdown::BySite(sites) => sites
                .iter()
                .map(|s| (s.site.clone(), s.successes))
                .collect(),
            SuccessBreakdown::ByOutcome { counts, .. } => counts
                .iter()
                .map(|c| (c.outcome.to_string(), c.count))
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            SuccessBreakdown::BySite(sites) => sites.iter().map(|s| s.successes).sum(),
            SuccessBreakdown::ByOutcome { counts, .. } => counts.iter().map(|c| c.count).sum(),
        }
    }
}

/// Success counts per site for `All`, or the outcome tally of one site.
pub fn success_breakdown(store: &DatasetStore, site: &SiteOption) -> SuccessBreakdown {
    match site {
        SiteOption::All => {
            let mut groups: Vec<SiteSuccesses> = Vec::new();
            let mut index: HashMap<&str, usize> = HashMap::new();

            for rec in store.records() {
                let slot = *index.entry(rec.launch_site.as_str()).or_insert_with(|| {
                    groups.push(SiteSuccesses {
                        site: rec.launch_site.clone(),
                        successes: 0,
                    });
                    groups.len() - 1
                });
                if rec.outcome.is_success() {
                    groups[slot].successes += 1;
                }
            }
            groups.sort_by(|a, b| a.site.cmp(&b.site));
            SuccessBreakdown::BySite(groups)
        }
        SiteOption::Site(name) => {
            let mut counts: Vec<OutcomeCount> = Vec::new();
            for rec in store.records().iter().filter(|r| &r.launch_site == name) {
                match counts.iter_mut().find(|c| c.outcome == rec.outcome) {
                    Some(c) => c.count += 1,
                    None => counts.push(OutcomeCount {
                        outcome: rec.outcome,
                        count: 1,
                    }),
                }
            }
            // Stable: equal counts stay in first-seen order.
            counts.sort_by(|a, b| b.count.cmp(&a.count));

            SuccessBreakdown::ByOutcome {
                site: name.clone(),
                counts,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Payload vs. outcome points (scatter chart input)
// ---------------------------------------------------------------------------

/// One launch projected onto the scatter axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// Records inside `payload` (inclusive) and matching `site`, in dataset order.
pub fn scatter_points(
    store: &DatasetStore,
    site: &SiteOption,
    payload: PayloadRange,
) -> Vec<ScatterPoint> {
    store
        .records()
        .iter()
        .filter(|r| payload.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::LaunchRecord;

    /// A: 2 successes + 1 failure, B: 3 failures.
    fn scenario_store() -> DatasetStore {
        DatasetStore::from_records(vec![
            record("A", 500.0, "v1.0", 1),
            record("B", 1500.0, "v1.1", 0),
            record("A", 2500.0, "FT", 0),
            record("B", 4000.0, "FT", 0),
            record("A", 6000.0, "B4", 1),
            record("B", 9000.0, "B5", 0),
        ])
        .unwrap()
    }

    fn site(name: &str) -> SiteOption {
        SiteOption::Site(name.to_string())
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let store = scenario_store();
        let breakdown = success_breakdown(&store, &SiteOption::All);
        assert_eq!(
            breakdown.entries(),
            vec![("A".to_string(), 2), ("B".to_string(), 0)]
        );
    }

    #[test]
    fn all_sites_are_sorted_by_name_not_first_seen() {
        let store = DatasetStore::from_records(vec![
            record("B", 100.0, "FT", 1),
            record("A", 200.0, "FT", 0),
            record("B", 300.0, "FT", 1),
        ])
        .unwrap();
        let breakdown = success_breakdown(&store, &SiteOption::All);
        assert_eq!(
            breakdown.entries(),
            vec![("A".to_string(), 0), ("B".to_string(), 2)]
        );
        // The dropdown still lists sites in first-seen order.
        let sites: Vec<&str> = store.sites().iter().map(|s| s.value()).collect();
        assert_eq!(sites, ["ALL", "B", "A"]);
    }

    #[test]
    fn single_site_omits_absent_outcomes() {
        let store = scenario_store();
        let breakdown = success_breakdown(&store, &site("B"));
        assert_eq!(
            breakdown,
            SuccessBreakdown::ByOutcome {
                site: "B".into(),
                counts: vec![OutcomeCount {
                    outcome: Outcome::Failure,
                    count: 3
                }],
            }
        );
    }

    #[test]
    fn single_site_orders_by_frequency() {
        let store = scenario_store();
        let SuccessBreakdown::ByOutcome { counts, .. } = success_breakdown(&store, &site("A"))
        else {
            panic!("expected a per-outcome breakdown");
        };
        let outcomes: Vec<_> = counts.iter().map(|c| (c.outcome, c.count)).collect();
        assert_eq!(outcomes, [(Outcome::Success, 2), (Outcome::Failure, 1)]);
    }

    #[test]
    fn tied_outcomes_keep_first_seen_order() {
        let store = DatasetStore::from_records(vec![
            record("A", 100.0, "FT", 1),
            record("A", 200.0, "FT", 0),
        ])
        .unwrap();
        let SuccessBreakdown::ByOutcome { counts, .. } = success_breakdown(&store, &site("A"))
        else {
            panic!("expected a per-outcome breakdown");
        };
        let outcomes: Vec<_> = counts.iter().map(|c| (c.outcome, c.count)).collect();
        assert_eq!(outcomes, [(Outcome::Success, 1), (Outcome::Failure, 1)]);
    }

    #[test]
    fn unknown_site_yields_empty_breakdown() {
        let store = scenario_store();
        let breakdown = success_breakdown(&store, &site("LC-0"));
        assert!(breakdown.entries().is_empty());
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn all_sites_total_equals_class_sum() {
        let store = scenario_store();
        let class_sum: usize = store
            .records()
            .iter()
            .map(|r| r.outcome.class() as usize)
            .sum();
        assert_eq!(success_breakdown(&store, &SiteOption::All).total(), class_sum);
    }

    #[test]
    fn full_range_returns_every_record_in_order() {
        let store = scenario_store();
        let points = scatter_points(&store, &SiteOption::All, PayloadRange::new(500.0, 9000.0));
        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, [500.0, 1500.0, 2500.0, 4000.0, 6000.0, 9000.0]);

        let above = scatter_points(&store, &SiteOption::All, PayloadRange::new(9001.0, 10000.0));
        assert!(above.is_empty());
    }

    #[test]
    fn projection_is_lossless_per_site() {
        let store = scenario_store();
        let points = scatter_points(&store, &SiteOption::All, PayloadRange::new(0.0, 10000.0));

        for option in store.sites().iter().skip(1) {
            let raw: Vec<&LaunchRecord> = store
                .records()
                .iter()
                .filter(|r| option.matches(&r.launch_site))
                .collect();
            let projected: Vec<&ScatterPoint> = points
                .iter()
                .zip(store.records())
                .filter(|(_, r)| option.matches(&r.launch_site))
                .map(|(p, _)| p)
                .collect();

            assert_eq!(raw.len(), projected.len());
            for (r, p) in raw.iter().zip(projected) {
                assert_eq!(p.payload_mass_kg, r.payload_mass_kg);
                assert_eq!(p.outcome, r.outcome);
                assert_eq!(p.booster_version_category, r.booster_version_category);
            }
        }
    }

    #[test]
    fn site_filter_applies_after_payload_filter() {
        let store = scenario_store();
        let points = scatter_points(&store, &site("A"), PayloadRange::new(1000.0, 7000.0));
        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, [2500.0, 6000.0]);
    }

    #[test]
    fn degenerate_range_matches_exact_mass_only() {
        let store = scenario_store();
        let hit = scatter_points(&store, &SiteOption::All, PayloadRange::new(4000.0, 4000.0));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].booster_version_category, "FT");
        assert_eq!(hit[0].outcome, Outcome::Failure);

        let nudged = 4000.0 + 1e-6;
        let miss = scatter_points(&store, &SiteOption::All, PayloadRange::new(nudged, nudged));
        assert!(miss.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let store = scenario_store();
        let range = PayloadRange::new(1000.0, 8000.0);
        for option in store.sites() {
            assert_eq!(success_breakdown(&store, option), success_breakdown(&store, option));
            assert_eq!(
                scatter_points(&store, option, range),
                scatter_points(&store, option, range)
            );
        }
    }
}
