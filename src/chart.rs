use std::f64::consts::{FRAC_PI_2, TAU};

use crate::data::aggregate::{ScatterPoint, SuccessBreakdown};
use crate::data::model::SiteOption;

/// Arc segments per quarter turn of a pie wedge.
const ARC_SEGMENTS: usize = 24;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// One wedge of a pie chart. Angles are radians, measured counter-clockwise
/// from the positive x axis; wedges run clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    /// Angle through the middle of the wedge, for placing its label.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn from_breakdown(breakdown: &SuccessBreakdown) -> Self {
        let title = match breakdown {
            SuccessBreakdown::BySite(_) => {
                "The total success launches in each launch site".to_string()
            }
            SuccessBreakdown::ByOutcome { site, .. } => {
                format!("The success and failed count for {site}")
            }
        };

        let total = breakdown.total();
        let mut slices = Vec::new();
        if total > 0 {
            let mut angle = FRAC_PI_2;
            for (label, value) in breakdown.entries() {
                let fraction = value as f64 / total as f64;
                let end = angle - fraction * TAU;
                slices.push(PieSlice {
                    label,
                    value,
                    fraction,
                    start_angle: angle,
                    end_angle: end,
                });
                angle = end;
            }
        }

        PieFigure { title, slices }
    }

    /// Nothing to draw: no entries, or every entry is zero.
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.value == 0)
    }
}

/// Outline polygons for the wedge between `start` and `end` (radians).
///
/// Wedges wider than a quarter turn are split so that every returned
/// polygon is convex. Each polygon starts at the centre.
pub fn wedge_outline(start: f64, end: f64, radius: f64) -> Vec<Vec<[f64; 2]>> {
    let sweep = end - start;
    if sweep == 0.0 {
        return Vec::new();
    }
    let pieces = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f64;

    (0..pieces)
        .map(|p| {
            let from = start + p as f64 * piece_sweep;
            let mut outline = Vec::with_capacity(ARC_SEGMENTS + 2);
            outline.push([0.0, 0.0]);
            outline.extend((0..=ARC_SEGMENTS).map(|i| {
                let a = from + piece_sweep * i as f64 / ARC_SEGMENTS as f64;
                [radius * a.cos(), radius * a.sin()]
            }));
            outline
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Points of one booster version category: `[payload_mass_kg, class]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    /// Group points by category, series ordered like `categories`.
    /// Categories with no points are left out.
    pub fn from_points(site: &SiteOption, points: &[ScatterPoint], categories: &[String]) -> Self {
        let title = match site {
            SiteOption::All => "The scatter plot between Payload mass and Class".to_string(),
            SiteOption::Site(name) => {
                format!("The scatter plot between Payload mass and Class for launch site {name}")
            }
        };

        let series = categories
            .iter()
            .filter_map(|category| {
                let pts: Vec<[f64; 2]> = points
                    .iter()
                    .filter(|p| &p.booster_version_category == category)
                    .map(|p| [p.payload_mass_kg, p.outcome.class() as f64])
                    .collect();
                (!pts.is_empty()).then(|| ScatterSeries {
                    category: category.clone(),
                    points: pts,
                })
            })
            .collect();

        ScatterFigure { title, series }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Figure – what a chart placeholder currently shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Pie(pie) => pie.is_empty(),
            Figure::Scatter(scatter) => scatter.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::{OutcomeCount, SiteSuccesses};
    use crate::data::model::Outcome;

    fn by_site(counts: &[(&str, usize)]) -> SuccessBreakdown {
        SuccessBreakdown::BySite(
            counts
                .iter()
                .map(|&(site, successes)| SiteSuccesses {
                    site: site.to_string(),
                    successes,
                })
                .collect(),
        )
    }

    #[test]
    fn pie_slices_cover_full_turn_clockwise() {
        let pie = PieFigure::from_breakdown(&by_site(&[("A", 3), ("B", 1)]));

        assert_eq!(pie.title, "The total success launches in each launch site");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].fraction, 0.75);
        assert_eq!(pie.slices[0].start_angle, FRAC_PI_2);
        assert!(pie.slices[0].end_angle < pie.slices[0].start_angle);
        assert_eq!(pie.slices[1].start_angle, pie.slices[0].end_angle);
        let last = pie.slices[1].end_angle;
        assert!((FRAC_PI_2 - last - TAU).abs() < 1e-12);
    }

    #[test]
    fn zero_successes_everywhere_is_an_empty_pie() {
        let pie = PieFigure::from_breakdown(&by_site(&[("A", 0), ("B", 0)]));
        assert!(pie.is_empty());
        assert!(Figure::Pie(pie).is_empty());
    }

    #[test]
    fn site_pie_uses_outcome_labels() {
        let breakdown = SuccessBreakdown::ByOutcome {
            site: "KSC LC-39A".into(),
            counts: vec![OutcomeCount {
                outcome: Outcome::Success,
                count: 10,
            }],
        };
        let pie = PieFigure::from_breakdown(&breakdown);
        assert_eq!(pie.title, "The success and failed count for KSC LC-39A");
        assert_eq!(pie.slices[0].label, "Success (1)");
        assert_eq!(pie.slices[0].fraction, 1.0);
    }

    #[test]
    fn wide_wedges_split_into_convex_pieces() {
        assert_eq!(wedge_outline(0.0, -FRAC_PI_2, 1.0).len(), 1);
        assert_eq!(wedge_outline(0.0, -TAU, 1.0).len(), 4);
        assert!(wedge_outline(1.0, 1.0, 1.0).is_empty());

        let pieces = wedge_outline(0.0, 0.3, 2.0);
        let outline = &pieces[0];
        assert_eq!(outline[0], [0.0, 0.0]);
        assert_eq!(outline[1], [2.0, 0.0]);
        let last = outline[outline.len() - 1];
        assert!((last[0] - 2.0 * 0.3f64.cos()).abs() < 1e-12);
        assert!((last[1] - 2.0 * 0.3f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn scatter_groups_by_category_in_store_order() {
        let point = |mass: f64, outcome, cat: &str| ScatterPoint {
            payload_mass_kg: mass,
            outcome,
            booster_version_category: cat.to_string(),
        };
        let points = vec![
            point(3000.0, Outcome::Success, "FT"),
            point(500.0, Outcome::Failure, "v1.0"),
            point(5000.0, Outcome::Failure, "FT"),
        ];
        let categories = vec!["v1.0".to_string(), "v1.1".to_string(), "FT".to_string()];

        let fig = ScatterFigure::from_points(&SiteOption::Site("CCAFS LC-40".into()), &points, &categories);
        assert_eq!(
            fig.title,
            "The scatter plot between Payload mass and Class for launch site CCAFS LC-40"
        );
        let names: Vec<&str> = fig.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, ["v1.0", "FT"]);
        assert_eq!(fig.series[1].points, vec![[3000.0, 1.0], [5000.0, 0.0]]);
        assert_eq!(fig.point_count(), 3);
    }
}
