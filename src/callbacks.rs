use std::fmt;

use crate::chart::{Figure, PieFigure, ScatterFigure};
use crate::data::aggregate::{scatter_points, success_breakdown};
use crate::data::model::{DatasetStore, Selection};

// ---------------------------------------------------------------------------
// Component ids
// ---------------------------------------------------------------------------

/// Input controls on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    pub fn id(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Chart placeholders on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl ChartId {
    pub fn id(self) -> &'static str {
        match self {
            ChartId::SuccessPieChart => "success-pie-chart",
            ChartId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ---------------------------------------------------------------------------
// Callback registry
// ---------------------------------------------------------------------------

/// Computes a chart's figure from the store and the current control values.
pub type Handler = fn(&DatasetStore, &Selection) -> Figure;

/// Binds a handler to the controls it reads and the chart it replaces.
#[derive(Clone, Copy)]
pub struct Callback {
    pub output: ChartId,
    pub inputs: &'static [ControlId],
    pub handler: Handler,
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// Every (input control → handler → output chart) binding of the dashboard.
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    /// The two standard bindings: pie ← dropdown, scatter ← dropdown + slider.
    pub fn dashboard() -> Self {
        let mut registry = Self::default();
        registry.register(Callback {
            output: ChartId::SuccessPieChart,
            inputs: &[ControlId::SiteDropdown],
            handler: pie_chart,
        });
        registry.register(Callback {
            output: ChartId::SuccessPayloadScatterChart,
            inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
            handler: scatter_chart,
        });
        registry
    }

    pub fn register(&mut self, callback: Callback) {
        log::debug!("Registered callback {:?} -> {}", callback.inputs, callback.output);
        self.callbacks.push(callback);
    }

    /// Run every callback (initial render).
    pub fn run_all(&self, store: &DatasetStore, selection: &Selection) -> Vec<(ChartId, Figure)> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, (cb.handler)(store, selection)))
            .collect()
    }

    /// Run only the callbacks that read `changed`.
    pub fn dispatch(
        &self,
        changed: ControlId,
        store: &DatasetStore,
        selection: &Selection,
    ) -> Vec<(ChartId, Figure)> {
        self.callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&changed))
            .map(|cb| {
                log::debug!("{changed} changed, updating {}", cb.output);
                (cb.output, (cb.handler)(store, selection))
            })
            .collect()
    }
}

// -- Handlers --

fn pie_chart(store: &DatasetStore, selection: &Selection) -> Figure {
    let breakdown = success_breakdown(store, &selection.site);
    Figure::Pie(PieFigure::from_breakdown(&breakdown))
}

fn scatter_chart(store: &DatasetStore, selection: &Selection) -> Figure {
    let points = scatter_points(store, &selection.site, selection.payload);
    Figure::Scatter(ScatterFigure::from_points(
        &selection.site,
        &points,
        store.booster_categories(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::{PayloadRange, SiteOption};

    fn store() -> DatasetStore {
        DatasetStore::from_records(vec![
            record("A", 500.0, "v1.0", 1),
            record("B", 9000.0, "FT", 0),
        ])
        .unwrap()
    }

    #[test]
    fn initial_render_fills_both_charts() {
        let store = store();
        let figures = CallbackRegistry::dashboard().run_all(&store, &store.initial_selection());

        let ids: Vec<ChartId> = figures.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            [ChartId::SuccessPieChart, ChartId::SuccessPayloadScatterChart]
        );
        assert!(matches!(&figures[0].1, Figure::Pie(p) if p.slices.len() == 2));
        assert!(matches!(&figures[1].1, Figure::Scatter(s) if s.point_count() == 2));
    }

    #[test]
    fn slider_change_only_updates_scatter() {
        let store = store();
        let selection = Selection {
            site: SiteOption::All,
            payload: PayloadRange::new(0.0, 1000.0),
        };
        let figures = CallbackRegistry::dashboard().dispatch(ControlId::PayloadSlider, &store, &selection);

        assert_eq!(figures.len(), 1);
        let (id, figure) = &figures[0];
        assert_eq!(*id, ChartId::SuccessPayloadScatterChart);
        assert!(matches!(figure, Figure::Scatter(s) if s.point_count() == 1));
    }

    #[test]
    fn dropdown_change_updates_both_charts() {
        let store = store();
        let selection = Selection {
            site: SiteOption::Site("B".into()),
            payload: PayloadRange::new(0.0, 10000.0),
        };
        let figures = CallbackRegistry::dashboard().dispatch(ControlId::SiteDropdown, &store, &selection);

        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].1.title(), "The success and failed count for B");
        assert!(figures[1].1.title().ends_with("for launch site B"));
    }

    #[test]
    fn custom_callbacks_can_be_registered() {
        fn empty(_: &DatasetStore, sel: &Selection) -> Figure {
            Figure::Scatter(ScatterFigure::from_points(&sel.site, &[], &[]))
        }

        let mut registry = CallbackRegistry::default();
        registry.register(Callback {
            output: ChartId::SuccessPayloadScatterChart,
            inputs: &[ControlId::PayloadSlider],
            handler: empty,
        });
        let store = store();
        let sel = store.initial_selection();
        assert!(registry.dispatch(ControlId::SiteDropdown, &store, &sel).is_empty());
        assert!(registry.dispatch(ControlId::PayloadSlider, &store, &sel)[0].1.is_empty());
    }

    #[test]
    fn ids_match_component_names() {
        assert_eq!(ControlId::SiteDropdown.to_string(), "site-dropdown");
        assert_eq!(ControlId::PayloadSlider.id(), "payload-slider");
        assert_eq!(ChartId::SuccessPieChart.id(), "success-pie-chart");
        assert_eq!(
            ChartId::SuccessPayloadScatterChart.to_string(),
            "success-payload-scatter-chart"
        );
    }
}
