use std::collections::{BTreeMap, BTreeSet};

use crate::callbacks::{CallbackRegistry, ChartId, ControlId};
use crate::chart::Figure;
use crate::data::model::{DatasetStore, PayloadRange, Selection, SiteOption};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Current control values.
    pub selection: Selection,

    /// Text typed into the site dropdown's search box.
    pub site_search: String,

    /// Figure currently shown by each chart placeholder.
    figures: BTreeMap<ChartId, Figure>,

    /// Controls whose value changed since the last [`AppState::apply_changes`].
    pending: BTreeSet<ControlId>,
}

impl AppState {
    /// Start from the store's initial selection and render every chart once.
    pub fn new(store: &DatasetStore, callbacks: &CallbackRegistry) -> Self {
        let selection = store.initial_selection();
        let figures = callbacks.run_all(store, &selection).into_iter().collect();
        Self {
            selection,
            site_search: String::new(),
            figures,
            pending: BTreeSet::new(),
        }
    }

    pub fn figure(&self, chart: ChartId) -> Option<&Figure> {
        self.figures.get(&chart)
    }

    /// Record that a control's value changed; charts update on the next
    /// [`AppState::apply_changes`].
    pub fn mark_changed(&mut self, control: ControlId) {
        self.pending.insert(control);
    }

    /// Change the dropdown value. No-op if it is already selected.
    pub fn select_site(&mut self, site: SiteOption) {
        if self.selection.site != site {
            log::info!("Site selection: {site}");
            self.selection.site = site;
            self.mark_changed(ControlId::SiteDropdown);
        }
    }

    /// Change the slider value. No-op if it is unchanged.
    pub fn set_payload(&mut self, payload: PayloadRange) {
        if self.selection.payload != payload {
            log::info!("Payload range: {}..={} kg", payload.low(), payload.high());
            self.selection.payload = payload;
            self.mark_changed(ControlId::PayloadSlider);
        }
    }

    /// Rerun the callbacks bound to every changed control and replace their
    /// charts' figures, all against the same selection. Returns whether any
    /// figure was replaced.
    pub fn apply_changes(&mut self, store: &DatasetStore, callbacks: &CallbackRegistry) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let pending = std::mem::take(&mut self.pending);

        let mut updated: BTreeMap<ChartId, Figure> = BTreeMap::new();
        for control in pending {
            for (chart, figure) in callbacks.dispatch(control, store, &self.selection) {
                if figure.is_empty() {
                    log::debug!("{chart}: \"{}\" has no data", figure.title());
                }
                updated.insert(chart, figure);
            }
        }
        let changed = !updated.is_empty();
        self.figures.extend(updated);
        changed
    }
}
