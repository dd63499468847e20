//! Selection state machine: one browsing session's facet choices
//!
//! Cascade rules, applied atomically inside each toggle:
//! - toggling a period clears the selected eras (eras are scoped to periods)
//! - toggling an era clears the selected locations (locations are scoped to eras)
//! - toggling a location or ruler cascades nothing
//! - removing a value through [`SelectionState::remove_tag`] (the "active
//!   filter chip" path) never cascades; that asymmetry with the toggles is
//!   intentional and user-visible
//!
//! Every operation is total: unknown era/location/ruler names are accepted
//! as selections and simply match nothing downstream in the evaluator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tempora_common::Period;

use crate::catalog::FacetCatalog;

/// One active filter value, as displayed on a removable chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterTag {
    Period(Period),
    Era(String),
    Location(String),
}

/// A browsing session's current facet selections.
///
/// Created empty at session start, mutated only through the operations
/// below, and discarded on reset or session end. Never persisted server-side
/// and never shared between sessions; callers thread it explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_periods: BTreeSet<Period>,
    pub selected_eras: BTreeSet<String>,
    pub selected_locations: BTreeSet<String>,
    /// Separate facet, not cascaded from periods or eras
    pub selected_rulers: BTreeSet<String>,
    /// Only meaningful while `Period::Custom` is selected
    pub custom_date_from: Option<NaiveDate>,
    pub custom_date_to: Option<NaiveDate>,
}

impl SelectionState {
    /// Empty state: every dimension trivially satisfied
    pub fn new() -> SelectionState {
        SelectionState::default()
    }

    /// Flip a period selection; always clears the selected eras.
    ///
    /// Deselecting `Period::Custom` also clears the custom date range;
    /// selecting it leaves the dates as set by [`set_custom_date_range`].
    ///
    /// [`set_custom_date_range`]: SelectionState::set_custom_date_range
    pub fn toggle_period(&mut self, period: Period) {
        let deselecting = self.selected_periods.contains(&period);
        if deselecting {
            self.selected_periods.remove(&period);
        } else {
            self.selected_periods.insert(period);
        }
        self.selected_eras.clear();
        if deselecting && period == Period::Custom {
            self.custom_date_from = None;
            self.custom_date_to = None;
        }
    }

    /// Flip an era selection; always clears the selected locations
    pub fn toggle_era(&mut self, era_name: &str) {
        if !self.selected_eras.remove(era_name) {
            self.selected_eras.insert(era_name.to_string());
        }
        self.selected_locations.clear();
    }

    /// Flip a location selection; cascades nothing
    pub fn toggle_location(&mut self, location_name: &str) {
        if !self.selected_locations.remove(location_name) {
            self.selected_locations.insert(location_name.to_string());
        }
    }

    /// Flip a ruler selection; cascades nothing
    pub fn toggle_ruler(&mut self, ruler_name: &str) {
        if !self.selected_rulers.remove(ruler_name) {
            self.selected_rulers.insert(ruler_name.to_string());
        }
    }

    /// Set the custom date range used with `Period::Custom`
    pub fn set_custom_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.custom_date_from = from;
        self.custom_date_to = to;
    }

    /// Remove a single value via its displayed filter chip.
    ///
    /// Unlike the toggles, chip removal never clears dependent selections:
    /// removing a period leaves the selected eras exactly as they were.
    pub fn remove_tag(&mut self, tag: &FilterTag) {
        match tag {
            FilterTag::Period(period) => {
                self.selected_periods.remove(period);
                if *period == Period::Custom {
                    self.custom_date_from = None;
                    self.custom_date_to = None;
                }
            }
            FilterTag::Era(name) => {
                self.selected_eras.remove(name);
            }
            FilterTag::Location(name) => {
                self.selected_locations.remove(name);
            }
        }
    }

    /// Clear every selection and the custom date range. Idempotent.
    pub fn reset(&mut self) {
        *self = SelectionState::default();
    }

    /// True when no dimension constrains the result
    pub fn is_empty(&self) -> bool {
        *self == SelectionState::default()
    }

    /// Active selections in chip display order: periods, eras, locations
    pub fn active_tags(&self) -> Vec<FilterTag> {
        let mut tags: Vec<FilterTag> = Vec::new();
        tags.extend(self.selected_periods.iter().map(|p| FilterTag::Period(*p)));
        tags.extend(self.selected_eras.iter().cloned().map(FilterTag::Era));
        tags.extend(
            self.selected_locations
                .iter()
                .cloned()
                .map(FilterTag::Location),
        );
        tags
    }

    /// Eras currently selectable: all of them when no period is selected,
    /// otherwise the union of the selected periods' era sets.
    ///
    /// Recomputed from the catalog on every call; nothing is cached.
    pub fn enabled_eras(&self, catalog: &FacetCatalog) -> BTreeSet<String> {
        if self.selected_periods.is_empty() {
            return catalog.all_eras().clone();
        }
        self.selected_periods
            .iter()
            .flat_map(|p| catalog.eras_for_period(*p).iter().cloned())
            .collect()
    }

    /// Locations currently selectable.
    ///
    /// With nothing selected, every location is enabled. Era-level
    /// associations take priority over period-level ones: as soon as any era
    /// is selected, only its era-to-location entries count, even if periods
    /// are also selected.
    pub fn enabled_locations(&self, catalog: &FacetCatalog) -> BTreeSet<String> {
        if self.selected_periods.is_empty() && self.selected_eras.is_empty() {
            return catalog.all_locations().clone();
        }
        if !self.selected_eras.is_empty() {
            return self
                .selected_eras
                .iter()
                .flat_map(|e| catalog.locations_for_era(e).iter().cloned())
                .collect();
        }
        self.selected_periods
            .iter()
            .flat_map(|p| catalog.locations_for_period(*p).iter().cloned())
            .collect()
    }
}
