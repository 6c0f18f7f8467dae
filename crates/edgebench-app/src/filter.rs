//! Category filter controller

use edgebench_core::prelude::*;
use edgebench_core::CategoryFilter;

use crate::report::ReportPanel;

/// Holds the single active category and sweeps card visibility
#[derive(Debug, Default)]
pub struct FilterController {
    active: CategoryFilter,
}

impl FilterController {
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    /// Make `filter` active and recompute visibility.
    ///
    /// Selecting the already active filter does nothing and returns `false`.
    pub fn select(&mut self, filter: CategoryFilter, panel: &mut ReportPanel) -> bool {
        if self.active == filter {
            return false;
        }
        debug!("Filter {} -> {}", self.active, filter);
        self.active = filter;
        self.apply(panel);
        true
    }

    /// Sweep every rendered case card. Returns the number left visible.
    pub fn apply(&self, panel: &mut ReportPanel) -> usize {
        let mut visible = 0;
        for case in panel.cases_mut() {
            let show = self.active.matches(case.category());
            case.set_visible(show);
            visible += usize::from(show);
        }
        visible
    }

    /// Filter bar entries: `all`, the observed categories, and the active
    /// category when the current report no longer contains it.
    pub fn options(&self, categories: &[String]) -> Vec<CategoryFilter> {
        let mut options = Vec::with_capacity(categories.len() + 2);
        options.push(CategoryFilter::All);
        options.extend(categories.iter().map(|c| CategoryFilter::Only(c.clone())));
        if !options.contains(&self.active) {
            options.push(self.active.clone());
        }
        options
    }

    /// The entry after (or before) the active one, wrapping around
    pub fn cycled(&self, categories: &[String], forward: bool) -> CategoryFilter {
        let options = self.options(categories);
        let len = options.len();
        let current = options
            .iter()
            .position(|o| o == &self.active)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        options[next].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{FunctionModel, ReportModel};
    use edgebench_core::{EdgeCase, MetricsReport};

    fn panel_with(categories: &[&str]) -> ReportPanel {
        let mut panel = ReportPanel::default();
        panel.render(ReportModel {
            metrics: MetricsReport {
                total_complexity: 1,
                h1: Some(0.0),
                h2: Some(0.0),
                n1: Some(0.0),
                n2: Some(0.0),
                total_lines: None,
                complexity_rank: None,
            },
            functions: vec![FunctionModel {
                name: "f".into(),
                signature: None,
                complexity: None,
                suggestions: None,
                edge_cases: categories
                    .iter()
                    .map(|c| EdgeCase {
                        description: c.to_string(),
                        category: c.to_string(),
                        code: "f(0)".into(),
                    })
                    .collect(),
            }],
        });
        panel
    }

    fn only(c: &str) -> CategoryFilter {
        CategoryFilter::Only(c.to_string())
    }

    fn visible_categories(panel: &ReportPanel) -> Vec<String> {
        panel.cards()[0]
            .visible_cases()
            .map(|c| c.category().to_string())
            .collect()
    }

    #[test]
    fn test_select_boundary_hides_typical() {
        let mut panel = panel_with(&["boundary", "typical"]);
        let mut filter = FilterController::default();

        assert!(filter.select(only("boundary"), &mut panel));
        assert_eq!(visible_categories(&panel), vec!["boundary"]);
    }

    #[test]
    fn test_select_then_all_restores_everything() {
        let mut panel = panel_with(&["boundary", "typical", "error"]);
        let mut filter = FilterController::default();

        filter.select(only("error"), &mut panel);
        filter.select(CategoryFilter::All, &mut panel);

        assert_eq!(panel.visible_case_count(), 3);
    }

    #[test]
    fn test_reselect_is_noop_not_toggle() {
        let mut panel = panel_with(&["boundary", "typical"]);
        let mut filter = FilterController::default();

        filter.select(only("boundary"), &mut panel);
        assert!(!filter.select(only("boundary"), &mut panel));
        assert_eq!(filter.active(), &only("boundary"));
        assert_eq!(visible_categories(&panel), vec!["boundary"]);
    }

    #[test]
    fn test_filter_never_removes_cards() {
        let mut panel = panel_with(&["boundary", "typical"]);
        let mut filter = FilterController::default();

        filter.select(only("missing"), &mut panel);
        assert_eq!(panel.visible_case_count(), 0);
        assert_eq!(panel.cards()[0].cases.len(), 2);
    }

    #[test]
    fn test_options_keep_stale_active_category() {
        let mut panel = panel_with(&["boundary"]);
        let mut filter = FilterController::default();
        filter.select(only("typical"), &mut panel);

        let options = filter.options(panel.categories());
        assert_eq!(
            options,
            vec![CategoryFilter::All, only("boundary"), only("typical")]
        );
    }

    #[test]
    fn test_cycled_wraps_both_ways() {
        let categories = vec!["boundary".to_string(), "typical".to_string()];
        let filter = FilterController::default();

        assert_eq!(filter.cycled(&categories, true), only("boundary"));
        assert_eq!(filter.cycled(&categories, false), only("typical"));
    }
}
