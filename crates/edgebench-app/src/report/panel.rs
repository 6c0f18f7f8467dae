//! Report panel: the rendered view tree for metrics and function cards.

use std::sync::Arc;

use edgebench_core::{MetricsReport, Suggestion};

use super::controls::{CardId, CaseId, ControlBinding, ControlId, ControlRegistry};
use super::model::ReportModel;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Label state of one copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Idle,
    /// Showing the confirmation; only the timer holding `token` may revert it
    Confirmed { token: u64 },
}

impl CopyLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Idle => COPY_LABEL,
            Self::Confirmed { .. } => COPIED_LABEL,
        }
    }
}

/// Edge-case sub-card
#[derive(Debug, Clone)]
pub struct CaseCard {
    pub id: CaseId,
    pub description: String,
    /// Drives both the filter match and the visible badge
    category: String,
    code: Arc<str>,
    visible: bool,
    copy_label: CopyLabel,
}

impl CaseCard {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn copy_label(&self) -> CopyLabel {
        self.copy_label
    }
}

/// Collapsible card for one analyzed function
#[derive(Debug, Clone)]
pub struct FunctionCard {
    pub id: CardId,
    pub name: String,
    pub signature: Option<String>,
    pub complexity: Option<i64>,
    pub suggestions: Option<Vec<Suggestion>>,
    pub cases: Vec<CaseCard>,
    open: bool,
}

impl FunctionCard {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn visible_cases(&self) -> impl Iterator<Item = &CaseCard> {
        self.cases.iter().filter(|c| c.visible)
    }
}

#[derive(Debug, Default)]
pub struct ReportPanel {
    metrics: Option<MetricsReport>,
    cards: Vec<FunctionCard>,
    controls: ControlRegistry,
    categories: Vec<String>,
    renders: u64,
    next_copy_token: u64,
}

impl ReportPanel {
    /// Replace the metrics panel and every card with `model`.
    ///
    /// Prior content and control bindings are cleared first. New cards start
    /// closed with every case visible; callers re-apply the active filter.
    pub fn render(&mut self, model: ReportModel) {
        self.cards.clear();
        self.controls.clear();
        self.categories = model.categories();
        self.metrics = Some(model.metrics);

        for (index, function) in model.functions.into_iter().enumerate() {
            let card_id = CardId(index);
            let cases = function
                .edge_cases
                .into_iter()
                .enumerate()
                .map(|(case_index, case)| CaseCard {
                    id: CaseId {
                        card: card_id,
                        case: case_index,
                    },
                    description: case.description,
                    category: case.category,
                    code: Arc::from(case.code),
                    visible: true,
                    copy_label: CopyLabel::Idle,
                })
                .collect();

            let card = FunctionCard {
                id: card_id,
                name: function.name,
                signature: function.signature,
                complexity: function.complexity,
                suggestions: function.suggestions,
                cases,
                open: false,
            };
            self.register_controls(&card);
            self.cards.push(card);
        }

        self.renders += 1;
    }

    fn register_controls(&mut self, card: &FunctionCard) {
        self.controls.register(
            ControlId::Toggle(card.id),
            ControlBinding::ToggleCard(card.id),
        );
        for case in &card.cases {
            self.controls.register(
                ControlId::Copy(case.id),
                ControlBinding::CopySnippet {
                    case: case.id,
                    snippet: Arc::clone(&case.code),
                },
            );
        }
    }

    pub fn metrics(&self) -> Option<&MetricsReport> {
        self.metrics.as_ref()
    }

    pub fn cards(&self) -> &[FunctionCard] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&FunctionCard> {
        self.cards.get(id.0)
    }

    pub fn case(&self, id: CaseId) -> Option<&CaseCard> {
        self.card(id.card).and_then(|card| card.cases.get(id.case))
    }

    fn case_mut(&mut self, id: CaseId) -> Option<&mut CaseCard> {
        self.cards
            .get_mut(id.card.0)
            .and_then(|card| card.cases.get_mut(id.case))
    }

    pub(crate) fn cases_mut(&mut self) -> impl Iterator<Item = &mut CaseCard> {
        self.cards.iter_mut().flat_map(|card| card.cases.iter_mut())
    }

    /// Categories of the current report, first appearance first
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn controls(&self) -> &ControlRegistry {
        &self.controls
    }

    pub fn binding(&self, id: ControlId) -> Option<&ControlBinding> {
        self.controls.get(id)
    }

    /// Number of completed renders
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_none()
    }

    pub fn visible_case_count(&self) -> usize {
        self.cards.iter().map(|c| c.visible_cases().count()).sum()
    }

    /// Flip one card's body. Returns the new open state.
    pub fn toggle(&mut self, id: CardId) -> Option<bool> {
        let card = self.cards.get_mut(id.0)?;
        card.open = !card.open;
        Some(card.open)
    }

    /// Controls reachable from the keyboard, in display order: each card's
    /// toggle followed by the copy controls of its visible cases when open.
    pub fn control_order(&self) -> Vec<ControlId> {
        let mut order = Vec::new();
        for card in &self.cards {
            order.push(ControlId::Toggle(card.id));
            if card.open {
                order.extend(card.visible_cases().map(|case| ControlId::Copy(case.id)));
            }
        }
        order
    }

    /// Show the confirmation label on a copy control and return the token
    /// its revert timer must present.
    pub fn confirm_copy(&mut self, id: CaseId) -> Option<u64> {
        self.next_copy_token += 1;
        let token = self.next_copy_token;
        let case = self.case_mut(id)?;
        case.copy_label = CopyLabel::Confirmed { token };
        Some(token)
    }

    /// Revert a copy label if `token` is still the one that set it.
    pub fn reset_copy_label(&mut self, id: CaseId, token: u64) -> bool {
        match self.case_mut(id) {
            Some(case) if case.copy_label == (CopyLabel::Confirmed { token }) => {
                case.copy_label = CopyLabel::Idle;
                true
            }
            _ => false,
        }
    }
}
