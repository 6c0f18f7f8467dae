//! Result model builder
//!
//! Pure mapping from an [`AnalysisResponse`] to what the report panel
//! renders. Ordering is preserved; nothing is sorted, filtered or merged.

use edgebench_core::{AnalysisResponse, EdgeCase, MetricsReport, Suggestion};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    pub metrics: MetricsReport,
    pub functions: Vec<FunctionModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionModel {
    pub name: String,
    pub signature: Option<String>,
    pub complexity: Option<i64>,
    /// `None` means no suggestions block at all
    pub suggestions: Option<Vec<Suggestion>>,
    pub edge_cases: Vec<EdgeCase>,
}

impl ReportModel {
    pub fn build(response: AnalysisResponse) -> Self {
        let functions = response
            .functions
            .into_iter()
            .map(|function| {
                let signature = function.signature();
                let suggestions = function.suggestions.filter(|s| !s.is_empty());
                FunctionModel {
                    name: function.name,
                    signature,
                    complexity: function.complexity,
                    suggestions,
                    edge_cases: function.edge_cases,
                }
            })
            .collect();

        Self {
            metrics: response.metrics,
            functions,
        }
    }

    /// Distinct categories in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for case in self.functions.iter().flat_map(|f| f.edge_cases.iter()) {
            if !seen.iter().any(|c| c == &case.category) {
                seen.push(case.category.clone());
            }
        }
        seen
    }

    pub fn case_count(&self) -> usize {
        self.functions.iter().map(|f| f.edge_cases.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgebench_core::{FunctionArg, FunctionReport};

    fn metrics() -> MetricsReport {
        MetricsReport {
            total_complexity: 1,
            h1: Some(2.0),
            h2: Some(2.0),
            n1: Some(3.0),
            n2: Some(3.0),
            total_lines: None,
            complexity_rank: None,
        }
    }

    fn case(category: &str) -> EdgeCase {
        EdgeCase {
            description: format!("{category} input"),
            category: category.to_string(),
            code: "f(0)".to_string(),
        }
    }

    fn function(name: &str, suggestions: Option<Vec<Suggestion>>, cases: Vec<EdgeCase>) -> FunctionReport {
        FunctionReport {
            name: name.to_string(),
            suggestions,
            edge_cases: cases,
            complexity: None,
            args: Vec::new(),
            returns: None,
        }
    }

    #[test]
    fn test_empty_or_missing_suggestions_have_no_block() {
        let model = ReportModel::build(AnalysisResponse {
            metrics: metrics(),
            functions: vec![function("a", Some(vec![]), vec![]), function("b", None, vec![])],
        });

        assert!(model.functions.iter().all(|f| f.suggestions.is_none()));
    }

    #[test]
    fn test_suggestions_kept_in_order() {
        let suggestions = vec![
            Suggestion {
                kind: "documentation".into(),
                message: "Add a docstring".into(),
            },
            Suggestion {
                kind: "type_hints".into(),
                message: "Annotate the return type".into(),
            },
        ];
        let model = ReportModel::build(AnalysisResponse {
            metrics: metrics(),
            functions: vec![function("a", Some(suggestions.clone()), vec![])],
        });

        assert_eq!(model.functions[0].suggestions.as_ref(), Some(&suggestions));
    }

    #[test]
    fn test_function_order_is_response_order() {
        let model = ReportModel::build(AnalysisResponse {
            metrics: metrics(),
            functions: vec![
                function("zeta", None, vec![]),
                function("alpha", None, vec![]),
                function("mid", None, vec![]),
            ],
        });

        let names: Vec<_> = model.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_categories_first_appearance_without_sorting() {
        let model = ReportModel::build(AnalysisResponse {
            metrics: metrics(),
            functions: vec![
                function("a", None, vec![case("typical"), case("boundary")]),
                function("b", None, vec![case("boundary"), case("error")]),
            ],
        });

        assert_eq!(model.categories(), vec!["typical", "boundary", "error"]);
        assert_eq!(model.case_count(), 4);
    }

    #[test]
    fn test_signature_carried_when_hints_present() {
        let mut report = function("add", None, vec![]);
        report.args = vec![FunctionArg {
            name: "x".into(),
            type_hint: "int".into(),
        }];
        report.returns = Some("int".into());

        let model = ReportModel::build(AnalysisResponse {
            metrics: metrics(),
            functions: vec![report],
        });

        assert_eq!(model.functions[0].signature.as_deref(), Some("add(x: int) -> int"));
    }
}
