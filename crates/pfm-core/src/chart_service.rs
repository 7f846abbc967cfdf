//! Chart series derived from the ledger's read views.

use pfm_domain::Transaction;

use crate::summary_service::SummaryService;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the pie in `0.0..=1.0`.
    pub share: f64,
}

/// Expense share per category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub series_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Largest bar value, or zero for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }
}

pub struct ChartService;

impl ChartService {
    pub fn expense_pie(transactions: &[Transaction]) -> PieChart {
        let breakdown = SummaryService::expense_by_category(transactions);
        let total = breakdown.total();
        let slices = breakdown
            .iter()
            .map(|(category, value)| PieSlice {
                label: category.to_string(),
                value,
                share: if total > 0.0 { value / total } else { 0.0 },
            })
            .collect();
        PieChart { slices }
    }

    pub fn income_vs_expense(transactions: &[Transaction]) -> BarChart {
        let summary = SummaryService::summarize(transactions);
        BarChart {
            series_label: "Amount".into(),
            bars: vec![
                Bar {
                    label: "Income".into(),
                    value: summary.total_income,
                },
                Bar {
                    label: "Expense".into(),
                    value: summary.total_expense,
                },
            ],
        }
    }
}
