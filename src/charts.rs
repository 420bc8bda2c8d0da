// Dashboard and report chart definitions.
//
// Only the resource distribution chart is fed from the backend. The other
// three carry fixed placeholder series until matching endpoints exist.

use std::collections::HashMap;

use crate::models::ResourceCount;

/// Canvases that host a chart on the dashboard and reports pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Canvas {
    Resource,
    Consumption,
    Requests,
    Shortage,
}

impl Canvas {
    pub const ALL: [Canvas; 4] = [
        Canvas::Resource,
        Canvas::Consumption,
        Canvas::Requests,
        Canvas::Shortage,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Canvas::Resource => "resourceChart",
            Canvas::Consumption => "consumptionChart",
            Canvas::Requests => "requestsChart",
            Canvas::Shortage => "shortageChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Line,
    Bar,
    StackedBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<i64>,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas: Canvas,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Y axis title, when the chart has one.
    pub y_title: Option<&'static str>,
}

pub const CATEGORY_LABELS: [&str; 5] = ["Food", "Fuel", "Medical", "Weapons", "Manpower"];
const CATEGORY_COLORS: [&str; 5] = ["#27ae60", "#f39c12", "#e74c3c", "#2c3e50", "#3498db"];

const GREEN: &str = "#27ae60";
const ORANGE: &str = "#f39c12";
const RED: &str = "#e74c3c";

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn series(label: &str, data: &[i64], color: &'static str) -> Dataset {
    Dataset {
        label: Some(label.to_string()),
        data: data.to_vec(),
        colors: vec![color],
    }
}

/// Maps live counts onto the fixed category order, zero-filling gaps.
/// Categories outside the fixed set are dropped.
pub fn distribution_values(counts: &[ResourceCount]) -> Vec<i64> {
    let totals: HashMap<&str, i64> = counts
        .iter()
        .map(|c| (c.category.as_str(), c.total))
        .collect();
    CATEGORY_LABELS
        .iter()
        .map(|label| totals.get(label).copied().unwrap_or(0))
        .collect()
}

pub fn resource_distribution(counts: &[ResourceCount]) -> ChartSpec {
    ChartSpec {
        canvas: Canvas::Resource,
        kind: ChartKind::Doughnut,
        labels: labels(&CATEGORY_LABELS),
        datasets: vec![Dataset {
            label: None,
            data: distribution_values(counts),
            colors: CATEGORY_COLORS.to_vec(),
        }],
        y_title: None,
    }
}

pub fn consumption_placeholder() -> ChartSpec {
    ChartSpec {
        canvas: Canvas::Consumption,
        kind: ChartKind::Line,
        labels: (1..=7).map(|d| format!("Day {}", d)).collect(),
        datasets: vec![
            series("Food", &[1200, 1900, 1700, 1500, 1800, 1600, 1400], GREEN),
            series("Fuel", &[800, 1200, 1100, 900, 1000, 950, 850], ORANGE),
            series("Medical", &[400, 550, 500, 450, 500, 480, 460], RED),
        ],
        y_title: None,
    }
}

pub fn requests_placeholder() -> ChartSpec {
    ChartSpec {
        canvas: Canvas::Requests,
        kind: ChartKind::StackedBar,
        labels: labels(&CATEGORY_LABELS),
        datasets: vec![
            series("Approved", &[12, 19, 8, 15, 7], GREEN),
            series("Pending", &[5, 8, 12, 3, 4], ORANGE),
            series("Rejected", &[2, 3, 1, 5, 2], RED),
        ],
        y_title: None,
    }
}

pub fn shortage_placeholder() -> ChartSpec {
    ChartSpec {
        canvas: Canvas::Shortage,
        kind: ChartKind::Bar,
        labels: labels(&CATEGORY_LABELS),
        datasets: vec![Dataset {
            label: Some("Days until shortage".to_string()),
            data: vec![45, 23, 12, 60, 18],
            colors: CATEGORY_COLORS.to_vec(),
        }],
        y_title: Some("Days remaining"),
    }
}

/// All four charts, distribution first.
pub fn dashboard_charts(counts: &[ResourceCount]) -> Vec<ChartSpec> {
    vec![
        resource_distribution(counts),
        consumption_placeholder(),
        requests_placeholder(),
        shortage_placeholder(),
    ]
}
