//! Chart components
//!
//! Serializable chart descriptions; the visual engine that turns them into
//! axes and geometry is an external collaborator. Bar, line, and area charts
//! share the [`Series`] data model (values plotted against their index, with
//! optional category labels on the bar chart); pie charts take [`Slice`]s.
//!
//! # Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! chart::bar([
//!     Series::new("2023", [12.0, 18.0, 9.0]),
//!     Series::new("2024", [15.0, 21.0, 14.0]),
//! ])
//! .categories(["Q1", "Q2", "Q3"])
//! .legend(Placement::Bottom)
//! .stacked()
//!
//! chart::pie([
//!     Slice::new("Direct", 44.0),
//!     Slice::new("Referral", 31.0),
//! ])
//! .donut(0.6)
//! ```

use trellis_core::Color;
use trellis_element::prelude::*;

/// One named series of values for bar/line/area charts
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    values: Vec<f64>,
    color: Prop<Color>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            color: Prop::Unset,
        }
    }

    /// Fix the series color instead of letting the renderer pick one
    pub fn color(mut self, color: Color) -> Self {
        self.color = Prop::Set(color);
        self
    }
}

impl ToPropValue for Series {
    fn to_prop_value(&self) -> PropValue {
        let mut entries = vec![
            ("name", PropValue::Str(self.name.clone())),
            ("values", PropValue::list(self.values.iter().copied())),
        ];
        if let Some(color) = self.color.as_ref() {
            entries.push(("color", PropValue::Color(*color)));
        }
        PropValue::map(entries)
    }
}

/// One labeled slice of a pie chart
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    label: String,
    value: f64,
    color: Prop<Color>,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: Prop::Unset,
        }
    }

    /// Fix the slice color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Prop::Set(color);
        self
    }
}

impl ToPropValue for Slice {
    fn to_prop_value(&self) -> PropValue {
        let mut entries = vec![
            ("label", PropValue::Str(self.label.clone())),
            ("value", PropValue::Float(self.value)),
        ];
        if let Some(color) = self.color.as_ref() {
            entries.push(("color", PropValue::Color(*color)));
        }
        PropValue::map(entries)
    }
}

// ============================================================================
// Bar
// ============================================================================

/// Bar chart builder
pub struct BarChart {
    series: Vec<Series>,
    categories: Prop<Vec<String>>,
    legend: Prop<Placement>,
    grid: Prop<bool>,
    stacked: Prop<bool>,
    height: Prop<f32>,
}

impl BarChart {
    pub fn new(series: impl IntoIterator<Item = Series>) -> Self {
        Self {
            series: series.into_iter().collect(),
            categories: Prop::Unset,
            legend: Prop::Unset,
            grid: Prop::Unset,
            stacked: Prop::Unset,
            height: Prop::Unset,
        }
    }

    /// Label the value positions shared by every series
    pub fn categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories = Prop::Set(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Show a legend on the given side
    pub fn legend(mut self, placement: Placement) -> Self {
        self.legend = Prop::Set(placement);
        self
    }

    /// Toggle grid lines
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = Prop::Set(grid);
        self
    }

    /// Stack series instead of grouping them
    pub fn stacked(mut self) -> Self {
        self.stacked = Prop::Set(true);
        self
    }

    /// Fix the chart height in pixels
    pub fn height(mut self, px: f32) -> Self {
        self.height = Prop::Set(px);
        self
    }
}

impl ElementBuilder for BarChart {
    fn build(&self) -> UiNode {
        UiNode::new("Chart.Bar")
            .prop_set("series", self.series.clone())
            .prop("categories", self.categories.encode())
            .prop("legend", self.legend.encode())
            .prop("grid", self.grid.encode())
            .prop("stacked", self.stacked.encode())
            .prop("height", self.height.encode())
    }
}

/// Create a bar chart from series data
pub fn bar(series: impl IntoIterator<Item = Series>) -> BarChart {
    BarChart::new(series)
}

// ============================================================================
// Line
// ============================================================================

/// Line chart builder
pub struct LineChart {
    series: Vec<Series>,
    legend: Prop<Placement>,
    grid: Prop<bool>,
    smooth: Prop<bool>,
    height: Prop<f32>,
}

impl LineChart {
    pub fn new(series: impl IntoIterator<Item = Series>) -> Self {
        Self {
            series: series.into_iter().collect(),
            legend: Prop::Unset,
            grid: Prop::Unset,
            smooth: Prop::Unset,
            height: Prop::Unset,
        }
    }

    /// Show a legend on the given side
    pub fn legend(mut self, placement: Placement) -> Self {
        self.legend = Prop::Set(placement);
        self
    }

    /// Toggle grid lines
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = Prop::Set(grid);
        self
    }

    /// Interpolate with smooth curves instead of straight segments
    pub fn smooth(mut self) -> Self {
        self.smooth = Prop::Set(true);
        self
    }

    /// Fix the chart height in pixels
    pub fn height(mut self, px: f32) -> Self {
        self.height = Prop::Set(px);
        self
    }
}

impl ElementBuilder for LineChart {
    fn build(&self) -> UiNode {
        UiNode::new("Chart.Line")
            .prop_set("series", self.series.clone())
            .prop("legend", self.legend.encode())
            .prop("grid", self.grid.encode())
            .prop("smooth", self.smooth.encode())
            .prop("height", self.height.encode())
    }
}

/// Create a line chart from series data
pub fn line(series: impl IntoIterator<Item = Series>) -> LineChart {
    LineChart::new(series)
}

// ============================================================================
// Area
// ============================================================================

/// Area chart builder
pub struct AreaChart {
    series: Vec<Series>,
    legend: Prop<Placement>,
    grid: Prop<bool>,
    smooth: Prop<bool>,
    stacked: Prop<bool>,
    height: Prop<f32>,
}

impl AreaChart {
    pub fn new(series: impl IntoIterator<Item = Series>) -> Self {
        Self {
            series: series.into_iter().collect(),
            legend: Prop::Unset,
            grid: Prop::Unset,
            smooth: Prop::Unset,
            stacked: Prop::Unset,
            height: Prop::Unset,
        }
    }

    /// Show a legend on the given side
    pub fn legend(mut self, placement: Placement) -> Self {
        self.legend = Prop::Set(placement);
        self
    }

    /// Toggle grid lines
    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = Prop::Set(grid);
        self
    }

    /// Interpolate with smooth curves
    pub fn smooth(mut self) -> Self {
        self.smooth = Prop::Set(true);
        self
    }

    /// Stack series areas
    pub fn stacked(mut self) -> Self {
        self.stacked = Prop::Set(true);
        self
    }

    /// Fix the chart height in pixels
    pub fn height(mut self, px: f32) -> Self {
        self.height = Prop::Set(px);
        self
    }
}

impl ElementBuilder for AreaChart {
    fn build(&self) -> UiNode {
        UiNode::new("Chart.Area")
            .prop_set("series", self.series.clone())
            .prop("legend", self.legend.encode())
            .prop("grid", self.grid.encode())
            .prop("smooth", self.smooth.encode())
            .prop("stacked", self.stacked.encode())
            .prop("height", self.height.encode())
    }
}

/// Create an area chart from series data
pub fn area(series: impl IntoIterator<Item = Series>) -> AreaChart {
    AreaChart::new(series)
}

// ============================================================================
// Pie
// ============================================================================

/// Pie chart builder
pub struct PieChart {
    slices: Vec<Slice>,
    legend: Prop<Placement>,
    inner_radius: Prop<f64>,
    height: Prop<f32>,
}

impl PieChart {
    pub fn new(slices: impl IntoIterator<Item = Slice>) -> Self {
        Self {
            slices: slices.into_iter().collect(),
            legend: Prop::Unset,
            inner_radius: Prop::Unset,
            height: Prop::Unset,
        }
    }

    /// Show a legend on the given side
    pub fn legend(mut self, placement: Placement) -> Self {
        self.legend = Prop::Set(placement);
        self
    }

    /// Hollow out the center; `fraction` is relative to the outer radius
    pub fn donut(mut self, fraction: f64) -> Self {
        self.inner_radius = Prop::Set(fraction.clamp(0.0, 1.0));
        self
    }

    /// Fix the chart height in pixels
    pub fn height(mut self, px: f32) -> Self {
        self.height = Prop::Set(px);
        self
    }
}

impl ElementBuilder for PieChart {
    fn build(&self) -> UiNode {
        UiNode::new("Chart.Pie")
            .prop_set("slices", self.slices.clone())
            .prop("legend", self.legend.encode())
            .prop("inner_radius", self.inner_radius.encode())
            .prop("height", self.height.encode())
    }
}

/// Create a pie chart from slice data
pub fn pie(slices: impl IntoIterator<Item = Slice>) -> PieChart {
    PieChart::new(slices)
}
