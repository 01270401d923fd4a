// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, geometry engine and surface traits.

pub mod axis;
pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod render;
pub mod scale;
pub mod style;
pub mod surface;
pub mod types;

pub use axis::{label_positions, layout, AxisKind, LabelPlacement};
pub use chart::LineChart;
pub use config::{ChartConfig, StyleSection};
pub use curve::{build_path, polyline, CurvePath};
pub use error::{ChartError, ChartResult};
pub use geometry::{ContentBox, Point};
pub use path::{Path, PathCommand};
pub use render::{flush_redraw, render};
pub use scale::{project, value_range};
pub use style::StyleConfig;
pub use surface::{
    DrawOp, FixedMetrics, Paint, PaintStyle, RecordingSurface, Surface, TextAlign, TextBounds, TextMeasure, TextStyle,
};
pub use types::{Color, LayoutBox};
