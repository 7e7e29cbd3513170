//! Chart model: declarative series configuration resolved against a dataset.
//!
//! `ChartModel::build` turns a flat dataset plus per-series configuration
//! into categories and numeric points keyed by row identity. Rendering is
//! delegated to ratatui's chart widgets in `ui::chart`; interaction maps a
//! hit position back to a `RowId`, never to a value-equality lookup.

pub mod palette;

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::column::{column_by_id, ColumnDef};
use crate::dataset::{Dataset, RowId};
use crate::error::{DeckError, DeckResult};

// ============================================================================
// Configuration
// ============================================================================

/// Shape of the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Line,
    Scatter,
    /// Mixed bar/line/area series in one plot.
    Composed,
}

/// Shape of one series inside a composed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesKind {
    #[default]
    Bar,
    Line,
    Area,
}

/// Declarative configuration for one series.
#[derive(Debug, Clone)]
pub struct SeriesSpec {
    /// Column supplying the numeric values.
    pub column: String,
    /// Legend label.
    pub label: String,
    /// Explicit color; palette round-robin when absent.
    pub color: Option<Color>,
    /// Sub-shape, meaningful for composed charts.
    pub kind: SeriesKind,
}

impl SeriesSpec {
    /// Series reading the given column, labeled with the given text.
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
            color: None,
            kind: SeriesKind::default(),
        }
    }

    /// Builder-style setter for an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder-style setter for the sub-shape.
    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.kind = kind;
        self
    }
}

// ============================================================================
// Model
// ============================================================================

/// One x-axis category, tied to its source row by identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub row: RowId,
    pub label: String,
}

/// One resolved data point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Source row identity.
    pub row: RowId,
    /// Category index on the x axis.
    pub index: usize,
    /// Numeric value.
    pub value: f64,
}

/// One resolved series: label, color, shape, points.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub label: String,
    pub color: Color,
    pub kind: SeriesKind,
    pub points: Vec<ChartPoint>,
}

/// Resolved chart: the rendering instruction set `ui::chart` consumes.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub kind: ChartKind,
    pub categories: Vec<Category>,
    pub series: Vec<ChartSeries>,
    /// Externally supplied highlight; all other elements render dimmed.
    pub highlighted: Option<RowId>,
}

impl ChartModel {
    /// Resolve configuration against a dataset.
    ///
    /// `rows` selects and orders the charted rows (callers typically pass
    /// the filtered row ids). Non-numeric cells simply contribute no point.
    pub fn build(
        dataset: &Dataset,
        columns: &[ColumnDef],
        rows: &[RowId],
        x_column: &str,
        specs: &[SeriesSpec],
        kind: ChartKind,
        palette_name: Option<&str>,
    ) -> DeckResult<Self> {
        let x = column_by_id(columns, x_column)
            .ok_or_else(|| DeckError::UnknownColumn(x_column.to_string()))?;
        if specs.is_empty() {
            return Err(DeckError::EmptyChart("no series configured".into()));
        }

        let colors = palette::palette(palette_name.unwrap_or(palette::default_palette_for(kind)));

        let categories: Vec<Category> = rows
            .iter()
            .map(|id| Category {
                row: *id,
                label: x.display(dataset, *id),
            })
            .collect();

        let mut series = Vec::with_capacity(specs.len());
        for (series_index, spec) in specs.iter().enumerate() {
            let column = column_by_id(columns, &spec.column)
                .ok_or_else(|| DeckError::UnknownColumn(spec.column.clone()))?;
            let points = rows
                .iter()
                .enumerate()
                .filter_map(|(index, id)| {
                    column.value(dataset, *id).as_number().map(|value| ChartPoint {
                        row: *id,
                        index,
                        value,
                    })
                })
                .collect();
            series.push(ChartSeries {
                label: spec.label.clone(),
                color: spec
                    .color
                    .unwrap_or_else(|| palette::pick(colors, series_index)),
                kind: spec.kind,
                points,
            });
        }

        Ok(Self {
            kind,
            categories,
            series,
            highlighted: None,
        })
    }

    /// Builder-style setter for the highlighted row.
    pub fn with_highlight(mut self, row: Option<RowId>) -> Self {
        self.highlighted = row;
        self
    }

    /// Source row for a category index.
    pub fn row_at(&self, index: usize) -> Option<RowId> {
        self.categories.get(index).map(|c| c.row)
    }

    /// Category index of a source row.
    pub fn index_of(&self, row: RowId) -> Option<usize> {
        self.categories.iter().position(|c| c.row == row)
    }

    /// Value range across all series, padded so flat data still plots.
    pub fn y_bounds(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for series in &self.series {
            for point in &series.points {
                min = min.min(point.value);
                max = max.max(point.value);
            }
        }
        if min > max {
            return (0.0, 1.0);
        }
        let min = min.min(0.0);
        if (max - min).abs() < f64::EPSILON {
            (min, max + 1.0)
        } else {
            (min, max)
        }
    }

    /// Map a horizontal position inside `area` to the category there.
    ///
    /// Used by vertical bar and category-axis charts: the area is divided
    /// evenly among categories. Returns (row identity, category index).
    pub fn hit_test(&self, area: Rect, x: u16) -> Option<(RowId, usize)> {
        if self.categories.is_empty() || area.width == 0 {
            return None;
        }
        if x < area.x || x >= area.x + area.width {
            return None;
        }
        let slot = area.width as usize / self.categories.len();
        if slot == 0 {
            return None;
        }
        let index = ((x - area.x) as usize / slot).min(self.categories.len() - 1);
        self.row_at(index).map(|row| (row, index))
    }

    /// Vertical-position variant of `hit_test` for horizontal bar charts.
    pub fn hit_test_horizontal(&self, area: Rect, y: u16) -> Option<(RowId, usize)> {
        if self.categories.is_empty() || area.height == 0 {
            return None;
        }
        if y < area.y || y >= area.y + area.height {
            return None;
        }
        let slot = area.height as usize / self.categories.len();
        if slot == 0 {
            return None;
        }
        let index = ((y - area.y) as usize / slot).min(self.categories.len() - 1);
        self.row_at(index).map(|row| (row, index))
    }
}

// ============================================================================
// Tests
// ============================================================================
