use benchview_ingest::{BenchmarkRow, CombinedTable};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tracing::debug;

/// Which comparison to chart
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// one panel per operation, one series per class
    #[default]
    ByClass,
    /// one panel per class, one series per author and operation
    ByAuthor,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Unknown view '{0}', expected 'by-class' or 'by-author'")]
    Unknown(String),
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "by-class" | "class" => Ok(Self::ByClass),
            "by-author" | "author" => Ok(Self::ByAuthor),
            _ => Err(ViewError::Unknown(value.to_owned())),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByClass => write!(f, "by-class"),
            Self::ByAuthor => write!(f, "by-author"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    AddAll,
    AllMatches,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::AddAll, Metric::AllMatches];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddAll => "addAll",
            Self::AllMatches => "allMatches",
        }
    }

    pub fn value(&self, row: &BenchmarkRow) -> f64 {
        match self {
            Self::AddAll => row.add_all,
            Self::AllMatches => row.all_matches,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Triangle,
}

/// Points of one hue in a panel, x is always `n`
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub metric: Metric,
    pub marker: Marker,
    pub points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub title: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Panel {
    /// bounds over all finite points as ((x_min, x_max), (y_min, y_max))
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        self.series
            .iter()
            .flat_map(|series| series.points.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |bounds, &(x, y)| match bounds {
                None => Some(((x, x), (y, y))),
                Some(((x_min, x_max), (y_min, y_max))) => Some((
                    (x_min.min(x), x_max.max(x)),
                    (y_min.min(y), y_max.max(y)),
                )),
            })
    }
}

/// Grid the panels are drawn in and the size of the whole chart in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub columns: usize,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    pub fn for_view(view: View, panels: usize) -> Self {
        match view {
            View::ByClass => Self {
                rows: 1,
                columns: 2,
                width: 1800,
                height: 500,
            },
            View::ByAuthor => {
                let rows = panels.div_ceil(2).max(1);

                Self {
                    rows,
                    columns: 2,
                    width: 1600,
                    height: 350 * rows as u32,
                }
            }
        }
    }
}

/// Build the panels of `view` from `table`
pub fn panels(table: &CombinedTable, view: View) -> Vec<Panel> {
    let panels = match view {
        View::ByClass => by_class(table),
        View::ByAuthor => by_author(table),
    };

    debug!(view = %view, panels = panels.len(), "Built panels");

    panels
}

fn points<'a, I>(rows: I, metric: Metric) -> Vec<(f64, f64)>
where
    I: Iterator<Item = &'a BenchmarkRow>,
{
    rows.map(|row| (row.n, metric.value(row))).collect()
}

fn by_class(table: &CombinedTable) -> Vec<Panel> {
    let classes = table.classes();

    Metric::ALL
        .iter()
        .map(|&metric| Panel {
            title: metric.name().to_owned(),
            y_label: metric.name().to_owned(),
            series: classes
                .iter()
                .map(|class| Series {
                    label: (*class).to_owned(),
                    metric,
                    marker: Marker::Circle,
                    points: points(table.filter_class(class), metric),
                })
                .collect(),
        })
        .collect()
}

fn by_author(table: &CombinedTable) -> Vec<Panel> {
    let authors = table.authors();

    table
        .classes()
        .into_iter()
        .map(|class| {
            let mut series = Vec::new();

            for author in authors.iter() {
                for metric in Metric::ALL {
                    let rows = table.filter_class(class).filter(|row| row.author == *author);
                    let scatter = points(rows, metric);

                    // not every author measured every class
                    if scatter.is_empty() {
                        continue;
                    }

                    series.push(Series {
                        label: format!("{author} ({})", metric.name()),
                        metric,
                        marker: match metric {
                            Metric::AddAll => Marker::Circle,
                            Metric::AllMatches => Marker::Triangle,
                        },
                        points: scatter,
                    });
                }
            }

            Panel {
                title: class.to_owned(),
                y_label: "addAll / allMatches".to_owned(),
                series,
            }
        })
        .collect()
}
