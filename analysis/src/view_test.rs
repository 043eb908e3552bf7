use crate::{panels, Layout, Marker, Metric, View, ViewError};
use benchview_ingest::{BenchmarkRow, CombinedTable};

fn table() -> CombinedTable {
    let mut table = CombinedTable::new();
    table.append(vec![
        BenchmarkRow::new(10.0, 1.0, 2.0, "ArrayList", "me"),
        BenchmarkRow::new(20.0, 3.0, 4.0, "ArrayList", "me"),
        BenchmarkRow::new(10.0, 0.5, 0.25, "TreeSet", "me"),
        BenchmarkRow::new(10.0, 1.5, 2.5, "ArrayList", "hhc"),
    ]);
    table
}

#[test]
pub fn parse_view() {
    assert_eq!("by-class".parse::<View>(), Ok(View::ByClass));
    assert_eq!("By-Author".parse::<View>(), Ok(View::ByAuthor));
    assert_eq!(
        "sideways".parse::<View>(),
        Err(ViewError::Unknown("sideways".to_owned()))
    );
    assert_eq!(View::default(), View::ByClass);
    assert_eq!(View::ByAuthor.to_string(), "by-author");
}

#[test]
pub fn by_class_has_one_panel_per_metric() {
    let panels = panels(&table(), View::ByClass);

    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].title, "addAll");
    assert_eq!(panels[1].title, "allMatches");

    let labels = panels[0]
        .series
        .iter()
        .map(|series| series.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["ArrayList", "TreeSet"]);

    // rows of both authors land in the class series
    assert_eq!(
        panels[0].series[0].points,
        vec![(10.0, 1.0), (20.0, 3.0), (10.0, 1.5)]
    );
    assert_eq!(
        panels[1].series[0].points,
        vec![(10.0, 2.0), (20.0, 4.0), (10.0, 2.5)]
    );
    assert!(panels[1]
        .series
        .iter()
        .all(|series| series.metric == Metric::AllMatches));
}

#[test]
pub fn by_author_has_one_panel_per_class() {
    let panels = panels(&table(), View::ByAuthor);

    assert_eq!(panels.len(), 2);
    assert_eq!(panels[0].title, "ArrayList");
    assert_eq!(panels[1].title, "TreeSet");

    let labels = panels[0]
        .series
        .iter()
        .map(|series| series.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "me (addAll)",
            "me (allMatches)",
            "hhc (addAll)",
            "hhc (allMatches)"
        ]
    );
    assert_eq!(panels[0].series[1].marker, Marker::Triangle);
    assert_eq!(panels[0].series[2].points, vec![(10.0, 1.5)]);

    // hhc never measured TreeSet
    assert_eq!(panels[1].series.len(), 2);
}

#[test]
pub fn panel_bounds_skip_non_finite_points() {
    let mut table = table();
    table.append(vec![BenchmarkRow::new(
        80.0,
        f64::NAN,
        1.0,
        "ArrayList",
        "me",
    )]);

    let panels = panels(&table, View::ByClass);

    assert_eq!(panels[0].bounds(), Some(((10.0, 20.0), (0.5, 3.0))));
    assert_eq!(panels[1].bounds(), Some(((10.0, 80.0), (0.25, 4.0))));
}

#[test]
pub fn empty_table_builds_empty_panels() {
    let panels = panels(&CombinedTable::new(), View::ByClass);

    assert_eq!(panels.len(), 2);
    assert!(panels.iter().all(|panel| panel.bounds().is_none()));
    assert!(crate::panels(&CombinedTable::new(), View::ByAuthor).is_empty());
}

#[test]
pub fn by_author_grid_grows_with_classes() {
    assert_eq!(Layout::for_view(View::ByClass, 2).columns, 2);
    assert_eq!(Layout::for_view(View::ByAuthor, 4).rows, 2);
    assert_eq!(Layout::for_view(View::ByAuthor, 5).rows, 3);
    assert_eq!(Layout::for_view(View::ByAuthor, 0).rows, 1);
    assert_eq!(Layout::for_view(View::ByAuthor, 5).height, 1050);
}
