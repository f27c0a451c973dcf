// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demos for `stria_svg`.
mod html;

use peniko::color::palette::css;
use stria_charts::{BarChartSpec, Datum};
use stria_svg::BarChartView;

fn main() {
    let sections = vec![
        basic_demo(),
        emphasis_demo(),
        update_demo(),
        rotated_labels_demo(),
        empty_demo(),
    ];

    let html = html::render_report("Stria bar chart demo", &sections);
    std::fs::write("stria_demo.html", html).expect("write stria_demo.html");
    println!("wrote stria_demo.html");
}

fn fruit() -> Vec<Datum> {
    vec![
        Datum::new("apples", 12.0),
        Datum::new("pears", 31.5),
        Datum::primary("plums", 24.0),
        Datum::new("cherries", 7.0),
    ]
}

fn basic_demo() -> html::HtmlSection {
    let mut view = BarChartView::new(
        BarChartSpec::new()
            .with_title("Fruit sales")
            .with_axis_titles("fruit", "crates sold"),
    );
    let svg = view.render(&fruit()).to_string();
    html::HtmlSection {
        title: "Basic bar chart".to_string(),
        note: Some("Band x-axis, linear y-axis with gridlines, per-bar value labels.".to_string()),
        svg,
    }
}

fn emphasis_demo() -> html::HtmlSection {
    let mut view = BarChartView::new(
        BarChartSpec::new()
            .with_title("Custom palette")
            .with_fill(css::MEDIUM_SEA_GREEN)
            .with_emphasis_fill(css::CRIMSON)
            .with_plot_background(css::WHITE_SMOKE),
    );
    let svg = view.render(&fruit()).to_string();
    html::HtmlSection {
        title: "Emphasis fill".to_string(),
        note: Some("The primary datum renders with a distinct fill.".to_string()),
        svg,
    }
}

fn update_demo() -> html::HtmlSection {
    // Render twice with a changed dataset; the second frame is produced by
    // diffing, so one bar updates, one exits, and one enters.
    let mut view = BarChartView::new(BarChartSpec::new().with_title("After an update"));
    view.render(&fruit());

    let svg = view
        .render(&[
            Datum::new("apples", 20.0),
            Datum::primary("plums", 24.0),
            Datum::new("quinces", 5.0),
        ])
        .to_string();
    html::HtmlSection {
        title: "Diffed redraw".to_string(),
        note: Some(
            "Second frame of a changed dataset: pears and cherries exited, quinces entered."
                .to_string(),
        ),
        svg,
    }
}

fn rotated_labels_demo() -> html::HtmlSection {
    let data: Vec<Datum> = [
        ("January", 14.0),
        ("February", 11.0),
        ("March", 17.5),
        ("April", 21.0),
        ("May", 18.0),
        ("June", 25.5),
    ]
    .into_iter()
    .map(|(name, value)| Datum::new(name, value))
    .collect();

    let mut view = BarChartView::new(
        BarChartSpec::new()
            .with_title("Rotated category labels")
            .with_category_label_angle(-45.0)
            .with_plot_size(320.0, 180.0),
    );
    let svg = view.render(&data).to_string();
    html::HtmlSection {
        title: "Rotated labels".to_string(),
        note: Some("Long category names rotated to avoid overlap.".to_string()),
        svg,
    }
}

fn empty_demo() -> html::HtmlSection {
    let mut view = BarChartView::new(BarChartSpec::new().with_title("No data"));
    let svg = view.render(&[]).to_string();
    html::HtmlSection {
        title: "Empty dataset".to_string(),
        note: Some("An empty dataset degrades to a chart frame with no bars.".to_string()),
        svg,
    }
}
