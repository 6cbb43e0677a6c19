//! Wear Chart Component
//!
//! SVG bar chart of wear counts, one bar per item.

use leptos::prelude::*;
use wrack_core::{layout_wear_chart, WrackStateStoreFields};

use crate::context::WrackContext;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 300.0;
const BAR_COLOR: &str = "#8884d8";
const AXIS_COLOR: &str = "#666";

/// SVG coordinate as attribute text
fn coord(v: f64) -> String {
    format!("{:.1}", v)
}

/// Wear statistics view
#[component]
pub fn WearChart() -> impl IntoView {
    let ctx = use_context::<WrackContext>().expect("WrackContext should be provided");
    let store = ctx.store;

    let chart = move || layout_wear_chart(&store.clothing_items().get(), CHART_WIDTH, CHART_HEIGHT);

    view! {
        <div class="wear-stats">
            <h2>"Wear Statistics"</h2>
            <svg
                class="wear-chart"
                width="100%"
                height={coord(CHART_HEIGHT)}
                viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
            >
                {move || {
                    let chart = chart();
                    let axis_x = chart.axis_x;
                    let baseline = chart.baseline;

                    let ticks = chart.ticks.into_iter().map(|(value, y)| view! {
                        <g class="tick">
                            <line
                                x1={coord(axis_x - 4.0)} x2={coord(axis_x)}
                                y1={coord(y)} y2={coord(y)}
                                stroke=AXIS_COLOR
                            />
                            <text x={coord(axis_x - 8.0)} y={coord(y + 4.0)} text-anchor="end">
                                {value.to_string()}
                            </text>
                        </g>
                    }).collect_view();

                    let bars = chart.bars.into_iter().map(|bar| view! {
                        <g class="bar">
                            <rect
                                x={coord(bar.x)} y={coord(bar.y)}
                                width={coord(bar.width)} height={coord(bar.height)}
                                fill=BAR_COLOR
                            />
                            // Value label in place of a hover tooltip
                            <text x={coord(bar.center_x())} y={coord(bar.y - 4.0)} text-anchor="middle">
                                {format!("Wears: {}", bar.value)}
                            </text>
                            <text x={coord(bar.center_x())} y={coord(baseline + 18.0)} text-anchor="middle">
                                {bar.label.clone()}
                            </text>
                        </g>
                    }).collect_view();

                    view! {
                        <line
                            x1={coord(axis_x)} x2={coord(axis_x)}
                            y1="0" y2={coord(baseline)}
                            stroke=AXIS_COLOR
                        />
                        <line
                            x1={coord(axis_x)} x2={coord(chart.width)}
                            y1={coord(baseline)} y2={coord(baseline)}
                            stroke=AXIS_COLOR
                        />
                        {ticks}
                        {bars}
                    }
                }}
            </svg>
        </div>
    }
}
