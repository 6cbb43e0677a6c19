//! Wear Chart Layout
//!
//! Computes SVG geometry for the "Wear Statistics" bar chart: one bar per
//! item, height proportional to its wear count, with integer Y-axis ticks.

use crate::models::ClothingItem;

/// Space reserved for axis labels, in SVG units
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 10.0;
/// Fraction of each slot taken by the bar
const BAR_FILL: f64 = 0.7;
/// Aim for at most this many tick intervals
const MAX_TICK_INTERVALS: usize = 4;

/// One bar
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartBar {
    /// Center of the bar, where the X-axis label goes
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Laid-out chart
#[derive(Debug, Clone, PartialEq)]
pub struct WearChart {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<ChartBar>,
    /// (tick value, y coordinate)
    pub ticks: Vec<(usize, f64)>,
    /// Y coordinate of the X axis
    pub baseline: f64,
    /// X coordinate of the Y axis
    pub axis_x: f64,
}

/// Lay out one bar per item in list order
pub fn layout_wear_chart(items: &[ClothingItem], width: f64, height: f64) -> WearChart {
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0);
    let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);
    let baseline = MARGIN_TOP + plot_height;

    let max_value = items.iter().map(ClothingItem::wear_count).max().unwrap_or(0);
    let step = tick_step(max_value);
    let top = (max_value.div_ceil(step) * step).max(step);
    let scale = plot_height / top as f64;

    let ticks = (0..=top)
        .step_by(step)
        .map(|v| (v, baseline - v as f64 * scale))
        .collect();

    let slot = if items.is_empty() { 0.0 } else { plot_width / items.len() as f64 };
    let bar_width = slot * BAR_FILL;
    let bars = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let value = item.wear_count();
            let bar_height = value as f64 * scale;
            ChartBar {
                label: item.name.clone(),
                value,
                x: MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0,
                y: baseline - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect();

    WearChart {
        width,
        height,
        bars,
        ticks,
        baseline,
        axis_x: MARGIN_LEFT,
    }
}

/// Integer tick spacing so that the axis has at most `MAX_TICK_INTERVALS` steps
fn tick_step(max_value: usize) -> usize {
    max_value.div_ceil(MAX_TICK_INTERVALS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, wears: usize) -> ClothingItem {
        ClothingItem {
            name: name.to_string(),
            cost: 10.0,
            uses: vec!["2024-01-01".to_string(); wears],
        }
    }

    #[test]
    fn test_one_bar_per_item_in_order() {
        let chart = layout_wear_chart(&[item("Jacket", 3), item("Hat", 0), item("Boots", 6)], 400.0, 300.0);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Jacket", "Hat", "Boots"]);
        let values: Vec<_> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![3, 0, 6]);
        assert!(chart.bars[0].x < chart.bars[1].x && chart.bars[1].x < chart.bars[2].x);
    }

    #[test]
    fn test_bar_height_proportional_to_wears() {
        let chart = layout_wear_chart(&[item("A", 2), item("B", 4)], 400.0, 300.0);
        let (a, b) = (&chart.bars[0], &chart.bars[1]);
        assert!((b.height - 2.0 * a.height).abs() < 1e-9);
        assert!((a.y + a.height - chart.baseline).abs() < 1e-9);
        assert_eq!(b.y, MARGIN_TOP);
    }

    #[test]
    fn test_unworn_items_have_flat_bars() {
        let chart = layout_wear_chart(&[item("A", 0)], 400.0, 300.0);
        assert_eq!(chart.bars[0].height, 0.0);
        assert_eq!(chart.ticks.first().map(|t| t.0), Some(0));
        assert_eq!(chart.ticks.last().map(|t| t.0), Some(1));
    }

    #[test]
    fn test_empty_chart_has_axis_only() {
        let chart = layout_wear_chart(&[], 400.0, 300.0);
        assert!(chart.bars.is_empty());
        assert_eq!(chart.baseline, 300.0 - MARGIN_BOTTOM);
    }

    #[test]
    fn test_ticks_are_integer_and_bounded() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(4), 1);
        assert_eq!(tick_step(9), 3);
        let chart = layout_wear_chart(&[item("A", 9)], 400.0, 300.0);
        let values: Vec<_> = chart.ticks.iter().map(|t| t.0).collect();
        assert_eq!(values, vec![0, 3, 6, 9]);
    }
}
