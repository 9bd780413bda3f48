use crate::models::{DrinkRecord, DRINK_TYPES};
use serde::{Deserialize, Serialize};

/// Declarative stacked-bar configuration in the shape Chart.js expects.
/// The page hands this straight to `new Chart(canvas, config)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOptions {
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Axis {
    pub stacked: bool,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

/// Builds the stacked bar chart for the aggregate projection: one category
/// per distinct date (first-seen order), one series per drink type (declared
/// order), zero-filled where a pair has no record.
pub fn build_chart(aggregate: &[DrinkRecord]) -> ChartConfig {
    let mut dates: Vec<String> = Vec::new();
    for record in aggregate {
        if !dates.contains(&record.date) {
            dates.push(record.date.clone());
        }
    }

    let palette = color_palette(DRINK_TYPES.len());
    let datasets = DRINK_TYPES
        .iter()
        .zip(palette)
        .map(|(&drink_type, color)| Dataset {
            label: drink_type.to_string(),
            background_color: color,
            data: dates
                .iter()
                .map(|date| {
                    aggregate
                        .iter()
                        .find(|record| &record.date == date && record.drink_type == drink_type)
                        .map_or(0, |record| record.count)
                })
                .collect(),
        })
        .collect();

    ChartConfig {
        kind: "bar".to_string(),
        data: ChartData {
            labels: dates,
            datasets,
        },
        options: ChartOptions {
            scales: Scales {
                x: stacked_axis("日付"),
                y: stacked_axis("杯数"),
            },
        },
    }
}

fn stacked_axis(text: &str) -> Axis {
    Axis {
        stacked: true,
        title: AxisTitle {
            display: true,
            text: text.to_string(),
        },
    }
}

/// Evenly spaced hues around the circle, fixed saturation and lightness.
/// The i-th color is always `hsl(i * 360/count, 70%, 50%)`.
pub fn color_palette(count: usize) -> Vec<String> {
    let hue_step = 360.0 / count as f64;
    (0..count)
        .map(|i| format!("hsl({}, 70%, 50%)", hue_step * i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, drink_type: &str, count: u64) -> DrinkRecord {
        DrinkRecord {
            date: date.to_string(),
            drink_type: drink_type.to_string(),
            count,
        }
    }

    #[test]
    fn palette_is_deterministic_equal_hue_steps() {
        let palette = color_palette(6);
        assert_eq!(palette[0], "hsl(0, 70%, 50%)");
        assert_eq!(palette[1], "hsl(60, 70%, 50%)");
        assert_eq!(palette[5], "hsl(300, 70%, 50%)");
        assert_eq!(palette, color_palette(6));

        let quarters = color_palette(4);
        assert_eq!(quarters[3], "hsl(270, 70%, 50%)");
    }

    #[test]
    fn categories_keep_first_seen_date_order() {
        let aggregate = vec![
            record("2024-01-05", "ビール", 1),
            record("2024-01-02", "ワイン", 2),
            record("2024-01-05", "ワイン", 1),
        ];

        let config = build_chart(&aggregate);
        assert_eq!(config.data.labels, vec!["2024-01-05", "2024-01-02"]);
    }

    #[test]
    fn one_series_per_drink_type_in_declared_order_zero_filled() {
        let aggregate = vec![
            record("2024-01-01", "ビール", 2),
            record("2024-01-02", "日本酒", 1),
        ];

        let config = build_chart(&aggregate);
        assert_eq!(config.data.datasets.len(), DRINK_TYPES.len());
        for (dataset, &drink_type) in config.data.datasets.iter().zip(DRINK_TYPES.iter()) {
            assert_eq!(dataset.label, drink_type);
            assert_eq!(dataset.data.len(), 2);
        }

        let beer = &config.data.datasets[0];
        assert_eq!(beer.data, vec![2, 0]);
        let sake = &config.data.datasets[3];
        assert_eq!(sake.data, vec![0, 1]);
    }

    #[test]
    fn chart_is_a_stacked_bar_with_axis_titles() {
        let config = build_chart(&[record("2024-01-01", "ビール", 1)]);
        assert_eq!(config.kind, "bar");
        assert!(config.options.scales.x.stacked);
        assert!(config.options.scales.y.stacked);
        assert_eq!(config.options.scales.x.title.text, "日付");
        assert_eq!(config.options.scales.y.title.text, "杯数");
    }
}
