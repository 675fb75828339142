//! ASCII charts for member collections
//!
//! This module renders, with the [`tabled`] crate:
//! - the female/male split of a collection ([`gender_chart`])
//! - the distribution of ages in years ([`AgeHistogram`])

use crate::collection::GenderBalance;
use crate::models::member::Sex;
use tabled::{Table, Tabled};

/// Number of bins used by [`AgeHistogram::from_ages`].
pub const HISTOGRAM_BINS: usize = 20;

/// A single row of a chart: a label, its count and its share of the total
#[derive(Debug, Clone, Tabled)]
pub struct ChartRow {
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl ChartRow {
    pub fn new(label: String, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.0%".to_string()
        } else {
            format!("{:.1}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            label,
            count,
            percentage,
        }
    }
}

/// Formats rows as an ASCII table under `title`
pub fn format_chart(rows: &[ChartRow], title: &str) -> String {
    let underline = "=".repeat(title.chars().count());
    if rows.is_empty() {
        return format!("{}\n{}\nNo data available", title, underline);
    }

    format!("{}\n{}\n{}", title, underline, Table::new(rows))
}

/// Female/male chart of a collection called `name`
pub fn gender_chart(name: &str, balance: GenderBalance) -> String {
    let total = balance.total();
    let rows = vec![
        ChartRow::new(format!("{} ({})", Sex::Female, balance.female), balance.female, total),
        ChartRow::new(format!("{} ({})", Sex::Male, balance.male), balance.male, total),
    ];

    format_chart(&rows, &format!("{} ({} MPs)", name, total))
}

/// Equal-width histogram of ages
#[derive(Debug, Clone, PartialEq)]
pub struct AgeHistogram {
    /// `bins + 1` edges, ascending
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl AgeHistogram {
    /// Splits `[min, max]` of `ages` into `bins` equal-width bins.
    ///
    /// Every bin is half-open except the last one, which also holds the
    /// maximum. When every age is the same the range is widened by half a
    /// year on both sides.
    pub fn from_ages(ages: &[i64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (Some(&min), Some(&max)) = (ages.iter().min(), ages.iter().max()) else {
            return AgeHistogram {
                edges: Vec::new(),
                counts: Vec::new(),
            };
        };

        let (low, high) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (high - low) / bins as f64;

        let edges = (0..=bins).map(|i| low + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for &age in ages {
            let bin = ((age as f64 - low) / width).floor() as usize;
            counts[bin.min(bins - 1)] += 1;
        }

        AgeHistogram { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn rows(&self) -> Vec<ChartRow> {
        let total = self.total();
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let label = format!("{:.1}-{:.1}", self.edges[i], self.edges[i + 1]);
                ChartRow::new(label, count, total)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        format_chart(&self.rows(), &format!("Ages ({} MPs)", self.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_row_new() {
        let row = ChartRow::new("Female (1)".to_string(), 1, 4);
        assert_eq!(row.count, 1);
        assert_eq!(row.percentage, "25.0%");

        let empty = ChartRow::new("Male (0)".to_string(), 0, 0);
        assert_eq!(empty.percentage, "0.0%");
    }

    #[test]
    fn test_gender_chart() {
        let chart = gender_chart("All MPs", GenderBalance { female: 3, male: 1 });

        assert!(chart.starts_with("All MPs (4 MPs)\n"));
        assert!(chart.contains("Female (3)"));
        assert!(chart.contains("Male (1)"));
        assert!(chart.contains("75.0%"));
        assert!(chart.contains("25.0%"));
        assert!(chart.contains("Percentage"));
    }

    #[test]
    fn test_histogram_counts_every_age() {
        let ages = vec![30, 40, 40, 50, 70];
        let histogram = AgeHistogram::from_ages(&ages, HISTOGRAM_BINS);

        assert_eq!(histogram.counts.len(), HISTOGRAM_BINS);
        assert_eq!(histogram.edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(histogram.total(), ages.len());
        assert_eq!(histogram.edges[0], 30.0);
        assert_eq!(histogram.edges[HISTOGRAM_BINS], 70.0);
        // width 2: 30 -> bin 0, 40 -> bin 5, 50 -> bin 10, 70 -> last bin
        assert_eq!(histogram.counts[0], 1);
        assert_eq!(histogram.counts[5], 2);
        assert_eq!(histogram.counts[10], 1);
        assert_eq!(histogram.counts[HISTOGRAM_BINS - 1], 1);
    }

    #[test]
    fn test_histogram_single_value() {
        let histogram = AgeHistogram::from_ages(&[45, 45], 4);

        assert_eq!(histogram.edges, vec![44.5, 44.75, 45.0, 45.25, 45.5]);
        assert_eq!(histogram.counts, vec![0, 0, 2, 0]);
    }

    #[test]
    fn test_histogram_empty() {
        let histogram = AgeHistogram::from_ages(&[], HISTOGRAM_BINS);
        assert_eq!(histogram.total(), 0);
        assert!(histogram.render().contains("No data available"));
    }

    #[test]
    fn test_histogram_render() {
        let rendered = AgeHistogram::from_ages(&[30, 70], 2).render();
        assert!(rendered.starts_with("Ages (2 MPs)"));
        assert!(rendered.contains("30.0-50.0"));
        assert!(rendered.contains("50.0-70.0"));
        assert!(rendered.contains("50.0%"));
    }
}
