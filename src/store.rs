use crate::chart::ChartConfig;
use crate::models::DrinkRecord;
use crate::storage;
use tracing::warn;

/// In-memory aggregate of drink counts plus the single chart-configuration
/// slot. Records keep first-seen order; nothing here sorts by date.
#[derive(Debug, Default)]
pub struct TallyStore {
    records: Vec<DrinkRecord>,
    chart: Option<ChartConfig>,
}

impl TallyStore {
    /// Adds 1 to the record for (date, type), for each selected type.
    /// An empty selection changes nothing.
    pub fn increment(&mut self, date: &str, types: &[String]) {
        for drink_type in types {
            self.merge(date, drink_type, 1);
        }
    }

    /// Additive merge: bumps the existing record for the pair, or appends a
    /// new one.
    pub fn merge(&mut self, date: &str, drink_type: &str, count: u64) {
        match self
            .records
            .iter_mut()
            .find(|record| record.date == date && record.drink_type == drink_type)
        {
            Some(record) => record.count = record.count.saturating_add(count),
            None => self.records.push(DrinkRecord {
                date: date.to_string(),
                drink_type: drink_type.to_string(),
                count,
            }),
        }
    }

    /// Projection consumed by the table and the chart builder: exactly one
    /// record per distinct (date, type) pair, counts summed, in first-seen
    /// order.
    pub fn aggregate_by_date(&self) -> Vec<DrinkRecord> {
        let mut aggregate: Vec<DrinkRecord> = Vec::new();
        for record in &self.records {
            match aggregate
                .iter_mut()
                .find(|item| item.date == record.date && item.drink_type == record.drink_type)
            {
                Some(item) => item.count = item.count.saturating_add(record.count),
                None => aggregate.push(record.clone()),
            }
        }
        aggregate
    }

    /// Merges persisted entries into the store. Entries that do not match
    /// the `drink_<date>_<type>` key shape or carry a non-numeric count are
    /// skipped with a warning; the rest of the pass continues.
    pub fn restore(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        for (key, raw_count) in entries {
            match storage::parse_entry(&key, &raw_count) {
                Ok((date, drink_type, count)) => self.merge(&date, &drink_type, count),
                Err(err) => warn!("skipping stored entry {key:?}: {err}"),
            }
        }
    }

    /// Replaces the current chart configuration. The previous one is dropped
    /// first, so at most one exists at a time.
    pub fn set_chart(&mut self, config: ChartConfig) {
        self.chart = Some(config);
    }

    pub fn clear_chart(&mut self) {
        self.chart = None;
    }

    pub fn chart(&self) -> Option<&ChartConfig> {
        self.chart.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;

    fn types(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn increment_accumulates_per_pair() {
        let mut store = TallyStore::default();
        for _ in 0..3 {
            store.increment("2024-01-01", &types(&["ビール"]));
        }

        let aggregate = store.aggregate_by_date();
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].date, "2024-01-01");
        assert_eq!(aggregate[0].drink_type, "ビール");
        assert_eq!(aggregate[0].count, 3);
    }

    #[test]
    fn increment_with_empty_selection_is_a_no_op() {
        let mut store = TallyStore::default();
        store.increment("2024-01-01", &[]);
        assert!(store.aggregate_by_date().is_empty());
    }

    #[test]
    fn aggregate_keeps_one_record_per_pair_in_first_seen_order() {
        let mut store = TallyStore::default();
        store.increment("2024-01-01", &types(&["ビール", "日本酒"]));
        store.increment("2024-01-01", &types(&["ビール", "日本酒"]));
        store.increment("2024-01-02", &types(&["ビール"]));

        let aggregate = store.aggregate_by_date();
        assert_eq!(aggregate.len(), 3);
        assert_eq!(
            (aggregate[0].date.as_str(), aggregate[0].drink_type.as_str(), aggregate[0].count),
            ("2024-01-01", "ビール", 2)
        );
        assert_eq!(
            (aggregate[1].date.as_str(), aggregate[1].drink_type.as_str(), aggregate[1].count),
            ("2024-01-01", "日本酒", 2)
        );
        assert_eq!(
            (aggregate[2].date.as_str(), aggregate[2].drink_type.as_str(), aggregate[2].count),
            ("2024-01-02", "ビール", 1)
        );
    }

    #[test]
    fn restore_merges_additively_with_in_memory_counts() {
        let mut store = TallyStore::default();
        store.increment("2024-01-01", &types(&["ビール"]));

        store.restore([
            ("drink_2024-01-01_ビール".to_string(), "4".to_string()),
            ("drink_2024-01-03_ワイン".to_string(), "2".to_string()),
        ]);

        let aggregate = store.aggregate_by_date();
        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate[0].count, 5);
        assert_eq!(aggregate[1].drink_type, "ワイン");
        assert_eq!(aggregate[1].count, 2);
    }

    #[test]
    fn restore_skips_bad_entries_and_keeps_going() {
        let mut store = TallyStore::default();
        store.restore([
            ("drink_2024-01-01".to_string(), "3".to_string()),
            ("drink_2024-01-01_ビール".to_string(), "many".to_string()),
            ("drink_2024-01-02_焼酎".to_string(), "2".to_string()),
        ]);

        let aggregate = store.aggregate_by_date();
        assert_eq!(aggregate.len(), 1);
        assert_eq!(aggregate[0].date, "2024-01-02");
        assert_eq!(aggregate[0].drink_type, "焼酎");
        assert_eq!(aggregate[0].count, 2);
    }

    #[test]
    fn chart_slot_holds_at_most_one_configuration() {
        let mut store = TallyStore::default();
        assert!(store.chart().is_none());

        store.increment("2024-01-01", &types(&["ビール"]));
        store.set_chart(build_chart(&store.aggregate_by_date()));
        assert!(store.chart().is_some());

        store.increment("2024-01-02", &types(&["ワイン"]));
        store.set_chart(build_chart(&store.aggregate_by_date()));
        let labels = &store.chart().unwrap().data.labels;
        assert_eq!(labels, &["2024-01-01".to_string(), "2024-01-02".to_string()]);

        store.clear_chart();
        assert!(store.chart().is_none());
        // reset leaves the tallies alone
        assert_eq!(store.aggregate_by_date().len(), 2);
    }
}
