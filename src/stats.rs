use crate::models::StatsResponse;
use crate::store::CounterStore;

pub fn build_stats(store: &CounterStore) -> StatsResponse {
    StatsResponse {
        total: store.total(),
        most_recited: store.most_recited().cloned(),
        phrases: store.len(),
        active_phrases: store.entries().iter().filter(|entry| entry.count > 0).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn stats_sum_every_phrase() {
        let mut store = CounterStore::from_catalog(&Catalog::new(["A", "B", "C"]));
        store.increment("B").unwrap();
        store.increment("B").unwrap();
        store.increment("C").unwrap();

        let stats = build_stats(&store);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.phrases, 3);
        assert_eq!(stats.active_phrases, 2);
        let top = stats.most_recited.expect("missing top phrase");
        assert_eq!(top.phrase, "B");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn stats_on_fresh_store_point_at_first_phrase() {
        let store = CounterStore::from_catalog(&Catalog::new(["A", "B"]));
        let stats = build_stats(&store);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.active_phrases, 0);
        assert_eq!(stats.most_recited.map(|entry| entry.phrase), Some("A".to_string()));
    }
}
