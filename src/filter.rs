use crate::store::CounterEntry;
use serde::{Deserialize, Serialize};

pub const MOST_USED_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "term", rename_all = "snake_case")]
pub enum Category {
    #[default]
    All,
    MostUsed,
    Matching(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Category,
}

/// Derives the visible rows. A category other than `All` replaces the list
/// outright and the free-text search is not applied on top of it.
pub fn filter<'a>(entries: &'a [CounterEntry], criteria: &FilterCriteria) -> Vec<&'a CounterEntry> {
    match &criteria.category {
        Category::All => matching(entries, &criteria.search),
        Category::MostUsed => most_used(entries),
        Category::Matching(term) => matching(entries, term),
    }
}

fn matching<'a>(entries: &'a [CounterEntry], term: &str) -> Vec<&'a CounterEntry> {
    // a blank term shows everything; any other term is matched as typed
    if term.trim().is_empty() {
        return entries.iter().collect();
    }
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.phrase.to_lowercase().contains(&needle))
        .collect()
}

fn most_used(entries: &[CounterEntry]) -> Vec<&CounterEntry> {
    let mut ranked: Vec<&CounterEntry> = entries.iter().collect();
    // sort_by is stable, so equal counts keep insertion order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(MOST_USED_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(rows: &[(&str, u64)]) -> Vec<CounterEntry> {
        rows.iter()
            .map(|(phrase, count)| CounterEntry {
                phrase: phrase.to_string(),
                count: *count,
            })
            .collect()
    }

    fn phrases(rows: Vec<&CounterEntry>) -> Vec<&str> {
        rows.into_iter().map(|entry| entry.phrase.as_str()).collect()
    }

    #[test]
    fn all_keeps_original_order() {
        let rows = entries(&[("C", 1), ("A", 5), ("B", 0)]);
        let visible = filter(&rows, &FilterCriteria::default());
        assert_eq!(phrases(visible), vec!["C", "A", "B"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = entries(&[
            ("SubhanAllah", 0),
            ("Alhamdulillah", 0),
            ("SubhanAllahil azeem", 0),
        ]);
        let criteria = FilterCriteria {
            search: "subhan".to_string(),
            category: Category::All,
        };
        assert_eq!(
            phrases(filter(&rows, &criteria)),
            vec!["SubhanAllah", "SubhanAllahil azeem"]
        );
    }

    #[test]
    fn most_used_is_stable_on_ties() {
        let rows = entries(&[("A", 3), ("B", 9), ("C", 9), ("D", 1)]);
        let criteria = FilterCriteria {
            search: String::new(),
            category: Category::MostUsed,
        };
        assert_eq!(phrases(filter(&rows, &criteria)), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn most_used_caps_at_limit_and_ignores_search() {
        let mut rows = entries(&[("D", 1)]);
        for n in 0..MOST_USED_LIMIT {
            rows.push(CounterEntry {
                phrase: format!("P{n}"),
                count: 5 + n as u64,
            });
        }
        let criteria = FilterCriteria {
            search: "nothing matches this".to_string(),
            category: Category::MostUsed,
        };
        let visible = phrases(filter(&rows, &criteria));
        assert_eq!(visible.len(), MOST_USED_LIMIT);
        assert_eq!(visible[0], "P9");
        assert!(!visible.contains(&"D"));
    }

    #[test]
    fn matching_category_uses_its_own_term() {
        let rows = entries(&[("Rabbi zidni ilma", 0), ("Bismillah", 2), ("Rabbighfir li", 1)]);
        let criteria = FilterCriteria {
            search: "bismillah".to_string(),
            category: Category::Matching("RABBI".to_string()),
        };
        assert_eq!(
            phrases(filter(&rows, &criteria)),
            vec!["Rabbi zidni ilma", "Rabbighfir li"]
        );
    }

    #[test]
    fn search_keeps_surrounding_spaces() {
        let rows = entries(&[("Allahu Akbar", 1), ("Akbar alone", 2)]);
        let criteria = FilterCriteria {
            search: " akbar".to_string(),
            category: Category::All,
        };
        assert_eq!(phrases(filter(&rows, &criteria)), vec!["Allahu Akbar"]);

        let blank = FilterCriteria {
            search: "   ".to_string(),
            category: Category::All,
        };
        assert_eq!(filter(&rows, &blank).len(), 2);
    }
}
