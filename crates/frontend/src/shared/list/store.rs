//! Collection holder with substring filtering

use contracts::domain::common::Resource;

/// Types that expose one designated field for list filtering.
pub trait Searchable {
    fn search_text(&self) -> &str;

    /// Case-insensitive substring containment; the empty filter matches all.
    fn matches_filter(&self, filter: &str) -> bool {
        filter.is_empty()
            || self
                .search_text()
                .to_lowercase()
                .contains(&filter.to_lowercase())
    }
}

// Every REST record already designates its filter field.
impl<T: Resource> Searchable for T {
    fn search_text(&self) -> &str {
        Resource::search_text(self)
    }
}

/// The full fetched record set plus the active search term.
///
/// The collection is only ever swapped wholesale: a successful load replaces
/// it atomically, a failed load leaves the previous records untouched, and
/// mutations never patch it in place.
#[derive(Clone, Debug)]
pub struct CollectionStore<T> {
    records: Vec<T>,
    search_term: String,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
        }
    }
}

impl<T: Searchable + Clone> CollectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held collection with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Update the active filter. Never refetches.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose designated field contains the search term,
    /// case-insensitively, in original server order. The term is matched
    /// literally, whitespace included.
    pub fn filtered_view(&self) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| r.matches_filter(&self.search_term))
            .cloned()
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.matches_filter(&self.search_term))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn search_text(&self) -> &str {
            self.0
        }
    }

    fn store(names: &[&'static str]) -> CollectionStore<Row> {
        let mut s = CollectionStore::new();
        s.replace(names.iter().map(|n| Row(n)).collect());
        s
    }

    #[test]
    fn empty_term_matches_all_in_order() {
        let s = store(&["Flour", "Butter", "Yeast"]);
        let view = s.filtered_view();
        assert_eq!(view, vec![Row("Flour"), Row("Butter"), Row("Yeast")]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut s = store(&["Wheat flour", "Corn Flour", "Butter", "flourish"]);
        s.set_search_term("FLOUR");
        let view = s.filtered_view();
        assert_eq!(
            view,
            vec![Row("Wheat flour"), Row("Corn Flour"), Row("flourish")]
        );
        assert_eq!(s.filtered_len(), 3);
    }

    #[test]
    fn filter_preserves_server_order() {
        let mut s = store(&["b2", "a1", "b1", "a2"]);
        s.set_search_term("b");
        assert_eq!(s.filtered_view(), vec![Row("b2"), Row("b1")]);
    }

    #[test]
    fn whitespace_in_term_is_matched_literally() {
        let mut s = store(&["Wheat flour", "flourish"]);
        s.set_search_term(" flour");
        assert_eq!(s.filtered_view(), vec![Row("Wheat flour")]);
        assert_eq!(s.filtered_len(), 1);
    }

    #[test]
    fn set_search_term_does_not_touch_records() {
        let mut s = store(&["Flour", "Butter"]);
        s.set_search_term("nothing matches this");
        assert_eq!(s.len(), 2);
        assert!(s.filtered_view().is_empty());
    }

    #[test]
    fn reload_of_identical_data_yields_identical_view() {
        let mut s = store(&["Flour", "Butter", "Yeast"]);
        s.set_search_term("u");
        let first = s.filtered_view();
        s.replace(vec![Row("Flour"), Row("Butter"), Row("Yeast")]);
        assert_eq!(s.filtered_view(), first);
    }
}
