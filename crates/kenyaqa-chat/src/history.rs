use std::collections::VecDeque;

use kenyaqa_types::{HistoryRecord, HISTORY_CAPACITY};

/// One page of history plus the total record count at read time
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage {
    pub items: Vec<HistoryRecord>,
    pub total: usize,
}

/// Bounded, most-recent-first log of answered questions.
///
/// Appending at capacity evicts the oldest record. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    records: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Empty store holding at most 100 records
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Empty store with a custom bound (at least one record)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a successful exchange and return its id
    pub fn append(
        &mut self,
        question: &str,
        answer: &str,
        model_id: &str,
        latency_ms: Option<u64>,
    ) -> String {
        self.push(HistoryRecord::new(question, answer, model_id, latency_ms))
    }

    /// Insert a prebuilt record at the head, evicting from the tail
    pub fn push(&mut self, record: HistoryRecord) -> String {
        let id = record.id.clone();
        self.records.push_front(record);
        while self.records.len() > self.capacity {
            self.records.pop_back();
        }
        id
    }

    /// Records `[(page-1)*per_page, page*per_page)`, empty past the end.
    ///
    /// Expects clamped input; page 0 is read as page 1 rather than panicking.
    pub fn page(&self, page: usize, per_page: usize) -> HistoryPage {
        let start = page.saturating_sub(1).saturating_mul(per_page);
        let items = self
            .records
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect();

        HistoryPage {
            items,
            total: self.records.len(),
        }
    }

    /// Remove every record, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill(store: &mut HistoryStore, n: usize) {
        for i in 1..=n {
            store.append(&format!("question {}", i), &format!("answer {}", i), "model-x", Some(i as u64));
        }
    }

    #[test]
    fn test_append_keeps_most_recent_first() {
        for n in [0, 1, 2, 57, 100] {
            let mut store = HistoryStore::new();
            fill(&mut store, n);

            assert_eq!(store.len(), n);
            if n > 0 {
                assert_eq!(store.iter().next().unwrap().question, format!("question {}", n));
            }
        }
    }

    #[test]
    fn test_eviction_keeps_latest_hundred() {
        let mut store = HistoryStore::new();
        fill(&mut store, 250);

        assert_eq!(store.len(), 100);
        let questions: Vec<String> = store.iter().map(|r| r.question.clone()).collect();
        let expected: Vec<String> = (151..=250).rev().map(|i| format!("question {}", i)).collect();
        assert_eq!(questions, expected);
    }

    #[test]
    fn test_one_hundred_and_one_appends() {
        let mut store = HistoryStore::new();
        fill(&mut store, 101);

        let page = store.page(1, 100);
        assert_eq!(page.total, 100);
        assert_eq!(page.items[0].question, "question 101");
        assert_eq!(page.items[99].question, "question 2");
        assert!(store.iter().all(|r| r.question != "question 1"));
    }

    #[test]
    fn test_append_then_page_round_trip() {
        let mut store = HistoryStore::new();
        let id = store.append("Who is governor of Meru?", "Kawira Mwangaza", "model-x", Some(1200));

        let page = store.page(1, 10);
        assert_eq!(page.total, 1);
        assert_eq!(page.items.len(), 1);

        let record = &page.items[0];
        assert_eq!(record.id, id);
        assert_eq!(record.question, "Who is governor of Meru?");
        assert_eq!(record.answer, "Kawira Mwangaza");
        assert_eq!(record.ai_model_used, "model-x");
        assert_eq!(record.response_time_ms, Some(1200));
    }

    #[test]
    fn test_page_slices() {
        let mut store = HistoryStore::new();
        fill(&mut store, 25);

        let second = store.page(2, 10);
        assert_eq!(second.total, 25);
        assert_eq!(second.items.len(), 10);
        assert_eq!(second.items[0].question, "question 15");

        let last = store.page(3, 10);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[4].question, "question 1");
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let mut store = HistoryStore::new();
        fill(&mut store, 3);

        for (page, per_page) in [(2, 10), (1000, 50), (usize::MAX, usize::MAX), (0, 10)] {
            let result = store.page(page, per_page);
            assert_eq!(result.total, 3);
            if page > 1 {
                assert!(result.items.is_empty(), "page {} per_page {}", page, per_page);
            }
        }

        assert!(HistoryStore::new().page(1, 10).items.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = HistoryStore::new();
        fill(&mut store, 7);

        assert_eq!(store.clear(), 7);
        assert!(store.is_empty());
        assert_eq!(store.clear(), 0);
    }

    #[test]
    fn test_custom_capacity() {
        let mut store = HistoryStore::with_capacity(3);
        fill(&mut store, 5);

        assert_eq!(store.capacity(), 3);
        let questions: Vec<&str> = store.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["question 5", "question 4", "question 3"]);
    }
}
