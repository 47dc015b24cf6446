//! Class-frequency aggregation and window filtering.
//!
//! Aggregation walks every classed `div` once and accumulates, per class
//! name, an occurrence count plus the text of the occurrences that fell
//! inside the frequency window *at the time they were seen*. Filtering then
//! drops every class whose *final* count lies outside the window.
//!
//! The two steps must stay in this order. A class that crosses `max_count`
//! keeps the snippets gathered while it was in range, and is then removed
//! as a whole by [`filter`]. Filtering before accumulating would produce
//! different snippets.

use std::collections::HashMap;

use crate::dom::{self, Document};
use crate::result::ClassRecord;

/// Closed occurrence-count interval `[min_count, max_count]`.
///
/// Bounds are not validated: an inverted or negative window is legal and
/// simply contains no (or fewer) counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Inclusive lower bound.
    pub min_count: i64,
    /// Inclusive upper bound.
    pub max_count: i64,
}

impl Window {
    /// Create a window from its bounds.
    #[must_use]
    pub const fn new(min_count: i64, max_count: i64) -> Self {
        Self {
            min_count,
            max_count,
        }
    }

    /// Whether `count` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, count: usize) -> bool {
        i64::try_from(count).is_ok_and(|c| self.min_count <= c && c <= self.max_count)
    }

    /// True when `min_count > max_count`.
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.min_count > self.max_count
    }
}

/// Per-class records of one traversal, in first-seen order.
///
/// Lookup goes through a name index; iteration order is the order in
/// which class names were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRecords {
    records: Vec<ClassRecord>,
    index: HashMap<String, usize>,
}

impl ClassRecords {
    /// Empty record set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `class_name`, created empty on first use.
    pub fn get_or_create(&mut self, class_name: &str) -> &mut ClassRecord {
        let idx = match self.index.get(class_name) {
            Some(&idx) => idx,
            None => {
                let idx = self.records.len();
                self.records.push(ClassRecord::new(class_name));
                self.index.insert(class_name.to_string(), idx);
                idx
            }
        };
        &mut self.records[idx]
    }

    /// Record for `class_name`, if the class was seen.
    #[must_use]
    pub fn get(&self, class_name: &str) -> Option<&ClassRecord> {
        self.index.get(class_name).map(|&idx| &self.records[idx])
    }

    /// Number of distinct class names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no class was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassRecord> {
        self.records.iter()
    }
}

impl FromIterator<ClassRecord> for ClassRecords {
    fn from_iter<I: IntoIterator<Item = ClassRecord>>(iter: I) -> Self {
        let mut out = Self::new();
        for record in iter {
            if out.index.contains_key(&record.class_name) {
                continue;
            }
            out.index.insert(record.class_name.clone(), out.records.len());
            out.records.push(record);
        }
        out
    }
}

impl IntoIterator for ClassRecords {
    type Item = ClassRecord;
    type IntoIter = std::vec::IntoIter<ClassRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Count class occurrences over all classed `div` elements.
///
/// Each element contributes once to every class it lists, and the element's
/// full untrimmed visible text is appended to a class's snippets whenever that
/// class's running count is inside `window`.
#[must_use]
pub fn aggregate(doc: &Document, window: Window) -> ClassRecords {
    let mut records = ClassRecords::new();

    for element in dom::classed_divs(doc) {
        let classes = dom::class_list(&element);
        if classes.is_empty() {
            continue;
        }
        let text = dom::visible_text(&element);

        for class_name in &classes {
            let record = records.get_or_create(class_name);
            record.count += 1;
            if window.contains(record.count) {
                record.snippets.push(text.clone());
            }
        }
    }

    tracing::debug!(classes = records.len(), "aggregated div classes");
    records
}

/// Keep only records whose final count lies inside `window`.
///
/// Snippets are passed through untouched.
#[must_use]
pub fn filter(records: ClassRecords, window: Window) -> ClassRecords {
    let kept: ClassRecords = records
        .into_iter()
        .filter(|record| window.contains(record.count))
        .collect();

    tracing::debug!(classes = kept.len(), "classes within frequency window");
    kept
}
