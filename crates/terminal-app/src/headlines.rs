// File: crates/terminal-app/src/headlines.rs
// Summary: Headline catalogue and the bounded, newest-first headline list.

use std::collections::VecDeque;

use crate::payload::NewsItem;

/// Headlines kept on screen at once.
pub const HEADLINE_CAPACITY: usize = 5;

/// `(tag, text)` pairs the simulated wire draws from.
pub const CATALOGUE: &[(&str, &str)] = &[
    ("ALGO", "Models confirm friends talking is still an illiquid asset class."),
    ("EARN", "Earnings call delayed pending someone finding the group chat link."),
    ("HALT", "PODCST halted pending fresh episode guidance."),
    ("MACRO", "Rates unchanged. Vibes slightly higher."),
    ("RISK", "Risk team submits memo titled this is a joke right."),
    ("FLOW", "Unusual options flow detected in silence futures."),
    ("GUID", "Management guides maybe next week for episode release."),
];

/// Opening headlines shown before any news is fetched, newest first.
pub fn seeded() -> Vec<NewsItem> {
    let stamps = ["10:37", "09:02", "08:14"];
    stamps
        .iter()
        .enumerate()
        .map(|(i, stamp)| {
            let (tag, text) = CATALOGUE[2 - i];
            NewsItem { stamp: (*stamp).to_string(), tag: tag.to_string(), text: text.to_string() }
        })
        .collect()
}

/// Newest-first list that evicts the oldest entry past capacity.
#[derive(Clone, Debug)]
pub struct HeadlineFeed {
    items: VecDeque<NewsItem>,
    capacity: usize,
}

impl HeadlineFeed {
    pub fn new(capacity: usize) -> Self {
        Self { items: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Feed pre-filled with `items`, given newest first.
    pub fn with_items(capacity: usize, items: impl IntoIterator<Item = NewsItem>) -> Self {
        let mut feed = Self::new(capacity);
        for item in items {
            feed.items.push_back(item);
        }
        feed.items.truncate(capacity);
        feed
    }

    pub fn push(&mut self, item: NewsItem) {
        self.items.push_front(item);
        self.items.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &NewsItem> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&NewsItem> { self.items.front() }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
}

impl Default for HeadlineFeed {
    fn default() -> Self { Self::new(HEADLINE_CAPACITY) }
}
