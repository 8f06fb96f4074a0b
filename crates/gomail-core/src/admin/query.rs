//! Filter and sort engine for the admin mail list.

use gomail_api::Mail;
use serde::{Deserialize, Serialize};

/// Sortable fields, each bound to an explicit comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Sender address, lexicographic.
    Sender,
    /// Subject line, lexicographic.
    Subject,
    /// Message body, lexicographic.
    Body,
    /// Creation time, chronological.
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest / earliest first.
    Ascending,
    /// Largest / latest first.
    Descending,
}

/// Filter and sort settings for the admin list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminQuery {
    /// Case-insensitive substring matched against sender, subject and body.
    pub filter: String,
    /// Field to sort by.
    pub sort_field: SortField,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for AdminQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_field: SortField::CreatedAt,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl AdminQuery {
    /// Whether `mail` passes the filter.
    ///
    /// An empty filter passes everything; otherwise the filter text must
    /// appear, case-insensitively, in sender, subject or body.
    #[must_use]
    pub fn matches(&self, mail: &Mail) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        [&mail.sender, &mail.subject, &mail.body]
            .into_iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    /// Filters then sorts `items`.
    ///
    /// Pure function of its inputs: the result is a new list, filtered by
    /// [`Self::matches`] and stably sorted by the chosen field and order.
    #[must_use]
    pub fn apply(&self, items: &[Mail]) -> Vec<Mail> {
        let mut selected: Vec<Mail> = items
            .iter()
            .filter(|mail| self.matches(mail))
            .cloned()
            .collect();

        selected.sort_by(|a, b| {
            let ordering = match self.sort_field {
                SortField::Sender => a.sender.cmp(&b.sender),
                SortField::Subject => a.subject.cmp(&b.subject),
                SortField::Body => a.body.cmp(&b.body),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match self.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        selected
    }

    /// Returns the query after a click on a column header.
    ///
    /// Clicking the current sort field flips the direction; clicking a
    /// different field selects it and resets to ascending.
    #[must_use]
    pub fn toggled(&self, field: SortField) -> Self {
        let sort_order = if field == self.sort_field {
            match self.sort_order {
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::Ascending,
            }
        } else {
            SortOrder::Ascending
        };

        Self {
            filter: self.filter.clone(),
            sort_field: field,
            sort_order,
        }
    }
}
