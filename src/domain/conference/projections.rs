//! Tabular read models derived from a conference.
//!
//! Rows are built on demand from the aggregate and never cached.

use serde::Serialize;

use crate::domain::proceedings::AcceptedItem;
use crate::domain::session::Session;

/// One row of the sessions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub name: String,
    pub duration: i32,
    pub remaining_capacity: i32,
}

impl SessionRow {
    pub(crate) fn from_session(session: &Session) -> Self {
        Self {
            name: session.name().to_string(),
            duration: session.duration().value(),
            remaining_capacity: session.remaining_capacity(),
        }
    }

    /// Name, duration, remaining capacity.
    pub fn to_cells(&self) -> [String; 3] {
        [
            self.name.clone(),
            self.duration.to_string(),
            self.remaining_capacity.to_string(),
        ]
    }
}

/// One row of the item pool table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    #[serde(rename = "type")]
    pub item_type: String,
    pub authors: String,
    pub title: String,
    pub duration: i32,
    /// Name of the session the item is scheduled in; empty when unscheduled.
    pub session: String,
}

impl ItemRow {
    pub(crate) fn from_item(item: &AcceptedItem, session_name: Option<&str>) -> Self {
        Self {
            item_type: item.type_label().to_string(),
            authors: item.authors().to_string(),
            title: item.title().to_string(),
            duration: item.duration().value(),
            session: session_name.unwrap_or_default().to_string(),
        }
    }

    /// Type, authors, title, duration, session name.
    pub fn to_cells(&self) -> [String; 5] {
        [
            self.item_type.clone(),
            self.authors.clone(),
            self.title.clone(),
            self.duration.to_string(),
            self.session.clone(),
        ]
    }
}

/// One row of a session's running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledItemRow {
    #[serde(rename = "type")]
    pub item_type: String,
    pub authors: String,
    pub title: String,
    pub duration: i32,
}

impl ScheduledItemRow {
    pub(crate) fn from_item(item: &AcceptedItem) -> Self {
        Self {
            item_type: item.type_label().to_string(),
            authors: item.authors().to_string(),
            title: item.title().to_string(),
            duration: item.duration().value(),
        }
    }

    /// Type, authors, title, duration.
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.item_type.clone(),
            self.authors.clone(),
            self.title.clone(),
            self.duration.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_row_uses_empty_session_when_unscheduled() {
        let item = AcceptedItem::panel("Bob", "Futures").unwrap();
        let row = ItemRow::from_item(&item, None);

        assert_eq!(row.to_cells(), ["Panel", "Bob", "Futures", "75", ""]);
    }

    #[test]
    fn session_row_reports_capacity() {
        let session = Session::new("Morning", 100).unwrap();
        let row = SessionRow::from_session(&session);

        assert_eq!(row.to_cells(), ["Morning", "100", "100"]);
    }

    #[test]
    fn item_row_serializes_type_field() {
        let item = AcceptedItem::lightning_talk("Carol", "Flash").unwrap();
        let json = serde_json::to_value(ScheduledItemRow::from_item(&item)).unwrap();

        assert_eq!(json["type"], "LightningTalk");
        assert_eq!(json["duration"], 5);
    }
}
