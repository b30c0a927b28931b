use proptest::prelude::*;

use conference_manager::adapters::storage::{parse_conference, render_conference};
use conference_manager::domain::conference::Conference;
use conference_manager::domain::proceedings::AcceptedItem;
use conference_manager::domain::session::Session;

fn session_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ]{0,11}", 0..12)
}

// Lowercase keys avoid case-only ties, whose relative order a reload can change
// when one of them is scheduled and the other is not.
fn papers() -> impl Strategy<Value = Vec<(String, String, i32)>> {
    prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}", 5..=120i32), 0..12)
}

// Sessions stay sorted by case-insensitive name and never hold two
// names that differ only by case.
proptest! {
    #[test]
    fn sessions_stay_sorted_and_unique(names in session_names()) {
        let mut conf = Conference::new("Prop").unwrap();
        let mut accepted = Vec::new();
        for name in &names {
            let session = Session::new(name.trim(), 60).unwrap();
            let lower = name.trim().to_lowercase();
            match conf.add_session(session) {
                Ok(_) => {
                    prop_assert!(!accepted.contains(&lower));
                    accepted.push(lower);
                }
                Err(_) => prop_assert!(accepted.contains(&lower)),
            }
        }

        let listed: Vec<String> = conf
            .session_rows()
            .into_iter()
            .map(|r| r.name.to_lowercase())
            .collect();
        let mut expected = accepted.clone();
        expected.sort();
        prop_assert_eq!(listed, expected);
    }
}

// Whatever gets scheduled, a session never runs over its duration.
proptest! {
    #[test]
    fn remaining_capacity_never_negative(items in papers(), minutes in 5..=120i32) {
        let mut conf = Conference::new("Prop").unwrap();
        conf.add_session(Session::new("Only", minutes).unwrap()).unwrap();
        for (authors, title, duration) in items {
            let item = AcceptedItem::paper_with_duration(authors, title, duration).unwrap();
            if let Ok(index) = conf.add_accepted_item(item) {
                let _ = conf.assign_item_to_session(0, index);
            }
        }

        let session = conf.session(0).unwrap();
        prop_assert!(session.remaining_capacity() >= 0);
        prop_assert_eq!(
            session.remaining_capacity(),
            minutes - session.scheduled_minutes()
        );
    }
}

// Rendering then parsing gives back the same tables.
proptest! {
    #[test]
    fn render_then_parse_preserves_tables(items in papers(), names in session_names()) {
        let mut conf = Conference::new("Prop").unwrap();
        for name in &names {
            let _ = conf.add_session(Session::new(name.trim(), 120).unwrap());
        }
        for (i, (authors, title, duration)) in items.into_iter().enumerate() {
            let item = AcceptedItem::paper_with_duration(authors, title, duration).unwrap();
            if let Ok(index) = conf.add_accepted_item(item) {
                if conf.session_count() > 0 {
                    let _ = conf.assign_item_to_session(i % conf.session_count(), index);
                }
            }
        }

        let reparsed = parse_conference(&render_conference(&conf)).unwrap();
        prop_assert_eq!(reparsed.session_rows(), conf.session_rows());
        prop_assert_eq!(reparsed.item_rows(), conf.item_rows());
    }
}
