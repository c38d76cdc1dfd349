use moodmelody_core::{
    normalize_tags, ClearOutcome, Draft, DraftField, FixedClock, InMemoryMelodyStore,
    MelodyStore, Session, ValidationError,
};
use std::collections::HashSet;

fn session() -> Session {
    Session::with_parts(
        InMemoryMelodyStore::new(),
        FixedClock("2026/10/19 12:00:00".to_string()),
    )
}

fn fill(session: &mut Session, title: &str, content: &str, tags: &str) {
    session.set_title(title);
    session.set_content(content);
    session.set_tags_raw(tags);
}

#[test]
fn submit_prepends_and_resets_draft() {
    let mut session = session();
    fill(&mut session, "First", "one", "");
    session.submit().unwrap();

    fill(&mut session, "  Second  ", " two ", "happy, #Sad  night");
    let saved = session.submit().unwrap();

    assert_eq!(session.store().len(), 2);
    let melodies = session.melodies();
    assert_eq!(melodies[0].id(), saved.id());
    assert_eq!(melodies[0].title(), "  Second  ");
    assert_eq!(melodies[0].content(), " two ");
    assert_eq!(melodies[0].tags(), ["#happy", "#sad", "#night"]);
    assert_eq!(melodies[0].created_at(), "2026/10/19 12:00:00");
    assert_eq!(melodies[1].title(), "First");
    assert_eq!(session.draft(), &Draft::default());
}

#[test]
fn blank_title_or_content_is_rejected_and_draft_kept() {
    let cases = [
        ("", "body", DraftField::Title),
        ("   ", "body", DraftField::Title),
        ("title", "", DraftField::Content),
        ("title", " \t\n", DraftField::Content),
    ];

    for (title, content, field) in cases {
        let mut session = session();
        fill(&mut session, "kept", "kept", "");
        session.submit().unwrap();

        fill(&mut session, title, content, "#Keep Me");
        let before = session.draft().clone();
        let err = session.submit().unwrap_err();

        assert_eq!(err, ValidationError::EmptyField { field });
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.draft(), &before);
    }
}

#[test]
fn bom_only_title_is_rejected_and_bom_separates_tags() {
    let mut session = session();
    fill(&mut session, "\u{FEFF}", "body", "a\u{FEFF}b x\u{85}y");

    let err = session.submit().unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            field: DraftField::Title
        }
    );
    assert!(session.store().is_empty());

    session.set_title("Lullaby");
    let saved = session.submit().unwrap();
    assert_eq!(saved.tags(), ["#a", "#b", "#x\u{85}y"]);
}

#[test]
fn ids_are_unique_across_rapid_submits() {
    let mut session = session();
    let mut ids = HashSet::new();
    for idx in 0..200 {
        fill(&mut session, &format!("t{idx}"), "c", "");
        ids.insert(session.submit().unwrap().id());
    }
    assert_eq!(ids.len(), 200);
}

#[test]
fn declined_clear_keeps_store() {
    let mut session = session();
    fill(&mut session, "a", "b", "");
    session.submit().unwrap();
    fill(&mut session, "draft", "pending", "");

    let outcome = session.clear_all(&mut |_: &str| false);

    assert_eq!(outcome, ClearOutcome::Declined);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.draft().title, "draft");
}

#[test]
fn confirmed_clear_empties_store_regardless_of_size() {
    for count in [0usize, 1, 5] {
        let mut session = session();
        for idx in 0..count {
            fill(&mut session, &format!("t{idx}"), "c", "");
            session.submit().unwrap();
        }

        let outcome = session.clear_all(&mut |_: &str| true);

        assert_eq!(outcome, ClearOutcome::Cleared { removed: count });
        assert!(session.store().is_empty());
        assert!(session.melodies().is_empty());
    }
}

#[test]
fn clear_does_not_touch_draft() {
    let mut session = session();
    fill(&mut session, "half", "written", "#wip");
    session.clear_all(&mut |_: &str| true);
    assert_eq!(session.draft(), &Draft::new("half", "written", "#wip"));
}

#[test]
fn normalizer_examples() {
    assert!(normalize_tags("").is_empty());
    assert!(normalize_tags("  ").is_empty());
    assert_eq!(normalize_tags("#A #a"), vec!["#a", "#a"]);
}
