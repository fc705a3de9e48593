use crate::{render, FeedbackView, FlowError, ReviewCursor, Route, SurveySession, View};
use review_gate::{KeyValueStore, MemoryStore, PROGRESS_KEY};
use std::path::Path;
use std::sync::Arc;
use submission_guard::{MemoryTable, SubmitError};
use survey_core::{FeedbackInput, Language, Theme, ViewProgress};

fn session() -> (MemoryStore, Arc<MemoryTable>, SurveySession<MemoryStore, Arc<MemoryTable>>) {
    let store = MemoryStore::new();
    let table = Arc::new(MemoryTable::new());
    let session = SurveySession::new(store.clone(), table.clone());
    (store, table, session)
}

fn form(theme: Theme) -> FeedbackInput {
    FeedbackInput {
        name: "Kiran".into(),
        department: "Budget".into(),
        preferred_color: Some(theme),
        remark: "clean layout".into(),
    }
}

#[test]
fn every_route_shows_picker_until_language_chosen() {
    let (_, _, mut session) = session();
    for route in [Route::Home, Route::Review, Route::Feedback, Route::ThankYou, Route::Admin] {
        assert_eq!(session.resolve(route), View::LanguagePicker);
    }
    session.choose_language(Language::Hi).unwrap();
    assert_eq!(session.resolve(Route::Home), View::Home);
    assert_eq!(session.language(), Some(Language::Hi));
}

#[test]
fn feedback_route_is_locked_not_an_error() {
    let (_, _, mut session) = session();
    session.choose_language(Language::En).unwrap();
    session.mark_viewed(Theme::Purple).unwrap();

    assert_eq!(
        session.resolve(Route::Feedback),
        View::Feedback(FeedbackView::Locked {
            remaining: vec![Theme::Green, Theme::Blue]
        })
    );
}

#[test]
fn review_cursor_advances_after_each_mark() {
    let (_, _, mut session) = session();
    assert_eq!(session.cursor().current(), Theme::Green);

    let (_, next) = session.mark_viewed(Theme::Green).unwrap();
    assert_eq!(next, Some(Theme::Purple));
    let (_, next) = session.mark_viewed(Theme::Purple).unwrap();
    assert_eq!(next, Some(Theme::Blue));
    let (progress, next) = session.mark_viewed(Theme::Blue).unwrap();
    assert_eq!(next, None);
    assert!(progress.all_viewed());

    let mut cursor = ReviewCursor::default();
    cursor.select(Theme::Blue);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.current(), Theme::Blue);
}

#[tokio::test]
async fn locked_submit_never_reaches_table() {
    let (_, table, mut session) = session();
    session.mark_viewed(Theme::Green).unwrap();

    let err = session.submit(&form(Theme::Green)).await.unwrap_err();
    assert!(matches!(err, FlowError::Locked { ref remaining } if remaining.len() == 2));
    assert_eq!(table.insert_calls(), 0);
}

#[tokio::test]
async fn full_flow_submits_once_and_clears_progress() {
    let (store, table, mut session) = session();
    session.choose_language(Language::En).unwrap();
    for theme in Theme::ALL {
        session.mark_viewed(theme).unwrap();
    }
    assert!(matches!(
        session.resolve(Route::Feedback),
        View::Feedback(FeedbackView::Form { .. })
    ));

    let stored = session.submit(&form(Theme::Blue)).await.unwrap();
    assert_eq!(stored.remark.as_deref(), Some("clean layout"));
    assert!(stored.viewed_green && stored.viewed_purple && stored.viewed_blue);

    assert!(!store.contains(PROGRESS_KEY));
    assert_eq!(session.progress(), ViewProgress::default());
    assert_eq!(
        session.resolve(Route::Feedback),
        View::Feedback(FeedbackView::AlreadySubmitted)
    );

    let err = session.submit(&form(Theme::Green)).await.unwrap_err();
    assert!(matches!(err, FlowError::Submit(SubmitError::AlreadySubmitted)));
    assert_eq!(table.insert_calls(), 1);
}

#[tokio::test]
async fn reopened_profile_stays_submitted() {
    let (store, table, mut session) = session();
    for theme in Theme::ALL {
        session.mark_viewed(theme).unwrap();
    }
    session.submit(&form(Theme::Green)).await.unwrap();

    let mut reopened = SurveySession::new(store.clone(), table.clone());
    reopened.choose_language(Language::En).unwrap();
    assert_eq!(
        reopened.resolve(Route::Feedback),
        View::Feedback(FeedbackView::AlreadySubmitted)
    );
    assert!(store.read(PROGRESS_KEY).unwrap().is_none());
}

#[tokio::test]
async fn admin_report_reads_table() {
    let (_, table, session) = session();
    for (i, theme) in [Theme::Green, Theme::Green, Theme::Blue].into_iter().enumerate() {
        let mut other = SurveySession::new(MemoryStore::new(), table.clone());
        for t in Theme::ALL {
            other.mark_viewed(t).unwrap();
        }
        let input = FeedbackInput {
            department: if i == 1 { "B".into() } else { "A".into() },
            ..form(theme)
        };
        other.submit(&input).await.unwrap();
    }

    let (records, report) = session.load_report().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(report.distribution.green, 2);
    assert_eq!(report.distribution.purple, 0);
    assert_eq!(report.departments[0].department, "A");
    assert_eq!(report.most_popular, Some(Theme::Green));

    let text = render::admin(&report, &records, Language::En);
    assert!(text.contains("total: 3"));
    assert!(text.contains("most popular: Green"));
}

#[test]
fn rendered_views_use_chosen_language() {
    let docs = Path::new("pdf");
    let locked = View::Feedback(FeedbackView::Locked {
        remaining: vec![Theme::Blue],
    });
    let en = render::view(&locked, Some(Language::En), docs);
    assert!(en.contains("Feedback Locked"));
    assert!(en.contains("Blue"));

    let hi = render::view(&locked, Some(Language::Hi), docs);
    assert!(hi.contains("फीडबैक लॉक है"));
    assert!(hi.contains("नीला"));

    assert_eq!(render::view(&View::Home, None, docs), render::language_picker());

    let tracker = render::progress_tracker(&ViewProgress::default().with_viewed(Theme::Green), Language::En);
    assert!(tracker.contains("1/3"));
    assert!(tracker.contains("[✓] Green"));
    assert!(tracker.contains("[2] Purple"));
}
