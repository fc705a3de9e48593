use crate::{translate, validate, FeedbackInput, Language, NewFeedback, Theme, ViewProgress};

fn filled_input() -> FeedbackInput {
    FeedbackInput {
        name: "  Asha Rao ".into(),
        department: " Treasury ".into(),
        preferred_color: Some(Theme::Purple),
        remark: String::new(),
    }
}

#[test]
fn validator_rejects_missing_required_fields() {
    let blanks = ["", " ", "\t\n"];
    for blank in blanks {
        let mut input = filled_input();
        input.name = blank.into();
        assert!(!validate(&input), "name {blank:?} accepted");

        let mut input = filled_input();
        input.department = blank.into();
        assert!(!validate(&input), "department {blank:?} accepted");
    }

    let mut input = filled_input();
    input.preferred_color = None;
    assert!(!validate(&input));
}

#[test]
fn validator_accepts_any_remark() {
    for remark in ["", "   ", "Blue reads better on projectors"] {
        for theme in Theme::ALL {
            let input = FeedbackInput {
                preferred_color: Some(theme),
                remark: remark.into(),
                ..filled_input()
            };
            assert!(validate(&input));
        }
    }
}

#[test]
fn normalization_trims_and_omits_blank_remark() {
    let progress = ViewProgress::default().with_viewed(Theme::Green);
    let new = NewFeedback::from_input(&filled_input(), progress).unwrap();
    assert_eq!(new.name, "Asha Rao");
    assert_eq!(new.department, "Treasury");
    assert_eq!(new.remark, None);
    assert!(new.viewed_green);
    assert!(!new.viewed_purple && !new.viewed_blue);

    let json = serde_json::to_value(&new).unwrap();
    assert!(json.get("remark").is_none());
    assert_eq!(json["preferred_color"], "purple");

    let with_remark = FeedbackInput {
        remark: "  nice  ".into(),
        ..filled_input()
    };
    let new = NewFeedback::from_input(&with_remark, progress).unwrap();
    assert_eq!(new.remark.as_deref(), Some("nice"));
}

#[test]
fn normalization_refuses_invalid_input() {
    let input = FeedbackInput {
        name: " ".into(),
        ..filled_input()
    };
    assert!(NewFeedback::from_input(&input, ViewProgress::default()).is_none());
}

#[test]
fn progress_helpers_track_remaining_themes() {
    let p = ViewProgress::default();
    assert_eq!(p.viewed_count(), 0);
    assert_eq!(p.remaining(), Theme::ALL.to_vec());

    let p = p.with_viewed(Theme::Blue).with_viewed(Theme::Blue);
    assert_eq!(p.viewed_count(), 1);
    assert_eq!(p.remaining(), vec![Theme::Green, Theme::Purple]);
    assert!(!p.all_viewed());

    let p = p.with_viewed(Theme::Green).with_viewed(Theme::Purple);
    assert!(p.all_viewed());
    assert!(p.remaining().is_empty());
}

#[test]
fn theme_and_language_parse() {
    assert_eq!("Purple".parse::<Theme>(), Ok(Theme::Purple));
    assert!("red".parse::<Theme>().is_err());
    assert_eq!("hi".parse::<Language>(), Ok(Language::Hi));
    assert!("fr".parse::<Language>().is_err());
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate(Language::En, "progress.green"), "Green");
    assert_eq!(translate(Language::Hi, "progress.green"), "हरा");
    assert_eq!(translate(Language::Hi, "no.such.key"), "no.such.key");
}
