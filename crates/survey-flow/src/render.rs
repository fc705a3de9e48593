//! Plain-text rendering of each view.

use crate::route::{FeedbackView, ReviewView, View};
use std::fmt::Write;
use std::path::Path;
use survey_core::{translate, FeedbackRecord, Language, Theme, ViewProgress};
use survey_report::{render_departments, render_distribution, top_departments, SurveyReport};

pub fn language_picker() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", translate(Language::En, "lang.select"));
    let _ = writeln!(out, "  en  {}", translate(Language::En, "lang.english"));
    let _ = writeln!(out, "  hi  {}", translate(Language::En, "lang.hindi"));
    let _ = writeln!(out, "run: survey language <en|hi>");
    out
}

fn theme_label(language: Language, theme: Theme) -> &'static str {
    translate(language, theme.label_key())
}

/// `3/3`-style tracker with one mark per theme.
pub fn progress_tracker(progress: &ViewProgress, language: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}/3",
        translate(language, "progress.title"),
        progress.viewed_count()
    );
    for (i, theme) in Theme::ALL.into_iter().enumerate() {
        let mark = if progress.is_viewed(theme) {
            "✓".to_string()
        } else {
            (i + 1).to_string()
        };
        let _ = writeln!(out, "  [{mark}] {}", theme_label(language, theme));
    }
    let status = if progress.all_viewed() {
        "progress.complete"
    } else {
        "progress.remaining"
    };
    let _ = writeln!(out, "{}", translate(language, status));
    out
}

fn review(view: &ReviewView, language: Language, documents: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", translate(language, "review.title"));
    out.push_str(&progress_tracker(&view.progress, language));
    for theme in Theme::ALL {
        let pointer = if theme == view.current { ">" } else { " " };
        let viewed = if view.progress.is_viewed(theme) {
            translate(language, "pdf.viewed")
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{pointer} {:<8} {}  {viewed}",
            theme_label(language, theme),
            documents.join(theme.document_name()).display(),
        );
    }
    if view.unlocked {
        let _ = writeln!(out, "{}: survey feedback", translate(language, "review.proceedFeedback"));
    } else {
        let _ = writeln!(
            out,
            "{} (survey review mark {})",
            translate(language, "review.viewAll"),
            view.current
        );
    }
    out
}

fn feedback(view: &FeedbackView, language: Language) -> String {
    let mut out = String::new();
    match view {
        FeedbackView::Locked { remaining } => {
            let _ = writeln!(out, "{}", translate(language, "feedback.locked"));
            let _ = writeln!(out, "{}", translate(language, "feedback.lockDesc"));
            let names: Vec<_> = remaining.iter().map(|t| theme_label(language, *t)).collect();
            let _ = writeln!(out, "{} {}", translate(language, "feedback.remaining"), names.join(", "));
        }
        FeedbackView::AlreadySubmitted => {
            let _ = writeln!(out, "{}", translate(language, "feedback.alreadySubmitted"));
            let _ = writeln!(out, "{}", translate(language, "feedback.alreadyDesc"));
        }
        FeedbackView::Form { .. } => {
            let _ = writeln!(out, "{}", translate(language, "feedback.title"));
            let _ = writeln!(out, "{}", translate(language, "feedback.canSubmit"));
            let _ = writeln!(
                out,
                "survey feedback --name <NAME> --department <DEPT> --theme <green|purple|blue> [--remark <TEXT>]"
            );
        }
    }
    out
}

pub fn thank_you(language: Language) -> String {
    [
        translate(language, "thankyou.title"),
        translate(language, "thankyou.message"),
        translate(language, "thankyou.note"),
    ]
    .join("\n")
        + "\n"
}

pub fn view(view: &View, language: Option<Language>, documents: &Path) -> String {
    let Some(language) = language else {
        return language_picker();
    };
    match view {
        View::LanguagePicker => language_picker(),
        View::Home => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", translate(language, "home.title"));
            let _ = writeln!(out, "{}", translate(language, "home.subtitle"));
            for key in ["home.step1.title", "home.step2.title", "home.step3.title"] {
                let _ = writeln!(out, "  - {}", translate(language, key));
            }
            let _ = writeln!(
                out,
                "{} (survey review), {}",
                translate(language, "home.startReview"),
                translate(language, "home.duration")
            );
            out
        }
        View::Review(review_view) => review(review_view, language, documents),
        View::Feedback(feedback_view) => feedback(feedback_view, language),
        View::ThankYou => thank_you(language),
        View::Admin => String::new(),
    }
}

/// Summary cards, theme chart, department chart and the latest rows.
pub fn admin(report: &SurveyReport, records: &[FeedbackRecord], language: Language) -> String {
    let mut out = String::new();
    let popular = report
        .most_popular
        .map(|t| theme_label(language, t))
        .unwrap_or("-");
    let _ = writeln!(
        out,
        "total: {}  today: {}  most popular: {}  departments: {}",
        report.total,
        report.today,
        popular,
        report.departments.len()
    );
    let _ = writeln!(out, "\nthemes");
    out.push_str(&render_distribution(&report.distribution, language));
    let _ = writeln!(out, "\ndepartments");
    out.push_str(&render_departments(top_departments(&report.departments)));
    let _ = writeln!(out, "\nsubmissions");
    for record in records {
        let _ = writeln!(
            out,
            "{}  {:<20} {:<20} {:<7} {}",
            record.created_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
            record.name,
            record.department,
            record.preferred_color,
            record.remark.as_deref().unwrap_or("-"),
        );
    }
    out
}
