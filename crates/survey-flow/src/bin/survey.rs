use anyhow::Context;
use clap::{Parser, Subcommand};
use review_gate::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use submission_guard::{HttpTable, SubmitError};
use survey_core::{translate, FeedbackInput, Language, Theme};
use survey_flow::{render, FlowError, Route, SurveySession, View, AUTO_ADVANCE_DELAY};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "survey", about = "Theme preference survey")]
struct Cli {
    /// Directory holding this respondent's saved progress.
    #[arg(long, env = "SURVEY_PROFILE_DIR", default_value = ".survey-profile")]
    profile_dir: PathBuf,

    /// Base URL of the feedback table service.
    #[arg(long, env = "SURVEY_BACKEND_URL", default_value = "http://127.0.0.1:8787")]
    backend_url: String,

    /// Seconds to wait for the feedback table before giving up.
    #[arg(long, env = "SURVEY_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Where the theme proposal documents live.
    #[arg(long, env = "SURVEY_DOCUMENTS_DIR", default_value = "pdf")]
    documents_dir: PathBuf,

    /// Emit logs as JSON lines.
    #[arg(long, env = "SURVEY_LOG_JSON", default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Choose the survey language.
    Language { language: Language },
    Home,
    /// Show review progress, or mark a theme as viewed.
    Review {
        #[command(subcommand)]
        action: Option<ReviewAction>,
    },
    /// Show the feedback form state, or submit when the form fields are given.
    Feedback {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long, default_value = "")]
        remark: String,
    },
    ThankYou,
    /// Aggregated results of every submission.
    Admin,
}

#[derive(Debug, Subcommand)]
enum ReviewAction {
    Mark { theme: Theme },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if json {
        fmt().json().with_env_filter(filter).with_writer(std::io::stderr).init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let timeout = Duration::from_secs(cli.timeout_secs);
    let table = HttpTable::new(&cli.backend_url, timeout).context("building feedback client")?;
    let mut session =
        SurveySession::new(FileStore::new(&cli.profile_dir), table).with_submit_timeout(timeout);
    debug!(profile = %cli.profile_dir.display(), backend = %cli.backend_url, "session opened");

    let language = match (&cli.command, session.language()) {
        (Command::Language { language }, _) => {
            session
                .choose_language(*language)
                .context("saving language choice")?;
            *language
        }
        (_, Some(language)) => language,
        (_, None) => {
            print!("{}", render::language_picker());
            return Ok(ExitCode::SUCCESS);
        }
    };
    let show = |view: &View| print!("{}", render::view(view, Some(language), &cli.documents_dir));

    match cli.command {
        Command::Language { .. } | Command::Home => show(&session.resolve(Route::Home)),
        Command::ThankYou => show(&session.resolve(Route::ThankYou)),
        Command::Review { action: None } => show(&session.resolve(Route::Review)),
        Command::Review {
            action: Some(ReviewAction::Mark { theme }),
        } => {
            let (_, next) = session
                .mark_viewed(theme)
                .context("saving review progress")?;
            if next.is_some() {
                tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
            }
            show(&session.resolve(Route::Review));
        }
        Command::Feedback {
            name,
            department,
            theme,
            remark,
        } => {
            if name.is_none() && department.is_none() && theme.is_none() {
                show(&session.resolve(Route::Feedback));
                return Ok(ExitCode::SUCCESS);
            }
            let input = FeedbackInput {
                name: name.unwrap_or_default(),
                department: department.unwrap_or_default(),
                preferred_color: theme,
                remark,
            };
            if !survey_core::validate(&input) {
                eprintln!("{}", translate(language, "form.errorIncomplete"));
                return Ok(ExitCode::from(2));
            }
            match session.submit(&input).await {
                Ok(_) => show(&session.resolve(Route::ThankYou)),
                Err(FlowError::Locked { .. }) => {
                    show(&session.resolve(Route::Feedback));
                    return Ok(ExitCode::from(1));
                }
                Err(FlowError::Submit(SubmitError::AlreadySubmitted)) => {
                    eprintln!("{}", translate(language, "form.errorSession"));
                    return Ok(ExitCode::from(1));
                }
                Err(FlowError::Submit(SubmitError::SubmitFailed(reason))) => {
                    debug!(%reason, "submit failed");
                    eprintln!("{}", translate(language, "form.errorFailed"));
                    return Ok(ExitCode::from(1));
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Admin => {
            let (records, report) = session
                .load_report()
                .await
                .context("failed to load feedback data")?;
            print!("{}", render::admin(&report, &records, language));
        }
    }

    Ok(ExitCode::SUCCESS)
}
