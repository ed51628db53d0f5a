pub mod view;
pub mod word_cloud;

use comment_stats::{analyze, AnalysisResult};
use iced::{Command, Element, Theme};
use reddit_client::UserCommentsClient;
use snooscope_core::{AppConfig, Comment, CoreError, ErrorExt};
use tracing::{debug, info};

/// Everything the overview and comment tabs render for one analyzed user.
#[derive(Debug, Clone)]
pub struct UserReport {
    pub username: String,
    pub analysis: AnalysisResult,
    pub comments: Vec<Comment>,
}

/// Display form of a failed run. Built from `ErrorExt` so the blocked /
/// not-found / fetch-failed distinction survives to the screen.
#[derive(Debug, Clone)]
pub struct ErrorNotice {
    pub code: String,
    pub message: String,
}

impl ErrorNotice {
    fn from_core(error: &CoreError) -> Self {
        error.log_error();
        Self {
            code: error.error_code(),
            message: error.user_friendly_message(),
        }
    }

    fn no_comments() -> Self {
        Self {
            code: "NO_DATA".to_string(),
            message: "No comments found for this user.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Comments,
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    Analyze,
    TabSelected(Tab),
    AnalysisFinished(Result<UserReport, ErrorNotice>),
}

pub struct App {
    username: String,
    loading: bool,
    report: Option<UserReport>,
    error: Option<ErrorNotice>,
    active_tab: Tab,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            loading: false,
            report: None,
            error: None,
            active_tab: Tab::Overview,
        }
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::UsernameChanged(username) => {
                self.username = username;
                Command::none()
            }
            Message::Analyze => {
                let username = self.username.trim().to_string();
                if username.is_empty() {
                    self.error = Some(ErrorNotice::from_core(&CoreError::InvalidInput {
                        message: "Please enter a username.".to_string(),
                    }));
                    return Command::none();
                }

                info!("Starting analysis run for u/{}", username);
                self.loading = true;
                self.error = None;
                self.report = None;
                self.active_tab = Tab::Overview;

                Command::perform(run_analysis(username), Message::AnalysisFinished)
            }
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Command::none()
            }
            Message::AnalysisFinished(result) => {
                self.loading = false;
                match result {
                    Ok(report) => {
                        debug!(
                            "Run for u/{} finished with {} comments",
                            report.username, report.analysis.total_comments
                        );
                        self.report = Some(report);
                    }
                    Err(notice) => {
                        self.error = Some(notice);
                    }
                }
                Command::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message, Theme> {
        view::app_view(
            &self.username,
            self.loading,
            self.report.as_ref(),
            self.error.as_ref(),
            self.active_tab,
        )
    }
}

/// One independent pipeline run: fresh client, full fetch, then the pure
/// analysis pass. Two in-flight runs share nothing.
async fn run_analysis(username: String) -> Result<UserReport, ErrorNotice> {
    match fetch_and_analyze(&username).await {
        Ok(Some(report)) => Ok(report),
        Ok(None) => Err(ErrorNotice::no_comments()),
        Err(error) => Err(ErrorNotice::from_core(&error)),
    }
}

async fn fetch_and_analyze(username: &str) -> Result<Option<UserReport>, CoreError> {
    let config = AppConfig::load()?;
    let client = UserCommentsClient::new(&config)?;
    let comments = client.fetch_user_comments(username).await?;

    Ok(analyze(&comments).map(|analysis| UserReport {
        username: username.to_string(),
        analysis,
        comments,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snooscope_core::FetchError;

    #[test]
    fn test_error_notice_keeps_distinction() {
        let blocked = ErrorNotice::from_core(&CoreError::Fetch(FetchError::AccessBlocked));
        let not_found = ErrorNotice::from_core(&CoreError::Fetch(FetchError::NotFound {
            username: "ghost".to_string(),
        }));

        assert_eq!(blocked.code, "ACCESS_BLOCKED");
        assert_eq!(not_found.code, "NOT_FOUND");
        assert_ne!(blocked.message, not_found.message);
    }

    #[test]
    fn test_empty_username_is_rejected_locally() {
        let mut app = App::new();
        app.username = "   ".to_string();

        let _ = app.update(Message::Analyze);
        assert!(!app.loading);
        assert_eq!(app.error.as_ref().unwrap().code, "INVALID_INPUT");
    }
}
