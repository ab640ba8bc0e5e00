use std::fmt;

/// Screen the session is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    /// Questionnaire; doubles as the loading screen until questions arrive.
    Quiz,
    ResultsOverview,
    ResultsDetail,
}

/// User actions that move between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Start,
    Submit,
    Select,
    Back,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavAction::Start => "start",
            NavAction::Submit => "submit",
            NavAction::Select => "select",
            NavAction::Back => "go back",
        };
        f.write_str(name)
    }
}

impl View {
    /// The view reached by `action`, or `None` if the action is not allowed here.
    ///
    /// There is no way back to `Landing` or `Quiz` once results are shown.
    #[must_use]
    pub fn after(self, action: NavAction) -> Option<View> {
        match (self, action) {
            (View::Landing, NavAction::Start) => Some(View::Quiz),
            (View::Quiz, NavAction::Submit) => Some(View::ResultsOverview),
            (View::ResultsOverview, NavAction::Select) => Some(View::ResultsDetail),
            (View::ResultsDetail, NavAction::Back) => Some(View::ResultsOverview),
            _ => None,
        }
    }

    #[must_use]
    pub fn shows_results(self) -> bool {
        matches!(self, View::ResultsOverview | View::ResultsDetail)
    }
}

/// Progress of the one-time question load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotRequested,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Where the current ranking came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    NotSubmitted,
    Pending,
    /// Ranked with real scores from the scoring service.
    Scored,
    /// Scoring failed; the ranking is the zero-scored library.
    Degraded,
}
