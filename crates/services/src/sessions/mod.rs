mod controller;
mod state;
mod submission;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::AssessmentSession;
pub use state::{LoadState, NavAction, SubmissionStatus, View};
pub use submission::SubmissionTicket;
pub use view::{DISCLAIMER, OverviewCard, PatternDetail, QuestionItem, QuizProgress, WeekRow};
