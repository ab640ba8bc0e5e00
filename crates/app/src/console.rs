use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use lrs_core::model::{AnswerValue, likert_label};
use services::session::DISCLAIMER;
use services::{AssessmentSession, LoadState, ScoringService, SessionError, View};

use crate::export_sink::ExportSink;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Show,
    Start,
    Answer { number: usize, raw: String },
    Submit,
    Open(String),
    Back,
    Toggle(usize),
    Export(Option<String>),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        match head.to_ascii_lowercase().as_str() {
            "" | "show" | "ls" => Some(Self::Show),
            "start" => Some(Self::Start),
            "submit" => Some(Self::Submit),
            "open" | "select" if !rest.is_empty() => Some(Self::Open(rest.to_owned())),
            "back" => Some(Self::Back),
            "toggle" => rest.parse().ok().map(Self::Toggle),
            "export" => Some(Self::Export((!rest.is_empty()).then(|| rest.to_owned()))),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            number => number
                .parse()
                .ok()
                .map(|number| Self::Answer {
                    number,
                    raw: rest.to_owned(),
                }),
        }
    }
}

/// Line-oriented front end over an [`AssessmentSession`].
pub struct Console<'a, W> {
    session: AssessmentSession,
    scorer: &'a dyn ScoringService,
    sink: Option<&'a ExportSink>,
    out: W,
}

impl<'a, W: Write> Console<'a, W> {
    pub fn new(
        session: AssessmentSession,
        scorer: &'a dyn ScoringService,
        sink: Option<&'a ExportSink>,
        out: W,
    ) -> Self {
        Self {
            session,
            scorer,
            sink,
            out,
        }
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.render()?;
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                writeln!(self.out, "unrecognised command, try `help`")?;
                continue;
            };
            debug!(?command, view = ?self.session.view(), "console command");
            if command == Command::Quit {
                break;
            }
            self.dispatch(command).await?;
        }
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) -> io::Result<()> {
        let outcome = match command {
            Command::Show => return self.render(),
            Command::Help => return self.help(),
            Command::Quit => return Ok(()),
            Command::Start => self.session.start(),
            Command::Answer { number, raw } => return self.answer(number, &raw),
            Command::Submit => match self.session.submit(self.scorer).await {
                Ok(ranking) if ranking.is_degraded() => {
                    writeln!(
                        self.out,
                        "scoring unavailable, showing patterns unranked"
                    )?;
                    Ok(())
                }
                Ok(_) => Ok(()),
                Err(err) => Err(err),
            },
            Command::Open(target) => match target.parse::<usize>() {
                Ok(rank) => self.session.select_rank(rank).map(|_| ()),
                Err(_) => self.session.select(&target).map(|_| ()),
            },
            Command::Back => self.session.back(),
            Command::Toggle(week) => return self.toggle(week),
            Command::Export(target) => return self.export(target.as_deref()),
        };

        match outcome {
            Ok(()) => self.render(),
            Err(err) => self.report(&err),
        }
    }

    fn answer(&mut self, number: usize, raw: &str) -> io::Result<()> {
        let Some(question) = number
            .checked_sub(1)
            .and_then(|idx| self.session.questions().get(idx))
            .cloned()
        else {
            return writeln!(self.out, "no question {number}");
        };
        let Some(value) = question.scale().parse_input(raw) else {
            let choices = question.scale().choice_labels().join(" / ");
            return writeln!(self.out, "question {number} expects: {choices}");
        };
        match self.session.set_answer(question.id(), value) {
            Ok(()) => {
                let progress = self.session.quiz_progress();
                writeln!(self.out, "{}/{} answered", progress.answered, progress.total)
            }
            Err(err) => self.report(&err),
        }
    }

    fn toggle(&mut self, week: usize) -> io::Result<()> {
        let Some(detail) = self.session.detail() else {
            return writeln!(self.out, "open a pattern first");
        };
        let Some(row) = week.checked_sub(1).and_then(|idx| detail.weeks.get(idx)) else {
            return writeln!(self.out, "no week {week}");
        };
        match self.session.toggle_week(&detail.name, &row.label) {
            Ok(_) => self.render(),
            Err(err) => self.report(&err),
        }
    }

    fn export(&mut self, target: Option<&str>) -> io::Result<()> {
        let doc = match target {
            None => self.session.export_selected(),
            Some(target) => {
                let name = target
                    .parse::<usize>()
                    .ok()
                    .and_then(|rank| rank.checked_sub(1))
                    .and_then(|idx| self.session.ranked().get(idx))
                    .map_or_else(|| target.to_owned(), |p| p.name().to_owned());
                self.session.export(&name)
            }
        };
        let doc = match doc {
            Ok(doc) => doc,
            Err(err) => return self.report(&err),
        };
        match self.sink {
            Some(sink) => match sink.write(&doc) {
                Ok(path) => writeln!(self.out, "saved {}", path.display()),
                Err(err) => {
                    warn!(error = %err, dir = %sink.dir().display(), "export failed");
                    writeln!(self.out, "export failed: {err}")
                }
            },
            None => {
                let json = serde_json::to_string_pretty(&doc)?;
                writeln!(self.out, "{json}")
            }
        }
    }

    fn report(&mut self, err: &SessionError) -> io::Result<()> {
        writeln!(self.out, "error: {err}")
    }

    fn help(&mut self) -> io::Result<()> {
        let lines: &[&str] = match self.session.view() {
            View::Landing => &["start        begin the questionnaire"],
            View::Quiz => &[
                "<n> <value>  answer question n (0-4, yes/no or text)",
                "submit       score the answers",
            ],
            View::ResultsOverview => &[
                "open <rank|name>    show a pattern",
                "export <rank|name>  save a pattern's plan",
            ],
            View::ResultsDetail => &[
                "toggle <week>  mark a week done or not done",
                "export         save this plan",
                "back           return to the overview",
            ],
        };
        for line in lines {
            writeln!(self.out, "  {line}")?;
        }
        writeln!(self.out, "  show         redraw\n  quit         leave")
    }

    fn render(&mut self) -> io::Result<()> {
        match self.session.view() {
            View::Landing => self.render_landing(),
            View::Quiz => self.render_quiz(),
            View::ResultsOverview => self.render_overview(),
            View::ResultsDetail => self.render_detail(),
        }
    }

    fn render_landing(&mut self) -> io::Result<()> {
        writeln!(self.out, "LRS Self-Assessment")?;
        match self.session.load_state() {
            LoadState::Failed(message) => {
                writeln!(self.out, "questions could not be loaded: {message}")
            }
            LoadState::Ready => writeln!(
                self.out,
                "{} questions ready, type `start`",
                self.session.questions().len()
            ),
            LoadState::NotRequested | LoadState::Loading => {
                writeln!(self.out, "loading questions...")
            }
        }
    }

    fn render_quiz(&mut self) -> io::Result<()> {
        if !self.session.load_state().is_ready() {
            return writeln!(self.out, "questions are not available yet");
        }
        for item in self.session.question_items() {
            let answer = match &item.answer {
                Some(AnswerValue::Likert(v)) => likert_label(*v),
                Some(AnswerValue::YesNo(true)) => "Yes".to_owned(),
                Some(AnswerValue::YesNo(false)) => "No".to_owned(),
                Some(AnswerValue::Text(text)) => text.clone(),
                None => "-".to_owned(),
            };
            writeln!(self.out, "{:>3}. {}  [{answer}]", item.number, item.text)?;
        }
        let progress = self.session.quiz_progress();
        writeln!(
            self.out,
            "{}/{} answered",
            progress.answered, progress.total
        )
    }

    fn render_overview(&mut self) -> io::Result<()> {
        if let Some(ranking) = self.session.ranking() {
            writeln!(self.out, "ranked at {}", ranking.ranked_at())?;
        }
        if self.session.is_degraded() {
            writeln!(self.out, "(scores unavailable)")?;
        }
        for card in self.session.overview_cards() {
            writeln!(
                self.out,
                "{:>3}. {:<40} {:>6.2}  {}",
                card.rank, card.name, card.score, card.summary
            )?;
        }
        Ok(())
    }

    fn render_detail(&mut self) -> io::Result<()> {
        let Some(detail) = self.session.detail() else {
            return Ok(());
        };
        writeln!(self.out, "{} ({})  score {:.2}", detail.name, detail.category, detail.score)?;
        writeln!(self.out, "Root cause: {}", detail.causes)?;
        writeln!(self.out, "Symptoms: {}", detail.symptoms)?;
        writeln!(self.out, "Manifestations: {}", detail.manifestations)?;
        writeln!(
            self.out,
            "{} ({}/{} done)",
            detail.plan_heading,
            detail.completed_weeks,
            detail.weeks.len()
        )?;
        for week in &detail.weeks {
            writeln!(
                self.out,
                "  {} [{}] {}",
                week.heading(),
                week.caption(),
                week.text
            )?;
        }
        writeln!(self.out, "{DISCLAIMER}")
    }
}
