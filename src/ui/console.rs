use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use chrono::NaiveDate;
use crossterm::style::{style, Stylize};
use tracing::{debug, trace};

use crate::error::{DateError, PromptError};
use crate::models::NewStudent;

const RETRY_MESSAGE: &str = "Error: Enter again!";
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Line-oriented terminal wrapper. Every collector keeps asking until it gets
/// a value it can parse; end of input is the only way out and comes back as
/// [`PromptError::Cancelled`].
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line of regular output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print one line highlighted as a problem.
    pub fn warn(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", style(text).red())
    }

    pub(crate) fn heading(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", style(text).bold())
    }

    /// Show `prompt`, then read one line without its line terminator.
    /// `Ok(None)` means the line was not valid UTF-8; its bytes are already
    /// consumed, so the next read starts on the following line.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                writeln!(self.output)?;
                Err(PromptError::Cancelled)
            }
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
                trace!(prompt, input = %trimmed, "read line");
                Ok(Some(trimmed))
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                debug!(prompt, "discarded line that is not valid UTF-8");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn read_text_once(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        Ok(self.read_line(prompt)?.map(|line| line.trim().to_string()))
    }

    /// Any readable line is accepted; unreadable ones are asked again.
    fn read_text(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            match self.read_text_once(prompt)? {
                Some(text) => return Ok(text),
                None => self.warn(RETRY_MESSAGE)?,
            }
        }
    }

    /// Raw answer to the menu prompt; [`MenuChoice::parse`] interprets it.
    ///
    /// [`MenuChoice::parse`]: crate::ui::MenuChoice::parse
    pub fn menu_choice(&mut self) -> Result<String, PromptError> {
        self.read_text("Enter your option: ")
    }

    /// Email address, taken as typed apart from surrounding whitespace. No
    /// format check is applied, matching what the table accepts.
    pub fn email(&mut self) -> Result<String, PromptError> {
        self.read_text("Enter email: ")
    }

    /// Given name for a new record.
    pub fn first_name(&mut self) -> Result<String, PromptError> {
        self.read_text("Enter firstName: ")
    }

    /// Family name for a new record.
    pub fn last_name(&mut self) -> Result<String, PromptError> {
        self.read_text("Enter lname: ")
    }

    /// Student id used to find the row to update or delete. Anything that is
    /// not a whole number is rejected and asked again.
    pub fn student_id(&mut self) -> Result<i64, PromptError> {
        loop {
            let raw = self.read_text_once("Enter id: ")?;
            match raw.as_deref().map(str::parse::<i64>) {
                Some(Ok(id)) => return Ok(id),
                _ => self.warn(RETRY_MESSAGE)?,
            }
        }
    }

    /// Day, month and year are asked as a group and asked again as a group
    /// whenever any of them is unusable.
    pub fn enrollment_date(&mut self) -> Result<NaiveDate, PromptError> {
        loop {
            let day = self.read_text_once("Enter day (1 - 31): ")?;
            let month = self.read_text_once("Enter month (1 - 12): ")?;
            let year = self.read_text_once("Enter year: ")?;
            let parsed = match (day, month, year) {
                (Some(day), Some(month), Some(year)) => parse_date(&day, &month, &year),
                _ => Err(DateError::Unreadable),
            };
            match parsed {
                Ok(date) => return Ok(date),
                Err(reason) => {
                    self.warn(reason)?;
                    self.warn(RETRY_MESSAGE)?;
                }
            }
        }
    }

    /// Collect every field of a new record in menu order.
    pub fn new_student(&mut self) -> Result<NewStudent, PromptError> {
        Ok(NewStudent {
            email: self.email()?,
            first_name: self.first_name()?,
            last_name: self.last_name()?,
            enrollment_date: self.enrollment_date()?,
        })
    }
}

/// Build a calendar date from the three raw sub-fields. Years are limited to
/// 1 - 9999 so every stored date keeps the four-digit `YYYY-MM-DD` form.
pub fn parse_date(day: &str, month: &str, year: &str) -> Result<NaiveDate, DateError> {
    let day: u32 = day
        .trim()
        .parse()
        .map_err(|_| DateError::Day(day.to_string()))?;
    let month: u32 = month
        .trim()
        .parse()
        .map_err(|_| DateError::Month(month.to_string()))?;
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| DateError::Year(year.to_string()))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::YearOutOfRange(year));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::NoSuchDate { year, month, day })
}
