//! Line-oriented prompting over any reader/writer pair.
//!
//! Every read returns `Ok(None)` at end of input so callers can wind down
//! cleanly. Parsed reads re-prompt on invalid input up to a fixed number of
//! attempts and then give up with [`PromptError::Exhausted`].

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tasker_core::{Category, TaskId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("no valid {field} after {attempts} attempts")]
    Exhausted { field: String, attempts: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<Option<T>, PromptError>;

pub struct Prompt<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Write a full line to the output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Ask for one line of free text, without the trailing newline.
    pub fn line(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD instead of failing the read.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn integer(&mut self, label: &str) -> PromptResult<i32> {
        self.parsed(label, "integer", |raw| {
            raw.trim()
                .parse::<i32>()
                .map_err(|_| format!("'{}' is not a whole number, try again", raw.trim()))
        })
    }

    pub fn date(&mut self, label: &str, format: &str) -> PromptResult<NaiveDate> {
        self.parsed(label, "date", |raw| {
            NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| {
                format!(
                    "'{}' does not match the date format {format}, try again",
                    raw.trim()
                )
            })
        })
    }

    /// Ask for a category; an empty answer picks `default`.
    pub fn category(&mut self, label: &str, default: Category) -> PromptResult<Category> {
        self.parsed(label, "category", |raw| {
            if raw.trim().is_empty() {
                return Ok(default);
            }
            raw.parse::<Category>().map_err(|error| error.to_string())
        })
    }

    pub fn task_id(&mut self, label: &str) -> PromptResult<TaskId> {
        self.parsed(label, "task id", |raw| {
            raw.parse::<TaskId>().map_err(|error| error.to_string())
        })
    }

    fn parsed<T, F>(&mut self, label: &str, field: &str, mut parse: F) -> PromptResult<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        for attempt in 1..=self.max_attempts {
            let Some(raw) = self.line(label)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => {
                    tracing::debug!(attempt, field, %reason, "rejected input");
                    self.say(&reason)?;
                }
            }
        }

        Err(PromptError::Exhausted {
            field: field.to_string(),
            attempts: self.max_attempts,
        })
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 3)
    }

    #[test]
    fn line_strips_newline_and_reports_eof() {
        let mut p = prompt("hello\r\n");
        assert_eq!(p.line("Title").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.line("Title").unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_an_error() {
        let mut p = Prompt::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new(), 3);
        assert_eq!(p.line("Title").unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn invalid_utf8_integer_is_reprompted() {
        let mut input = vec![0xff, b'\n'];
        input.extend_from_slice(b"2\n");
        let mut p = Prompt::new(Cursor::new(input), Vec::new(), 3);
        assert_eq!(p.integer("Priority").unwrap(), Some(2));
    }

    #[test]
    fn integer_retries_until_valid() {
        let mut p = prompt("abc\n4.5\n-2\n");
        assert_eq!(p.integer("Priority").unwrap(), Some(-2));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Priority: ").count(), 3);
        assert!(out.contains("'abc' is not a whole number"));
    }

    #[test]
    fn integer_gives_up_after_max_attempts() {
        let mut p = prompt("x\ny\nz\n7\n");
        let err = p.integer("Priority").unwrap_err();
        assert!(matches!(err, PromptError::Exhausted { attempts: 3, .. }));
    }

    #[test]
    fn date_uses_given_format() {
        let mut p = prompt("2025-02-28\n28/02/2025\n");
        assert_eq!(
            p.date("Due", "%d/%m/%Y").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
    }

    #[test]
    fn date_rejects_impossible_calendar_day() {
        let mut p = prompt("2025-02-30\n");
        assert_eq!(p.date("Due", "%Y-%m-%d").unwrap(), None);
    }

    #[test]
    fn empty_category_takes_default() {
        let mut p = prompt("\n");
        assert_eq!(
            p.category("Category", Category::Personal).unwrap(),
            Some(Category::Personal)
        );
    }

    #[test]
    fn unknown_category_is_reprompted() {
        let mut p = prompt("Chores\nwork\n");
        assert_eq!(
            p.category("Category", Category::Personal).unwrap(),
            Some(Category::Work)
        );
    }

    #[test]
    fn task_id_accepts_prefixed_form() {
        let mut p = prompt("task-4\n");
        assert_eq!(p.task_id("Id").unwrap(), Some(TaskId(4)));
    }
}
