//! Interactive session state.
//!
//! A `DivinationSession` owns the random source and the reading history.
//! The "current reading" is the last history entry, handed to callers
//! explicitly — there is no shared store to read it back from.

use crate::config::DivinationConfig;
use crate::error::{DivinationError, DivinationResult};
use crate::history::{History, HistoryEntry};
use crate::method::Method;
use crate::reading::Reading;
use crate::source::{RandomSource, SeededSource};

/// An interactive divination session.
pub struct DivinationSession {
    source: Box<dyn RandomSource>,
    default_method: Method,
    history: History,
}

impl DivinationSession {
    /// Create a session from a configuration.
    pub fn new(config: DivinationConfig) -> Self {
        let source: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededSource::from_seed(seed)),
            None => Box::new(SeededSource::from_entropy()),
        };
        Self::with_source(source, config.default_method)
    }

    /// Create a session around an explicit random source.
    pub fn with_source(source: Box<dyn RandomSource>, default_method: Method) -> Self {
        Self {
            source,
            default_method,
            history: History::new(),
        }
    }

    /// The default method for casts that do not name one.
    pub fn default_method(&self) -> Method {
        self.default_method
    }

    /// The reading history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current reading — the last cast made in this session.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.history.last()
    }

    /// Cast and record a reading; returns the new history entry.
    pub fn cast(&mut self, method: Option<Method>, question: Option<&str>) -> &HistoryEntry {
        let method = method.unwrap_or(self.default_method);
        let reading = Reading::perform(method, self.source.as_mut());
        self.history
            .append(HistoryEntry::new(reading, question.map(str::to_string)));
        // just appended
        self.history.last().expect("history cannot be empty here")
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> DivinationResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "cast" => self.do_cast(rest),
            "ask" => self.do_ask(rest),
            "history" => self.do_history(),
            "export" => self.do_export(rest),
            "status" => self.do_status(),
            "help" => Ok(Self::help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(DivinationError::UnknownCommand(other.to_string())),
        }
    }

    fn do_cast(&mut self, rest: &str) -> DivinationResult<String> {
        let method = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<Method>()?)
        };
        let entry = self.cast(method, None);
        Ok(entry.reading.to_string())
    }

    fn do_ask(&mut self, rest: &str) -> DivinationResult<String> {
        if rest.is_empty() {
            return Err(DivinationError::InvalidChoice(
                "usage: ask [method] <question>".to_string(),
            ));
        }

        // An optional method may lead the question
        let words: Vec<&str> = rest.splitn(2, ' ').collect();
        let (method, question) = match Method::parse(words[0]) {
            Some(m) => (Some(m), words.get(1).map(|s| s.trim()).unwrap_or("")),
            None => (None, rest),
        };
        if question.is_empty() {
            return Err(DivinationError::InvalidChoice(
                "usage: ask [method] <question>".to_string(),
            ));
        }

        let entry = self.cast(method, Some(question));
        Ok(format!("Question: {question}\n\n{}", entry.reading))
    }

    fn do_history(&self) -> DivinationResult<String> {
        if self.history.is_empty() {
            return Ok("No readings yet.".to_string());
        }
        let mut out = format!("Readings ({}):\n", self.history.len());
        for (i, entry) in self.history.entries().iter().enumerate() {
            out.push_str(&format!("  {}. {}", i + 1, entry.summary()));
            if let Some(question) = &entry.question {
                out.push_str(&format!(" — {question}"));
            }
            out.push('\n');
        }
        Ok(out.trim_end().to_string())
    }

    fn do_export(&self, format: &str) -> DivinationResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.history.export_markdown()),
            "text" | "txt" => Ok(self.history.export_text()),
            other => Err(DivinationError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> DivinationResult<String> {
        let mut out = format!("Default method: {}\n", self.default_method);
        out.push_str(&format!("Readings: {}\n", self.history.len()));
        match self.current() {
            Some(entry) => out.push_str(&format!("Current: {}", entry.summary())),
            None => out.push_str("Current: none"),
        }
        Ok(out)
    }

    fn help(topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "cast" | "ask" => "\
Casting Commands:
  cast [method]               Cast a hexagram (yarrow or coins)
  ask [method] <question>     Cast with a question attached

Methods: yarrow (default), coins"
                .to_string(),
            "history" | "export" => "\
History Commands:
  history                     List readings in this session
  export [markdown|text]      Export the full history"
                .to_string(),
            _ => "\
Divination Commands:
  cast [method]               Cast a hexagram
  ask [method] <question>     Cast with a question attached
  history                     List readings
  export [markdown|text]      Export history
  status                      Show session status
  help [topic]                Show help (cast, history)
  quit                        Exit"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReplaySource;

    fn test_session() -> DivinationSession {
        DivinationSession::new(DivinationConfig::default().with_seed(42))
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert!(s.current().is_none());
        assert!(s.history().is_empty());
        assert_eq!(s.default_method(), Method::YarrowStalks);
    }

    #[test]
    fn cast_records_history() {
        let mut s = test_session();
        s.cast(None, None);
        s.cast(Some(Method::ThreeCoins), Some("Will it rain?"));
        assert_eq!(s.history().len(), 2);
        let current = s.current().unwrap();
        assert_eq!(current.method, Method::ThreeCoins);
        assert_eq!(current.question.as_deref(), Some("Will it rain?"));
    }

    #[test]
    fn seeded_sessions_agree() {
        let mut a = test_session();
        let mut b = test_session();
        let ra = a.cast(None, None).reading.clone();
        let rb = b.cast(None, None).reading.clone();
        assert_eq!(ra, rb);
    }

    #[test]
    fn process_cast() {
        let mut s = test_session();
        let output = s.process("cast").unwrap();
        assert!(output.contains("Hexagram"));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.current().unwrap().method, Method::YarrowStalks);
    }

    #[test]
    fn process_cast_with_method() {
        let mut s = test_session();
        s.process("cast coins").unwrap();
        assert_eq!(s.current().unwrap().method, Method::ThreeCoins);
    }

    #[test]
    fn process_cast_bad_method() {
        let mut s = test_session();
        let result = s.process("cast runes");
        assert!(matches!(result, Err(DivinationError::InvalidMethod(_))));
        assert!(s.history().is_empty());
    }

    #[test]
    fn process_ask() {
        let mut s = test_session();
        let output = s.process("ask Should I take the job?").unwrap();
        assert!(output.contains("Question: Should I take the job?"));
        assert_eq!(
            s.current().unwrap().question.as_deref(),
            Some("Should I take the job?")
        );
    }

    #[test]
    fn process_ask_with_method() {
        let mut s = test_session();
        s.process("ask coins Should I?").unwrap();
        let current = s.current().unwrap();
        assert_eq!(current.method, Method::ThreeCoins);
        assert_eq!(current.question.as_deref(), Some("Should I?"));
    }

    #[test]
    fn process_ask_requires_question() {
        let mut s = test_session();
        assert!(s.process("ask").is_err());
        assert!(s.process("ask coins").is_err());
    }

    #[test]
    fn process_history_and_status() {
        let mut s = test_session();
        assert_eq!(s.process("history").unwrap(), "No readings yet.");
        s.process("ask Will it work?").unwrap();
        let history = s.process("history").unwrap();
        assert!(history.contains("Will it work?"));
        let status = s.process("status").unwrap();
        assert!(status.contains("Readings: 1"));
        assert!(status.contains("Default method: Yarrow Stalks"));
    }

    #[test]
    fn process_export() {
        let mut s = test_session();
        s.process("cast").unwrap();
        let md = s.process("export markdown").unwrap();
        assert!(md.contains("# Reading History"));
        let txt = s.process("export text").unwrap();
        assert!(txt.contains("Reading History"));
        assert!(s.process("export yaml").is_err());
    }

    #[test]
    fn process_unknown_command() {
        let mut s = test_session();
        assert!(matches!(
            s.process("meditate"),
            Err(DivinationError::UnknownCommand(_))
        ));
    }

    #[test]
    fn process_empty_input() {
        let mut s = test_session();
        assert_eq!(s.process("").unwrap(), "");
    }

    #[test]
    fn process_quit_and_help() {
        let mut s = test_session();
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("Divination Commands"));
        assert!(s.process("help cast").unwrap().contains("Methods"));
    }

    #[test]
    fn explicit_source_session() {
        let source = Box::new(ReplaySource::constant(0.0));
        let mut s = DivinationSession::with_source(source, Method::ThreeCoins);
        let entry = s.cast(None, None);
        assert_eq!(entry.reading.primary().number(), 1);
        assert_eq!(entry.reading.transformed().unwrap().number(), 2);
    }
}
