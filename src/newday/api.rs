//! # API Facade
//!
//! Thin layer over `commands/*.rs`. It owns the two inputs every command
//! needs, the working directory and the resolved [`NewDayConfig`], so callers
//! only pass the date and per-run options.
//!
//! Like the commands it never prints and never exits; it returns
//! `Result<CmdResult>` and leaves presentation to the binary.

use crate::commands::{self, generate::GenerateOptions, include::IncludeOptions};
use crate::config::NewDayConfig;
use crate::error::Result;
use crate::format::DateKey;
use std::path::PathBuf;

pub struct NewDayApi {
    cwd: PathBuf,
    config: NewDayConfig,
}

impl NewDayApi {
    pub fn new(cwd: PathBuf, config: NewDayConfig) -> Self {
        Self { cwd, config }
    }

    pub fn in_notes_dir(&self) -> bool {
        commands::guard::in_notes_dir(&self.cwd, &self.config.notes_dir)
    }

    pub fn generate(&self, date: DateKey, opts: &GenerateOptions) -> Result<commands::CmdResult> {
        commands::generate::run(&self.cwd, &self.config.notes_dir, date, opts)
    }

    pub fn include(&self, filename: &str, opts: &IncludeOptions) -> Result<commands::CmdResult> {
        commands::include::run(&self.cwd, &self.config.notes_dir, filename, opts)
    }

    /// Generates the dated note and, whenever a note is on disk afterwards,
    /// makes sure the index includes it.
    pub fn new_day(
        &self,
        date: DateKey,
        generate: &GenerateOptions,
        include: &IncludeOptions,
    ) -> Result<commands::CmdResult> {
        let mut result = self.generate(date, generate)?;
        if let Some(filename) = result.filename.clone() {
            let included = self.include(&filename, include)?;
            result.merge(included);
        }
        Ok(result)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NoteOutcome};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;

    fn api_in(dir: &Path) -> NewDayApi {
        let config = NewDayConfig {
            notes_dir: "journal".into(),
            ..Default::default()
        };
        NewDayApi::new(dir.to_path_buf(), config)
    }

    fn day() -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(2025, 11, 30).unwrap())
    }

    #[test]
    fn new_day_writes_and_indexes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("journal");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.typ"), "").unwrap();

        let api = api_in(&dir);
        let result = api
            .new_day(day(), &GenerateOptions::default(), &IncludeOptions::default())
            .unwrap();

        assert_eq!(result.filename.as_deref(), Some("11-30-2025.typ"));
        assert_eq!(result.outcome, Some(NoteOutcome::Written));
        assert!(result.included);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn existing_note_is_still_indexed() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("journal");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("main.typ"), "").unwrap();
        fs::write(dir.join("11-30-2025.typ"), "kept").unwrap();

        let api = api_in(&dir);
        let result = api
            .new_day(day(), &GenerateOptions::default(), &IncludeOptions::default())
            .unwrap();

        assert_eq!(result.outcome, Some(NoteOutcome::Existing));
        assert!(result.included);
        assert_eq!(fs::read_to_string(dir.join("11-30-2025.typ")).unwrap(), "kept");
    }

    #[test]
    fn outside_notes_dir_skips_index() {
        let tmp = tempfile::tempdir().unwrap();
        let api = api_in(tmp.path());
        assert!(!api.in_notes_dir());

        let result = api
            .new_day(day(), &GenerateOptions::default(), &IncludeOptions::default())
            .unwrap();
        assert!(result.filename.is_none());
        assert!(!result.included);
        assert_eq!(result.messages.len(), 1);
    }
}
