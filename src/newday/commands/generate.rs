use crate::commands::guard::{guidance, in_notes_dir};
use crate::commands::{CmdMessage, CmdResult, NoteOutcome};
use crate::error::{NewDayError, Result};
use crate::format::{note_body, DateKey};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub extension: String,
    pub subheadings: u32,
    pub overwrite: bool,
    pub titles: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            extension: crate::config::DEFAULT_FILE_EXT.to_string(),
            subheadings: crate::config::DEFAULT_SUBHEADINGS,
            overwrite: false,
            titles: Vec::new(),
        }
    }
}

pub fn note_filename(date: DateKey, extension: &str) -> String {
    format!("{}.{}", date, extension.trim_start_matches('.'))
}

pub fn run(cwd: &Path, notes_dir: &str, date: DateKey, opts: &GenerateOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !in_notes_dir(cwd, notes_dir) {
        debug!(cwd = %cwd.display(), notes_dir, "not in notes directory");
        result.add_message(guidance(notes_dir));
        return Ok(result);
    }

    let filename = note_filename(date, &opts.extension);
    let path = cwd.join(&filename);
    let exists = path.exists();

    if exists && !opts.overwrite {
        result.add_message(CmdMessage::warning(format!(
            "File {} already exists!",
            filename
        )));
        return Ok(result.with_note(filename, path, NoteOutcome::Existing));
    }

    let body = note_body(date, &opts.titles, opts.subheadings);
    fs::write(&path, body).map_err(|e| NewDayError::file(&path, e))?;
    debug!(path = %path.display(), subheadings = opts.subheadings, "wrote note");

    let outcome = if exists {
        result.add_message(CmdMessage::success(format!(
            "File {} overwritten!",
            filename
        )));
        NoteOutcome::Overwritten
    } else {
        result.add_message(CmdMessage::success(format!("File {} generated!", filename)));
        NoteOutcome::Written
    };
    Ok(result.with_note(filename, path, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const NOTES: &str = "journal";

    fn notes_dir() -> (TempDir, std::path::PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(NOTES);
        fs::create_dir_all(&dir).unwrap();
        (tmp, dir)
    }

    fn day() -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
    }

    fn opts(titles: &[&str], subheadings: u32, overwrite: bool) -> GenerateOptions {
        GenerateOptions {
            extension: "typ".into(),
            subheadings,
            overwrite,
            titles: titles.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn filename_strips_leading_dot() {
        assert_eq!(note_filename(day(), ".md"), "03-09-2024.md");
        assert_eq!(note_filename(day(), "typ"), "03-09-2024.typ");
    }

    #[test]
    fn writes_fresh_note() {
        let (_tmp, dir) = notes_dir();
        let result = run(&dir, NOTES, day(), &opts(&["Alice", "Bob"], 2, false)).unwrap();

        assert_eq!(result.filename.as_deref(), Some("03-09-2024.typ"));
        assert_eq!(result.outcome, Some(NoteOutcome::Written));
        let content = fs::read_to_string(dir.join("03-09-2024.typ")).unwrap();
        assert_eq!(content, "= *03-09-2024* _Alice & Bob_\n\n== \n\n== \n\n");
    }

    #[test]
    fn existing_note_is_left_alone() {
        let (_tmp, dir) = notes_dir();
        let first = run(&dir, NOTES, day(), &opts(&["First"], 3, false)).unwrap();
        let path = dir.join("03-09-2024.typ");
        fs::write(&path, "my edits").unwrap();

        let second = run(&dir, NOTES, day(), &opts(&["Second"], 1, false)).unwrap();
        assert_eq!(first.filename, second.filename);
        assert_eq!(second.outcome, Some(NoteOutcome::Existing));
        assert_eq!(fs::read_to_string(&path).unwrap(), "my edits");
        assert!(second.messages[0].content.contains("already exists"));
    }

    #[test]
    fn overwrite_replaces_edits() {
        let (_tmp, dir) = notes_dir();
        let path = dir.join("03-09-2024.typ");
        fs::write(&path, "my edits").unwrap();

        let result = run(&dir, NOTES, day(), &opts(&[], 1, true)).unwrap();
        assert_eq!(result.outcome, Some(NoteOutcome::Overwritten));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "= *03-09-2024* \n\n== \n\n"
        );
    }

    #[test]
    fn wrong_directory_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let result = run(tmp.path(), NOTES, day(), &opts(&["X"], 3, true)).unwrap();

        assert!(result.filename.is_none());
        assert!(result.outcome.is_none());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
        assert!(result.messages[0].content.contains(NOTES));
    }
}
