use crate::commands::guard::{guidance, in_notes_dir};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewDayError, Result};
use crate::format::{include_line, PAGE_BREAK};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct IncludeOptions {
    pub index_file: String,
    pub page_break: bool,
}

impl Default for IncludeOptions {
    fn default() -> Self {
        Self {
            index_file: crate::config::DEFAULT_INDEX_FILE.to_string(),
            page_break: true,
        }
    }
}

/// Whether the index file already contains the include line for `filename`.
pub fn is_included(index_path: &Path, filename: &str) -> Result<bool> {
    let file = File::open(index_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => NewDayError::IndexMissing {
            path: index_path.to_path_buf(),
        },
        _ => NewDayError::file(index_path, e),
    })?;

    let wanted = include_line(filename);
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| NewDayError::file(index_path, e))?;
        if line == wanted {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn run(cwd: &Path, notes_dir: &str, filename: &str, opts: &IncludeOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !in_notes_dir(cwd, notes_dir) {
        result.add_message(guidance(notes_dir));
        return Ok(result);
    }

    let index_path = cwd.join(&opts.index_file);
    if is_included(&index_path, filename)? {
        result.add_message(CmdMessage::info(format!(
            "File {} already included in {}!",
            filename, opts.index_file
        )));
        return Ok(result);
    }

    let mut block = format!("\n{}\n", include_line(filename));
    if opts.page_break {
        block.push_str(PAGE_BREAK);
        block.push('\n');
    }

    let mut index = OpenOptions::new()
        .append(true)
        .open(&index_path)
        .map_err(|e| NewDayError::file(&index_path, e))?;
    index
        .write_all(block.as_bytes())
        .map_err(|e| NewDayError::file(&index_path, e))?;
    debug!(index = %index_path.display(), filename, page_break = opts.page_break, "appended include");

    let notice = if opts.page_break {
        format!(
            "File {} appended to {} with page break!",
            filename, opts.index_file
        )
    } else {
        format!("File {} appended to {}!", filename, opts.index_file)
    };
    result.add_message(CmdMessage::success(notice));
    Ok(result.with_included(true))
}
