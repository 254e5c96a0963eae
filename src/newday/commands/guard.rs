use crate::commands::CmdMessage;
use std::path::Path;

/// True when `cwd` ends with the path components of `segment`.
pub fn in_notes_dir(cwd: &Path, segment: &str) -> bool {
    cwd.ends_with(Path::new(segment))
}

pub fn guidance(segment: &str) -> CmdMessage {
    CmdMessage::warning(format!("Please run under {} directory", segment))
}
