use std::{fs, path::Path, sync::Arc};

use shared::domain::Program;
use tracing::{info, warn};

use crate::error::LoadError;

pub fn parse_program(raw: &str) -> Result<Program, LoadError> {
    let program: Program = serde_json::from_str(raw)?;
    if program.days.is_empty() {
        warn!(program = %program.program_name, "program has no days; date range will be blank");
    }
    Ok(program)
}

/// Reads the schedule document once; the result is shared read-only from here on.
pub fn load_program(path: &Path) -> Result<Arc<Program>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&raw)?;
    info!(
        path = %path.display(),
        program = %program.program_name,
        days = program.days.len(),
        "loaded program document"
    );
    Ok(Arc::new(program))
}
