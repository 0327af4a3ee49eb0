use std::{fs::File, io::BufReader, path::Path};

use serde_json::Value;

use crate::foundation::error::{CheckError, CheckResult};

/// Read and parse the document at `path`.
///
/// The whole document is materialized; object keys keep their document order
/// so a reported feature serializes the way it was written.
#[tracing::instrument]
pub fn load_document(path: &Path) -> CheckResult<Value> {
    let file = File::open(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(BufReader::new(file)).map_err(|source| CheckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("document parsed");
    Ok(document)
}

pub(crate) fn parse_document(reader: impl std::io::Read) -> Result<Value, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
#[path = "../../tests/unit/document/load.rs"]
mod tests;
