//! Upload intake: extension checks, filename sanitising, and storage

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Extensions accepted by upload intake before any route-specific check
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf", "png", "jpg", "jpeg", "csv"];

fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Whether `filename` carries an extension from [`ALLOWED_EXTENSIONS`]
pub fn allowed_file(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    })
}

/// Whether `filename` has a `.csv` extension (case-insensitive)
pub fn is_csv(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Reduce a client-supplied filename to a safe single path component
///
/// Path separators become spaces, whitespace runs become `_`, anything
/// outside `[A-Za-z0-9._-]` is dropped, and leading/trailing `.`/`_` are
/// trimmed. Returns `None` if nothing is left.
///
/// Non-ASCII letters are dropped, not transliterated: `résumé.csv` becomes
/// `rsum.csv` where werkzeug's NFKD pass would give `resume.csv`.
pub fn secure_filename(filename: &str) -> Option<String> {
    let spaced = filename.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Intake check shared by every upload: a name with an allow-listed extension
pub fn check_upload(filename: Option<&str>) -> ServiceResult<&str> {
    let filename = filename.unwrap_or_default();
    if filename.is_empty() {
        return Err(ServiceError::validation("files must have a file name"));
    }
    if !allowed_file(filename) {
        return Err(ServiceError::validation("extension not allowed"));
    }
    Ok(filename)
}

/// Validate an import upload's filename, returning the sanitised name
///
/// Imports accept only `.csv` out of the intake allow-list.
pub fn check_csv_upload(filename: Option<&str>) -> ServiceResult<String> {
    let filename = check_upload(filename)?;
    if !is_csv(filename) {
        return Err(ServiceError::validation("extension not allowed"));
    }
    secure_filename(filename).ok_or_else(|| ServiceError::validation("file name not allowed"))
}

/// Write `data` under `dir` as `<uuid>_<filename>`, creating `dir` if needed
#[instrument(skip(data), fields(dir = %dir.display(), bytes = data.len()))]
pub async fn store_upload(dir: &Path, filename: &str, data: &[u8]) -> ServiceResult<PathBuf> {
    let filename = secure_filename(filename)
        .ok_or_else(|| ServiceError::validation("file name not allowed"))?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ServiceError::internal(format!("cannot create upload dir: {e}")))?;

    let path = dir.join(format!("{}_{filename}", Uuid::new_v4()));
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| ServiceError::internal(format!("cannot store upload: {e}")))?;

    debug!(path = %path.display(), "Upload stored");
    Ok(path)
}
