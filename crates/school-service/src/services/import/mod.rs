//! Bulk import pipeline
//!
//! Uploaded CSV -> rows -> validated records -> persisted users. The whole
//! file is parsed and checked before the first user is written; persistence
//! itself is row by row. Credentials are hashed on the blocking pool.

mod error;
mod reader;
mod record;

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::Path;

use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use school_core::entities::User;
use school_core::error::DomainError;
use school_core::value_objects::{ImportRole, UserId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub use error::ImportError;
pub use reader::{read_rows, Row};
pub use record::{required_columns, ImportRecord};

/// Outcome of a successful import
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub role: ImportRole,
    pub imported: usize,
    pub user_ids: Vec<UserId>,
}

/// Parse a role label, mapping failure to `ImportError::UnknownRole`
pub fn parse_role(label: &str) -> Result<ImportRole, ImportError> {
    ImportRole::parse(label).map_err(|_| ImportError::UnknownRole(label.to_string()))
}

/// Parse and validate a whole file without touching the store
pub fn parse_records(
    data: &[u8],
    role: ImportRole,
    max_rows: usize,
) -> Result<Vec<ImportRecord>, ImportError> {
    let rows = read_rows(data, &required_columns(role), max_rows)?;
    let records = rows
        .iter()
        .map(|row| ImportRecord::from_row(row, role))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen: HashMap<&str, u64> = HashMap::with_capacity(records.len());
    for record in &records {
        if seen.insert(record.email.as_str(), record.line).is_some() {
            return Err(ImportError::DuplicateEmail {
                line: record.line,
                email: record.email.clone(),
            });
        }
    }

    Ok(records)
}

/// Every row must name the importing admin's school (case-insensitive)
pub fn check_school(records: &[ImportRecord], school_name: &str) -> Result<(), ImportError> {
    match records
        .iter()
        .find(|record| !record.school_name.eq_ignore_ascii_case(school_name))
    {
        Some(record) => Err(ImportError::ForeignSchool {
            line: record.line,
            school: record.school_name.clone(),
        }),
        None => Ok(()),
    }
}

/// Import service
pub struct ImportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImportService<'a> {
    /// Create a new ImportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Import a stored upload on behalf of an admin of `school_name`
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn import_file(
        &self,
        path: &Path,
        role: ImportRole,
        school_name: &str,
    ) -> ServiceResult<ImportSummary> {
        let data = tokio::fs::read(path).await.map_err(ImportError::from)?;
        self.import_bytes(&data, role, school_name).await
    }

    /// Import CSV content for one role
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn import_bytes(
        &self,
        data: &[u8],
        role: ImportRole,
        school_name: &str,
    ) -> ServiceResult<ImportSummary> {
        let records = parse_records(data, role, self.ctx.storage().max_import_rows)
            .and_then(|records| check_school(&records, school_name).map(|()| records))
            .inspect_err(|e| {
                warn!(error = %e, role = %role, "Import rejected");
            })?;

        for record in &records {
            if self.ctx.user_repo().email_exists(&record.email).await? {
                warn!(line = record.line, role = %role, "Import rejected: email already in use");
                return Err(ImportError::DuplicateEmail {
                    line: record.line,
                    email: record.email.clone(),
                }
                .into());
            }
        }

        let hashes = self.hash_credentials(&records).await?;
        let users = records
            .into_iter()
            .zip(hashes)
            .map(|(record, hash)| build_user(record, hash))
            .collect::<ServiceResult<Vec<_>>>()?;

        let mut user_ids = Vec::with_capacity(users.len());
        for user in &users {
            self.ctx.user_repo().create(user).await?;
            user_ids.push(user.id);
        }

        info!(role = %role, imported = user_ids.len(), "Import completed");

        Ok(ImportSummary {
            role,
            imported: user_ids.len(),
            user_ids,
        })
    }

    /// Hash every credential, in record order, with at most one blocking task per core
    async fn hash_credentials(&self, records: &[ImportRecord]) -> ServiceResult<Vec<String>> {
        let workers = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
        let mut hashes = vec![String::new(); records.len()];
        let mut queue = records.iter().enumerate();
        let mut tasks = JoinSet::new();

        loop {
            while tasks.len() < workers {
                let Some((index, record)) = queue.next() else {
                    break;
                };
                let service = self.ctx.password_service().clone();
                let credential = record.credential.clone();
                tasks.spawn_blocking(move || (index, service.hash(&credential)));
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            let (index, hash) = joined
                .map_err(|e| ServiceError::internal(format!("credential hashing task failed: {e}")))?;
            hashes[index] = hash?;
        }

        debug!(hashed = hashes.len(), workers, "Import credentials hashed");
        Ok(hashes)
    }
}

fn build_user(record: ImportRecord, password_hash: String) -> ServiceResult<User> {
    let line = record.line;

    User::with_role(
        UserId::generate(),
        record.school_name,
        record.forename,
        record.surname,
        record.email,
        password_hash,
        record.role,
    )
    .map_err(|e| match e {
        DomainError::MissingField(column) => {
            ServiceError::from(ImportError::invalid(line, column, "must not be empty"))
        }
        other => ServiceError::from(other),
    })
}
