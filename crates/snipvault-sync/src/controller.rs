use snipvault_core::models::session::Session;
use snipvault_core::models::snippet::CreateSnippetDto;
use snipvault_storage::local::LocalStore;
use snipvault_storage::remote::RemoteStore;

use crate::error::SyncError;

/// Where the controller currently is in its lifecycle. Exposed so tests
/// and diagnostics can inspect it instead of guessing from side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// No migration pending or in flight.
    Idle,
    /// A session was observed and the edge check is running.
    Detecting,
    /// The batch transfer is in flight.
    Migrating,
}

/// What a single observation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No session present. The identity marker is reset, so a later
    /// login is a fresh edge.
    NoSession,
    /// This identity was already observed; no migration is triggered.
    /// Guards against re-running sync on every render of a logged-in
    /// session.
    AlreadyObserved,
    /// A migration is already in flight; this observation is dropped,
    /// not queued.
    InFlight,
    /// Login edge detected but the local store was empty. No remote
    /// call; the edge is consumed.
    NothingToMigrate,
    /// All local records were committed remotely and the local slot was
    /// cleared.
    Migrated { count: u64 },
}

/// Detects the no-identity → identity edge and migrates local records to
/// the remote store at most once per edge.
///
/// The identity marker only advances when an observation fully succeeds,
/// so a failed migration leaves the controller re-triggerable and the
/// local data intact. An observation of a different identity than the
/// one recorded counts as a fresh edge.
#[derive(Debug)]
pub struct SyncController {
    local: LocalStore,
    observed_identity: Option<String>,
    state: SyncState,
}

impl SyncController {
    pub fn new(local: LocalStore) -> Self {
        Self {
            local,
            observed_identity: None,
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn observed_identity(&self) -> Option<&str> {
        self.observed_identity.as_deref()
    }

    /// Feed one authentication-state observation to the controller.
    ///
    /// On the login edge this reads the local store, ships everything to
    /// the remote store as one atomic batch (local ids and owner fields
    /// stripped), and clears the local slot only after the server
    /// confirms the commit. Order matters: a failure at any point before
    /// the clear leaves every local record where it was.
    pub async fn observe(
        &mut self,
        session: Option<&Session>,
        remote: &RemoteStore,
    ) -> Result<SyncOutcome, SyncError> {
        if self.state == SyncState::Migrating {
            return Ok(SyncOutcome::InFlight);
        }

        let Some(session) = session else {
            self.observed_identity = None;
            self.state = SyncState::Idle;
            return Ok(SyncOutcome::NoSession);
        };

        if self.observed_identity.as_deref() == Some(session.identity()) {
            return Ok(SyncOutcome::AlreadyObserved);
        }

        self.state = SyncState::Detecting;
        let local_snippets = self.local.read();
        if local_snippets.is_empty() {
            self.observed_identity = Some(session.identity().to_string());
            self.state = SyncState::Idle;
            return Ok(SyncOutcome::NothingToMigrate);
        }

        self.state = SyncState::Migrating;
        let batch: Vec<CreateSnippetDto> = local_snippets
            .iter()
            .map(CreateSnippetDto::from_snippet)
            .collect();

        tracing::info!(
            identity = session.identity(),
            count = batch.len(),
            "migrating local snippets to remote store"
        );

        match remote.batch_create(&batch).await {
            Ok(count) => {
                let cleared = self.local.write(&[]);
                self.observed_identity = Some(session.identity().to_string());
                self.state = SyncState::Idle;
                match cleared {
                    Ok(()) => {
                        tracing::info!(count, "migration committed, local store cleared");
                        Ok(SyncOutcome::Migrated { count })
                    }
                    Err(e) => Err(SyncError::ClearLocal(e)),
                }
            }
            Err(e) => {
                // Marker not advanced: the next observed login edge retries.
                self.state = SyncState::Idle;
                tracing::warn!(error = %e, "migration failed, local store left untouched");
                Err(SyncError::Migration(e))
            }
        }
    }
}
