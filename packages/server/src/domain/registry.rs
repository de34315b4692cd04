//! ParticipantRegistry: the set of active participants.
//!
//! Mutations (`join`, `heartbeat`, `leave`, `evict_stale`) share one critical
//! section per registry so the uniqueness check and the write it guards cannot
//! interleave with another mutation. Reads go straight to the repository.

use std::{sync::Arc, time::Duration};

use lobby_shared::time::{Clock, duration_to_millis};
use tokio::sync::Mutex;

use super::{
    Participant, ParticipantName, ParticipantRepository, RegistryJoinError, RegistryLookupError,
    RepositoryError, Timestamp,
};

/// Registry of active participants
pub struct ParticipantRegistry {
    repository: Arc<dyn ParticipantRepository>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl ParticipantRegistry {
    /// Create a registry backed by `repository`, reading time from `clock`
    pub fn new(repository: Arc<dyn ParticipantRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Current time according to the injected clock
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }

    /// Register a new participant.
    ///
    /// # Errors
    ///
    /// Returns `RegistryJoinError::AlreadyRegistered` if an active participant has
    /// the same name; the registry is left unchanged.
    pub async fn join(&self, name: ParticipantName) -> Result<Participant, RegistryJoinError> {
        let _guard = self.write_lock.lock().await;

        if self.repository.find(&name).await?.is_some() {
            return Err(RegistryJoinError::AlreadyRegistered(name.into_string()));
        }

        let participant = Participant::new(name, self.now());
        self.repository.insert(participant.clone()).await?;
        Ok(participant)
    }

    /// Refresh `last_seen` for an active participant.
    ///
    /// `last_seen` never moves backwards, even if the clock does.
    ///
    /// # Errors
    ///
    /// Returns `RegistryLookupError::NotRegistered` if no active participant matches.
    pub async fn heartbeat(
        &self,
        name: &ParticipantName,
    ) -> Result<Participant, RegistryLookupError> {
        let _guard = self.write_lock.lock().await;

        let current = self
            .repository
            .find(name)
            .await?
            .ok_or_else(|| RegistryLookupError::NotRegistered(name.to_string()))?;

        let last_seen = self.now().max(current.last_seen);
        self.repository
            .touch(name, last_seen)
            .await?
            .ok_or_else(|| RegistryLookupError::NotRegistered(name.to_string()))
    }

    /// Remove an active participant on explicit leave.
    ///
    /// # Errors
    ///
    /// Returns `RegistryLookupError::NotRegistered` if no active participant matches.
    pub async fn leave(&self, name: &ParticipantName) -> Result<Participant, RegistryLookupError> {
        let _guard = self.write_lock.lock().await;

        self.repository
            .remove(name)
            .await?
            .ok_or_else(|| RegistryLookupError::NotRegistered(name.to_string()))
    }

    /// Whether a participant with this exact name is active
    pub async fn is_active(&self, name: &ParticipantName) -> Result<bool, RepositoryError> {
        Ok(self.repository.find(name).await?.is_some())
    }

    /// Active participants in registration order
    pub async fn list_active(&self) -> Result<Vec<Participant>, RepositoryError> {
        self.repository.list().await
    }

    /// Remove every participant whose silence has reached `threshold`.
    ///
    /// A participant is evicted iff `now - last_seen >= threshold`. Returns the
    /// evicted names in registration order.
    pub async fn evict_stale(
        &self,
        now: Timestamp,
        threshold: Duration,
    ) -> Result<Vec<ParticipantName>, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let threshold_millis = duration_to_millis(threshold);
        let stale: Vec<ParticipantName> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|p| p.is_stale(now, threshold_millis))
            .map(|p| p.name)
            .collect();

        let mut evicted = Vec::with_capacity(stale.len());
        for name in stale {
            if self.repository.remove(&name).await?.is_some() {
                evicted.push(name);
            }
        }
        Ok(evicted)
    }
}
