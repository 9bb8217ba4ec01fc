// In-memory implementations for testing
//
// Provides an in-memory dispatch store that can be injected as ServerDeps,
// so action tests run without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use super::{BaseAvailabilityRegistry, BaseHelpLedger, ServerDeps};
use crate::common::{Coordinates, HelpRequestId, UserId};
use crate::domains::availability::models::{AvailabilityState, VolunteerAvailability};
use crate::domains::help::models::{
    AssignOutcome, CompleteOutcome, HelpRequest, HelpRequestWithVolunteer, HelpStatus,
    PatientHelpRecord,
};

// =============================================================================
// In-Memory Dispatch Store
// =============================================================================

#[derive(Default)]
struct DispatchState {
    helps: HashMap<HelpRequestId, HelpRequest>,
    availability: HashMap<UserId, VolunteerAvailability>,
    user_names: HashMap<UserId, String>,
}

/// Both storage traits over one mutex, so lifecycle transitions are atomic
/// just like the transactional Postgres implementations.
pub struct InMemoryDispatch {
    state: Mutex<DispatchState>,
}

impl InMemoryDispatch {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(DispatchState::default()),
        })
    }

    /// Register a display name for volunteer name resolution in reports.
    pub fn register_user(&self, id: UserId, name: &str) {
        self.state
            .lock()
            .unwrap()
            .user_names
            .insert(id, name.to_string());
    }
}

/// ServerDeps wired entirely to one shared in-memory store.
pub fn in_memory_deps() -> (ServerDeps, Arc<InMemoryDispatch>) {
    let store = InMemoryDispatch::new();
    let deps = ServerDeps::new(store.clone(), store.clone());
    (deps, store)
}

#[async_trait]
impl BaseHelpLedger for InMemoryDispatch {
    async fn create(&self, patient_id: UserId, location: Coordinates) -> Result<HelpRequest> {
        let now = Utc::now();
        let request = HelpRequest {
            id: HelpRequestId::new(),
            patient_id,
            latitude: location.latitude,
            longitude: location.longitude,
            status: HelpStatus::Pending.to_string(),
            volunteer_id: None,
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .unwrap()
            .helps
            .insert(request.id, request.clone());
        Ok(request)
    }

    async fn find_by_id(&self, id: HelpRequestId) -> Result<Option<HelpRequest>> {
        Ok(self.state.lock().unwrap().helps.get(&id).cloned())
    }

    async fn find_pending(&self) -> Result<Vec<HelpRequest>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .helps
            .values()
            .filter(|h| h.status == HelpStatus::Pending.to_string())
            .cloned()
            .collect())
    }

    async fn assign(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<AssignOutcome> {
        let mut state = self.state.lock().unwrap();
        let Some(request) = state.helps.get_mut(&id) else {
            return Ok(AssignOutcome::NotFound);
        };
        if request.status != HelpStatus::Pending.to_string() {
            return Ok(AssignOutcome::NoLongerAvailable);
        }
        request.status = HelpStatus::Assigned.to_string();
        request.volunteer_id = Some(volunteer_id);
        request.updated_at = Utc::now();
        let assigned = request.clone();
        if let Some(record) = state.availability.get_mut(&volunteer_id) {
            record.state = AvailabilityState::InService.to_string();
            record.updated_at = Utc::now();
        }
        Ok(AssignOutcome::Assigned(assigned))
    }

    async fn complete(&self, id: HelpRequestId, volunteer_id: UserId) -> Result<CompleteOutcome> {
        let mut state = self.state.lock().unwrap();
        let Some(request) = state.helps.get_mut(&id) else {
            return Ok(CompleteOutcome::NotFound);
        };
        if request.status != HelpStatus::Assigned.to_string() {
            return Ok(CompleteOutcome::NotCompletable);
        }
        if request.volunteer_id != Some(volunteer_id) {
            return Ok(CompleteOutcome::NotAssignee);
        }
        request.status = HelpStatus::Completed.to_string();
        request.updated_at = Utc::now();
        let completed = request.clone();
        if let Some(record) = state.availability.get_mut(&volunteer_id) {
            record.state = AvailabilityState::Available.to_string();
            record.updated_at = Utc::now();
        }
        Ok(CompleteOutcome::Completed(completed))
    }

    async fn find_assigned_to(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .helps
            .values()
            .filter(|h| {
                h.volunteer_id == Some(volunteer_id)
                    && h.status == HelpStatus::Assigned.to_string()
            })
            .cloned()
            .collect())
    }

    async fn find_completed_by(&self, volunteer_id: UserId) -> Result<Vec<HelpRequest>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .helps
            .values()
            .filter(|h| {
                h.volunteer_id == Some(volunteer_id)
                    && h.status == HelpStatus::Completed.to_string()
            })
            .cloned()
            .collect())
    }

    async fn patient_history(&self, patient_id: UserId) -> Result<Vec<PatientHelpRecord>> {
        let state = self.state.lock().unwrap();
        let mut records: Vec<PatientHelpRecord> = state
            .helps
            .values()
            .filter(|h| h.patient_id == patient_id)
            .map(|h| PatientHelpRecord {
                volunteer_name: h
                    .volunteer_id
                    .and_then(|v| state.user_names.get(&v).cloned()),
                help_date: h.created_at,
            })
            .collect();
        records.sort_by(|a, b| b.help_date.cmp(&a.help_date));
        Ok(records)
    }

    async fn find_all_with_volunteers(&self) -> Result<Vec<HelpRequestWithVolunteer>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<HelpRequestWithVolunteer> = state
            .helps
            .values()
            .map(|h| HelpRequestWithVolunteer {
                id: h.id,
                patient_id: h.patient_id,
                latitude: h.latitude,
                longitude: h.longitude,
                status: h.status.clone(),
                volunteer_id: h.volunteer_id,
                created_at: h.created_at,
                updated_at: h.updated_at,
                volunteer_name: h
                    .volunteer_id
                    .and_then(|v| state.user_names.get(&v).cloned()),
            })
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn reassign_patient(
        &self,
        old_patient_id: UserId,
        new_patient_id: UserId,
    ) -> Result<u64> {
        let mut state = self.state.lock().unwrap();
        let mut moved = 0;
        for request in state.helps.values_mut() {
            if request.patient_id == old_patient_id {
                request.patient_id = new_patient_id;
                moved += 1;
            }
        }
        Ok(moved)
    }
}

#[async_trait]
impl BaseAvailabilityRegistry for InMemoryDispatch {
    async fn upsert(
        &self,
        volunteer_id: UserId,
        state: AvailabilityState,
        location: Option<Coordinates>,
    ) -> Result<VolunteerAvailability> {
        let mut guard = self.state.lock().unwrap();
        let record = guard
            .availability
            .entry(volunteer_id)
            .or_insert_with(|| VolunteerAvailability {
                volunteer_id,
                state: state.to_string(),
                latitude: None,
                longitude: None,
                updated_at: Utc::now(),
            });
        record.state = state.to_string();
        if let Some(location) = location {
            record.latitude = Some(location.latitude);
            record.longitude = Some(location.longitude);
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn find(&self, volunteer_id: UserId) -> Result<Option<VolunteerAvailability>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .availability
            .get(&volunteer_id)
            .cloned())
    }
}
