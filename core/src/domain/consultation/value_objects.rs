use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    consultation::entities::{Consultation, ConsultationStatus},
    triage::entities::Priority,
};

pub struct CreateConsultationInput {
    pub symptoms: Vec<String>,
    pub description: String,
}

pub struct GetConsultationInput {
    pub consultation_id: Uuid,
}

pub struct AcceptConsultationInput {
    pub consultation_id: Uuid,
}

pub struct CompleteConsultationInput {
    pub consultation_id: Uuid,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct GetConsultationsFilter {
    pub status: Option<ConsultationStatus>,
    pub priority: Option<Priority>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Store-level query. Results are always ordered by `created_at`, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationQuery {
    pub patient_id: Option<Uuid>,
    pub doctor_id: Option<Uuid>,
    pub status: Option<ConsultationStatus>,
    pub priority: Option<Priority>,
    pub unassigned: bool,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl ConsultationQuery {
    pub fn by_patient(patient_id: Uuid) -> Self {
        Self {
            patient_id: Some(patient_id),
            ..Default::default()
        }
    }

    pub fn by_doctor(doctor_id: Uuid) -> Self {
        Self {
            doctor_id: Some(doctor_id),
            ..Default::default()
        }
    }

    pub fn open() -> Self {
        Self {
            status: Some(ConsultationStatus::Pending),
            unassigned: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, consultation: &Consultation) -> bool {
        self.patient_id
            .is_none_or(|patient_id| consultation.patient_id == patient_id)
            && self
                .doctor_id
                .is_none_or(|doctor_id| consultation.doctor_id == Some(doctor_id))
            && self
                .status
                .is_none_or(|status| consultation.status == status)
            && self
                .priority
                .is_none_or(|priority| consultation.priority == priority)
            && (!self.unassigned || consultation.doctor_id.is_none())
    }
}

impl From<GetConsultationsFilter> for ConsultationQuery {
    fn from(filter: GetConsultationsFilter) -> Self {
        Self {
            status: filter.status,
            priority: filter.priority,
            offset: filter.offset,
            limit: filter.limit,
            ..Default::default()
        }
    }
}

/// Partial update applied by the store in a single write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationPatch {
    pub doctor_id: Option<Uuid>,
    pub status: Option<ConsultationStatus>,
    pub doctor_notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCounts {
    pub pending: u64,
    pub assigned: u64,
    pub completed: u64,
    pub cancelled: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriorityCounts {
    pub urgent: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConsultationOverview {
    pub total: u64,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

impl ConsultationOverview {
    pub fn from_consultations<'a, I>(consultations: I) -> Self
    where
        I: IntoIterator<Item = &'a Consultation>,
    {
        let mut overview = Self::default();

        for consultation in consultations {
            overview.total += 1;

            match consultation.status {
                ConsultationStatus::Pending => overview.by_status.pending += 1,
                ConsultationStatus::Assigned => overview.by_status.assigned += 1,
                ConsultationStatus::Completed => overview.by_status.completed += 1,
                ConsultationStatus::Cancelled => overview.by_status.cancelled += 1,
            }

            match consultation.priority {
                Priority::Urgent => overview.by_priority.urgent += 1,
                Priority::High => overview.by_priority.high += 1,
                Priority::Medium => overview.by_priority.medium += 1,
                Priority::Low => overview.by_priority.low += 1,
            }
        }

        overview
    }
}
