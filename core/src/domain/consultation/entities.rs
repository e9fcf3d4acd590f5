use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    consultation::value_objects::ConsultationPatch,
    triage::entities::{Priority, SymptomSet, TriageAssessment},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationStatus {
    Pending,
    Assigned,
    Completed,
    /// Representable in storage; no operation moves a consultation here.
    Cancelled,
}

impl ConsultationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "pending",
            ConsultationStatus::Assigned => "assigned",
            ConsultationStatus::Completed => "completed",
            ConsultationStatus::Cancelled => "cancelled",
        }
    }

    pub fn has_doctor(&self) -> bool {
        matches!(
            self,
            ConsultationStatus::Assigned | ConsultationStatus::Completed
        )
    }
}

impl FromStr for ConsultationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ConsultationStatus::Pending),
            "assigned" => Ok(ConsultationStatus::Assigned),
            "completed" => Ok(ConsultationStatus::Completed),
            "cancelled" => Ok(ConsultationStatus::Cancelled),
            _ => Err(format!(
                "Invalid status: '{}'. Must be one of: pending, assigned, completed, cancelled",
                s
            )),
        }
    }
}

impl fmt::Display for ConsultationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Consultation {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub symptoms: Vec<String>,
    pub description: String,
    pub ai_recommendation: String,
    pub doctor_notes: String,
    pub priority: Priority,
    pub status: ConsultationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ConsultationConfig {
    pub patient_id: Uuid,
    pub symptoms: SymptomSet,
    pub description: String,
    pub assessment: TriageAssessment,
}

impl Consultation {
    pub fn new(config: ConsultationConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            patient_id: config.patient_id,
            doctor_id: None,
            symptoms: config.symptoms.into_vec(),
            description: config.description,
            ai_recommendation: config.assessment.recommendation,
            doctor_notes: String::new(),
            priority: config.assessment.priority,
            status: ConsultationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Unassigned and waiting for a doctor.
    pub fn is_open(&self) -> bool {
        self.status == ConsultationStatus::Pending && self.doctor_id.is_none()
    }

    pub fn is_assigned_to(&self, doctor_id: Uuid) -> bool {
        self.doctor_id == Some(doctor_id)
    }

    /// Patch binding this consultation to `doctor_id`.
    pub fn accept(&self, doctor_id: Uuid) -> Result<ConsultationPatch, CoreError> {
        if !self.is_open() {
            return Err(self.transition_error(ConsultationStatus::Assigned));
        }

        let (now, _) = generate_timestamp();
        Ok(ConsultationPatch {
            doctor_id: Some(doctor_id),
            status: Some(ConsultationStatus::Assigned),
            doctor_notes: None,
            updated_at: now,
        })
    }

    /// Patch closing this consultation with the assigned doctor's notes.
    pub fn complete(&self, doctor_id: Uuid, notes: &str) -> Result<ConsultationPatch, CoreError> {
        if self.status != ConsultationStatus::Assigned {
            return Err(self.transition_error(ConsultationStatus::Completed));
        }
        if !self.is_assigned_to(doctor_id) {
            return Err(CoreError::Forbidden(
                "only the assigned doctor can complete this consultation".to_string(),
            ));
        }
        if notes.trim().is_empty() {
            return Err(CoreError::Invalid(
                "doctor notes are required to complete a consultation".to_string(),
            ));
        }

        let (now, _) = generate_timestamp();
        Ok(ConsultationPatch {
            doctor_id: None,
            status: Some(ConsultationStatus::Completed),
            doctor_notes: Some(notes.to_string()),
            updated_at: now,
        })
    }

    pub fn apply(&mut self, patch: &ConsultationPatch) {
        if let Some(doctor_id) = patch.doctor_id {
            self.doctor_id = Some(doctor_id);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = &patch.doctor_notes {
            self.doctor_notes = notes.clone();
        }
        self.updated_at = patch.updated_at;
    }

    fn transition_error(&self, to: ConsultationStatus) -> CoreError {
        CoreError::InvalidTransition {
            from: self.status.to_string(),
            to: to.to_string(),
        }
    }
}
