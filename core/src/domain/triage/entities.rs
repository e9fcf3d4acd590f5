use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Urgency assigned to a consultation when it is submitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!(
                "Invalid priority: '{}'. Must be one of: low, medium, high, urgent",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symptom names selected by a patient.
///
/// Duplicates are dropped (first occurrence kept); order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSet {
    names: Vec<String>,
}

impl SymptomSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !set.names.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn contains_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl From<Vec<String>> for SymptomSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

/// One row of the triage table: when `predicate` holds, the consultation
/// gets `priority` and `recommendation`.
#[derive(Clone, Copy)]
pub struct TriageRule {
    pub name: &'static str,
    pub priority: Priority,
    pub recommendation: &'static str,
    predicate: fn(&SymptomSet) -> bool,
}

impl TriageRule {
    pub const fn new(
        name: &'static str,
        priority: Priority,
        recommendation: &'static str,
        predicate: fn(&SymptomSet) -> bool,
    ) -> Self {
        Self {
            name,
            priority,
            recommendation,
            predicate,
        }
    }

    pub fn matches(&self, symptoms: &SymptomSet) -> bool {
        (self.predicate)(symptoms)
    }

    pub fn assess(&self) -> TriageAssessment {
        TriageAssessment {
            priority: self.priority,
            recommendation: self.recommendation.to_string(),
            rule: self.name,
        }
    }
}

impl fmt::Debug for TriageRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriageRule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageAssessment {
    pub priority: Priority,
    pub recommendation: String,
    /// Name of the rule that produced this assessment.
    pub rule: &'static str,
}
