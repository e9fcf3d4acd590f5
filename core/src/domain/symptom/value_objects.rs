use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::symptom::entities::Symptom;

pub struct CreateSymptomInput {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCategoryGroup {
    pub category: String,
    pub symptoms: Vec<Symptom>,
}

/// Groups symptoms by category, keeping categories sorted and names sorted
/// within each category.
pub fn group_by_category(mut symptoms: Vec<Symptom>) -> Vec<SymptomCategoryGroup> {
    symptoms.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut groups: Vec<SymptomCategoryGroup> = Vec::new();
    for symptom in symptoms {
        match groups.last_mut() {
            Some(group) if group.category == symptom.category => group.symptoms.push(symptom),
            _ => groups.push(SymptomCategoryGroup {
                category: symptom.category.clone(),
                symptoms: vec![symptom],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptom(name: &str, category: &str) -> Symptom {
        Symptom::new(name.to_string(), category.to_string(), String::new())
    }

    #[test]
    fn test_group_by_category() {
        let groups = group_by_category(vec![
            symptom("Fever", "General"),
            symptom("Shortness of Breath", "Respiratory"),
            symptom("Chest Pain", "Cardiovascular"),
            symptom("Cough", "Respiratory"),
            symptom("Fatigue", "General"),
        ]);

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Cardiovascular", "General", "Respiratory"]);

        let respiratory: Vec<&str> = groups[2].symptoms.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(respiratory, vec!["Cough", "Shortness of Breath"]);
        assert_eq!(groups[1].symptoms.len(), 2);
    }

    #[test]
    fn test_group_empty_catalog() {
        assert!(group_by_category(Vec::new()).is_empty());
    }
}
