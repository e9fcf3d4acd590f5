use std::collections::HashMap;

/// Filter condition for a single field, parsed from `filter[field]=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.conditions
            .iter()
            .find(|condition| condition.field == field)
            .map(|condition| condition.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub offset: u64,
    pub limit: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0) as u64,
            limit: limit.unwrap_or(20).clamp(1, 100) as u64, // Default 20, max 100
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parses `filter[field]=value`, `offset` and `limit`; anything else is
    /// ignored.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::new();
        let mut offset: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[")
                && let Some(field) = filter_key.strip_suffix(']')
                && !field.is_empty()
                && !field.contains('[')
            {
                filter.conditions.push(FilterCondition {
                    field: field.to_string(),
                    value: value.clone(),
                });
            } else if key == "offset" {
                if let Ok(val) = value.parse::<i64>() {
                    offset = Some(val);
                }
            } else if key == "limit"
                && let Ok(val) = value.parse::<i64>()
            {
                limit = Some(val);
            }
        }

        Self {
            filter,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}
