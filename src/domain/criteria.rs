//! Search criteria snapshotted from the filter form.

use serde::{Deserialize, Serialize};

/// Value sent for `publication_type` when the selector is empty.
pub const DEFAULT_PUBLICATION_TYPE: &str = "any";
/// Value sent for `sorting` when no radio is checked.
pub const DEFAULT_SORTING: &str = "newest";
/// Values of the sort-order radio group.
pub const SORTING_OPTIONS: [&str; 2] = [DEFAULT_SORTING, "oldest"];

/// The nine filter fields carried by [`SearchCriteria`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    Query,
    Title,
    Author,
    Affiliation,
    PublicationType,
    Tags,
    StartDate,
    EndDate,
    Sorting,
}

impl CriteriaField {
    pub const ALL: [CriteriaField; 9] = [
        CriteriaField::Query,
        CriteriaField::Title,
        CriteriaField::Author,
        CriteriaField::Affiliation,
        CriteriaField::PublicationType,
        CriteriaField::Tags,
        CriteriaField::StartDate,
        CriteriaField::EndDate,
        CriteriaField::Sorting,
    ];

    /// Payload key, which is also the element id (or radio group name) on the page.
    pub const fn key(self) -> &'static str {
        match self {
            CriteriaField::Query => "query",
            CriteriaField::Title => "title",
            CriteriaField::Author => "author",
            CriteriaField::Affiliation => "affiliation",
            CriteriaField::PublicationType => "publication_type",
            CriteriaField::Tags => "tags",
            CriteriaField::StartDate => "start_date",
            CriteriaField::EndDate => "end_date",
            CriteriaField::Sorting => "sorting",
        }
    }

    pub const fn default_value(self) -> &'static str {
        match self {
            CriteriaField::PublicationType => DEFAULT_PUBLICATION_TYPE,
            CriteriaField::Sorting => DEFAULT_SORTING,
            _ => "",
        }
    }
}

/// Flat record posted to the search endpoint. Built fresh for every search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub csrf_token: Option<String>,
    pub query: String,
    pub title: String,
    pub author: String,
    pub affiliation: String,
    pub publication_type: String,
    pub tags: String,
    pub start_date: String,
    pub end_date: String,
    pub sorting: String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            csrf_token: None,
            query: String::new(),
            title: String::new(),
            author: String::new(),
            affiliation: String::new(),
            publication_type: DEFAULT_PUBLICATION_TYPE.to_string(),
            tags: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            sorting: DEFAULT_SORTING.to_string(),
        }
    }
}

impl SearchCriteria {
    /// Builds criteria from a field lookup. Missing or empty values fall back
    /// to the field default; whitespace-only values are kept as typed.
    pub fn from_lookup<F>(csrf_token: Option<String>, mut lookup: F) -> Self
    where
        F: FnMut(CriteriaField) -> Option<String>,
    {
        let mut criteria = Self {
            csrf_token: csrf_token.filter(|token| !token.is_empty()),
            ..Self::default()
        };
        for field in CriteriaField::ALL {
            let value = lookup(field)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| field.default_value().to_string());
            *criteria.field_mut(field) = value;
        }
        criteria
    }

    pub fn field(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::Query => &self.query,
            CriteriaField::Title => &self.title,
            CriteriaField::Author => &self.author,
            CriteriaField::Affiliation => &self.affiliation,
            CriteriaField::PublicationType => &self.publication_type,
            CriteriaField::Tags => &self.tags,
            CriteriaField::StartDate => &self.start_date,
            CriteriaField::EndDate => &self.end_date,
            CriteriaField::Sorting => &self.sorting,
        }
    }

    fn field_mut(&mut self, field: CriteriaField) -> &mut String {
        match field {
            CriteriaField::Query => &mut self.query,
            CriteriaField::Title => &mut self.title,
            CriteriaField::Author => &mut self.author,
            CriteriaField::Affiliation => &mut self.affiliation,
            CriteriaField::PublicationType => &mut self.publication_type,
            CriteriaField::Tags => &mut self.tags,
            CriteriaField::StartDate => &mut self.start_date,
            CriteriaField::EndDate => &mut self.end_date,
            CriteriaField::Sorting => &mut self.sorting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let criteria = SearchCriteria::from_lookup(None, |_| None);

        assert_eq!(criteria, SearchCriteria::default());
        assert_eq!(criteria.publication_type, "any");
        assert_eq!(criteria.sorting, "newest");
    }

    #[test]
    fn empty_values_are_blank_and_whitespace_is_kept() {
        let criteria = SearchCriteria::from_lookup(Some(String::new()), |field| match field {
            CriteriaField::PublicationType => Some(String::new()),
            CriteriaField::Title => Some("  ".to_string()),
            CriteriaField::Query => Some("genomics".to_string()),
            _ => None,
        });

        assert_eq!(criteria.csrf_token, None);
        assert_eq!(criteria.publication_type, "any");
        assert_eq!(criteria.title, "  ");
        assert_eq!(criteria.query, "genomics");
    }

    #[test]
    fn serializes_exactly_nine_fields_plus_token() {
        let criteria = SearchCriteria::from_lookup(Some("tok".to_string()), |field| {
            (field == CriteriaField::Sorting).then(|| "oldest".to_string())
        });

        let value = serde_json::to_value(&criteria).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 10);
        assert_eq!(object["csrf_token"], "tok");
        assert_eq!(object["sorting"], "oldest");
        for field in CriteriaField::ALL {
            assert!(object.contains_key(field.key()));
        }
    }

    #[test]
    fn absent_token_serializes_as_null() {
        let value = serde_json::to_value(SearchCriteria::default()).unwrap();

        assert!(value["csrf_token"].is_null());
    }
}
