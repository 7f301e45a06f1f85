//! # Query Parameter Parsing
//!
//! Book listing parameters arrive as raw query-string values. Nothing here
//! rejects a request: values that do not parse simply switch their stage off.

use serde::{Deserialize, Serialize};

/// Raw book listing parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookQuery {
    /// Case-insensitive substring of the title
    #[serde(default)]
    pub title: Option<String>,

    /// Case-insensitive substring of the author's name
    #[serde(default)]
    pub author: Option<String>,

    /// Exact publication year
    #[serde(default)]
    pub year: Option<String>,

    /// `<field>_<direction>`, e.g. `year_desc`
    #[serde(default)]
    pub sort: Option<String>,

    #[serde(default)]
    pub limit: Option<String>,

    #[serde(default)]
    pub page: Option<String>,
}

impl BookQuery {
    /// Builds parameters from decoded query-string pairs. The first value of
    /// a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut query.title,
                "author" => &mut query.author,
                "year" => &mut query.year,
                "sort" => &mut query.sort,
                "limit" => &mut query.limit,
                "page" => &mut query.page,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Year filter value, if present and numeric
    pub fn year_filter(&self) -> Option<f64> {
        self.year.as_deref().and_then(|y| y.trim().parse::<f64>().ok())
    }

    /// Sort specification, if present and naming a known field
    pub fn sort_spec(&self) -> Option<SortSpec> {
        self.sort.as_deref().and_then(SortSpec::parse)
    }

    /// Page window, if a usable limit was given
    pub fn pagination(&self) -> Option<Pagination> {
        let limit = self.limit.as_deref().and_then(parse_integer)?.max(1);
        let page = self
            .page
            .as_deref()
            .and_then(parse_integer)
            .unwrap_or(1)
            .max(1);
        Some(Pagination {
            limit: limit as usize,
            page: page as usize,
        })
    }
}

/// Sortable book fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
    Id,
    AuthorId,
}

impl SortField {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SortField::Title),
            "year" => Some(SortField::Year),
            "id" => Some(SortField::Id),
            "authorId" => Some(SortField::AuthorId),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Parsed `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Parses `<field>[_<direction>]`. An unknown field yields `None`; an
    /// unknown or missing direction falls back to ascending.
    pub fn parse(value: &str) -> Option<Self> {
        let (field, direction) = match value.split_once('_') {
            Some((field, direction)) => (field, direction),
            None => (value, ""),
        };

        let field = SortField::parse(field)?;
        let direction = match direction {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Some(SortSpec { field, direction })
    }
}

/// 1-indexed page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Integer coercion for numeric parameters. Fractions are truncated.
fn parse_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    value
        .parse::<i64>()
        .ok()
        .or_else(|| {
            value
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        })
}
