//! Project catalog: curated records padded with generated ones
//!
//! The catalog backs the paginated project list. Curated records always come
//! first, in the order they were authored, followed by generated padding.

use rand::Rng;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::info;

use crate::error::{Error, Result};
use crate::generator::{Category, ProjectGenerator, ProjectRecord, ProjectStatus};

/// Filters applied by [`Catalog::query`]
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub category: Option<Category>,
    pub status: Option<ProjectStatus>,
    pub featured_only: bool,
    pub ai_powered: Option<bool>,
    /// Case-insensitive exact technology name
    pub technology: Option<String>,
    /// Case-insensitive substring over title, description and technologies
    pub search: Option<String>,
    /// Move featured records to the front, keeping relative order otherwise
    pub featured_first: bool,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn with_ai_powered(mut self, ai_powered: bool) -> Self {
        self.ai_powered = Some(ai_powered);
        self
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn featured_first(mut self) -> Self {
        self.featured_first = true;
        self
    }

    fn matches(&self, record: &ProjectRecord) -> bool {
        self.category.is_none_or(|c| record.category == c)
            && self.status.is_none_or(|s| record.status == s)
            && (!self.featured_only || record.featured)
            && self.ai_powered.is_none_or(|ai| record.ai_powered == ai)
            && self
                .technology
                .as_deref()
                .is_none_or(|t| record.uses_technology(t))
            && self
                .search
                .as_deref()
                .is_none_or(|q| record.matches_text(q))
    }
}

/// One page of query results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub items: Vec<&'a ProjectRecord>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    /// Number of records matching the query across all pages
    pub total: usize,
    pub total_pages: usize,
}

impl Page<'_> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Aggregate counts over a catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_status: BTreeMap<ProjectStatus, usize>,
    pub featured: usize,
    pub ai_powered: usize,
    pub with_repository: usize,
    pub unique_technologies: usize,
    pub total_stars: u64,
}

/// Ordered collection of records with unique ids
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateProjectId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Curated records followed by generated padding up to `total` records
    pub fn padded<R: Rng + ?Sized>(
        curated: Vec<ProjectRecord>,
        total: usize,
        generator: &ProjectGenerator,
        rng: &mut R,
    ) -> Result<Self> {
        let curated_count = curated.len();
        let padding = total.saturating_sub(curated_count);

        let mut records = curated;
        records.extend(generator.generate(padding, rng)?);

        info!(
            curated = curated_count,
            generated = padding,
            "Built project catalog"
        );
        Self::new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Result<&ProjectRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    /// Records matching `query`, in catalog order (featured first if requested)
    pub fn query(&self, query: &ProjectQuery) -> Vec<&ProjectRecord> {
        let mut matches: Vec<&ProjectRecord> =
            self.records.iter().filter(|r| query.matches(r)).collect();
        if query.featured_first {
            matches.sort_by_key(|r| !r.featured);
        }
        matches
    }

    /// One 1-based page of query results. Pages past the end are empty.
    pub fn page(&self, query: &ProjectQuery, page: usize, per_page: usize) -> Result<Page<'_>> {
        if page == 0 {
            return Err(Error::InvalidInput("page numbers start at 1".to_string()));
        }
        if per_page == 0 {
            return Err(Error::InvalidInput(
                "per-page count must be greater than 0".to_string(),
            ));
        }

        let matches = self.query(query);
        let total = matches.len();
        let total_pages = total.div_ceil(per_page);
        let items = matches
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Ok(Page {
            items,
            page,
            per_page,
            total,
            total_pages,
        })
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            total: self.records.len(),
            ..Default::default()
        };
        let mut technologies = BTreeSet::new();

        for record in &self.records {
            *summary.by_category.entry(record.category).or_default() += 1;
            *summary.by_status.entry(record.status).or_default() += 1;
            summary.featured += usize::from(record.featured);
            summary.ai_powered += usize::from(record.ai_powered);
            summary.with_repository += usize::from(record.has_repository());
            summary.total_stars += u64::from(record.stats.stars);
            technologies.extend(record.technologies.iter().map(String::as_str));
        }
        summary.unique_technologies = technologies.len();

        summary
    }
}
