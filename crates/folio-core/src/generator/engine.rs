//! Batch generation of synthetic project records

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use tracing::debug;

use super::resolver::{resolve, slugify, truncate};
use super::templates::{CategoryTemplate, template_for};
use super::types::{Category, Impact, ProjectRecord, ProjectStats, ProjectStatus};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};

/// Which generated text a template came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Title,
    Description,
    LongDescription,
}

impl std::fmt::Display for TemplateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Description => write!(f, "description"),
            Self::LongDescription => write!(f, "longDescription"),
        }
    }
}

/// A template token that had no candidates and was emitted literally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedToken {
    pub record_id: String,
    pub field: TemplateField,
    pub token: String,
}

/// Records from one batch together with the tokens that could not be resolved
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub records: Vec<ProjectRecord>,
    pub unresolved: Vec<UnresolvedToken>,
}

/// Synthesizes project records from the static category templates
#[derive(Debug, Clone, Default)]
pub struct ProjectGenerator {
    config: GeneratorConfig,
}

impl ProjectGenerator {
    /// Create a generator after validating its configuration
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate exactly `count` records
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ProjectRecord>> {
        self.generate_with_report(count, rng).map(|report| report.records)
    }

    /// Generate exactly `count` records and collect unresolved template tokens
    pub fn generate_with_report<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        if count > self.config.max_batch {
            return Err(Error::BatchTooLarge {
                requested: count,
                max: self.config.max_batch,
            });
        }

        debug!(count, "Generating synthetic project records");

        let mut records = Vec::with_capacity(count);
        let mut unresolved = Vec::new();
        for ordinal in 0..count {
            let (record, tokens) = self.generate_record(ordinal, rng);
            records.push(record);
            unresolved.extend(tokens);
        }

        if !unresolved.is_empty() {
            debug!(
                unresolved = unresolved.len(),
                "Some template tokens had no candidates and were left verbatim"
            );
        }

        Ok(GenerationReport {
            records,
            unresolved,
        })
    }

    /// Generate with a ChaCha RNG seeded from `seed`; equal seeds give equal batches
    pub fn generate_seeded(&self, count: usize, seed: u64) -> Result<GenerationReport> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with_report(count, &mut rng)
    }

    /// Build the record at `ordinal` within a batch
    pub fn generate_record<R: Rng + ?Sized>(
        &self,
        ordinal: usize,
        rng: &mut R,
    ) -> (ProjectRecord, Vec<UnresolvedToken>) {
        let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
        let template = template_for(category);
        let id = format!("{}{}", self.config.id_prefix, ordinal + self.config.id_offset);

        let title = resolve(pick(template.titles, rng), template, rng);
        let description = resolve(pick(template.descriptions, rng), template, rng);
        let long_form = resolve(pick(template.long_descriptions, rng), template, rng);

        let mut unresolved = Vec::new();
        for (field, tokens) in [
            (TemplateField::Title, &title.unresolved),
            (TemplateField::Description, &description.unresolved),
            (TemplateField::LongDescription, &long_form.unresolved),
        ] {
            for token in tokens {
                debug!(record_id = %id, %field, token = %token, "Template token left unresolved");
                unresolved.push(UnresolvedToken {
                    record_id: id.clone(),
                    field,
                    token: token.clone(),
                });
            }
        }

        let technologies = sample_technologies(template, rng);

        let p = &self.config.probabilities;
        let slug = slugify(&title.text);
        let github_url = rng
            .gen_bool(p.github)
            .then(|| format!("https://github.com/{}/{}", self.config.github_owner, slug));
        let live_url = rng
            .gen_bool(p.live)
            .then(|| format!("https://{}.{}", slug, self.config.live_domain));
        let demo_url = rng
            .gen_bool(p.demo)
            .then(|| format!("https://{}/{}", self.config.demo_domain, slug));

        let featured = rng.gen_bool(p.featured);
        let ai_powered = category == Category::AiMl || rng.gen_bool(p.ai_powered);

        let impact = Impact {
            users: rng
                .gen_bool(p.impact_users)
                .then(|| sample_range(template.impact.users, rng)),
            performance: rng
                .gen_bool(p.impact_performance)
                .then(|| pick(template.impact.performance, rng).to_string()),
            savings: rng
                .gen_bool(p.impact_savings)
                .then(|| pick(template.impact.savings, rng).to_string()),
            reliability: rng
                .gen_bool(p.impact_reliability)
                .then(|| pick(template.impact.reliability, rng).to_string()),
        };

        let stats = if github_url.is_some() {
            ProjectStats {
                stars: sample_range(template.stats.stars, rng),
                forks: sample_range(template.stats.forks, rng),
                commits: sample_range(template.stats.commits, rng),
                contributors: sample_range(template.stats.contributors, rng),
            }
        } else {
            ProjectStats::default()
        };

        let status = ProjectStatus::ALL[rng.gen_range(0..ProjectStatus::ALL.len())];

        let record = ProjectRecord {
            id,
            description: truncate(&description.text, self.config.description_max_len),
            long_description: format!("{} {}", description.text, long_form.text),
            title: title.text,
            technologies,
            github_url,
            live_url,
            demo_url,
            featured,
            category,
            impact,
            stats,
            status,
            ai_powered,
        };

        (record, unresolved)
    }
}

/// Generate `count` records with the default configuration
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Vec<ProjectRecord>> {
    ProjectGenerator::default().generate(count, rng)
}

/// RNG for a batch: seeded when a seed is given, from OS entropy otherwise
pub fn batch_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn pick<R: Rng + ?Sized>(items: &'static [&'static str], rng: &mut R) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn sample_range<R: Rng + ?Sized>((min, max): (u32, u32), rng: &mut R) -> u32 {
    rng.gen_range(min..=max)
}

/// 2-4 pools, 2-5 entries from each, merged into a set
fn sample_technologies<R: Rng + ?Sized>(
    template: &CategoryTemplate,
    rng: &mut R,
) -> BTreeSet<String> {
    let pool_count = rng.gen_range(2..=4usize).min(template.tech_pools.len());
    let mut technologies = BTreeSet::new();
    for pool in template.tech_pools.choose_multiple(rng, pool_count) {
        let take = rng.gen_range(2..=5usize).min(pool.entries.len());
        technologies.extend(pool.entries.choose_multiple(rng, take).map(|t| t.to_string()));
    }
    technologies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::templates::TEMPLATES;

    fn generator() -> ProjectGenerator {
        ProjectGenerator::default()
    }

    #[test]
    fn test_generate_exact_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for count in [0, 1, 7, 250] {
            assert_eq!(generator().generate(count, &mut rng).unwrap().len(), count);
        }
    }

    #[test]
    fn test_batch_limit_is_enforced() {
        let config = GeneratorConfig {
            max_batch: 5,
            ..Default::default()
        };
        let generator = ProjectGenerator::new(config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(generator.generate(5, &mut rng).unwrap().len(), 5);
        let err = generator.generate(6, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::BatchTooLarge {
                requested: 6,
                max: 5
            }
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = GeneratorConfig::default();
        config.probabilities.featured = 2.0;
        assert!(ProjectGenerator::new(config).is_err());
    }

    #[test]
    fn test_id_offset_at_the_edge_of_the_id_range() {
        let overflowing = GeneratorConfig {
            id_offset: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            ProjectGenerator::new(overflowing),
            Err(Error::ConfigError(_))
        ));

        let config = GeneratorConfig {
            id_offset: usize::MAX - 10,
            max_batch: 10,
            ..Default::default()
        };
        let report = ProjectGenerator::new(config).unwrap().generate_seeded(10, 1).unwrap();
        assert_eq!(report.records.len(), 10);
        assert_eq!(report.records[0].id, format!("project-{}", usize::MAX - 10));
        assert_eq!(report.records[9].id, format!("project-{}", usize::MAX - 1));
    }

    #[test]
    fn test_ids_are_sequential_and_offset() {
        let report = generator().generate_seeded(5, 3).unwrap();
        let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["project-100", "project-101", "project-102", "project-103", "project-104"]
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generator().generate_seeded(50, 1234).unwrap();
        let b = generator().generate_seeded(50, 1234).unwrap();
        let c = generator().generate_seeded(50, 4321).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.unresolved, b.unresolved);
        assert_ne!(a.records, c.records);
    }

    #[test]
    fn test_urls_derive_from_title_slug() {
        let config = GeneratorConfig {
            probabilities: crate::config::Probabilities {
                github: 1.0,
                live: 1.0,
                demo: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let generator = ProjectGenerator::new(config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for record in generator.generate(40, &mut rng).unwrap() {
            let slug = slugify(&record.title);
            assert_eq!(
                record.github_url.as_deref(),
                Some(format!("https://github.com/folio-labs/{}", slug).as_str())
            );
            assert_eq!(
                record.live_url.as_deref(),
                Some(format!("https://{}.vercel.app", slug).as_str())
            );
            assert_eq!(
                record.demo_url.as_deref(),
                Some(format!("https://demo.folio.dev/{}", slug).as_str())
            );
            assert!(record.stats.stars > 0);
            assert!(record.stats.contributors > 0);
        }
    }

    #[test]
    fn test_zero_probabilities_disable_optional_fields() {
        let config = GeneratorConfig {
            probabilities: crate::config::Probabilities {
                featured: 0.0,
                github: 0.0,
                live: 0.0,
                demo: 0.0,
                ai_powered: 0.0,
                impact_users: 0.0,
                impact_performance: 0.0,
                impact_savings: 0.0,
                impact_reliability: 0.0,
            },
            ..Default::default()
        };
        let generator = ProjectGenerator::new(config).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for record in generator.generate(100, &mut rng).unwrap() {
            assert!(!record.featured);
            assert!(record.github_url.is_none());
            assert!(record.live_url.is_none());
            assert!(record.demo_url.is_none());
            assert!(record.impact.is_empty());
            assert_eq!(record.stats, ProjectStats::default());
            assert_eq!(record.ai_powered, record.category == Category::AiMl);
        }
    }

    #[test]
    fn test_stats_and_impact_stay_in_category_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        for record in generator().generate(300, &mut rng).unwrap() {
            let template = template_for(record.category);
            let in_range = |v: u32, (min, max): (u32, u32)| v >= min && v <= max;

            if record.github_url.is_some() {
                assert!(in_range(record.stats.stars, template.stats.stars));
                assert!(in_range(record.stats.forks, template.stats.forks));
                assert!(in_range(record.stats.commits, template.stats.commits));
                assert!(in_range(record.stats.contributors, template.stats.contributors));
            }
            if let Some(users) = record.impact.users {
                assert!(in_range(users, template.impact.users));
            }
            if let Some(performance) = &record.impact.performance {
                assert!(template.impact.performance.contains(&performance.as_str()));
            }
            if let Some(savings) = &record.impact.savings {
                assert!(template.impact.savings.contains(&savings.as_str()));
            }
            if let Some(reliability) = &record.impact.reliability {
                assert!(template.impact.reliability.contains(&reliability.as_str()));
            }
        }
    }

    #[test]
    fn test_technology_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for template in &TEMPLATES {
            for _ in 0..50 {
                let technologies = sample_technologies(template, &mut rng);
                // at least two pools of at least two entries each; pools may overlap
                assert!(technologies.len() >= 2);
                assert!(technologies.len() <= 20);
                assert!(technologies.iter().all(|t| template.owns_technology(t)));
            }
        }
    }

    #[test]
    fn test_long_description_extends_description() {
        let report = generator().generate_seeded(60, 8).unwrap();
        for record in &report.records {
            let stem = record.description.trim_end_matches("...");
            assert!(record.long_description.starts_with(stem));
            assert!(record.long_description.len() > record.description.len() - 3);
        }
    }

    #[test]
    fn test_unresolved_tokens_are_reported_and_left_literal() {
        let report = generator().generate_seeded(400, 21).unwrap();
        assert!(!report.unresolved.is_empty());

        for token in &report.unresolved {
            assert_eq!(token.token, "organization");
            assert_eq!(token.field, TemplateField::Description);
            let record = report
                .records
                .iter()
                .find(|r| r.id == token.record_id)
                .unwrap();
            assert_eq!(record.category, Category::SocialImpact);
            assert!(record.long_description.contains("{organization}"));
        }
    }

    #[test]
    fn test_free_function_uses_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let records = generate(3, &mut rng).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records[0].id.starts_with("project-"));
    }

    #[test]
    fn test_batch_rng_seeded_is_deterministic() {
        let a: u64 = batch_rng(Some(5)).gen_range(0..u64::MAX);
        let b: u64 = batch_rng(Some(5)).gen_range(0..u64::MAX);
        assert_eq!(a, b);
    }
}
