//! Static template tables, one bundle per category
//!
//! Every table here is `'static` and read-only. Each category owns its own
//! placeholder candidates, technology pools, stat ranges and impact
//! candidates; the generator never reads one category's tables while
//! building a record of another.
//!
//! One Social Impact description template references `{organization}`, which
//! has no candidate list. It is emitted literally and reported as unresolved.

use super::types::Category;

/// Candidate values for one `{token}`
#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    pub token: &'static str,
    pub candidates: &'static [&'static str],
}

/// A named group of related technologies
#[derive(Debug, Clone, Copy)]
pub struct TechPool {
    pub name: &'static str,
    pub entries: &'static [&'static str],
}

/// Inclusive `(min, max)` bounds for repository statistics
#[derive(Debug, Clone, Copy)]
pub struct StatRanges {
    pub stars: (u32, u32),
    pub forks: (u32, u32),
    pub commits: (u32, u32),
    pub contributors: (u32, u32),
}

/// Candidate values for impact metrics
#[derive(Debug, Clone, Copy)]
pub struct ImpactTemplate {
    pub users: (u32, u32),
    pub performance: &'static [&'static str],
    pub savings: &'static [&'static str],
    pub reliability: &'static [&'static str],
}

/// Everything needed to synthesize records of one category
#[derive(Debug)]
pub struct CategoryTemplate {
    pub category: Category,
    pub titles: &'static [&'static str],
    pub descriptions: &'static [&'static str],
    pub long_descriptions: &'static [&'static str],
    pub placeholders: &'static [Placeholder],
    pub tech_pools: &'static [TechPool],
    pub stats: StatRanges,
    pub impact: ImpactTemplate,
}

impl CategoryTemplate {
    /// Candidate list for a token, if this category maps it
    pub fn candidates(&self, token: &str) -> Option<&'static [&'static str]> {
        self.placeholders
            .iter()
            .find(|p| p.token == token)
            .map(|p| p.candidates)
    }

    /// Whether a technology appears in any of this category's pools
    pub fn owns_technology(&self, technology: &str) -> bool {
        self.tech_pools
            .iter()
            .any(|pool| pool.entries.contains(&technology))
    }
}

/// Look up the template bundle for a category
pub fn template_for(category: Category) -> &'static CategoryTemplate {
    match category {
        Category::AiMl => &TEMPLATES[0],
        Category::DevOpsSre => &TEMPLATES[1],
        Category::Infrastructure => &TEMPLATES[2],
        Category::SocialImpact => &TEMPLATES[3],
    }
}

pub static TEMPLATES: [CategoryTemplate; 4] = [AI_ML, DEVOPS_SRE, INFRASTRUCTURE, SOCIAL_IMPACT];

// =============================================================================
// AI/ML
// =============================================================================

const AI_ML: CategoryTemplate = CategoryTemplate {
    category: Category::AiMl,
    titles: &[
        "{adjective} {aiDomain} Platform",
        "{aiDomain} {product} for {industry}",
        "Neural {product} Engine",
        "{adjective} {modelType} Toolkit",
        "{industry} {aiDomain} Assistant",
    ],
    descriptions: &[
        "A {adjective} {product} that applies {modelType} models to {aiTask} for {industry} teams, cutting manual review time and surfacing insights as they happen.",
        "An end-to-end {aiDomain} pipeline that trains and serves {modelType} models, enabling {aiTask} across {scale} of records.",
        "Research-grade {product} combining {modelType} architectures with {aiTask} to help {industry} organizations make faster, better-informed decisions.",
        "Production {aiDomain} service delivering {aiTask} with {modelType} models behind a {interface}.",
    ],
    long_descriptions: &[
        "The system ingests data from {dataSource}, runs feature engineering and {modelType} inference, and exposes results through a {interface}. Model quality is tracked continuously against held-out benchmarks and retraining is triggered automatically when drift is detected.",
        "Training runs are fully reproducible: datasets from {dataSource} are versioned, experiments are tracked end to end, and the best checkpoints are promoted to a {interface} with canary rollouts.",
        "Built for {scale} of records, the platform batches requests, caches embeddings and falls back to lighter {modelType} models under load so latency stays predictable.",
    ],
    placeholders: &[
        Placeholder {
            token: "adjective",
            candidates: &["Intelligent", "Adaptive", "Scalable", "Explainable", "Real-Time", "Federated"],
        },
        Placeholder {
            token: "aiDomain",
            candidates: &["Computer Vision", "NLP", "Recommendation", "Forecasting", "Anomaly Detection", "Speech Recognition"],
        },
        Placeholder {
            token: "product",
            candidates: &["Analyzer", "Copilot", "Classifier", "Insights Hub", "Search Engine", "Triage System"],
        },
        Placeholder {
            token: "industry",
            candidates: &["Healthcare", "Finance", "Retail", "Logistics", "Education", "Agriculture"],
        },
        Placeholder {
            token: "modelType",
            candidates: &["transformer", "graph neural network", "gradient-boosted", "diffusion", "retrieval-augmented", "convolutional"],
        },
        Placeholder {
            token: "aiTask",
            candidates: &["document understanding", "demand forecasting", "fraud detection", "semantic search", "image segmentation", "churn prediction"],
        },
        Placeholder {
            token: "scale",
            candidates: &["millions", "tens of millions", "billions", "hundreds of thousands"],
        },
        Placeholder {
            token: "dataSource",
            candidates: &["streaming event logs", "a lakehouse", "partner APIs", "IoT sensors", "clinical records"],
        },
        Placeholder {
            token: "interface",
            candidates: &["REST API", "gRPC service", "dashboard", "Slack bot", "browser extension"],
        },
    ],
    tech_pools: &[
        TechPool {
            name: "languages",
            entries: &["Python", "Rust", "TypeScript", "Julia", "Go"],
        },
        TechPool {
            name: "frameworks",
            entries: &["PyTorch", "TensorFlow", "JAX", "scikit-learn", "Hugging Face Transformers", "LangChain"],
        },
        TechPool {
            name: "data",
            entries: &["Pandas", "Polars", "Apache Spark", "DuckDB", "Ray"],
        },
        TechPool {
            name: "serving",
            entries: &["FastAPI", "Triton Inference Server", "BentoML", "ONNX Runtime", "vLLM"],
        },
        TechPool {
            name: "mlops",
            entries: &["MLflow", "Weights & Biases", "Kubeflow", "DVC", "Feast"],
        },
    ],
    stats: StatRanges {
        stars: (50, 5000),
        forks: (5, 800),
        commits: (120, 3000),
        contributors: (1, 40),
    },
    impact: ImpactTemplate {
        users: (1_000, 250_000),
        performance: &["40% faster inference", "3x training throughput", "92% model accuracy", "p99 latency under 80ms"],
        savings: &["$120K annual compute savings", "60% less manual labeling", "30 analyst hours saved weekly"],
        reliability: &["99.9% prediction uptime", "Zero-downtime model rollouts", "Automated drift alerts"],
    },
};

// =============================================================================
// DevOps/SRE
// =============================================================================

const DEVOPS_SRE: CategoryTemplate = CategoryTemplate {
    category: Category::DevOpsSre,
    titles: &[
        "{adjective} {opsDomain} Pipeline",
        "{platform} {opsDomain} Automation",
        "Self-Healing {opsDomain} Controller",
        "{opsTool} Observability Suite",
        "{adjective} Incident {product}",
    ],
    descriptions: &[
        "A {adjective} {product} that automates {opsTask} on {platform}, reducing toil for on-call engineers and shortening feedback loops.",
        "Unified {opsDomain} tooling built around {opsTool} that standardizes {opsTask} across {teamCount} engineering teams.",
        "Policy-driven {product} for {platform} that enforces {opsTask} guardrails and turns incidents into actionable runbooks.",
        "Lightweight {opsDomain} {product} giving every service golden signals, SLO tracking and {opsTask} out of the box.",
    ],
    long_descriptions: &[
        "Deployments flow through {opsTool}-backed stages with automatic rollbacks when error budgets burn too quickly. Every change is traced from commit to production so {teamCount} teams share a single view of release health.",
        "Alert noise was cut by correlating signals from {opsTool} and grouping related pages into a single incident. Runbooks are generated from past postmortems and linked directly from each alert.",
        "The controller reconciles desired state on {platform} every few seconds, repairs drifted resources and records each action for audit and postmortem review.",
    ],
    placeholders: &[
        Placeholder {
            token: "adjective",
            candidates: &["Zero-Touch", "Progressive", "GitOps-Driven", "Resilient", "Declarative", "Cost-Aware"],
        },
        Placeholder {
            token: "opsDomain",
            candidates: &["CI/CD", "Release", "Observability", "Alerting", "Chaos Engineering", "On-Call"],
        },
        Placeholder {
            token: "platform",
            candidates: &["Kubernetes", "AWS", "GCP", "Azure", "Nomad", "bare metal"],
        },
        Placeholder {
            token: "opsTool",
            candidates: &["Prometheus", "Grafana", "OpenTelemetry", "Argo CD", "Datadog", "PagerDuty"],
        },
        Placeholder {
            token: "product",
            candidates: &["Orchestrator", "Command Center", "Responder", "Dashboard", "Operator"],
        },
        Placeholder {
            token: "opsTask",
            candidates: &["canary deployments", "log aggregation", "capacity planning", "secret rotation", "SLO reporting", "dependency upgrades"],
        },
        Placeholder {
            token: "teamCount",
            candidates: &["5", "12", "30", "dozens of"],
        },
    ],
    tech_pools: &[
        TechPool {
            name: "languages",
            entries: &["Go", "Python", "Bash", "Rust", "TypeScript"],
        },
        TechPool {
            name: "ci_cd",
            entries: &["GitHub Actions", "GitLab CI", "Jenkins", "Argo CD", "Tekton", "Spinnaker"],
        },
        TechPool {
            name: "observability",
            entries: &["Prometheus", "Grafana", "Loki", "OpenTelemetry", "Jaeger", "Datadog"],
        },
        TechPool {
            name: "containers",
            entries: &["Docker", "Kubernetes", "Helm", "Kustomize", "Podman"],
        },
        TechPool {
            name: "incident",
            entries: &["PagerDuty", "Opsgenie", "Sentry", "Statuspage"],
        },
    ],
    stats: StatRanges {
        stars: (20, 2500),
        forks: (3, 400),
        commits: (200, 4000),
        contributors: (1, 25),
    },
    impact: ImpactTemplate {
        users: (50, 20_000),
        performance: &["Deploy time cut from 45 to 6 minutes", "5x faster incident triage", "MTTR reduced by 70%"],
        savings: &["$80K yearly cloud savings", "20 on-call hours saved per week", "35% lower CI spend"],
        reliability: &["99.95% availability", "Error budget burn halved", "Zero failed rollbacks"],
    },
};

// =============================================================================
// Infrastructure
// =============================================================================

const INFRASTRUCTURE: CategoryTemplate = CategoryTemplate {
    category: Category::Infrastructure,
    titles: &[
        "{adjective} {infraComponent} on {cloud}",
        "Multi-Region {infraComponent}",
        "{cloud} {infraComponent} Blueprint",
        "{adjective} Edge {infraComponent}",
        "Distributed {infraComponent} Mesh",
    ],
    descriptions: &[
        "A {adjective} {infraComponent} running on {cloud} that provisions {resource} through code and keeps environments consistent from dev to prod.",
        "Infrastructure-as-code modules for {cloud} covering {resource}, networking and identity, with policy checks baked into every plan.",
        "Horizontally scalable {infraComponent} that serves {throughput} while keeping {resource} costs predictable.",
        "Hardened {infraComponent} blueprint for {cloud} with encrypted {resource}, private networking and automated backups.",
    ],
    long_descriptions: &[
        "Each environment is described declaratively and reconciled continuously, so {resource} drift is caught before it causes outages. Modules are versioned and shared across teams through an internal registry.",
        "The {infraComponent} spreads load across availability zones on {cloud}, handles {throughput} at peak, and recovers from zone failures without manual intervention.",
        "Capacity is planned from real usage: autoscaling policies react to queue depth and latency, and idle {resource} are reclaimed nightly.",
    ],
    placeholders: &[
        Placeholder {
            token: "adjective",
            candidates: &["Serverless", "Highly Available", "Immutable", "Zero-Trust", "Autoscaling", "Cost-Optimized"],
        },
        Placeholder {
            token: "infraComponent",
            candidates: &["Data Platform", "API Gateway", "Service Mesh", "Object Store", "Message Bus", "Cache Layer"],
        },
        Placeholder {
            token: "cloud",
            candidates: &["AWS", "GCP", "Azure", "Cloudflare", "Hetzner", "on-prem"],
        },
        Placeholder {
            token: "resource",
            candidates: &["compute clusters", "storage volumes", "VPCs", "databases", "load balancers"],
        },
        Placeholder {
            token: "throughput",
            candidates: &["50K requests per second", "2 TB of daily ingest", "millions of messages per minute", "10K concurrent connections"],
        },
    ],
    tech_pools: &[
        TechPool {
            name: "iac",
            entries: &["Terraform", "Pulumi", "Ansible", "CloudFormation", "Crossplane"],
        },
        TechPool {
            name: "cloud",
            entries: &["AWS", "Google Cloud", "Azure", "Cloudflare Workers", "DigitalOcean"],
        },
        TechPool {
            name: "data_stores",
            entries: &["PostgreSQL", "Redis", "Apache Kafka", "Cassandra", "MinIO", "ClickHouse"],
        },
        TechPool {
            name: "networking",
            entries: &["Envoy", "NGINX", "Istio", "Linkerd", "WireGuard", "Consul"],
        },
        TechPool {
            name: "languages",
            entries: &["Go", "Rust", "HCL", "Python"],
        },
    ],
    stats: StatRanges {
        stars: (30, 3500),
        forks: (5, 600),
        commits: (150, 5000),
        contributors: (1, 35),
    },
    impact: ImpactTemplate {
        users: (500, 100_000),
        performance: &["4x higher throughput", "Cold starts under 100ms", "p95 latency down 55%"],
        savings: &["$250K annual infrastructure savings", "45% lower storage costs", "Provisioning time cut from days to minutes"],
        reliability: &["99.99% uptime", "Multi-region failover in under 30s", "RPO of 5 minutes"],
    },
};

// =============================================================================
// Social Impact
// =============================================================================

const SOCIAL_IMPACT: CategoryTemplate = CategoryTemplate {
    category: Category::SocialImpact,
    titles: &[
        "{cause} {product} for {community}",
        "Open {cause} Platform",
        "{community} {cause} Network",
        "{adjective} {cause} Tracker",
        "{adjective} {product} for {community}",
    ],
    descriptions: &[
        "A {adjective} {product} that connects {community} with {cause} resources, built with volunteers and community partners.",
        "Open-source {cause} platform helping {community} access {service} through a simple, accessible interface.",
        "Mobile-first {product} partnering with {organization} to deliver {service} to {community} in low-connectivity areas.",
        "Data-driven {cause} initiative that measures outcomes for {community} and shares them openly with funders and the public.",
    ],
    long_descriptions: &[
        "The project was co-designed with {community} through interviews and field testing. It works offline, supports several languages, and keeps personal data on the device unless users choose to share it.",
        "Volunteers coordinate {service} through a shared queue with SMS notifications, so requests are matched with helpers within hours instead of days.",
        "Outcome dashboards track reach and impact across regions, giving partners the evidence they need to scale {cause} programs that work.",
    ],
    placeholders: &[
        Placeholder {
            token: "adjective",
            candidates: &["Accessible", "Community-Led", "Inclusive", "Open", "Offline-First", "Volunteer-Powered"],
        },
        Placeholder {
            token: "cause",
            candidates: &["Food Security", "Education", "Climate Action", "Public Health", "Housing", "Digital Literacy"],
        },
        Placeholder {
            token: "product",
            candidates: &["Portal", "App", "Directory", "Hub", "Assistant"],
        },
        Placeholder {
            token: "community",
            candidates: &["Rural Families", "Refugees", "Students", "Seniors", "Local Nonprofits", "Small Farmers"],
        },
        Placeholder {
            token: "service",
            candidates: &["meal deliveries", "tutoring sessions", "legal aid", "health screenings", "job training"],
        },
    ],
    tech_pools: &[
        TechPool {
            name: "frontend",
            entries: &["React", "Next.js", "Svelte", "Flutter", "React Native"],
        },
        TechPool {
            name: "backend",
            entries: &["Node.js", "Django", "Ruby on Rails", "Supabase", "Firebase"],
        },
        TechPool {
            name: "data",
            entries: &["PostgreSQL", "SQLite", "PostGIS", "Metabase"],
        },
        TechPool {
            name: "messaging",
            entries: &["Twilio", "WhatsApp Business API", "SendGrid", "Matrix"],
        },
        TechPool {
            name: "languages",
            entries: &["TypeScript", "Python", "Dart", "Kotlin"],
        },
    ],
    stats: StatRanges {
        stars: (10, 1200),
        forks: (2, 250),
        commits: (80, 2000),
        contributors: (2, 60),
    },
    impact: ImpactTemplate {
        users: (200, 75_000),
        performance: &["Pages load in under 1s on 3G", "Request matching 10x faster", "Works fully offline"],
        savings: &["$40K saved for partner nonprofits", "1,200 volunteer hours coordinated", "Printing costs cut by 80%"],
        reliability: &["Available 24/7 via SMS", "99.5% uptime through peak season", "No data loss since launch"],
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::resolver::token_names;

    #[test]
    fn test_template_for_matches_category() {
        for category in Category::ALL {
            assert_eq!(template_for(category).category, category);
        }
    }

    #[test]
    fn test_every_category_has_enough_material() {
        for template in &TEMPLATES {
            assert!(!template.titles.is_empty());
            assert!(!template.descriptions.is_empty());
            assert!(!template.long_descriptions.is_empty());
            assert!(template.tech_pools.len() >= 4, "{}", template.category);
            for pool in template.tech_pools {
                assert!(pool.entries.len() >= 2, "{}/{}", template.category, pool.name);
            }
            for placeholder in template.placeholders {
                assert!(!placeholder.candidates.is_empty(), "{}", placeholder.token);
            }
        }
    }

    #[test]
    fn test_stat_and_impact_ranges_are_ordered() {
        for template in &TEMPLATES {
            let s = template.stats;
            for (min, max) in [s.stars, s.forks, s.commits, s.contributors, template.impact.users] {
                assert!(min <= max, "{}", template.category);
            }
            assert!(s.stars.0 > 0 && s.forks.0 > 0);
        }
    }

    #[test]
    fn test_only_organization_token_is_unmapped() {
        let mut unmapped = Vec::new();
        for template in &TEMPLATES {
            let all = template
                .titles
                .iter()
                .chain(template.descriptions)
                .chain(template.long_descriptions);
            for text in all {
                for token in token_names(text) {
                    if template.candidates(token).is_none() {
                        unmapped.push((template.category, token.to_string()));
                    }
                }
            }
        }
        assert_eq!(
            unmapped,
            vec![(Category::SocialImpact, "organization".to_string())]
        );
    }

    #[test]
    fn test_owns_technology() {
        let ai = template_for(Category::AiMl);
        assert!(ai.owns_technology("PyTorch"));
        assert!(!ai.owns_technology("Terraform"));
    }
}
