use std::{collections::HashSet, sync::LazyLock};

use gray_matter::{engine::YAML, Matter};
use pulldown_cmark::{Options, Parser};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

pub static GLOBAL_CATALOG: LazyLock<Result<Catalog, ContentError>> = LazyLock::new(Catalog::load);

#[derive(Embed)]
#[folder = "content/projects"]
pub struct ProjectFiles;

#[derive(Deserialize, Debug)]
struct FrontMatter {
    order: u32,
    title: String,
    short_description: String,
    technologies: Vec<String>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    metrics: Vec<Metric>,
    images: Vec<String>,
    demo_url: String,
    code_url: String,
}

/// A single labelled figure shown on a project, e.g. `responseTime: <200ms`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn display_label(&self) -> String {
        humanize_label(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub short_description: String,
    /// Rendered HTML of the markdown body.
    pub full_description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub metrics: Vec<Metric>,
    pub images: Vec<String>,
    pub demo_url: String,
    pub code_url: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Project file {0} is not valid UTF-8")]
    Unreadable(String),
    #[error("Couldn't parse front matter in {0}")]
    FrontMatter(String),
    #[error("Project {0} has no images")]
    NoImages(String),
    #[error("Project id {0} is used more than once")]
    DuplicateId(String),
}

/// Parses one `content/projects/*.md` file. The id is the file stem.
pub fn parse_project(file_name: &str, content: &str) -> Result<ProjectRecord, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ContentError::FrontMatter(file_name.to_string()))?;
    let fm = parsed.data;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut full_description = String::new();
    pulldown_cmark::html::push_html(&mut full_description, parser);

    Ok(ProjectRecord {
        id: file_name
            .strip_suffix(".md")
            .unwrap_or(file_name)
            .to_string(),
        order: fm.order,
        title: fm.title,
        short_description: fm.short_description,
        full_description,
        technologies: fm.technologies,
        features: fm.features,
        metrics: fm.metrics,
        images: fm.images,
        demo_url: fm.demo_url,
        code_url: fm.code_url,
    })
}

/// The read-only, ordered set of projects shown in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Validates and orders the records. Every project must carry at least one
    /// image so the carousel always has something to show at index 0.
    pub fn new(mut projects: Vec<ProjectRecord>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for p in &projects {
            if p.images.is_empty() {
                return Err(ContentError::NoImages(p.id.clone()));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(ContentError::DuplicateId(p.id.clone()));
            }
        }
        projects.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(Self { projects })
    }

    pub fn load() -> Result<Self, ContentError> {
        let projects = ProjectFiles::iter()
            .filter(|name| name.ends_with(".md"))
            .map(|name| {
                let file = ProjectFiles::get(&name)
                    .ok_or_else(|| ContentError::Unreadable(name.to_string()))?;
                let content = std::str::from_utf8(&file.data)
                    .map_err(|_| ContentError::Unreadable(name.to_string()))?;
                parse_project(&name, content)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(projects)?;
        log::debug!("loaded {} projects", catalog.len());
        Ok(catalog)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn catalog() -> Result<&'static Catalog, ContentError> {
    GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
}

/// Turns an authored metric key into display text: `responseTime` -> `Response Time`.
pub fn humanize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for c in label.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            continue;
        }
        if c.is_uppercase() && !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        if out.is_empty() || out.ends_with(' ') {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(id: &str, images: usize, technologies: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            order: 0,
            title: format!("Project {id}"),
            short_description: "short".to_string(),
            full_description: "<p>full</p>".to_string(),
            technologies: technologies.iter().map(|s| s.to_string()).collect(),
            features: vec![],
            metrics: vec![Metric {
                label: "uptime".to_string(),
                value: "99.9%".to_string(),
            }],
            images: (0..images).map(|i| format!("Images/{id}-{i}.png")).collect(),
            demo_url: "#".to_string(),
            code_url: "#".to_string(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads_in_order() {
        let catalog = Catalog::load().expect("embedded content should be valid");
        let ids = catalog
            .projects()
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["recommendation-engine", "database-management"]);

        let rec = catalog.find("recommendation-engine").unwrap();
        assert_eq!(rec.images.len(), 5);
        assert_eq!(rec.images[4], "Images/5 copy.png");
        assert_eq!(rec.technologies.len(), 6);
        assert_eq!(rec.technologies[0], "Python");
        let labels = rec
            .metrics
            .iter()
            .map(|m| m.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["accuracy", "responseTime"]);
        assert_eq!(rec.metrics[1].value, "<200ms");
        assert!(rec
            .full_description
            .contains("<strong>K-Nearest Neighbors (KNN)</strong>"));

        let db = catalog.find("database-management").unwrap();
        assert_eq!(db.images.len(), 4);
        assert_eq!(db.code_url, "#");
    }

    #[test]
    fn test_global_catalog_matches_load() {
        let global = catalog().expect("global catalog should load");
        assert_eq!(global, &Catalog::load().unwrap());
    }

    #[test]
    fn test_parse_project_uses_file_stem() {
        let src = r##"---
order: 3
title: Tiny
short_description: A tiny project.
technologies: [Rust]
images: [Images/tiny.png]
demo_url: "#"
code_url: "#"
---
Just *one* paragraph.
"##;
        let p = parse_project("tiny-thing.md", src).unwrap();
        assert_eq!(p.id, "tiny-thing");
        assert_eq!(p.order, 3);
        assert!(p.features.is_empty());
        assert!(p.metrics.is_empty());
        assert_eq!(p.full_description.trim(), "<p>Just <em>one</em> paragraph.</p>");
    }

    #[test]
    fn test_parse_project_rejects_bad_front_matter() {
        let src = "---\ntitle: Missing everything else\n---\nbody\n";
        assert_eq!(
            parse_project("broken.md", src),
            Err(ContentError::FrontMatter("broken.md".to_string()))
        );
        assert_eq!(
            parse_project("plain.md", "no front matter at all"),
            Err(ContentError::FrontMatter("plain.md".to_string()))
        );
    }

    #[test]
    fn test_catalog_rejects_empty_images() {
        let res = Catalog::new(vec![record("a", 2, &[]), record("empty", 0, &[])]);
        assert_eq!(res, Err(ContentError::NoImages("empty".to_string())));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let res = Catalog::new(vec![record("a", 1, &[]), record("a", 3, &[])]);
        assert_eq!(res, Err(ContentError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_catalog_sorts_by_order_then_id() {
        let mut late = record("late", 1, &[]);
        late.order = 9;
        let catalog = Catalog::new(vec![late, record("b", 1, &[]), record("a", 1, &[])]).unwrap();
        let ids = catalog
            .projects()
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "late"]);
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_humanize_label() {
        assert_eq!(humanize_label("responseTime"), "Response Time");
        assert_eq!(humanize_label("accuracy"), "Accuracy");
        assert_eq!(humanize_label("p95_latency"), "P95 Latency");
        assert_eq!(humanize_label("uptime "), "Uptime");
        assert_eq!(humanize_label(""), "");
        let m = Metric {
            label: "dailyActiveUsers".to_string(),
            value: "1k".to_string(),
        };
        assert_eq!(m.display_label(), "Daily Active Users");
    }
}
