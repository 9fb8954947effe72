use crate::content::ProjectRecord;

/// How many technology badges a card shows before collapsing the rest.
pub const CARD_TECH_LIMIT: usize = 3;

/// The view-ready shape of one gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary<'a> {
    pub id: &'a str,
    /// 1-based position in the gallery.
    pub position: usize,
    pub cover_image: Option<&'a str>,
    pub title: &'a str,
    pub short_description: &'a str,
    pub technologies: &'a [String],
    pub tech_overflow: Option<String>,
    pub headline_metric: Option<&'a str>,
    pub image_overflow: Option<String>,
}

impl<'a> CardSummary<'a> {
    pub fn new(position: usize, project: &'a ProjectRecord) -> Self {
        let shown = project.technologies.len().min(CARD_TECH_LIMIT);
        Self {
            id: &project.id,
            position,
            cover_image: project.images.first().map(String::as_str),
            title: &project.title,
            short_description: &project.short_description,
            technologies: &project.technologies[..shown],
            tech_overflow: more_badge(project.technologies.len(), CARD_TECH_LIMIT),
            headline_metric: project.metrics.first().map(|m| m.value.as_str()),
            image_overflow: more_badge(project.images.len(), 1),
        }
    }
}

/// Cards for every project, in catalog order.
pub fn cards(projects: &[ProjectRecord]) -> Vec<CardSummary<'_>> {
    projects
        .iter()
        .enumerate()
        .map(|(i, p)| CardSummary::new(i + 1, p))
        .collect()
}

fn more_badge(total: usize, shown: usize) -> Option<String> {
    (total > shown).then(|| format!("+{} more", total - shown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::record;

    #[test]
    fn test_tech_overflow() {
        let p = record("many", 1, &["SQL", "PostgreSQL", "MySQL", "Schema", "PHP"]);
        let card = CardSummary::new(1, &p);
        assert_eq!(card.technologies, &p.technologies[..3]);
        assert_eq!(card.tech_overflow.as_deref(), Some("+2 more"));

        let p = record("three", 1, &["Rust", "Leptos", "Axum"]);
        let card = CardSummary::new(1, &p);
        assert_eq!(card.technologies.len(), 3);
        assert_eq!(card.tech_overflow, None);

        let p = record("none", 1, &[]);
        let card = CardSummary::new(1, &p);
        assert!(card.technologies.is_empty());
        assert_eq!(card.tech_overflow, None);
    }

    #[test]
    fn test_image_overflow() {
        let p = record("five", 5, &[]);
        let card = CardSummary::new(1, &p);
        assert_eq!(card.image_overflow.as_deref(), Some("+4 more"));
        assert_eq!(card.cover_image, Some("Images/five-0.png"));

        let p = record("one", 1, &[]);
        let card = CardSummary::new(1, &p);
        assert_eq!(card.image_overflow, None);
        assert_eq!(card.cover_image, Some("Images/one-0.png"));
    }

    #[test]
    fn test_headline_metric_is_first() {
        let mut p = record("m", 1, &[]);
        assert_eq!(CardSummary::new(1, &p).headline_metric, Some("99.9%"));
        p.metrics.clear();
        assert_eq!(CardSummary::new(1, &p).headline_metric, None);
    }

    #[test]
    fn test_cards_for_embedded_catalog() {
        let catalog = crate::content::catalog().unwrap();
        let cards = cards(catalog.projects());
        assert_eq!(cards.len(), 2);

        let first = &cards[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.id, "recommendation-engine");
        assert_eq!(first.technologies, ["Python", "KNN", "Flask"]);
        assert_eq!(first.tech_overflow.as_deref(), Some("+3 more"));
        assert_eq!(first.image_overflow.as_deref(), Some("+4 more"));
        assert_eq!(first.headline_metric, Some("92%"));

        let second = &cards[1];
        assert_eq!(second.position, 2);
        assert_eq!(second.tech_overflow.as_deref(), Some("+4 more"));
        assert_eq!(second.image_overflow.as_deref(), Some("+3 more"));
        assert_eq!(second.headline_metric, Some("+85%"));
    }
}
