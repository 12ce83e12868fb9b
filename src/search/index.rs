/// Flattened, lowercase-cached view of the catalog for substring matching.

use crate::content::Catalog;

pub struct TagRecord {
    pub text: String,
    lower: String,
}

impl TagRecord {
    fn new(text: &str) -> Self {
        Self {
            lower: text.to_lowercase(),
            text: text.to_string(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.lower.contains(query)
    }
}

pub struct SectionRecord {
    pub title: String,
    pub description: String,
    title_lower: String,
    desc_lower: String,
    pub tags: Vec<TagRecord>,
}

impl SectionRecord {
    pub fn title_matches(&self, query: &str) -> bool {
        self.title_lower.contains(query)
    }

    pub fn desc_matches(&self, query: &str) -> bool {
        self.desc_lower.contains(query)
    }
}

pub struct FrameworkRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    name_lower: String,
    desc_lower: String,
    pub sections: Vec<SectionRecord>,
}

impl FrameworkRecord {
    /// A query hits the framework itself when it appears in the card title
    /// or the card description.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name_lower.contains(query) || self.desc_lower.contains(query)
    }
}

pub struct SearchIndex {
    pub frameworks: Vec<FrameworkRecord>,
    section_total: usize,
}

impl SearchIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let frameworks: Vec<FrameworkRecord> = catalog
            .frameworks
            .iter()
            .map(|fw| FrameworkRecord {
                id: fw.id.clone(),
                name: fw.name.clone(),
                description: fw.description.clone(),
                name_lower: fw.name.to_lowercase(),
                desc_lower: fw.description.to_lowercase(),
                sections: fw
                    .sections
                    .iter()
                    .map(|s| SectionRecord {
                        title: s.title.clone(),
                        description: s.description.clone(),
                        title_lower: s.title.to_lowercase(),
                        desc_lower: s.description.to_lowercase(),
                        tags: s.controls.iter().map(|c| TagRecord::new(c)).collect(),
                    })
                    .collect(),
            })
            .collect();
        let section_total = frameworks.iter().map(|f| f.sections.len()).sum();
        Self {
            frameworks,
            section_total,
        }
    }

    pub fn framework_count(&self) -> usize {
        self.frameworks.len()
    }

    pub fn section_total(&self) -> usize {
        self.section_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> SearchIndex {
        let catalog = Catalog::from_json(
            r#"{
                "frameworks": [
                    {
                        "id": "alpha",
                        "name": "Alpha Framework",
                        "description": "Access control baseline",
                        "sections": [
                            {
                                "title": "Identity",
                                "description": "Manage identities",
                                "controls": ["MFA", "Password Policy"]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        SearchIndex::build(&catalog)
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let index = fixture();
        let fw = &index.frameworks[0];
        assert!(fw.name_matches("alpha"));
        assert!(fw.name_matches("access"));
        assert!(!fw.name_matches("omega"));

        let section = &fw.sections[0];
        assert!(section.title_matches("identity"));
        assert!(section.desc_matches("identities"));
        assert!(section.tags.iter().any(|t| t.matches("mfa")));
        assert!(section.tags.iter().any(|t| t.matches("password")));
        assert!(!section.tags.iter().any(|t| t.matches("kerberos")));
    }

    #[test]
    fn test_totals() {
        let index = fixture();
        assert_eq!(index.framework_count(), 1);
        assert_eq!(index.section_total(), 1);
    }

    #[test]
    fn test_builtin_catalog_totals() {
        let index = SearchIndex::build(&Catalog::builtin().unwrap());
        assert_eq!(index.framework_count(), 8);
        assert_eq!(index.section_total(), 24);
    }
}
