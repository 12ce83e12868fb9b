/// Debounced catalog search: visibility filtering, match flags for the
/// view to highlight, and the stats line.

use crate::core::config;
use crate::search::index::SearchIndex;
use std::time::{Duration, Instant};

pub struct SectionMatch {
    pub visible: bool,
    // Per-tag visibility; while a query is applied every visible tag is a
    // matching tag, so the view also styles these as hits
    pub tags: Vec<bool>,
}

pub struct FrameworkMatch {
    pub visible: bool,
    pub name_match: bool,
    pub sections: Vec<SectionMatch>,
}

pub struct MatchReport {
    pub frameworks: Vec<FrameworkMatch>,
    pub visible_sections: usize,
    pub visible_frameworks: usize,
    pub active: bool,
}

pub struct SearchEngine {
    index: SearchIndex,
    query: String,
    pending: Option<(String, Instant)>,
    report: MatchReport,
}

impl SearchEngine {
    pub fn new(index: SearchIndex) -> Self {
        let report = Self::full_visibility(&index);
        Self {
            index,
            query: String::new(),
            pending: None,
            report,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.report.active
    }

    pub fn report(&self) -> &MatchReport {
        &self.report
    }

    /// Normalize and stage typed input. Empty input drops any staged query
    /// and clears the filter immediately, anything else waits out the
    /// debounce window.
    pub fn set_query(&mut self, raw: &str, now: Instant) {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            self.clear();
        } else {
            let deadline = now + Duration::from_millis(config::SEARCH_DEBOUNCE_MS);
            self.pending = Some((normalized, deadline));
        }
    }

    /// Apply a staged query once its deadline has passed. Returns the ids of
    /// the frameworks left visible, for the caller to auto-expand.
    pub fn tick(&mut self, now: Instant) -> Option<Vec<String>> {
        let due = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !due {
            return None;
        }
        let (query, _) = self.pending.take()?;
        self.apply(query);
        let ids = self
            .report
            .frameworks
            .iter()
            .enumerate()
            .filter(|(_, m)| m.visible)
            .map(|(i, _)| self.index.frameworks[i].id.clone())
            .collect();
        Some(ids)
    }

    /// Drop any staged query and restore full visibility.
    pub fn clear(&mut self) {
        self.pending = None;
        self.query.clear();
        self.report = Self::full_visibility(&self.index);
    }

    /// The line under the search box.
    pub fn stats_line(&self) -> String {
        if !self.report.active {
            return format!(
                "{} sections across {} frameworks",
                self.index.section_total(),
                self.index.framework_count()
            );
        }
        let frameworks = self.report.visible_frameworks;
        let fw_plural = if frameworks == 1 { "" } else { "s" };
        match self.report.visible_sections {
            0 => "No sections found".to_string(),
            1 => format!("Found 1 section across {} framework{}", frameworks, fw_plural),
            n => format!(
                "Found {} sections across {} framework{}",
                n, frameworks, fw_plural
            ),
        }
    }

    // ===== Matching =====

    fn apply(&mut self, query: String) {
        let mut frameworks = Vec::with_capacity(self.index.frameworks.len());
        let mut visible_sections = 0;
        let mut visible_frameworks = 0;

        for fw in &self.index.frameworks {
            let name_match = fw.name_matches(&query);
            let mut matches_in_card = 0;
            let sections: Vec<SectionMatch> = fw
                .sections
                .iter()
                .map(|s| {
                    let tag_hits: Vec<bool> =
                        s.tags.iter().map(|t| t.matches(&query)).collect();
                    let any_tag = tag_hits.iter().any(|&hit| hit);
                    let visible = s.title_matches(&query)
                        || s.desc_matches(&query)
                        || name_match
                        || any_tag;
                    if visible {
                        matches_in_card += 1;
                    }
                    SectionMatch {
                        visible,
                        // A card-level match keeps every tag on screen
                        tags: tag_hits
                            .into_iter()
                            .map(|matched| matched || name_match)
                            .collect(),
                    }
                })
                .collect();

            let visible = matches_in_card > 0 || name_match;
            if visible {
                visible_frameworks += 1;
                visible_sections += matches_in_card;
            }
            frameworks.push(FrameworkMatch {
                visible,
                name_match,
                sections,
            });
        }

        self.query = query;
        self.report = MatchReport {
            frameworks,
            visible_sections,
            visible_frameworks,
            active: true,
        };
    }

    fn full_visibility(index: &SearchIndex) -> MatchReport {
        let frameworks = index
            .frameworks
            .iter()
            .map(|fw| FrameworkMatch {
                visible: true,
                name_match: false,
                sections: fw
                    .sections
                    .iter()
                    .map(|s| SectionMatch {
                        visible: true,
                        tags: vec![true; s.tags.len()],
                    })
                    .collect(),
            })
            .collect();
        MatchReport {
            frameworks,
            visible_sections: index.section_total(),
            visible_frameworks: index.framework_count(),
            active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn fixture_engine() -> SearchEngine {
        let catalog = Catalog::from_json(
            r#"{
                "frameworks": [
                    {
                        "id": "alpha",
                        "name": "Alpha Shield",
                        "description": "Perimeter baseline",
                        "sections": [
                            {
                                "title": "Asset Inventory",
                                "description": "Track hardware",
                                "controls": ["Inventory", "CMDB"]
                            },
                            {
                                "title": "Response",
                                "description": "Contain incidents",
                                "controls": ["Playbooks"]
                            }
                        ]
                    },
                    {
                        "id": "beta",
                        "name": "Beta Guard",
                        "description": "Payment security",
                        "sections": [
                            {
                                "title": "Encryption",
                                "description": "Protect cardholder data",
                                "controls": ["TLS", "Key rotation"]
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        SearchEngine::new(SearchIndex::build(&catalog))
    }

    fn apply_query(engine: &mut SearchEngine, raw: &str) -> Vec<String> {
        let t0 = Instant::now();
        engine.set_query(raw, t0);
        engine.tick(t0 + Duration::from_millis(200)).unwrap()
    }

    #[test]
    fn test_default_report_shows_everything() {
        let engine = fixture_engine();
        assert!(!engine.is_active());
        assert_eq!(engine.stats_line(), "3 sections across 2 frameworks");
        assert!(engine.report().frameworks.iter().all(|f| f.visible));
    }

    #[test]
    fn test_section_title_match() {
        let mut engine = fixture_engine();
        let ids = apply_query(&mut engine, "asset");
        assert_eq!(ids, vec!["alpha"]);
        let report = engine.report();
        assert!(report.frameworks[0].visible);
        assert!(!report.frameworks[0].name_match);
        assert!(report.frameworks[0].sections[0].visible);
        assert!(!report.frameworks[0].sections[1].visible);
        assert!(!report.frameworks[1].visible);
        assert_eq!(engine.stats_line(), "Found 1 section across 1 framework");
    }

    #[test]
    fn test_tag_match_shows_only_matching_tag() {
        let mut engine = fixture_engine();
        apply_query(&mut engine, "tls");
        let section = &engine.report().frameworks[1].sections[0];
        assert!(section.visible);
        assert_eq!(section.tags, vec![true, false]);
    }

    #[test]
    fn test_name_match_keeps_all_sections_and_tags() {
        let mut engine = fixture_engine();
        apply_query(&mut engine, "alpha");
        let fw = &engine.report().frameworks[0];
        assert!(fw.visible && fw.name_match);
        assert!(fw.sections.iter().all(|s| s.visible));
        assert!(fw
            .sections
            .iter()
            .flat_map(|s| s.tags.iter())
            .all(|&t| t));
        assert_eq!(engine.stats_line(), "Found 2 sections across 1 framework");
    }

    #[test]
    fn test_no_hits() {
        let mut engine = fixture_engine();
        let ids = apply_query(&mut engine, "zzz");
        assert!(ids.is_empty());
        assert_eq!(engine.stats_line(), "No sections found");
        assert!(engine.report().frameworks.iter().all(|f| !f.visible));
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let mut engine = fixture_engine();
        apply_query(&mut engine, "  ASSET ");
        assert_eq!(engine.query(), "asset");
        assert_eq!(engine.stats_line(), "Found 1 section across 1 framework");
    }

    #[test]
    fn test_debounce_waits_full_window() {
        let mut engine = fixture_engine();
        let t0 = Instant::now();
        engine.set_query("asset", t0);
        assert!(engine.tick(t0 + Duration::from_millis(100)).is_none());
        assert!(!engine.is_active());
        let ids = engine.tick(t0 + Duration::from_millis(200));
        assert_eq!(ids, Some(vec!["alpha".to_string()]));
    }

    #[test]
    fn test_retyping_resets_the_window() {
        let mut engine = fixture_engine();
        let t0 = Instant::now();
        engine.set_query("asset", t0);
        engine.set_query("tls", t0 + Duration::from_millis(150));
        assert!(engine.tick(t0 + Duration::from_millis(250)).is_none());
        let ids = engine.tick(t0 + Duration::from_millis(350)).unwrap();
        assert_eq!(ids, vec!["beta"]);
        assert_eq!(engine.query(), "tls");
    }

    #[test]
    fn test_empty_input_clears_immediately_and_kills_pending() {
        let mut engine = fixture_engine();
        apply_query(&mut engine, "asset");
        assert!(engine.is_active());

        let t1 = Instant::now();
        engine.set_query("zzz", t1);
        engine.set_query("   ", t1 + Duration::from_millis(50));
        assert!(!engine.is_active());
        assert_eq!(engine.stats_line(), "3 sections across 2 frameworks");
        assert!(engine.tick(t1 + Duration::from_millis(500)).is_none());
    }

    #[test]
    fn test_clear_restores_full_visibility() {
        let mut engine = fixture_engine();
        apply_query(&mut engine, "zzz");
        engine.clear();
        assert!(!engine.is_active());
        assert!(engine.query().is_empty());
        assert!(engine.report().frameworks.iter().all(|f| f.visible));
        assert_eq!(engine.stats_line(), "3 sections across 2 frameworks");
    }

    #[test]
    fn test_builtin_catalog_end_to_end() {
        let catalog = Catalog::builtin().unwrap();
        let mut engine = SearchEngine::new(SearchIndex::build(&catalog));
        assert_eq!(engine.stats_line(), "24 sections across 8 frameworks");

        let ids = apply_query(&mut engine, "NIST ");
        assert_eq!(ids, vec!["nist_csf"]);
        assert_eq!(engine.stats_line(), "Found 3 sections across 1 framework");

        engine.clear();
        assert_eq!(engine.stats_line(), "24 sections across 8 frameworks");
    }
}
