use std::collections::HashSet;

use super::*;

#[test]
fn nav_sections_are_in_document_order() {
    let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec!["home", "skills", "projects", "contact"]);
}

#[test]
fn nav_link_href_is_fragment() {
    assert_eq!(NAV_LINKS[2].href(), "#projects");
}

#[test]
fn job_titles_are_non_empty() {
    assert!(!JOB_TITLES.is_empty());
    assert!(JOB_TITLES.iter().all(|t| !t.is_empty()));
}

#[test]
fn skill_names_are_unique() {
    let names: HashSet<_> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(names.len(), SKILLS.len());
}

#[test]
fn every_category_has_skills() {
    for category in [SkillCategory::Frontend, SkillCategory::Backend, SkillCategory::Tools] {
        assert!(SKILLS.iter().any(|s| s.category == category), "{category:?} empty");
    }
}

#[test]
fn catalog_groups_categories_contiguously() {
    let order: Vec<_> = SKILLS.iter().map(|s| s.category).collect();
    let mut seen = Vec::new();
    for category in order {
        if seen.last() != Some(&category) {
            assert!(!seen.contains(&category), "{category:?} split in catalog");
            seen.push(category);
        }
    }
}

#[test]
fn postman_uses_uncurated_detail() {
    let postman = SKILLS.iter().find(|s| s.name == "Postman").unwrap();
    assert_eq!(postman.level, SkillLevel::Intermediate);
    assert!(postman.related_skills.is_empty());
}

#[test]
fn social_links_external_flag() {
    let github = SOCIAL_LINKS.iter().find(|l| l.label == "GitHub").unwrap();
    let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email").unwrap();
    assert!(github.is_external());
    assert!(!email.is_external());
}

#[test]
fn projects_have_tags() {
    assert!(PROJECTS.iter().all(|p| !p.tags.is_empty() && !p.summary.is_empty()));
}
