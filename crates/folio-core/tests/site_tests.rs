// Sanity checks over the static site content the page is rendered from.

use folio_core::site::{NAV_LINKS, SITE};

#[test]
fn profile_fields_are_populated() {
    assert!(!SITE.name.is_empty());
    assert!(!SITE.tagline.is_empty());
    assert!(!SITE.about.is_empty());
    assert!(SITE.email.contains('@'));
}

#[test]
fn nav_links_are_fragment_anchors() {
    assert!(!NAV_LINKS.is_empty());
    for (label, href) in NAV_LINKS {
        assert!(!label.is_empty());
        assert!(href.starts_with('#'), "nav link {label} must be an anchor");
    }
}

#[test]
fn socials_have_resolvable_urls() {
    assert!(!SITE.socials.is_empty());
    for s in SITE.socials {
        assert!(
            s.url.starts_with("https://") || s.url.starts_with('/'),
            "social {} has url {}",
            s.name,
            s.url
        );
    }
}

#[test]
fn projects_carry_tags_and_descriptions() {
    assert!(!SITE.projects.is_empty());
    for p in SITE.projects {
        assert!(!p.title.is_empty());
        assert!(!p.description.is_empty());
        assert!(!p.tags.is_empty(), "project {} has no tags", p.title);
    }
}

#[test]
fn experience_entries_have_bullets() {
    assert!(!SITE.experience.is_empty());
    for e in SITE.experience {
        assert!(!e.company.is_empty() && !e.role.is_empty() && !e.dates.is_empty());
        assert!(!e.bullets.is_empty(), "{} has no bullets", e.company);
    }
}

#[test]
fn hobbies_images_have_captions() {
    for h in SITE.hobbies {
        assert!(!h.images.is_empty(), "{} has no photos", h.name);
        for img in h.images {
            assert!(img.src.starts_with('/'));
            assert!(!img.alt.is_empty());
        }
    }
}
