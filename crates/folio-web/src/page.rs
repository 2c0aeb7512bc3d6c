//! Declarative page construction: every section is built straight from the
//! static site config. The stylesheet targets the class names emitted here.

use crate::constants::{CANVAS_ID, HERO_ID};
use crate::dom::{anchor, append, el, external_anchor, text_el};
use folio_core::site::{NAV_LINKS, SITE};
use web_sys as web;

pub fn render(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    append(&body, &nav(document)?);

    let main = el(document, "main", "page")?;
    append(&main, &hero(document)?);
    append(&main, &about(document)?);
    append(&main, &experience(document)?);
    append(&main, &projects(document)?);
    append(&main, &hobbies(document)?);
    append(&main, &contact(document)?);
    append(&main, &footer(document)?);
    append(&body, &main);
    Ok(())
}

fn section(document: &web::Document, id: &str, class: &str) -> anyhow::Result<web::Element> {
    let s = el(document, "section", class)?;
    s.set_id(id);
    Ok(s)
}

fn bullet_list(
    document: &web::Document,
    class: &str,
    items: &[&str],
) -> anyhow::Result<web::Element> {
    let ul = el(document, "ul", class)?;
    for item in items {
        append(&ul, &text_el(document, "li", "", item)?);
    }
    Ok(ul)
}

fn img(
    document: &web::Document,
    class: &str,
    src: &str,
    alt: &str,
) -> anyhow::Result<web::Element> {
    let i = el(document, "img", class)?;
    _ = i.set_attribute("src", src);
    _ = i.set_attribute("alt", alt);
    Ok(i)
}

fn nav(document: &web::Document) -> anyhow::Result<web::Element> {
    let nav = el(document, "nav", "nav")?;
    let inner = el(document, "div", "container nav-inner")?;
    append(&inner, &anchor(document, "nav-brand", "#hero", SITE.name)?);
    let links = el(document, "div", "nav-links")?;
    for (label, href) in NAV_LINKS {
        append(&links, &anchor(document, "nav-link", href, label)?);
    }
    append(&inner, &links);
    append(&nav, &inner);
    Ok(nav)
}

fn hero(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, HERO_ID, "section hero")?;

    // The mesh canvas sits behind the hero copy and never takes pointer
    // events itself; the section is the pointer surface.
    let canvas = el(document, "canvas", "hero-canvas")?;
    canvas.set_id(CANVAS_ID);
    append(&s, &canvas);

    let c = el(document, "div", "container hero-content")?;
    append(&c, &text_el(document, "div", "hero-location", SITE.location)?);
    append(&c, &text_el(document, "h1", "hero-name", SITE.name)?);
    append(&c, &text_el(document, "p", "hero-tagline", SITE.tagline)?);
    append(
        &c,
        &text_el(document, "p", "hero-subheadline", SITE.hero_subheadline)?,
    );

    let ctas = el(document, "div", "hero-ctas")?;
    append(
        &ctas,
        &anchor(document, "button primary", "#projects", "View projects")?,
    );
    append(
        &ctas,
        &anchor(document, "button ghost", "#contact", "Get in touch")?,
    );
    append(&c, &ctas);

    let socials = el(document, "div", "hero-socials")?;
    for social in SITE.socials {
        append(
            &socials,
            &external_anchor(document, "social-link", social.url, social.name)?,
        );
    }
    append(&c, &socials);
    append(&s, &c);
    Ok(s)
}

fn about(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, "about", "section")?;
    let c = el(document, "div", "container about-grid")?;

    let left = el(document, "div", "about-main")?;
    append(&left, &text_el(document, "h2", "section-title", "About")?);
    append(&left, &text_el(document, "p", "about-text", SITE.about)?);
    append(
        &left,
        &text_el(document, "h3", "subheading", "Leadership & Community")?,
    );
    append(&left, &bullet_list(document, "dot-list", SITE.leadership)?);
    append(&c, &left);

    let card = el(document, "div", "glass about-card")?;
    append(
        &card,
        &text_el(document, "h3", "subheading", "Current Interests")?,
    );
    append(&card, &bullet_list(document, "dot-list", SITE.interests)?);
    append(&c, &card);

    append(&s, &c);
    Ok(s)
}

fn experience(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, "experience", "section tinted")?;
    let c = el(document, "div", "container")?;
    append(&c, &text_el(document, "h2", "section-title", "Experience")?);

    let list = el(document, "div", "timeline")?;
    for exp in SITE.experience {
        let entry = el(document, "div", "timeline-entry")?;
        let head = el(document, "div", "timeline-head")?;
        append(&head, &text_el(document, "h3", "timeline-role", exp.role)?);
        append(
            &head,
            &text_el(document, "span", "timeline-dates", exp.dates)?,
        );
        append(&entry, &head);
        append(
            &entry,
            &text_el(document, "h4", "timeline-company", exp.company)?,
        );
        append(&entry, &bullet_list(document, "dot-list", exp.bullets)?);
        append(&list, &entry);
    }
    append(&c, &list);
    append(&s, &c);
    Ok(s)
}

fn projects(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, "projects", "section")?;
    let c = el(document, "div", "container")?;
    append(&c, &text_el(document, "h2", "section-title", "Projects")?);

    let grid = el(document, "div", "card-grid")?;
    for project in SITE.projects {
        let card = el(document, "div", "glass project-card")?;
        let head = el(document, "div", "project-head")?;
        append(
            &head,
            &text_el(document, "h3", "project-title", project.title)?,
        );
        let links = el(document, "div", "project-links")?;
        if let Some(url) = project.github_url {
            append(&links, &external_anchor(document, "icon-link", url, "GitHub")?);
        }
        if let Some(url) = project.live_url {
            append(&links, &external_anchor(document, "icon-link", url, "Live")?);
        }
        append(&head, &links);
        append(&card, &head);
        append(
            &card,
            &text_el(document, "p", "project-description", project.description)?,
        );
        append(&card, &bullet_list(document, "dot-list", project.highlights)?);
        let tags = el(document, "div", "tag-row")?;
        for tag in project.tags {
            append(&tags, &text_el(document, "span", "tag", tag)?);
        }
        append(&card, &tags);
        append(&grid, &card);
    }
    append(&c, &grid);
    append(&s, &c);
    Ok(s)
}

fn hobbies(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, "hobbies", "section")?;
    let c = el(document, "div", "container")?;
    append(
        &c,
        &text_el(document, "h2", "section-title", "Interests & Hobbies")?,
    );

    let grid = el(document, "div", "card-grid")?;
    for hobby in SITE.hobbies {
        let card = el(document, "div", "hobby-card")?;
        _ = card.set_attribute("data-icon", hobby.icon);
        append(&card, &text_el(document, "h3", "hobby-name", hobby.name)?);
        let photos = el(document, "div", "photo-stack")?;
        for photo in hobby.images {
            let frame = el(document, "figure", "photo")?;
            append(&frame, &img(document, "photo-img", photo.src, photo.alt)?);
            append(
                &frame,
                &text_el(document, "figcaption", "photo-caption", photo.alt)?,
            );
            append(&photos, &frame);
        }
        append(&card, &photos);
        append(&grid, &card);
    }
    append(&c, &grid);
    append(&s, &c);
    Ok(s)
}

fn contact(document: &web::Document) -> anyhow::Result<web::Element> {
    let s = section(document, "contact", "section tinted")?;
    let c = el(document, "div", "container")?;
    let card = el(document, "div", "glass contact-card")?;
    append(
        &card,
        &text_el(document, "h2", "section-title", "Let's build something.")?,
    );
    append(
        &card,
        &text_el(
            document,
            "p",
            "contact-blurb",
            "I'm currently open to new opportunities and interesting projects. \
             Feel free to reach out via email or any of my socials.",
        )?,
    );
    let actions = el(document, "div", "contact-actions")?;
    let mailto = format!("mailto:{}", SITE.email);
    append(
        &actions,
        &anchor(document, "button primary", &mailto, "Send an Email")?,
    );
    for social in SITE.socials {
        append(
            &actions,
            &external_anchor(document, "social-circle", social.url, social.name)?,
        );
    }
    append(&card, &actions);
    append(&c, &card);
    append(&s, &c);
    Ok(s)
}

fn footer(document: &web::Document) -> anyhow::Result<web::Element> {
    let f = el(document, "footer", "footer")?;
    let line = format!("\u{a9} {}. Built with Rust & WebGPU.", SITE.name);
    append(&f, &text_el(document, "p", "", &line)?);
    Ok(f)
}
