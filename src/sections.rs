//! Section renderers.
//! Each is a pure function from a slice of the portfolio document to the
//! markup of one page region. Renderers return the region's full content,
//! so every render replaces what was there before. All document text goes
//! through `html_escape` on its way into markup.

use indexmap::IndexMap;

use crate::data::{About, Education, Experience, Personal, Project, Socials};
use crate::render::html_escape;
use crate::reveal;

// ── Skills ─────────────────────────────────────────────

/// Category → icon table for the skills section. Categories not listed
/// fall back to [`DEFAULT_CATEGORY_ICON`].
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Programming Languages", "fas fa-code"),
    ("Frontend", "fas fa-paint-brush"),
    ("Backend", "fas fa-server"),
    ("Mobile", "fas fa-mobile-alt"),
    ("Databases", "fas fa-database"),
    ("Concepts", "fas fa-brain"),
    ("Tools", "fas fa-tools"),
];

const DEFAULT_CATEGORY_ICON: &str = "fas fa-star";

pub(crate) fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CATEGORY_ICON)
}

/// Render one block per skill category, in document order, each with its
/// icon, the category name, and one chip per skill.
pub fn render_skills(skills: &IndexMap<String, Vec<String>>) -> String {
    let mut html = String::new();

    for (category, skill_list) in skills {
        let chips: String = skill_list
            .iter()
            .map(|skill| format!(r#"<span class="skill-chip">{}</span>"#, html_escape(skill)))
            .collect();

        html.push_str(&format!(
            r#"<div class="skill-category {fade}">
    <h3 class="skill-category-title"><i class="{icon}"></i> {category}</h3>
    <div class="skill-chips">{chips}</div>
</div>
"#,
            fade = reveal::FADE_CLASS,
            icon = category_icon(category),
            category = html_escape(category),
            chips = chips,
        ));
    }

    html
}

// ── Hero ───────────────────────────────────────────────

/// Hero slots plus the resume control. Without a resume URL the control
/// stays inert: no href, no new-tab target.
pub fn render_hero(personal: &Personal, socials: &Socials) -> String {
    let resume_attrs = match &socials.resume {
        Some(url) => format!(r#" href="{}" target="_blank""#, html_escape(url)),
        None => String::new(),
    };

    format!(
        r##"<h1 id="hero-name">{name}</h1>
<h2 id="hero-role">{role}</h2>
<p id="hero-tagline">{tagline}</p>
<div class="hero-actions">
    <a href="#projects" class="btn btn-primary">View Projects</a>
    <a id="resume-btn" class="btn btn-secondary"{resume_attrs}>Resume</a>
</div>"##,
        name = html_escape(&personal.name),
        role = html_escape(&personal.role),
        tagline = html_escape(&personal.tagline),
        resume_attrs = resume_attrs,
    )
}

// ── About ──────────────────────────────────────────────

/// The about region is a single paragraph.
pub fn render_about(about: &About) -> String {
    format!("<p>{}</p>", html_escape(&about.description))
}

// ── Projects ───────────────────────────────────────────

/// One card per project, in index order, each reveal staggered by a tenth
/// of a second per position. The feature block and the GitHub link only
/// render when their data is present.
pub fn render_projects(projects: &[Project]) -> String {
    let mut html = String::new();

    for (index, project) in projects.iter().enumerate() {
        let tech: String = project
            .tech
            .iter()
            .map(|t| format!(r#"<span class="tech-badge">{}</span>"#, html_escape(t)))
            .collect();

        let features = if project.features.is_empty() {
            String::new()
        } else {
            let rows: String = project
                .features
                .iter()
                .map(|feature| {
                    format!(
                        r#"<div class="project-feature"><i class="fas fa-check"></i> <span>{}</span></div>"#,
                        html_escape(feature)
                    )
                })
                .collect();
            format!(r#"<div class="project-features">{}</div>"#, rows)
        };

        let github_link = match &project.github {
            Some(url) => format!(
                r#"<a href="{url}" class="btn btn-secondary" target="_blank" aria-label="View {title} on GitHub"><i class="fab fa-github"></i> GitHub</a>"#,
                url = html_escape(url),
                title = html_escape(&project.title),
            ),
            None => String::new(),
        };

        html.push_str(&format!(
            r#"<div class="project-card {fade}" style="{stagger}">
    <div class="project-content">
        <h3 class="project-title">{title}</h3>
        <p class="project-description">{description}</p>
        <div class="project-tech">{tech}</div>
        {features}
        <div class="project-links">{github_link}</div>
    </div>
</div>
"#,
            fade = reveal::FADE_CLASS,
            stagger = reveal::stagger_style(index),
            title = html_escape(&project.title),
            description = html_escape(&project.description),
            tech = tech,
            features = features,
            github_link = github_link,
        ));
    }

    html
}

// ── Timeline ───────────────────────────────────────────

/// Experience entries first, then education, one merged list. Education
/// continues the stagger offset where experience left off, so the items
/// appear in sequence on first reveal.
pub fn render_timeline(experience: &[Experience], education: &[Education]) -> String {
    let mut html = String::new();

    for (index, exp) in experience.iter().enumerate() {
        let points: String = exp
            .points
            .iter()
            .map(|point| {
                format!(
                    r#"<li class="timeline-point"><i class="fas fa-circle"></i> <span>{}</span></li>"#,
                    html_escape(point)
                )
            })
            .collect();

        html.push_str(&format!(
            r#"<div class="timeline-item {fade}" style="{stagger}">
    <div class="timeline-icon"><i class="fas fa-briefcase"></i></div>
    <div class="timeline-content">
        <h3 class="timeline-title">{title}</h3>
        <p class="timeline-subtitle">{organization}</p>
        <p class="timeline-duration"><i class="far fa-calendar"></i> {duration}</p>
        <ul class="timeline-points">{points}</ul>
    </div>
</div>
"#,
            fade = reveal::FADE_CLASS,
            stagger = reveal::stagger_style(index),
            title = html_escape(&exp.title),
            organization = html_escape(&exp.organization),
            duration = html_escape(&exp.duration),
            points = points,
        ));
    }

    for (index, edu) in education.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="timeline-item {fade}" style="{stagger}">
    <div class="timeline-icon"><i class="fas fa-graduation-cap"></i></div>
    <div class="timeline-content">
        <h3 class="timeline-title">{degree} in {field}</h3>
        <p class="timeline-subtitle">{institution}</p>
        <p class="timeline-duration"><i class="far fa-calendar"></i> {duration}</p>
    </div>
</div>
"#,
            fade = reveal::FADE_CLASS,
            stagger = reveal::stagger_style(experience.len() + index),
            degree = html_escape(&edu.degree),
            field = html_escape(&edu.field),
            institution = html_escape(&edu.institution),
            duration = html_escape(&edu.duration),
        ));
    }

    html
}

// ── Contact & social links ─────────────────────────────

/// Contact slots shown next to the social links.
pub fn render_contact(personal: &Personal) -> String {
    format!(
        r#"<p id="contact-name">{name}</p>
<p id="contact-location"><i class="fas fa-map-marker-alt"></i> {location}</p>
<p id="contact-email"><i class="fas fa-envelope"></i> <a href="mailto:{email}">{email}</a></p>"#,
        name = html_escape(&personal.name),
        location = html_escape(&personal.location),
        email = html_escape(&personal.email),
    )
}

/// At most one control per known platform, github before linkedin. Each
/// opens in a new tab and carries an accessible label naming the platform.
pub fn build_social_links(socials: &Socials) -> String {
    // (url, icon, label) in render order
    let platforms = [
        (socials.github.as_deref(), "fab fa-github", "GitHub Profile"),
        (
            socials.linkedin.as_deref(),
            "fab fa-linkedin-in",
            "LinkedIn Profile",
        ),
    ];

    let mut html = String::new();
    for (url, icon, label) in platforms {
        if let Some(url) = url {
            html.push_str(&format!(
                r#"<a href="{url}" class="social-link" target="_blank" aria-label="{label}"><i class="{icon}"></i></a>"#,
                url = html_escape(url),
                icon = icon,
                label = label,
            ));
        }
    }
    html
}
