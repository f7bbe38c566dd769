//! Page assembly.
//! The section renderers produce region content; this module wraps it in
//! the page shell (navbar, region containers, footer) and appends the
//! static chrome script. The script's tuning values travel as `data-*`
//! attributes on `<body>`, sourced from the constants in `nav` and
//! `reveal`, so the served behavior and the tested logic share one source.

use crate::data::PortfolioDoc;
use crate::nav::{self, MenuState};
use crate::reveal;
use crate::sections;

/// Fallback content for the about region when the document can't be
/// loaded. The other regions stay empty.
pub const LOAD_ERROR_HTML: &str =
    "<p>Error loading data. Please check your connection and try again.</p>";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ── Page rendering ─────────────────────────────────────

/// Content of each named region, bound once per render.
#[derive(Default)]
struct PageRegions {
    title: String,
    hero: String,
    about: String,
    skills: String,
    projects: String,
    timeline: String,
    contact: String,
    social_links: String,
}

/// Render the full page for a loaded document.
pub fn render_page(doc: &PortfolioDoc) -> String {
    let regions = PageRegions {
        title: doc.personal.name.clone(),
        hero: sections::render_hero(&doc.personal, &doc.socials),
        about: sections::render_about(&doc.about),
        skills: sections::render_skills(&doc.skills),
        projects: sections::render_projects(&doc.projects),
        timeline: sections::render_timeline(&doc.experience, &doc.education),
        contact: sections::render_contact(&doc.personal),
        social_links: sections::build_social_links(&doc.socials),
    };
    page_shell(&regions)
}

/// Render the load-failure page: the about region carries the error
/// message, every other region is left unpopulated.
pub fn render_error_page() -> String {
    let regions = PageRegions {
        title: "Portfolio".to_string(),
        about: LOAD_ERROR_HTML.to_string(),
        ..PageRegions::default()
    };
    page_shell(&regions)
}

fn page_shell(regions: &PageRegions) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <link rel="stylesheet" href="/static/css/style.css">
</head>
<body data-nav-threshold="{nav_threshold}" data-section-lookahead="{section_lookahead}" data-header-clearance="{header_clearance}" data-reveal-threshold="{reveal_threshold}" data-reveal-delay="{reveal_delay}">
    <nav class="navbar">
        <div class="nav-container">
            <a href="#home" class="nav-logo">{title}</a>
            <button class="mobile-menu-btn" aria-label="Toggle navigation"><i class="{menu_icon}"></i></button>
            <ul class="nav-links">
                <li><a href="#home" class="nav-link">Home</a></li>
                <li><a href="#about" class="nav-link">About</a></li>
                <li><a href="#skills" class="nav-link">Skills</a></li>
                <li><a href="#projects" class="nav-link">Projects</a></li>
                <li><a href="#experience" class="nav-link">Experience</a></li>
                <li><a href="#contact" class="nav-link">Contact</a></li>
            </ul>
        </div>
    </nav>
    <main>
        <section id="home" class="hero">{hero}</section>
        <section id="about">
            <h2 class="section-title">About Me</h2>
            <div id="about-content">{about}</div>
        </section>
        <section id="skills">
            <h2 class="section-title">Skills</h2>
            <div id="skills-container">{skills}</div>
        </section>
        <section id="projects">
            <h2 class="section-title">Projects</h2>
            <div id="projects-container">{projects}</div>
        </section>
        <section id="experience">
            <h2 class="section-title">Experience &amp; Education</h2>
            <div id="timeline">{timeline}</div>
        </section>
        <section id="contact">
            <h2 class="section-title">Get In Touch</h2>
            <div class="contact-info">{contact}</div>
            <div id="social-links">{social_links}</div>
        </section>
    </main>
    <footer>
        <p>&copy; <span id="current-year">{year}</span> {title}</p>
    </footer>
    <script>{page_js}</script>
</body>
</html>
"##,
        title = html_escape(&regions.title),
        nav_threshold = nav::NAVBAR_SCROLL_THRESHOLD,
        section_lookahead = nav::SECTION_LOOKAHEAD,
        header_clearance = nav::HEADER_CLEARANCE,
        reveal_threshold = reveal::INTERSECTION_THRESHOLD,
        reveal_delay = reveal::INITIAL_REVEAL_DELAY_MS,
        menu_icon = MenuState::default().icon(),
        hero = regions.hero,
        about = regions.about,
        skills = regions.skills,
        projects = regions.projects,
        timeline = regions.timeline,
        contact = regions.contact,
        social_links = regions.social_links,
        year = chrono::Utc::now().format("%Y"),
        page_js = PAGE_JS,
    )
}

// Chrome behavior for the served page. Mirrors the logic in `nav` and
// `reveal`; the thresholds arrive via body data attributes.
const PAGE_JS: &str = r##"
(function() {
    const ds = document.body.dataset;
    const navThreshold = parseFloat(ds.navThreshold) || 50;
    const lookahead = parseFloat(ds.sectionLookahead) || 100;
    const clearance = parseFloat(ds.headerClearance) || 80;
    const revealThreshold = parseFloat(ds.revealThreshold) || 0.1;
    const revealDelay = parseInt(ds.revealDelay, 10) || 100;

    const navbar = document.querySelector('.navbar');
    const navLinks = document.querySelectorAll('.nav-link');
    const menuBtn = document.querySelector('.mobile-menu-btn');
    const navMenu = document.querySelector('.nav-links');
    const sections = document.querySelectorAll('section');

    function updateActiveLink() {
        let current = '';
        sections.forEach(function(section) {
            const top = section.offsetTop - lookahead;
            if (window.scrollY >= top && window.scrollY < top + section.clientHeight) {
                current = section.getAttribute('id');
            }
        });
        navLinks.forEach(function(link) {
            link.classList.remove('active');
            if (link.getAttribute('href') === '#' + current) {
                link.classList.add('active');
            }
        });
    }

    window.addEventListener('scroll', function() {
        if (window.scrollY > navThreshold) {
            navbar.classList.add('scrolled');
        } else {
            navbar.classList.remove('scrolled');
        }
        updateActiveLink();
    });

    if (menuBtn && navMenu) {
        menuBtn.addEventListener('click', function() {
            navMenu.classList.toggle('active');
            menuBtn.innerHTML = navMenu.classList.contains('active')
                ? '<i class="fas fa-times"></i>'
                : '<i class="fas fa-bars"></i>';
        });
        navLinks.forEach(function(link) {
            link.addEventListener('click', function() {
                navMenu.classList.remove('active');
                menuBtn.innerHTML = '<i class="fas fa-bars"></i>';
            });
        });
    }

    document.querySelectorAll('a[href^="#"]').forEach(function(anchor) {
        anchor.addEventListener('click', function(e) {
            const target = document.getElementById(this.getAttribute('href').slice(1));
            if (!target) return;
            e.preventDefault();
            window.scrollTo({ top: target.offsetTop - clearance, behavior: 'smooth' });
        });
    });

    const observer = new IntersectionObserver(function(entries) {
        entries.forEach(function(entry) {
            if (entry.isIntersecting) {
                entry.target.classList.add('visible');
            }
        });
    }, { root: null, rootMargin: '0px', threshold: revealThreshold });
    document.querySelectorAll('.fade-in').forEach(function(el) {
        observer.observe(el);
    });

    setTimeout(function() {
        document.querySelectorAll('.fade-in').forEach(function(el) {
            el.classList.add('visible');
        });
    }, revealDelay);
})();
"##;
