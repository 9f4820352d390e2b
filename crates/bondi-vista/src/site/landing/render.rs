use std::fmt::Write as _;

use super::content::{FeatureIcon, LandingContent};
use crate::site::contact::{ContactField, ContactFormState, GateViolation};

/// Per-request view of the page: the form values and whatever feedback goes with them.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub form: ContactFormState,
    pub notice: Option<String>,
    pub violation: Option<GateViolation>,
}

const STYLES: &str = "body{margin:0;font-family:system-ui,sans-serif;color:#111}\
header{position:fixed;top:0;width:100%;height:3.5rem;display:flex;align-items:center;padding:0 1.5rem;background:rgba(255,255,255,.8);backdrop-filter:blur(8px);box-sizing:border-box;z-index:10}\
header nav{margin-left:auto;display:flex;gap:1.5rem}\
a{color:inherit}\
.hero{position:relative;height:100vh;background-size:cover;background-position:center;display:flex;align-items:center;justify-content:center}\
.hero .panel{background:rgba(0,0,0,.45);color:#fff;padding:2rem;border-radius:.5rem;text-align:center;max-width:48rem}\
.cta{display:inline-block;padding:.6rem 1.2rem;margin:0 .5rem;border-radius:.375rem;text-decoration:none}\
.cta.primary{background:#2563eb;color:#fff}.cta.secondary{background:#fff;color:#2563eb}\
section{padding:4rem 1.5rem}section h2{text-align:center}\
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr))}\
.card{padding:1.5rem;border-radius:.5rem;background:#eff6ff}\
.notice{background:#dcfce7;border:1px solid #16a34a;padding:1rem;border-radius:.375rem}\
.form-error{color:#b91c1c}\
form input,form textarea{display:block;width:100%;margin-bottom:1rem;padding:.5rem;box-sizing:border-box}\
footer{display:flex;gap:1.5rem;padding:1.5rem;border-top:1px solid #e5e7eb;font-size:.75rem}";

/// Render the complete landing page document.
pub fn render_landing_page(content: &LandingContent, view: &PageView) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{}</title>", escape_html(content.hero.headline)).expect("title");
    writeln!(html, "<style>{STYLES}</style>\n</head>\n<body>").expect("styles");

    render_header(&mut html, content);
    html.push_str("<main>\n");
    render_hero(&mut html, content);
    render_features(&mut html, content);
    render_apartments(&mut html, content);
    render_location(&mut html, content);
    render_contact(&mut html, content, view);
    html.push_str("</main>\n");
    render_footer(&mut html, content);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, content: &LandingContent) {
    writeln!(
        html,
        "<header><a href=\"#\"><strong>{} {}</strong></a><nav>",
        FeatureIcon::Waves.glyph(),
        escape_html(content.brand)
    )
    .expect("header");
    for link in &content.nav {
        writeln!(
            html,
            "<a href=\"#{}\">{}</a>",
            escape_html(link.anchor),
            escape_html(link.label)
        )
        .expect("nav link");
    }
    html.push_str("</nav></header>\n");
}

fn render_hero(html: &mut String, content: &LandingContent) {
    let hero = &content.hero;
    writeln!(
        html,
        "<section class=\"hero\" role=\"img\" aria-label=\"{}\" style=\"background-image:url('{}')\">",
        escape_html(hero.image_alt),
        escape_html(hero.image_src)
    )
    .expect("hero section");
    writeln!(
        html,
        "<div class=\"panel\"><h1>{}</h1><p>{}</p><div>",
        escape_html(hero.headline),
        escape_html(hero.subheading)
    )
    .expect("hero copy");
    for action in &hero.actions {
        let class = if action.primary { "primary" } else { "secondary" };
        writeln!(
            html,
            "<a class=\"cta {class}\" href=\"{}\">{}</a>",
            escape_html(action.href),
            escape_html(action.label)
        )
        .expect("hero action");
    }
    html.push_str("</div></div></section>\n");
}

fn render_features(html: &mut String, content: &LandingContent) {
    html.push_str("<section id=\"features\"><h2>Luxury Features</h2><div class=\"grid\">\n");
    for feature in &content.features {
        writeln!(
            html,
            "<div class=\"card\"><div aria-hidden=\"true\">{}</div><h3>{}</h3><p>{}</p></div>",
            feature.icon.glyph(),
            escape_html(feature.name),
            escape_html(feature.description)
        )
        .expect("feature card");
    }
    html.push_str("</div></section>\n");
}

fn render_apartments(html: &mut String, content: &LandingContent) {
    html.push_str("<section id=\"apartments\"><h2>Available Apartments</h2><div class=\"grid\">\n");
    for apartment in &content.apartments {
        writeln!(
            html,
            "<div class=\"card\"><h3>{}</h3><p>Size: {}</p><p><strong>{}</strong></p>\
             <a class=\"cta secondary\" href=\"#contact\">View Details</a></div>",
            escape_html(apartment.kind),
            escape_html(apartment.size),
            escape_html(apartment.price)
        )
        .expect("apartment card");
    }
    html.push_str("</div></section>\n");
}

fn render_location(html: &mut String, content: &LandingContent) {
    let location = &content.location;
    html.push_str("<section id=\"location\"><h2>Prime Bondi Location</h2><div class=\"grid\">\n");
    writeln!(
        html,
        "<iframe title=\"{}\" src=\"{}\" width=\"100%\" height=\"450\" style=\"border:0\" \
         allowfullscreen loading=\"lazy\"></iframe>",
        escape_html(location.map_title),
        escape_html(location.map_embed_url)
    )
    .expect("map embed");
    writeln!(html, "<div><p>{}</p>", escape_html(location.blurb)).expect("location blurb");
    render_bullets(html, &location.highlights);
    html.push_str("</div></div></section>\n");
}

fn render_contact(html: &mut String, content: &LandingContent, view: &PageView) {
    let contact = &content.contact;
    writeln!(
        html,
        "<section id=\"contact\"><h2>{}</h2><div class=\"grid\">",
        escape_html(contact.heading)
    )
    .expect("contact heading");
    writeln!(html, "<div><p>{}</p>", escape_html(contact.blurb)).expect("contact blurb");
    render_bullets(html, &contact.perks);
    html.push_str("</div>\n<div>\n");

    if let Some(notice) = &view.notice {
        writeln!(
            html,
            "<div class=\"notice\" role=\"alert\">{}</div>",
            escape_html(notice)
        )
        .expect("notice banner");
    }

    let flagged = view
        .violation
        .as_ref()
        .map(GateViolation::fields)
        .unwrap_or_default();
    if let Some(violation) = &view.violation {
        writeln!(
            html,
            "<p class=\"form-error\" role=\"status\">{}</p>",
            escape_html(&violation.to_string())
        )
        .expect("violation message");
    }

    html.push_str("<form method=\"post\" action=\"/contact\">\n");
    for field in ContactField::ALL {
        render_control(html, field, view.form.get(field), flagged.contains(&field));
    }
    writeln!(
        html,
        "<button type=\"submit\" class=\"cta primary\">{}</button>\n</form>",
        escape_html(contact.submit_label)
    )
    .expect("submit button");
    html.push_str("</div></div></section>\n");
}

fn render_control(html: &mut String, field: ContactField, value: &str, invalid: bool) {
    let required = if field.is_required() { " required" } else { "" };
    let invalid = if invalid { " aria-invalid=\"true\"" } else { "" };
    let name = field.as_str();
    let placeholder = escape_html(field.label());
    let value = escape_html(value);

    let written = match field {
        ContactField::Message => writeln!(
            html,
            "<textarea name=\"{name}\" placeholder=\"{placeholder}\"{required}{invalid}>{value}</textarea>"
        ),
        ContactField::Email | ContactField::Phone | ContactField::Name => {
            let input_type = match field {
                ContactField::Email => "email",
                ContactField::Phone => "tel",
                _ => "text",
            };
            writeln!(
                html,
                "<input type=\"{input_type}\" name=\"{name}\" placeholder=\"{placeholder}\" \
                 value=\"{value}\"{required}{invalid}>"
            )
        }
    };
    written.expect("form control");
}

fn render_footer(html: &mut String, content: &LandingContent) {
    writeln!(html, "<footer><p>{}</p><nav>", escape_html(content.copyright)).expect("footer");
    for link in &content.footer_links {
        writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(link.href),
            escape_html(link.label)
        )
        .expect("footer link");
    }
    html.push_str("</nav></footer>\n");
}

fn render_bullets(html: &mut String, items: &[&str]) {
    html.push_str("<ul>");
    for item in items {
        writeln!(html, "<li>&rarr; {}</li>", escape_html(item)).expect("bullet");
    }
    html.push_str("</ul>\n");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
