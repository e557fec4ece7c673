//! Static HTML rendering: one self-contained page per config entry with a
//! CSS-only tab selector ("All" plus one tab per category) and a gallery
//! grid per tab.

use crate::domain::model::{PageProps, Photo};

pub fn render_page(site_title: &str, props: &PageProps) -> String {
    let mut tab_inputs = String::new();
    let mut tab_labels = String::new();
    let mut panels = String::new();
    let mut tab_rules = String::new();

    let mut tabs: Vec<(String, String, &[Photo])> =
        vec![("all".to_string(), "All".to_string(), props.all.as_slice())];
    for category in &props.categories {
        tabs.push((
            category.name.clone(),
            category.display.clone(),
            category.photos.as_slice(),
        ));
    }

    for (index, (key, display, photos)) in tabs.iter().enumerate() {
        let id = escape_attr(key);
        let checked = if index == 0 { " checked" } else { "" };

        tab_inputs.push_str(&format!(
            "<input type=\"radio\" name=\"tab\" id=\"tab-{id}\"{checked}>\n",
        ));
        tab_labels.push_str(&format!(
            "<label for=\"tab-{id}\">{}</label>\n",
            escape_html(display)
        ));
        panels.push_str(&format!(
            "<section class=\"panel\" id=\"panel-{id}\">\n{}</section>\n",
            gallery_markup(photos)
        ));
        tab_rules.push_str(&format!(
            "#tab-{id}:checked ~ #panel-{id} {{ display: grid; }}\n\
             #tab-{id}:checked ~ .tab-list label[for=\"tab-{id}\"] {{ color: #fff; }}\n",
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="initial-scale=1.0, width=device-width">
    <meta name="description" content="dynamic photography web app">
    <meta name="keywords" content="photography, web app, dynamic">
    <title>{page_title} - {site_title}</title>
    <style>
        body {{ margin: 0; background: #1c1917; color: #e7e5e4; font-family: sans-serif; }}
        header {{ display: flex; justify-content: space-between; align-items: center; height: 90px; padding: 0 40px; }}
        header .brand {{ text-transform: uppercase; font-size: 1.1rem; font-weight: 500; }}
        header a.contact {{ border-radius: 24px; background: #fff; color: #44403c; padding: 8px 12px; text-decoration: none; }}
        main {{ display: flex; flex-direction: column; align-items: center; }}
        .tabs {{ max-width: 900px; width: 100%; padding: 16px; }}
        .tabs input {{ display: none; }}
        .tab-list {{ display: flex; justify-content: center; gap: 48px; }}
        .tab-list label {{ text-transform: uppercase; font-size: 1.1rem; color: #57534e; cursor: pointer; padding: 8px; }}
        .panel {{ display: none; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px; margin-top: 24px; }}
        .panel figure {{ margin: 0; position: relative; }}
        .panel img {{ width: 100%; height: 240px; object-fit: cover; border-radius: 4px; }}
        .panel figcaption {{ position: absolute; bottom: 6px; right: 8px; font-size: 0.8rem; background: rgba(28, 25, 23, 0.7); padding: 2px 6px; border-radius: 10px; }}
        footer {{ height: 90px; display: flex; justify-content: center; align-items: center; text-transform: uppercase; font-weight: 500; }}
{tab_rules}    </style>
</head>
<body>
    <header>
        <span class="brand">{site_title}</span>
        <a class="contact" href="#">Get in touch</a>
    </header>
    <main>
        <div class="tabs">
{tab_inputs}            <nav class="tab-list">
{tab_labels}            </nav>
{panels}        </div>
    </main>
    <footer>
        <p>Photography portfolio</p>
    </footer>
    <!-- generated {generated_at} -->
</body>
</html>
"##,
        page_title = escape_html(&props.title),
        site_title = escape_html(site_title),
        generated_at = props.generated_at.to_rfc3339(),
    )
}

fn gallery_markup(photos: &[Photo]) -> String {
    let mut markup = String::new();
    for photo in photos {
        markup.push_str(&format!(
            "<figure data-photo-id=\"{id}\"><img src=\"{url}\" alt=\"{id}\" loading=\"lazy\"><figcaption>&#9829; {likes}</figcaption></figure>\n",
            id = escape_attr(&photo.id),
            url = escape_attr(&photo.url),
            likes = photo.likes,
        ));
    }
    markup
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;").replace('\'', "&#39;")
}
