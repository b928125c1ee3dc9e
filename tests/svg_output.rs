//! SVG serialization of rendered slides

use serde_json::json;

use slide_templates::{catalog, render, render_with_config, RenderConfig, SvgConfig, Theme};

#[test]
fn test_every_template_renders_svg() {
    for id in catalog().ids() {
        let svg = render(id, None).unwrap();
        assert!(svg.starts_with("<?xml"), "{}", id);
        assert!(svg.contains(r#"viewBox="0 0 1280 720""#), "{}", id);
        assert!(svg.ends_with("</svg>"), "{}", id);
        assert_eq!(
            svg.matches("<g ").count(),
            svg.matches("</g>").count(),
            "unbalanced groups in {}",
            id
        );
    }
}

#[test]
fn test_svg_is_deterministic() {
    for id in catalog().ids() {
        assert_eq!(render(id, None).unwrap(), render(id, None).unwrap(), "{}", id);
    }
}

#[test]
fn test_region_ids_reach_the_svg() {
    let svg = render("minimal-table-of-contents", None).unwrap();
    assert!(svg.contains(r#"id="sections""#));
    assert!(svg.contains(r#"id="sections[0]""#));
    assert!(svg.contains(r#"id="sections[4]""#));
    assert!(!svg.contains(r#"id="sections[5]""#));
}

#[test]
fn test_user_text_is_escaped() {
    let data = json!({ "title": "<script>alert('x')</script>" });
    let svg = render("minimal-bullet-slide", Some(&data)).unwrap();
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;"));
}

#[test]
fn test_images_carry_their_prompt() {
    let data = json!({
        "image": {
            "__image_url__": "https://images.example/office.jpg",
            "__image_prompt__": "Bright open office",
        }
    });
    let svg = render("minimal-image-text-slide", Some(&data)).unwrap();
    assert!(svg.contains(r#"href="https://images.example/office.jpg""#));
    assert!(svg.contains("<title>Bright open office</title>"));
}

#[test]
fn test_font_imports_follow_config() {
    let with_fonts = render("creative-intro-slide", None).unwrap();
    assert!(with_fonts.contains("@import url('https://fonts.googleapis.com/css2?family=Poppins"));

    let config = RenderConfig::new().with_svg(SvgConfig::default().with_embed_fonts(false));
    let without = render_with_config("creative-intro-slide", None, config).unwrap();
    assert!(!without.contains("@import"));
}

#[test]
fn test_theme_file_overrides_colors() {
    let theme = Theme::from_toml(
        r##"
[metadata]
name = "Teal"

[variables]
"primary-accent-color" = "#0f766e"
"card-background-color" = "#f0fdfa"
"##,
    )
    .unwrap();
    assert_eq!(theme.name.as_deref(), Some("Teal"));

    let config = RenderConfig::new().with_theme(theme);
    let svg = render_with_config("minimal-metrics-slide", None, config).unwrap();
    assert!(svg.contains(r##"fill="#0f766e""##));
    assert!(svg.contains(r##"fill="#f0fdfa""##));

    let plain = render("minimal-metrics-slide", None).unwrap();
    assert!(!plain.contains("#0f766e"));
    assert!(plain.contains(r##"fill="#fafafa""##));
}
