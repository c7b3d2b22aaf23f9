/// The folio.toml at the workspace root must load and render a complete page.
use folio::{render_page, Config, FormContext, RenderMode};
use std::path::Path;

fn shipped_config() -> Config {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../folio.toml");
    Config::load(path).expect("workspace folio.toml should parse")
}

#[test]
fn test_shipped_config_content() {
    let config = shipped_config();
    assert_eq!(config.site.projects.len(), 4);
    assert_eq!(config.site.skills.len(), 15);
    assert_eq!(config.site.links.iter().filter(|l| l.download).count(), 1);
    assert!(folio::contact::is_valid_email(&config.site.contact_email));
}

#[test]
fn test_shipped_config_renders_every_project() {
    let config = shipped_config();
    let html = render_page(&config.site, &FormContext::empty(), &RenderMode::Server).into_string();

    for project in &config.site.projects {
        assert!(html.contains(&project.repo), "missing {}", project.title);
    }
    assert_eq!(html.matches("View on GitHub").count(), config.site.projects.len());
    assert!(html.contains("<p>© 2024 Sanjana Iyer.</p>"));
}
