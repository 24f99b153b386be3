//! Export command implementation.
//!
//! Emits the site configuration in the schema the consuming generator
//! expects: a single JSON object with `base`, `lang`, `title`,
//! `description`, and a `themeConfig` holding nav, sidebar, social links,
//! and footer. Nav and sidebar entries use the generator's `{text, link}`
//! shape.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue, json};

use crate::cli::args::ExportArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute export command
pub fn run_export(args: &ExportArgs, config: &SiteConfig) -> Result<()> {
    let record = build_record(config);

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("export"; "wrote config to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Build the generator-facing configuration record.
///
/// Key order matters for stable diffs, hence the explicit Map inserts
/// (serde_json runs with `preserve_order`).
fn build_record(config: &SiteConfig) -> JsonValue {
    let mut obj = Map::new();

    obj.insert("base".to_string(), json!(config.site.base));
    obj.insert("lang".to_string(), json!(config.site.language));
    obj.insert("title".to_string(), json!(config.site.title));
    obj.insert("description".to_string(), json!(config.site.description));

    let mut theme = Map::new();

    let nav: Vec<JsonValue> = config
        .theme
        .nav
        .iter()
        .map(|item| json!({ "text": item.label, "link": item.link }))
        .collect();
    theme.insert("nav".to_string(), JsonValue::Array(nav));

    let sidebar: Vec<JsonValue> = config
        .theme
        .sidebar
        .iter()
        .map(|section| {
            let items: Vec<JsonValue> = section
                .items
                .iter()
                .map(|item| json!({ "text": item.label, "link": item.link }))
                .collect();
            json!({ "text": section.label, "items": items })
        })
        .collect();
    theme.insert("sidebar".to_string(), JsonValue::Array(sidebar));

    let social: Vec<JsonValue> = config
        .theme
        .social
        .iter()
        .map(|s| json!({ "icon": s.icon, "link": s.link }))
        .collect();
    theme.insert("socialLinks".to_string(), JsonValue::Array(social));

    theme.insert(
        "footer".to_string(),
        json!({
            "message": config.theme.footer.message,
            "copyright": config.theme.footer.copyright,
        }),
    );

    obj.insert("themeConfig".to_string(), JsonValue::Object(theme));
    JsonValue::Object(obj)
}
