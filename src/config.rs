use crate::constants::ID_SITE_CONTENT;
use crate::core::SiteContent;
use web_sys as web;

// Default copy; a page can replace it with an inline JSON script element.
static EMBEDDED_CONTENT: &str = include_str!("../assets/site.json");

pub fn load_content(document: &web::Document) -> SiteContent {
    let inline = document
        .get_element_by_id(ID_SITE_CONTENT)
        .and_then(|el| el.text_content())
        .filter(|json| !json.trim().is_empty());
    if let Some(json) = inline {
        match SiteContent::from_json(&json) {
            Ok(content) => {
                log::info!("[config] using page content from #{}", ID_SITE_CONTENT);
                return content;
            }
            Err(e) => log::warn!("[config] {}; falling back to embedded content", e),
        }
    }
    match SiteContent::from_json(EMBEDDED_CONTENT) {
        Ok(content) => content,
        Err(e) => {
            log::error!("[config] embedded content invalid: {}", e);
            SiteContent::empty()
        }
    }
}
