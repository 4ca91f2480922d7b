use crate::constants::{ID_NEWS_ARCHIVE, ID_TOP_NEWS};
use crate::core::{latest_news_html, news_archive_html};
use crate::dom;
use crate::effects::{Effects, Page};

/// Top page: newest entry only.
pub fn render_latest(page: &Page, _fx: &mut Effects) -> anyhow::Result<()> {
    let Some(container) = dom::by_id(&page.document, ID_TOP_NEWS) else {
        log::debug!("[news] no #{}", ID_TOP_NEWS);
        return Ok(());
    };
    if let Some(html) = latest_news_html(&page.content.news) {
        container.set_inner_html(&html);
    }
    Ok(())
}

pub fn render_archive(page: &Page, _fx: &mut Effects) -> anyhow::Result<()> {
    let Some(container) = dom::by_id(&page.document, ID_NEWS_ARCHIVE) else {
        log::debug!("[news] no #{}", ID_NEWS_ARCHIVE);
        return Ok(());
    };
    container.set_inner_html(&news_archive_html(&page.content.news));
    Ok(())
}
