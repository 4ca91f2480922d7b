use fnv::FnvHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftTemplate {
    pub key: String,
    pub subject: String,
    /// Newline-delimited; rendered with `<br>` line breaks.
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate draft template key `{0}`")]
    DuplicateDraftKey(String),
    #[error("default draft `{0}` is not a defined template")]
    UnknownDefaultDraft(String),
}

#[derive(Debug, Deserialize)]
struct RawContent {
    #[serde(default)]
    news: Vec<NewsItem>,
    #[serde(default)]
    drafts: Vec<DraftTemplate>,
    #[serde(default)]
    default_draft: Option<String>,
}

/// Copy shown on the site: news entries (newest first) and contact drafts.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub news: Vec<NewsItem>,
    drafts: Vec<DraftTemplate>,
    index: FnvHashMap<String, usize>,
    default_draft: Option<String>,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawContent = serde_json::from_str(json)?;
        Self::new(raw.news, raw.drafts, raw.default_draft)
    }

    pub fn empty() -> Self {
        Self {
            news: Vec::new(),
            drafts: Vec::new(),
            index: FnvHashMap::default(),
            default_draft: None,
        }
    }

    pub fn new(
        news: Vec<NewsItem>,
        drafts: Vec<DraftTemplate>,
        default_draft: Option<String>,
    ) -> Result<Self, ContentError> {
        let mut index = FnvHashMap::default();
        for (i, t) in drafts.iter().enumerate() {
            if index.insert(t.key.clone(), i).is_some() {
                return Err(ContentError::DuplicateDraftKey(t.key.clone()));
            }
        }
        if let Some(key) = &default_draft {
            if !index.contains_key(key) {
                return Err(ContentError::UnknownDefaultDraft(key.clone()));
            }
        }
        Ok(Self {
            news,
            drafts,
            index,
            default_draft,
        })
    }

    pub fn draft(&self, key: &str) -> Option<&DraftTemplate> {
        self.index.get(key).map(|i| &self.drafts[*i])
    }

    pub fn drafts(&self) -> &[DraftTemplate] {
        &self.drafts
    }

    /// Template shown before any category is picked: the configured default,
    /// else the first one.
    pub fn initial_draft(&self) -> Option<&DraftTemplate> {
        match &self.default_draft {
            Some(key) => self.draft(key),
            None => self.drafts.first(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn news_item_html(item: &NewsItem) -> String {
    format!(
        "<article class=\"news-item\">\
<div class=\"news-date\">{}</div>\
<div class=\"news-content\">\
<p class=\"news-title\">{}</p>\
<p class=\"news-summary\">{}</p>\
</div>\
</article>",
        escape_html(&item.date),
        escape_html(&item.title),
        escape_html(&item.summary)
    )
}

/// Markup for the top page: the newest entry only. `None` when there is
/// nothing to show.
pub fn latest_news_html(items: &[NewsItem]) -> Option<String> {
    items.first().map(news_item_html)
}

pub fn news_archive_html(items: &[NewsItem]) -> String {
    items.iter().map(news_item_html).collect()
}

pub fn draft_body_html(body: &str) -> String {
    body.split('\n')
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Clipboard text for "copy full draft".
pub fn compose_draft_text(subject_label: &str, template: &DraftTemplate) -> String {
    format!("{}{}\n\n{}", subject_label, template.subject, template.body)
}

/// Outcome of a clipboard write, mapped to the message the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    ManualCopyNeeded,
}

impl CopyFeedback {
    pub fn from_result<E>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => CopyFeedback::Copied,
            Err(_) => CopyFeedback::ManualCopyNeeded,
        }
    }

    /// `(message, visible_ms)` given the success and failure variants.
    pub fn message<'a>(self, ok: (&'a str, u32), fail: (&'a str, u32)) -> (&'a str, u32) {
        match self {
            CopyFeedback::Copied => ok,
            CopyFeedback::ManualCopyNeeded => fail,
        }
    }
}
