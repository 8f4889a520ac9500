//! Generated HTML index of mounted documents

use crate::document::SpecTree;
use crate::error::MountError;
use crate::mount::{encode_url_path, MountRule, RouteTable};
use bytes::Bytes;
use std::borrow::Cow;

/// `<ul>` of links, one per mounted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    html: String,
}

impl IndexPage {
    /// Render one `<li><a href="/path">path</a></li>` per URL path, in order.
    ///
    /// The href is percent-encoded like the mount's route; the text is not.
    pub fn from_paths<'a>(url_paths: impl IntoIterator<Item = &'a str>) -> Self {
        let mut html = String::from("<ul>");
        for url_path in url_paths {
            let encoded = encode_url_path(url_path);
            let href = escape_html(&encoded);
            let text = escape_html(url_path);
            html.push_str(&format!(r#"<li><a href="/{href}">{text}</a></li>"#));
        }
        html.push_str("</ul>");
        Self { html }
    }

    pub fn from_routes(table: &RouteTable) -> Self {
        Self::from_paths(table.url_paths())
    }

    /// Derive the mounts for `tree` and render their index
    pub fn build(tree: &SpecTree, rule: &MountRule) -> Result<Self, MountError> {
        Ok(Self::from_routes(&RouteTable::build(tree, rule)?))
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.html)
    }
}

fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
