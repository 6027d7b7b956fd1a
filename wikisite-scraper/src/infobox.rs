//! Infobox lookup over a parsed HTML document.
//!
//! A Wikipedia infobox is a table of `<th>`/`<td>` row pairs. The website row
//! is located in three steps: the header cell whose text is exactly
//! `"Website"`, the next value cell after it in document order, and the
//! target of the first link inside that cell.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Describes which header row to look for and how to read its value.
#[derive(Debug, Clone)]
pub struct InfoboxQuery {
    pub header_tag: String,
    pub header_text: String,
    pub cell_tag: String,
    pub link_tag: String,
    pub link_attr: String,
}

impl InfoboxQuery {
    /// The "Website" row of a company infobox.
    pub fn website() -> Self {
        Self {
            header_tag: "th".to_string(),
            header_text: "Website".to_string(),
            cell_tag: "td".to_string(),
            link_tag: "a".to_string(),
            link_attr: "href".to_string(),
        }
    }

    /// Parse `html` and run the full lookup.
    pub fn extract(&self, html: &str) -> Result<String> {
        let document = Html::parse_document(html);
        let header = self.find_header(&document)?;
        let cell = self.next_cell(&document, header)?;
        self.first_link_target(cell)
    }

    /// First header element whose text content equals the expected text exactly.
    ///
    /// The text of every descendant text node is joined before comparing, so
    /// `<th>Web<b>site</b></th>` and `<th>Website<!--c--></th>` both match.
    pub fn find_header<'a>(&self, document: &'a Html) -> Result<ElementRef<'a>> {
        let selector = parse_selector(&self.header_tag)?;

        document
            .select(&selector)
            .find(|element| element.text().collect::<String>() == self.header_text)
            .ok_or_else(|| ScrapeError::HeaderNotFound {
                tag: self.header_tag.clone(),
                text: self.header_text.clone(),
            })
    }

    /// First value cell that comes after `header` in document order.
    ///
    /// The header's own descendants count as following it, so a cell nested
    /// inside the header is found before any sibling.
    pub fn next_cell<'a>(&self, document: &'a Html, header: ElementRef<'a>) -> Result<ElementRef<'a>> {
        let header_id = (*header).id();

        document
            .tree
            .root()
            .descendants()
            .skip_while(|node| node.id() != header_id)
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == self.cell_tag)
            .ok_or_else(|| ScrapeError::CellNotFound(self.cell_tag.clone()))
    }

    /// Target attribute of the first link inside `cell`.
    pub fn first_link_target(&self, cell: ElementRef<'_>) -> Result<String> {
        let selector = parse_selector(&self.link_tag)?;

        let link = cell
            .select(&selector)
            .next()
            .ok_or_else(|| ScrapeError::LinkNotFound(self.link_tag.clone()))?;

        let target = link
            .value()
            .attr(&self.link_attr)
            .ok_or_else(|| ScrapeError::LinkWithoutTarget(self.link_attr.clone()))?;

        debug!("Found {} target: {}", self.header_text, target);
        Ok(target.to_string())
    }
}

fn parse_selector(tag: &str) -> Result<Selector> {
    Selector::parse(tag).map_err(|e| ScrapeError::SelectorError(format!("{}: {}", tag, e)))
}
