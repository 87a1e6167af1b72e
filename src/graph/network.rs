/*
 * SPDX-FileCopyrightText: 2026 The WebRank Authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{Identify, NodeId};
use anyhow::{ensure, Context, Result};
use std::io::{BufRead, Write};

/// The target of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// A link whose target identifier is already known.
    Id(NodeId),
    /// A link to the page with the given content; the target identifier is
    /// computed when the graph is built.
    Content(String),
}

impl Link {
    /// Returns the identifier of the target of this link.
    pub fn resolve(&self, identify: &impl Identify) -> NodeId {
        match self {
            Link::Id(id) => id.clone(),
            Link::Content(content) => identify.identify(content.as_bytes()),
        }
    }
}

/// A page: some content and an ordered list of outbound links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    content: String,
    links: Vec<Link>,
}

impl Page {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            links: Vec::new(),
        }
    }

    /// Adds a link to the page with the given identifier.
    pub fn add_link(&mut self, target: NodeId) -> &mut Self {
        self.links.push(Link::Id(target));
        self
    }

    /// Adds a link to the page with the given content.
    pub fn add_link_to(&mut self, content: impl Into<String>) -> &mut Self {
        self.links.push(Link::Content(content.into()));
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the identifier of this page.
    pub fn id(&self, identify: &impl Identify) -> NodeId {
        identify.identify(self.content.as_bytes())
    }
}

/// A finite collection of pages.
///
/// Networks can be stored and loaded in a simple line-oriented text format:
/// the first line contains the number of pages, and then each page takes two
/// lines, the first containing its content, the second the whitespace-separated
/// identifiers of the targets of its links (possibly empty).
///
/// ```
/// use webrank::graph::Network;
///
/// # fn main() -> anyhow::Result<()> {
/// let network = Network::read_text("2\nfirst\nid-of-second\nsecond\n\n".as_bytes())?;
/// assert_eq!(network.num_pages(), 2);
/// assert_eq!(network.pages()[0].links().len(), 1);
/// assert!(network.pages()[1].links().is_empty());
/// #     Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pages: Vec<Page>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_pages: usize) -> Self {
        Self {
            pages: Vec::with_capacity(num_pages),
        }
    }

    pub fn add_page(&mut self, page: Page) -> &mut Self {
        self.pages.push(page);
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn num_pages(&self) -> usize {
        self.pages.len()
    }

    /// Reads a network in text format.
    ///
    /// A missing list of links on the last line is interpreted as an empty
    /// list.
    pub fn read_text(reader: impl BufRead) -> Result<Self> {
        let mut lines = reader.lines();
        let header = lines.next().context("Missing the number of pages")??;
        let num_pages: usize = header
            .trim()
            .parse()
            .with_context(|| format!("Invalid number of pages {:?}", header))?;

        let mut network = Network::with_capacity(num_pages);
        for i in 0..num_pages {
            let content = lines
                .next()
                .with_context(|| format!("Missing content of page {i} of {num_pages}"))??;
            let links = lines.next().transpose()?.unwrap_or_default();

            let mut page = Page::new(content);
            for target in links.split_whitespace() {
                page.add_link(NodeId::from(target));
            }
            network.add_page(page);
        }

        Ok(network)
    }

    /// Writes the network in text format, resolving links expressed as
    /// content with the given identifier.
    pub fn write_text(&self, mut writer: impl Write, identify: &impl Identify) -> Result<()> {
        writeln!(writer, "{}", self.pages.len())?;
        for page in &self.pages {
            ensure!(
                !page.content.contains('\n'),
                "The content of a page cannot span multiple lines: {:?}",
                page.content
            );
            writeln!(writer, "{}", page.content)?;
            let mut first = true;
            for link in &page.links {
                if !first {
                    write!(writer, " ")?;
                }
                write!(writer, "{}", link.resolve(identify))?;
                first = false;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::PrefixIdentifier;

    #[test]
    fn test_read_text() -> Result<()> {
        let network = Network::read_text("3\na\nb c\nb\n\nc\na\n".as_bytes())?;
        assert_eq!(network.num_pages(), 3);
        assert_eq!(network.pages()[0].content(), "a");
        assert_eq!(
            network.pages()[0].links(),
            &[Link::Id("b".into()), Link::Id("c".into())]
        );
        assert!(network.pages()[1].links().is_empty());
        assert_eq!(network.pages()[2].links(), &[Link::Id("a".into())]);
        Ok(())
    }

    #[test]
    fn test_read_text_errors() {
        assert!(Network::read_text("".as_bytes()).is_err());
        assert!(Network::read_text("x\n".as_bytes()).is_err());
        // Two pages announced, one present
        assert!(Network::read_text("2\na\n\n".as_bytes()).is_err());
    }

    #[test]
    fn test_missing_last_links() -> Result<()> {
        let network = Network::read_text("1\nalone".as_bytes())?;
        assert_eq!(network.num_pages(), 1);
        assert!(network.pages()[0].links().is_empty());
        Ok(())
    }

    #[test]
    fn test_write_resolves_content() -> Result<()> {
        let identifier = PrefixIdentifier::new("id-");
        let mut network = Network::new();
        let mut page = Page::new("a");
        page.add_link_to("b").add_link("id-a".into());
        network.add_page(page).add_page(Page::new("b"));

        let mut buffer = Vec::new();
        network.write_text(&mut buffer, &identifier)?;
        assert_eq!(String::from_utf8(buffer)?, "2\na\nid-b id-a\nb\n\n");
        Ok(())
    }

    #[test]
    fn test_write_rejects_multiline_content() {
        let mut network = Network::new();
        network.add_page(Page::new("two\nlines"));
        assert!(network
            .write_text(Vec::new(), &PrefixIdentifier::default())
            .is_err());
    }
}
