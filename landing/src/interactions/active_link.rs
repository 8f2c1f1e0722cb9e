//! Navigation highlight driven by the section under the viewport center.

/// Which navigation link is marked active.
///
/// Holds the `href` of every navigation link in document order. Each time a
/// section crosses the center band, every link is cleared and the link
/// pointing at `#<section id>` becomes active.
#[derive(Debug, Clone)]
pub struct ActiveLink {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl ActiveLink {
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hrefs: hrefs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Apply one observer batch of `(section id, is_intersecting)` entries.
    ///
    /// Entries are applied in order, so the last intersecting one wins.
    /// Returns `true` when at least one entry was applied and the links must
    /// be repainted.
    pub fn apply<'a, I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut touched = false;
        for (section_id, intersecting) in batch {
            if !intersecting {
                continue;
            }
            touched = true;
            self.active = self
                .hrefs
                .iter()
                .position(|href| link_targets(href, section_id));
        }
        touched
    }

    #[cfg(test)]
    fn active(&self) -> Option<usize> {
        self.active
    }

    #[cfg(test)]
    fn active_href(&self) -> Option<&str> {
        self.active.map(|idx| self.hrefs[idx].as_str())
    }

    /// Whether the link at `idx` should carry the active marker.
    pub fn is_active(&self, idx: usize) -> bool {
        self.active == Some(idx)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.hrefs.len()
    }
}

fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}
