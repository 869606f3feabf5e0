use super::NavEntry;

/// Whether `entry` should render as active for `pathname`.
///
/// Disabled, href-less and external entries are never active. A matcher,
/// when present, decides alone; otherwise the path must equal the href
/// exactly (no trailing-slash normalization, no case folding).
pub fn is_nav_item_active(entry: &NavEntry, pathname: &str) -> bool {
    if entry.disabled {
        return false;
    }
    let href = match entry.href.as_deref() {
        Some(href) if !href.is_empty() => href,
        _ => return false,
    };
    if entry.external {
        return false;
    }

    match &entry.matcher {
        Some(matcher) => matcher.matches(pathname),
        None => pathname == href,
    }
}

/// First active entry in depth-first order, parents before children.
pub fn find_active<'a>(entries: &'a [NavEntry], pathname: &str) -> Option<&'a NavEntry> {
    entries.iter().find_map(|entry| {
        if is_nav_item_active(entry, pathname) {
            Some(entry)
        } else {
            find_active(&entry.items, pathname)
        }
    })
}
