//! Icon catalog - the frozen, ordered set of icon descriptors
//!
//! The catalog is a `static` array: it is built once, lives for the whole
//! process and cannot be mutated. Readers on any thread share it without
//! locking. The `idx == position` invariant is checked at compile time;
//! the remaining invariants are checked once by [`IconCatalog::checked`].

use crate::icon::{ICON_ROOT, ICON_SUFFIX, IconDescriptor};
use crate::{Error, Result};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Authored display order. Append new entries at the end.
const ICON_TABLE: [IconDescriptor; 10] = [
    IconDescriptor::new(0, "Apple", "/icons/apple-icon-symbolic.svg"),
    IconDescriptor::new(1, "Ubuntu", "/icons/ubuntu-icon-symbolic.svg"),
    IconDescriptor::new(2, "Fedora", "/icons/fedora-icon-symbolic.svg"),
    IconDescriptor::new(3, "Linux", "/icons/linux-icon-symbolic.svg"),
    IconDescriptor::new(4, "Debian", "/icons/debian-icon-symbolic.svg"),
    IconDescriptor::new(5, "Arch", "/icons/arch-icon-symbolic.svg"),
    IconDescriptor::new(6, "Manjaro", "/icons/manjaro-icon-symbolic.svg"),
    IconDescriptor::new(7, "Pop!_OS", "/icons/pop-os-icon-symbolic.svg"),
    IconDescriptor::new(8, "OpenSUSE", "/icons/opensuse-icon-symbolic.svg"),
    IconDescriptor::new(9, "Windows", "/icons/windows-icon-symbolic.svg"),
];

const _: () = {
    let mut i = 0;
    while i < ICON_TABLE.len() {
        assert!(ICON_TABLE[i].idx == i, "icon idx must equal its position");
        i += 1;
    }
};

pub static ICONS: [IconDescriptor; 10] = ICON_TABLE;

static CATALOG: IconCatalog = IconCatalog { entries: &ICONS };

static CHECKED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Read-only view over an ordered slice of descriptors.
#[derive(Debug, Clone, Copy)]
pub struct IconCatalog {
    entries: &'static [IconDescriptor],
}

impl IconCatalog {
    /// The process-wide catalog
    pub fn global() -> &'static IconCatalog {
        &CATALOG
    }

    /// The process-wide catalog, validated on first call.
    ///
    /// The check runs once; later calls return the cached verdict.
    pub fn checked() -> Result<&'static IconCatalog> {
        let verdict = CHECKED.get_or_init(|| {
            let verdict = check(CATALOG.entries);
            match &verdict {
                Ok(()) => tracing::debug!("Icon catalog validated ({} entries)", CATALOG.count()),
                Err(reason) => tracing::error!("Icon catalog is invalid: {}", reason),
            }
            verdict
        });

        match verdict {
            Ok(()) => Ok(&CATALOG),
            Err(reason) => Err(Error::InvalidCatalog(reason.clone())),
        }
    }

    /// All descriptors in authored order
    pub fn all(&self) -> &'static [IconDescriptor] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, IconDescriptor> {
        self.entries.iter()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&'static IconDescriptor> {
        self.entries.get(index)
    }

    /// Look up the descriptor whose `idx` equals `index`.
    ///
    /// Negative and out-of-range indices yield [`Error::NotFound`].
    pub fn get_by_index(&self, index: i64) -> Result<IconDescriptor> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .copied()
            .ok_or(Error::NotFound {
                index,
                count: self.count(),
            })
    }

    /// Case-insensitive exact match on the display title
    pub fn find_by_title(&self, title: &str) -> Option<&'static IconDescriptor> {
        self.entries
            .iter()
            .find(|icon| icon.title.eq_ignore_ascii_case(title))
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&'static IconDescriptor> {
        self.entries.iter().find(|icon| icon.slug() == slug)
    }
}

impl IntoIterator for &IconCatalog {
    type Item = &'static IconDescriptor;
    type IntoIter = std::slice::Iter<'static, IconDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check every catalog invariant over `entries`.
pub fn validate(entries: &[IconDescriptor]) -> Result<()> {
    check(entries).map_err(Error::InvalidCatalog)
}

fn check(entries: &[IconDescriptor]) -> std::result::Result<(), String> {
    let mut titles = HashSet::new();
    let mut paths = HashSet::new();

    for (position, icon) in entries.iter().enumerate() {
        if icon.idx != position {
            return Err(format!("entry at position {} has idx {}", position, icon.idx));
        }
        if icon.title.trim().is_empty() {
            return Err(format!("entry {} has an empty title", position));
        }
        if !icon.path.starts_with(ICON_ROOT) || !icon.path.ends_with(ICON_SUFFIX) {
            return Err(format!(
                "entry {} path {:?} is not of the form {}<name>{}",
                position, icon.path, ICON_ROOT, ICON_SUFFIX
            ));
        }
        if icon.slug().is_empty() {
            return Err(format!("entry {} path {:?} has no icon name", position, icon.path));
        }
        if !titles.insert(icon.title) {
            return Err(format!("duplicate title {:?} at entry {}", icon.title, position));
        }
        if !paths.insert(icon.path) {
            return Err(format!("duplicate path {:?} at entry {}", icon.path, position));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_all_agree() {
        let catalog = IconCatalog::global();
        assert_eq!(catalog.count(), 10);
        assert_eq!(catalog.all().len(), catalog.count());
    }

    #[test]
    fn test_idx_matches_position() {
        let catalog = IconCatalog::global();
        for i in 0..catalog.count() {
            let icon = catalog.get_by_index(i as i64).unwrap();
            assert_eq!(icon.idx, i);
        }
    }

    #[test]
    fn test_first_and_last_entries() {
        let catalog = IconCatalog::global();
        assert_eq!(
            catalog.get_by_index(0).unwrap(),
            IconDescriptor::new(0, "Apple", "/icons/apple-icon-symbolic.svg")
        );
        assert_eq!(
            catalog.get_by_index(9).unwrap(),
            IconDescriptor::new(9, "Windows", "/icons/windows-icon-symbolic.svg")
        );
    }

    #[test]
    fn test_out_of_range_is_not_found() {
        let catalog = IconCatalog::global();
        let count = catalog.count() as i64;

        for index in [-1, count, i64::MIN, i64::MAX] {
            match catalog.get_by_index(index) {
                Err(Error::NotFound { index: reported, count: c }) => {
                    assert_eq!(reported, index);
                    assert_eq!(c, catalog.count());
                }
                other => panic!("expected NotFound for {}, got {:?}", index, other),
            }
        }
    }

    #[test]
    fn test_titles_and_paths_distinct() {
        let catalog = IconCatalog::global();
        let titles: HashSet<_> = catalog.iter().map(|i| i.title).collect();
        let paths: HashSet<_> = catalog.iter().map(|i| i.path).collect();
        assert_eq!(titles.len(), catalog.count());
        assert_eq!(paths.len(), catalog.count());
    }

    #[test]
    fn test_authored_order_is_stable() {
        let expected = [
            "Apple", "Ubuntu", "Fedora", "Linux", "Debian", "Arch", "Manjaro", "Pop!_OS",
            "OpenSUSE", "Windows",
        ];
        let catalog = IconCatalog::global();
        let first: Vec<_> = catalog.iter().map(|i| i.title).collect();
        let second: Vec<_> = catalog.all().iter().map(|i| i.title).collect();
        assert_eq!(first, expected);
        assert_eq!(first, second);
    }

    #[test]
    fn test_modifying_copy_leaves_catalog_untouched() {
        let catalog = IconCatalog::global();
        let mut icon = catalog.get_by_index(0).unwrap();
        icon.title = "Changed";
        assert_eq!(icon.title, "Changed");

        assert_eq!(catalog.get_by_index(0).unwrap().title, "Apple");
        assert_eq!(catalog.all()[0].title, "Apple");
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        assert!(validate(&ICONS).is_ok());
        let catalog = IconCatalog::checked().unwrap();
        assert_eq!(catalog.count(), 10);
    }

    #[test]
    fn test_validate_rejects_gap() {
        static GAP: [IconDescriptor; 2] = [
            IconDescriptor::new(0, "Apple", "/icons/apple-icon-symbolic.svg"),
            IconDescriptor::new(2, "Ubuntu", "/icons/ubuntu-icon-symbolic.svg"),
        ];
        assert!(matches!(validate(&GAP), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let dup_title = [
            IconDescriptor::new(0, "Arch", "/icons/arch-icon-symbolic.svg"),
            IconDescriptor::new(1, "Arch", "/icons/manjaro-icon-symbolic.svg"),
        ];
        let dup_path = [
            IconDescriptor::new(0, "Arch", "/icons/arch-icon-symbolic.svg"),
            IconDescriptor::new(1, "Manjaro", "/icons/arch-icon-symbolic.svg"),
        ];
        let err = validate(&dup_title).unwrap_err().to_string();
        assert!(err.contains("duplicate title"));
        let err = validate(&dup_path).unwrap_err().to_string();
        assert!(err.contains("duplicate path"));
    }

    #[test]
    fn test_validate_rejects_malformed_path() {
        let bad = [
            IconDescriptor::new(0, "Arch", "arch.png"),
        ];
        let empty_name = [
            IconDescriptor::new(0, "Arch", "/icons/-icon-symbolic.svg"),
        ];
        let empty_title = [
            IconDescriptor::new(0, " ", "/icons/arch-icon-symbolic.svg"),
        ];
        assert!(validate(&bad).is_err());
        assert!(validate(&empty_name).is_err());
        assert!(validate(&empty_title).is_err());
    }

    #[test]
    fn test_find_by_title_and_slug() {
        let catalog = IconCatalog::global();
        assert_eq!(catalog.find_by_title("opensuse").map(|i| i.idx), Some(8));
        assert_eq!(catalog.find_by_slug("pop-os").map(|i| i.title), Some("Pop!_OS"));
        assert!(catalog.find_by_title("Haiku").is_none());
        assert!(catalog.find_by_slug("haiku").is_none());
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                std::thread::spawn(move || {
                    let catalog = IconCatalog::global();
                    catalog.get_by_index(n % 10).unwrap().idx
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), n % 10);
        }
    }
}
