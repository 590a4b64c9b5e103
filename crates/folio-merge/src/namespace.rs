//! Per-archive resource namespacing

use std::collections::BTreeMap;

use folio_formats::archive::RESOURCE_PREFIX;

/// Compute the collision-free rename for one archive's resources
///
/// Every path keeps the conventional `resources/` prefix and gets the
/// archive index injected in front of its remainder, so
/// `resources/img.png` in archive 0 becomes `resources/0_img.png`. A path
/// without the prefix gets the index prepended wholesale.
///
/// For any two distinct archive indices the produced path sets are
/// disjoint; within one archive the mapping is a bijection over its
/// resource paths. Pure function, no I/O.
pub fn namespace_resources<'a, I>(archive_index: usize, paths: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    paths
        .into_iter()
        .map(|path| (path.to_string(), namespaced_path(archive_index, path)))
        .collect()
}

fn namespaced_path(archive_index: usize, path: &str) -> String {
    match path.strip_prefix(RESOURCE_PREFIX) {
        Some(rest) => format!("{RESOURCE_PREFIX}{archive_index}_{rest}"),
        None => format!("{archive_index}_{path}"),
    }
}
