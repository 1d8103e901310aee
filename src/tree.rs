use crate::error::{Error, Result};
use std::path::Path;
use walkdir::WalkDir;

/// One visited entry below the rendered root.
struct TreeEntry {
    depth: usize,
    name: String,
    is_dir: bool,
}

/// Renders the directory below `root` as an indented tree.
///
/// Siblings are sorted by name and directories carry a trailing `/`. With
/// `max_depth` set, nothing deeper than that many levels below `root` is shown.
/// Entries that cannot be read are left out of the listing.
pub fn render_tree<P: AsRef<Path>>(root: P, max_depth: Option<usize>) -> Result<String> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("'{}' is not a directory", root.display()),
        )));
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = Vec::new();
    for dir_entry in walker {
        match dir_entry {
            Ok(entry) => entries.push(TreeEntry {
                depth: entry.depth(),
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: entry.file_type().is_dir(),
            }),
            Err(e) if e.depth() == 0 => {
                return Err(Error::TreeError { path: root.display().to_string(), e })
            }
            Err(e) => log::warn!("Skipping unreadable entry: {e}"),
        }
    }

    let label = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut output = format!("{label}/");
    // For every open ancestor level: whether it was the last of its siblings.
    let mut ancestors_last: Vec<bool> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let is_last = is_last_sibling(&entries, index);
        ancestors_last.truncate(entry.depth - 1);

        output.push('\n');
        for &ancestor_last in &ancestors_last {
            output.push_str(if ancestor_last { "    " } else { "│   " });
        }
        output.push_str(if is_last { "└── " } else { "├── " });
        output.push_str(&entry.name);
        if entry.is_dir {
            output.push('/');
        }

        ancestors_last.push(is_last);
    }

    Ok(output)
}

fn is_last_sibling(entries: &[TreeEntry], index: usize) -> bool {
    let depth = entries[index].depth;
    for next in &entries[index + 1..] {
        if next.depth < depth {
            return true;
        }
        if next.depth == depth {
            return false;
        }
    }
    true
}
