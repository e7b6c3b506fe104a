//! Conversions from the Deluge wire shapes to [`Torrent`] records.

use std::collections::BTreeMap;

use deluge_web_types::Torrent;

use crate::wire::{FileNode, TorrentEntry, UiUpdate};

/// A `web.update_ui` digest entry together with the torrent hash it was keyed by.
#[derive(Debug)]
pub(crate) struct KeyedTorrentEntry(pub(crate) String, pub(crate) TorrentEntry);

impl From<KeyedTorrentEntry> for Torrent {
    fn from(entry: KeyedTorrentEntry) -> Self {
        let KeyedTorrentEntry(id, value) = entry;
        Self {
            id,
            name: value.name,
            progress: value.progress,
            ratio: value.ratio,
            files: Vec::new(),
            message: Some(value.message),
        }
    }
}

impl UiUpdate {
    /// All torrents of the digest, ordered by hash.
    pub(crate) fn into_torrents(self) -> Vec<Torrent> {
        self.torrents
            .unwrap_or_default()
            .into_iter()
            .map(|(id, entry)| KeyedTorrentEntry(id, entry).into())
            .collect()
    }
}

impl FileNode {
    fn path(&self) -> &str {
        match self {
            Self::File(f) => &f.path,
            Self::Dir(d) => &d.path,
            Self::Other => "",
        }
    }

    fn ratio(&self) -> f64 {
        match self {
            Self::File(f) => f.ratio,
            Self::Dir(d) => d.ratio,
            Self::Other => 0.0,
        }
    }

    fn progress(&self) -> f64 {
        match self {
            Self::File(f) => f.progress,
            Self::Dir(d) => d.progress,
            Self::Other => 0.0,
        }
    }

    /// Child nodes, `None` for anything that is not a directory.
    fn children(&self) -> Option<&BTreeMap<String, FileNode>> {
        match self {
            Self::Dir(d) => Some(&d.contents),
            _ => None,
        }
    }
}

/// Builds the record for `id` out of a `web.get_torrent_files` result.
///
/// Returns `None` unless the root is a directory. The torrent itself is the
/// first entry of the root. Only its immediate children are listed: files
/// nested in sub-directories are not part of the returned file list.
pub(crate) fn torrent_from_files(id: &str, root: FileNode) -> Option<Torrent> {
    let FileNode::Dir(root) = root else {
        return None;
    };

    let Some((_, top)) = root.contents.into_iter().next() else {
        return Some(Torrent {
            id: id.to_owned(),
            ..Default::default()
        });
    };

    let files = match top.children() {
        Some(children) if !children.is_empty() => children
            .iter()
            .filter(|(_, node)| matches!(node, FileNode::File(_)))
            .map(|(name, _)| name.clone())
            .collect(),
        // single file torrent
        _ => vec![top.path().to_owned()],
    };

    Some(Torrent {
        id: id.to_owned(),
        name: top.path().to_owned(),
        progress: top.progress(),
        ratio: top.ratio(),
        files,
        message: None,
    })
}
