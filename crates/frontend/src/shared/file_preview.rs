//! Pending uploads and their object-URL previews.
//!
//! Every object URL is owned by a [`PreviewHandle`]; dropping the handle
//! revokes the URL. Handles live only inside [`PendingUploads`], so removing
//! an entry, clearing the list, taking the files for submit, or dropping the
//! list with its page each revoke a URL exactly once.

use std::rc::Rc;

use uuid::Uuid;
use web_sys::File;

pub const ACCEPTED_DOCUMENTS: &str = "image/*,application/pdf,.doc,.docx";

type Revoke = Rc<dyn Fn(&str)>;

pub struct PreviewHandle {
    url: String,
    revoke: Revoke,
}

impl PreviewHandle {
    pub fn new(url: String, revoke: Revoke) -> Self {
        Self { url, revoke }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        (self.revoke)(&self.url);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: f64,
    pub mime: String,
}

impl FileMeta {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

pub struct PendingUpload<F> {
    pub id: Uuid,
    pub file: F,
    pub meta: FileMeta,
    preview: Option<PreviewHandle>,
}

/// Render-ready snapshot of one pending upload.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRow {
    pub id: Uuid,
    pub name: String,
    pub size_label: String,
    pub is_image: bool,
    pub url: Option<String>,
}

pub struct PendingUploads<F> {
    items: Vec<PendingUpload<F>>,
}

impl<F> Default for PendingUploads<F> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<F> PendingUploads<F> {
    pub fn add(&mut self, file: F, meta: FileMeta, preview: Option<PreviewHandle>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(PendingUpload { id, file, meta, preview });
        id
    }

    pub fn remove(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rows(&self) -> Vec<PendingRow> {
        self.items
            .iter()
            .map(|item| PendingRow {
                id: item.id,
                name: item.meta.name.clone(),
                size_label: format_file_size(item.meta.size),
                is_image: item.meta.is_image(),
                url: item.preview.as_ref().map(|p| p.url().to_string()),
            })
            .collect()
    }

    /// Hands the files over for upload and releases every preview.
    pub fn take_files(&mut self) -> Vec<F> {
        self.items.drain(..).map(|item| item.file).collect()
    }
}

impl<F: Clone> PendingUploads<F> {
    /// Files for a submit that may still fail; previews stay alive.
    pub fn files(&self) -> Vec<F> {
        self.items.iter().map(|item| item.file.clone()).collect()
    }
}

pub fn format_file_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    if bytes < KB {
        format!("{} B", bytes.max(0.0) as u64)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

fn revoke_object_url(url: &str) {
    if web_sys::Url::revoke_object_url(url).is_err() {
        log::warn!("could not revoke preview url {}", url);
    }
}

/// Object URL for a browser file, revoked when the handle is dropped.
pub fn browser_preview(file: &File) -> Option<PreviewHandle> {
    let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
    Some(PreviewHandle::new(url, Rc::new(revoke_object_url)))
}

pub fn browser_meta(file: &File) -> FileMeta {
    FileMeta {
        name: file.name(),
        size: file.size(),
        mime: file.type_(),
    }
}

/// Adds every file of a picker or drop event.
pub fn add_file_list(uploads: &mut PendingUploads<File>, list: Option<web_sys::FileList>) {
    let Some(list) = list else { return };
    for index in 0..list.length() {
        if let Some(file) = list.item(index) {
            let meta = browser_meta(&file);
            let preview = browser_preview(&file);
            uploads.add(file, meta, preview);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Ledger {
        created: RefCell<u32>,
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl Ledger {
        fn new() -> Self {
            Self {
                created: RefCell::new(0),
                revoked: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn handle(&self) -> PreviewHandle {
            let n = {
                let mut c = self.created.borrow_mut();
                *c += 1;
                *c
            };
            let revoked = Rc::clone(&self.revoked);
            PreviewHandle::new(
                format!("blob:test/{}", n),
                Rc::new(move |url: &str| revoked.borrow_mut().push(url.to_string())),
            )
        }

        fn revoked(&self) -> Vec<String> {
            let mut v = self.revoked.borrow().clone();
            v.sort();
            v
        }
    }

    fn meta(name: &str, mime: &str) -> FileMeta {
        FileMeta { name: name.into(), size: 2048.0, mime: mime.into() }
    }

    #[test]
    fn removing_one_entry_revokes_only_its_url() {
        let ledger = Ledger::new();
        let mut uploads = PendingUploads::default();
        let a = uploads.add("a", meta("a.png", "image/png"), Some(ledger.handle()));
        uploads.add("b", meta("b.pdf", "application/pdf"), Some(ledger.handle()));

        uploads.remove(a);
        assert_eq!(ledger.revoked(), ["blob:test/1"]);
        uploads.remove(a);
        assert_eq!(ledger.revoked().len(), 1);
        assert_eq!(uploads.len(), 1);
    }

    #[test]
    fn every_exit_path_revokes_exactly_once() {
        let ledger = Ledger::new();
        {
            let mut uploads = PendingUploads::default();
            for i in 0..3 {
                uploads.add(i, meta("f", "image/jpeg"), Some(ledger.handle()));
            }
            assert_eq!(uploads.files(), vec![0, 1, 2]);
            assert!(ledger.revoked().is_empty());

            let files = uploads.take_files();
            assert_eq!(files, vec![0, 1, 2]);
            assert!(uploads.is_empty());

            uploads.add(9, meta("g", "image/jpeg"), Some(ledger.handle()));
            uploads.add(10, meta("h", "image/jpeg"), Some(ledger.handle()));
            uploads.clear();

            uploads.add(11, meta("i", "image/jpeg"), Some(ledger.handle()));
        }
        let revoked = ledger.revoked();
        assert_eq!(revoked.len(), 6);
        let mut unique = revoked.clone();
        unique.dedup();
        assert_eq!(unique, revoked);
    }

    #[test]
    fn rows_describe_pending_files() {
        let ledger = Ledger::new();
        let mut uploads = PendingUploads::default();
        uploads.add((), meta("quote.pdf", "application/pdf"), None);
        uploads.add((), meta("shot.png", "image/png"), Some(ledger.handle()));
        let rows = uploads.rows();
        assert_eq!(rows[0].url, None);
        assert!(!rows[0].is_image);
        assert_eq!(rows[1].url.as_deref(), Some("blob:test/1"));
        assert_eq!(rows[1].size_label, "2.0 KB");
    }

    #[test]
    fn file_sizes_are_human_readable() {
        assert_eq!(format_file_size(512.0), "512 B");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(5.0 * 1024.0 * 1024.0), "5.0 MB");
    }
}
