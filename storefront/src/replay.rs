//! Scripted replay of gallery page events

use std::fs;
use std::path::Path;

use cart::SessionStore;
use shared::{PageId, page_debug};

use crate::error::{StorefrontError, StorefrontResult};
use crate::gallery::GalleryPage;
use crate::types::{Navigation, PageEvent};

/// Result of replaying a script against one gallery page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub events_applied: usize,
    /// Set by the last checkout in the script, if any
    pub navigation: Option<Navigation>,
}

/// Read a JSON array of page events
pub fn load_events(path: &Path) -> StorefrontResult<Vec<PageEvent>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StorefrontError::EventScript {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Apply events in order, stopping at the first store failure
pub fn replay<S: SessionStore>(page: &mut GalleryPage<S>, events: &[PageEvent]) -> StorefrontResult<ReplayReport> {
    let mut report = ReplayReport {
        events_applied: 0,
        navigation: None,
    };

    for event in events {
        page_debug!(PageId::current(), "▶️ {:?}", event);
        if let Some(navigation) = page.handle(event)? {
            report.navigation = Some(navigation);
        }
        report.events_applied += 1;
    }

    Ok(report)
}
