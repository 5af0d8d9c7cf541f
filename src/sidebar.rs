//! Sidebar load controller.
//!
//! Ownership model:
//! - The sidebar owns the presentation surface and the single in-flight
//!   fetch job; replacing the job drops the old one, which severs its
//!   completion channel (cancellation by disinterest).
//! - State transitions happen only on the host thread, via `poll` or
//!   `wait_for_load`; the worker thread only fetches and sends, so no
//!   superseded completion can ever reach a controller that has moved on.
//! - The last published model stays visible while a reload is in flight;
//!   only a landed completion replaces it.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::data::AnnotationSet;
use crate::grouping::build_groups;
use crate::job::AnnotationJob;
use crate::source::AnnotationSource;
use crate::tree::{AnnotationRef, DisplayTree, RowKey, SidebarModel};

/// Event-anchored geometry for context-menu placement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuAnchor {
    /// Horizontal event position in surface coordinates.
    pub x: f64,
    /// Vertical event position in surface coordinates.
    pub y: f64,
}

/// Rendering collaborator fed by the sidebar.
pub trait PresentationSurface {
    /// Take ownership of a published snapshot, discarding the previous one.
    fn publish(&mut self, model: SidebarModel);

    /// Show a context menu anchored at `anchor` for `annotation`.
    fn show_context_menu(&mut self, anchor: MenuAnchor, annotation: &AnnotationRef);
}

/// Load-lifecycle counters.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadStats {
    /// Fetch jobs started, including superseded ones.
    pub loads_started: u64,
    /// Non-empty results published as trees.
    pub trees_published: u64,
    /// Empty results published as the no-annotations placeholder.
    pub empty_published: u64,
}

type ActivationListener = Box<dyn FnMut(&AnnotationRef)>;

/// Annotation sidebar controller: owns the refresh lifecycle and bridges
/// row selection back to annotation activations.
pub struct AnnotationSidebar<P: PresentationSurface> {
    surface: P,
    document: Option<Arc<dyn AnnotationSource>>,
    job: Option<AnnotationJob>,
    model: SidebarModel,
    selected: Option<RowKey>,
    listeners: Vec<ActivationListener>,
    stats: LoadStats,
}

impl<P: PresentationSurface> AnnotationSidebar<P> {
    /// Create a sidebar publishing the loading placeholder to `surface`.
    pub fn new(mut surface: P) -> Self {
        let model = SidebarModel::loading();
        surface.publish(model.clone());
        Self {
            surface,
            document: None,
            job: None,
            model,
            selected: None,
            listeners: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    /// Attach a document and start loading its annotations.
    ///
    /// Documents that cannot carry annotations are ignored; the current
    /// document and model stay in place.
    pub fn set_document(&mut self, document: Arc<dyn AnnotationSource>) {
        if !document.supports_annotations() {
            debug!(source_id = %document.id(), "document rejected, no annotation support");
            return;
        }
        self.document = Some(document);
        self.reload();
    }

    /// An annotation was added to the document; reload.
    pub fn annotation_added(&mut self) {
        self.reload();
    }

    /// An annotation changed in the document; reload.
    pub fn annotation_changed(&mut self) {
        self.reload();
    }

    /// An annotation was removed from the document; reload.
    pub fn annotation_removed(&mut self) {
        self.reload();
    }

    /// Invalidate any in-flight fetch and start a new one.
    ///
    /// Without an attached document this is inert. The previous job is
    /// dropped first, so a stale completion can never be observed.
    pub fn reload(&mut self) {
        let Some(document) = self.document.clone() else {
            return;
        };
        // Discard any prior request before starting a new one; its
        // completion channel closes here and a late result is inert.
        self.job = None;
        self.job = Some(AnnotationJob::spawn(Arc::clone(&document)));
        self.stats.loads_started += 1;
        debug!(source_id = %document.id(), "annotation load started");
    }

    /// Pump the in-flight fetch without blocking.
    ///
    /// Returns `true` when a completion landed and a new model was
    /// published. Call from the host event loop.
    pub fn poll(&mut self) -> bool {
        let (set, elapsed_ms) = {
            let Some(job) = self.job.as_ref() else {
                return false;
            };
            let Some(set) = job.try_finish() else {
                return false;
            };
            (set, job.elapsed().as_millis())
        };
        self.job = None;
        self.finish(set, elapsed_ms);
        true
    }

    /// Wait up to `timeout` for the in-flight fetch to land.
    ///
    /// Returns `true` when a completion landed within the timeout; `false`
    /// when nothing is loading or the fetch is still running.
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        let (set, elapsed_ms) = {
            let Some(job) = self.job.as_ref() else {
                return false;
            };
            let Some(set) = job.wait_finish(timeout) else {
                return false;
            };
            (set, job.elapsed().as_millis())
        };
        self.job = None;
        self.finish(set, elapsed_ms);
        true
    }

    fn finish(&mut self, set: AnnotationSet, elapsed_ms: u128) {
        if set.is_empty() {
            debug!(elapsed_ms, "annotation load finished with no annotations");
            self.stats.empty_published += 1;
            self.publish(SidebarModel::no_annotations());
            return;
        }
        let tree = DisplayTree::from_groups(build_groups(&set.pages));
        debug!(
            elapsed_ms,
            annotations = set.annotation_count(),
            groups = tree.groups.len(),
            "annotation load finished"
        );
        self.stats.trees_published += 1;
        self.publish(SidebarModel::Tree(tree));
    }

    fn publish(&mut self, model: SidebarModel) {
        self.selected = None;
        self.model = model.clone();
        self.surface.publish(model);
    }

    /// The currently published model.
    pub fn model(&self) -> &SidebarModel {
        &self.model
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.job.is_some()
    }

    /// Load-lifecycle counters.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Map a focused row back to its annotation record; group-header and
    /// placeholder rows carry no mapping.
    pub fn annotation_at(&self, row: RowKey) -> Option<AnnotationRef> {
        self.model.annotation_at(row).cloned()
    }

    /// Register a listener for annotation-activated notifications.
    pub fn connect_annotation_activated(
        &mut self,
        listener: impl FnMut(&AnnotationRef) + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Record a selection gesture on `row`.
    ///
    /// Selecting a leaf emits exactly one activation, including re-selection
    /// of the already-selected row (so an external view scrolled away gets
    /// re-revealed). Group and placeholder rows emit nothing.
    pub fn select_row(&mut self, row: RowKey) {
        self.selected = Some(row);
        if let Some(annotation) = self.model.annotation_at(row).cloned() {
            self.emit_activated(&annotation);
        }
    }

    /// Handle a context-menu gesture on `row` at `anchor`.
    ///
    /// A leaf row is selected, activated once, and gets a menu anchored at
    /// the event location; returns `false` for rows without a mapping.
    pub fn request_context_menu(&mut self, row: RowKey, anchor: MenuAnchor) -> bool {
        let Some(annotation) = self.model.annotation_at(row).cloned() else {
            return false;
        };
        self.selected = Some(row);
        self.emit_activated(&annotation);
        self.surface.show_context_menu(anchor, &annotation);
        true
    }

    /// Handle a keyboard-invoked context-menu gesture on the tracked
    /// selection. Shows the menu without re-emitting activation; returns
    /// `false` when nothing mapped is selected.
    pub fn request_context_menu_for_selection(&mut self, anchor: MenuAnchor) -> bool {
        let Some(row) = self.selected else {
            return false;
        };
        let Some(annotation) = self.model.annotation_at(row).cloned() else {
            return false;
        };
        self.surface.show_context_menu(anchor, &annotation);
        true
    }

    fn emit_activated(&mut self, annotation: &AnnotationRef) {
        for listener in &mut self.listeners {
            listener(annotation);
        }
    }
}
