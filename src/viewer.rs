use crate::data::Report;
use crate::fetch::FetchError;
use crate::markdown::{CommonMark, MarkdownRenderer};
use log::{debug, info, warn};
use std::rc::Rc;
use yew::Reducible;

pub const ERROR_PREFIX: &str = "Error loading report";

/// Identifies one read request so a late answer can be matched to it.
pub type RequestTag = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    pub tag: RequestTag,
    pub file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerBody {
    Empty,
    Loading,
    Rendered(String),
    Failed(String),
}

impl ViewerBody {
    fn failed(err: &FetchError) -> Self {
        ViewerBody::Failed(format!("{}: {}", ERROR_PREFIX, err))
    }
}

/// Modal report viewer.
///
/// Closed until a card is activated; `Open` remembers which report is shown.
/// Each open issues a fresh [`RequestTag`] and only the answer carrying the
/// latest tag is allowed to replace the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    open: Option<usize>,
    title: String,
    body: ViewerBody,
    last_tag: RequestTag,
    pending: Option<PendingFetch>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            open: None,
            title: String::new(),
            body: ViewerBody::Empty,
            last_tag: 0,
            pending: None,
        }
    }
}

impl ViewerState {
    /// Shows `reports[index]`, superseding whatever was open before.
    pub fn open(&mut self, index: usize, reports: &[Report]) -> Option<PendingFetch> {
        let Some(report) = reports.get(index) else {
            warn!("Ignoring request for unknown report {}", index);
            return None;
        };

        self.last_tag += 1;
        let pending = PendingFetch {
            tag: self.last_tag,
            file: report.file.clone(),
        };

        info!("Opening report '{}' from {}", report.title, report.file);
        self.open = Some(index);
        self.title = report.title.clone();
        self.body = ViewerBody::Loading;
        self.pending = Some(pending.clone());
        Some(pending)
    }

    /// Applies the answer to request `tag`. Returns `false` when the answer
    /// is stale and was dropped.
    pub fn resolve(
        &mut self,
        tag: RequestTag,
        outcome: Result<String, FetchError>,
        renderer: &dyn MarkdownRenderer,
    ) -> bool {
        let current = self.pending.as_ref().map(|pending| pending.tag);
        if current != Some(tag) {
            debug!("Dropping stale report response {}", tag);
            return false;
        }

        self.pending = None;
        self.body = match outcome {
            Ok(markdown) => ViewerBody::Rendered(renderer.render(&markdown)),
            Err(err) => {
                warn!("Report '{}' failed to load: {}", self.title, err);
                ViewerBody::failed(&err)
            }
        };
        true
    }

    pub fn close(&mut self) {
        self.open = None;
        self.pending = None;
    }

    /// A click on the modal. Only clicks landing on the backdrop itself,
    /// not on the content panel, close the viewer.
    pub fn overlay_clicked(&mut self, on_backdrop: bool) {
        if on_backdrop && self.is_open() {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &ViewerBody {
        &self.body
    }

    pub fn pending(&self) -> Option<&PendingFetch> {
        self.pending.as_ref()
    }
}

pub enum ViewerAction {
    Open(usize),
    Resolved {
        tag: RequestTag,
        outcome: Result<String, FetchError>,
    },
    Close,
    OverlayClick { on_backdrop: bool },
}

/// Viewer state bound to the catalog it opens, driven through `use_reducer`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerStore {
    reports: &'static [Report],
    state: ViewerState,
}

impl ViewerStore {
    pub fn new(reports: &'static [Report]) -> Self {
        Self {
            reports,
            state: ViewerState::default(),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}

impl Reducible for ViewerStore {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewerAction::Open(index) => {
                next.state.open(index, next.reports);
            }
            ViewerAction::Resolved { tag, outcome } => {
                if !next.state.resolve(tag, outcome, &CommonMark) {
                    return self;
                }
            }
            ViewerAction::Close => next.state.close(),
            ViewerAction::OverlayClick { on_backdrop } => next.state.overlay_clicked(on_backdrop),
        }
        Rc::new(next)
    }
}
