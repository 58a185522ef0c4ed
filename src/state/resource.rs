// ============================================================================
// RESOURCE STATE - Slice genérico para una colección del backend
// ============================================================================
// idle -> loading -> succeeded | failed, y cualquier estado vuelve a loading.
// Cada petición lleva un id monótono; una respuesta que no es más nueva que
// la última aplicada se descarta.
// ============================================================================

use std::rc::Rc;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Rc<Vec<T>>,
    pub status: Status,
    pub error: Option<String>,
    pub last_fetched: Option<DateTime<Utc>>,
    /// Id de la última petición despachada
    pub latest_request: u64,
    /// Id de la última respuesta aplicada
    pub applied_request: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Rc::new(Vec::new()),
            status: Status::Idle,
            error: None,
            last_fetched: None,
            latest_request: 0,
            applied_request: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    Pending {
        request: u64,
    },
    Fulfilled {
        request: u64,
        items: Vec<T>,
        fetched_at: DateTime<Utc>,
    },
    Rejected {
        request: u64,
        error: String,
    },
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Hay otra petición más nueva todavía en vuelo
    fn superseded(&self, request: u64) -> bool {
        request < self.latest_request
    }

    pub fn reduce(&mut self, name: &str, action: ResourceAction<T>) {
        match action {
            ResourceAction::Pending { request } => {
                self.latest_request = self.latest_request.max(request);
                self.status = Status::Loading;
                self.error = None;
            }
            ResourceAction::Fulfilled { request, items, fetched_at } => {
                if request <= self.applied_request {
                    log::warn!("⚠️ [{}] respuesta #{} obsoleta, descartada", name, request);
                    return;
                }
                self.applied_request = request;
                self.items = Rc::new(items);
                self.last_fetched = Some(fetched_at);
                if !self.superseded(request) {
                    self.status = Status::Succeeded;
                    self.error = None;
                }
            }
            ResourceAction::Rejected { request, error } => {
                if request <= self.applied_request {
                    log::warn!("⚠️ [{}] error #{} obsoleto, descartado: {}", name, request, error);
                    return;
                }
                self.applied_request = request;
                if self.superseded(request) {
                    log::warn!("⚠️ [{}] petición #{} falló pero hay otra en curso: {}", name, request, error);
                    return;
                }
                self.status = Status::Failed;
                self.error = Some(if error.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    error
                });
            }
        }
    }
}
