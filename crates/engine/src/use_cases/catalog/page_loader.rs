//! Page loader use case.
//!
//! Holds the currently displayed page and loads new ones. Every load takes a
//! new generation number; a load whose generation is no longer the latest is
//! abandoned and its result is never applied, so a slow, superseded page can
//! never replace a newer one.

use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use pokedex_domain::{DomainError, PageWindow};

use super::{AggregatePage, PageResult};

/// Pagination bounds.
#[derive(Debug, Clone, Copy)]
pub struct PaginationSettings {
    pub collection_size: u32,
    pub page_size: u32,
    pub max_page_size: u32,
}

/// Direction for relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    First,
    Previous,
    Next,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageLoadError {
    #[error("Invalid page request: {0}")]
    InvalidPage(#[from] DomainError),

    #[error("Page load {generation} was superseded by a newer request")]
    Superseded { generation: u64 },
}

#[derive(Debug, Clone, Copy)]
struct LoadTicket {
    generation: u64,
    window: Option<PageWindow>,
}

pub struct PageLoader {
    aggregate: Arc<AggregatePage>,
    settings: PaginationSettings,
    latest: watch::Sender<LoadTicket>,
    displayed: RwLock<Option<Arc<PageResult>>>,
}

impl PageLoader {
    pub fn new(aggregate: Arc<AggregatePage>, settings: PaginationSettings) -> Self {
        let (latest, _) = watch::channel(LoadTicket {
            generation: 0,
            window: None,
        });
        Self {
            aggregate,
            settings,
            latest,
            displayed: RwLock::new(None),
        }
    }

    pub fn settings(&self) -> PaginationSettings {
        self.settings
    }

    /// Validate a page request; `size` defaults to the configured page size.
    pub fn window(&self, page: u32, size: Option<u32>) -> Result<PageWindow, PageLoadError> {
        let size = size.unwrap_or(self.settings.page_size);
        if size > self.settings.max_page_size {
            return Err(DomainError::validation(format!(
                "Page size {} exceeds maximum of {}",
                size, self.settings.max_page_size
            ))
            .into());
        }
        Ok(PageWindow::new(page, size, self.settings.collection_size)?)
    }

    /// The page currently on display, if any load has completed.
    pub async fn displayed(&self) -> Option<Arc<PageResult>> {
        self.displayed.read().await.clone()
    }

    /// Window of the most recent load request, whether or not it completed.
    pub fn requested(&self) -> Option<PageWindow> {
        self.latest.borrow().window
    }

    pub async fn load_page(
        &self,
        page: u32,
        size: Option<u32>,
    ) -> Result<Arc<PageResult>, PageLoadError> {
        let window = self.window(page, size)?;
        self.load(window).await
    }

    /// Move relative to the most recently requested page (page 1 if none).
    pub async fn navigate(&self, to: Navigation) -> Result<Arc<PageResult>, PageLoadError> {
        let current = match self.requested() {
            Some(window) => window,
            None => self.window(1, None)?,
        };
        let target = match to {
            Navigation::First => current.first(),
            Navigation::Previous => current.previous(),
            Navigation::Next => current.next(),
            Navigation::Last => current.last(),
        };
        self.load(target).await
    }

    /// Load `window` and make it the displayed page.
    ///
    /// Fails with `Superseded` if another load starts before this one is applied.
    pub async fn load(&self, window: PageWindow) -> Result<Arc<PageResult>, PageLoadError> {
        let mut generation = 0;
        self.latest.send_modify(|ticket| {
            ticket.generation += 1;
            ticket.window = Some(window);
            generation = ticket.generation;
        });
        let mut changes = self.latest.subscribe();

        tracing::debug!(generation, page = window.page(), "Loading page");

        let result = tokio::select! {
            result = self.aggregate.execute(window) => result,
            _ = changes.wait_for(|ticket| ticket.generation != generation) => {
                tracing::debug!(generation, page = window.page(), "Page load superseded in flight");
                return Err(PageLoadError::Superseded { generation });
            }
        };

        let result = Arc::new(result);
        let mut displayed = self.displayed.write().await;
        if self.latest.borrow().generation != generation {
            tracing::debug!(generation, page = window.page(), "Discarding stale page");
            return Err(PageLoadError::Superseded { generation });
        }
        *displayed = Some(result.clone());
        Ok(result)
    }
}
