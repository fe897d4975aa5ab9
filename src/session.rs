use crate::errors::{DexError, DexResult, Precondition};
use schema::DexMode;
use serde::{Deserialize, Serialize};
use std::rc::{Rc, Weak};

/// Hook the screen layer registers to run its cleanup after the catalog
/// closes.
pub trait CatalogClosedHook {
    fn on_catalog_closed(&self);
}

impl<F: Fn()> CatalogClosedHook for F {
    fn on_catalog_closed(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Closed,
    Open(DexMode),
}

/// Cursor state of one numbering scheme's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub selected: u16,
    pub scroll_offset: u16,
}

/// Per-process catalog browsing state.
///
/// Scroll positions survive closing and reopening; only
/// [`CatalogSession::reset_scroll_positions`] clears them. The closed hook
/// is held weakly: the registering caller keeps it alive.
#[derive(Debug)]
pub struct CatalogSession {
    state: SessionState,
    regional_scroll: ScrollPosition,
    national_scroll: ScrollPosition,
    closed_hook: Option<Weak<dyn CatalogClosedHook>>,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSession {
    pub fn new() -> Self {
        CatalogSession {
            state: SessionState::Closed,
            regional_scroll: ScrollPosition::default(),
            national_scroll: ScrollPosition::default(),
            closed_hook: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    pub fn active_mode(&self) -> Option<DexMode> {
        match self.state {
            SessionState::Open(mode) => Some(mode),
            SessionState::Closed => None,
        }
    }

    pub fn open(&mut self, mode: DexMode) -> DexResult<()> {
        if self.is_open() {
            return Err(DexError::PreconditionViolation(
                Precondition::SessionAlreadyOpen,
            ));
        }
        self.state = SessionState::Open(mode);
        log::debug!("Catalog opened in {} mode", mode);
        Ok(())
    }

    pub fn switch_mode(&mut self, mode: DexMode) -> DexResult<()> {
        let current = self.require_open()?;
        self.state = SessionState::Open(mode);
        log::debug!("Catalog switched from {} to {} mode", current, mode);
        Ok(())
    }

    /// Close the catalog and fire the registered hook. Returns whether a
    /// hook ran.
    pub fn close(&mut self) -> DexResult<bool> {
        self.require_open()?;
        self.state = SessionState::Closed;
        log::debug!("Catalog closed");

        let Some(weak) = &self.closed_hook else {
            return Ok(false);
        };
        match weak.upgrade() {
            Some(hook) => {
                hook.on_catalog_closed();
                Ok(true)
            }
            None => {
                log::warn!("Catalog closed hook was dropped by its owner; discarding it");
                self.closed_hook = None;
                Ok(false)
            }
        }
    }

    /// Replace the closed hook. Only one hook is held at a time.
    pub fn register_callback<H: CatalogClosedHook + 'static>(&mut self, hook: &Rc<H>) {
        let weak: Weak<H> = Rc::downgrade(hook);
        let weak: Weak<dyn CatalogClosedHook> = weak;
        self.closed_hook = Some(weak);
    }

    pub fn has_callback(&self) -> bool {
        self.closed_hook
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn scroll_position(&self, mode: DexMode) -> ScrollPosition {
        match mode {
            DexMode::Regional => self.regional_scroll,
            DexMode::National => self.national_scroll,
        }
    }

    /// Record the cursor of the list currently being browsed
    pub fn set_scroll_position(&mut self, position: ScrollPosition) -> DexResult<()> {
        let mode = self.require_open()?;
        *self.scroll_mut(mode) = position;
        Ok(())
    }

    /// Clear both lists' cursors, open or closed
    pub fn reset_scroll_positions(&mut self) {
        self.regional_scroll = ScrollPosition::default();
        self.national_scroll = ScrollPosition::default();
    }

    fn scroll_mut(&mut self, mode: DexMode) -> &mut ScrollPosition {
        match mode {
            DexMode::Regional => &mut self.regional_scroll,
            DexMode::National => &mut self.national_scroll,
        }
    }

    fn require_open(&self) -> DexResult<DexMode> {
        self.active_mode()
            .ok_or(DexError::PreconditionViolation(Precondition::SessionClosed))
    }
}
