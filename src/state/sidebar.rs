// src/state/sidebar.rs
use tracing::warn;

use crate::file::PrefStore;

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Below this viewport width the sidebar starts collapsed no matter what
/// the stored preference says.
pub const COLLAPSE_BREAKPOINT: f32 = 768.0;

const EXPANDED_WIDTH: f32 = 200.0;
const COLLAPSED_WIDTH: f32 = 56.0;

/// Collapsed/expanded state of the navigation sidebar. The boolean lives
/// here; the preference store mirrors it and the panel renders from the
/// `panel_width` projection, nowhere else.
#[derive(Debug)]
pub struct SidebarState {
    pub collapsed: bool,
    initialized: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            collapsed: false,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// First-frame setup: restore the stored preference, then apply the
    /// narrow-viewport override. The override is deliberately not an
    /// `else` branch; it wins over a stored "false". Nothing is written
    /// back to the store here.
    pub fn initialize(&mut self, store: &dyn PrefStore, viewport_width: f32) {
        if store.get(SIDEBAR_COLLAPSED_KEY).as_deref() == Some("true") {
            self.collapsed = true;
        }
        if viewport_width < COLLAPSE_BREAKPOINT {
            self.collapsed = true;
        }
        self.initialized = true;
    }

    /// Flips the state and mirrors it into the store. A failed write only
    /// logs; the in-memory state has already moved on.
    pub fn toggle(&mut self, store: &mut dyn PrefStore) {
        self.collapsed = !self.collapsed;
        if let Err(e) = store.set(SIDEBAR_COLLAPSED_KEY, &self.collapsed.to_string()) {
            warn!("Failed to persist sidebar preference: {}", e);
        }
    }

    /// Projection from state to the rendered panel width.
    pub fn panel_width(&self) -> f32 {
        if self.collapsed {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        }
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemPrefs;

    #[test]
    fn test_toggle_mirrors_into_store() {
        let mut store = MemPrefs::new();
        let mut sidebar = SidebarState::new();

        sidebar.toggle(&mut store);
        assert!(sidebar.collapsed);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("true".to_string()));

        sidebar.toggle(&mut store);
        assert!(!sidebar.collapsed);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("false".to_string()));
    }

    #[test]
    fn test_initialize_restores_stored_preference() {
        let mut store = MemPrefs::new();
        store.set(SIDEBAR_COLLAPSED_KEY, "true").unwrap();

        let mut sidebar = SidebarState::new();
        sidebar.initialize(&store, 1024.0);
        assert!(sidebar.collapsed);
    }

    #[test]
    fn test_initialize_width_override_beats_stored_false() {
        let mut store = MemPrefs::new();
        store.set(SIDEBAR_COLLAPSED_KEY, "false").unwrap();

        let mut sidebar = SidebarState::new();
        sidebar.initialize(&store, 400.0);
        assert!(sidebar.collapsed);
        // The override never writes back.
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY), Some("false".to_string()));
    }

    #[test]
    fn test_initialize_wide_viewport_stays_expanded() {
        let mut store = MemPrefs::new();
        store.set(SIDEBAR_COLLAPSED_KEY, "false").unwrap();

        let mut sidebar = SidebarState::new();
        sidebar.initialize(&store, 1024.0);
        assert!(!sidebar.collapsed);
    }

    #[test]
    fn test_initialize_without_stored_value() {
        let store = MemPrefs::new();
        let mut sidebar = SidebarState::new();
        sidebar.initialize(&store, 800.0);
        assert!(!sidebar.collapsed);
        assert!(sidebar.is_initialized());
    }

    #[test]
    fn test_panel_width_projection() {
        let mut sidebar = SidebarState::new();
        let expanded = sidebar.panel_width();
        sidebar.collapsed = true;
        assert!(sidebar.panel_width() < expanded);
    }
}
