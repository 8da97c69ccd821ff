use leptos::prelude::*;

/// Shell state shared by the top bar and the sidebar.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub left_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found")
}
