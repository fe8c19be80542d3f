use tracing::debug;

/// The asset currently driving the lineage panel.
///
/// Owned by the viewer and passed by reference to the search panel (the only
/// writer) and the lineage panel (the only reader). The generation advances on
/// every change so lineage responses can be matched to the selection that asked
/// for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an asset id. Any string is accepted.
    ///
    /// Returns false when the id is already selected; the generation is left
    /// alone in that case.
    pub fn select(&mut self, asset_id: &str) -> bool {
        if self.selected.as_deref() == Some(asset_id) {
            return false;
        }
        self.selected = Some(asset_id.to_string());
        self.generation += 1;
        debug!("Selected {} (generation {})", asset_id, self.generation);
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.selected.take().is_none() {
            return false;
        }
        self.generation += 1;
        debug!("Selection cleared (generation {})", self.generation);
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
