use tracing::{debug, error, info, warn};

use crate::client::CatalogApi;
use crate::errors::FetchResult;
use crate::graph::{to_render_graph, validate_payload, RenderDescription};
use crate::model::LineagePayload;
use crate::selection::SelectionState;

/// What happened to a completed request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The response replaced the displayed state
    Applied,
    /// The selection moved on while the request was in flight
    Discarded,
    /// The request failed; the displayed state is unchanged
    Failed,
    /// The payload was malformed; the empty state replaced the displayed state
    Rejected,
}

/// One lineage request, tagged with the selection generation it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub asset_id: String,
    pub generation: u64,
}

#[derive(Debug)]
pub struct ResolvedLineage {
    pub ticket: FetchTicket,
    pub result: FetchResult<Option<LineagePayload>>,
}

/// Performs the request for a ticket.
///
/// Borrows only the catalog, so requests for successive selections may be
/// outstanding at the same time. Nothing is cancelled; stale responses are
/// dropped by [`LineagePanel::resolve`].
pub async fn fetch<A: CatalogApi + ?Sized>(api: &A, ticket: FetchTicket) -> ResolvedLineage {
    debug!(
        "Fetching lineage for {} (generation {})",
        ticket.asset_id, ticket.generation
    );
    let result = api.lineage(&ticket.asset_id).await;
    ResolvedLineage { ticket, result }
}

/// The lineage graph for the current selection.
///
/// Starts in the empty state and only ever shows the payload of the latest
/// completed request for the current selection.
#[derive(Clone, Debug, Default)]
pub struct LineagePanel {
    description: RenderDescription,
    observed_generation: u64,
    shown: Option<FetchTicket>,
}

impl LineagePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &RenderDescription {
        &self.description
    }

    /// Ticket whose response is on screen, if any
    pub fn shown(&self) -> Option<&FetchTicket> {
        self.shown.as_ref()
    }

    /// Issues a ticket if the selection changed since the last call and now names
    /// an asset. Clearing the selection issues nothing.
    pub fn begin(&mut self, selection: &SelectionState) -> Option<FetchTicket> {
        if selection.generation() == self.observed_generation {
            return None;
        }
        self.observed_generation = selection.generation();

        let asset_id = selection.current()?;
        Some(FetchTicket {
            asset_id: asset_id.to_string(),
            generation: selection.generation(),
        })
    }

    pub fn resolve(&mut self, resolved: ResolvedLineage, selection: &SelectionState) -> Outcome {
        let ResolvedLineage { ticket, result } = resolved;

        if ticket.generation != selection.generation() {
            info!(
                "Discarding lineage for {} (generation {}, current {})",
                ticket.asset_id,
                ticket.generation,
                selection.generation()
            );
            return Outcome::Discarded;
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to fetch lineage for {}: {}", ticket.asset_id, e);
                return Outcome::Failed;
            }
        };

        if let Some(Err(e)) = payload.as_ref().map(validate_payload) {
            warn!("Rejecting lineage for {}: {}", ticket.asset_id, e);
            self.description = RenderDescription::default();
            self.shown = Some(ticket);
            return Outcome::Rejected;
        }

        self.description = to_render_graph(payload.as_ref());
        debug!(
            "Lineage for {} rendered: {}",
            ticket.asset_id,
            self.description.stats()
        );
        self.shown = Some(ticket);
        Outcome::Applied
    }

    /// Begin, fetch and resolve in one step. `None` when there was nothing to do.
    pub async fn refresh<A: CatalogApi + ?Sized>(
        &mut self,
        api: &A,
        selection: &SelectionState,
    ) -> Option<Outcome> {
        let ticket = self.begin(selection)?;
        let resolved = fetch(api, ticket).await;
        Some(self.resolve(resolved, selection))
    }
}
