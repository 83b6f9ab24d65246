// SPDX-FileCopyrightText: 2026 The Tagmark Authors
// SPDX-License-Identifier: MIT

//! Mutation watching and debounce.
//!
//! The host feeds [`MutationBatch`]es through an mpsc channel. A batch that adds
//! nodes while a section is active arms a single pending deadline one
//! [`QUIET_DELAY`] out; a newer qualifying batch re-arms it (last write wins,
//! across sections too), and the update only runs once the page has been quiet
//! for the whole delay. There is exactly one pending deadline, never a queue.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::{mpsc, Mutex};
use tokio::time::{self, Instant};

use crate::marker::handle_section_update;
use crate::model::{MarkerSession, Section};
use crate::profile::ConsoleProfile;
use crate::surface::Surface;

/// Quiet period a re-render burst must hold before an update runs.
pub const QUIET_DELAY: Duration = Duration::from_millis(100);

/// One batch of page mutations, as delivered by the host's observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationBatch {
    pub added_nodes: usize,
}

impl MutationBatch {
    pub fn added(added_nodes: usize) -> Self {
        Self { added_nodes }
    }

    pub fn has_added_nodes(&self) -> bool {
        self.added_nodes > 0
    }
}

/// Owns the marker session and the single pending update deadline.
pub struct Watcher<S: Surface> {
    surface: Arc<Mutex<S>>,
    session: MarkerSession,
    profile: ConsoleProfile,
    mutations: mpsc::Receiver<MutationBatch>,
}

impl<S: Surface> Watcher<S> {
    /// Sets up watching for one page load.
    ///
    /// Always runs one immediate update for the initially active section, in
    /// case an item is already open. Then, when the observation root is
    /// missing, returns `None`: the startup highlight stays on the page but
    /// the marker gets no further updates until the next page load. Otherwise
    /// hands back the watcher ready to [`run`](Self::run).
    pub async fn start(
        surface: Arc<Mutex<S>>,
        profile: ConsoleProfile,
        mutations: mpsc::Receiver<MutationBatch>,
    ) -> Option<Self> {
        let mut session = MarkerSession::new();
        {
            let mut page = surface.lock().await;
            let section = Section::detect(&page.location_fragment());
            info!("marker init, current section: {}", section.map_or("none", Section::as_str));
            if let Some(section) = section {
                handle_section_update(&mut *page, &mut session, &profile, section);
            }

            if !page.has_observation_root() {
                warn!("observation root missing, marker disabled for this page load");
                return None;
            }
        }
        info!("mutation watcher started");

        Some(Self { surface, session, profile, mutations })
    }

    /// Drives the debounced update loop until the mutation channel closes.
    ///
    /// A deadline still pending when the channel closes is allowed to fire
    /// before the loop stops. Returns the final session for inspection.
    pub async fn run(mut self) -> MarkerSession {
        enum Wake {
            Quiet,
            Mutations(Option<MutationBatch>),
        }

        let mut pending: Option<(Section, Instant)> = None;

        loop {
            match pending {
                Some((section, deadline)) => {
                    let wake = tokio::select! {
                        biased;
                        () = time::sleep_until(deadline) => Wake::Quiet,
                        batch = self.mutations.recv() => Wake::Mutations(batch),
                    };
                    match wake {
                        Wake::Quiet => {
                            pending = None;
                            self.settle(section).await;
                        }
                        // A non-qualifying batch leaves the armed deadline alone.
                        Wake::Mutations(Some(batch)) => {
                            if let Some(armed) = self.arm(batch).await {
                                pending = Some(armed);
                            }
                        }
                        Wake::Mutations(None) => {
                            time::sleep_until(deadline).await;
                            self.settle(section).await;
                            break;
                        }
                    }
                }
                None => match self.mutations.recv().await {
                    Some(batch) => pending = self.arm(batch).await,
                    None => break,
                },
            }
        }

        debug!("mutation channel closed, watcher stopped");
        self.session
    }

    /// Decides whether `batch` schedules an update: it must add nodes and the
    /// page must currently be on a section.
    async fn arm(&self, batch: MutationBatch) -> Option<(Section, Instant)> {
        if !batch.has_added_nodes() {
            return None;
        }
        let fragment = self.surface.lock().await.location_fragment();
        let section = Section::detect(&fragment)?;
        Some((section, Instant::now() + QUIET_DELAY))
    }

    async fn settle(&mut self, section: Section) {
        let mut page = self.surface.lock().await;
        if handle_section_update(&mut *page, &mut self.session, &self.profile, section) {
            debug!("section {section}: highlights refreshed");
        }
    }

    pub fn session(&self) -> &MarkerSession {
        &self.session
    }
}
