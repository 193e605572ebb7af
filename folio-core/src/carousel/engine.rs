//! CarouselEngine: lifecycle, event handling and the frame loop.
//!
//! A host drives the engine through four entry points:
//! - [`CarouselEngine::mount`] / [`CarouselEngine::unmount`] around the
//!   widget's lifetime,
//! - [`CarouselEngine::on_layout`] whenever the rendered track has been laid
//!   out (first mount, resize, new images),
//! - the pointer methods from its input events,
//! - [`CarouselEngine::on_frame`] from its display-synced callback, passing
//!   back the handle it was given.
//!
//! Frames only run while the engine is [`Phase::Running`]. An empty item
//! list never gets there, and neither does a track that has not reported a
//! usable layout yet.

use folio_model::CarouselItem;
use tracing::{debug, trace, warn};

use super::{
    frame::{FrameHandle, FrameScheduler},
    metrics::{Layout, PassMetrics},
    motion::PointerInfo,
    render::{Cell, CellKey, TrackView},
    state::ScrollState,
    track::Track,
    types::CarouselConfig,
};
use crate::error::CarouselError;

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not attached to a host, or detached again.
    Unmounted,
    /// Mounted with no items. Renders nothing and never schedules frames.
    Idle,
    /// Mounted with items, waiting for a layout report with a usable width.
    AwaitingLayout,
    /// Animating.
    Running,
}

#[derive(Debug)]
pub struct CarouselEngine<T: CarouselItem> {
    config: CarouselConfig,
    items: Vec<T>,
    keys: Vec<T::Key>,
    phase: Phase,
    state: Option<ScrollState>,
    metrics: Option<PassMetrics>,
    viewport_width: f64,
    pointer: PointerInfo,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl<T: CarouselItem> CarouselEngine<T> {
    pub fn new(
        config: CarouselConfig,
        items: Vec<T>,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let keys = items.iter().map(|item| item.key()).collect();
        Ok(Self {
            config,
            items,
            keys,
            phase: Phase::Unmounted,
            state: None,
            metrics: None,
            viewport_width: 0.0,
            pointer: PointerInfo::default(),
            pending: None,
            frames: 0,
        })
    }

    /// Attach to the host. No-op when already mounted.
    pub fn mount(&mut self, sched: &mut impl FrameScheduler) {
        if self.phase != Phase::Unmounted {
            return;
        }
        if self.items.is_empty() {
            debug!(mode = self.config.mode.name(), "carousel mounted empty");
            self.phase = Phase::Idle;
            return;
        }

        self.state =
            Some(ScrollState::new(self.config.mode, self.config.base_speed));
        self.frames = 0;
        self.phase = Phase::AwaitingLayout;
        debug!(
            mode = self.config.mode.name(),
            items = self.items.len(),
            repeat = self.config.repeat_factor,
            "carousel mounted"
        );
        if self.metrics.is_some() {
            self.start(sched);
        }
    }

    /// Detach from the host, releasing the pending frame. The scroll state
    /// and measurements are discarded; a later mount starts from scratch.
    pub fn unmount(&mut self, sched: &mut impl FrameScheduler) {
        self.cancel(sched);
        if self.phase != Phase::Unmounted {
            debug!(frames = self.frames, "carousel unmounted");
        }
        self.phase = Phase::Unmounted;
        self.state = None;
        self.metrics = None;
        self.pointer = PointerInfo::default();
        self.frames = 0;
    }

    /// Replace the item list.
    ///
    /// When the keys match the mounted list only the payloads are swapped.
    /// Otherwise the carousel is re-initialized: the pending frame is
    /// released, the scroll state reset and the pass width forgotten until
    /// the host reports a new layout. Returns whether a re-initialization
    /// happened.
    pub fn set_items(
        &mut self,
        items: Vec<T>,
        sched: &mut impl FrameScheduler,
    ) -> bool {
        let keys: Vec<T::Key> = items.iter().map(|item| item.key()).collect();
        if keys == self.keys {
            self.items = items;
            return false;
        }

        debug!(
            previous = self.keys.len(),
            next = keys.len(),
            "carousel items changed; re-initializing"
        );
        let was_mounted = self.phase != Phase::Unmounted;
        let pointer = self.pointer;
        self.unmount(sched);
        self.items = items;
        self.keys = keys;
        if was_mounted {
            self.pointer = pointer;
            self.mount(sched);
        }
        true
    }

    /// Report a layout pass. Returns whether the measurement was usable.
    ///
    /// An unusable report (container not laid out yet, item count from a
    /// previous list) leaves the engine as it was: a waiting carousel keeps
    /// waiting, a running one keeps its previous pass width.
    pub fn on_layout(
        &mut self,
        layout: &Layout,
        sched: &mut impl FrameScheduler,
    ) -> bool {
        let metrics = match PassMetrics::measure(
            layout,
            self.items.len(),
            self.config.repeat_factor,
        ) {
            Ok(metrics) => metrics,
            Err(err) => {
                debug!(
                    error = %err,
                    phase = ?self.phase,
                    "layout not usable yet"
                );
                return false;
            }
        };

        let viewport_width = layout.viewport_width();
        let pass_width = metrics.pass_width();
        if !self.track().covers_viewport(pass_width, viewport_width) {
            warn!(
                pass_width,
                viewport_width,
                repeat = self.config.repeat_factor,
                "track is too short for the viewport; the loop seam may show"
            );
        }
        if let Some(previous) = self.metrics.as_ref()
            && previous.pass_width() != pass_width
        {
            debug!(from = previous.pass_width(), to = pass_width, "remeasured");
        }

        self.metrics = Some(metrics);
        self.viewport_width = viewport_width;
        if self.phase == Phase::AwaitingLayout {
            self.start(sched);
        }
        true
    }

    pub fn pointer_enter(&mut self) {
        self.pointer.hovering = true;
    }

    /// Pointer moved to `x` px from the container's left edge. Ignored unless
    /// the pointer is inside the container.
    pub fn pointer_move(&mut self, x: f64, container_width: f64) {
        if !self.pointer.hovering {
            return;
        }
        if let Some(offset) = PointerInfo::relative_offset(x, container_width) {
            self.pointer.relative_x = Some(offset);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.pointer = PointerInfo::default();
    }

    /// Run one frame for `handle`. Returns the track translation to apply,
    /// or `None` when the handle is not the one this engine is waiting on
    /// (a cancelled or foreign request) or the engine is not running.
    pub fn on_frame(
        &mut self,
        handle: FrameHandle,
        sched: &mut impl FrameScheduler,
    ) -> Option<f64> {
        if self.pending != Some(handle) {
            trace!(handle = handle.id(), "ignoring stale frame");
            return None;
        }
        self.pending = None;
        if self.phase != Phase::Running {
            return None;
        }
        let (Some(state), Some(metrics)) =
            (self.state.as_mut(), self.metrics.as_ref())
        else {
            return None;
        };

        let position = state.advance(
            self.config.base_speed,
            &self.pointer,
            metrics.pass_width(),
        );
        let velocity = state.velocity;
        self.frames += 1;
        trace!(frame = self.frames, position, velocity, "carousel frame");

        self.schedule(sched);
        Some(-position)
    }

    /// Cells for every slot on the track, rendered with `render_item`.
    ///
    /// A renderer error only affects its own slot, which becomes a
    /// [`Cell::Fallback`]. Cells are produced while waiting for layout too,
    /// since the host has to draw them before it can measure them.
    pub fn render<V, E, F>(&self, mut render_item: F) -> TrackView<T::Key, V>
    where
        F: FnMut(&T) -> Result<V, E>,
        E: std::fmt::Display,
    {
        if !matches!(self.phase, Phase::AwaitingLayout | Phase::Running) {
            return TrackView::empty();
        }

        let track = self.track();
        let cells = (0..track.len())
            .filter_map(|slot| {
                track.slot(slot).map(|(copy, idx)| (slot, copy, idx))
            })
            .map(|(slot, copy, idx)| {
                let key = CellKey {
                    item: self.keys[idx].clone(),
                    copy,
                    slot,
                };
                match render_item(&self.items[idx]) {
                    Ok(view) => Cell::Rendered { key, view },
                    Err(err) => {
                        warn!(
                            %key,
                            error = %err,
                            "item render failed; drawing empty cell"
                        );
                        Cell::Fallback { key }
                    }
                }
            })
            .collect();

        TrackView {
            translate_x: self.translate_x(),
            cells,
        }
    }

    /// Item index drawn at `column` px from the viewport's left edge.
    pub fn item_at(&self, column: f64) -> Option<usize> {
        let metrics = self.metrics.as_ref()?;
        let state = self.state.as_ref()?;
        metrics.item_at(state.position + column)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> Option<&ScrollState> {
        self.state.as_ref()
    }

    pub fn position(&self) -> f64 {
        self.state.map_or(0.0, |s| s.position)
    }

    pub fn velocity(&self) -> f64 {
        self.state.map_or(0.0, |s| s.velocity)
    }

    pub fn translate_x(&self) -> f64 {
        -self.position()
    }

    pub fn pass_width(&self) -> Option<f64> {
        self.metrics.as_ref().map(PassMetrics::pass_width)
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn pointer(&self) -> &PointerInfo {
        &self.pointer
    }

    /// Frames run since the last (re)mount.
    pub fn frames_elapsed(&self) -> u64 {
        self.frames
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn track(&self) -> Track {
        Track::new(self.items.len(), self.config.repeat_factor)
    }

    fn start(&mut self, sched: &mut impl FrameScheduler) {
        self.phase = Phase::Running;
        debug!(pass_width = ?self.pass_width(), "carousel animation started");
        self.schedule(sched);
    }

    fn schedule(&mut self, sched: &mut impl FrameScheduler) {
        if self.pending.is_none() {
            self.pending = Some(sched.request_frame());
        }
    }

    fn cancel(&mut self, sched: &mut impl FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            sched.cancel_frame(handle);
        }
    }
}

impl<T: CarouselItem> Drop for CarouselEngine<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending {
            warn!(
                handle = handle.id(),
                "carousel dropped with a pending frame; hosts must unmount first"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{frame::ManualScheduler, types::Mode};

    #[derive(Debug, Clone, PartialEq)]
    struct Card(u32);

    impl CarouselItem for Card {
        type Key = u32;

        fn key(&self) -> u32 {
            self.0
        }
    }

    fn cards(ids: &[u32]) -> Vec<Card> {
        ids.iter().copied().map(Card).collect()
    }

    fn engine(ids: &[u32]) -> CarouselEngine<Card> {
        let config = CarouselConfig::new(1.0, Mode::auto(false));
        CarouselEngine::new(config, cards(ids)).unwrap()
    }

    fn run(
        engine: &mut CarouselEngine<Card>,
        sched: &mut ManualScheduler,
        frames: usize,
    ) {
        for _ in 0..frames {
            for handle in sched.drain() {
                engine.on_frame(handle, sched);
            }
        }
    }

    #[test]
    fn waits_for_layout_before_scheduling() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2]);
        engine.mount(&mut sched);
        assert_eq!(engine.phase(), Phase::AwaitingLayout);
        assert_eq!(sched.requested(), 0);

        // Container not laid out: widths are still zero.
        assert!(!engine.on_layout(&Layout::uniform(2, 0.0, 0.0, 0.0), &mut sched));
        assert_eq!(sched.requested(), 0);

        assert!(engine.on_layout(&Layout::uniform(2, 50.0, 0.0, 100.0), &mut sched));
        assert_eq!(engine.phase(), Phase::Running);
        assert_eq!(sched.pending(), 1);
        engine.unmount(&mut sched);
    }

    #[test]
    fn layout_before_mount_starts_on_mount() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2]);
        assert!(engine.on_layout(&Layout::uniform(2, 50.0, 0.0, 100.0), &mut sched));
        assert_eq!(sched.requested(), 0);
        engine.mount(&mut sched);
        assert_eq!(engine.phase(), Phase::Running);
        engine.unmount(&mut sched);
    }

    #[test]
    fn stale_handles_do_not_move_the_track() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2]);
        engine.mount(&mut sched);
        engine.on_layout(&Layout::uniform(2, 50.0, 0.0, 100.0), &mut sched);
        let first = sched.drain()[0];
        assert_eq!(engine.on_frame(first, &mut sched), Some(-1.0));
        // Replaying an already-fired handle is ignored.
        assert_eq!(engine.on_frame(first, &mut sched), None);
        assert_eq!(engine.position(), 1.0);
        engine.unmount(&mut sched);
    }

    #[test]
    fn pointer_events_never_touch_position() {
        let mut sched = ManualScheduler::new();
        let mut engine = CarouselEngine::new(
            CarouselConfig::new(1.0, Mode::hover_zone()),
            cards(&[1, 2, 3]),
        )
        .unwrap();
        engine.mount(&mut sched);
        engine.on_layout(&Layout::uniform(3, 100.0, 0.0, 300.0), &mut sched);
        run(&mut engine, &mut sched, 5);
        let before = engine.position();

        engine.pointer_enter();
        engine.pointer_move(300.0, 300.0);
        engine.pointer_move(0.0, 300.0);
        assert_eq!(engine.position(), before);
        assert_eq!(engine.pointer().relative_x, Some(-1.0));

        run(&mut engine, &mut sched, 1);
        assert!((engine.position() - (before - 3.0)).abs() < 1e-9);
        engine.unmount(&mut sched);
    }

    #[test]
    fn moves_outside_container_are_ignored() {
        let mut engine = engine(&[1]);
        engine.pointer_move(10.0, 100.0);
        assert_eq!(engine.pointer().relative_x, None);
    }

    #[test]
    fn same_keys_swap_payload_without_reset() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2]);
        engine.mount(&mut sched);
        engine.on_layout(&Layout::uniform(2, 50.0, 0.0, 100.0), &mut sched);
        run(&mut engine, &mut sched, 10);

        assert!(!engine.set_items(cards(&[1, 2]), &mut sched));
        assert_eq!(engine.position(), 10.0);
        assert_eq!(sched.cancelled(), 0);

        assert!(engine.set_items(cards(&[2, 1, 3]), &mut sched));
        assert_eq!(engine.phase(), Phase::AwaitingLayout);
        assert_eq!(engine.position(), 0.0);
        assert_eq!(engine.pass_width(), None);
        assert_eq!(sched.cancelled(), 1);
        assert_eq!(sched.pending(), 0);
        engine.unmount(&mut sched);
    }

    #[test]
    fn clearing_items_goes_idle() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2]);
        engine.mount(&mut sched);
        engine.on_layout(&Layout::uniform(2, 50.0, 0.0, 100.0), &mut sched);
        assert!(engine.set_items(Vec::new(), &mut sched));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(sched.pending(), 0);
        assert!(engine.render(|c| Ok::<_, String>(c.0)).is_empty());
    }

    #[test]
    fn render_failure_is_isolated_to_its_slots() {
        let mut sched = ManualScheduler::new();
        let mut engine = engine(&[1, 2, 3]);
        engine.mount(&mut sched);
        let view = engine.render(|card| {
            if card.0 == 2 {
                Err("broken image")
            } else {
                Ok(format!("card {}", card.0))
            }
        });
        assert_eq!(view.cells.len(), 9);
        assert_eq!(view.fallback_count(), 3);
        assert_eq!(view.cells[1].key().to_string(), "2-1");
        assert!(view.cells[1].is_fallback());
        assert_eq!(view.cells[3].view().map(String::as_str), Some("card 1"));
        assert_eq!(view.cells[3].key().copy, 1);

        // The loop is unaffected by render failures.
        engine.on_layout(&Layout::uniform(3, 10.0, 0.0, 10.0), &mut sched);
        run(&mut engine, &mut sched, 3);
        assert_eq!(engine.frames_elapsed(), 3);
        engine.unmount(&mut sched);
    }
}
