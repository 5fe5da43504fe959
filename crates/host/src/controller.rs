use renderer::{CellLayout, CellPicker, DrawSurface, Renderer};
use sim_core::SimulationEngine;
use types::{InitialState, SessionParams};

use crate::error::HostError;
use crate::timing::{FrameStats, TicksPerFrame};

/// Hands out "call me before the next repaint" requests.
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    fn request_frame(&mut self) -> Result<Self::Handle, HostError>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Paused, or Running with the handle of the one pending frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState<H> {
    Paused,
    Running(H),
}

/// One interactive view of a simulation: owns the engine, the drawing
/// surface, the frame scheduler and all animation state.
pub struct Session<E, S, D>
where
    E: SimulationEngine,
    S: FrameScheduler,
    D: DrawSurface,
{
    pub(crate) engine: E,
    pub(crate) scheduler: S,
    pub(crate) surface: D,
    renderer: Renderer,
    pub(crate) picker: CellPicker,
    state: AnimationState<S::Handle>,
    pub(crate) ticks_per_frame: TicksPerFrame,
    stats: FrameStats,
}

impl<E, S, D> Session<E, S, D>
where
    E: SimulationEngine,
    S: FrameScheduler,
    D: DrawSurface,
{
    /// Build a session and paint the initial state. Starts animating when
    /// `params.initial_state` is Running.
    pub fn new(engine: E, scheduler: S, surface: D, params: &SessionParams) -> Self {
        let layout = CellLayout::new(engine.size(), params.cell_size, params.cell_border);
        let mut session = Self {
            engine,
            scheduler,
            surface,
            renderer: Renderer::new(layout, params),
            picker: CellPicker::new(layout),
            state: AnimationState::Paused,
            ticks_per_frame: TicksPerFrame::from_raw(params.ticks_per_frame as f64),
            stats: FrameStats::new(),
        };

        let size = layout.grid;
        let (canvas_w, canvas_h) = layout.canvas_size();
        log::info!(
            "session: grid {}x{}, canvas {}x{} px, {:?}",
            size.width,
            size.height,
            canvas_w,
            canvas_h,
            params.initial_state
        );

        session.redraw();
        if params.initial_state == InitialState::Running {
            session.play();
        }
        session
    }

    pub fn state(&self) -> AnimationState<S::Handle> {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, AnimationState::Paused)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn layout(&self) -> &CellLayout {
        self.renderer.layout()
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn ticks_per_frame(&self) -> TicksPerFrame {
        self.ticks_per_frame
    }

    /// Start animating. No-op while already running.
    pub fn play(&mut self) {
        if !self.is_paused() {
            return;
        }
        self.stats.restart();
        self.schedule_next();
        if !self.is_paused() {
            log::info!("play");
        }
    }

    /// Stop animating and cancel the pending frame. No-op while paused.
    pub fn pause(&mut self) {
        if let AnimationState::Running(handle) = std::mem::replace(&mut self.state, AnimationState::Paused) {
            self.scheduler.cancel_frame(handle);
            log::info!("pause");
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// One animation cycle: sample the frame rate, advance a burst of
    /// generations, paint once, re-arm. Ignored if we are not running.
    pub fn on_frame(&mut self, now: f64) {
        if self.is_paused() {
            log::debug!("frame at {now:.1} ms arrived while paused");
            return;
        }

        self.stats.record(now);
        self.advance_burst();
        self.redraw();
        self.schedule_next();
    }

    /// Repaint from a fresh view of the engine.
    pub fn redraw(&mut self) {
        let cells = self.engine.cells();
        self.renderer.render_frame(&mut self.surface, &cells);
    }

    pub(crate) fn advance_burst(&mut self) {
        for _ in 0..self.ticks_per_frame.get() {
            self.engine.advance();
        }
    }

    fn schedule_next(&mut self) {
        self.state = match self.scheduler.request_frame() {
            Ok(handle) => AnimationState::Running(handle),
            Err(err) => {
                log::error!("could not schedule next frame, pausing: {err}");
                AnimationState::Paused
            }
        };
    }
}

impl<E, S, D> Drop for Session<E, S, D>
where
    E: SimulationEngine,
    S: FrameScheduler,
    D: DrawSurface,
{
    fn drop(&mut self) {
        self.pause();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use renderer::mocks::RecordingSurface;
    use sim_core::Universe;
    use types::{CellView, GridSize, InitialPattern, UniverseParams};

    use super::*;

    /// Scheduler that keeps pending requests in a set so tests can see
    /// exactly what is outstanding.
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        next: u32,
        pub(crate) pending: BTreeSet<u32>,
        pub(crate) requested: usize,
        pub(crate) cancelled: Vec<u32>,
        pub(crate) refuse: bool,
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> Result<u32, HostError> {
            if self.refuse {
                return Err(HostError::Js("refused".into()));
            }
            self.next += 1;
            self.requested += 1;
            self.pending.insert(self.next);
            Ok(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.pending.remove(&handle);
            self.cancelled.push(handle);
        }
    }

    /// Universe that counts advance() calls.
    pub(crate) struct CountingEngine {
        pub(crate) inner: Universe,
        pub(crate) advances: usize,
    }

    impl CountingEngine {
        pub(crate) fn new(size: GridSize) -> Self {
            Self { inner: Universe::empty(size).unwrap(), advances: 0 }
        }
    }

    impl SimulationEngine for CountingEngine {
        fn size(&self) -> GridSize {
            self.inner.size()
        }
        fn advance(&mut self) {
            self.advances += 1;
            self.inner.advance();
        }
        fn cells(&self) -> CellView<'_> {
            self.inner.cells()
        }
        fn toggle_cell(&mut self, row: u32, column: u32) {
            self.inner.toggle_cell(row, column);
        }
        fn insert_glider(&mut self, row: u32, column: u32) {
            self.inner.insert_glider(row, column);
        }
        fn insert_pulsar(&mut self, row: u32, column: u32) {
            self.inner.insert_pulsar(row, column);
        }
        fn reset(&mut self) {
            self.inner.reset();
        }
    }

    pub(crate) type TestSession = Session<CountingEngine, ManualScheduler, RecordingSurface>;

    pub(crate) fn session(initial_state: InitialState) -> TestSession {
        let _ = env_logger::builder().is_test(true).try_init();
        let params = SessionParams { initial_state, ..Default::default() };
        Session::new(
            CountingEngine::new(GridSize::new(8, 6)),
            ManualScheduler::default(),
            RecordingSurface::new(),
            &params,
        )
    }

    /// Simulate the browser firing the single pending request.
    pub(crate) fn fire(session: &mut TestSession, now: f64) {
        let handle = *session.scheduler.pending.iter().next().expect("no pending frame");
        session.scheduler.pending.remove(&handle);
        session.on_frame(now);
    }

    #[test]
    fn initial_state_is_configurable() {
        let running = session(InitialState::Running);
        assert!(matches!(running.state(), AnimationState::Running(_)));
        assert_eq!(running.scheduler.pending.len(), 1);

        let paused = session(InitialState::Paused);
        assert_eq!(paused.state(), AnimationState::Paused);
        assert!(paused.scheduler.pending.is_empty());
    }

    #[test]
    fn construction_paints_once() {
        let s = session(InitialState::Paused);
        assert_eq!(s.surface().fills().count(), 48);
    }

    #[test]
    fn play_schedules_immediately() {
        let mut s = session(InitialState::Paused);
        s.play();
        assert_eq!(s.scheduler.pending.len(), 1);
        assert_eq!(s.engine.advances, 0);
        fire(&mut s, 16.0);
        assert_eq!(s.engine.advances, 1);
    }

    #[test]
    fn play_while_running_does_not_double_schedule() {
        let mut s = session(InitialState::Running);
        let before = s.state();
        s.play();
        s.play();
        assert_eq!(s.scheduler.requested, 1);
        assert_eq!(s.scheduler.pending.len(), 1);
        assert_eq!(s.state(), before);
    }

    #[test]
    fn pause_cancels_pending_frame() {
        let mut s = session(InitialState::Running);
        let AnimationState::Running(handle) = s.state() else { panic!("not running") };
        s.pause();
        assert_eq!(s.state(), AnimationState::Paused);
        assert!(s.scheduler.pending.is_empty());
        assert_eq!(s.scheduler.cancelled, vec![handle]);
    }

    #[test]
    fn double_pause_is_harmless() {
        let mut s = session(InitialState::Running);
        s.pause();
        s.pause();
        assert_eq!(s.state(), AnimationState::Paused);
        assert!(s.scheduler.pending.is_empty());
        assert_eq!(s.scheduler.cancelled.len(), 1);
    }

    #[test]
    fn each_cycle_rearms_exactly_once() {
        let mut s = session(InitialState::Running);
        for i in 1..=5 {
            fire(&mut s, i as f64 * 16.0);
            assert_eq!(s.scheduler.pending.len(), 1);
        }
        assert_eq!(s.scheduler.requested, 6);
        assert_eq!(s.engine.advances, 5);
    }

    #[test]
    fn ghost_frame_after_pause_is_ignored() {
        let mut s = session(InitialState::Running);
        s.pause();
        let fills_before = s.surface().fills().count();
        s.on_frame(100.0);
        assert_eq!(s.engine.advances, 0);
        assert_eq!(s.state(), AnimationState::Paused);
        assert!(s.scheduler.pending.is_empty());
        assert_eq!(s.surface().fills().count(), fills_before);
    }

    #[test]
    fn burst_advances_then_renders_once() {
        let mut s = session(InitialState::Running);
        s.ticks_per_frame = TicksPerFrame::from_raw(7.0);
        s.surface.clear();
        fire(&mut s, 16.0);
        assert_eq!(s.engine.advances, 7);
        assert_eq!(s.surface().strokes(), 1);
        assert_eq!(s.surface().fills().count(), 48);
    }

    #[test]
    fn cycles_feed_frame_stats() {
        let mut s = session(InitialState::Running);
        fire(&mut s, 0.0);
        fire(&mut s, 20.0);
        fire(&mut s, 40.0);
        let snap = s.frame_stats().snapshot().unwrap();
        assert_eq!(snap.latest, 50);
        assert_eq!(s.frame_stats().len(), 2);
    }

    #[test]
    fn refused_schedule_falls_back_to_paused() {
        let mut s = session(InitialState::Paused);
        s.scheduler.refuse = true;
        s.play();
        assert_eq!(s.state(), AnimationState::Paused);

        s.scheduler.refuse = false;
        s.play();
        assert!(matches!(s.state(), AnimationState::Running(_)));
    }

    /// Scheduler whose cancel log outlives the session that owns it.
    struct SharedLogScheduler {
        next: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl FrameScheduler for SharedLogScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> Result<u32, HostError> {
            self.next += 1;
            Ok(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }

    fn shared_log_session(initial_state: InitialState, cancelled: &Rc<RefCell<Vec<u32>>>) -> Session<CountingEngine, SharedLogScheduler, RecordingSurface> {
        let params = SessionParams { initial_state, ..Default::default() };
        let scheduler = SharedLogScheduler { next: 0, cancelled: Rc::clone(cancelled) };
        Session::new(CountingEngine::new(GridSize::new(4, 4)), scheduler, RecordingSurface::new(), &params)
    }

    #[test]
    fn drop_cancels_pending_frame() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut s = shared_log_session(InitialState::Running, &cancelled);
        s.on_frame(16.0);
        let AnimationState::Running(handle) = s.state() else { panic!("not running") };
        drop(s);
        assert_eq!(*cancelled.borrow(), vec![handle]);
    }

    #[test]
    fn drop_while_paused_cancels_nothing() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let s = shared_log_session(InitialState::Paused, &cancelled);
        drop(s);
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn redraw_reflects_engine_state() {
        let params = UniverseParams { size: GridSize::new(8, 6), pattern: InitialPattern::Checkered };
        let mut s = session(InitialState::Paused);
        s.engine.inner = Universe::new(&params).unwrap();
        s.surface.clear();
        s.redraw();

        let rect = s.layout().cell_pixel_rect(0, 0);
        assert_eq!(s.surface().fill_at(rect.x + 1.0, rect.y + 1.0), Some("#000000"));
        let rect = s.layout().cell_pixel_rect(0, 1);
        assert_eq!(s.surface().fill_at(rect.x + 1.0, rect.y + 1.0), Some("#FFFFFF"));
    }
}
