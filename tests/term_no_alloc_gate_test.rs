use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blocktris::core::{GameConfig, GameSnapshot, SequenceRng, Session};
use blocktris::term::{for_each_changed_run, BoardView, SurfaceLayout, Viewport};
use blocktris::types::{GameAction, PALETTE};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn term_changed_runs_walk_is_allocation_free() {
    let viewport = Viewport::new(80, 24);
    let view = BoardView::new(SurfaceLayout::from_viewport(viewport, 20, 10), PALETTE);
    let mut session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));

    let mut snap = GameSnapshot::default();
    session.snapshot_into(&mut snap);
    let prev = view.render(&snap, viewport);

    session.apply_action(GameAction::HardDrop);
    session.snapshot_into(&mut snap);
    let next = view.render(&snap, viewport);

    let mut dirty = 0u32;
    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = for_each_changed_run(&prev, &next, |_, _, len| {
                dirty += len as u32;
                Ok(())
            });
        }
    });

    assert!(dirty > 0);
    assert_eq!(allocs, 0);
}

#[test]
fn term_snapshot_into_reuses_buffer() {
    let mut session = Session::new(GameConfig::default(), SequenceRng::new(vec![1, 0]));
    let mut snap = GameSnapshot::default();
    session.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            session.apply_action(GameAction::MoveLeft);
            session.apply_action(GameAction::MoveRight);
            session.snapshot_into(&mut snap);
        }
    });

    assert_eq!(allocs, 0);
}
