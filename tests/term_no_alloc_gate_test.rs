use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use space_wars::core::Game;
use space_wars::term::{ArenaView, FrameBuffer, Viewport};
use space_wars::types::Side;

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
fn term_render_into_does_not_allocate_after_warmup() {
    let view = ArenaView::default();
    let mut game = Game::new();
    game.round_mut().fire(Side::Red);
    game.round_mut().fire(Side::Yellow);
    let snap = game.snapshot();

    let vp = Viewport::new(160, 48);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    // Warm-up.
    view.render_into(&snap, None, vp, &mut fb);

    let allocs = with_alloc_counting(|| {
        for i in 0..100 {
            let banner = if i % 10 == 0 { Some("Yellow Wins!") } else { None };
            view.render_into(&snap, banner, vp, &mut fb);
        }
    });

    assert!(allocs == 0);
}
