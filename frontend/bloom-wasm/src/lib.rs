use std::cell::RefCell;
use std::thread_local;

pub mod carousel;
pub mod clock;
pub mod draw;
pub mod escalation;
pub mod page;
pub mod particle;
pub mod pool;
pub mod scene;

use carousel::{Direction, MessageCarousel};
use draw::Rgb;
use escalation::EscalationButton;
use page::{Page, INBOX_CAPACITY};

pub const BACKGROUND: Rgb = Rgb::new(0x0C, 0x2C, 0x40);

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn with_page<F, R>(default: R, mut f: F) -> R
where
    F: FnMut(&mut Page) -> R,
{
    PAGE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        if let Some(page) = borrow.as_mut() {
            f(page)
        } else {
            default
        }
    })
}

#[no_mangle]
pub extern "C" fn bloom_init(width: f32, height: f32, seed: u32) {
    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(Page::new(width as f64, height as f64, seed as u64));
    });
}

#[no_mangle]
pub extern "C" fn bloom_resize(width: f32, height: f32) {
    with_page((), |page| page.scene.resize(width as f64, height as f64));
}

/// Returns the number of ticks run for this frame.
#[no_mangle]
pub extern "C" fn bloom_step(delta_ms: f32) -> u32 {
    with_page(0, |page| page.step(delta_ms as f64) as u32)
}

#[no_mangle]
pub extern "C" fn bloom_tick() {
    with_page((), |page| {
        page.scene.tick();
        page.scene.render();
    });
}

#[no_mangle]
pub extern "C" fn bloom_reset() {
    with_page((), |page| page.reset());
}

#[no_mangle]
pub extern "C" fn bloom_background() -> u32 {
    BACKGROUND.packed()
}

#[no_mangle]
pub extern "C" fn bloom_draw_ptr() -> *const f32 {
    with_page(std::ptr::null(), |page| page.scene.draw_list().as_ptr())
}

#[no_mangle]
pub extern "C" fn bloom_draw_len() -> u32 {
    with_page(0, |page| page.scene.draw_list().len() as u32)
}

#[no_mangle]
pub extern "C" fn bloom_shape_count() -> u32 {
    with_page(0, |page| page.scene.draw_list().shape_count() as u32)
}

#[no_mangle]
pub extern "C" fn bloom_flower_count() -> u32 {
    with_page(0, |page| page.scene.flowers().len() as u32)
}

#[no_mangle]
pub extern "C" fn bloom_heart_count() -> u32 {
    with_page(0, |page| page.scene.hearts().len() as u32)
}

/// Where the page writes UTF-8 lyric text before `bloom_load_lyrics`.
#[no_mangle]
pub extern "C" fn bloom_inbox_ptr() -> *mut u8 {
    with_page(std::ptr::null_mut(), |page| page.inbox_mut().as_mut_ptr())
}

#[no_mangle]
pub extern "C" fn bloom_inbox_capacity() -> u32 {
    INBOX_CAPACITY as u32
}

#[no_mangle]
pub extern "C" fn bloom_load_lyrics(len: u32) {
    with_page((), |page| page.load_lyrics(len as usize));
}

/// Bumps the lyric resource counter; the result is the index to fetch next.
#[no_mangle]
pub extern "C" fn bloom_next_resource() -> u32 {
    with_page(0, |page| page.scene.advance_resource())
}

#[no_mangle]
pub extern "C" fn bloom_carousel_init(len: u32, debounce_ms: f32) {
    with_page((), |page| {
        page.carousel = MessageCarousel::new(len as usize, debounce_ms as f64);
    });
}

#[no_mangle]
pub extern "C" fn bloom_carousel_request(direction: i32, now_ms: f64) {
    with_page((), |page| {
        page.carousel.request(Direction::from_raw(direction), now_ms)
    });
}

/// Newly visible message index, or -1 while nothing has settled.
#[no_mangle]
pub extern "C" fn bloom_carousel_poll(now_ms: f64) -> i32 {
    with_page(-1, |page| {
        page.carousel
            .poll(now_ms)
            .map_or(-1, |index| index as i32)
    })
}

#[no_mangle]
pub extern "C" fn bloom_carousel_index() -> i32 {
    with_page(-1, |page| page.carousel.index() as i32)
}

#[no_mangle]
pub extern "C" fn bloom_escalation_init(prompt_count: u32, base_font_px: f64, growth: f64) {
    with_page((), |page| {
        page.escalation = EscalationButton::new(prompt_count as usize, base_font_px, growth);
    });
}

/// Index of the prompt to show, or -1 when no prompts are configured.
#[no_mangle]
pub extern "C" fn bloom_escalation_press() -> i32 {
    with_page(-1, |page| {
        page.escalation
            .press()
            .map_or(-1, |index| index as i32)
    })
}

#[no_mangle]
pub extern "C" fn bloom_escalation_font_px() -> f64 {
    with_page(0.0, |page| page.escalation.font_px())
}
