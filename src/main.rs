mod api;
mod catalog;
mod input;
mod locale;
mod time;
mod widgets;
mod wizard;

use std::{cell::RefCell, io, rc::Rc};

use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FrameClock;
use wizard::WizardApp;

/// Spinner animation rate while a request is in flight.
const TICKS_PER_SEC: u32 = 8;

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let x = mouse_x as f64 - rect.left();
    let y = mouse_y as f64 - rect.top();

    let col = pixel_to_cell(x, rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Wall-clock milliseconds from `performance.now()`; 0 when unavailable.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Run one event through the app, then drain the effect mailbox: a parked
/// payload means a submit happened this event, and exactly one request
/// leaves from here.
fn dispatch(app: &Rc<RefCell<WizardApp>>, event: InputEvent) {
    let payload = {
        let mut a = app.borrow_mut();
        a.handle_input(&event);
        a.state.take_pending_submit()
    };
    #[cfg(target_arch = "wasm32")]
    if let Some(payload) = payload {
        api::spawn_submit(app.clone(), payload);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = payload;
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(WizardApp::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new(TICKS_PER_SEC)));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                else {
                    return;
                };
                cs.hit_test(col, row)
            };

            if let Some(id) = action {
                web_sys::console::log_1(&format!("tap: action_id={id}").into());
                dispatch(&app, InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Char(c),
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Esc => InputEvent::Escape,
                _ => return,
            };
            dispatch(&app, event);
        }
    });

    terminal.draw_web({
        let app = app.clone();
        let click_state = click_state.clone();
        move |f| {
            let ticks = clock.borrow_mut().advance(now_ms());
            if ticks > 0 {
                app.borrow_mut().tick(ticks);
            }

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            app.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
