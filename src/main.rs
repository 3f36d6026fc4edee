//! Word Bingo entry point
//!
//! Handles platform-specific initialization: on wasm32 this wires the DOM
//! board to the game controller; on native it just runs a smoke round.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent};

    use word_bingo::consts::GRID_SIZE;
    use word_bingo::game::{GameController, GamePhase};
    use word_bingo::storage::LocalStorageStore;
    use word_bingo::words::DEFAULT_WORDS;

    type SharedGame = Rc<RefCell<GameController<LocalStorageStore>>>;

    /// Sync cell text, cell classes, and the banner with the current state.
    fn render(document: &Document, game: &GameController<LocalStorageStore>) {
        let state = game.state();
        for (row, cells) in state.grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(el) = document.get_element_by_id(&format!("cell-{row}-{col}")) {
                    el.set_text_content(Some(&cell.word));
                    let class = if cell.selected { "cell selected" } else { "cell" };
                    let _ = el.set_attribute("class", class);
                }
            }
        }

        if let Some(banner) = document.get_element_by_id("banner") {
            let text = match game.phase() {
                GamePhase::Won => "Game Won!",
                GamePhase::Playing => "Word Bingo!",
            };
            banner.set_text_content(Some(text));
        }
    }

    /// Create the grid cells once and attach a click handler to each.
    fn build_board(document: &Document, game: &SharedGame) {
        let board = document.get_element_by_id("board").expect("no board element");

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = document.create_element("div").expect("create cell");
                cell.set_id(&format!("cell-{row}-{col}"));
                let _ = cell.set_attribute("class", "cell");

                let game = game.clone();
                let document = document.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().toggle_cell(row, col);
                    render(&document, &game.borrow());
                });
                let _ = cell
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();

                let _ = board.append_child(&cell);
            }
        }
    }

    fn setup_reset_button(document: &Document, game: &SharedGame) {
        let Some(btn) = document.get_element_by_id("reset") else {
            log::warn!("no reset button in page");
            return;
        };

        let game = game.clone();
        let document = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let seed = js_sys::Date::now() as u64;
            if let Err(err) = game.borrow_mut().reset(seed) {
                log::error!("Reset failed: {err}");
                return;
            }
            render(&document, &game.borrow());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Word Bingo starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        let game = GameController::new(LocalStorageStore::new(), DEFAULT_WORDS, seed)
            .expect("stock word pool is non-empty");
        let game: SharedGame = Rc::new(RefCell::new(game));

        build_board(&document, &game);
        setup_reset_button(&document, &game);
        render(&document, &game.borrow());

        log::info!("Board ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Word Bingo (native) starting...");
    log::info!("The playable board is the web build - run with `trunk serve`");

    smoke_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_round() {
    use word_bingo::consts::GRID_SIZE;
    use word_bingo::game::{GameController, GamePhase};
    use word_bingo::storage::MemoryStore;
    use word_bingo::words::DEFAULT_WORDS;

    let mut game = GameController::new(MemoryStore::new(), DEFAULT_WORDS, 0xB19_60)
        .expect("stock word pool is non-empty");
    for col in 0..GRID_SIZE {
        game.toggle_cell(0, col);
    }
    assert!(matches!(game.phase(), GamePhase::Won));
    println!("✓ Smoke round passed: top row completed, game won");
}
