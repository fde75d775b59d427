use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

mod content;
mod pager;
mod quiz;
mod sets;
mod views;

use pager::{Pager, PagerAction};
use views::book_page::BookPage;
use views::navigation::NavBar;

#[function_component(App)]
fn app() -> Html {
    let pages = content::pages();
    let total = pages.len();

    let pager = use_reducer(|| Pager::new(total));
    let animations_enabled = use_state(|| true);
    let show_settings = use_state(|| false);

    // Global keyboard navigation. Installed once on mount; the reducer
    // dispatcher always acts on current state, so the listener never
    // goes stale.
    {
        let dispatcher = pager.dispatcher();
        use_effect_with((), move |_| {
            let listener =
                EventListener::new(&gloo::utils::window(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let action = match event.key().as_str() {
                        "ArrowRight" => Some(PagerAction::Next),
                        "ArrowLeft" => Some(PagerAction::Previous),
                        "Home" => Some(PagerAction::GoTo(0)),
                        "End" => Some(PagerAction::GoTo(total - 1)),
                        _ => None,
                    };
                    if let Some(action) = action {
                        event.prevent_default();
                        dispatcher.dispatch(action);
                    }
                });
            move || drop(listener)
        });
    }

    let on_previous = {
        let pager = pager.clone();
        Callback::from(move |_: ()| pager.dispatch(PagerAction::Previous))
    };

    let on_next = {
        let pager = pager.clone();
        Callback::from(move |_: ()| pager.dispatch(PagerAction::Next))
    };

    let on_go_to = {
        let pager = pager.clone();
        Callback::from(move |page: usize| pager.dispatch(PagerAction::GoTo(page)))
    };

    let on_home = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::GoTo(0)))
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(true))
    };

    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };

    let toggle_animations = {
        let animations_enabled = animations_enabled.clone();
        Callback::from(move |_| animations_enabled.set(!*animations_enabled))
    };

    let current = pager.current();
    let page = pages[current].clone();

    html! {
        <div class="app-shell">
            // Faint notation scattered behind the page chrome.
            <div class="symbols-bg" aria-hidden="true">
                <span>{"∪"}</span>
                <span>{"∩"}</span>
                <span>{"⊆"}</span>
                <span>{"∈"}</span>
                <span>{"∅"}</span>
                <span>{"⊕"}</span>
                <span>{"℘"}</span>
                <span>{"∉"}</span>
            </div>

            if *show_settings {
                <div class="settings-overlay">
                    <div class="settings-panel">
                        <h3>{"Settings"}</h3>
                        <div class="settings-row">
                            <label>{"Enable Animations"}</label>
                            <button
                                class={if *animations_enabled { "switch switch-on" } else { "switch" }}
                                onclick={toggle_animations}
                            >
                                <span class="switch-knob" />
                            </button>
                        </div>
                        <div class="settings-help">
                            <p><kbd>{"←"}</kbd>{" "}<kbd>{"→"}</kbd>{" Navigate pages"}</p>
                            <p><kbd>{"Home"}</kbd>{" Go to cover"}</p>
                            <p><kbd>{"End"}</kbd>{" Go to references"}</p>
                        </div>
                        <button class="btn btn-primary" onclick={close_settings}>
                            {"Close"}
                        </button>
                    </div>
                </div>
            }

            <header class="app-header">
                <button class="home-btn" onclick={on_home} title="Go to Cover">
                    {"⌂ Sets Book"}
                </button>
                <div class="header-right">
                    <span class="page-indicator">
                        {"Page "}{ current + 1 }{" of "}{ total }
                    </span>
                    <button class="settings-btn" onclick={open_settings} title="Settings">
                        {"⚙"}
                    </button>
                </div>
            </header>

            <main class="book-area">
                <BookPage
                    {page}
                    animations_enabled={*animations_enabled}
                    on_navigate={on_go_to.clone()}
                />
            </main>

            <div class="nav-area">
                <NavBar
                    {current}
                    {total}
                    {on_previous}
                    {on_next}
                    {on_go_to}
                    animations_enabled={*animations_enabled}
                />
            </div>

            <footer class="footer">
                <span>{"v0.1.0 – Rust + Yew + WASM · Interactive Sets Textbook"}</span>
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
