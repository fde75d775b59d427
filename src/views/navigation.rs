//! Bottom navigation bar: previous/next buttons (disabled at the
//! bounds), a progress bar, and a quick-jump dropdown over section
//! ranges.

use yew::prelude::*;

struct SectionRange {
    // 0-based inclusive page span.
    start: usize,
    end: usize,
    label: &'static str,
}

const SECTIONS: &[SectionRange] = &[
    SectionRange { start: 0, end: 0, label: "Cover" },
    SectionRange { start: 1, end: 1, label: "Contents" },
    SectionRange { start: 2, end: 8, label: "Introduction" },
    SectionRange { start: 9, end: 15, label: "Types & Representation" },
    SectionRange { start: 16, end: 24, label: "Operations" },
    SectionRange { start: 25, end: 27, label: "Properties" },
    SectionRange { start: 28, end: 28, label: "Quiz" },
    SectionRange { start: 29, end: 29, label: "References" },
];

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub current: usize,
    pub total: usize,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_go_to: Callback<usize>,
    pub animations_enabled: bool,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let show_sections = use_state(|| false);

    let at_first = props.current == 0;
    let at_last = props.current + 1 >= props.total;
    let progress = ((props.current + 1) * 100) / props.total.max(1);

    let on_previous = {
        let cb = props.on_previous.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_sections = {
        let show_sections = show_sections.clone();
        Callback::from(move |_| show_sections.set(!*show_sections))
    };

    html! {
        <div class="nav-bar">
            <button class="nav-btn" onclick={on_previous} disabled={at_first}>
                {"‹ Previous"}
            </button>

            <div class="nav-middle">
                <button class="nav-menu-btn" onclick={toggle_sections} title="Page Navigator">
                    {"☰"}
                </button>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%", progress)} />
                </div>
                <span class="nav-counter">{ props.current + 1 }{" / "}{ props.total }</span>
            </div>

            <button class="nav-btn" onclick={on_next} disabled={at_last}>
                {"Next ›"}
            </button>

            if *show_sections {
                <div class="nav-sections">
                    <h3>{"Quick Navigation"}</h3>
                    {
                        for SECTIONS.iter().map(|section| {
                            let active = props.current >= section.start && props.current <= section.end;
                            let onclick = {
                                let on_go_to = props.on_go_to.clone();
                                let show_sections = show_sections.clone();
                                let start = section.start;
                                Callback::from(move |_| {
                                    on_go_to.emit(start);
                                    show_sections.set(false);
                                })
                            };
                            let span = if section.start == section.end {
                                format!("Page {}", section.start + 1)
                            } else {
                                format!("Pages {}-{}", section.start + 1, section.end + 1)
                            };
                            html! {
                                <button
                                    class={if active { "nav-section nav-section-active" } else { "nav-section" }}
                                    {onclick}
                                >
                                    <div class="nav-section-label">{ section.label }</div>
                                    <div class="nav-section-span">{ span }</div>
                                </button>
                            }
                        })
                    }
                </div>
            }
        </div>
    }
}
