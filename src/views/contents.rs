//! Table of contents: clickable chapter cards that jump straight to a
//! section's first page.

use yew::prelude::*;

struct Chapter {
    title: &'static str,
    pages: &'static str,
    // 0-based index of the section's first page.
    target: usize,
    icon: &'static str,
}

const CHAPTERS: &[Chapter] = &[
    Chapter { title: "Introduction to Sets", pages: "3-5", target: 2, icon: "📖" },
    Chapter { title: "Types of Sets", pages: "6-9", target: 5, icon: "🎯" },
    Chapter { title: "Representation of Sets", pages: "10-12", target: 9, icon: "🗂" },
    Chapter { title: "Operations on Sets", pages: "13-20", target: 12, icon: "🧮" },
    Chapter { title: "Equal vs Equivalent Sets", pages: "21-22", target: 20, icon: "✅" },
    Chapter { title: "Subsets & Power Sets", pages: "23-25", target: 22, icon: "👥" },
    Chapter { title: "Cardinality", pages: "26-27", target: 25, icon: "#️⃣" },
    Chapter { title: "Summary & Quiz", pages: "28-29", target: 27, icon: "📝" },
];

#[derive(Properties, PartialEq)]
pub struct ContentsPageProps {
    pub on_navigate: Callback<usize>,
    pub animations_enabled: bool,
}

#[function_component(ContentsPage)]
pub fn contents_page(props: &ContentsPageProps) -> Html {
    html! {
        <div class="toc">
            <div class="page-title centered">
                <h1>{"Table of Contents"}</h1>
                <p class="page-subtitle">{"Navigate through the chapters by clicking on any topic"}</p>
            </div>

            <div class="toc-grid">
                {
                    for CHAPTERS.iter().map(|chapter| {
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            let target = chapter.target;
                            Callback::from(move |_| on_navigate.emit(target))
                        };
                        html! {
                            <div class="toc-card" {onclick}>
                                <span class="toc-icon">{ chapter.icon }</span>
                                <div class="toc-card-body">
                                    <h3>{ chapter.title }</h3>
                                    <p class="toc-pages">{"Pages "}{ chapter.pages }</p>
                                    <p class="toc-hint">{"Click to jump to this section"}</p>
                                </div>
                                <span class="toc-arrow">{"→"}</span>
                            </div>
                        }
                    })
                }
            </div>

            <div class="toc-tips">
                <h3>{"Navigation Tips"}</h3>
                <div class="toc-tips-grid">
                    <div>{"• Use arrow keys ← → to navigate"}</div>
                    <div>{"• Press Home to return to cover"}</div>
                    <div>{"• Press End to go to references"}</div>
                </div>
            </div>
        </div>
    }
}
