use yew::prelude::*;

use crate::content::Page;

#[derive(Properties, PartialEq)]
pub struct CoverPageProps {
    pub page: Page,
    pub animations_enabled: bool,
}

#[function_component(CoverPage)]
pub fn cover_page(props: &CoverPageProps) -> Html {
    let fade = if props.animations_enabled { "fade-in-up" } else { "" };

    html! {
        <div class="cover">
            <div class={classes!("cover-inner", fade)}>
                <svg width="120" height="120" viewBox="0 0 120 120" class="cover-logo">
                    <circle cx="45" cy="60" r="30" fill="none" stroke="#3b82f6" stroke-width="3" />
                    <circle cx="75" cy="60" r="30" fill="none" stroke="#ef4444" stroke-width="3" />
                    <text x="30" y="65" class="cover-logo-a">{"A"}</text>
                    <text x="85" y="65" class="cover-logo-b">{"B"}</text>
                    <text x="57" y="45" class="cover-logo-cap">{"∩"}</text>
                </svg>

                <h1 class="cover-title">{ props.page.title }</h1>
                if let Some(subtitle) = props.page.subtitle {
                    <p class="cover-subtitle">{ subtitle }</p>
                }

                <div class="cover-symbols">
                    <span>{"∪"}</span>
                    <span>{"∩"}</span>
                    <span>{"⊆"}</span>
                    <span>{"∈"}</span>
                    <span>{"∅"}</span>
                </div>

                <div class="cover-blurb">
                    <p>{"An Interactive Digital Textbook"}</p>
                    <p class="cover-blurb-small">
                        {"Complete with animations, examples, and practice exercises"}
                    </p>
                </div>
            </div>

            <div class="cover-footnote mono">
                {"A ∪ B = {x | x ∈ A or x ∈ B}"}
            </div>
        </div>
    }
}
