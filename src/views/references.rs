use yew::prelude::*;

struct ReferenceSection {
    category: &'static str,
    icon: &'static str,
    items: &'static [&'static str],
}

const REFERENCES: &[ReferenceSection] = &[
    ReferenceSection {
        category: "Textbooks",
        icon: "📚",
        items: &[
            "Rosen, K. H. (2018). Discrete Mathematics and Its Applications (8th ed.). McGraw-Hill Education.",
            "Johnsonbaugh, R. (2017). Discrete Mathematics (8th ed.). Pearson.",
            "Grimaldi, R. P. (2013). Discrete and Combinatorial Mathematics (5th ed.). Pearson.",
        ],
    },
    ReferenceSection {
        category: "Online Resources",
        icon: "🌐",
        items: &[
            "Khan Academy - Discrete Mathematics: https://www.khanacademy.org/math/discrete-math",
            "MIT OpenCourseWare - Mathematics for Computer Science",
            "Wolfram MathWorld - Set Theory: https://mathworld.wolfram.com/SetTheory.html",
        ],
    },
    ReferenceSection {
        category: "Academic Papers",
        icon: "🎓",
        items: &[
            "Cantor, G. (1874). \"Über eine Eigenschaft des Inbegriffes aller reellen algebraischen Zahlen\"",
            "Zermelo, E. (1908). \"Untersuchungen über die Grundlagen der Mengenlehre\"",
            "Fraenkel, A. (1922). \"Zu den Grundlagen der Cantor-Zermeloschen Mengenlehre\"",
        ],
    },
];

const CREDITS: &[&str] = &[
    "Interactive diagrams rendered as inline SVG",
    "Built with Rust, Yew, and WebAssembly",
    "Mathematical notation rendered using Unicode symbols",
];

// Items with an embedded URL render the prefix as the link label.
fn render_item(item: &'static str) -> Html {
    if let Some(pos) = item.find("http") {
        let label = item[..pos].trim_end_matches(": ");
        let url = &item[pos..];
        html! {
            <li>
                <a href={url} target="_blank" rel="noopener noreferrer">{ label }{" ↗"}</a>
            </li>
        }
    } else {
        html! { <li>{ item }</li> }
    }
}

#[derive(Properties, PartialEq)]
pub struct ReferencesPageProps {
    pub animations_enabled: bool,
}

#[function_component(ReferencesPage)]
pub fn references_page(props: &ReferencesPageProps) -> Html {
    let fade = if props.animations_enabled { "fade-in" } else { "" };

    html! {
        <div class="references">
            <div class="page-title centered">
                <h1>{"References & Credits"}</h1>
                <p class="page-subtitle">{"Sources and acknowledgments for this digital textbook"}</p>
            </div>

            <div class="reference-grid">
                {
                    for REFERENCES.iter().map(|section| html! {
                        <div class={classes!("reference-card", fade)}>
                            <div class="reference-head">
                                <span class="reference-icon">{ section.icon }</span>
                                <h3>{ section.category }</h3>
                            </div>
                            <ul class="reference-items">
                                { for section.items.iter().map(|item| render_item(*item)) }
                            </ul>
                        </div>
                    })
                }
            </div>

            <div class={classes!("credits", fade)}>
                <h3>{"Technical Credits"}</h3>
                <ul>
                    { for CREDITS.iter().map(|credit| html! { <li>{ *credit }</li> }) }
                </ul>
            </div>

            <div class={classes!("license-note", fade)}>
                <h3>{"License & Usage"}</h3>
                <p>{"This interactive digital textbook is created for educational purposes and is free to use for learning."}</p>
                <p>{"The content is based on standard discrete mathematics curriculum and widely accepted mathematical principles."}</p>
                <p>{"For commercial use or redistribution, please ensure compliance with relevant educational content licenses."}</p>
            </div>

            <div class="references-footer">
                {"Interactive Sets Textbook – created for educational purposes"}
            </div>
        </div>
    }
}
