//! Two-circle Venn diagram rendered as inline SVG. Element placement is
//! driven by the computed partition (only-A / both / only-B); hovering a
//! circle shows the roster for that region, and an optional operation
//! highlights the matching regions.

use yew::prelude::*;

use crate::content::VennOp;
use crate::sets::{difference, format_set, intersection, union};

#[derive(Clone, Copy, PartialEq)]
enum Region {
    OnlyA,
    OnlyB,
}

#[derive(Properties, PartialEq)]
pub struct VennProps {
    pub set_a: Vec<i32>,
    pub set_b: Vec<i32>,
    #[prop_or_default]
    pub op: Option<VennOp>,
    pub animations_enabled: bool,
}

// With an operation set, non-highlighted regions are grayed out rather
// than keeping their resting colors, so what the operation selects
// stands out (for intersection that is the overlap elements alone).
fn circle_class(region: Region, op: Option<VennOp>, hovered: Option<Region>, animations: bool) -> String {
    let motion = if animations { " venn-animated" } else { "" };
    if hovered == Some(region) {
        return format!("venn-circle venn-hovered{}", motion);
    }
    let highlighted = match op {
        Some(VennOp::Union) => true,
        Some(VennOp::Intersection) => false,
        Some(VennOp::Difference) => region == Region::OnlyA,
        None => {
            let side = if region == Region::OnlyA { "a" } else { "b" };
            return format!("venn-circle venn-{}{}", side, motion);
        }
    };
    if highlighted {
        format!("venn-circle venn-highlight{}", motion)
    } else {
        format!("venn-circle venn-muted{}", motion)
    }
}

#[function_component(VennDiagram)]
pub fn venn_diagram(props: &VennProps) -> Html {
    let hovered = use_state(|| Option::<Region>::None);

    let only_a = difference(&props.set_a, &props.set_b);
    let only_b = difference(&props.set_b, &props.set_a);
    let both = intersection(&props.set_a, &props.set_b);
    let all = union(&props.set_a, &props.set_b);

    let enter = |region: Region| {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(Some(region)))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let readout = match *hovered {
        Some(Region::OnlyA) => Some(format!("Only in A: {}", format_set(&only_a))),
        Some(Region::OnlyB) => Some(format!("Only in B: {}", format_set(&only_b))),
        None => None,
    };

    html! {
        <div class="venn">
            <svg width="400" height="300" viewBox="0 0 400 300" class="venn-svg">
                <rect width="400" height="300" fill="#f8fafc" />
                // Universal set frame
                <rect x="20" y="20" width="360" height="260" fill="none" stroke="#64748b" stroke-width="2" rx="8" />
                <text x="30" y="40" class="venn-u-label">{"U"}</text>

                <circle
                    cx="150" cy="150" r="80" stroke-width="2"
                    class={circle_class(Region::OnlyA, props.op, *hovered, props.animations_enabled)}
                    onmouseenter={enter(Region::OnlyA)}
                    onmouseleave={leave.clone()}
                />
                <circle
                    cx="250" cy="150" r="80" stroke-width="2" fill-opacity="0.7"
                    class={circle_class(Region::OnlyB, props.op, *hovered, props.animations_enabled)}
                    onmouseenter={enter(Region::OnlyB)}
                    onmouseleave={leave}
                />

                <text x="120" y="120" class="venn-label venn-label-a">{"A"}</text>
                <text x="280" y="120" class="venn-label venn-label-b">{"B"}</text>

                {
                    for only_a.iter().enumerate().map(|(i, item)| html! {
                        <text
                            x={(110 + (i % 3) * 15).to_string()}
                            y={(140 + (i / 3) * 20).to_string()}
                            class="venn-element venn-element-a"
                        >
                            { *item }
                        </text>
                    })
                }
                {
                    for both.iter().enumerate().map(|(i, item)| html! {
                        <text
                            x={(190 + (i % 2) * 20).to_string()}
                            y={(140 + (i / 2) * 20).to_string()}
                            class="venn-element venn-element-both"
                        >
                            { *item }
                        </text>
                    })
                }
                {
                    for only_b.iter().enumerate().map(|(i, item)| html! {
                        <text
                            x={(270 + (i % 3) * 15).to_string()}
                            y={(140 + (i / 3) * 20).to_string()}
                            class="venn-element venn-element-b"
                        >
                            { *item }
                        </text>
                    })
                }
            </svg>

            if let Some(line) = readout {
                <div class="venn-readout">{ line }</div>
            }

            <div class="venn-inputs">
                <div class="venn-input venn-input-a">
                    <div class="venn-input-name">{"Set A"}</div>
                    <div>{"A = "}{ format_set(&props.set_a) }</div>
                </div>
                <div class="venn-input venn-input-b">
                    <div class="venn-input-name">{"Set B"}</div>
                    <div>{"B = "}{ format_set(&props.set_b) }</div>
                </div>
            </div>

            <div class="venn-results">
                <div class="venn-result">
                    <span>{"Union (A ∪ B):"}</span>
                    <span class="mono">{ format_set(&all) }</span>
                </div>
                <div class="venn-result">
                    <span>{"Intersection (A ∩ B):"}</span>
                    <span class="mono">{ format_set(&both) }</span>
                </div>
                <div class="venn-result">
                    <span>{"Difference (A - B):"}</span>
                    <span class="mono">{ format_set(&only_a) }</span>
                </div>
                <div class="venn-result">
                    <span>{"Difference (B - A):"}</span>
                    <span class="mono">{ format_set(&only_b) }</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_operation_keeps_resting_colors() {
        assert_eq!(circle_class(Region::OnlyA, None, None, false), "venn-circle venn-a");
        assert_eq!(circle_class(Region::OnlyB, None, None, false), "venn-circle venn-b");
    }

    #[test]
    fn union_highlights_both_circles() {
        for region in [Region::OnlyA, Region::OnlyB] {
            assert_eq!(
                circle_class(region, Some(VennOp::Union), None, false),
                "venn-circle venn-highlight"
            );
        }
    }

    #[test]
    fn intersection_mutes_both_circles() {
        for region in [Region::OnlyA, Region::OnlyB] {
            let class = circle_class(region, Some(VennOp::Intersection), None, false);
            assert_eq!(class, "venn-circle venn-muted");
            assert_ne!(class, circle_class(region, None, None, false));
        }
    }

    #[test]
    fn difference_highlights_minuend_and_mutes_subtrahend() {
        assert_eq!(
            circle_class(Region::OnlyA, Some(VennOp::Difference), None, false),
            "venn-circle venn-highlight"
        );
        assert_eq!(
            circle_class(Region::OnlyB, Some(VennOp::Difference), None, false),
            "venn-circle venn-muted"
        );
    }

    #[test]
    fn hover_overrides_operation_highlighting() {
        assert_eq!(
            circle_class(Region::OnlyA, Some(VennOp::Intersection), Some(Region::OnlyA), true),
            "venn-circle venn-hovered venn-animated"
        );
    }
}
