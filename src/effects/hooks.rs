use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::effects::browser::{mark_element_revealed, BrowserHost};
use crate::effects::host::MotionHost;
use crate::effects::parallax::{ParallaxEffect, ParallaxOffsets};
use crate::effects::reveal::RevealEffect;

/// Current backdrop offsets, refreshed at most once per animation frame.
#[hook]
pub fn use_parallax() -> ParallaxOffsets {
    let offsets = use_state(ParallaxOffsets::default);

    {
        let setter = offsets.setter();
        use_effect_with_deps(
            move |_| {
                let effect = match BrowserHost::new() {
                    Ok(host) => {
                        let motion = host.motion_preference();
                        let effect = ParallaxEffect::start(host, motion, move |next| setter.set(next));
                        if effect.is_active() {
                            info!("Parallax backdrop attached");
                        }
                        Some(effect)
                    }
                    Err(err) => {
                        warn!("Parallax disabled: {}", err);
                        None
                    }
                };
                move || drop(effect)
            },
            (), // Mount only; the motion preference is not re-read
        );
    }

    *offsets
}

/// Reveals every `.reveal` element under `root` as it scrolls into view.
#[hook]
pub fn use_reveal_on_scroll(root: NodeRef) {
    use_effect_with_deps(
        move |root: &NodeRef| {
            let targets = reveal_targets(root);
            let effect = match BrowserHost::new() {
                Ok(host) => {
                    let motion = host.motion_preference();
                    let effect = RevealEffect::start(host, targets, motion, REVEAL_THRESHOLD);
                    if !effect.is_observing() {
                        info!("{} sections shown without animation", effect.revealed_count());
                    }
                    Some(effect)
                }
                Err(err) => {
                    warn!("Reveal disabled, showing content: {}", err);
                    targets.iter().for_each(mark_element_revealed);
                    None
                }
            };
            move || drop(effect)
        },
        root,
    );
}

fn reveal_targets(root: &NodeRef) -> Vec<Element> {
    let Some(root) = root.cast::<Element>() else {
        return Vec::new();
    };
    let nodes = match root.query_selector_all(REVEAL_SELECTOR) {
        Ok(nodes) => nodes,
        Err(err) => {
            warn!("Could not collect reveal sections: {:?}", err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
