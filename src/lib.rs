#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod motion;
pub mod scroll;

/// Attribute on `<html>` that arms the pre-reveal styles. Only set once WASM runs, so
/// visitors without it get fully opaque content.
pub const MOTION_ATTR: &str = "data-motion";

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use leptos::prelude::document;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);

    // only arm the pre-reveal styles once hydration has succeeded
    if let Some(root) = document().document_element() {
        if root.set_attribute(MOTION_ATTR, "on").is_err() {
            log::warn!("couldn't enable motion layer, rendering without transitions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MOTION_ATTR;

    const STYLESHEET: &str = include_str!("../input.css");

    #[test]
    fn test_hidden_pose_is_gated_on_motion_layer() {
        let gated = format!("html[{MOTION_ATTR}] [data-reveal=\"hidden\"]");
        assert!(STYLESHEET.contains(&gated));

        // every rule that hides a reveal element sits behind the motion attribute
        for (i, _) in STYLESHEET.match_indices("[data-reveal=\"hidden\"]") {
            let line_start = STYLESHEET[..i].rfind('\n').map_or(0, |n| n + 1);
            assert!(
                STYLESHEET[line_start..i].contains(&format!("[{MOTION_ATTR}]")),
                "ungated hidden rule at byte {i}"
            );
        }
    }
}
