#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Keep the hosting script's floating attribution badge off the page.
///
/// Sweeps once after mount, then again on every change under `<body>` until the
/// owning component is torn down.
pub fn use_badge_sweeper() {
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| match sweeper::BadgeSweeper::start() {
        Ok(s) => {
            let handle = StoredValue::new_local(s);
            on_cleanup(move || handle.dispose());
        }
        Err(e) => log::warn!("could not observe document for attribution badge: {e:?}"),
    });
}

#[cfg(feature = "hydrate")]
mod sweeper {
    use leptos::prelude::document;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{HtmlElement, MutationObserver, MutationObserverInit};

    use crate::badge::{BadgeCandidate, BADGE_SELECTOR};

    pub struct BadgeSweeper {
        observer: MutationObserver,
        _callback: Closure<dyn FnMut()>,
    }

    impl BadgeSweeper {
        pub fn start() -> Result<Self, JsValue> {
            sweep();

            let callback = Closure::<dyn FnMut()>::new(sweep);
            let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
            let body = document()
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?;
            let init = MutationObserverInit::new();
            init.set_child_list(true);
            init.set_subtree(true);
            observer.observe_with_options(&body, &init)?;

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for BadgeSweeper {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    fn sweep() {
        let Ok(nodes) = document().query_selector_all(BADGE_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes
                .item(i)
                .and_then(|n| n.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let style = el.style();
            let candidate = BadgeCandidate {
                id: el.id(),
                text: el.text_content().unwrap_or_default(),
                has_svg: el.query_selector("svg").ok().flatten().is_some(),
                position: style.get_property_value("position").unwrap_or_default(),
                bottom: style.get_property_value("bottom").unwrap_or_default(),
            };
            if candidate.is_attribution_badge() {
                el.remove();
                log::info!("removed attribution badge #{}", candidate.id);
            }
        }
    }
}
