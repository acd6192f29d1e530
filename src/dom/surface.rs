use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::animation::{LayerFrame, ScrollState, Surface, VariantSpec};
use crate::config;

/// Anything inline styles can be written to.
pub trait StyleTarget {
    /// Returns false if the write was rejected.
    fn set_style(&self, property: &str, value: &str) -> bool;
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> bool {
        self.style().set_property(property, value).is_ok()
    }
}

/// Writes a style property only when it differs from the last write.
fn write_style<E: StyleTarget>(element: &E, property: &str, value: String, last: &mut Option<String>) {
    if last.as_deref() == Some(value.as_str()) {
        return;
    }
    if element.set_style(property, &value) {
        *last = Some(value);
    }
}

#[derive(Default)]
struct Written {
    opacity: Option<String>,
    transform: Option<String>,
    pointer_events: Option<String>,
}

struct BoundLayer<E> {
    element: E,
    written: Written,
    children: Vec<(E, Written)>,
}

/// Layer elements that were found on the page, keyed by layer id.
pub struct LayerSlots<E> {
    layers: HashMap<&'static str, BoundLayer<E>>,
}

impl<E: StyleTarget> LayerSlots<E> {
    /// `lookup` yields a layer's element and its child elements, or `None`
    /// when the layer is not on the page.
    pub fn bind<L>(spec: &VariantSpec, mut lookup: L) -> Self
    where
        L: FnMut(&str) -> Option<(E, Vec<E>)>,
    {
        let mut layers = HashMap::new();
        for layer in &spec.layers {
            match lookup(layer.id) {
                Some((element, children)) => {
                    let bound = BoundLayer {
                        element,
                        written: Written::default(),
                        children: children.into_iter().map(|el| (el, Written::default())).collect(),
                    };
                    layers.insert(layer.id, bound);
                }
                None => log::debug!("layer #{} is not on the page, skipping it", layer.id),
            }
        }
        Self { layers }
    }

    pub fn apply(&mut self, layer: &LayerFrame) {
        let Some(bound) = self.layers.get_mut(layer.id) else {
            return;
        };

        let element = &bound.element;
        write_style(element, "opacity", layer.state.css_opacity(), &mut bound.written.opacity);
        if layer.animates_transform {
            write_style(
                element,
                "transform",
                layer.state.css_transform(layer.transform_prefix),
                &mut bound.written.transform,
            );
        }
        if let Some(interactive) = layer.interactive {
            let value = if interactive { "auto" } else { "none" };
            write_style(element, "pointer-events", value.to_string(), &mut bound.written.pointer_events);
        }

        for ((child, written), state) in bound.children.iter_mut().zip(&layer.fragments) {
            write_style(child, "transform", state.css_transform(None), &mut written.transform);
        }
    }
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn child_elements(element: &HtmlElement) -> Vec<HtmlElement> {
    let collection = element.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Page elements of one variant, looked up once when the loop starts.
pub struct DomSurface {
    window: Window,
    hero: Option<HtmlElement>,
    order: Option<HtmlElement>,
    sticky: Option<HtmlElement>,
    layers: LayerSlots<HtmlElement>,
}

impl DomSurface {
    pub fn bind(spec: &VariantSpec) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let layers = LayerSlots::bind(spec, |id| {
            html_element(&document, id).map(|element| {
                let children = child_elements(&element);
                (element, children)
            })
        });

        let hero = html_element(&document, spec.hero_id);
        if hero.is_none() {
            log::warn!("hero #{} not found, reveal disabled", spec.hero_id);
        }

        Some(Self {
            hero,
            order: html_element(&document, config::ORDER_SECTION_ID),
            sticky: html_element(&document, config::STICKY_CTA_ID),
            layers,
            window,
        })
    }
}

impl Surface for DomSurface {
    fn scroll_state(&self) -> Option<ScrollState> {
        let hero = self.hero.as_ref()?;
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let rect = hero.get_bounding_client_rect();

        Some(ScrollState {
            scroll_y,
            viewport_height,
            hero_top: rect.top() + scroll_y,
            hero_height: rect.height(),
            order_top: self
                .order
                .as_ref()
                .map(|order| order.get_bounding_client_rect().top() + scroll_y),
        })
    }

    fn apply(&mut self, layer: &LayerFrame) {
        self.layers.apply(layer);
    }

    fn set_sticky_visible(&mut self, visible: bool) {
        let Some(sticky) = &self.sticky else {
            return;
        };
        if let Err(e) = sticky.class_list().toggle_with_force("is-on", visible) {
            log::debug!("sticky toggle failed: {:?}", e);
        }
        let _ = sticky.set_attribute("aria-hidden", if visible { "false" } else { "true" });
    }
}
