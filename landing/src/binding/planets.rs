//! Decorative planets: discovery in the DOM and the transform sink.
//!
//! A planet is any element under the hero container carrying a
//! `data-depth="<float>"` attribute.

use stellar::{Transform, TransformSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

const PLANET_SELECTOR: &str = "[data-depth]";

pub struct Planet {
    pub name: String,
    pub depth: f64,
    element: HtmlElement,
}

/// Find every planet below `container`. Elements with an unparsable depth
/// are skipped with a warning.
pub fn discover(container: &Element) -> Result<Vec<Planet>, JsValue> {
    let nodes = container.query_selector_all(PLANET_SELECTOR)?;
    let mut planets = Vec::with_capacity(nodes.length() as usize);

    for i in 0..nodes.length() {
        let Some(element) = nodes
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let raw = element.get_attribute("data-depth").unwrap_or_default();
        let Ok(depth) = raw.trim().parse::<f64>() else {
            tracing::warn!(depth = %raw, "ignoring planet with invalid data-depth");
            continue;
        };

        let name = match element.id() {
            id if id.is_empty() => format!("planet-{i}"),
            id => id,
        };
        planets.push(Planet {
            name,
            depth,
            element,
        });
    }

    tracing::debug!(count = planets.len(), "planets discovered");
    Ok(planets)
}

/// Writes transforms into the planets' inline `transform` style.
pub struct DomTransformSink<'a> {
    planets: &'a [Planet],
}

impl<'a> DomTransformSink<'a> {
    pub fn new(planets: &'a [Planet]) -> Self {
        Self { planets }
    }
}

impl TransformSink for DomTransformSink<'_> {
    fn apply(&mut self, name: &str, transform: &Transform) {
        let Some(planet) = self.planets.iter().find(|p| p.name == name) else {
            return;
        };
        if let Err(e) = planet
            .element
            .style()
            .set_property("transform", &transform.to_css())
        {
            tracing::warn!(planet = name, "transform rejected: {:?}", e);
        }
    }
}
