//! Retained SVG element list with keyed enter/update/exit joins.

use std::collections::BTreeMap;

use crate::angle::AngleId;
use crate::line::LineId;
use crate::point::PointId;
use crate::rotate::RotationHandler;

use super::write::fmt_num;

/// Identity of the datum an element is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatumKey {
    Grid(usize),
    Point(PointId),
    Line(LineId),
    Angle(AngleId),
}

/// `tag.class` selection, e.g. `circle.point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selector {
    pub tag: &'static str,
    pub class: &'static str,
}

impl Selector {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tag, self.class)
    }
}

#[derive(Clone, Debug)]
pub struct Element {
    selector: Selector,
    key: DatumKey,
    classes: Vec<String>,
    attrs: BTreeMap<&'static str, String>,
    style: BTreeMap<&'static str, String>,
    text: Option<String>,
    handler: Option<RotationHandler>,
}

impl Element {
    fn enter(selector: Selector, key: DatumKey) -> Self {
        Self {
            selector,
            key,
            classes: vec![selector.class.to_owned()],
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
            handler: None,
        }
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.selector.tag
    }
    #[inline]
    pub fn selector(&self) -> Selector {
        self.selector
    }
    #[inline]
    pub fn key(&self) -> DatumKey {
        self.key
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(k, v)| (*k, v.as_str()))
    }
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.attrs.insert(name, value.into());
        self
    }
    /// Numeric attribute, written compactly.
    pub fn set_num(&mut self, name: &'static str, value: f64) -> &mut Self {
        self.set_attr(name, fmt_num(value))
    }
    /// Attribute as a number, if present and parseable.
    pub fn num(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(|v| v.parse().ok())
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
    /// Add or remove `class`; the class list never holds duplicates.
    pub fn classed(&mut self, class: &str, on: bool) -> &mut Self {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_owned());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
        self
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
    pub fn styles(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.style.iter().map(|(k, v)| (*k, v.as_str()))
    }
    /// Set a style property; `None` removes it.
    pub fn set_style(&mut self, name: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => {
                self.style.insert(name, v.to_owned());
            }
            None => {
                self.style.remove(name);
            }
        }
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    pub fn set_text(&mut self, text: Option<&str>) -> &mut Self {
        self.text = text.map(str::to_owned);
        self
    }

    pub fn handler(&self) -> Option<&RotationHandler> {
        self.handler.as_ref()
    }
    pub(crate) fn handler_mut(&mut self) -> Option<&mut RotationHandler> {
        self.handler.as_mut()
    }
    pub(crate) fn set_handler(&mut self, handler: Option<RotationHandler>) {
        self.handler = handler;
    }
    pub(crate) fn take_handler(&mut self) -> Option<RotationHandler> {
        self.handler.take()
    }
}

/// Drawable surface owned by a graph. Document order is insertion order.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    elements: Vec<Element>,
}

impl Surface {
    /// Bind `keys` to the elements matching `sel`.
    ///
    /// Elements whose key is absent are removed (exit), missing ones are
    /// appended (enter). Returns element indices in the order of `keys`.
    pub fn join(&mut self, sel: Selector, keys: &[DatumKey]) -> Vec<usize> {
        let before = self.elements.len();
        self.elements
            .retain(|e| e.selector != sel || keys.contains(&e.key));
        let removed = before - self.elements.len();
        let mut entered = 0usize;
        let mut idx = Vec::with_capacity(keys.len());
        for &key in keys {
            let i = match self.position(sel, key) {
                Some(i) => i,
                None => {
                    self.elements.push(Element::enter(sel, key));
                    entered += 1;
                    self.elements.len() - 1
                }
            };
            idx.push(i);
        }
        tracing::debug!(selection = %sel, data = keys.len(), entered, removed, "join");
        idx
    }

    pub fn position(&self, sel: Selector, key: DatumKey) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.selector == sel && e.key == key)
    }

    pub fn find(&self, sel: Selector, key: DatumKey) -> Option<&Element> {
        self.position(sel, key).map(|i| &self.elements[i])
    }

    pub fn find_mut(&mut self, sel: Selector, key: DatumKey) -> Option<&mut Element> {
        self.position(sel, key).map(move |i| &mut self.elements[i])
    }

    pub fn select(&self, sel: Selector) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.selector == sel)
    }

    #[inline]
    pub fn element(&self, i: usize) -> &Element {
        &self.elements[i]
    }
    #[inline]
    pub fn element_mut(&mut self, i: usize) -> &mut Element {
        &mut self.elements[i]
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
