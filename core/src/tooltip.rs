//! Tooltip lifecycle binding for a single UI node.
//!
//! # Design
//! The widget library and the DOM node are external collaborators, reached
//! through the `TooltipNode` and `WidgetInstance` capabilities instead of a
//! global. `TooltipBinding` owns the current widget instance: `attach`
//! creates it, `update` disposes and recreates it seeded with the new text,
//! `dispose` (and `Drop`) releases it. The widget library offers no in-place
//! retitle, hence the dispose-and-recreate on update.

const TOGGLE_ATTR: &str = "data-bs-toggle";
const PLACEMENT_ATTR: &str = "data-bs-placement";
const CUSTOM_CLASS_ATTR: &str = "data-bs-custom-class";
const TITLE_ATTR: &str = "data-bs-title";
/// The native attribute is removed so the browser tooltip does not
/// double-display next to the widget.
const NATIVE_TITLE_ATTR: &str = "title";

const TOGGLE: &str = "tooltip";
const PLACEMENT: &str = "right";
const CUSTOM_CLASS: &str = "custom-tooltip";
const TRIGGER: &str = "hover focus";

/// Construction options handed to the widget library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub trigger: String,
    /// `None` lets the widget read the title attribute off the node.
    pub title: Option<String>,
}

/// The widget library's runtime object bound to one node.
pub trait WidgetInstance {
    fn dispose(&mut self);
}

/// Handle to the UI node a tooltip is bound to.
pub trait TooltipNode {
    type Widget: WidgetInstance;

    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
    fn create_widget(&mut self, config: WidgetConfig) -> Self::Widget;
}

/// An attached tooltip. Dropping the binding disposes the widget.
pub struct TooltipBinding<N: TooltipNode> {
    node: N,
    widget: Option<N::Widget>,
}

impl<N: TooltipNode> TooltipBinding<N> {
    /// Bind a hover/focus tooltip to `node` showing `content` (empty text
    /// when absent).
    pub fn attach(mut node: N, content: Option<&str>) -> Self {
        node.set_attribute(TOGGLE_ATTR, TOGGLE);
        node.set_attribute(PLACEMENT_ATTR, PLACEMENT);
        node.set_attribute(CUSTOM_CLASS_ATTR, CUSTOM_CLASS);
        node.set_attribute(TITLE_ATTR, content.unwrap_or(""));
        node.remove_attribute(NATIVE_TITLE_ATTR);
        let widget = node.create_widget(WidgetConfig {
            trigger: TRIGGER.to_string(),
            title: None,
        });
        Self { node, widget: Some(widget) }
    }

    /// Replace the displayed text: dispose the current widget (no-op when
    /// already gone) and create a fresh one seeded with the new text.
    pub fn update(&mut self, content: Option<&str>) {
        let content = content.unwrap_or("");
        self.node.set_attribute(TITLE_ATTR, content);
        self.node.remove_attribute(NATIVE_TITLE_ATTR);
        if let Some(mut widget) = self.widget.take() {
            widget.dispose();
        }
        self.widget = Some(self.node.create_widget(WidgetConfig {
            trigger: TRIGGER.to_string(),
            title: Some(content.to_string()),
        }));
    }

    /// Dispose the current widget if present. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.dispose();
        }
    }
}

impl<N: TooltipNode> Drop for TooltipBinding<N> {
    fn drop(&mut self) {
        self.dispose();
    }
}
