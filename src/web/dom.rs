use web_sys::HtmlElement;
use yew::NodeRef;

use crate::motion::{MotionTarget, Pose};

/// A rendered element reached through a `NodeRef`.
#[derive(Clone, Debug, PartialEq)]
pub struct DomTarget(HtmlElement);

impl DomTarget {
    /// `None` when the ref is not attached yet.
    pub fn from_node_ref(node: &NodeRef) -> Option<Self> {
        node.cast::<HtmlElement>().map(Self)
    }
}

impl MotionTarget for DomTarget {
    fn apply(&self, pose: Pose) {
        let style = self.0.style();
        let _ = style.set_property("opacity", &format!("{:.4}", pose.opacity));
        let _ = style.set_property(
            "transform",
            &format!("translateY({:.2}px) scale({:.4})", pose.y, pose.scale),
        );
    }

    fn bounding_top(&self) -> Option<f64> {
        if !self.0.is_connected() {
            return None;
        }
        Some(self.0.get_bounding_client_rect().top())
    }

    fn same_element(&self, other: &Self) -> bool {
        // JS strict equality, i.e. the same node.
        self.0 == other.0
    }
}
