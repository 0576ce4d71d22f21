//! Event bubbling through the element tree.

use crate::element::Element;

/// Whether an event keeps bubbling after a handler has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Elements from `root` down to the element with `id`, inclusive.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    if root.id == id {
        return Some(vec![root]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root);
            return Some(path);
        }
    }

    None
}

/// Call `handler` on the element with id `target` and then on each of its
/// ancestors, innermost first, until a handler returns [`Propagation::Stop`].
///
/// Returns false if `target` is not in the tree.
pub fn bubble<F>(root: &Element, target: &str, mut handler: F) -> bool
where
    F: FnMut(&Element) -> Propagation,
{
    let Some(path) = path_to(root, target) else {
        log::trace!("[dispatch] target {} not in tree", target);
        return false;
    };

    for element in path.into_iter().rev() {
        if handler(element) == Propagation::Stop {
            log::trace!("[dispatch] propagation stopped at {}", element.id);
            break;
        }
    }

    true
}
